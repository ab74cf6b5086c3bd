//! Plan matching
//!
//! - normalizer: category labels to comparable values
//! - inputs: form state to validated user inputs
//! - matcher: one plan against one set of inputs under a policy
//! - selector: first matching plan per platform

pub mod inputs;
pub mod matcher;
pub mod normalizer;
pub mod selector;

pub use inputs::{FormInput, UserInputs};
pub use matcher::{MatchPolicy, MatchReport, Matcher};
pub use normalizer::{normalize, normalize_label, Category, Dimension, Normalized};
pub use selector::{select_first_match, select_for_catalog};
