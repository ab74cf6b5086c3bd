//! Frame resize signalling
//!
//! An embedded widget reports its rendered height to the parent page so the
//! host can size the iframe. Messages are only produced when the height
//! actually changes.

use serde::{Deserialize, Serialize};

/// Message kind understood by the host page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Resize,
}

/// `{"type": "resize", "height": N}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeMessage {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub height: u32,
}

impl ResizeMessage {
    pub fn new(height: u32) -> Self {
        Self {
            kind: MessageKind::Resize,
            height,
        }
    }
}

/// Remembers the last reported height
#[derive(Debug, Clone, Default)]
pub struct ResizeTracker {
    last_height: u32,
}

impl ResizeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observed height, returning a message if it changed
    pub fn observe(&mut self, height: u32) -> Option<ResizeMessage> {
        if height == self.last_height {
            return None;
        }

        self.last_height = height;
        Some(ResizeMessage::new(height))
    }

    pub fn last_height(&self) -> u32 {
        self.last_height
    }
}
