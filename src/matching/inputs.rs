use serde::{Deserialize, Deserializer, Serialize};

use super::normalizer::Category;

/// Raw form state as submitted by the widget
///
/// Every field is optional and loosely typed: numbers may arrive as strings
/// and `adFree` may arrive as `"true"`/`"false"`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    #[serde(default, deserialize_with = "loose_string")]
    pub pdf_count: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub file_size: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub page_count: String,
    #[serde(default, deserialize_with = "loose_bool")]
    pub ad_free: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    Null(()),
}

impl LooseValue {
    fn into_text(self) -> String {
        match self {
            LooseValue::Text(text) => text,
            LooseValue::Number(number) => number.to_string(),
            LooseValue::Flag(flag) => flag.to_string(),
            LooseValue::Null(()) => String::new(),
        }
    }
}

fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(LooseValue::deserialize(deserializer)?.into_text())
}

fn loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LooseValue::deserialize(deserializer)? {
        LooseValue::Flag(flag) => flag,
        other => other.into_text().trim() == "true",
    })
}

/// User requirements after input recovery
///
/// `pdf_count` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInputs {
    pub pdf_count: u64,
    pub file_size: Category,
    pub page_count: Category,
    pub ad_free: bool,
}

impl UserInputs {
    pub fn new(pdf_count: u64, file_size: Category, page_count: Category, ad_free: bool) -> Self {
        Self {
            pdf_count: pdf_count.max(1),
            file_size,
            page_count,
            ad_free,
        }
    }

    /// Build inputs from raw form state, recovering from malformed values
    pub fn from_form(form: &FormInput) -> Self {
        Self::new(
            parse_pdf_count(&form.pdf_count),
            Category::parse(&form.file_size),
            Category::parse(&form.page_count),
            form.ad_free,
        )
    }
}

/// Parse the leading integer of a document count
///
/// Leading whitespace and a sign are accepted and trailing text is ignored
/// ("7 docs" is 7). Anything without leading digits, and any value below 1,
/// yields 1. Values too large for `u64` saturate.
pub fn parse_pdf_count(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 || negative {
        return 1;
    }

    rest[..digits_len].parse::<u64>().unwrap_or(u64::MAX).max(1)
}
