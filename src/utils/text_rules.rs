// utils/text_rules.rs

use crate::errors::AppError;

/// Trim-then-length rule for a user-supplied text field
#[derive(Debug, Clone, Copy)]
pub struct TextRule {
    field: &'static str,
    max_chars: usize,
}

impl TextRule {
    /// Chat titles: 1 to 200 characters
    pub const TITLE: TextRule = TextRule::new("title", 200);
    /// Message bodies: 1 to 5000 characters
    pub const MESSAGE_TEXT: TextRule = TextRule::new("text", 5000);

    pub const fn new(field: &'static str, max_chars: usize) -> Self {
        Self { field, max_chars }
    }

    /// Trims surrounding whitespace and checks the remaining length.
    /// Length is counted in characters, not bytes.
    pub fn apply(&self, raw: &str) -> Result<String, AppError> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();

        if len == 0 {
            return Err(AppError::validation(format!("empty {}", self.field)));
        }
        if len > self.max_chars {
            return Err(AppError::validation(format!("{} too long", self.field)));
        }

        Ok(trimmed.to_string())
    }
}
