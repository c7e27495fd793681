//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are reasonable UX bounds for names and contact fields; the
//! store itself enforces no lengths.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Customer names
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone numbers, time slots
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(validate_required_text("", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Jane", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn rejects_over_limit() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
    }
}
