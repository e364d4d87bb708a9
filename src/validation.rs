use chrono::NaiveDate;

use crate::error::{PortalError, PortalResult};

/// Format the seed data uses for event dates ("Nov 12, 2023").
pub const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";

/// Format produced by a date form field ("2023-11-12").
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> PortalResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(PortalError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parses a date typed into a form, accepting either the form field format
/// or the display format.
pub fn form_date(value: &str, field: &str) -> PortalResult<NaiveDate> {
    let trimmed = non_blank(value, field)?;
    NaiveDate::parse_from_str(&trimmed, FORM_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(&trimmed, DISPLAY_DATE_FORMAT))
        .map_err(|_| PortalError::InvalidDate { value: trimmed })
}
