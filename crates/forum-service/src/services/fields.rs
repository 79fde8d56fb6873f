//! Input normalisation shared by the services

use forum_core::DomainError;

/// Trimmed value of a mandatory text field; blank is `MissingField`
pub fn required_text(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Trimmed value of an optional text field; blank collapses to `None`
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Canonical form of an email address used for storage and lookup
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Mandatory email field in canonical form
pub fn required_email(value: &str) -> Result<String, DomainError> {
    let email = normalize_email(value);
    if email.is_empty() {
        return Err(DomainError::MissingField("email"));
    }
    Ok(email)
}

/// Mandatory password; checked for blankness but never altered
pub fn required_password(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert_eq!(required_text("title", "  Hello ").unwrap(), "Hello");
        assert!(matches!(
            required_text("title", "   "),
            Err(DomainError::MissingField("title"))
        ));
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(Some(" x ".to_string())), Some("x".to_string()));
        assert_eq!(optional_text(Some("  ".to_string())), None);
        assert_eq!(optional_text(None), None);
    }

    #[test]
    fn test_email_normalisation() {
        assert_eq!(normalize_email("  Ann@Example.COM "), "ann@example.com");
        assert!(required_email(" ").is_err());
    }

    #[test]
    fn test_password_whitespace_kept() {
        assert!(required_password("password", " secret ").is_ok());
        assert!(required_password("password", "\t").is_err());
    }
}
