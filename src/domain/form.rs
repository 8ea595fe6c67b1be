//! Field-level validation for the create and statistics forms.
//!
//! Each check is a small function returning a typed error whose `Display` is
//! the exact text shown next to the field. The length bounds and the charset
//! check stay separate: [`validate_path_length`] knows nothing about the
//! alphabet and [`validate_characters`] knows nothing about length.

use std::fmt;

use crate::utils::identifier::validate_characters;
use crate::utils::url_validator::is_valid_http_url;

/// Minimum length of a user-supplied path.
pub const MIN_PATH_LENGTH: usize = 5;

/// Maximum length of a user-supplied path.
pub const MAX_PATH_LENGTH: usize = 128;

/// Validation failure of the original URL field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OriginalUrlError {
    #[error("Original URL is required")]
    Required,

    #[error("Original URL is invalid")]
    Invalid,
}

/// Validation failure of a short-link path field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("Path is required")]
    Required,

    #[error("Path is too short")]
    TooShort,

    #[error("Path is too long")]
    TooLong,

    #[error("Path must be alphanumeric")]
    NotAlphanumeric,
}

/// Per-field errors of a submitted form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub original_url: Option<OriginalUrlError>,
    pub custom_url_path: Option<PathError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.original_url.is_none() && self.custom_url_path.is_none()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields = Vec::with_capacity(2);
        if let Some(err) = &self.original_url {
            fields.push(format!("originalUrl: {err}"));
        }
        if let Some(err) = &self.custom_url_path {
            fields.push(format!("customUrlPath: {err}"));
        }
        f.write_str(&fields.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// Checks the original URL field.
pub fn validate_original_url(value: &str) -> Result<(), OriginalUrlError> {
    if value.is_empty() {
        return Err(OriginalUrlError::Required);
    }
    if !is_valid_http_url(value) {
        return Err(OriginalUrlError::Invalid);
    }
    Ok(())
}

/// Checks that a path length lies in `MIN_PATH_LENGTH..=MAX_PATH_LENGTH`.
///
/// Length is counted in `char`s.
pub fn validate_path_length(value: &str) -> Result<(), PathError> {
    match value.chars().count() {
        0 => Err(PathError::Required),
        n if n < MIN_PATH_LENGTH => Err(PathError::TooShort),
        n if n > MAX_PATH_LENGTH => Err(PathError::TooLong),
        _ => Ok(()),
    }
}

/// Checks a short-link path: length first, then charset.
pub fn validate_path(value: &str) -> Result<(), PathError> {
    validate_path_length(value)?;
    if !validate_characters(value) {
        return Err(PathError::NotAlphanumeric);
    }
    Ok(())
}

/// Input of the "create shortened URL" form.
///
/// `custom_url_path` is `None` when no custom path was requested and
/// `Some("")` when one was requested but left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateLinkForm {
    pub original_url: String,
    pub custom_url_path: Option<String>,
}

impl CreateLinkForm {
    pub fn new(original_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            custom_url_path: None,
        }
    }

    pub fn with_custom_path(mut self, path: impl Into<String>) -> Self {
        self.custom_url_path = Some(path.into());
        self
    }

    /// Validates every field and reports all failures at once.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors = FieldErrors {
            original_url: validate_original_url(&self.original_url).err(),
            custom_url_path: self
                .custom_url_path
                .as_deref()
                .and_then(|path| validate_path(path).err()),
        };

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_url_required() {
        assert_eq!(validate_original_url(""), Err(OriginalUrlError::Required));
    }

    #[test]
    fn test_original_url_invalid() {
        assert_eq!(
            validate_original_url("example.com"),
            Err(OriginalUrlError::Invalid)
        );
        assert_eq!(
            validate_original_url("ftp://example.com"),
            Err(OriginalUrlError::Invalid)
        );
    }

    #[test]
    fn test_original_url_valid() {
        assert!(validate_original_url("https://a.com").is_ok());
    }

    #[test]
    fn test_path_boundaries() {
        assert_eq!(validate_path(""), Err(PathError::Required));
        assert_eq!(validate_path("ab"), Err(PathError::TooShort));
        assert_eq!(validate_path("abcd"), Err(PathError::TooShort));
        assert!(validate_path("abcde").is_ok());
        assert!(validate_path(&"a".repeat(MAX_PATH_LENGTH)).is_ok());
        assert_eq!(
            validate_path(&"a".repeat(MAX_PATH_LENGTH + 1)),
            Err(PathError::TooLong)
        );
    }

    #[test]
    fn test_path_charset() {
        assert_eq!(validate_path("my-link"), Err(PathError::NotAlphanumeric));
        assert_eq!(validate_path("abc de"), Err(PathError::NotAlphanumeric));
        assert!(validate_path("MyLink2024").is_ok());
    }

    #[test]
    fn test_path_length_checked_before_charset() {
        assert_eq!(validate_path("a-b"), Err(PathError::TooShort));
        assert_eq!(
            validate_path(&"-".repeat(MAX_PATH_LENGTH + 1)),
            Err(PathError::TooLong)
        );
    }

    #[test]
    fn test_path_length_counts_chars() {
        // Five chars, more than five bytes.
        assert_eq!(validate_path_length("ééééé"), Ok(()));
        assert_eq!(validate_path("ééééé"), Err(PathError::NotAlphanumeric));
    }

    #[test]
    fn test_length_check_ignores_charset() {
        assert!(validate_path_length("!!!!!").is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(OriginalUrlError::Required.to_string(), "Original URL is required");
        assert_eq!(OriginalUrlError::Invalid.to_string(), "Original URL is invalid");
        assert_eq!(PathError::Required.to_string(), "Path is required");
        assert_eq!(PathError::TooShort.to_string(), "Path is too short");
        assert_eq!(PathError::TooLong.to_string(), "Path is too long");
        assert_eq!(
            PathError::NotAlphanumeric.to_string(),
            "Path must be alphanumeric"
        );
    }

    #[test]
    fn test_form_without_custom_path() {
        assert!(CreateLinkForm::new("https://a.com").validate().is_ok());
    }

    #[test]
    fn test_form_with_empty_custom_path() {
        let errors = CreateLinkForm::new("https://a.com")
            .with_custom_path("")
            .validate()
            .unwrap_err();

        assert_eq!(errors.original_url, None);
        assert_eq!(errors.custom_url_path, Some(PathError::Required));
    }

    #[test]
    fn test_form_collects_both_errors() {
        let errors = CreateLinkForm::new("")
            .with_custom_path("ab")
            .validate()
            .unwrap_err();

        assert_eq!(errors.original_url, Some(OriginalUrlError::Required));
        assert_eq!(errors.custom_url_path, Some(PathError::TooShort));
        assert_eq!(
            errors.to_string(),
            "originalUrl: Original URL is required; customUrlPath: Path is too short"
        );
    }

    #[test]
    fn test_form_valid_with_custom_path() {
        let form = CreateLinkForm::new("https://a.com").with_custom_path("promo2024");
        assert!(form.validate().is_ok());
    }
}
