use crate::utils::error::{FolioError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> FolioError {
    FolioError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// 帳號名稱只允許英數字與連字號，且不可以連字號開頭或結尾
pub fn validate_account_name(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.starts_with('-') || value.ends_with('-') {
        return Err(invalid(
            field_name,
            value,
            "Account name cannot start or end with a hyphen",
        ));
    }

    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(invalid(
            field_name,
            value,
            "Account name may only contain ASCII letters, digits and hyphens",
        ));
    }

    Ok(())
}

/// 接受 `#rgb` 與 `#rrggbb`
pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    let digits = value
        .strip_prefix('#')
        .ok_or_else(|| invalid(field_name, value, "Color must start with '#'"))?;

    if !matches!(digits.len(), 3 | 6) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid(
            field_name,
            value,
            "Color must be #rgb or #rrggbb hex notation",
        ));
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("github.api_base", "https://api.github.com").is_ok());
        assert!(validate_url("github.api_base", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("github.api_base", "").is_err());
        assert!(validate_url("github.api_base", "invalid-url").is_err());
        assert!(validate_url("github.api_base", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_account_name() {
        assert!(validate_account_name("site.account", "AmerAamir").is_ok());
        assert!(validate_account_name("site.account", "some-user-42").is_ok());
        assert!(validate_account_name("site.account", "").is_err());
        assert!(validate_account_name("site.account", "-leading").is_err());
        assert!(validate_account_name("site.account", "has/slash").is_err());
    }

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("accent", "#fff").is_ok());
        assert!(validate_hex_color("accent", "#1a2B3c").is_ok());
        assert!(validate_hex_color("accent", "fff").is_err());
        assert!(validate_hex_color("accent", "#ffff").is_err());
        assert!(validate_hex_color("accent", "#ggg").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("github.per_page", 100u32, 1, 100).is_ok());
        assert!(validate_range("github.per_page", 0u32, 1, 100).is_err());
        assert!(matches!(
            validate_range("github.per_page", 101u32, 1, 100),
            Err(FolioError::InvalidConfigValueError { .. })
        ));
    }
}
