use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain cannot be empty
/// - API domain must be a valid URL, a dotted domain name, or localhost
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
/// - Page size must be at least one row
pub fn validate_config(
    api_domain: &str,
    log_file_path: &Option<String>,
    page_size: usize,
) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://")
        && !api_domain.starts_with("https://")
        && !api_domain.contains('.')
        && !api_domain.starts_with("localhost")
    {
        return Err(AppError::config_error(
            "API domain must be a valid URL or domain name",
        ));
    }

    if page_size == 0 {
        return Err(AppError::config_error("Page size must be at least 1"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_domain_forms() {
        for domain in [
            "http://localhost:8080",
            "https://stats.example.com",
            "stats.example.com",
            "localhost:8080",
        ] {
            assert!(validate_config(domain, &None, 50).is_ok(), "{domain}");
        }
    }

    #[test]
    fn test_rejects_invalid_settings() {
        assert!(validate_config("", &None, 50).is_err());
        assert!(validate_config("not-a-domain", &None, 50).is_err());
        assert!(validate_config("http://localhost:8080", &Some(String::new()), 50).is_err());
        assert!(validate_config("http://localhost:8080", &None, 0).is_err());
    }

    #[test]
    fn test_creates_missing_log_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("logs").join("cbb.log");

        validate_config(
            "http://localhost:8080",
            &Some(log_path.to_string_lossy().to_string()),
            50,
        )
        .unwrap();

        assert!(temp_dir.path().join("logs").exists());
    }
}
