use super::models::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("content.{field} must not be empty")]
    EmptyPath { field: &'static str },

    #[error("content.max_file_bytes must be positive")]
    InvalidMaxFileBytes,

    #[error("carousel.aspect_ratio '{value}' is not of the form 'W / H'")]
    InvalidAspectRatio { value: String },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_content(config)?;
    validate_carousel(config)?;
    Ok(())
}

fn validate_content(config: &Config) -> Result<(), ValidationError> {
    let paths = [
        ("projects_dir", &config.content.projects_dir),
        ("documents_file", &config.content.documents_file),
        ("profile_file", &config.content.profile_file),
        ("public_dir", &config.content.public_dir),
    ];
    for (field, path) in paths {
        if path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyPath { field });
        }
    }

    if config.content.max_file_bytes.as_u64() == 0 {
        return Err(ValidationError::InvalidMaxFileBytes);
    }

    Ok(())
}

fn validate_carousel(config: &Config) -> Result<(), ValidationError> {
    let value = &config.carousel.aspect_ratio;
    if parse_aspect_ratio(value).is_none() {
        return Err(ValidationError::InvalidAspectRatio {
            value: value.clone(),
        });
    }
    Ok(())
}

/// Parse `"16 / 9"` into its positive width and height.
pub fn parse_aspect_ratio(value: &str) -> Option<(f64, f64)> {
    let (width, height) = value.split_once('/')?;
    let width: f64 = width.trim().parse().ok()?;
    let height: f64 = height.trim().parse().ok()?;
    (width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite())
        .then_some((width, height))
}
