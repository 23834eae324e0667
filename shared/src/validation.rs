use derive_more::Display;

/// Input problems caught before any request is sent. The display text is
/// shown to the user as is.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[display(fmt = "Select an image first")]
    NoFileSelected,
    #[display(fmt = "Enter image path")]
    EmptyImagePath,
}

impl std::error::Error for ValidationError {}

pub fn require_file<F>(selected: Option<F>) -> Result<F, ValidationError> {
    selected.ok_or(ValidationError::NoFileSelected)
}

/// Only an empty path is rejected; whitespace is sent as typed.
pub fn require_image_path(path: &str) -> Result<&str, ValidationError> {
    if path.is_empty() {
        Err(ValidationError::EmptyImagePath)
    } else {
        Ok(path)
    }
}
