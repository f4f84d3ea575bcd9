/// Fatal application errors
///
/// Nothing here is recovered from. Both variants carry the message SDL2
/// reported and propagate out of `main`, which exits non-zero.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Window, renderer or event pump could not be set up, or the
    /// embedded settings failed to parse
    #[error("Initialization failed: {0}")]
    Init(String),

    /// A drawing call on the window canvas failed
    #[error("Render failed: {0}")]
    Render(String),
}

impl AppError {
    pub fn init(message: impl Into<String>) -> Self {
        AppError::Init(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::init("No available video device");
        assert_eq!(err.to_string(), "Initialization failed: No available video device");

        let err = AppError::Render("Invalid renderer".to_string());
        assert_eq!(err.to_string(), "Render failed: Invalid renderer");
    }
}
