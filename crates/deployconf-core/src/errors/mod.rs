use std::error::Error;

/// Base trait for all engine errors
pub trait SettingsError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error was caused by user-supplied input rather than a defect
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the engine
pub type SettingsResult<T> = Result<T, Box<dyn SettingsError>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::errors::AccessError;

    #[test]
    fn test_settings_result() {
        let _result: SettingsResult<i32> = Ok(42);
    }

    #[test]
    fn test_boxed_error_keeps_code() {
        let result: SettingsResult<()> = Err(Box::new(AccessError::ReadDenied {
            path: "/etc/deployment.properties".to_string(),
        }));
        let error = result.unwrap_err();
        assert_eq!(error.error_code(), "ACCESS_READ_DENIED");
        assert!(!error.is_user_error());
    }
}
