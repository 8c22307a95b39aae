use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum EaselError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("canvas.max_commands = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: canvas.max_commands = 0"
        );
    }

    #[test]
    fn easel_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: EaselError = config_err.into();
        assert!(matches!(err, EaselError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn easel_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: EaselError = io_err.into();
        assert!(matches!(err, EaselError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn easel_error_other_displays_message() {
        let err = EaselError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
