use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("no API credential configured")]
    MissingCredential,

    #[error("could not determine the platform config directory")]
    NoConfigDir,

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ClonerError {
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

        let err = ConfigError::ValidationError("api.temperature = 3 is out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: api.temperature = 3 is out of range"
        );

        assert_eq!(
            ConfigError::MissingCredential.to_string(),
            "no API credential configured"
        );
    }

    #[test]
    fn cloner_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ClonerError = config_err.into();
        assert!(matches!(err, ClonerError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn cloner_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ClonerError = io_err.into();
        assert!(matches!(err, ClonerError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn write_error_names_the_path() {
        let err = ConfigError::Write {
            path: PathBuf::from("/ro/cloner/config.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to write /ro/cloner/config.toml: denied");
    }

    #[test]
    fn cloner_error_other_variant() {
        let err = ClonerError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
