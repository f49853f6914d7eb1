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
pub enum MediaError {
    #[error("playback rejected: {0}")]
    PlaybackRejected(String),

    #[error("media unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("script error: {0}")]
    Script(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SwipeNavError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Media(#[from] MediaError),

    #[error(transparent)]
    Dom(#[from] DomError),

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

        let err = ConfigError::ValidationError("grid.panels is empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: grid.panels is empty"
        );
    }

    #[test]
    fn media_error_display() {
        let err = MediaError::PlaybackRejected("NotAllowedError".into());
        assert_eq!(err.to_string(), "playback rejected: NotAllowedError");

        let err = MediaError::Unavailable("feature-video".into());
        assert_eq!(err.to_string(), "media unavailable: feature-video");
    }

    #[test]
    fn dom_error_display() {
        assert_eq!(DomError::NoWindow.to_string(), "no global window");
        let err = DomError::MissingElement("#viewport".into());
        assert_eq!(err.to_string(), "element not found: #viewport");
    }

    #[test]
    fn swipenav_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: SwipeNavError = config_err.into();
        assert!(matches!(err, SwipeNavError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn swipenav_error_from_media() {
        let err: SwipeNavError = MediaError::PlaybackRejected("autoplay".into()).into();
        assert!(matches!(err, SwipeNavError::Media(_)));
        assert!(err.to_string().contains("autoplay"));
    }

    #[test]
    fn swipenav_error_from_dom() {
        let err: SwipeNavError = DomError::Script("TypeError: style is null".into()).into();
        assert!(matches!(err, SwipeNavError::Dom(_)));
        assert_eq!(err.to_string(), "script error: TypeError: style is null");
    }

    #[test]
    fn swipenav_error_other() {
        let err = SwipeNavError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
