//! Error types for the colours core.

use thiserror::Error;

/// Errors produced while interpreting colour input.
///
/// Conversions themselves never fail; these only arise when a string has
/// to be turned into a colour or an option.
#[derive(Debug, Error)]
pub enum ColourError {
    /// A hex colour string could not be parsed.
    #[error("invalid hex colour: {0}")]
    InvalidHex(String),

    /// No preset colour has this name.
    #[error("unknown preset colour: {0}")]
    UnknownPreset(String),

    /// No colour scheme has this name.
    #[error("unknown colour scheme: {0}")]
    UnknownScheme(String),

    /// No colour model has this name.
    #[error("unknown colour model: {0}")]
    UnknownFormulation(String),

    /// No hue-wrap mode has this name.
    #[error("unknown hue wrap mode: {0}")]
    UnknownHueWrap(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_hex_includes_message() {
        let err = ColourError::InvalidHex("expected at most 6 hex digits, got 8".into());
        let msg = format!("{err}");
        assert!(msg.contains("hex"), "missing kind in: {msg}");
        assert!(msg.contains("got 8"), "missing detail in: {msg}");
    }

    #[test]
    fn unknown_preset_includes_name() {
        let err = ColourError::UnknownPreset("chartreuze".into());
        let msg = format!("{err}");
        assert!(
            msg.contains("chartreuze"),
            "expected message containing 'chartreuze', got: {msg}"
        );
    }

    #[test]
    fn unknown_scheme_includes_name() {
        let err = ColourError::UnknownScheme("tetrad".into());
        assert!(err.to_string().contains("tetrad"));
    }

    #[test]
    fn unknown_hue_wrap_includes_name() {
        let err = ColourError::UnknownHueWrap("clamp".into());
        assert!(err.to_string().contains("clamp"));
    }

    #[test]
    fn colour_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColourError>();
    }

    #[test]
    fn colour_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ColourError>();
    }
}
