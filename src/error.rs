//! Error Types
//!
//! Crate-level error enum plus the normalization helper that flattens any
//! error chain into a single code-tagged, display-budgeted message for the
//! host to show. Wizard validators never reach this path; their failures are
//! data-level by design.

use thiserror::Error;

use crate::utils::truncate_str;

/// Byte budget for normalized messages shown inline by the host
const MAX_DISPLAY_BYTES: usize = 240;

/// Errors raised by the ambient surface (preferences I/O, logging init)
#[derive(Debug, Error)]
pub enum CrabflowError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Coarse classification carried alongside normalized messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Config,
    Io,
    Parse,
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Io => "io",
            Self::Parse => "parse",
            Self::Internal => "internal",
        }
    }
}

impl CrabflowError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Config(_) => ErrorCode::Config,
            Self::Io(_) => ErrorCode::Io,
            Self::TomlParse(_) | Self::TomlSerialize(_) => ErrorCode::Parse,
        }
    }
}

/// A single code-tagged message distilled from an error chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedError {
    pub code: ErrorCode,
    pub message: String,
}

/// Flatten an error chain into one displayable message. The code comes from
/// the first `CrabflowError` in the chain, `Internal` otherwise; the message
/// joins the chain and is cut to the display budget on a char boundary.
pub fn normalize(err: &anyhow::Error) -> NormalizedError {
    let code = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<CrabflowError>())
        .map(CrabflowError::code)
        .unwrap_or(ErrorCode::Internal);

    let full = format!("{err:#}");
    let message = truncate_str(&full, MAX_DISPLAY_BYTES).to_string();

    NormalizedError { code, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_per_variant() {
        assert_eq!(
            CrabflowError::Config("bad theme".to_string()).code(),
            ErrorCode::Config
        );
        let io = CrabflowError::from(std::io::Error::other("disk gone"));
        assert_eq!(io.code(), ErrorCode::Io);
    }

    #[test]
    fn test_normalize_finds_code_through_context() {
        let err = anyhow::Error::from(CrabflowError::Config("unknown language".to_string()))
            .context("loading preferences");
        let normalized = normalize(&err);
        assert_eq!(normalized.code, ErrorCode::Config);
        assert!(normalized.message.contains("loading preferences"));
        assert!(normalized.message.contains("unknown language"));
    }

    #[test]
    fn test_normalize_defaults_to_internal() {
        let err = anyhow::anyhow!("something odd");
        let normalized = normalize(&err);
        assert_eq!(normalized.code, ErrorCode::Internal);
        assert_eq!(normalized.message, "something odd");
    }

    #[test]
    fn test_normalize_caps_message_length() {
        let err = anyhow::anyhow!("x".repeat(2000));
        let normalized = normalize(&err);
        assert!(normalized.message.len() <= 240);
    }
}
