use std::fmt::{self, Display};

/// Why a single share-link line was discarded.
///
/// Parsing is best-effort: these never reach the caller of `parse_all`,
/// they only feed the per-line debug log.
#[derive(Debug)]
pub enum ShareLinkError {
    BadBase64(base64::DecodeError),
    NotUtf8(std::string::FromUtf8Error),
    BadUri(url::ParseError),
    BadUserInfo,
}

/// Convert from base64::DecodeError.
impl From<base64::DecodeError> for ShareLinkError {
    fn from(err: base64::DecodeError) -> ShareLinkError {
        ShareLinkError::BadBase64(err)
    }
}

/// Convert from std::string::FromUtf8Error.
impl From<std::string::FromUtf8Error> for ShareLinkError {
    fn from(err: std::string::FromUtf8Error) -> ShareLinkError {
        ShareLinkError::NotUtf8(err)
    }
}

/// Convert from url::ParseError.
impl From<url::ParseError> for ShareLinkError {
    fn from(err: url::ParseError) -> ShareLinkError {
        ShareLinkError::BadUri(err)
    }
}

impl Display for ShareLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareLinkError::BadBase64(e) => write!(f, "invalid base64 segment: {}", e),
            ShareLinkError::NotUtf8(e) => write!(f, "decoded segment is not UTF-8: {}", e),
            ShareLinkError::BadUri(e) => write!(f, "invalid URI: {}", e),
            ShareLinkError::BadUserInfo => write!(f, "user-info is not a method:password pair"),
        }
    }
}

impl std::error::Error for ShareLinkError {}
