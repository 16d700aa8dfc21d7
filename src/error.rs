//! Failure taxonomy for building and verifying tokens.

use std::fmt;

/// Errors from building or verifying tokens.
///
/// Every rejection of an untrusted token renders the same generic
/// [`Display`](fmt::Display) message, so error text shown to a token
/// holder cannot be turned into a verification oracle. Match on the
/// variant (or see [`Error::is_rejection`]) for internal diagnostics, and
/// keep that distinction out of responses. Errors never carry payload
/// bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The hash algorithm name is not in the registry.
    UnsupportedAlgorithm(String),
    /// The separator is empty or overlaps the codec's output alphabet.
    InvalidSeparator,
    /// The token does not split into the expected segments.
    MalformedToken,
    /// A segment is not valid unpadded base64 in the selected alphabet.
    MalformedEncoding,
    /// The timestamp segment is not an unsigned decimal integer.
    MalformedTimestamp,
    /// The recomputed signature does not match the token's.
    InvalidSignature,
    /// The timestamp is outside the allowed age.
    Expired,
}

impl Error {
    /// Whether this error rejects an untrusted token, as opposed to
    /// reporting a configuration mistake on the caller's own side.
    pub fn is_rejection(&self) -> bool {
        !matches!(
            self,
            Error::UnsupportedAlgorithm(_) | Error::InvalidSeparator
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedAlgorithm(name) => {
                write!(f, "unsupported hash algorithm `{name}`")
            }
            Error::InvalidSeparator => {
                f.write_str("separator is empty or overlaps the base64 alphabet")
            }
            // one message for every rejection of an untrusted token
            _ => f.write_str("token verification failed"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn rejections_share_one_message() {
        let rejections = [
            Error::MalformedToken,
            Error::MalformedEncoding,
            Error::MalformedTimestamp,
            Error::InvalidSignature,
            Error::Expired,
        ];
        for error in rejections {
            assert!(error.is_rejection());
            assert_eq!(error.to_string(), "token verification failed");
        }
        assert!(!Error::InvalidSeparator.is_rejection());
        assert!(!Error::UnsupportedAlgorithm("md5".into()).is_rejection());
    }
}
