//! Binary-to-text codecs for token segments.
//!
//! Every segment of a token (payload, timestamp, signature) is base64 with
//! the `=` padding stripped; the decoder derives the original length back
//! from the unpadded input. The URL-safe alphabet swaps `+/` for `-_` so
//! tokens can travel in URLs and cookies without escaping.

use base64ct::{Base64Unpadded, Base64UrlUnpadded, Encoding as _};

use crate::Error;

/// Base64 alphabet used for every segment of a token.
///
/// A token uses one alphabet consistently; mixing alphabets between
/// segments is not a valid token shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Standard alphabet (`+/`).
    #[default]
    Standard,
    /// URL-safe alphabet (`-_`).
    UrlSafe,
}

impl Encoding {
    /// Encodes `data`, with `=` padding stripped.
    pub fn encode(self, data: &[u8]) -> String {
        match self {
            Encoding::Standard => Base64Unpadded::encode_string(data),
            Encoding::UrlSafe => Base64UrlUnpadded::encode_string(data),
        }
    }

    /// Decodes an unpadded segment.
    ///
    /// Fails with [`Error::MalformedEncoding`] if the input carries `=`
    /// padding, bytes outside the alphabet, or an inconsistent length.
    pub fn decode(self, data: &str) -> Result<Vec<u8>, Error> {
        match self {
            Encoding::Standard => Base64Unpadded::decode_vec(data),
            Encoding::UrlSafe => Base64UrlUnpadded::decode_vec(data),
        }
        .map_err(|_| Error::MalformedEncoding)
    }

    /// Whether `byte` can occur in this alphabet's output or as padding.
    ///
    /// A separator must test false for every one of its bytes, otherwise
    /// splitting a token on it would be ambiguous.
    pub(crate) fn alphabet_contains(self, byte: u8) -> bool {
        let extra: &[u8] = match self {
            Encoding::Standard => b"+/=",
            Encoding::UrlSafe => b"-_=",
        };
        byte.is_ascii_alphanumeric() || extra.contains(&byte)
    }
}
