//! Compact HMAC-signed tokens.
//!
//! A token authenticates an arbitrary byte payload (and optionally its
//! creation time) under a secret key, as unpadded base64 segments joined
//! by a separator:
//!
//! | Shape | Layout                                            |
//! |-------|---------------------------------------------------|
//! | plain | `b64(payload) . b64(hmac)`                        |
//! | timed | `b64(payload) . b64(timestamp) . b64(hmac)`       |
//!
//! Payloads are recoverable by anyone; only integrity and authenticity
//! are guaranteed. The hash algorithm is not embedded in the token, so
//! signer and verifier agree on it out-of-band.
//!
//! ```
//! use keyed_tokens::{Algorithm, Encoding, SigningKey, TokenSigner};
//!
//! let signer = TokenSigner::new(SigningKey::from("correct horse"), Algorithm::Sha256)
//!     .with_encoding(Encoding::UrlSafe);
//!
//! let token = signer.sign(b"session:42").unwrap();
//! assert_eq!(signer.verify(&token).unwrap(), b"session:42");
//! ```

pub mod algorithm;
pub mod clock;
pub mod encoding;
pub mod error;
pub mod key;
pub mod token;

pub use crate::algorithm::Algorithm;
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::encoding::Encoding;
pub use crate::error::Error;
pub use crate::key::SigningKey;
pub use crate::token::{TimedToken, TokenSigner};
