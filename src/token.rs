//! Building and verifying signed tokens.
//!
//! A token is ASCII drawn from one base64 alphabet plus the separator,
//! in one of two shapes:
//!
//! ```text
//! enc(payload) SEP enc(sig)                   plain
//! enc(payload) SEP enc(timestamp) SEP enc(sig)   timed
//! ```
//!
//! The signature always covers every byte before the final separator, so a
//! timed token binds payload and timestamp together: neither can be
//! swapped without invalidating the signature.

use subtle::ConstantTimeEq;

use crate::{
    algorithm::Algorithm,
    clock::{Clock, SystemClock, SKEW_TOLERANCE},
    encoding::Encoding,
    key::SigningKey,
    Error,
};

/// Default segment separator.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Signs payloads into compact tokens and verifies them again.
///
/// Stateless apart from its configuration: every call operates only on its
/// arguments, so a signer is freely shareable across threads.
///
/// ```
/// use keyed_tokens::{Algorithm, Encoding, SigningKey, TokenSigner};
///
/// let signer = TokenSigner::new(SigningKey::from("correct horse"), Algorithm::Sha256)
///     .with_encoding(Encoding::UrlSafe);
///
/// let token = signer.sign(b"session:42").unwrap();
/// assert_eq!(signer.verify(&token).unwrap(), b"session:42");
/// ```
#[derive(Debug, Clone)]
pub struct TokenSigner<C = SystemClock> {
    key: SigningKey,
    algorithm: Algorithm,
    encoding: Encoding,
    separator: String,
    clock: C,
}

/// Payload and creation time recovered from a timed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedToken {
    /// The authenticated payload.
    pub payload: Vec<u8>,
    /// Seconds since the Unix epoch at which the token was built.
    pub issued_at: u64,
}

impl TokenSigner<SystemClock> {
    /// A signer with the standard alphabet, `.` separator and wall-clock
    /// time.
    pub fn new(key: SigningKey, algorithm: Algorithm) -> Self {
        Self {
            key,
            algorithm,
            encoding: Encoding::Standard,
            separator: DEFAULT_SEPARATOR.to_owned(),
            clock: SystemClock,
        }
    }
}

impl<C> TokenSigner<C> {
    /// Selects the base64 alphabet. Set this before a custom separator, as
    /// separator validity depends on the alphabet.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Replaces the separator.
    ///
    /// Fails with [`Error::InvalidSeparator`] if the separator is empty or
    /// any of its bytes can occur in the codec's output.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Result<Self, Error> {
        self.separator = separator.into();
        self.check_separator()?;
        Ok(self)
    }

    /// Substitutes the time source, for tests and reproducible fixtures.
    ///
    /// ```
    /// use keyed_tokens::{Algorithm, FixedClock, SigningKey, TokenSigner};
    ///
    /// let signer = TokenSigner::new(SigningKey::from("k"), Algorithm::Sha1)
    ///     .with_clock(FixedClock(1_706_745_600));
    ///
    /// let token = signer.sign_timed(b"hello").unwrap();
    /// let timed = signer.verify_timed(&token, Some(3600)).unwrap();
    /// assert_eq!(timed.payload, b"hello");
    /// assert_eq!(timed.issued_at, 1_706_745_600);
    /// ```
    pub fn with_clock<D: Clock>(self, clock: D) -> TokenSigner<D> {
        TokenSigner {
            key: self.key,
            algorithm: self.algorithm,
            encoding: self.encoding,
            separator: self.separator,
            clock,
        }
    }

    fn check_separator(&self) -> Result<(), Error> {
        if self.separator.is_empty()
            || self
                .separator
                .bytes()
                .any(|b| self.encoding.alphabet_contains(b))
        {
            return Err(Error::InvalidSeparator);
        }
        Ok(())
    }

    /// Signs `pre_sig` and appends the encoded signature.
    fn append_signature(&self, mut pre_sig: String) -> String {
        let sig = self.algorithm.mac(self.key.as_bytes(), pre_sig.as_bytes());
        pre_sig.push_str(&self.separator);
        pre_sig.push_str(&self.encoding.encode(&sig));
        pre_sig
    }

    /// Splits off the signature segment and checks it in constant time.
    ///
    /// Returns the pre-signature part of the token, still encoded.
    fn check_signature<'a>(&self, token: &'a str) -> Result<&'a str, Error> {
        let (pre_sig, sig) = token
            .rsplit_once(self.separator.as_str())
            .ok_or(Error::MalformedToken)?;
        let expected = self.algorithm.mac(self.key.as_bytes(), pre_sig.as_bytes());
        let expected = self.encoding.encode(&expected);
        if sig.as_bytes().ct_ne(expected.as_bytes()).into() {
            return Err(Error::InvalidSignature);
        }
        Ok(pre_sig)
    }
}

impl<C: Clock> TokenSigner<C> {
    /// Builds a plain token over `payload`.
    pub fn sign(&self, payload: &[u8]) -> Result<String, Error> {
        self.check_separator()?;
        Ok(self.append_signature(self.encoding.encode(payload)))
    }

    /// Builds a timed token over `payload` and the clock's current time.
    ///
    /// The timestamp is rendered as ASCII decimal digits before encoding.
    pub fn sign_timed(&self, payload: &[u8]) -> Result<String, Error> {
        self.check_separator()?;
        let mut pre_sig = self.encoding.encode(payload);
        pre_sig.push_str(&self.separator);
        pre_sig.push_str(&self.encoding.encode(self.clock.now().to_string().as_bytes()));
        Ok(self.append_signature(pre_sig))
    }

    /// Checks a plain token and returns its payload.
    pub fn verify(&self, token: &str) -> Result<Vec<u8>, Error> {
        self.check_separator()?;
        let pre_sig = self.check_signature(token)?;
        self.encoding.decode(pre_sig)
    }

    /// Checks a timed token, enforcing `max_age` (in seconds) when given.
    ///
    /// The signature is checked before the timestamp is even parsed, so a
    /// forged timestamp never reaches the age logic. A valid timestamp
    /// more than [`SKEW_TOLERANCE`] seconds in the future also counts as
    /// [`Error::Expired`].
    pub fn verify_timed(&self, token: &str, max_age: Option<u64>) -> Result<TimedToken, Error> {
        self.check_separator()?;
        let pre_sig = self.check_signature(token)?;
        let (payload, timestamp) = pre_sig
            .split_once(self.separator.as_str())
            .ok_or(Error::MalformedToken)?;
        let issued_at = parse_timestamp(&self.encoding.decode(timestamp)?)?;
        if let Some(max_age) = max_age {
            let now = self.clock.now();
            // saturating on both sides: clocks near the ends of the u64
            // range must not wrap
            if issued_at.saturating_sub(SKEW_TOLERANCE) > now
                || now.saturating_sub(issued_at) > max_age
            {
                return Err(Error::Expired);
            }
        }
        Ok(TimedToken {
            payload: self.encoding.decode(payload)?,
            issued_at,
        })
    }
}

/// Parses decoded timestamp bytes as an unsigned decimal integer.
///
/// Stricter than `u64::from_str`: signs and leading `+` are rejected, only
/// ASCII digits are allowed. Overflow is [`Error::MalformedTimestamp`].
fn parse_timestamp(bytes: &[u8]) -> Result<u64, Error> {
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(Error::MalformedTimestamp);
    }
    std::str::from_utf8(bytes)
        .map_err(|_| Error::MalformedTimestamp)?
        .parse()
        .map_err(|_| Error::MalformedTimestamp)
}
