//! The closed set of hash algorithms tokens can be signed with.

use std::fmt;
use std::str::FromStr;

use digest::{KeyInit, Mac};
use hmac::Hmac;

use crate::Error;

/// Hash primitive underlying a token's HMAC signature.
///
/// The set is closed on purpose: the algorithm is not embedded in the
/// token, so signer and verifier agree on it out-of-band and every variant
/// must stay exhaustively matchable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HMAC-SHA1, 20 byte digests. Legacy use only.
    Sha1,
    /// HMAC-SHA256, 32 byte digests.
    Sha256,
    /// HMAC-SHA384, 48 byte digests.
    Sha384,
    /// HMAC-SHA512, 64 byte digests.
    Sha512,
}

impl Algorithm {
    /// Every supported algorithm, in registry order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
    ];

    /// The registry name, e.g. `"sha256"`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Length in bytes of the raw digest this algorithm produces.
    pub fn digest_len(self) -> usize {
        match self {
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
            Algorithm::Sha384 => 48,
            Algorithm::Sha512 => 64,
        }
    }

    /// HMAC digest of `message` under `key`.
    ///
    /// RFC 2104 accepts keys of any length: long keys are hashed down,
    /// short ones padded to the block size.
    pub(crate) fn mac(self, key: &[u8], message: &[u8]) -> Vec<u8> {
        match self {
            Algorithm::Sha1 => keyed_digest::<Hmac<sha1::Sha1>>(key, message),
            Algorithm::Sha256 => keyed_digest::<Hmac<sha2::Sha256>>(key, message),
            Algorithm::Sha384 => keyed_digest::<Hmac<sha2::Sha384>>(key, message),
            Algorithm::Sha512 => keyed_digest::<Hmac<sha2::Sha512>>(key, message),
        }
    }
}

fn keyed_digest<M: Mac + KeyInit>(key: &[u8], message: &[u8]) -> Vec<u8> {
    let mut mac = <M as Mac>::new_from_slice(key).expect("hmac accepts keys of any length");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Case-sensitive, no aliases.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "sha1" => Ok(Algorithm::Sha1),
            "sha256" => Ok(Algorithm::Sha256),
            "sha384" => Ok(Algorithm::Sha384),
            "sha512" => Ok(Algorithm::Sha512),
            _ => Err(Error::UnsupportedAlgorithm(s.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Algorithm;
    use crate::Error;

    #[test]
    fn resolve_names() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn unknown_names_rejected() {
        for name in ["", "SHA256", "sha-256", "md5", "sha224", "sha512/256"] {
            assert_eq!(
                name.parse::<Algorithm>(),
                Err(Error::UnsupportedAlgorithm(name.to_owned())),
            );
        }
    }

    #[test]
    fn digest_lengths() {
        for algorithm in Algorithm::ALL {
            let digest = algorithm.mac(b"key", b"message");
            assert_eq!(digest.len(), algorithm.digest_len());
        }
    }

    // RFC 2202 / RFC 4231 test case 1
    #[test]
    fn rfc_vectors() {
        let key = [0x0b; 20];
        let expected = [
            "b617318655057264e28bc0b6fb378c8ef146be00",
            "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7",
            "afd03944d84895626b0825f4ab46907f15f9dadbe4101ec682aa034c7cebc59cfaea9ea9076ede7f4af152e8b2fa9cb6",
            "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cdedaa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854",
        ];
        for (algorithm, expected) in Algorithm::ALL.into_iter().zip(expected) {
            assert_eq!(hex::encode(algorithm.mac(&key, b"Hi There")), expected);
        }
    }
}
