//! Byte-for-byte token fixtures, pinned so the wire format cannot drift
//! across implementations.

use std::fs;

use base64ct::{Base64, Encoding as _};
use keyed_tokens::{Algorithm, Encoding, FixedClock, SigningKey, TokenSigner};
use libtest_mimic::{Arguments, Failed, Trial};
use serde::Deserialize;

fn main() {
    let args = Arguments::from_args();

    let file = fs::read_to_string("tests/test-vectors/tokens.json").unwrap();
    let file: TestFile = serde_json::from_str(&file).unwrap();

    let key = SigningKey::from(Base64::decode_vec(&file.key).unwrap());
    let payload = file.payload.into_bytes();

    let mut tests = vec![];
    for Test { name, test_data } in file.tests {
        let key = key.clone();
        let payload = payload.clone();
        tests.push(Trial::test(name, move || test_data.run(&key, &payload)));
    }
    libtest_mimic::run(&args, tests).exit();
}

#[derive(Deserialize)]
struct TestFile {
    key: String,
    payload: String,
    tests: Vec<Test>,
}

#[derive(Deserialize)]
struct Test {
    name: String,
    #[serde(flatten)]
    test_data: TokenTest,
}

#[derive(Deserialize)]
struct TokenTest {
    algorithm: String,
    urlsafe: bool,
    #[serde(default)]
    timestamp: Option<u64>,
    token: String,
}

impl TokenTest {
    fn run(self, key: &SigningKey, payload: &[u8]) -> Result<(), Failed> {
        let algorithm: Algorithm = self.algorithm.parse()?;
        let encoding = if self.urlsafe {
            Encoding::UrlSafe
        } else {
            Encoding::Standard
        };
        let signer = TokenSigner::new(key.clone(), algorithm).with_encoding(encoding);

        match self.timestamp {
            Some(timestamp) => {
                let signer = signer.with_clock(FixedClock(timestamp));
                let built = signer.sign_timed(payload)?;
                if built != self.token {
                    return Err(format!("built `{built}`, expected `{}`", self.token).into());
                }
                // max age of zero at the exact issue instant is still valid
                let timed = signer.verify_timed(&self.token, Some(0))?;
                assert_eq!(timed.payload, payload);
                assert_eq!(timed.issued_at, timestamp);
            }
            None => {
                let built = signer.sign(payload)?;
                if built != self.token {
                    return Err(format!("built `{built}`, expected `{}`", self.token).into());
                }
                assert_eq!(signer.verify(&self.token)?, payload);
            }
        }
        Ok(())
    }
}
