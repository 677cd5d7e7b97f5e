//! Test support for the secp256k1-pubkey workspace
//!
//! Randomized tests draw from a [`TestRng`], which is seeded once per test
//! and reports its seed only when the test fails. Set
//! `SECP256K1_PUBKEY_TEST_SEED` to replay a reported seed.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use secp256k1_pubkey_algorithms::ec::k256::{FieldElement, K256_FIELD_ELEMENT_SIZE};

/// Environment variable that pins the seed of every [`TestRng`]
pub const SEED_ENV: &str = "SECP256K1_PUBKEY_TEST_SEED";

/// A per-test ChaCha8 generator that prints its seed if the test panics.
pub struct TestRng {
    seed: u64,
    inner: ChaCha8Rng,
}

impl TestRng {
    /// Seed from `SECP256K1_PUBKEY_TEST_SEED` when set, otherwise from the OS.
    pub fn new() -> Self {
        let seed = match std::env::var(SEED_ENV) {
            Ok(value) => parse_seed(&value)
                .unwrap_or_else(|| panic!("{SEED_ENV} is not a u64: {value:?}")),
            Err(_) => rand::thread_rng().gen(),
        };
        Self::from_seed_u64(seed)
    }

    /// A generator with a fixed seed.
    pub fn from_seed_u64(seed: u64) -> Self {
        TestRng {
            seed,
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The seed this generator started from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A uniformly random canonical field element.
    pub fn field_element(&mut self) -> FieldElement {
        let mut bytes = [0u8; K256_FIELD_ELEMENT_SIZE];
        loop {
            self.inner.fill_bytes(&mut bytes);
            let candidate = FieldElement::from_bytes_canonical(&bytes);
            if let Some(fe) = Option::<FieldElement>::from(candidate) {
                return fe;
            }
        }
    }
}

impl Default for TestRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for TestRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

impl Drop for TestRng {
    fn drop(&mut self) {
        if std::thread::panicking() {
            eprintln!("test failed with {SEED_ENV}={}", self.seed);
        }
    }
}

/// Accepts decimal or `0x`-prefixed hex.
fn parse_seed(value: &str) -> Option<u64> {
    let value = value.trim();
    match value.strip_prefix("0x") {
        Some(digits) => u64::from_str_radix(digits, 16).ok(),
        None => value.parse().ok(),
    }
}

/// Decode a hex test vector, panicking on malformed input.
pub fn hex_vector(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|err| panic!("bad hex vector {s:?}: {err}"))
}

/// A field element from a big-endian hex literal, panicking on malformed input.
pub fn field_hex(s: &str) -> FieldElement {
    FieldElement::from_hex(s).unwrap_or_else(|err| panic!("bad field hex {s:?}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_parsing() {
        assert_eq!(parse_seed("42"), Some(42));
        assert_eq!(parse_seed(" 0xff "), Some(255));
        assert_eq!(parse_seed("nope"), None);
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let mut a = TestRng::from_seed_u64(7);
        let mut b = TestRng::from_seed_u64(7);
        assert_eq!(a.seed(), 7);
        assert_eq!(a.next_u64(), b.next_u64());
        assert_eq!(a.field_element(), b.field_element());
    }

    #[test]
    fn test_field_element_is_canonical() {
        let mut rng = TestRng::new();
        for _ in 0..32 {
            assert!(rng.field_element().is_normalized());
        }
    }
}
