use std::fmt;

use rand::distr::{Distribution, Uniform};
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore, TryRngCore};

use crate::alphabet::{
    ALPHABET, CAPACITY, PREFIX_LEN, SEPARATOR, SEPARATOR_LEN, is_alphanumeric,
};
use crate::error::{Result, YulidError};
use crate::prefix::derive_prefix;
use crate::yulid::Yulid;

/// The operating system CSPRNG. A failed read aborts the process.
struct SecureSource;

impl RngCore for SecureSource {
    fn next_u32(&mut self) -> u32 {
        OsRng
            .try_next_u32()
            .unwrap_or_else(|err| entropy_failure(&err))
    }

    fn next_u64(&mut self) -> u64 {
        OsRng
            .try_next_u64()
            .unwrap_or_else(|err| entropy_failure(&err))
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        if let Err(err) = OsRng.try_fill_bytes(dst) {
            entropy_failure(&err);
        }
    }
}

impl CryptoRng for SecureSource {}

/// No ID can be generated without entropy, so this does not unwind.
#[cold]
fn entropy_failure(err: &dyn fmt::Display) -> ! {
    tracing::error!(error = %err, "secure random source failed; aborting");
    std::process::abort()
}

impl Yulid {
    /// Generates a new ID with the given prefix and a random six character
    /// suffix drawn from the operating system CSPRNG.
    ///
    /// The prefix must be exactly four characters from `A-Z0-9`.
    ///
    /// If the OS random source fails, the process is aborted.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the prefix has the wrong length or contains a
    /// character outside the alphabet.
    pub fn new(prefix: &str) -> Result<Self> {
        Self::with_rng(prefix, &mut SecureSource)
    }

    /// Like [`Yulid::new`], drawing the suffix from `rng` instead.
    ///
    /// Nothing is drawn from `rng` when the prefix is rejected.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the prefix is rejected.
    pub fn with_rng<R: CryptoRng + ?Sized>(prefix: &str, rng: &mut R) -> Result<Self> {
        check_prefix(prefix)?;

        let mut raw = [0u8; CAPACITY];
        raw[..PREFIX_LEN].copy_from_slice(prefix.as_bytes());
        raw[PREFIX_LEN] = SEPARATOR;
        fill_suffix(rng, &mut raw[PREFIX_LEN + SEPARATOR_LEN..]);

        Ok(Self::from_raw(raw))
    }

    /// Generates a new ID whose prefix is derived from a person's name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if no prefix can be derived from `name`.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::new(&derive_prefix(name)?)
    }
}

/// Length first, so a wrong-length prefix never fails on a character.
fn check_prefix(prefix: &str) -> Result<()> {
    if prefix.len() != PREFIX_LEN {
        return Err(YulidError::invalid_input(prefix));
    }
    if !prefix.bytes().all(is_alphanumeric) {
        return Err(YulidError::invalid_input(prefix));
    }
    Ok(())
}

/// One uniform index in `0..36` per output byte. `Uniform::sample` redraws
/// when a word lands in the short last bucket.
fn fill_suffix<R: Rng + ?Sized>(rng: &mut R, out: &mut [u8]) {
    let Ok(index) = Uniform::new(0, ALPHABET.len()) else {
        unreachable!("alphabet is not empty");
    };
    for slot in out {
        *slot = ALPHABET[index.sample(rng)];
    }
}
