//! Master key parsing and validation

use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Number of hex characters consumed from the custody key
const SEED_HEX_LEN: usize = 64;

/// The session master key issued by the key-custody provider.
///
/// Holds the 32-byte seed sliced from the front of the provider's hex
/// string. Both chains derive from this same slice; the slicing is a
/// compatibility constraint, since every previously derived address depends
/// on it byte for byte. The seed is erased when the key is dropped.
pub struct MasterKey {
    seed: [u8; 32],
}

impl MasterKey {
    /// Parse a hex-encoded master key as handed over by the custody provider.
    ///
    /// Accepts an optional `0x` prefix. Requires at least 64 hex characters
    /// after prefix stripping; anything beyond the first 64 is ignored.
    pub fn from_hex(master_key_hex: &str) -> Result<Self> {
        let hex_body = master_key_hex
            .strip_prefix("0x")
            .or_else(|| master_key_hex.strip_prefix("0X"))
            .unwrap_or(master_key_hex);

        let head = hex_body.get(..SEED_HEX_LEN).ok_or_else(|| {
            Error::KeyDerivation(format!(
                "Master key too short: {} hex characters, need {}",
                hex_body.len(),
                SEED_HEX_LEN
            ))
        })?;

        let bytes = hex::decode(head)
            .map_err(|e| Error::KeyDerivation(format!("Invalid master key hex: {}", e)))?;

        let mut seed = [0u8; 32];
        seed.copy_from_slice(&bytes);

        Ok(Self { seed })
    }

    /// The 32-byte seed shared by all chain derivations
    pub(crate) fn seed(&self) -> &[u8; 32] {
        &self.seed
    }
}

impl Drop for MasterKey {
    fn drop(&mut self) {
        self.seed.zeroize();
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasterKey").finish_non_exhaustive()
    }
}
