//! NIST SP 800-108 key derivation in counter mode
//!
//! Each block is `PRF(key, [i]_32 || fixed_input || [L]_32)` with the counter
//! `i` starting at 1 and `L` the output length in bits.

use crate::{KdfError, Result};
use hmac::Mac;
use hmac::digest::{KeyInit, OutputSizeUser};

/// Fill `output` using counter-mode SP 800-108 with PRF `M`
pub(crate) fn derive_ctr<M>(key: &[u8], fixed_input: &[u8], output: &mut [u8]) -> Result<()>
where
    M: Mac + KeyInit + Clone,
{
    let prf = <M as KeyInit>::new_from_slice(key)
        .map_err(|e| KdfError::KeyDerivation(format!("invalid PRF key: {e}")))?;

    let length_bits = output
        .len()
        .checked_mul(8)
        .and_then(|bits| u32::try_from(bits).ok())
        .ok_or_else(|| KdfError::invalid_argument("output length overflows 32-bit bit count"))?;

    let mut counter: u32 = 1;
    for block in output.chunks_mut(<M as OutputSizeUser>::output_size()) {
        let mut mac = prf.clone();
        mac.update(&counter.to_be_bytes());
        mac.update(fixed_input);
        mac.update(&length_bits.to_be_bytes());
        let digest = mac.finalize().into_bytes();
        block.copy_from_slice(&digest[..block.len()]);

        counter = counter
            .checked_add(1)
            .ok_or_else(|| KdfError::KeyDerivation("counter overflow".to_string()))?;
    }

    Ok(())
}
