// Sample sequence generation: one buffer per seed, filled by driving
// the generator a fixed number of steps.

use crate::error::SweepError;
use crate::lcg::Lcg;

/// Drives a fresh generator `len` steps from `seed` and collects the
/// reported values in call order.
///
/// The buffer is reserved up front; if the reservation fails the whole
/// sweep is over, since every unit of work needs a buffer of this size.
pub fn generate(
    seed: u64,
    increment: u64,
    multiplier: u64,
    ext_modulus: u64,
    int_modulus: u64,
    len: usize,
) -> Result<Vec<u64>, SweepError> {
    let mut sequence = Vec::new();
    sequence
        .try_reserve_exact(len)
        .map_err(|source| SweepError::Allocation { len, source })?;

    let mut lcg = Lcg::new(seed, increment, multiplier, int_modulus);
    for _ in 0 .. len {
        sequence.push(lcg.next(ext_modulus));
    }

    Ok(sequence)
}
