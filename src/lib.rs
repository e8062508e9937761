//! Parameter sweeps for linear congruential generators.
//!
//! For every (seed, modulus) combination in a configured grid this
//! crate samples a fixed-length sequence from the recurrence
//! `x <- (multiplier * x + increment) mod m`, extracts the arithmetic
//! mean and a window-bounded cycle length, and averages the results
//! per modulus into an ordered summary table.
//!
//! The cycle length is the distance from the last sampled value back
//! to its nearest earlier duplicate, so it is a periodicity proxy
//! bounded by the sample window, not a proven period.
//!
//! ```
//! use lcg_sweep::{sweep, InternalModulus, SweepConfig};
//!
//! let config = SweepConfig {
//!     modulus_min: 10,
//!     modulus_max: 40,
//!     modulus_step: 10,
//!     sample_len: 1000,
//!     internal_modulus: InternalModulus::Mirror,
//!     ..SweepConfig::default()
//! };
//! let table = sweep(&config).unwrap();
//! assert_eq!(3, table.len());
//! assert_eq!(10, table[0].modulus);
//! ```

pub mod analysis;
pub mod error;
pub mod lcg;
pub mod report;
pub mod sequence;
pub mod sweep;

pub use analysis::{analyze, cycle_length, mean, SequenceStats};
pub use error::{ConfigError, SweepError};
pub use lcg::Lcg;
pub use report::write_report;
pub use sequence::generate;
pub use sweep::{
    average_over_seeds, sweep, sweep_with, AggregateStats, InternalModulus, SweepConfig,
    SweepResult, DEFAULT_SAMPLE_LEN,
};

// LCG multipliers from Steele, G. and Vigna, S.,
// Computationally Easy, Spectrally Good Multipliers for
// Congruential Pseudorandom Number Generators (2020).
// Useful sweep inputs when a spectrally good recurrence is wanted
// rather than a deliberately weak one.

pub const LCG_M64_1: u64 = 0xd1342543de82ef95;
pub const LCG_M64_2: u64 = 0xaf251af3b0f025b5;
pub const LCG_M64_3: u64 = 0xb564ef22ec7aece5;
pub const LCG_M64_4: u64 = 0xf7c2ebc08f67f2b5;
