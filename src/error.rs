use std::collections::TryReserveError;
use thiserror::Error;

/// A configuration problem, detected before any generation runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("seed step may not be 0")]
    ZeroSeedStep,
    #[error("modulus step may not be 0")]
    ZeroModulusStep,
    #[error("minimum external modulus may not be 0")]
    ZeroModulus,
    #[error("fixed internal modulus may not be 0")]
    ZeroInternalModulus,
    #[error("seed range is inverted: max {max} < min {min}")]
    InvertedSeedRange { min: u64, max: u64 },
    #[error("modulus range is inverted: max {max} < min {min}")]
    InvertedModulusRange { min: u64, max: u64 },
    #[error("sample length may not be 0")]
    ZeroSampleLength,
}

/// Errors that abort a sweep. There are no retries and no partial
/// results: the first error terminates the whole computation.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("invalid sweep configuration: {0}")]
    Config(#[from] ConfigError),
    /// The working buffer for a sample sequence could not be obtained.
    /// Fatal: every unit of work needs this buffer, so there is no
    /// reduced-functionality fallback.
    #[error("failed to allocate a sample buffer of {len} elements")]
    Allocation {
        len: usize,
        #[source]
        source: TryReserveError,
    },
}
