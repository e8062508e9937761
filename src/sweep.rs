// The two nested parameter sweeps: seeds within one modulus, then
// moduli across the configured range.

use tracing::debug;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use crate::analysis::analyze;
use crate::error::{ConfigError, SweepError};
use crate::sequence::generate;

/// Number of generator steps sampled per seed unless configured
/// otherwise.
pub const DEFAULT_SAMPLE_LEN: usize = 100_000;

/// Which modulus the recurrence itself reduces by.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InternalModulus {
    /// Reduce the state by the external modulus currently under test.
    Mirror,
    /// Reduce the state by one fixed ceiling for every tested modulus.
    /// Must be nonzero.
    Fixed(u64),
}

impl InternalModulus {
    /// Resolves the policy for one external modulus.
    #[inline]
    pub fn resolve(&self, ext_modulus: u64) -> u64 {
        match *self {
            InternalModulus::Mirror => ext_modulus,
            InternalModulus::Fixed(value) => value,
        }
    }
}

/// Immutable description of one whole sweep. Constructed once,
/// validated before any generation, never mutated.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SweepConfig {
    /// Additive constant of the recurrence.
    pub increment: u64,
    /// Multiplier of the recurrence.
    pub multiplier: u64,
    /// Seed range, inclusive on both ends.
    pub seed_min: u64,
    pub seed_max: u64,
    pub seed_step: u64,
    /// External modulus range, inclusive of min, exclusive of max.
    pub modulus_min: u64,
    pub modulus_max: u64,
    pub modulus_step: u64,
    /// Internal modulus policy.
    pub internal_modulus: InternalModulus,
    /// Generator steps sampled per seed.
    pub sample_len: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            increment: 5,
            multiplier: 9,
            seed_min: 0,
            seed_max: 10,
            seed_step: 1,
            modulus_min: 100,
            modulus_max: 1_000_000,
            modulus_step: 100,
            internal_modulus: InternalModulus::Mirror,
            sample_len: DEFAULT_SAMPLE_LEN,
        }
    }
}

impl SweepConfig {
    /// Checks every invariant the sweep relies on. Runs before any
    /// generation; a failure here means no work was performed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seed_step == 0 {
            return Err(ConfigError::ZeroSeedStep);
        }
        if self.modulus_step == 0 {
            return Err(ConfigError::ZeroModulusStep);
        }
        if self.modulus_min == 0 {
            return Err(ConfigError::ZeroModulus);
        }
        if let InternalModulus::Fixed(0) = self.internal_modulus {
            return Err(ConfigError::ZeroInternalModulus);
        }
        if self.seed_max < self.seed_min {
            return Err(ConfigError::InvertedSeedRange {
                min: self.seed_min,
                max: self.seed_max,
            });
        }
        if self.modulus_max < self.modulus_min {
            return Err(ConfigError::InvertedModulusRange {
                min: self.modulus_min,
                max: self.modulus_max,
            });
        }
        if self.sample_len == 0 {
            return Err(ConfigError::ZeroSampleLength);
        }
        Ok(())
    }

    /// Number of external moduli a sweep of this configuration tests.
    /// Returns 0 for configurations `validate` would reject.
    pub fn modulus_count(&self) -> usize {
        if self.modulus_step == 0 || self.modulus_max < self.modulus_min {
            return 0;
        }
        ((self.modulus_max - self.modulus_min) / self.modulus_step) as usize
    }

    /// Number of seeds tested per modulus.
    /// Returns 0 for configurations `validate` would reject.
    pub fn seed_count(&self) -> u64 {
        if self.seed_step == 0 || self.seed_max < self.seed_min {
            return 0;
        }
        (self.seed_max - self.seed_min) / self.seed_step + 1
    }
}

/// Statistics for one external modulus, averaged over the seed range.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct AggregateStats {
    /// The external modulus this row describes.
    pub modulus: u64,
    /// Floor of the mean cycle length across seeds.
    pub average_cycle_length: u64,
    /// Mean of the per-seed sequence means.
    pub average_value: f64,
}

/// The completed table, one row per tested modulus in ascending order.
pub type SweepResult = Vec<AggregateStats>;

/// Runs the inner sweep: every seed in the configured range against
/// one (external, internal) modulus pair, averaging the per-seed
/// statistics. The cycle-length average floors; the value average is
/// an f64 division.
pub fn average_over_seeds(
    config: &SweepConfig,
    ext_modulus: u64,
    int_modulus: u64,
) -> Result<AggregateStats, SweepError> {
    if config.seed_step == 0 {
        return Err(ConfigError::ZeroSeedStep.into());
    }
    if config.seed_max < config.seed_min {
        return Err(ConfigError::InvertedSeedRange {
            min: config.seed_min,
            max: config.seed_max,
        }
        .into());
    }

    let mut value_total = 0.0f64;
    let mut cycle_total = 0u64;

    let mut seed = config.seed_min;
    loop {
        let sequence = generate(
            seed,
            config.increment,
            config.multiplier,
            ext_modulus,
            int_modulus,
            config.sample_len,
        )?;
        let stats = analyze(&sequence);
        value_total += stats.average_value;
        cycle_total += stats.cycle_length as u64;

        // checked_add so a seed range ending at u64::MAX terminates
        // instead of wrapping around.
        match seed.checked_add(config.seed_step) {
            Some(next) if next <= config.seed_max => seed = next,
            _ => break,
        }
    }

    let seeds = config.seed_count();
    Ok(AggregateStats {
        modulus: ext_modulus,
        average_cycle_length: cycle_total / seeds,
        average_value: value_total / seeds as f64,
    })
}

/// Runs the full sweep, reporting `(completed, total)` after each
/// modulus finishes. The callback is an observable side effect only;
/// it has no bearing on the returned table.
pub fn sweep_with<F>(config: &SweepConfig, mut progress: F) -> Result<SweepResult, SweepError>
where
    F: FnMut(usize, usize),
{
    config.validate()?;

    let total = config.modulus_count();
    let mut results = Vec::new();
    results
        .try_reserve_exact(total)
        .map_err(|source| SweepError::Allocation { len: total, source })?;

    for i in 0 .. total {
        let ext_modulus = config.modulus_min + i as u64 * config.modulus_step;
        let int_modulus = config.internal_modulus.resolve(ext_modulus);
        results.push(average_over_seeds(config, ext_modulus, int_modulus)?);
        debug!(
            modulus = ext_modulus,
            completed = i + 1,
            total,
            "finished modulus"
        );
        progress(i + 1, total);
    }

    Ok(results)
}

/// Runs the full sweep without progress reporting.
pub fn sweep(config: &SweepConfig) -> Result<SweepResult, SweepError> {
    sweep_with(config, |_, _| {})
}

#[cfg(test)] mod tests {
    use super::*;
    use crate::analysis::mean;

    fn small_config() -> SweepConfig {
        SweepConfig {
            seed_min: 0,
            seed_max: 9,
            seed_step: 1,
            modulus_min: 10,
            modulus_max: 50,
            modulus_step: 10,
            sample_len: 64,
            ..SweepConfig::default()
        }
    }

    #[test] fn zero_seed_step_is_rejected_before_generation() {
        let config = SweepConfig { seed_step: 0, ..small_config() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroSeedStep)
        ));
        assert!(matches!(
            sweep(&config),
            Err(SweepError::Config(ConfigError::ZeroSeedStep))
        ));
        assert!(matches!(
            average_over_seeds(&config, 10, 10),
            Err(SweepError::Config(ConfigError::ZeroSeedStep))
        ));
    }

    #[test] fn invalid_configurations_are_rejected() {
        let base = small_config();

        let config = SweepConfig { modulus_step: 0, ..base.clone() };
        assert_eq!(Err(ConfigError::ZeroModulusStep), config.validate());

        let config = SweepConfig { modulus_min: 0, ..base.clone() };
        assert_eq!(Err(ConfigError::ZeroModulus), config.validate());

        let config = SweepConfig {
            internal_modulus: InternalModulus::Fixed(0),
            ..base.clone()
        };
        assert_eq!(Err(ConfigError::ZeroInternalModulus), config.validate());

        let config = SweepConfig { seed_min: 7, seed_max: 3, ..base.clone() };
        assert_eq!(
            Err(ConfigError::InvertedSeedRange { min: 7, max: 3 }),
            config.validate()
        );

        let config = SweepConfig {
            modulus_min: 100,
            modulus_max: 50,
            ..base.clone()
        };
        assert_eq!(
            Err(ConfigError::InvertedModulusRange { min: 100, max: 50 }),
            config.validate()
        );

        let config = SweepConfig { sample_len: 0, ..base };
        assert_eq!(Err(ConfigError::ZeroSampleLength), config.validate());
    }

    #[test] fn result_is_ascending_with_expected_count() {
        let config = small_config();
        let results = sweep(&config).unwrap();

        assert_eq!(config.modulus_count(), results.len());
        assert_eq!(4, results.len());
        assert_eq!(
            vec![10, 20, 30, 40],
            results.iter().map(|r| r.modulus).collect::<Vec<_>>()
        );
        assert!(results.windows(2).all(|w| w[0].modulus < w[1].modulus));
    }

    #[test] fn aggregate_average_is_mean_of_per_seed_means() {
        let config = small_config();
        let ext_modulus = 30;
        let aggregate = average_over_seeds(&config, ext_modulus, ext_modulus).unwrap();

        let mut per_seed_means = Vec::new();
        let mut per_seed_cycles = 0u64;
        for seed in 0 ..= 9u64 {
            let sequence = crate::sequence::generate(
                seed,
                config.increment,
                config.multiplier,
                ext_modulus,
                ext_modulus,
                config.sample_len,
            )
            .unwrap();
            per_seed_means.push(mean(&sequence));
            per_seed_cycles += crate::analysis::cycle_length(&sequence) as u64;
        }

        let mut expected = 0.0;
        for value in &per_seed_means {
            expected += value;
        }
        expected /= per_seed_means.len() as f64;

        assert!((aggregate.average_value - expected).abs() < 1e-9);
        assert_eq!(per_seed_cycles / 10, aggregate.average_cycle_length);
    }

    #[test] fn sweeping_is_deterministic() {
        let config = small_config();
        assert_eq!(sweep(&config).unwrap(), sweep(&config).unwrap());
    }

    #[test] fn fixed_ceiling_policy_changes_the_table() {
        let mirrored = small_config();
        let ceiling = SweepConfig {
            internal_modulus: InternalModulus::Fixed(u64::MAX),
            ..mirrored.clone()
        };
        assert_ne!(sweep(&mirrored).unwrap(), sweep(&ceiling).unwrap());
    }

    #[test] fn progress_reports_every_modulus_once() {
        let config = small_config();
        let mut seen = Vec::new();
        sweep_with(&config, |completed, total| seen.push((completed, total))).unwrap();
        assert_eq!(vec![(1, 4), (2, 4), (3, 4), (4, 4)], seen);
    }

    #[test] fn seed_range_ending_at_max_terminates() {
        let config = SweepConfig {
            seed_min: u64::MAX - 3,
            seed_max: u64::MAX,
            seed_step: 2,
            sample_len: 8,
            ..small_config()
        };
        let aggregate = average_over_seeds(&config, 10, 10).unwrap();
        assert_eq!(10, aggregate.modulus);
    }

    #[test] fn counts_follow_the_configured_ranges() {
        let config = small_config();
        assert_eq!(4, config.modulus_count());
        assert_eq!(10, config.seed_count());

        let config = SweepConfig { seed_step: 3, ..config };
        // Seeds 0, 3, 6, 9.
        assert_eq!(4, config.seed_count());
    }
}
