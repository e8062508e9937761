// Text rendering of a finished sweep. The core hands this module a
// complete, ordered table; file creation and overwrite semantics
// belong to the caller.

use std::io::{self, Write};

use crate::sweep::{AggregateStats, InternalModulus, SweepConfig};

/// Writes the report: one configuration summary line, one column
/// header, then `<modulus>; <average cycle length>; <average value>`
/// per row with the value rounded to two decimal places.
pub fn write_report<W: Write>(
    writer: &mut W,
    config: &SweepConfig,
    results: &[AggregateStats],
) -> io::Result<()> {
    write!(
        writer,
        "Increment: {}; Multiply: {}; SeedMin: {}; SeedMax: {}; SeedStep: {}; \
         ExtMin: {}; ExtMax: {}; ExtStep: {}; ",
        config.increment,
        config.multiplier,
        config.seed_min,
        config.seed_max,
        config.seed_step,
        config.modulus_min,
        config.modulus_max,
        config.modulus_step,
    )?;
    match config.internal_modulus {
        InternalModulus::Mirror => write!(writer, "IntMod: Mirrors ExtMod")?,
        InternalModulus::Fixed(value) => write!(writer, "IntMod: {value}")?,
    }
    writeln!(writer)?;

    writeln!(writer, "Mod; Average Sequence Length; Average Value")?;
    for row in results {
        writeln!(
            writer,
            "{}; {}; {:.2}",
            row.modulus, row.average_cycle_length, row.average_value
        )?;
    }

    Ok(())
}
