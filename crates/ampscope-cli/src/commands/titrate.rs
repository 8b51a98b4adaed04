use crate::cli::TitrateArgs;
use crate::error::{CliError, Result};
use ampscope::core::models::Sequence;
use ampscope::engine::charge::titration_curve;
use ampscope::engine::config::ProfilerConfigBuilder;
use ampscope::engine::isoelectric::isoelectric_point;
use std::io::{self, Write};
use tracing::info;

const MAX_GRID_POINTS: usize = 10_000;

/// Evenly spaced pH values from `from` to `to` inclusive of `to` when it falls on the grid.
fn ph_grid(from: f64, to: f64, step: f64) -> Result<Vec<f64>> {
    if !(step.is_finite() && step > 0.0) {
        return Err(CliError::Argument(format!(
            "--step must be a positive number, got {}",
            step
        )));
    }
    if !(from.is_finite() && to.is_finite()) || from > to {
        return Err(CliError::Argument(format!(
            "Invalid pH range: {} to {}",
            from, to
        )));
    }

    // Small slack so that e.g. 0..14 by 0.1 still ends at 14.
    let points = ((to - from) / step + 1e-9).floor() + 1.0;
    if !points.is_finite() || points > MAX_GRID_POINTS as f64 {
        return Err(CliError::Argument(format!(
            "--step {} over {} to {} needs more than {} pH points",
            step, from, to, MAX_GRID_POINTS
        )));
    }
    Ok((0..points as usize).map(|i| from + i as f64 * step).collect())
}

fn write_curve<W: Write>(curve: &[(f64, f64)], pi: f64, mut writer: W) -> Result<()> {
    writeln!(writer, "pH\tnet_charge")?;
    for (ph, charge) in curve {
        writeln!(writer, "{:.2}\t{:.4}", ph, charge)?;
    }
    writeln!(writer, "Isoelectric point: {:.2}", pi)?;
    writer.flush()?;
    Ok(())
}

pub fn run(args: TitrateArgs) -> Result<()> {
    let mut builder = ProfilerConfigBuilder::new();
    if let Some(tolerance) = args.tolerance {
        builder = builder.pi_tolerance(tolerance);
    }
    let config = builder.build()?;

    let sequence = Sequence::new(args.sequence.trim().to_ascii_uppercase());
    let grid = ph_grid(args.from, args.to, args.step)?;
    info!(
        "Titrating {} over {} pH point(s).",
        sequence,
        grid.len()
    );

    let curve = titration_curve(&sequence, &grid);
    let pi = isoelectric_point(&sequence, config.pi_tolerance);
    write_curve(&curve, pi, io::stdout().lock())
}
