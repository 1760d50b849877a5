//! CSV export of recorded trajectories.

use crate::error::SimResult;
use crate::sim::SimRecord;
use std::io::Write;

/// Column layout for CSV output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CsvLayout {
    /// `t, theta, total_energy` without a header, as produced by the batch driver.
    #[default]
    Compact,
    /// Header row plus every sample field.
    Wide,
}

pub fn write_csv<W: Write>(record: &SimRecord, layout: CsvLayout, mut out: W) -> SimResult<()> {
    match layout {
        CsvLayout::Compact => {
            for s in &record.samples {
                writeln!(out, "{:.3}, {:.15}, {:.15}", s.t, s.theta, s.total)?;
            }
        }
        CsvLayout::Wide => {
            writeln!(out, "t,theta,omega,kinetic,potential,total")?;
            for s in &record.samples {
                writeln!(
                    out,
                    "{},{},{},{},{},{}",
                    s.t, s.theta, s.omega, s.kinetic, s.potential, s.total
                )?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
