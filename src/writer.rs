// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The draining side of the pipeline: waits for the watermark, takes
//! every row below it in order, and streams it out.
//!
//! Rows reach the sink by value.  Once `consume` returns, the row's
//! buffers are gone, so nothing can read them after they have been
//! written.

use crate::colors::{ColorTable, GrayscaleTable};
use crate::error::Result;
use crate::monitor::ProgressMonitor;
use crate::row::Row;
use log::debug;
use std::io::Write;

/// Largest channel value declared in the header.
pub const MAX_CHANNEL: u8 = 255;

/// Writes the ASCII PPM header for a `size` by `size` image.
pub fn write_header<W: Write>(out: &mut W, size: usize) -> Result<()> {
    write!(out, "P3\n{} {}\n{}\n", size, size, MAX_CHANNEL)?;
    Ok(())
}

/// Where drained rows go.
pub trait RowSink {
    /// Serializes one row.  Rows arrive in strictly ascending index
    /// order, each exactly once.
    fn consume(&mut self, row: Row) -> Result<()>;

    /// Called once after the last row.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Streams rows as two PPM bodies: basin colors to `attractors`,
/// iteration grays to `convergence`.  Headers are written by `new`.
pub struct RasterSink<'t, W: Write> {
    attractors: W,
    convergence: W,
    colors: &'t ColorTable,
    grays: &'t GrayscaleTable,
}

impl<'t, W: Write> RasterSink<'t, W> {
    /// Writes both headers and returns the sink.
    pub fn new(
        mut attractors: W,
        mut convergence: W,
        size: usize,
        colors: &'t ColorTable,
        grays: &'t GrayscaleTable,
    ) -> Result<Self> {
        write_header(&mut attractors, size)?;
        write_header(&mut convergence, size)?;
        Ok(RasterSink {
            attractors,
            convergence,
            colors,
            grays,
        })
    }

    /// Gives the two streams back, attractors first.
    pub fn into_inner(self) -> (W, W) {
        (self.attractors, self.convergence)
    }
}

impl<'t, W: Write> RowSink for RasterSink<'t, W> {
    fn consume(&mut self, row: Row) -> Result<()> {
        for &basin in &row.basins {
            self.attractors
                .write_all(self.colors.text_of(basin).as_bytes())?;
        }
        self.attractors.write_all(b"\n")?;
        for &iterations in &row.iterations {
            self.convergence
                .write_all(self.grays.text_of(iterations).as_bytes())?;
        }
        self.convergence.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.attractors.flush()?;
        self.convergence.flush()?;
        Ok(())
    }
}

/// What a drain saw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrainReport {
    /// Rows handed to the sink.
    pub rows: usize,
    /// Every watermark returned by the monitor, in order.
    pub watermarks: Vec<usize>,
}

/// Drains every row of the grid into `sink`, in index order, as soon
/// as the watermark allows.  Returns once the watermark reaches the
/// grid size and the sink has been finished.
pub fn drain<S: RowSink>(monitor: &ProgressMonitor, sink: &mut S) -> Result<DrainReport> {
    let size = monitor.size();
    let mut report = DrainReport::default();
    let mut next = 0;
    while next < size {
        let watermark = monitor.wait_for_watermark_above(next)?;
        debug!("draining rows {}..{}", next, watermark);
        report.watermarks.push(watermark);
        for index in next..watermark {
            let row = monitor.take(index)?;
            sink.consume(row)?;
            report.rows += 1;
        }
        next = watermark;
    }
    sink.finish()?;
    Ok(report)
}
