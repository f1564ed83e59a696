// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The compute side of the pipeline.

use crate::degree::Degree;
use crate::kernel::classify;
use crate::monitor::ProgressMonitor;
use crate::planes::{Pixel, PlaneMapper};
use crate::row::Row;
use crate::scheduler::RowScheduler;
use log::{debug, trace};
use num::Complex;

/// Everything a worker reads but never writes.  Built once before the
/// threads start and shared by reference.
#[derive(Clone, Copy, Debug)]
pub struct Workload<'a> {
    /// Pixel to point mapping for the grid.
    pub plane: &'a PlaneMapper,
    /// The polynomial being solved.
    pub degree: Degree,
    /// The root table's entry for `degree`.
    pub roots: &'a [Complex<f32>],
}

impl<'a> Workload<'a> {
    /// Classifies every column of one row into a fresh pair of
    /// buffers.
    pub fn compute_row(&self, index: usize) -> Row {
        let width = self.plane.size;
        let mut row = Row::with_capacity(index, width);
        for column in 0..width {
            let point = self.plane.pixel_to_point(&Pixel(column, index));
            row.push(classify(point, self.degree, self.roots));
        }
        row
    }
}

/// Runs worker `worker` to completion: computes each of its rows in
/// order and publishes it.  Returns the number of rows produced.
pub fn run_worker(
    worker: usize,
    schedule: RowScheduler,
    workload: Workload,
    monitor: &ProgressMonitor,
) -> usize {
    let _guard = monitor.panic_guard();
    debug!("worker {} owns {} rows", worker, schedule.row_count(worker));
    let mut produced = 0;
    for index in schedule.rows_for(worker) {
        let row = workload.compute_row(index);
        monitor.publish(worker, row);
        trace!("worker {} published row {}", worker, index);
        produced += 1;
    }
    produced
}
