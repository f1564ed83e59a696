// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The synchronization point between the compute workers and the
//! writer.
//!
//! Every worker keeps one progress entry: the next row it will
//! produce.  Because a worker finishes its rows in increasing order,
//! the minimum over all entries, the *watermark*, is a row index below
//! which every row is finished.  Workers publish a row and bump their
//! entry under a single mutex; the writer sleeps on a condition
//! variable until the watermark moves, then takes the finished rows
//! out one at a time.  Nothing else is shared.

use crate::error::{NewtonError, Result};
use crate::row::Row;
use crate::scheduler::RowScheduler;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;

struct State {
    // Next row each worker will produce.
    progress: Vec<usize>,
    // Published rows not yet taken by the writer.
    slots: Vec<Option<Row>>,
    // Set when a worker unwinds; its entry will never move again.
    abandoned: bool,
}

impl State {
    /// Only ever called with the mutex held, by the worker that owns
    /// the entry.
    fn advance(&mut self, worker: usize, next: usize) {
        debug_assert!(next >= self.progress[worker]);
        self.progress[worker] = next;
    }

    fn watermark(&self, size: usize) -> usize {
        self.progress
            .iter()
            .cloned()
            .min()
            .unwrap_or(size)
            .min(size)
    }
}

/// Progress vector, row storage, mutex and condition variable in one
/// place.  Workers only `publish`; the writer only waits and takes.
pub struct ProgressMonitor {
    schedule: RowScheduler,
    state: Mutex<State>,
    advanced: Condvar,
}

impl ProgressMonitor {
    /// Entry `k` starts at `k`, the first row worker `k` owns.
    pub fn new(workers: usize, size: usize) -> ProgressMonitor {
        let mut slots = Vec::with_capacity(size);
        slots.resize_with(size, || None);
        ProgressMonitor {
            schedule: RowScheduler::new(workers, size),
            state: Mutex::new(State {
                progress: (0..workers).collect(),
                slots,
                abandoned: false,
            }),
            advanced: Condvar::new(),
        }
    }

    /// Number of rows in the grid.
    pub fn size(&self) -> usize {
        self.schedule.size
    }

    fn lock(&self) -> MutexGuard<State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Hands a finished row over and moves the worker's entry past it.
    /// The signal goes out after the mutex is released, so the writer
    /// always wakes to find the row in place.
    pub fn publish(&self, worker: usize, row: Row) {
        debug_assert_eq!(self.schedule.owner(row.index), worker);
        let next = row.index + self.schedule.workers;
        {
            let mut state = self.lock();
            debug_assert!(state.slots[row.index].is_none());
            let index = row.index;
            state.slots[index] = Some(row);
            state.advance(worker, next);
        }
        self.advanced.notify_one();
    }

    /// The current watermark, without waiting.
    pub fn watermark(&self) -> usize {
        self.lock().watermark(self.schedule.size)
    }

    /// Blocks until the watermark is above `current` and returns it.
    /// The watermark is recomputed after every wakeup, spurious or not.
    /// Fails if a worker died, since the watermark may then never move.
    pub fn wait_for_watermark_above(&self, current: usize) -> Result<usize> {
        let size = self.schedule.size;
        if current >= size {
            return Ok(size);
        }
        let mut state = self.lock();
        loop {
            let watermark = state.watermark(size);
            if watermark > current {
                return Ok(watermark);
            }
            if state.abandoned {
                return Err(NewtonError::WorkerPanicked);
            }
            state = self
                .advanced
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Moves a published row out.  Only the writer calls this, and only
    /// for indices below a watermark it has been handed.
    pub fn take(&self, index: usize) -> Result<Row> {
        self.lock()
            .slots
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(NewtonError::MissingRow(index))
    }

    /// Marks the pipeline as broken and wakes the writer.
    pub fn abandon(&self) {
        self.lock().abandoned = true;
        self.advanced.notify_all();
    }

    /// A guard for a worker's lifetime: if the worker unwinds, the
    /// guard abandons the monitor on its way out.
    pub fn panic_guard(&self) -> PanicGuard {
        PanicGuard { monitor: self }
    }
}

/// See `ProgressMonitor::panic_guard`.
pub struct PanicGuard<'a> {
    monitor: &'a ProgressMonitor,
}

impl<'a> Drop for PanicGuard<'a> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.monitor.abandon();
        }
    }
}
