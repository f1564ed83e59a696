// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Static row assignment.  Worker `k` of `W` owns rows `k, k+W,
//! k+2W, ...`; nothing is rebalanced at run time.

use std::iter::StepBy;
use std::ops::Range;

/// Splits `size` rows across `workers` workers by interleaving.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowScheduler {
    /// Number of compute workers, and the stride between one worker's
    /// rows.
    pub workers: usize,
    /// Number of rows in the grid.
    pub size: usize,
}

impl RowScheduler {
    /// Both counts must be positive; `PipelineConfig` guarantees it.
    pub fn new(workers: usize, size: usize) -> RowScheduler {
        debug_assert!(workers > 0);
        RowScheduler { workers, size }
    }

    /// The rows worker `worker` computes, in the order it computes
    /// them.
    pub fn rows_for(&self, worker: usize) -> StepBy<Range<usize>> {
        (worker.min(self.size)..self.size).step_by(self.workers)
    }

    /// How many rows worker `worker` computes.
    pub fn row_count(&self, worker: usize) -> usize {
        if worker >= self.size {
            0
        } else {
            (self.size - worker + self.workers - 1) / self.workers
        }
    }

    /// The worker responsible for a row.
    pub fn owner(&self, row: usize) -> usize {
        row % self.workers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::assert_equal;

    #[test]
    fn four_workers_over_ten_rows() {
        let s = RowScheduler::new(4, 10);
        assert_equal(s.rows_for(0), vec![0, 4, 8]);
        assert_equal(s.rows_for(1), vec![1, 5, 9]);
        assert_equal(s.rows_for(2), vec![2, 6]);
        assert_equal(s.rows_for(3), vec![3, 7]);
    }

    #[test]
    fn every_row_has_exactly_one_owner() {
        for workers in 1..7 {
            for size in 1..20 {
                let s = RowScheduler::new(workers, size);
                let mut seen = vec![0; size];
                for k in 0..workers {
                    assert_eq!(s.rows_for(k).count(), s.row_count(k));
                    for row in s.rows_for(k) {
                        assert_eq!(s.owner(row), k);
                        seen[row] += 1;
                    }
                }
                assert!(seen.iter().all(|&n| n == 1));
            }
        }
    }

    #[test]
    fn surplus_workers_get_nothing() {
        let s = RowScheduler::new(8, 3);
        assert_eq!(s.rows_for(5).count(), 0);
        assert_eq!(s.row_count(5), 0);
        assert_equal(s.rows_for(2), vec![2]);
    }
}
