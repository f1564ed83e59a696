// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! One finished grid row.

use crate::kernel::Classification;

/// The two result buffers for a single row.  A `Row` is built by the
/// worker that owns its index, moved into the monitor when published,
/// and moved out again by the writer, which drops it once serialized.
/// It is deliberately not `Clone`: at any moment exactly one thread
/// holds it.
#[derive(Debug, PartialEq, Eq)]
pub struct Row {
    /// Which grid row this is.
    pub index: usize,
    /// Basin byte per column; see `kernel::Basin::to_byte`.
    pub basins: Vec<u8>,
    /// Iteration count per column.
    pub iterations: Vec<u8>,
}

impl Row {
    /// An empty row with room for `width` cells.
    pub fn with_capacity(index: usize, width: usize) -> Row {
        Row {
            index,
            basins: Vec::with_capacity(width),
            iterations: Vec::with_capacity(width),
        }
    }

    /// Appends one cell.
    #[inline]
    pub fn push(&mut self, cell: Classification) {
        self.basins.push(cell.basin.to_byte());
        self.iterations.push(cell.iterations);
    }

    /// Number of cells filled so far.
    pub fn len(&self) -> usize {
        self.basins.len()
    }

    /// True if no cell has been filled.
    pub fn is_empty(&self) -> bool {
        self.basins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{Basin, NON_CONVERGENT};

    #[test]
    fn push_keeps_both_buffers_in_step() {
        let mut row = Row::with_capacity(3, 2);
        assert!(row.is_empty());
        row.push(Classification {
            basin: Basin::Root(2),
            iterations: 7,
        });
        row.push(Classification {
            basin: Basin::NonConvergent,
            iterations: 127,
        });
        assert_eq!(row.len(), 2);
        assert_eq!(row.basins, vec![2, NON_CONVERGENT]);
        assert_eq!(row.iterations, vec![7, 127]);
    }
}
