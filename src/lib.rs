#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Newton basin renderer
//!
//! Newton's method, applied to the polynomial `x^d - 1`, pulls almost
//! every starting point on the complex plane towards one of the `d`
//! roots of unity.  Which root a point ends up at is its basin of
//! attraction, and the boundaries between basins are fractal.  This
//! crate samples the square `[-2,2] x [-2,2]`, classifies every point,
//! and writes two ASCII PPM images: one coloring each pixel by its
//! basin, one shading it by how many steps it took to get there.
//!
//! Rows are computed by a fixed pool of workers, each owning every
//! `W`th row, while a separate writer streams finished rows to disk in
//! order and frees them as it goes.  The two sides meet only in the
//! `ProgressMonitor`: one progress entry per worker, a mutex and a
//! condition variable.  The minimum progress across all workers is
//! the watermark below which the writer may safely drain.

pub mod colors;
pub mod config;
pub mod degree;
pub mod error;
pub mod kernel;
pub mod monitor;
pub mod pipeline;
pub mod planes;
pub mod roots;
pub mod row;
pub mod scheduler;
pub mod worker;
pub mod writer;

pub use crate::config::PipelineConfig;
pub use crate::degree::Degree;
pub use crate::error::{NewtonError, Result};
pub use crate::kernel::{classify, Basin, Classification};
pub use crate::pipeline::{Pipeline, RenderOutput};
