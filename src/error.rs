// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The one error type shared by every stage of the renderer.

use failure::Fail;
use std::io;

/// Everything that can stop a render.  Configuration problems are
/// caught before any thread starts; the rest surface while the
/// pipeline is running and end it.
#[derive(Debug, Fail)]
pub enum NewtonError {
    /// A worker count, grid size or degree outside its legal range.
    #[fail(display = "invalid configuration: {}", _0)]
    Config(String),

    /// Creating, writing or flushing one of the output streams failed.
    #[fail(display = "output error: {}", _0)]
    Io(#[cause] io::Error),

    /// The writer reached a row below the watermark that was never
    /// published.  This means the progress bookkeeping is broken.
    #[fail(display = "row {} was drained before it was published", _0)]
    MissingRow(usize),

    /// A compute worker unwound before finishing its rows.
    #[fail(display = "a compute worker panicked")]
    WorkerPanicked,

    /// The writer thread unwound.
    #[fail(display = "the writer thread panicked")]
    WriterPanicked,
}

impl From<io::Error> for NewtonError {
    fn from(err: io::Error) -> Self {
        NewtonError::Io(err)
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, NewtonError>;
