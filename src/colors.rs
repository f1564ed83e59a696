// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Lookup tables from result bytes to pixels.
//!
//! Both tables pre-render every entry as the exact text that lands in
//! the raster file, a fixed-width `"RRR GGG BBB "`, so that the writer
//! only ever copies bytes.

use crate::kernel::{Basin, MAX_ITERATIONS, NON_CONVERGENT};
use image::Rgb;

/// One table entry: the color and its rendered text.
#[derive(Clone, Debug)]
struct Swatch {
    color: Rgb<u8>,
    text: String,
}

impl Swatch {
    fn new(color: Rgb<u8>) -> Swatch {
        let [r, g, b] = color.0;
        Swatch {
            color,
            text: format!("{:03} {:03} {:03} ", r, g, b),
        }
    }
}

/// Width in bytes of one rendered triple.
pub const TRIPLE_WIDTH: usize = 12;

const PALETTE: [[u8; 3]; NON_CONVERGENT as usize + 1] = [
    [228, 26, 28],
    [55, 126, 184],
    [77, 175, 74],
    [152, 78, 163],
    [255, 127, 0],
    [255, 255, 51],
    [166, 86, 40],
    [247, 129, 191],
    [0, 206, 209],
    // Non-convergent points are black.
    [0, 0, 0],
];

fn lookup(swatches: &[Swatch], index: u8) -> &Swatch {
    let last = swatches.len() - 1;
    &swatches[(index as usize).min(last)]
}

/// Basin index to color.  Index `NON_CONVERGENT` is black.
#[derive(Clone, Debug)]
pub struct ColorTable {
    swatches: Vec<Swatch>,
}

impl ColorTable {
    /// Builds the fixed palette.
    pub fn new() -> ColorTable {
        ColorTable {
            swatches: PALETTE.iter().map(|&c| Swatch::new(Rgb(c))).collect(),
        }
    }

    fn swatch(&self, basin: u8) -> &Swatch {
        match Basin::from_byte(basin) {
            Basin::Root(i) if i < NON_CONVERGENT => &self.swatches[i as usize],
            _ => &self.swatches[NON_CONVERGENT as usize],
        }
    }

    /// The color of a basin byte.  Anything past the sentinel is drawn
    /// as non-convergent.
    pub fn color_of(&self, basin: u8) -> Rgb<u8> {
        self.swatch(basin).color
    }

    /// The rendered triple for a basin byte.
    pub fn text_of(&self, basin: u8) -> &str {
        &self.swatch(basin).text
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        ColorTable::new()
    }
}

/// Iteration count to a gray level, darkest at zero and white at the
/// end of the budget.
#[derive(Clone, Debug)]
pub struct GrayscaleTable {
    swatches: Vec<Swatch>,
}

impl GrayscaleTable {
    /// Builds the ramp over `0..MAX_ITERATIONS`.
    pub fn new() -> GrayscaleTable {
        let top = (MAX_ITERATIONS - 1) as u32;
        let swatches = (0..MAX_ITERATIONS as u32)
            .map(|i| {
                let level = (255 * i / top) as u8;
                Swatch::new(Rgb([level, level, level]))
            })
            .collect();
        GrayscaleTable { swatches }
    }

    /// The gray of an iteration count; counts past the budget clamp
    /// to white.
    pub fn color_of(&self, iterations: u8) -> Rgb<u8> {
        lookup(&self.swatches, iterations).color
    }

    /// The rendered triple for an iteration count.
    pub fn text_of(&self, iterations: u8) -> &str {
        &lookup(&self.swatches, iterations).text
    }
}

impl Default for GrayscaleTable {
    fn default() -> Self {
        GrayscaleTable::new()
    }
}
