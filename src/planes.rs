// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a square grid of pixels with an origin at 0,0 in the upper
//! left, and a rectangle on the complex plane given by its left-lower
//! and right-upper corners.
use crate::error::{NewtonError, Result};
use num::Complex;

/// Describes the x, y of a pixel in the grid: column first, then row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// The lower-left and upper-right corners of the region every render
/// samples.
pub const LEFTLOWER: Complex<f32> = Complex { re: -2.0, im: -2.0 };
/// See `LEFTLOWER`.
pub const RIGHTUPPER: Complex<f32> = Complex { re: 2.0, im: 2.0 };

/// Maps pixels of a `size` by `size` grid onto the complex plane.
/// Row zero is the top of the image, so rows walk down the imaginary
/// axis while columns walk right along the real one.  Points are
/// worked out on demand; the grid is never stored.
#[derive(Debug, Clone)]
pub struct PlaneMapper {
    /// Pixels per side.
    pub size: usize,
    leftlower: Complex<f32>,
    rightupper: Complex<f32>,
    // Complex units per pixel, along re and im respectively.
    steps: (f32, f32),
}

impl PlaneMapper {
    /// Takes the side length of the grid and the two corners of the
    /// complex region.
    pub fn new(
        size: usize,
        leftlower: Complex<f32>,
        rightupper: Complex<f32>,
    ) -> Result<PlaneMapper> {
        if size == 0 {
            return Err(NewtonError::Config(
                "the grid must have at least one pixel".to_string(),
            ));
        }
        if rightupper.re <= leftlower.re {
            return Err(NewtonError::Config(
                "the left lower corner is not to the left of the right upper corner".to_string(),
            ));
        }
        if rightupper.im <= leftlower.im {
            return Err(NewtonError::Config(
                "the left lower corner is not lower than the right upper corner".to_string(),
            ));
        }
        let steps = (
            (rightupper.re - leftlower.re) / (size as f32),
            (rightupper.im - leftlower.im) / (size as f32),
        );
        Ok(PlaneMapper {
            size,
            leftlower,
            rightupper,
            steps,
        })
    }

    /// The standard `[-2,2] x [-2,2]` region.
    pub fn square(size: usize) -> Result<PlaneMapper> {
        PlaneMapper::new(size, LEFTLOWER, RIGHTUPPER)
    }

    /// The point sampled for one pixel.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f32> {
        Complex::new(
            self.leftlower.re + (pixel.0 as f32) * self.steps.0,
            self.rightupper.im - (pixel.1 as f32) * self.steps.1,
        )
    }
}
