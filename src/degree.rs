// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The supported exponents of `x^d - 1`, and the Newton step for each.
//!
//! Newton's method on `f(z) = z^d - 1` gives the update
//!
//! ```text
//! z <- z - (z^d - 1) / (d z^(d-1)) = ((d-1) z + z^(1-d)) / d
//! ```
//!
//! Each degree gets its own closed form for `w^(d-1)` so that the
//! inner loop is a handful of multiplications rather than a general
//! `powi`.  It is applied to `1/z`, never to `z`: iterates far from
//! the origin would overflow `f32` when raised to the eighth power.

use crate::error::{NewtonError, Result};
use num::Complex;
use std::fmt;

/// The largest exponent the renderer knows how to handle.
pub const MAX_DEGREE: usize = 9;

const ONE: Complex<f32> = Complex { re: 1.0, im: 0.0 };

/// The exponent `d` of the polynomial `x^d - 1`.  A tagged enum
/// rather than a bare integer so that an unsupported degree can't
/// reach the kernel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Degree {
    /// `x - 1`
    One,
    /// `x^2 - 1`
    Two,
    /// `x^3 - 1`
    Three,
    /// `x^4 - 1`
    Four,
    /// `x^5 - 1`
    Five,
    /// `x^6 - 1`
    Six,
    /// `x^7 - 1`
    Seven,
    /// `x^8 - 1`
    Eight,
    /// `x^9 - 1`
    Nine,
}

impl Degree {
    /// Every supported degree, lowest first.
    pub const ALL: [Degree; MAX_DEGREE] = [
        Degree::One,
        Degree::Two,
        Degree::Three,
        Degree::Four,
        Degree::Five,
        Degree::Six,
        Degree::Seven,
        Degree::Eight,
        Degree::Nine,
    ];

    /// Converts a user-supplied exponent, rejecting anything outside
    /// 1..=9.
    pub fn from_exponent(d: usize) -> Result<Degree> {
        if d == 0 || d > MAX_DEGREE {
            return Err(NewtonError::Config(format!(
                "polynomial degree must be between 1 and {}, got {}",
                MAX_DEGREE, d
            )));
        }
        Ok(Degree::ALL[d - 1])
    }

    /// The exponent as a number; also the number of roots.
    pub fn exponent(self) -> usize {
        match self {
            Degree::One => 1,
            Degree::Two => 2,
            Degree::Three => 3,
            Degree::Four => 4,
            Degree::Five => 5,
            Degree::Six => 6,
            Degree::Seven => 7,
            Degree::Eight => 8,
            Degree::Nine => 9,
        }
    }

    /// `z^(d-1)`, spelled out per degree.
    #[inline]
    fn power_below(self, z: Complex<f32>) -> Complex<f32> {
        match self {
            Degree::One => ONE,
            Degree::Two => z,
            Degree::Three => z * z,
            Degree::Four => z * z * z,
            Degree::Five => {
                let z2 = z * z;
                z2 * z2
            }
            Degree::Six => {
                let z2 = z * z;
                z2 * z2 * z
            }
            Degree::Seven => {
                let z3 = z * z * z;
                z3 * z3
            }
            Degree::Eight => {
                let z3 = z * z * z;
                z3 * z3 * z
            }
            Degree::Nine => {
                let z2 = z * z;
                let z4 = z2 * z2;
                z4 * z4
            }
        }
    }

    /// One Newton step, `((d-1) z + z^(1-d)) / d`.  Degree one is the
    /// constant map onto its only root.
    #[inline]
    pub fn newton_step(self, z: Complex<f32>) -> Complex<f32> {
        if self == Degree::One {
            return ONE;
        }
        let d = self.exponent() as f32;
        let norm = z.norm_sqr();
        let inv = Complex::new(z.re / norm, -z.im / norm);
        (z * (d - 1.0) + self.power_below(inv)) / d
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.exponent())
    }
}
