// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The per-point classifier.
//!
//! Starting from a sample point, Newton's method on `x^d - 1` either
//! settles onto one of the `d` roots, wanders off towards infinity, or
//! lands on the origin where the update is undefined.  The root it
//! settles on is the point's *basin*; how long that took is the
//! convergence figure drawn in the grayscale image.
//!
//! Points near a basin boundary are genuinely sensitive to rounding,
//! and the bounds below decide which side they land on.  They are
//! fixed so that every run classifies identically.

use crate::degree::Degree;
use num::Complex;

/// The iteration budget per point.  Counts are stored as bytes, so
/// this must stay at or below 256.
pub const MAX_ITERATIONS: usize = 128;

/// A real or imaginary part larger than this is treated as escaped.
pub const DIVERGENCE_BOUND: f32 = 1.0e6;

/// Iterates with a squared modulus below this are treated as having
/// hit the origin, where `z^(1-d)` blows up.
pub const ORIGIN_TOLERANCE_SQ: f32 = 1.0e-6;

/// Squared distance at which an iterate is attributed to a root.
pub const ROOT_TOLERANCE_SQ: f32 = 1.0e-6;

/// Half-width of the band around `|z|^2 = 1` inside which the roots
/// are checked at all.  Everything within `1e-3` of a unit root falls
/// inside it.
pub const RING_BAND: f32 = 2.1e-3;

/// The basin byte written for points that never settled.  Root
/// indices run from zero to eight, so nine is free.
pub const NON_CONVERGENT: u8 = 9;

/// Which root a point is drawn towards, if any.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Basin {
    /// The index of the root in the `RootTable`.
    Root(u8),
    /// Escaped, hit the origin, or ran out of iterations.
    NonConvergent,
}

impl Basin {
    /// The byte stored in a row buffer.
    pub fn to_byte(self) -> u8 {
        match self {
            Basin::Root(i) => i,
            Basin::NonConvergent => NON_CONVERGENT,
        }
    }

    /// The inverse of `to_byte`.
    pub fn from_byte(b: u8) -> Basin {
        if b == NON_CONVERGENT {
            Basin::NonConvergent
        } else {
            Basin::Root(b)
        }
    }
}

/// The result for a single sample point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Where the point ended up.
    pub basin: Basin,
    /// How many Newton steps were taken before the decision, in
    /// `0..MAX_ITERATIONS`.
    pub iterations: u8,
}

impl Classification {
    fn new(basin: Basin, iterations: usize) -> Classification {
        Classification {
            basin,
            iterations: iterations as u8,
        }
    }
}

/// Classifies one point.  `roots` must be the root table's entry for
/// `degree`.
///
/// Each pass first rejects escaped or degenerate iterates, then, if
/// the iterate is close to the unit circle, looks for a root within
/// tolerance, and only then takes a Newton step.  A point already
/// sitting on a root therefore reports zero iterations.
pub fn classify(point: Complex<f32>, degree: Degree, roots: &[Complex<f32>]) -> Classification {
    debug_assert_eq!(roots.len(), degree.exponent());

    // x - 1 has a single basin covering the whole plane.
    if degree == Degree::One {
        return Classification::new(Basin::Root(0), 0);
    }

    let mut z = point;
    for i in 0..MAX_ITERATIONS {
        if z.re.abs() > DIVERGENCE_BOUND
            || z.im.abs() > DIVERGENCE_BOUND
            || z.norm_sqr() < ORIGIN_TOLERANCE_SQ
        {
            return Classification::new(Basin::NonConvergent, i);
        }

        if (z.norm_sqr() - 1.0).abs() < RING_BAND {
            if let Some(k) = roots
                .iter()
                .position(|root| (z - *root).norm_sqr() < ROOT_TOLERANCE_SQ)
            {
                return Classification::new(Basin::Root(k as u8), i);
            }
        }

        z = degree.newton_step(z);
    }
    Classification::new(Basin::NonConvergent, MAX_ITERATIONS - 1)
}
