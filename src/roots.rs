// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The roots of `x^d - 1` for every supported degree, computed once
//! before any worker starts and only ever read afterwards.

use crate::degree::{Degree, MAX_DEGREE};
use num::Complex;
use std::f64::consts::PI;

/// For each degree `d`, the `d` roots of unity `exp(2πik/d)` in
/// ascending angle.  Root zero is always `1 + 0i`.
#[derive(Debug, Clone)]
pub struct RootTable {
    roots: Vec<Vec<Complex<f32>>>,
}

impl RootTable {
    /// Builds the table for degrees 1 through 9.  Angles are taken in
    /// double precision and then narrowed, so the stored roots are as
    /// close to the unit circle as `f32` allows.
    pub fn new() -> RootTable {
        let roots = (1..=MAX_DEGREE)
            .map(|d| {
                (0..d)
                    .map(|k| {
                        let theta = 2.0 * PI * (k as f64) / (d as f64);
                        Complex::new(theta.cos() as f32, theta.sin() as f32)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        RootTable { roots }
    }

    /// The roots for one degree; always exactly `degree.exponent()`
    /// values.
    pub fn roots(&self, degree: Degree) -> &[Complex<f32>] {
        &self.roots[degree.exponent() - 1]
    }
}

impl Default for RootTable {
    fn default() -> Self {
        RootTable::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_degree_has_that_many_roots() {
        let table = RootTable::new();
        for degree in Degree::ALL.iter() {
            assert_eq!(table.roots(*degree).len(), degree.exponent());
        }
    }

    #[test]
    fn roots_lie_on_the_unit_circle() {
        let table = RootTable::new();
        for degree in Degree::ALL.iter() {
            for root in table.roots(*degree) {
                assert!((root.norm_sqr() - 1.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn roots_are_evenly_spaced() {
        let table = RootTable::new();
        for degree in Degree::ALL.iter() {
            let roots = table.roots(*degree);
            let step = 2.0 * std::f32::consts::PI / (roots.len() as f32);
            for (k, root) in roots.iter().enumerate() {
                let expected = step * (k as f32);
                let angle = root.im.atan2(root.re).rem_euclid(2.0 * std::f32::consts::PI);
                let diff = (angle - expected).abs();
                assert!(diff < 1e-4 || (diff - 2.0 * std::f32::consts::PI).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn roots_solve_the_polynomial() {
        let table = RootTable::new();
        for degree in Degree::ALL.iter() {
            for root in table.roots(*degree) {
                let power = (0..degree.exponent()).fold(Complex::new(1.0_f32, 0.0), |acc, _| acc * *root);
                assert!((power - Complex::new(1.0, 0.0)).norm() < 1e-5);
            }
        }
    }

    #[test]
    fn root_zero_is_one() {
        let table = RootTable::new();
        for degree in Degree::ALL.iter() {
            assert_eq!(table.roots(*degree)[0], Complex::new(1.0, 0.0));
        }
    }
}
