// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Validated run parameters.

use crate::degree::Degree;
use crate::error::{NewtonError, Result};
use std::path::{Path, PathBuf};

/// The three numbers that define a render.  The only way to build one
/// is `new`, which rejects anything the pipeline can't run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    threads: usize,
    size: usize,
    degree: Degree,
}

impl PipelineConfig {
    /// Checks that there is at least one worker and one row, and that
    /// the degree is supported.
    pub fn new(threads: usize, size: usize, degree: usize) -> Result<PipelineConfig> {
        if threads == 0 {
            return Err(NewtonError::Config(
                "thread count must be positive".to_string(),
            ));
        }
        if size == 0 {
            return Err(NewtonError::Config(
                "picture size must be positive".to_string(),
            ));
        }
        let degree = Degree::from_exponent(degree)?;
        Ok(PipelineConfig {
            threads,
            size,
            degree,
        })
    }

    /// Number of compute workers.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Side length of the square grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Exponent of the polynomial.
    pub fn degree(&self) -> Degree {
        self.degree
    }

    /// Where the basin image goes, inside `dir`.
    pub fn attractors_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("newton_attractors_x{}.ppm", self.degree))
    }

    /// Where the convergence image goes, inside `dir`.
    pub fn convergence_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("newton_convergence_x{}.ppm", self.degree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_sensible_configuration() {
        let c = PipelineConfig::new(8, 1000, 5).unwrap();
        assert_eq!(c.threads(), 8);
        assert_eq!(c.size(), 1000);
        assert_eq!(c.degree(), Degree::Five);
    }

    #[test]
    fn rejects_zero_threads_or_size() {
        assert!(PipelineConfig::new(0, 10, 3).is_err());
        assert!(PipelineConfig::new(2, 0, 3).is_err());
    }

    #[test]
    fn rejects_unsupported_degrees() {
        assert!(PipelineConfig::new(2, 10, 0).is_err());
        assert!(PipelineConfig::new(2, 10, 10).is_err());
    }

    #[test]
    fn output_names_carry_the_degree() {
        let c = PipelineConfig::new(1, 1, 7).unwrap();
        let dir = Path::new("out");
        assert_eq!(
            c.attractors_path(dir),
            Path::new("out/newton_attractors_x7.ppm")
        );
        assert_eq!(
            c.convergence_path(dir),
            Path::new("out/newton_convergence_x7.ppm")
        );
    }
}
