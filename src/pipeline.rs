// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Puts the pieces together: tables first, then `W` compute workers
//! and one writer, all inside a single crossbeam scope so that every
//! thread has been joined by the time a render returns, whether it
//! succeeded or not.

use crate::colors::{ColorTable, GrayscaleTable};
use crate::config::PipelineConfig;
use crate::error::{NewtonError, Result};
use crate::monitor::ProgressMonitor;
use crate::planes::PlaneMapper;
use crate::roots::RootTable;
use crate::scheduler::RowScheduler;
use crate::worker::{run_worker, Workload};
use crate::writer::{drain, DrainReport, RasterSink, RowSink};
use itertools::Itertools;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// A configured render.  Holds the read-only tables every thread
/// borrows.
pub struct Pipeline {
    config: PipelineConfig,
    plane: PlaneMapper,
    roots: RootTable,
    colors: ColorTable,
    grays: GrayscaleTable,
}

/// The files a render wrote, and what the writer saw.
#[derive(Debug)]
pub struct RenderOutput {
    /// Basin colors.
    pub attractors: PathBuf,
    /// Iteration grays.
    pub convergence: PathBuf,
    /// The drain's report.
    pub report: DrainReport,
}

impl Pipeline {
    /// Builds the tables and the grid mapping.
    pub fn new(config: PipelineConfig) -> Result<Pipeline> {
        let plane = PlaneMapper::square(config.size())?;
        let roots = RootTable::new();
        debug!(
            "roots of x^{} - 1: {}",
            config.degree(),
            roots
                .roots(config.degree())
                .iter()
                .map(|r| format!("{:.4}{:+.4}i", r.re, r.im))
                .join(" ")
        );
        Ok(Pipeline {
            config,
            plane,
            roots,
            colors: ColorTable::new(),
            grays: GrayscaleTable::new(),
        })
    }

    /// The configuration this pipeline runs.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Computes the whole grid and drains it into `sink`.  The writer
    /// gets its own thread; the calling thread only waits.
    pub fn run<S: RowSink + Send>(&self, sink: &mut S) -> Result<DrainReport> {
        let threads = self.config.threads();
        let size = self.config.size();
        let schedule = RowScheduler::new(threads, size);
        let monitor = ProgressMonitor::new(threads, size);
        let workload = Workload {
            plane: &self.plane,
            degree: self.config.degree(),
            roots: self.roots.roots(self.config.degree()),
        };

        let outcome = crossbeam::scope(|spawner| {
            let monitor = &monitor;
            for worker in 0..threads {
                spawner.spawn(move |_| run_worker(worker, schedule, workload, monitor));
            }
            let writer = spawner.spawn(move |_| drain(monitor, sink));
            writer.join()
        });

        match outcome {
            Err(_) => Err(NewtonError::WorkerPanicked),
            Ok(Err(_)) => Err(NewtonError::WriterPanicked),
            Ok(Ok(report)) => {
                let report = report?;
                debug_assert_eq!(monitor.watermark(), size);
                info!(
                    "wrote {} rows in {} batches",
                    report.rows,
                    report.watermarks.len()
                );
                Ok(report)
            }
        }
    }

    /// Renders into two in-memory or otherwise caller-supplied
    /// streams, headers included, and hands them back.
    pub fn render_into<W: Write + Send>(
        &self,
        attractors: W,
        convergence: W,
    ) -> Result<(DrainReport, W, W)> {
        let mut sink = RasterSink::new(
            attractors,
            convergence,
            self.config.size(),
            &self.colors,
            &self.grays,
        )?;
        let report = self.run(&mut sink)?;
        let (attractors, convergence) = sink.into_inner();
        Ok((report, attractors, convergence))
    }

    /// Renders into the two conventionally named files inside `dir`.
    /// Both files are created before any thread starts.
    pub fn render_to_dir(&self, dir: &Path) -> Result<RenderOutput> {
        let attractors = self.config.attractors_path(dir);
        let convergence = self.config.convergence_path(dir);
        let (report, _, _) = self.render_into(
            BufWriter::new(File::create(&attractors)?),
            BufWriter::new(File::create(&convergence)?),
        )?;
        Ok(RenderOutput {
            attractors,
            convergence,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Row;
    use std::io;

    struct Collect(Vec<Row>);

    // Refuses the row at `.0`, recording the indices it did accept.
    struct FailAt(usize, Vec<usize>);

    impl RowSink for FailAt {
        fn consume(&mut self, row: Row) -> Result<()> {
            if row.index == self.0 {
                return Err(NewtonError::Io(io::Error::new(
                    io::ErrorKind::Other,
                    "disk full",
                )));
            }
            self.1.push(row.index);
            Ok(())
        }
    }

    impl RowSink for Collect {
        fn consume(&mut self, row: Row) -> Result<()> {
            self.0.push(row);
            Ok(())
        }
    }

    fn rows(threads: usize, size: usize, degree: usize) -> Vec<Row> {
        let config = PipelineConfig::new(threads, size, degree).unwrap();
        let mut sink = Collect(vec![]);
        Pipeline::new(config).unwrap().run(&mut sink).unwrap();
        sink.0
    }

    #[test]
    fn rows_arrive_in_index_order() {
        let rows = rows(4, 10, 3);
        let indices: Vec<usize> = rows.iter().map(|r| r.index).collect();
        assert_eq!(indices, (0..10).collect::<Vec<_>>());
        assert!(rows.iter().all(|r| r.len() == 10));
    }

    #[test]
    fn thread_count_does_not_change_the_picture() {
        assert_eq!(rows(1, 17, 5), rows(6, 17, 5));
    }

    #[test]
    fn more_threads_than_rows() {
        let rows = rows(8, 3, 2);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn write_failure_mid_drain_ends_the_run() {
        let config = PipelineConfig::new(4, 20, 3).unwrap();
        let mut sink = FailAt(3, vec![]);
        // Returning at all means every worker was joined.
        match Pipeline::new(config).unwrap().run(&mut sink) {
            Err(NewtonError::Io(_)) => {}
            Err(other) => panic!("unexpected error {}", other),
            Ok(report) => panic!("run should have failed, wrote {} rows", report.rows),
        }
        assert_eq!(sink.1, vec![0, 1, 2]);
    }

    #[test]
    fn report_watermarks_end_at_size() {
        let config = PipelineConfig::new(3, 20, 4).unwrap();
        let mut sink = Collect(vec![]);
        let report = Pipeline::new(config).unwrap().run(&mut sink).unwrap();
        assert_eq!(report.rows, 20);
        assert!(report.watermarks.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(report.watermarks.last(), Some(&20));
    }
}
