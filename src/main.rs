// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, AppSettings, Arg, ArgMatches};
use log::info;
use newton::{Pipeline, PipelineConfig};
use std::path::Path;
use std::str::FromStr;

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const THREADS: &str = "threads";
const SIZE: &str = "size";
const OUTPUT_DIR: &str = "output-dir";
const DEGREE: &str = "degree";

fn args(default_threads: &str) -> ArgMatches {
    App::new("newton")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Renders the Newton basins of x^d - 1")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value(default_threads)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        usize::max_value(),
                        "Could not parse thread count",
                        "Thread count must be positive",
                    )
                })
                .help("Number of compute threads"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("l")
                .takes_value(true)
                .default_value("1000")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        usize::max_value(),
                        "Could not parse picture size",
                        "Picture size must be positive",
                    )
                })
                .help("Rows and columns of the output pictures"),
        )
        .arg(
            Arg::with_name(OUTPUT_DIR)
                .required(false)
                .long(OUTPUT_DIR)
                .short("o")
                .takes_value(true)
                .default_value(".")
                .help("Directory the two pictures are written to"),
        )
        .arg(
            Arg::with_name(DEGREE)
                .required(true)
                .index(1)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        9,
                        "Could not parse polynomial degree",
                        "Polynomial degree must be between 1 and 9",
                    )
                })
                .help("Exponent d of the polynomial x^d - 1"),
        )
        .get_matches()
}

fn main() {
    env_logger::init();
    let default_threads = num_cpus::get().to_string();
    let matches = args(&default_threads);

    let threads =
        usize::from_str(matches.value_of(THREADS).unwrap()).expect("Could not parse thread count.");
    let size =
        usize::from_str(matches.value_of(SIZE).unwrap()).expect("Could not parse picture size.");
    let degree = usize::from_str(matches.value_of(DEGREE).unwrap())
        .expect("Could not parse polynomial degree.");
    let output_dir = Path::new(matches.value_of(OUTPUT_DIR).unwrap_or("."));

    let config = match PipelineConfig::new(threads, size, degree) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let rendered = Pipeline::new(config).and_then(|pipeline| {
        let config = pipeline.config();
        info!("Number of threads: {}", config.threads());
        info!("Picture size: {} x {}", config.size(), config.size());
        info!(
            "Polynomial exponent: {} (for x^{} - 1)",
            config.degree(),
            config.degree()
        );
        pipeline.render_to_dir(output_dir)
    });
    match rendered {
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
        Ok(output) => {
            info!(
                "wrote {} and {}",
                output.attractors.display(),
                output.convergence.display()
            );
        }
    }
}
