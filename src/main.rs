// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! tricheck - report triangles that intersect another triangle of the batch.
//!
//! Reads `N` followed by N records of 9 coordinates from a file or stdin and
//! prints the ids (input positions, zero-based) of every triangle that
//! intersects at least one other, one per line, ascending.

use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tricheck::{
    DetectionParams, Detector, ScanOutcome, Tolerance,
    io::{read_batch, write_ids},
};

#[derive(Parser, Debug)]
#[command(name = "tricheck")]
#[command(about = "Find intersecting triangles in a batch", long_about = None)]
struct Cli {
    /// Input file; reads stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Tolerance shared by every geometric comparison
    #[arg(long, default_value_t = 1e-12)]
    eps: f64,

    /// Scan pairs on a thread pool
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel (default: one per core)
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,

    /// Give up if the scan has not finished after this many milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let tolerance = Tolerance::<f64>::new(cli.eps).context("invalid --eps")?;

    let batch = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_batch(BufReader::new(file))
        }
        None => read_batch(io::stdin().lock()),
    }
    .context("failed to read triangle batch")?;

    let detector = Detector::new(DetectionParams {
        tolerance,
        parallel: cli.parallel,
    });

    let deadline = cli
        .time_limit_ms
        .map(|ms| Instant::now() + Duration::from_millis(ms));
    let poll = || deadline.is_some_and(|d| Instant::now() >= d);

    let outcome = match cli.threads {
        Some(n) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .context("failed to build thread pool")?;
            pool.install(|| detector.scan(&batch, poll))
        }
        None => detector.scan(&batch, poll),
    };

    match outcome {
        ScanOutcome::Complete(ids) => {
            write_ids(io::stdout().lock(), &ids).context("failed to write ids")?;
            Ok(())
        }
        ScanOutcome::Cancelled {
            partial,
            pairs_checked,
        } => bail!(
            "time limit reached after {} pair checks; scan incomplete ({} ids found so far, not printed)",
            pairs_checked,
            partial.len()
        ),
    }
}
