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

use std::{
    collections::BTreeSet,
    sync::atomic::{AtomicBool, Ordering},
};

use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::{
    geometry::triangle::{Triangle, TriangleId},
    intersection::tri_tri::triangles_intersect,
    numeric::{scalar::Scalar, tolerance::Tolerance},
};

/// Settings for one detection session.
#[derive(Debug, Clone, Copy)]
pub struct DetectionParams<T: Scalar> {
    pub tolerance: Tolerance<T>,
    /// Spread the pair scan over the rayon pool.
    pub parallel: bool,
}

impl<T: Scalar> Default for DetectionParams<T> {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            parallel: false,
        }
    }
}

/// Result of a cancellable scan.
///
/// A cancelled scan is never reported as `Complete`: `partial` only lists the
/// ids found before the poll fired and says nothing about the pairs that
/// were not visited.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Complete(Vec<TriangleId>),
    Cancelled {
        partial: Vec<TriangleId>,
        pairs_checked: u64,
    },
}

impl ScanOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, ScanOutcome::Complete(_))
    }

    pub fn complete(self) -> Option<Vec<TriangleId>> {
        match self {
            ScanOutcome::Complete(ids) => Some(ids),
            ScanOutcome::Cancelled { .. } => None,
        }
    }
}

#[derive(Default)]
struct Partial {
    ids: BTreeSet<TriangleId>,
    pairs_checked: u64,
    hits: u64,
}

impl Partial {
    fn merge(mut self, other: Partial) -> Partial {
        self.ids.extend(other.ids);
        self.pairs_checked += other.pairs_checked;
        self.hits += other.hits;
        self
    }
}

/// Check `batch[i]` against every later triangle. Returns false if the scan
/// was stopped before the row finished.
fn scan_row<T, F>(
    batch: &[Triangle<T>],
    i: usize,
    tol: &Tolerance<T>,
    poll: &F,
    stop: &AtomicBool,
    acc: &mut Partial,
) -> bool
where
    T: Scalar,
    F: Fn() -> bool + ?Sized,
{
    let ti = &batch[i];
    for tj in &batch[i + 1..] {
        if stop.load(Ordering::Relaxed) {
            return false;
        }
        if poll() {
            stop.store(true, Ordering::Relaxed);
            return false;
        }

        acc.pairs_checked += 1;
        if triangles_intersect(ti, tj, tol) {
            trace!(a = ti.id(), b = tj.id(), "intersecting pair");
            acc.ids.insert(ti.id());
            acc.ids.insert(tj.id());
            acc.hits += 1;
        }
    }
    true
}

fn run_scan<T, F>(batch: &[Triangle<T>], params: &DetectionParams<T>, poll: &F) -> (Partial, bool)
where
    T: Scalar,
    F: Fn() -> bool + Sync + ?Sized,
{
    let n = batch.len();
    let tol = &params.tolerance;
    let stop = AtomicBool::new(false);

    info!(triangles = n, parallel = params.parallel, "scanning batch");

    let partial = if params.parallel {
        (0..n)
            .into_par_iter()
            .fold(Partial::default, |mut acc, i| {
                scan_row(batch, i, tol, poll, &stop, &mut acc);
                acc
            })
            .reduce(Partial::default, Partial::merge)
    } else {
        let mut acc = Partial::default();
        for i in 0..n {
            if !scan_row(batch, i, tol, poll, &stop, &mut acc) {
                break;
            }
        }
        acc
    };

    let cancelled = stop.load(Ordering::Relaxed);
    if cancelled {
        debug!(pairs_checked = partial.pairs_checked, "scan cancelled");
    } else {
        info!(
            pairs_checked = partial.pairs_checked,
            intersecting_pairs = partial.hits,
            ids = partial.ids.len(),
            "scan complete"
        );
    }
    (partial, cancelled)
}

fn never() -> bool {
    false
}

/// Ids of every triangle that intersects at least one other triangle of the
/// batch, ascending and without duplicates. Checks all `n·(n-1)/2` pairs.
pub fn find_intersecting_triangles<T: Scalar>(
    batch: &[Triangle<T>],
    tol: &Tolerance<T>,
) -> Vec<TriangleId> {
    let params = DetectionParams {
        tolerance: *tol,
        parallel: false,
    };
    let (partial, _) = run_scan(batch, &params, &never);
    partial.ids.into_iter().collect()
}

/// Same as [`find_intersecting_triangles`], with rows of the pair matrix
/// distributed over the rayon pool.
pub fn find_intersecting_triangles_par<T: Scalar>(
    batch: &[Triangle<T>],
    tol: &Tolerance<T>,
) -> Vec<TriangleId> {
    let params = DetectionParams {
        tolerance: *tol,
        parallel: true,
    };
    let (partial, _) = run_scan(batch, &params, &never);
    partial.ids.into_iter().collect()
}

/// Entry point for callers that hold one configuration across many calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detector<T: Scalar> {
    params: DetectionParams<T>,
}

impl<T: Scalar> Detector<T> {
    pub fn new(params: DetectionParams<T>) -> Self {
        Self { params }
    }

    pub fn with_tolerance(tolerance: Tolerance<T>) -> Self {
        Self::new(DetectionParams {
            tolerance,
            ..DetectionParams::default()
        })
    }

    pub fn params(&self) -> &DetectionParams<T> {
        &self.params
    }

    pub fn tolerance(&self) -> &Tolerance<T> {
        &self.params.tolerance
    }

    pub fn triangles_intersect(&self, t1: &Triangle<T>, t2: &Triangle<T>) -> bool {
        triangles_intersect(t1, t2, &self.params.tolerance)
    }

    pub fn find_intersecting(&self, batch: &[Triangle<T>]) -> Vec<TriangleId> {
        let (partial, _) = run_scan(batch, &self.params, &never);
        partial.ids.into_iter().collect()
    }

    /// Scan the batch, calling `poll` before every pair evaluation. Once
    /// `poll` returns true the scan stops and reports
    /// [`ScanOutcome::Cancelled`]. `poll` must not have side effects the scan
    /// depends on; it may be called from several worker threads.
    pub fn scan<F>(&self, batch: &[Triangle<T>], poll: F) -> ScanOutcome
    where
        F: Fn() -> bool + Sync,
    {
        let (partial, cancelled) = run_scan(batch, &self.params, &poll);
        let ids: Vec<TriangleId> = partial.ids.into_iter().collect();
        if cancelled {
            ScanOutcome::Cancelled {
                partial: ids,
                pairs_checked: partial.pairs_checked,
            }
        } else {
            ScanOutcome::Complete(ids)
        }
    }
}
