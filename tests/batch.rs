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

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::{Rng, SeedableRng, rngs::StdRng};

use tricheck::geometry::{Point3, Triangle, TriangleId};
use tricheck::intersection::{
    DetectionParams, Detector, ScanOutcome, find_intersecting_triangles,
    find_intersecting_triangles_par, triangles_intersect,
};
use tricheck::numeric::Tolerance;

fn tri(id: TriangleId, a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Triangle<f64> {
    Triangle::new(id, a.into(), b.into(), c.into())
}

fn random_batch(rng: &mut StdRng, n: usize, extent: f64, size: f64) -> Vec<Triangle<f64>> {
    (0..n)
        .map(|k| {
            let base = Point3::new(
                rng.random_range(0.0..extent),
                rng.random_range(0.0..extent),
                rng.random_range(0.0..extent),
            );
            let mut corner = || {
                base + Point3::new(
                    rng.random_range(-size..size),
                    rng.random_range(-size..size),
                    rng.random_range(-size..size),
                )
            };
            let a = corner();
            let b = corner();
            let c = corner();
            Triangle::new(k as TriangleId, a, b, c)
        })
        .collect()
}

fn brute_force(batch: &[Triangle<f64>], tol: &Tolerance<f64>) -> Vec<TriangleId> {
    let mut ids: Vec<TriangleId> = batch
        .iter()
        .enumerate()
        .filter(|(i, a)| {
            batch
                .iter()
                .enumerate()
                .any(|(j, b)| *i != j && triangles_intersect(*a, b, tol))
        })
        .map(|(_, t)| t.id())
        .collect();
    ids.sort();
    ids
}

#[test]
fn test_empty_and_single() {
    let tol = Tolerance::default();
    let empty: Vec<Triangle<f64>> = Vec::new();
    assert!(find_intersecting_triangles(&empty, &tol).is_empty());
    assert!(find_intersecting_triangles_par(&empty, &tol).is_empty());

    let single = vec![tri(0, [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0])];
    assert!(find_intersecting_triangles(&single, &tol).is_empty());
}

#[test]
fn test_reference_scenarios() {
    let tol = Tolerance::default();

    let overlap = vec![
        tri(0, [0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]),
        tri(1, [1.0, 1.0, 0.0], [3.0, 1.0, 0.0], [1.0, 3.0, 0.0]),
    ];
    assert_eq!(find_intersecting_triangles(&overlap, &tol), vec![0, 1]);

    let apart = vec![
        tri(0, [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        tri(1, [2.0, 2.0, 1.0], [3.0, 2.0, 1.0], [2.0, 3.0, 1.0]),
    ];
    assert!(find_intersecting_triangles(&apart, &tol).is_empty());

    let vertex_touch = vec![
        tri(0, [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        tri(1, [0.0, 1.0, 0.0], [-1.0, 1.0, 0.0], [0.0, 2.0, 0.0]),
    ];
    assert_eq!(find_intersecting_triangles(&vertex_touch, &tol), vec![0, 1]);

    let edge_touch = vec![
        tri(0, [0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]),
        tri(1, [0.0, 2.0, 0.0], [2.0, 2.0, 0.0], [0.0, 4.0, 0.0]),
    ];
    assert_eq!(find_intersecting_triangles(&edge_touch, &tol), vec![0, 1]);

    let crossing = vec![
        tri(0, [0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]),
        tri(1, [1.0, 0.0, -1.0], [1.0, 2.0, 1.0], [2.0, 1.0, 1.0]),
    ];
    assert_eq!(find_intersecting_triangles(&crossing, &tol), vec![0, 1]);

    let stacked = vec![
        tri(0, [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        tri(1, [0.0, 0.0, 0.001], [1.0, 0.0, 0.001], [0.0, 1.0, 0.001]),
    ];
    assert!(find_intersecting_triangles(&stacked, &tol).is_empty());
}

#[test]
fn test_ids_come_from_triangles_not_positions() {
    let tol = Tolerance::default();
    let batch = vec![
        tri(42, [5.0, 5.0, 5.0], [6.0, 5.0, 5.0], [5.0, 6.0, 5.0]),
        tri(-7, [0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]),
        tri(3, [1.0, 0.0, -1.0], [1.0, 2.0, 1.0], [2.0, 1.0, 1.0]),
    ];
    assert_eq!(find_intersecting_triangles(&batch, &tol), vec![-7, 3]);
}

#[test]
fn test_result_is_sorted_and_unique() {
    let tol = Tolerance::default();
    // 9 touches everything else, the rest only touch 9
    let hub = tri(9, [0.0, 0.0, -1.0], [0.0, 0.0, 1.0], [10.0, 0.0, 0.0]);
    let batch = vec![
        hub,
        tri(5, [1.0, -1.0, 0.0], [1.0, 1.0, 0.0], [1.5, 0.0, 0.5]),
        tri(2, [4.0, -1.0, 0.0], [4.0, 1.0, 0.0], [4.5, 0.0, 0.5]),
        tri(7, [7.0, -1.0, 0.0], [7.0, 1.0, 0.0], [7.5, 0.0, 0.5]),
        tri(11, [20.0, 20.0, 20.0], [21.0, 20.0, 20.0], [20.0, 21.0, 20.0]),
    ];
    assert_eq!(find_intersecting_triangles(&batch, &tol), vec![2, 5, 7, 9]);
}

#[test]
fn test_disjoint_grid_is_empty() {
    let tol = Tolerance::default();
    let batch: Vec<Triangle<f64>> = (0..300)
        .map(|i| {
            let x = 3.0 * i as f64;
            tri(i, [x, 0.0, 0.0], [x + 1.0, 0.0, 0.0], [x, 1.0, 0.0])
        })
        .collect();
    assert!(find_intersecting_triangles(&batch, &tol).is_empty());
    assert!(find_intersecting_triangles_par(&batch, &tol).is_empty());
}

#[test]
fn test_matches_brute_force_on_random_soup() {
    let tol = Tolerance::default();
    let mut rng = StdRng::seed_from_u64(0x7121);
    for _ in 0..4 {
        let batch = random_batch(&mut rng, 60, 10.0, 1.5);
        let expected = brute_force(&batch, &tol);
        assert_eq!(find_intersecting_triangles(&batch, &tol), expected);
        assert_eq!(find_intersecting_triangles_par(&batch, &tol), expected);
    }
}

#[test]
fn test_input_order_does_not_matter() {
    let tol = Tolerance::default();
    let mut rng = StdRng::seed_from_u64(99);
    let batch = random_batch(&mut rng, 40, 6.0, 1.0);
    let mut reversed = batch.clone();
    reversed.reverse();
    assert_eq!(
        find_intersecting_triangles(&batch, &tol),
        find_intersecting_triangles(&reversed, &tol)
    );
}

#[test]
fn test_detector_uses_its_params() {
    let stacked = vec![
        tri(0, [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        tri(1, [0.0, 0.0, 0.001], [1.0, 0.0, 0.001], [0.0, 1.0, 0.001]),
    ];

    let strict = Detector::<f64>::default();
    assert!(strict.find_intersecting(&stacked).is_empty());

    let loose = Detector::with_tolerance(Tolerance::new(0.01).unwrap());
    assert_eq!(loose.tolerance().eps(), 0.01);
    assert_eq!(loose.find_intersecting(&stacked), vec![0, 1]);

    let par = Detector::new(DetectionParams {
        tolerance: Tolerance::new(0.01).unwrap(),
        parallel: true,
    });
    assert!(par.params().parallel);
    assert_eq!(par.find_intersecting(&stacked), vec![0, 1]);
    assert!(par.triangles_intersect(&stacked[0], &stacked[1]));
}

#[test]
fn test_scan_without_cancellation_completes() {
    let mut rng = StdRng::seed_from_u64(5);
    let batch = random_batch(&mut rng, 30, 5.0, 1.0);
    let detector = Detector::<f64>::default();
    let expected = detector.find_intersecting(&batch);

    let outcome = detector.scan(&batch, || false);
    assert!(outcome.is_complete());
    assert_eq!(outcome.complete(), Some(expected));
}

#[test]
fn test_scan_cancelled_immediately() {
    let batch = vec![
        tri(0, [0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]),
        tri(1, [1.0, 1.0, 0.0], [3.0, 1.0, 0.0], [1.0, 3.0, 0.0]),
    ];
    for parallel in [false, true] {
        let detector = Detector::new(DetectionParams {
            tolerance: Tolerance::default(),
            parallel,
        });
        let outcome = detector.scan(&batch, || true);
        assert_eq!(
            outcome,
            ScanOutcome::Cancelled {
                partial: vec![],
                pairs_checked: 0
            }
        );
    }
}

#[test]
fn test_scan_cancelled_midway_is_not_complete() {
    // 5 triangles, 10 pairs; stop after 4
    let batch: Vec<Triangle<f64>> = (0..5)
        .map(|i| {
            let x = i as f64;
            tri(i, [x, 0.0, 0.0], [x + 1.0, 0.0, 0.0], [x, 1.0, 0.0])
        })
        .collect();
    let calls = AtomicUsize::new(0);
    let detector = Detector::<f64>::default();

    let outcome = detector.scan(&batch, || calls.fetch_add(1, Ordering::SeqCst) >= 4);
    assert!(!outcome.is_complete());
    match outcome {
        ScanOutcome::Cancelled {
            partial,
            pairs_checked,
        } => {
            assert_eq!(pairs_checked, 4);
            // pairs (0,1) (0,2) (0,3) (0,4); only (0,1) touches
            assert_eq!(partial, vec![0, 1]);
        }
        ScanOutcome::Complete(_) => panic!("cancelled scan reported complete"),
    }
}
