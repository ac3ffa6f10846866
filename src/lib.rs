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

//! Pairwise intersection detection for triangles in 3D.
//!
//! Two triangles intersect when they share at least one point; touching at a
//! vertex or along an edge counts. Each pair is routed either to a planar
//! overlap test (when both triangles lie in the same plane) or to a
//! separating-axis test. [`find_intersecting_triangles`] runs every pair of a
//! batch and returns the ids involved in at least one intersection.
//!
//! Every real comparison goes through a single [`Tolerance`], passed by
//! reference.
//!
//! ```
//! use tricheck::{Point3, Tolerance, Triangle, find_intersecting_triangles};
//!
//! let batch = [
//!     Triangle::new(0, Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)),
//!     Triangle::new(1, Point3::new(0.0, 1.0, 0.0), Point3::new(-1.0, 1.0, 0.0), Point3::new(0.0, 2.0, 0.0)),
//!     Triangle::new(2, Point3::new(5.0, 5.0, 5.0), Point3::new(6.0, 5.0, 5.0), Point3::new(5.0, 6.0, 5.0)),
//! ];
//! assert_eq!(find_intersecting_triangles(&batch, &Tolerance::default()), vec![0, 1]);
//! ```

pub mod geometry;
pub mod intersection;
pub mod io;
pub mod kernel;
pub mod numeric;

pub use geometry::{Point3, Segment3, Triangle, TriangleId, Vector3, VectorOps};
pub use intersection::{
    DetectionParams, Detector, ScanOutcome, find_intersecting_triangles,
    find_intersecting_triangles_par, triangles_intersect,
};
pub use numeric::{Scalar, Tolerance, ToleranceError};
