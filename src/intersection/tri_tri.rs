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

use crate::{
    geometry::triangle::Triangle,
    intersection::{coplanar::coplanar_triangles_intersect, sat::sat_triangles_intersect},
    kernel::predicates::are_coplanar,
    numeric::{scalar::Scalar, tolerance::Tolerance},
};

/// Which test a pair of triangles is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairKind {
    Coplanar,
    General,
}

pub fn classify_pair<T: Scalar>(t1: &Triangle<T>, t2: &Triangle<T>, tol: &Tolerance<T>) -> PairKind {
    if are_coplanar(t1, t2, tol) {
        PairKind::Coplanar
    } else {
        PairKind::General
    }
}

/// True if the two triangles share at least one point (touching included).
pub fn triangles_intersect<T: Scalar>(t1: &Triangle<T>, t2: &Triangle<T>, tol: &Tolerance<T>) -> bool {
    match classify_pair(t1, t2, tol) {
        PairKind::Coplanar => coplanar_triangles_intersect(t1, t2, tol),
        PairKind::General => sat_triangles_intersect(t1, t2, tol),
    }
}
