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
    geometry::{
        triangle::Triangle,
        vector::{Vector3, VectorOps},
    },
    numeric::{scalar::Scalar, tolerance::Tolerance},
};

/// Project a triangle onto `axis`, returning (min,max).
pub fn project_triangle<T: Scalar>(tri: &Triangle<T>, axis: &Vector3<T>) -> (T, T) {
    let [p0, p1, p2] = tri.vertices().map(|v| v.dot(axis));

    let mut min = p0;
    let mut max = p0;
    for p in [p1, p2] {
        if p < min {
            min = p;
        }
        if p > max {
            max = p;
        }
    }
    (min, max)
}

/// Unit direction of `a × b`, or `None` when the two are parallel and the
/// cross product carries no direction.
fn cross_axis<T: Scalar>(a: &Vector3<T>, b: &Vector3<T>, tol: &Tolerance<T>) -> Option<Vector3<T>> {
    if a.is_parallel_to(b, tol) {
        return None;
    }
    Some(a.cross(b).normalized(tol))
}

/// True if the projections of `t1` and `t2` onto `axis` are disjoint by
/// more than the tolerance.
pub fn separated_on_axis<T: Scalar>(
    t1: &Triangle<T>,
    t2: &Triangle<T>,
    axis: &Vector3<T>,
    tol: &Tolerance<T>,
) -> bool {
    let (min1, max1) = project_triangle(t1, axis);
    let (min2, max2) = project_triangle(t2, axis);
    min2 - max1 > tol.eps() || min1 - max2 > tol.eps()
}

/// The up to seventeen candidate separating axes: each face normal followed
/// by the in-plane normals `n × e` of that face's edges, then the cross
/// products of every edge of `t1` with every edge of `t2`.
///
/// The in-plane normals separate pairs that are almost coplanar, where every
/// edge-edge product is either dropped as parallel or close to the normal.
pub fn candidate_axes<T: Scalar>(
    t1: &Triangle<T>,
    t2: &Triangle<T>,
    tol: &Tolerance<T>,
) -> Vec<Vector3<T>> {
    let mut axes = Vec::with_capacity(17);

    for tri in [t1, t2] {
        let [a, b, c] = tri.vertices();
        if let Some(n) = cross_axis(&a.vector_to(b), &a.vector_to(c), tol) {
            axes.push(n);
            for e in tri.edge_vectors() {
                axes.extend(cross_axis(&n, &e, tol));
            }
        }
    }

    let edges2 = t2.edge_vectors();
    for e1 in t1.edge_vectors() {
        for e2 in &edges2 {
            axes.extend(cross_axis(&e1, e2, tol));
        }
    }
    axes
}

/// Separating-axis test for two triangles in general position.
///
/// Returns `false` as soon as one candidate axis separates the triangles and
/// `true` once every axis has been tried.
pub fn sat_triangles_intersect<T: Scalar>(
    t1: &Triangle<T>,
    t2: &Triangle<T>,
    tol: &Tolerance<T>,
) -> bool {
    !candidate_axes(t1, t2, tol)
        .iter()
        .any(|axis| separated_on_axis(t1, t2, axis, tol))
}
