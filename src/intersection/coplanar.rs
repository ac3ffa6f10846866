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
    geometry::{segment::Segment3, triangle::Triangle, vector::VectorOps},
    kernel::predicates::{point_in_triangle, point_on_triangle_boundary},
    numeric::{scalar::Scalar, tolerance::Tolerance},
};

/// Overlap test for two triangles already known to share a plane.
///
/// Touching counts: a shared vertex, a vertex resting on the other
/// triangle's edge or two edges meeting at an endpoint all report `true`.
pub fn coplanar_triangles_intersect<T: Scalar>(
    t1: &Triangle<T>,
    t2: &Triangle<T>,
    tol: &Tolerance<T>,
) -> bool {
    // 1) containment, either way round
    if any_vertex_inside(t1, t2, tol) || any_vertex_inside(t2, t1, tol) {
        return true;
    }

    // 2) edge-edge crossings
    let edges1 = t1.edges();
    let edges2 = t2.edges();
    edges1
        .iter()
        .any(|e1| edges2.iter().any(|e2| segments_cross(e1, e2, tol)))
}

/// Some vertex of `inner` lies inside or on the boundary of `outer`.
fn any_vertex_inside<T: Scalar>(inner: &Triangle<T>, outer: &Triangle<T>, tol: &Tolerance<T>) -> bool {
    let [a, b, c] = outer.vertices();
    inner.vertices().iter().any(|p| {
        point_in_triangle(p, a, b, c, tol) || point_on_triangle_boundary(p, outer, tol)
    })
}

/// Proper or touching crossing of two coplanar segments.
///
/// Parallel segments (including zero-length ones) are never reported here;
/// when they overlap, an endpoint of one lies on the other and the vertex
/// checks already caught it.
pub fn segments_cross<T: Scalar>(s1: &Segment3<T>, s2: &Segment3<T>, tol: &Tolerance<T>) -> bool {
    let r = s1.direction();
    let u = s2.direction();
    if r.is_parallel_to(&u, tol) {
        return false;
    }

    // s1.a + s·r = s2.a + t·u, solved in the plane spanned by r and u
    let n = r.cross(&u);
    let nn = n.norm_squared();
    let w = s1.a.vector_to(&s2.a);
    let s = w.cross(&u).dot(&n) / nn;
    let t = w.cross(&r).dot(&n) / nn;

    let lo = -tol.eps();
    let hi = T::one() + tol.eps();
    s >= lo && s <= hi && t >= lo && t <= hi
}
