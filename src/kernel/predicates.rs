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
    geometry::{point::Point3, triangle::Triangle, vector::VectorOps},
    kernel::orientation::orient3d,
    numeric::{scalar::Scalar, tolerance::Tolerance},
};

/// True if `p` lies on the closed segment `[a, b]`.
///
/// `p` must be collinear with the segment (the cross product vanishes
/// component-wise) and its projection onto `b - a` must fall in
/// `[0, |b - a|²]`, padded by the tolerance on both ends.
pub fn point_on_segment<T: Scalar>(
    p: &Point3<T>,
    a: &Point3<T>,
    b: &Point3<T>,
    tol: &Tolerance<T>,
) -> bool {
    let ab = a.vector_to(b);
    let ap = a.vector_to(p);

    if !tol.is_zero_vector(&ab.cross(&ap)) {
        return false;
    }

    let proj = ap.dot(&ab);
    if proj < -tol.eps() {
        return false;
    }

    let len2 = ab.dot(&ab);
    if proj > len2 + tol.eps() {
        return false;
    }

    // a == b: the cross product is zero for every p, so require p == a.
    if tol.is_zero(len2) {
        return tol.points_eq(p, a);
    }

    true
}

/// Barycentric coordinates `(u, v, w)` of `p` with respect to `(a, b, c)`,
/// so that `p ≈ u·a + v·b + w·c` once projected onto the triangle's plane.
/// `None` for a degenerate triangle, judged relative to the edge lengths so
/// that small triangles keep their interior.
pub fn barycentric_coords<T: Scalar>(
    p: &Point3<T>,
    a: &Point3<T>,
    b: &Point3<T>,
    c: &Point3<T>,
    tol: &Tolerance<T>,
) -> Option<(T, T, T)> {
    let v0 = a.vector_to(b);
    let v1 = a.vector_to(c);
    let v2 = a.vector_to(p);

    let d00 = v0.dot(&v0);
    let d01 = v0.dot(&v1);
    let d11 = v1.dot(&v1);
    let d20 = v2.dot(&v0);
    let d21 = v2.dot(&v1);

    // denom = |v0 × v1|², so this is the sin²θ test of `is_parallel_to`
    let denom = d00 * d11 - d01 * d01;
    if denom <= tol.eps() * (d00 * d11) {
        return None; // degenerate triangle
    }

    let v = (d11 * d20 - d01 * d21) / denom; // coeff of B
    let w = (d00 * d21 - d01 * d20) / denom; // coeff of C
    let u = T::one() - v - w; // coeff of A

    Some((u, v, w))
}

/// Inside-or-on test for `p` against triangle `(a, b, c)`. A degenerate
/// triangle has no interior, so this is always false for one.
pub fn point_in_triangle<T: Scalar>(
    p: &Point3<T>,
    a: &Point3<T>,
    b: &Point3<T>,
    c: &Point3<T>,
    tol: &Tolerance<T>,
) -> bool {
    match barycentric_coords(p, a, b, c, tol) {
        Some((u, v, w)) => {
            let lo = -tol.eps();
            u >= lo && v >= lo && w >= lo
        }
        None => false,
    }
}

/// True if `p` lies on any of the three closed edges of `tri`.
pub fn point_on_triangle_boundary<T: Scalar>(
    p: &Point3<T>,
    tri: &Triangle<T>,
    tol: &Tolerance<T>,
) -> bool {
    tri.edges().iter().any(|e| point_on_segment(p, &e.a, &e.b, tol))
}

/// Coplanarity of two triangles by signed volume.
///
/// Every vertex of `t2` must lie on the plane of `t1` and every vertex of
/// `t1` on the plane of `t2`. The volume `orient3d(a, b, c, q)` is compared
/// against the tolerance scaled by `|n|`, i.e. the distance from `q` to the
/// plane must be below the tolerance. Checking both directions keeps the
/// classification symmetric; a degenerate triangle spans no plane, so its
/// side of the check passes trivially.
pub fn are_coplanar<T: Scalar>(t1: &Triangle<T>, t2: &Triangle<T>, tol: &Tolerance<T>) -> bool {
    on_plane_of(t1, t2, tol) && on_plane_of(t2, t1, tol)
}

fn on_plane_of<T: Scalar>(plane: &Triangle<T>, other: &Triangle<T>, tol: &Tolerance<T>) -> bool {
    if plane.is_degenerate(tol) {
        return true;
    }
    let [a, b, c] = plane.vertices();
    let limit = tol.eps() * plane.normal().norm();
    other
        .vertices()
        .iter()
        .all(|q| orient3d(a, b, c, q).abs() < limit)
}
