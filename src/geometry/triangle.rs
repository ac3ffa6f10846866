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
        point::Point3,
        segment::Segment3,
        vector::{Vector3, VectorOps},
    },
    numeric::{scalar::Scalar, tolerance::Tolerance},
};

/// Caller-assigned identifier; unique within a batch, unrelated to position.
pub type TriangleId = i64;

/// Three ordered vertices plus the identifier they are reported under.
///
/// Fields are private so a triangle cannot change after construction; the
/// plane normal is always derived from the vertices via [`Triangle::normal`].
#[derive(Debug, Clone, Copy)]
pub struct Triangle<T: Scalar> {
    id: TriangleId,
    vertices: [Point3<T>; 3],
}

impl<T: Scalar> Triangle<T> {
    pub fn new(id: TriangleId, a: Point3<T>, b: Point3<T>, c: Point3<T>) -> Self {
        Self {
            id,
            vertices: [a, b, c],
        }
    }

    /// Build from `x0 y0 z0 x1 y1 z1 x2 y2 z2`.
    pub fn from_coords(id: TriangleId, c: [T; 9]) -> Self {
        Self::new(
            id,
            Point3::new(c[0], c[1], c[2]),
            Point3::new(c[3], c[4], c[5]),
            Point3::new(c[6], c[7], c[8]),
        )
    }

    #[inline]
    pub fn id(&self) -> TriangleId {
        self.id
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3<T>; 3] {
        &self.vertices
    }

    #[inline]
    pub fn vertex(&self, i: usize) -> &Point3<T> {
        &self.vertices[i]
    }

    /// Edge vectors `v1 - v0`, `v2 - v1`, `v0 - v2`.
    pub fn edge_vectors(&self) -> [Vector3<T>; 3] {
        let [a, b, c] = self.vertices;
        [b - a, c - b, a - c]
    }

    pub fn edges(&self) -> [Segment3<T>; 3] {
        let [a, b, c] = &self.vertices;
        [
            Segment3::new(a, b),
            Segment3::new(b, c),
            Segment3::new(c, a),
        ]
    }

    /// Unnormalized plane normal `(v1 - v0) × (v2 - v0)`; its length is twice
    /// the area.
    pub fn normal(&self) -> Vector3<T> {
        let [a, b, c] = self.vertices;
        (b - a).cross(&(c - a))
    }

    pub fn unit_normal(&self, tol: &Tolerance<T>) -> Vector3<T> {
        self.normal().normalized(tol)
    }

    pub fn area(&self) -> T {
        self.normal().norm() / T::two()
    }

    /// Collinear or coincident vertices: the two edges leaving vertex 0 are
    /// parallel within tolerance.
    pub fn is_degenerate(&self, tol: &Tolerance<T>) -> bool {
        let [a, b, c] = self.vertices;
        (b - a).is_parallel_to(&(c - a), tol)
    }

    /// Same triangle shifted by `offset`, keeping the id.
    pub fn translated(&self, offset: &Vector3<T>) -> Self {
        let [a, b, c] = self.vertices;
        Self::new(self.id, a + *offset, b + *offset, c + *offset)
    }

    /// Same vertices under another id.
    pub fn with_id(&self, id: TriangleId) -> Self {
        Self {
            id,
            vertices: self.vertices,
        }
    }
}
