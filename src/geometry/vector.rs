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
    geometry::point::Point3,
    numeric::{scalar::Scalar, tolerance::Tolerance},
};

/// Directions share their representation with positions.
pub type Vector3<T> = Point3<T>;

pub trait VectorOps<T: Scalar>: Sized {
    fn dot(&self, other: &Self) -> T;
    fn cross(&self, other: &Self) -> Self;
    fn scale(&self, s: T) -> Self;

    /// `self · (b × c)`, the signed volume of the parallelepiped they span.
    fn triple(&self, b: &Self, c: &Self) -> T {
        self.dot(&b.cross(c))
    }

    fn norm_squared(&self) -> T {
        self.dot(self)
    }

    fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Near-parallel (or a zero vector involved): `sin²θ` between the two
    /// directions does not exceed the tolerance.
    fn is_parallel_to(&self, other: &Self, tol: &Tolerance<T>) -> bool {
        self.cross(other).norm_squared()
            <= tol.eps() * (self.norm_squared() * other.norm_squared())
    }

    /// Unit vector in the same direction, or `self` untouched when its
    /// length is below tolerance.
    fn normalized(&self, tol: &Tolerance<T>) -> Self;
}

impl<T: Scalar> VectorOps<T> for Vector3<T> {
    fn dot(&self, other: &Vector3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn cross(&self, other: &Vector3<T>) -> Vector3<T> {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    fn scale(&self, s: T) -> Vector3<T> {
        *self * s
    }

    fn normalized(&self, tol: &Tolerance<T>) -> Vector3<T> {
        let n = self.norm();
        if n < tol.eps() {
            return *self;
        }
        Vector3::new(self.x / n, self.y / n, self.z / n)
    }
}
