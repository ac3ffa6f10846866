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

use std::ops::{Add, Mul, Neg, Sub};

use crate::numeric::scalar::Scalar;

/// A point (or free vector) in 3D space.
///
/// `Point3` is a `Copy` value: every operator returns a fresh point and no
/// operand is ever modified. It has no `PartialEq`; equality is
/// always decided through a [`Tolerance`](crate::numeric::Tolerance).
#[derive(Debug, Clone, Copy)]
pub struct Point3<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    pub fn coords(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Vector from `self` to `other`.
    pub fn vector_to(&self, other: &Self) -> Self {
        *other - *self
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        (*self + *other) * (T::one() / T::two())
    }
}

impl<T: Scalar> From<[T; 3]> for Point3<T> {
    fn from(coords: [T; 3]) -> Self {
        Self::new(coords[0], coords[1], coords[2])
    }
}

impl<T: Scalar> From<(T, T, T)> for Point3<T> {
    fn from(coords: (T, T, T)) -> Self {
        Self::new(coords.0, coords.1, coords.2)
    }
}

impl<T: Scalar> Add for Point3<T> {
    type Output = Point3<T>;
    fn add(self, rhs: Point3<T>) -> Point3<T> {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<'a, 'b, T: Scalar> Add<&'b Point3<T>> for &'a Point3<T> {
    type Output = Point3<T>;
    fn add(self, rhs: &'b Point3<T>) -> Point3<T> {
        *self + *rhs
    }
}

impl<T: Scalar> Sub for Point3<T> {
    type Output = Point3<T>;
    fn sub(self, rhs: Point3<T>) -> Point3<T> {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<'a, 'b, T: Scalar> Sub<&'b Point3<T>> for &'a Point3<T> {
    type Output = Point3<T>;
    fn sub(self, rhs: &'b Point3<T>) -> Point3<T> {
        *self - *rhs
    }
}

impl<T: Scalar> Mul<T> for Point3<T> {
    type Output = Point3<T>;
    fn mul(self, s: T) -> Point3<T> {
        Point3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl<T: Scalar> Neg for Point3<T> {
    type Output = Point3<T>;
    fn neg(self) -> Point3<T> {
        Point3::new(-self.x, -self.y, -self.z)
    }
}
