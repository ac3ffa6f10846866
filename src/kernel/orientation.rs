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
    geometry::{point::Point3, vector::VectorOps},
    numeric::scalar::Scalar,
};

/// Signed volume of the tetrahedron (a, b, c, d) times six:
/// `((b - a) × (c - a)) · (d - a)`.
///
/// - >0 if `d` lies on the side `(b - a) × (c - a)` points to
/// - <0 on the opposite side
/// - =0 if the four points are coplanar
pub fn orient3d<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>, d: &Point3<T>) -> T {
    let ab = a.vector_to(b);
    let ac = a.vector_to(c);
    let ad = a.vector_to(d);

    ab.cross(&ac).dot(&ad)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tet() -> [Point3<f64>; 4] {
        [
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(4.0, 2.0, 3.0),
            Point3::new(1.0, 5.0, 3.0),
            Point3::new(1.0, 2.0, 7.0),
        ]
    }

    #[test]
    fn swapping_two_vertices_flips_the_sign() {
        let [a, b, c, d] = tet();
        let vol = orient3d(&a, &b, &c, &d);
        assert_eq!(vol, 36.0);
        assert_eq!(orient3d(&b, &a, &c, &d), -vol);
        assert_eq!(orient3d(&a, &c, &b, &d), -vol);
    }

    #[test]
    fn translation_keeps_the_volume() {
        let [a, b, c, d] = tet();
        let t = Point3::new(-128.0, 64.0, 1024.0);
        assert_eq!(
            orient3d(&(a + t), &(b + t), &(c + t), &(d + t)),
            orient3d(&a, &b, &c, &d)
        );
    }

    #[test]
    fn volume_scales_with_the_cube() {
        let [a, b, c, d] = tet();
        let s = 0.5;
        let scaled = orient3d(&(a * s), &(b * s), &(c * s), &(d * s));
        assert_eq!(scaled, 36.0 * s * s * s);
    }

    #[test]
    fn fourth_point_in_the_plane_is_zero() {
        let [a, b, c, _] = tet();
        let d = Point3::new(-6.0, 11.0, 3.0);
        assert_eq!(orient3d(&a, &b, &c, &d), 0.0);

        let af = Point3::new(0.0f32, 0.0, 0.0);
        let bf = Point3::new(1.0f32, 0.0, 0.0);
        let cf = Point3::new(0.0f32, 1.0, 0.0);
        assert!(orient3d(&af, &bf, &cf, &Point3::new(0.25, 0.25, -2.0)) < 0.0);
    }
}
