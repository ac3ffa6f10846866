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

use num_traits::Float;

use std::fmt::{Debug, Display};

/// Floating scalar the kernel is generic over.
///
/// All arithmetic comes from [`Float`]; the only thing a scalar adds is the
/// tolerance it is compared with when the caller does not pick one.
pub trait Scalar: Float + Debug + Display + Send + Sync + 'static {
    fn default_tolerance() -> Self;

    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl Scalar for f64 {
    fn default_tolerance() -> Self {
        1e-12
    }
}

impl Scalar for f32 {
    fn default_tolerance() -> Self {
        1e-6
    }
}
