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

use std::io::{self, BufRead, Write};

use num_traits::NumCast;
use thiserror::Error;
use tracing::warn;

use crate::{
    geometry::triangle::{Triangle, TriangleId},
    numeric::scalar::Scalar,
};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("input is empty, expected a triangle count")]
    MissingCount,
    #[error("invalid triangle count {token:?}")]
    InvalidCount { token: String },
    #[error("invalid coordinate {token:?} (triangle {triangle}, value {index})")]
    InvalidCoordinate {
        token: String,
        triangle: usize,
        index: usize,
    },
    #[error("expected {expected} coordinates, found {found}")]
    Truncated { expected: usize, found: usize },
}

// Whitespace separated tokens across lines; `#` starts a comment.
fn tokenize<R: BufRead>(r: R) -> io::Result<Vec<String>> {
    let mut toks = Vec::new();
    for line in r.lines() {
        let l = line?;
        let trimmed = l.split('#').next().unwrap_or("").trim();
        if trimmed.is_empty() {
            continue;
        }
        toks.extend(trimmed.split_whitespace().map(|s| s.to_string()));
    }
    Ok(toks)
}

/// Read a batch in the plain text format:
///
/// ```text
/// N
/// x0 y0 z0 x1 y1 z1 x2 y2 z2   (N times)
/// ```
///
/// Triangle `k` (zero-based, in input order) gets id `k`.
pub fn read_batch<T: Scalar, R: BufRead>(reader: R) -> Result<Vec<Triangle<T>>, ParseError> {
    let toks = tokenize(reader)?;
    let mut it = toks.iter();

    let count_tok = it.next().ok_or(ParseError::MissingCount)?;
    let count: usize = count_tok.parse().map_err(|_| ParseError::InvalidCount {
        token: count_tok.clone(),
    })?;

    let expected = count.saturating_mul(9);
    let found = toks.len() - 1;
    if found < expected {
        return Err(ParseError::Truncated { expected, found });
    }

    let mut batch = Vec::with_capacity(count);
    for k in 0..count {
        let mut coords = [T::zero(); 9];
        for (index, slot) in coords.iter_mut().enumerate() {
            let tok = it.next().ok_or(ParseError::Truncated { expected, found })?;
            *slot = parse_coordinate(tok).ok_or_else(|| ParseError::InvalidCoordinate {
                token: tok.clone(),
                triangle: k,
                index,
            })?;
        }
        batch.push(Triangle::from_coords(k as TriangleId, coords));
    }

    let trailing = it.count();
    if trailing > 0 {
        warn!(trailing, "ignoring tokens after the last triangle");
    }

    Ok(batch)
}

pub fn parse_batch<T: Scalar>(input: &str) -> Result<Vec<Triangle<T>>, ParseError> {
    read_batch(input.as_bytes())
}

fn parse_coordinate<T: Scalar>(tok: &str) -> Option<T> {
    let v: f64 = tok.parse().ok()?;
    if !v.is_finite() {
        return None;
    }
    let t = <T as NumCast>::from(v)?;
    t.is_finite().then_some(t)
}

/// Write ids one per line.
pub fn write_ids<W: Write>(mut out: W, ids: &[TriangleId]) -> io::Result<()> {
    for id in ids {
        writeln!(out, "{}", id)?;
    }
    out.flush()
}
