// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::{BenchError, BenchResult, Point};

const B: Point = Point::SUBPATH_BREAK;

const fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// A shape described by a point sequence in the unit square.
///
/// Each subpath is a polyline; [`Point::SUBPATH_BREAK`] starts a new one.
/// Drawing hooks scale points by the shape size.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ShapeData<'a> {
    /// Shape name.
    pub name: &'a str,
    /// Points, including subpath breaks.
    pub points: &'a [Point],
}

impl<'a> ShapeData<'a> {
    /// Creates a shape from a caller-supplied point sequence.
    pub fn new(name: &'a str, points: &'a [Point]) -> Self {
        ShapeData { name, points }
    }

    /// Returns an iterator over non-empty subpaths.
    pub fn subpaths(&self) -> SubPaths<'a> {
        SubPaths {
            points: self.points,
        }
    }
}

impl ShapeData<'static> {
    /// A five-pointed star, self-intersecting.
    pub const STAR: ShapeData<'static> = ShapeData {
        name: "star",
        points: &[
            p(0.500, 0.000),
            p(0.794, 0.905),
            p(0.024, 0.345),
            p(0.976, 0.345),
            p(0.206, 0.905),
        ],
    };

    /// A right-pointing arrow.
    pub const ARROW: ShapeData<'static> = ShapeData {
        name: "arrow",
        points: &[
            p(0.00, 0.35),
            p(0.55, 0.35),
            p(0.55, 0.10),
            p(1.00, 0.50),
            p(0.55, 0.90),
            p(0.55, 0.65),
            p(0.00, 0.65),
        ],
    };

    /// A 2x2 checker made of separate subpaths.
    #[rustfmt::skip]
    pub const CHECKER: ShapeData<'static> = ShapeData {
        name: "checker",
        points: &[
            p(0.0, 0.0), p(0.5, 0.0), p(0.5, 0.5), p(0.0, 0.5),
            B,
            p(0.5, 0.5), p(1.0, 0.5), p(1.0, 1.0), p(0.5, 1.0),
            B,
            p(0.1, 0.6), p(0.4, 0.6), p(0.4, 0.9), p(0.1, 0.9),
            B,
            p(0.6, 0.1), p(0.9, 0.1), p(0.9, 0.4), p(0.6, 0.4),
        ],
    };

    /// A zigzag band.
    pub const ZIGZAG: ShapeData<'static> = ShapeData {
        name: "zigzag",
        points: &[
            p(0.00, 0.30),
            p(0.20, 0.00),
            p(0.40, 0.30),
            p(0.60, 0.00),
            p(0.80, 0.30),
            p(1.00, 0.00),
            p(1.00, 0.70),
            p(0.80, 1.00),
            p(0.60, 0.70),
            p(0.40, 1.00),
            p(0.20, 0.70),
            p(0.00, 1.00),
        ],
    };

    /// All built-in shapes.
    pub const ALL: [ShapeData<'static>; 4] = [
        ShapeData::STAR,
        ShapeData::ARROW,
        ShapeData::CHECKER,
        ShapeData::ZIGZAG,
    ];

    /// Looks up a built-in shape by name.
    pub fn by_name(name: &str) -> BenchResult<ShapeData<'static>> {
        Self::ALL
            .iter()
            .copied()
            .find(|shape| shape.name == name)
            .ok_or_else(|| BenchError::unknown_name("shape", name))
    }
}

/// An iterator over [`ShapeData`] subpaths.
#[derive(Clone, Debug)]
pub struct SubPaths<'a> {
    points: &'a [Point],
}

impl<'a> Iterator for SubPaths<'a> {
    type Item = &'a [Point];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.points.is_empty() {
                return None;
            }

            let end = self
                .points
                .iter()
                .position(Point::is_subpath_break)
                .unwrap_or(self.points.len());

            let subpath = &self.points[..end];
            self.points = self.points.get(end + 1..).unwrap_or(&[]);

            if !subpath.is_empty() {
                return Some(subpath);
            }
        }
    }
}
