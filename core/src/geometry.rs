// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/// A point.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Marks the start of a new subpath inside a point sequence.
    pub const SUBPATH_BREAK: Point = Point { x: -1.0, y: -1.0 };

    /// Creates a new `Point`.
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Checks that point is a [`Point::SUBPATH_BREAK`].
    pub fn is_subpath_break(&self) -> bool {
        *self == Point::SUBPATH_BREAK
    }
}

/// An integer size.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub struct SizeI {
    pub w: i32,
    pub h: i32,
}

impl SizeI {
    /// Creates a new `SizeI`.
    pub fn new(w: i32, h: i32) -> Self {
        SizeI { w, h }
    }

    /// Converts into [`Size`].
    pub fn to_size(self) -> Size {
        Size::new(f64::from(self.w), f64::from(self.h))
    }
}

/// A size.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    /// Creates a new `Size`.
    pub fn new(w: f64, h: f64) -> Self {
        Size { w, h }
    }
}

/// An integer rectangle.
///
/// Unlike backend rectangles, can be empty.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub struct RectI {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl RectI {
    /// Creates a new `RectI`.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        RectI { x, y, w, h }
    }

    /// Converts into [`Rect`].
    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.w),
            f64::from(self.h),
        )
    }
}

/// A rectangle.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// Creates a new `Rect`.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect { x, y, w, h }
    }

    /// Returns rect's center.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Returns a point at the provided fraction of width and height.
    pub fn lerp(&self, tx: f64, ty: f64) -> (f64, f64) {
        (self.x + self.w * tx, self.y + self.h * ty)
    }
}

/// An affine transform.
///
/// Maps `(x, y)` into `(sx * x + kx * y + tx, ky * x + sy * y + ty)`.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Affine {
    pub sx: f64,
    pub ky: f64,
    pub kx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Affine::identity()
    }
}

impl Affine {
    /// Creates an identity transform.
    pub fn identity() -> Self {
        Affine::from_row(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Creates a new `Affine`.
    pub fn from_row(sx: f64, ky: f64, kx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Affine {
            sx,
            ky,
            kx,
            sy,
            tx,
            ty,
        }
    }

    /// Creates a translate transform.
    pub fn translation(tx: f64, ty: f64) -> Self {
        Affine::from_row(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Creates a transform that rotates by `angle` radians around `(cx, cy)`.
    pub fn rotation_about(angle: f64, cx: f64, cy: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Affine::from_row(
            cos,
            sin,
            -sin,
            cos,
            cx - cx * cos + cy * sin,
            cy - cx * sin - cy * cos,
        )
    }

    /// Checks that transform is identity.
    pub fn is_identity(&self) -> bool {
        *self == Affine::identity()
    }

    /// Maps a point.
    pub fn map(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.sx * x + self.kx * y + self.tx,
            self.ky * x + self.sy * y + self.ty,
        )
    }

    /// Returns `[sx, ky, kx, sy, tx, ty]` in single precision.
    pub fn to_f32_row(&self) -> [f32; 6] {
        [
            self.sx as f32,
            self.ky as f32,
            self.kx as f32,
            self.sy as f32,
            self.tx as f32,
            self.ty as f32,
        ]
    }
}
