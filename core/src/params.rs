// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use serde::{Deserialize, Serialize};

use crate::{BenchError, BenchResult, CompOp, SizeI, Style};

/// A pixel format of driver-owned buffers.
///
/// A pixel is a native-endian `u32` word laid out as `0xAARRGGBB`.
/// How a backend interprets the word's bytes is up to the backend.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum PixelFormat {
    /// 32-bit, premultiplied alpha.
    Prgb32,
}

impl Default for PixelFormat {
    fn default() -> Self {
        PixelFormat::Prgb32
    }
}

impl PixelFormat {
    /// Returns the number of bytes per pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Prgb32 => 4,
        }
    }
}

/// Parameters of a single benchmark run.
///
/// Stays unchanged between `on_before_run` and `on_after_run`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct BenchParams {
    /// Destination width in pixels.
    pub screen_w: u32,
    /// Destination height in pixels.
    pub screen_h: u32,
    /// Destination pixel format.
    pub format: PixelFormat,
    /// Fill style.
    pub style: Style,
    /// Compositing operator.
    pub comp_op: CompOp,
    /// Width and height of each shape.
    pub shape_size: u32,
    /// Stroke width used by stroking hooks.
    pub stroke_width: f64,
    /// Number of shapes a single hook draws.
    pub quantity: u32,
}

impl Default for BenchParams {
    fn default() -> Self {
        BenchParams {
            screen_w: 512,
            screen_h: 600,
            format: PixelFormat::Prgb32,
            style: Style::Solid,
            comp_op: CompOp::SrcOver,
            shape_size: 64,
            stroke_width: 2.0,
            quantity: 1000,
        }
    }
}

impl BenchParams {
    /// Checks that parameters describe a drawable run.
    pub fn validate(&self) -> BenchResult<()> {
        if self.screen_w == 0 || self.screen_h == 0 {
            return Err(BenchError::invalid_params(format!(
                "screen size {}x{} is empty",
                self.screen_w, self.screen_h
            )));
        }

        if i32::try_from(self.screen_w).is_err() || i32::try_from(self.screen_h).is_err() {
            return Err(BenchError::invalid_params(format!(
                "screen size {}x{} is too big",
                self.screen_w, self.screen_h
            )));
        }

        let pixels = (self.screen_w as usize).checked_mul(self.screen_h as usize);
        let bytes = pixels.and_then(|n| n.checked_mul(self.format.bytes_per_pixel()));
        if bytes.is_none() {
            return Err(BenchError::invalid_params("screen pixel count overflows"));
        }

        if self.shape_size == 0 || i32::try_from(self.shape_size).is_err() {
            return Err(BenchError::invalid_params(format!(
                "shape size {} is out of range",
                self.shape_size
            )));
        }

        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(BenchError::invalid_params(format!(
                "stroke width {} must be finite and positive",
                self.stroke_width
            )));
        }

        Ok(())
    }

    /// Returns screen size.
    pub fn screen_size(&self) -> SizeI {
        SizeI::new(self.screen_w as i32, self.screen_h as i32)
    }

    /// Returns the area base points are picked from,
    /// so a `shape_size` box at that point stays on screen.
    pub fn base_bounds(&self) -> SizeI {
        let size = self.shape_size as i32;
        SizeI::new(
            (self.screen_w as i32).saturating_sub(size).max(0),
            (self.screen_h as i32).saturating_sub(size).max(0),
        )
    }
}
