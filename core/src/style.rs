// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BenchError;

/// A fill style requested by the driver.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    /// A random solid color per shape.
    Solid,
    /// Linear gradient, pad edges.
    LinearPad,
    /// Linear gradient, repeated.
    LinearRepeat,
    /// Linear gradient, reflected.
    LinearReflect,
    /// Radial gradient, pad edges.
    RadialPad,
    /// Radial gradient, repeated.
    RadialRepeat,
    /// Radial gradient, reflected.
    RadialReflect,
    /// Conic (sweep) gradient.
    Conic,
    /// Sprite pattern, nearest-neighbor sampling.
    #[serde(rename = "pattern-nn")]
    PatternNearest,
    /// Sprite pattern, bilinear sampling.
    #[serde(rename = "pattern-bi")]
    PatternBilinear,
}

impl Default for Style {
    fn default() -> Self {
        Style::Solid
    }
}

/// A style family, without edge handling.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum StyleKind {
    Solid,
    Linear,
    Radial,
    Conic,
    Pattern(SpriteFilter),
}

/// Sprite sampling used by pattern styles.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SpriteFilter {
    Nearest,
    Bilinear,
}

impl Style {
    /// All styles in code order.
    pub const ALL: [Style; 10] = [
        Style::Solid,
        Style::LinearPad,
        Style::LinearRepeat,
        Style::LinearReflect,
        Style::RadialPad,
        Style::RadialRepeat,
        Style::RadialReflect,
        Style::Conic,
        Style::PatternNearest,
        Style::PatternBilinear,
    ];

    /// Creates a style from its numeric code.
    pub fn from_u32(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Returns style's numeric code.
    pub fn to_u32(self) -> u32 {
        self as u32
    }

    /// Returns style's name, as used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Style::Solid => "solid",
            Style::LinearPad => "linear-pad",
            Style::LinearRepeat => "linear-repeat",
            Style::LinearReflect => "linear-reflect",
            Style::RadialPad => "radial-pad",
            Style::RadialRepeat => "radial-repeat",
            Style::RadialReflect => "radial-reflect",
            Style::Conic => "conic",
            Style::PatternNearest => "pattern-nn",
            Style::PatternBilinear => "pattern-bi",
        }
    }

    /// Returns style's family.
    pub fn kind(self) -> StyleKind {
        match self {
            Style::Solid => StyleKind::Solid,
            Style::LinearPad | Style::LinearRepeat | Style::LinearReflect => StyleKind::Linear,
            Style::RadialPad | Style::RadialRepeat | Style::RadialReflect => StyleKind::Radial,
            Style::Conic => StyleKind::Conic,
            Style::PatternNearest => StyleKind::Pattern(SpriteFilter::Nearest),
            Style::PatternBilinear => StyleKind::Pattern(SpriteFilter::Bilinear),
        }
    }

    /// Checks that style is a gradient of any kind.
    pub fn is_gradient(self) -> bool {
        matches!(self.kind(), StyleKind::Linear | StyleKind::Radial | StyleKind::Conic)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.name() == s)
            .ok_or_else(|| BenchError::unknown_name("style", s))
    }
}

/// How a gradient behaves outside of its defined extent.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeMode {
    /// Replicate the edge color.
    Clamp,
    /// Tile.
    Repeat,
    /// Tile, alternating mirror images.
    Mirror,
}

impl Default for EdgeMode {
    fn default() -> Self {
        EdgeMode::Clamp
    }
}

impl EdgeMode {
    /// Derives gradient edge handling from a style.
    ///
    /// Non-gradient styles and conic gradients use `Clamp`.
    pub fn from_style(style: Style) -> Self {
        match style {
            Style::LinearRepeat | Style::RadialRepeat => EdgeMode::Repeat,
            Style::LinearReflect | Style::RadialReflect => EdgeMode::Mirror,
            Style::Solid
            | Style::LinearPad
            | Style::RadialPad
            | Style::Conic
            | Style::PatternNearest
            | Style::PatternBilinear => EdgeMode::Clamp,
        }
    }

    /// Derives gradient edge handling from a raw style code.
    ///
    /// Unknown codes use `Clamp`.
    pub fn from_style_code(code: u32) -> Self {
        Style::from_u32(code).map(Self::from_style).unwrap_or_default()
    }
}
