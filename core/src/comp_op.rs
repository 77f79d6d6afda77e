// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::BenchError;

/// A compositing operator requested by the driver.
///
/// The numeric codes are stable and match the order below.
/// Backends translate it into their own blend mode enumeration.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompOp {
    /// Source over destination.
    SrcOver,
    /// Replaces destination.
    SrcCopy,
    /// Source trimmed inside destination.
    SrcIn,
    /// Source trimmed outside destination.
    SrcOut,
    /// Source inside destination blended with destination.
    SrcAtop,
    /// Destination over source.
    DstOver,
    /// Preserves destination.
    DstCopy,
    /// Destination trimmed by source.
    DstIn,
    /// Destination trimmed outside source.
    DstOut,
    /// Destination inside source blended with source.
    DstAtop,
    /// Each of source and destination trimmed outside the other.
    Xor,
    /// Replaces destination with zero.
    Clear,
    /// Sum of colors.
    Plus,
    /// Product of premultiplied colors.
    Modulate,
    /// Multiply source with destination.
    Multiply,
    /// Multiply inverse of pixels, inverting result.
    Screen,
    /// Multiply or screen, depending on destination.
    Overlay,
    /// Darker of source and destination.
    Darken,
    /// Lighter of source and destination.
    Lighten,
    /// Brighten destination to reflect source.
    ColorDodge,
    /// Darken destination to reflect source.
    ColorBurn,
    /// Multiply or screen, depending on source.
    HardLight,
    /// Lighten or darken, depending on source.
    SoftLight,
    /// Subtract darker from lighter with higher contrast.
    Difference,
    /// Subtract darker from lighter with lower contrast.
    Exclusion,
}

impl Default for CompOp {
    fn default() -> Self {
        CompOp::SrcOver
    }
}

impl CompOp {
    /// All operators in code order.
    pub const ALL: [CompOp; 25] = [
        CompOp::SrcOver,
        CompOp::SrcCopy,
        CompOp::SrcIn,
        CompOp::SrcOut,
        CompOp::SrcAtop,
        CompOp::DstOver,
        CompOp::DstCopy,
        CompOp::DstIn,
        CompOp::DstOut,
        CompOp::DstAtop,
        CompOp::Xor,
        CompOp::Clear,
        CompOp::Plus,
        CompOp::Modulate,
        CompOp::Multiply,
        CompOp::Screen,
        CompOp::Overlay,
        CompOp::Darken,
        CompOp::Lighten,
        CompOp::ColorDodge,
        CompOp::ColorBurn,
        CompOp::HardLight,
        CompOp::SoftLight,
        CompOp::Difference,
        CompOp::Exclusion,
    ];

    /// Creates an operator from its numeric code.
    ///
    /// Returns `None` for codes outside of the enumeration.
    pub fn from_u32(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Returns operator's numeric code.
    pub fn to_u32(self) -> u32 {
        self as u32
    }

    /// Returns operator's name, as used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            CompOp::SrcOver => "src-over",
            CompOp::SrcCopy => "src-copy",
            CompOp::SrcIn => "src-in",
            CompOp::SrcOut => "src-out",
            CompOp::SrcAtop => "src-atop",
            CompOp::DstOver => "dst-over",
            CompOp::DstCopy => "dst-copy",
            CompOp::DstIn => "dst-in",
            CompOp::DstOut => "dst-out",
            CompOp::DstAtop => "dst-atop",
            CompOp::Xor => "xor",
            CompOp::Clear => "clear",
            CompOp::Plus => "plus",
            CompOp::Modulate => "modulate",
            CompOp::Multiply => "multiply",
            CompOp::Screen => "screen",
            CompOp::Overlay => "overlay",
            CompOp::Darken => "darken",
            CompOp::Lighten => "lighten",
            CompOp::ColorDodge => "color-dodge",
            CompOp::ColorBurn => "color-burn",
            CompOp::HardLight => "hard-light",
            CompOp::SoftLight => "soft-light",
            CompOp::Difference => "difference",
            CompOp::Exclusion => "exclusion",
        }
    }
}

impl fmt::Display for CompOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompOp {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| BenchError::unknown_name("compositing operator", s))
    }
}
