// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! The driver side of `shape-bench`.
//!
//! Describes everything a rendering backend adapter receives from the benchmark driver:
//! parameters, compositing operators, fill styles, deterministic random generators,
//! driver-owned pixel buffers and the module contract itself.
//!
//! Nothing in this crate rasterizes anything. Backends live in the `shape-bench` crate.

#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![allow(clippy::float_cmp)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]
#![allow(clippy::too_many_arguments)]

mod catalogue;
mod comp_op;
mod error;
mod geometry;
mod module;
pub mod outline;
mod params;
mod random;
mod shapes;
mod style;
mod surface;
pub mod workload;

pub use catalogue::{BenchTest, DEFAULT_SIZES};
pub use comp_op::CompOp;
pub use error::{BenchError, BenchResult};
pub use geometry::{Affine, Point, Rect, RectI, Size, SizeI};
pub use module::{
    BenchModule, BenchRun, PolygonMode, ResourceGuard, ResourceStats, ResourceTracker, RunContext,
};
pub use module::MAX_POLYGON_POINTS;
pub use params::{BenchParams, PixelFormat};
pub use random::{BenchRandom, BenchRandoms, Rgba32};
pub use shapes::{ShapeData, SubPaths};
pub use style::{EdgeMode, SpriteFilter, Style, StyleKind};
pub use surface::{SpriteSet, Surface, NUM_SPRITES};
