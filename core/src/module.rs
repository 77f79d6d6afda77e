// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use core::cell::Cell;

use crate::{
    BenchParams, BenchRandoms, BenchResult, CompOp, EdgeMode, ShapeData, SpriteSet, Style,
    Surface,
};

/// The maximum number of polygon vertices.
pub const MAX_POLYGON_POINTS: usize = 128;

/// How [`BenchRun::polygon`] renders a polygon.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PolygonMode {
    /// Fill using the non-zero rule.
    FillNonZero,
    /// Fill using the even-odd rule.
    FillEvenOdd,
    /// Stroke an open polyline.
    Stroke,
}

/// Everything a module borrows from the driver for a single run.
///
/// The module never owns any of it. All views created from it must die
/// together with the run.
#[derive(Debug)]
pub struct RunContext<'a> {
    /// Run parameters.
    pub params: &'a BenchParams,
    /// Destination pixels.
    pub surface: &'a mut Surface,
    /// Sprites used by pattern styles.
    pub sprites: &'a SpriteSet,
    /// Random generators that define the workload.
    pub randoms: &'a mut BenchRandoms,
}

/// Canvas bookkeeping.
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub struct ResourceStats {
    /// Number of canvases created.
    pub created: u32,
    /// Number of canvases released.
    pub released: u32,
}

impl ResourceStats {
    /// Returns the number of canvases that are still alive.
    pub fn live(&self) -> u32 {
        self.created.saturating_sub(self.released)
    }
}

/// Counts canvases created and released by a module.
#[derive(Default, Debug)]
pub struct ResourceTracker {
    created: Cell<u32>,
    released: Cell<u32>,
}

impl ResourceTracker {
    /// Creates a new tracker.
    pub fn new() -> Self {
        ResourceTracker::default()
    }

    /// Registers a new canvas.
    ///
    /// The canvas is released when the returned guard is dropped,
    /// so a canvas cannot be released twice.
    pub fn acquire(&self) -> ResourceGuard<'_> {
        self.created.set(self.created.get() + 1);
        ResourceGuard { tracker: self }
    }

    /// Returns current counters.
    pub fn stats(&self) -> ResourceStats {
        ResourceStats {
            created: self.created.get(),
            released: self.released.get(),
        }
    }
}

/// A live canvas registration.
///
/// See [`ResourceTracker::acquire`].
#[derive(Debug)]
pub struct ResourceGuard<'a> {
    tracker: &'a ResourceTracker,
}

impl Drop for ResourceGuard<'_> {
    fn drop(&mut self) {
        let released = &self.tracker.released;
        released.set(released.get() + 1);
    }
}

/// A rendering backend adapter.
pub trait BenchModule {
    /// Returns module's name.
    fn name(&self) -> &str;

    /// Checks that the backend can express a compositing operator.
    fn supports_comp_op(&self, comp_op: CompOp) -> bool;

    /// Checks that the backend can express a fill style.
    fn supports_style(&self, style: Style) -> bool;

    /// Like [`BenchModule::supports_comp_op`], but accepts a raw operator code.
    ///
    /// Unknown codes are never supported.
    fn supports_comp_op_code(&self, code: u32) -> bool {
        CompOp::from_u32(code).map_or(false, |op| self.supports_comp_op(op))
    }

    /// Like [`BenchModule::supports_style`], but accepts a raw style code.
    ///
    /// Unknown codes are never supported.
    fn supports_style_code(&self, code: u32) -> bool {
        Style::from_u32(code).map_or(false, |style| self.supports_style(style))
    }

    /// Binds backend objects to driver buffers and prepares per-run state.
    ///
    /// The destination is cleared to transparent black.
    /// On error, nothing is left allocated and the run must be aborted.
    fn on_before_run<'a>(&'a self, ctx: RunContext<'a>) -> BenchResult<Box<dyn BenchRun + 'a>>;

    /// Finishes a run and releases everything [`BenchModule::on_before_run`] created.
    ///
    /// Dropping the run has the same effect.
    fn on_after_run(&self, run: Box<dyn BenchRun + '_>) {
        drop(run);
    }

    /// Returns canvas bookkeeping.
    fn resources(&self) -> ResourceStats;
}

/// A single run bound to driver buffers.
///
/// Each hook draws exactly `quantity` shapes.
pub trait BenchRun {
    /// Returns the compositing operator of this run.
    fn comp_op(&self) -> CompOp;

    /// Returns the gradient edge mode derived from the run style.
    fn edge_mode(&self) -> EdgeMode;

    /// Draws pixel-aligned rectangles.
    fn rect_aligned(&mut self, stroke: bool);

    /// Draws rectangles at fractional positions.
    fn rect_smooth(&mut self, stroke: bool);

    /// Draws rectangles rotated around the screen center.
    fn rect_rotated(&mut self, stroke: bool);

    /// Draws rounded rectangles at fractional positions.
    fn round_smooth(&mut self, stroke: bool);

    /// Draws rounded rectangles rotated around the screen center.
    fn round_rotated(&mut self, stroke: bool);

    /// Draws random polygons with `complexity` vertices.
    fn polygon(&mut self, mode: PolygonMode, complexity: u32);

    /// Draws a shape at random positions.
    fn shape(&mut self, stroke: bool, shape: &ShapeData<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guards_release_once() {
        let tracker = ResourceTracker::new();
        {
            let _a = tracker.acquire();
            let _b = tracker.acquire();
            assert_eq!(tracker.stats().live(), 2);
        }

        let expected = ResourceStats {
            created: 2,
            released: 2,
        };
        assert_eq!(tracker.stats(), expected);
        assert_eq!(tracker.stats().live(), 0);
    }

    struct Dummy;

    impl BenchModule for Dummy {
        fn name(&self) -> &str {
            "dummy"
        }

        fn supports_comp_op(&self, comp_op: CompOp) -> bool {
            comp_op == CompOp::SrcOver
        }

        fn supports_style(&self, style: Style) -> bool {
            style == Style::Solid
        }

        fn on_before_run<'a>(&'a self, _: RunContext<'a>) -> BenchResult<Box<dyn BenchRun + 'a>> {
            Err(crate::BenchError::backend("dummy", "cannot draw"))
        }

        fn resources(&self) -> ResourceStats {
            ResourceStats::default()
        }
    }

    #[test]
    fn raw_codes() {
        let module = Dummy;
        assert!(module.supports_comp_op_code(0));
        assert!(!module.supports_comp_op_code(1));
        assert!(!module.supports_comp_op_code(25));
        assert!(!module.supports_comp_op_code(u32::MAX));
        assert!(module.supports_style_code(0));
        assert!(!module.supports_style_code(10));
    }
}
