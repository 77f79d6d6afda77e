// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Workload sampling shared by all modules.
//!
//! Modules must consume random numbers in exactly the same order,
//! otherwise they would draw different scenes. Everything random
//! a hook needs is sampled here and only rendered by the module.

use arrayvec::ArrayVec;

use crate::{
    Affine, BenchParams, BenchRandom, Point, Rect, Rgba32, SpriteFilter, Style, StyleKind,
    MAX_POLYGON_POINTS, NUM_SPRITES,
};

/// Rotation angle increment per shape, in radians.
pub const ROTATION_STEP: f64 = 0.01;

/// Rounded rectangle radius range.
pub const ROUND_RADIUS_RANGE: (f64, f64) = (4.0, 40.0);

/// A gradient color stop.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba32,
}

/// Gradient stops, always three.
pub type GradientStops = [GradientStop; 3];

/// A paint source for a single shape.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Fill {
    /// A solid color.
    Solid(Rgba32),
    /// A linear gradient.
    Linear {
        /// Gradient start.
        start: Point,
        /// Gradient end.
        end: Point,
        /// Color stops.
        stops: GradientStops,
    },
    /// A radial gradient.
    Radial {
        /// Center and focal point.
        center: Point,
        /// Radius.
        radius: f64,
        /// Color stops.
        stops: GradientStops,
    },
    /// A sweep gradient covering a full turn.
    Conic {
        /// Sweep center.
        center: Point,
        /// Color stops.
        stops: GradientStops,
    },
    /// A repeating sprite.
    Pattern {
        /// Sprite slot, always less than [`NUM_SPRITES`].
        slot: usize,
        /// Sampling filter.
        filter: SpriteFilter,
        /// Where the sprite's top-left corner lands.
        origin: Point,
    },
}

impl Fill {
    /// Samples a paint source for the `index`-th shape covering `bounds`.
    ///
    /// Colors are taken from `rnd`. Patterns consume no random numbers.
    pub fn next(style: Style, rnd: &mut BenchRandom, bounds: &Rect, index: u32) -> Self {
        match style.kind() {
            StyleKind::Solid => Fill::Solid(rnd.next_rgba32()),
            StyleKind::Linear => {
                let (x0, y0) = bounds.lerp(0.2, 0.2);
                let (x1, y1) = bounds.lerp(0.8, 0.8);
                Fill::Linear {
                    start: Point::new(x0, y0),
                    end: Point::new(x1, y1),
                    stops: next_stops(rnd),
                }
            }
            StyleKind::Radial => {
                let (cx, cy) = bounds.center();
                Fill::Radial {
                    center: Point::new(cx, cy),
                    radius: (bounds.w + bounds.h) / 4.0,
                    stops: next_stops(rnd),
                }
            }
            StyleKind::Conic => {
                let (cx, cy) = bounds.center();
                Fill::Conic {
                    center: Point::new(cx, cy),
                    stops: next_stops(rnd),
                }
            }
            StyleKind::Pattern(filter) => Fill::Pattern {
                slot: index as usize % NUM_SPRITES,
                filter,
                origin: Point::new(bounds.x, bounds.y),
            },
        }
    }
}

fn next_stops(rnd: &mut BenchRandom) -> GradientStops {
    [
        GradientStop {
            offset: 0.0,
            color: rnd.next_rgba32(),
        },
        GradientStop {
            offset: 0.5,
            color: rnd.next_rgba32(),
        },
        GradientStop {
            offset: 1.0,
            color: rnd.next_rgba32(),
        },
    ]
}

/// Returns the transform of the `index`-th rotated shape.
pub fn rotation(params: &BenchParams, index: u32) -> Affine {
    let cx = f64::from(params.screen_w) * 0.5;
    let cy = f64::from(params.screen_h) * 0.5;
    Affine::rotation_about(f64::from(index) * ROTATION_STEP, cx, cy)
}

/// Samples a corner radius that fits into `rect`.
pub fn next_round_radius(rnd: &mut BenchRandom, rect: &Rect) -> f64 {
    let (min, max) = ROUND_RADIUS_RANGE;
    let radius = rnd.next_f64(min, max);
    radius.min(rect.w.min(rect.h) * 0.5)
}

/// A random polygon inside a square box.
#[derive(Clone, Debug)]
pub struct Polygon {
    /// Box bounds.
    pub bounds: Rect,
    /// Vertices.
    pub points: ArrayVec<Point, MAX_POLYGON_POINTS>,
}

impl Polygon {
    /// Samples a polygon in a `shape_size` box at a random base point.
    ///
    /// `complexity` is clamped to `2..=MAX_POLYGON_POINTS`.
    pub fn next(params: &BenchParams, rnd: &mut BenchRandom, complexity: u32) -> Self {
        let size = f64::from(params.shape_size);
        let base = rnd.next_point(params.base_bounds());
        let count = (complexity as usize).clamp(2, MAX_POLYGON_POINTS);

        let mut points = ArrayVec::new();
        for _ in 0..count {
            let x = rnd.next_f64(base.x, base.x + size);
            let y = rnd.next_f64(base.y, base.y + size);
            points.push(Point::new(x, y));
        }

        Polygon {
            bounds: Rect::new(base.x, base.y, size, size),
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_kinds() {
        let bounds = Rect::new(10.0, 10.0, 100.0, 100.0);
        let mut rnd = BenchRandom::new(3);
        assert!(matches!(Fill::next(Style::Solid, &mut rnd, &bounds, 0), Fill::Solid(_)));

        match Fill::next(Style::LinearRepeat, &mut rnd, &bounds, 0) {
            Fill::Linear { start, end, stops } => {
                assert_eq!(start, Point::new(30.0, 30.0));
                assert_eq!(end, Point::new(90.0, 90.0));
                assert_eq!(stops[1].offset, 0.5);
            }
            fill => panic!("unexpected {:?}", fill),
        }

        match Fill::next(Style::RadialPad, &mut rnd, &bounds, 0) {
            Fill::Radial { center, radius, .. } => {
                assert_eq!(center, Point::new(60.0, 60.0));
                assert_eq!(radius, 50.0);
            }
            fill => panic!("unexpected {:?}", fill),
        }
    }

    #[test]
    fn pattern_slots_cycle() {
        let bounds = Rect::new(5.0, 6.0, 8.0, 8.0);
        let mut rnd = BenchRandom::new(3);
        let before = rnd.clone().next_u32();
        for i in 0..10 {
            match Fill::next(Style::PatternNearest, &mut rnd, &bounds, i) {
                Fill::Pattern { slot, filter, origin } => {
                    assert_eq!(slot, i as usize % NUM_SPRITES);
                    assert_eq!(filter, SpriteFilter::Nearest);
                    assert_eq!(origin, Point::new(5.0, 6.0));
                }
                fill => panic!("unexpected {:?}", fill),
            }
        }

        assert_eq!(rnd.next_u32(), before);
    }

    #[test]
    fn radius_fits() {
        let mut rnd = BenchRandom::new(11);
        let rect = Rect::new(0.0, 0.0, 8.0, 20.0);
        for _ in 0..100 {
            let r = next_round_radius(&mut rnd, &rect);
            assert!(r >= 0.0 && r <= 4.0);
        }
    }

    #[test]
    fn polygon_complexity_is_clamped() {
        let params = BenchParams::default();
        let mut rnd = BenchRandom::new(5);
        assert_eq!(Polygon::next(&params, &mut rnd, 0).points.len(), 2);
        assert_eq!(Polygon::next(&params, &mut rnd, 10).points.len(), 10);
        assert_eq!(Polygon::next(&params, &mut rnd, 1000).points.len(), MAX_POLYGON_POINTS);
    }

    #[test]
    fn polygon_stays_in_box() {
        let params = BenchParams::default();
        let mut rnd = BenchRandom::new(5);
        let poly = Polygon::next(&params, &mut rnd, 40);
        let b = poly.bounds;
        for p in &poly.points {
            assert!(p.x >= b.x && p.x <= b.x + b.w);
            assert!(p.y >= b.y && p.y <= b.y + b.h);
        }
    }

    #[test]
    fn first_rotation_is_identity() {
        assert!(rotation(&BenchParams::default(), 0).is_identity());
        assert!(!rotation(&BenchParams::default(), 1).is_identity());
    }
}
