// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::{Point, Rect, ShapeData};

// 4/3 * (sqrt(2) - 1)
const KAPPA: f64 = 0.552_284_749_830_793_4;

/// A backend path builder.
///
/// Lets modules share outline construction while keeping their native path types.
pub trait PathSink {
    /// Starts a new contour.
    fn move_to(&mut self, x: f64, y: f64);

    /// Adds a line.
    fn line_to(&mut self, x: f64, y: f64);

    /// Adds a cubic Bézier curve.
    fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64);

    /// Closes the current contour.
    fn close(&mut self);
}

/// Appends a rectangle.
pub fn push_rect<S: PathSink + ?Sized>(sink: &mut S, rect: &Rect) {
    sink.move_to(rect.x, rect.y);
    sink.line_to(rect.x + rect.w, rect.y);
    sink.line_to(rect.x + rect.w, rect.y + rect.h);
    sink.line_to(rect.x, rect.y + rect.h);
    sink.close();
}

/// Appends a rectangle with circular corners.
///
/// `radius` is clamped to half of the smaller side.
pub fn push_round_rect<S: PathSink + ?Sized>(sink: &mut S, rect: &Rect, radius: f64) {
    let r = radius.min(rect.w.min(rect.h) * 0.5);
    if !(r > 0.0) {
        push_rect(sink, rect);
        return;
    }

    let k = r * KAPPA;
    let (l, t) = (rect.x, rect.y);
    let (rt, b) = (rect.x + rect.w, rect.y + rect.h);

    sink.move_to(l + r, t);
    sink.line_to(rt - r, t);
    sink.cubic_to(rt - r + k, t, rt, t + r - k, rt, t + r);
    sink.line_to(rt, b - r);
    sink.cubic_to(rt, b - r + k, rt - r + k, b, rt - r, b);
    sink.line_to(l + r, b);
    sink.cubic_to(l + r - k, b, l, b - r + k, l, b - r);
    sink.line_to(l, t + r);
    sink.cubic_to(l, t + r - k, l + r - k, t, l + r, t);
    sink.close();
}

/// Appends a polyline.
///
/// Does nothing for an empty slice.
pub fn push_polyline<S: PathSink + ?Sized>(sink: &mut S, points: &[Point], close: bool) {
    let (first, rest) = match points.split_first() {
        Some(v) => v,
        None => return,
    };

    sink.move_to(first.x, first.y);
    for p in rest {
        sink.line_to(p.x, p.y);
    }

    if close {
        sink.close();
    }
}

/// Appends every shape subpath, scaled by `scale`.
///
/// Subpaths are left open. Fills close them implicitly.
pub fn push_shape<S: PathSink + ?Sized>(sink: &mut S, shape: &ShapeData<'_>, scale: f64) {
    for subpath in shape.subpaths() {
        let mut iter = subpath.iter();
        if let Some(p) = iter.next() {
            sink.move_to(p.x * scale, p.y * scale);
        }

        for p in iter {
            sink.line_to(p.x * scale, p.y * scale);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        verbs: String,
        last: (f64, f64),
    }

    impl PathSink for Recorder {
        fn move_to(&mut self, x: f64, y: f64) {
            self.verbs.push('M');
            self.last = (x, y);
        }

        fn line_to(&mut self, x: f64, y: f64) {
            self.verbs.push('L');
            self.last = (x, y);
        }

        fn cubic_to(&mut self, _: f64, _: f64, _: f64, _: f64, x: f64, y: f64) {
            self.verbs.push('C');
            self.last = (x, y);
        }

        fn close(&mut self) {
            self.verbs.push('Z');
        }
    }

    #[test]
    fn round_rect() {
        let mut sink = Recorder::default();
        push_round_rect(&mut sink, &Rect::new(0.0, 0.0, 100.0, 50.0), 10.0);
        assert_eq!(sink.verbs, "MLCLCLCLCZ");
        assert_eq!(sink.last, (10.0, 0.0));
    }

    #[test]
    fn zero_radius_is_rect() {
        let mut sink = Recorder::default();
        push_round_rect(&mut sink, &Rect::new(0.0, 0.0, 10.0, 10.0), 0.0);
        assert_eq!(sink.verbs, "MLLLZ");
    }

    #[test]
    fn polyline() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)];
        let mut sink = Recorder::default();
        push_polyline(&mut sink, &points, false);
        assert_eq!(sink.verbs, "MLL");

        let mut sink = Recorder::default();
        push_polyline(&mut sink, &points, true);
        assert_eq!(sink.verbs, "MLLZ");

        let mut sink = Recorder::default();
        push_polyline(&mut sink, &[], true);
        assert_eq!(sink.verbs, "");
    }

    #[test]
    fn shape_subpaths() {
        let mut sink = Recorder::default();
        push_shape(&mut sink, &ShapeData::CHECKER, 64.0);
        assert_eq!(sink.verbs, "MLLL".repeat(4));
        assert_eq!(sink.last, (0.6 * 64.0, 0.4 * 64.0));
    }
}
