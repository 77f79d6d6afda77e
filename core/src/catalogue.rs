// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{BenchError, BenchRun, PolygonMode, ShapeData};

/// Shape sizes benchmarked by default.
pub const DEFAULT_SIZES: [u32; 6] = [8, 16, 32, 64, 128, 256];

macro_rules! bench_tests {
    ($($variant:ident => $name:literal,)+) => {
        /// A benchmark test.
        #[allow(missing_docs)]
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
        pub enum BenchTest {
            $(
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl BenchTest {
            /// All tests in execution order.
            pub const ALL: &'static [BenchTest] = &[$(BenchTest::$variant,)+];

            /// Returns test's name.
            pub fn name(self) -> &'static str {
                match self {
                    $(BenchTest::$variant => $name,)+
                }
            }
        }
    };
}

bench_tests! {
    FillRectA => "fill-rect-a",
    FillRectU => "fill-rect-u",
    FillRectRot => "fill-rect-rot",
    FillRoundU => "fill-round-u",
    FillRoundRot => "fill-round-rot",
    FillTriangle => "fill-triangle",
    FillPolyNZ10 => "fill-poly-nz-10",
    FillPolyEO10 => "fill-poly-eo-10",
    FillPolyNZ20 => "fill-poly-nz-20",
    FillPolyEO20 => "fill-poly-eo-20",
    FillPolyNZ40 => "fill-poly-nz-40",
    FillPolyEO40 => "fill-poly-eo-40",
    FillStar => "fill-star",
    FillArrow => "fill-arrow",
    FillChecker => "fill-checker",
    FillZigzag => "fill-zigzag",
    StrokeRectA => "stroke-rect-a",
    StrokeRectU => "stroke-rect-u",
    StrokeRectRot => "stroke-rect-rot",
    StrokeRoundU => "stroke-round-u",
    StrokeRoundRot => "stroke-round-rot",
    StrokeTriangle => "stroke-triangle",
    StrokePoly10 => "stroke-poly-10",
    StrokePoly20 => "stroke-poly-20",
    StrokePoly40 => "stroke-poly-40",
    StrokeStar => "stroke-star",
    StrokeArrow => "stroke-arrow",
    StrokeChecker => "stroke-checker",
    StrokeZigzag => "stroke-zigzag",
}

impl BenchTest {
    /// Checks that the test strokes instead of filling.
    pub fn is_stroke(self) -> bool {
        self.name().starts_with("stroke-")
    }

    /// Runs the test by calling the matching hook.
    pub fn run(self, run: &mut dyn BenchRun) {
        use BenchTest::*;
        use PolygonMode::*;

        let stroke = self.is_stroke();
        match self {
            FillRectA | StrokeRectA => run.rect_aligned(stroke),
            FillRectU | StrokeRectU => run.rect_smooth(stroke),
            FillRectRot | StrokeRectRot => run.rect_rotated(stroke),
            FillRoundU | StrokeRoundU => run.round_smooth(stroke),
            FillRoundRot | StrokeRoundRot => run.round_rotated(stroke),
            FillTriangle => run.polygon(FillNonZero, 3),
            FillPolyNZ10 => run.polygon(FillNonZero, 10),
            FillPolyEO10 => run.polygon(FillEvenOdd, 10),
            FillPolyNZ20 => run.polygon(FillNonZero, 20),
            FillPolyEO20 => run.polygon(FillEvenOdd, 20),
            FillPolyNZ40 => run.polygon(FillNonZero, 40),
            FillPolyEO40 => run.polygon(FillEvenOdd, 40),
            StrokeTriangle => run.polygon(Stroke, 3),
            StrokePoly10 => run.polygon(Stroke, 10),
            StrokePoly20 => run.polygon(Stroke, 20),
            StrokePoly40 => run.polygon(Stroke, 40),
            FillStar | StrokeStar => run.shape(stroke, &ShapeData::STAR),
            FillArrow | StrokeArrow => run.shape(stroke, &ShapeData::ARROW),
            FillChecker | StrokeChecker => run.shape(stroke, &ShapeData::CHECKER),
            FillZigzag | StrokeZigzag => run.shape(stroke, &ShapeData::ZIGZAG),
        }
    }
}

impl fmt::Display for BenchTest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BenchTest {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BenchTest::ALL
            .iter()
            .copied()
            .find(|test| test.name() == s)
            .ok_or_else(|| BenchError::unknown_name("test", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CompOp, EdgeMode};

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl BenchRun for Recorder {
        fn comp_op(&self) -> CompOp {
            CompOp::SrcOver
        }

        fn edge_mode(&self) -> EdgeMode {
            EdgeMode::Clamp
        }

        fn rect_aligned(&mut self, stroke: bool) {
            self.calls.push(format!("rect_aligned({})", stroke));
        }

        fn rect_smooth(&mut self, stroke: bool) {
            self.calls.push(format!("rect_smooth({})", stroke));
        }

        fn rect_rotated(&mut self, stroke: bool) {
            self.calls.push(format!("rect_rotated({})", stroke));
        }

        fn round_smooth(&mut self, stroke: bool) {
            self.calls.push(format!("round_smooth({})", stroke));
        }

        fn round_rotated(&mut self, stroke: bool) {
            self.calls.push(format!("round_rotated({})", stroke));
        }

        fn polygon(&mut self, mode: PolygonMode, complexity: u32) {
            self.calls.push(format!("polygon({:?}, {})", mode, complexity));
        }

        fn shape(&mut self, stroke: bool, shape: &ShapeData<'_>) {
            self.calls.push(format!("shape({}, {})", stroke, shape.name));
        }
    }

    fn calls(test: BenchTest) -> String {
        let mut run = Recorder::default();
        test.run(&mut run);
        assert_eq!(run.calls.len(), 1);
        run.calls.remove(0)
    }

    #[test]
    fn dispatch() {
        assert_eq!(calls(BenchTest::FillRectA), "rect_aligned(false)");
        assert_eq!(calls(BenchTest::StrokeRoundRot), "round_rotated(true)");
        assert_eq!(calls(BenchTest::FillTriangle), "polygon(FillNonZero, 3)");
        assert_eq!(calls(BenchTest::FillPolyEO40), "polygon(FillEvenOdd, 40)");
        assert_eq!(calls(BenchTest::StrokePoly20), "polygon(Stroke, 20)");
        assert_eq!(calls(BenchTest::StrokeChecker), "shape(true, checker)");
        assert_eq!(calls(BenchTest::FillZigzag), "shape(false, zigzag)");
    }

    #[test]
    fn names() {
        assert_eq!(BenchTest::ALL.len(), 29);
        for test in BenchTest::ALL {
            assert_eq!(test.name().parse::<BenchTest>().unwrap(), *test);
        }

        assert_eq!(
            serde_json::to_string(&BenchTest::FillPolyNZ10).unwrap(),
            "\"fill-poly-nz-10\""
        );
        assert!("fill-butterfly".parse::<BenchTest>().is_err());
    }
}
