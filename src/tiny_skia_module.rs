// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use arrayvec::ArrayVec;
use tiny_skia::{
    BlendMode, Color, FillRule, FilterQuality, LinearGradient, Paint, Path, PathBuilder, Pattern,
    PixmapMut, PixmapRef, RadialGradient, Shader, SpreadMode, Stroke, Transform,
};

use shape_bench_core::outline::{self, PathSink};
use shape_bench_core::workload::{self, Fill, GradientStops, Polygon};
use shape_bench_core::{
    Affine, BenchError, BenchModule, BenchParams, BenchRandoms, BenchResult, BenchRun, CompOp,
    EdgeMode, Point, PolygonMode, Rect, ResourceGuard, ResourceStats, ResourceTracker, Rgba32,
    RunContext, ShapeData, SpriteFilter, Style, NUM_SPRITES,
};

const NAME: &str = "tiny-skia";

/// Translates a compositing operator into a tiny-skia blend mode.
///
/// tiny-skia can express every operator, so this never returns `None`.
pub fn tiny_skia_blend_mode(comp_op: CompOp) -> Option<BlendMode> {
    let mode = match comp_op {
        CompOp::SrcOver => BlendMode::SourceOver,
        CompOp::SrcCopy => BlendMode::Source,
        CompOp::SrcIn => BlendMode::SourceIn,
        CompOp::SrcOut => BlendMode::SourceOut,
        CompOp::SrcAtop => BlendMode::SourceAtop,
        CompOp::DstOver => BlendMode::DestinationOver,
        CompOp::DstCopy => BlendMode::Destination,
        CompOp::DstIn => BlendMode::DestinationIn,
        CompOp::DstOut => BlendMode::DestinationOut,
        CompOp::DstAtop => BlendMode::DestinationAtop,
        CompOp::Xor => BlendMode::Xor,
        CompOp::Clear => BlendMode::Clear,
        CompOp::Plus => BlendMode::Plus,
        CompOp::Modulate => BlendMode::Modulate,
        CompOp::Multiply => BlendMode::Multiply,
        CompOp::Screen => BlendMode::Screen,
        CompOp::Overlay => BlendMode::Overlay,
        CompOp::Darken => BlendMode::Darken,
        CompOp::Lighten => BlendMode::Lighten,
        CompOp::ColorDodge => BlendMode::ColorDodge,
        CompOp::ColorBurn => BlendMode::ColorBurn,
        CompOp::HardLight => BlendMode::HardLight,
        CompOp::SoftLight => BlendMode::SoftLight,
        CompOp::Difference => BlendMode::Difference,
        CompOp::Exclusion => BlendMode::Exclusion,
    };

    Some(mode)
}

/// Like [`tiny_skia_blend_mode`], but accepts a raw operator code.
pub fn tiny_skia_blend_mode_from_code(code: u32) -> Option<BlendMode> {
    CompOp::from_u32(code).and_then(tiny_skia_blend_mode)
}

fn to_spread(mode: EdgeMode) -> SpreadMode {
    match mode {
        EdgeMode::Clamp => SpreadMode::Pad,
        EdgeMode::Repeat => SpreadMode::Repeat,
        EdgeMode::Mirror => SpreadMode::Reflect,
    }
}

fn to_point(p: Point) -> tiny_skia::Point {
    tiny_skia::Point::from_xy(p.x as f32, p.y as f32)
}

fn to_transform(ts: &Affine) -> Transform {
    let [sx, ky, kx, sy, tx, ty] = ts.to_f32_row();
    Transform::from_row(sx, ky, kx, sy, tx, ty)
}

fn to_color(c: Rgba32) -> Color {
    Color::from_rgba8(c.r(), c.g(), c.b(), c.a())
}

fn to_stops(stops: &GradientStops) -> Vec<tiny_skia::GradientStop> {
    stops
        .iter()
        .map(|stop| tiny_skia::GradientStop::new(stop.offset, to_color(stop.color)))
        .collect()
}

fn as_bytes(pixels: &[u32]) -> &[u8] {
    bytemuck::cast_slice(pixels)
}

struct Builder(PathBuilder);

impl Builder {
    fn new() -> Self {
        Builder(PathBuilder::new())
    }

    fn finish(self) -> Option<Path> {
        self.0.finish()
    }
}

impl PathSink for Builder {
    fn move_to(&mut self, x: f64, y: f64) {
        self.0.move_to(x as f32, y as f32);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.0.line_to(x as f32, y as f32);
    }

    fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.0.cubic_to(x1 as f32, y1 as f32, x2 as f32, y2 as f32, x as f32, y as f32);
    }

    fn close(&mut self) {
        self.0.close();
    }
}

/// A [tiny-skia](https://github.com/RazrFalcon/tiny-skia) module.
///
/// tiny-skia reads pixels as RGBA bytes, while the driver stores `0xAARRGGBB` words.
/// On little-endian targets this swaps red and blue in the output,
/// which doesn't change the amount of work.
///
/// Conic gradients are not supported.
#[derive(Default, Debug)]
pub struct TinySkiaModule {
    canvases: ResourceTracker,
}

impl TinySkiaModule {
    /// Creates a new module.
    pub fn new() -> Self {
        TinySkiaModule::default()
    }
}

impl BenchModule for TinySkiaModule {
    fn name(&self) -> &str {
        NAME
    }

    fn supports_comp_op(&self, comp_op: CompOp) -> bool {
        tiny_skia_blend_mode(comp_op).is_some()
    }

    fn supports_style(&self, style: Style) -> bool {
        match style {
            Style::Solid
            | Style::LinearPad
            | Style::LinearRepeat
            | Style::LinearReflect
            | Style::RadialPad
            | Style::RadialRepeat
            | Style::RadialReflect
            | Style::PatternNearest
            | Style::PatternBilinear => true,
            // No sweep gradients.
            Style::Conic => false,
        }
    }

    fn on_before_run<'a>(&'a self, ctx: RunContext<'a>) -> BenchResult<Box<dyn BenchRun + 'a>> {
        let RunContext { params, surface, sprites, randoms } = ctx;
        params.validate()?;

        let blend_mode = tiny_skia_blend_mode(params.comp_op).ok_or_else(|| {
            BenchError::backend(NAME, format!("'{}' is not supported", params.comp_op))
        })?;

        if !self.supports_style(params.style) {
            return Err(BenchError::backend(
                NAME,
                format!("'{}' is not supported", params.style),
            ));
        }

        if surface.width() != params.screen_w || surface.height() != params.screen_h {
            return Err(BenchError::surface(format!(
                "surface is {}x{}, but the screen is {}x{}",
                surface.width(),
                surface.height(),
                params.screen_w,
                params.screen_h
            )));
        }

        let mut views = ArrayVec::new();
        for sprite in sprites.iter() {
            let view = sprite
                .packed_pixels()
                .and_then(|data| {
                    PixmapRef::from_bytes(as_bytes(data), sprite.width(), sprite.height())
                })
                .ok_or_else(|| BenchError::backend(NAME, "failed to wrap a sprite"))?;
            views.push(view);
        }

        let (width, height) = (surface.width(), surface.height());
        let pixels = surface
            .packed_pixels_mut()
            .ok_or_else(|| BenchError::surface("tiny-skia requires packed surface rows"))?;
        let mut pixmap = PixmapMut::from_bytes(bytemuck::cast_slice_mut(pixels), width, height)
            .ok_or_else(|| BenchError::backend(NAME, "failed to wrap the surface"))?;
        pixmap.fill(Color::TRANSPARENT);

        let edge_mode = EdgeMode::from_style(params.style);
        tracing::debug!(
            module = NAME,
            width,
            height,
            comp_op = %params.comp_op,
            style = %params.style,
            ?edge_mode,
            "run started"
        );

        Ok(Box::new(TinySkiaRun {
            params,
            randoms,
            pixmap,
            sprites: views,
            blend_mode,
            stroke: Stroke {
                width: params.stroke_width as f32,
                ..Stroke::default()
            },
            spread: to_spread(edge_mode),
            edge_mode,
            _canvas: self.canvases.acquire(),
        }))
    }

    fn on_after_run(&self, run: Box<dyn BenchRun + '_>) {
        drop(run);
        tracing::debug!(module = NAME, live = self.canvases.stats().live(), "run finished");
    }

    fn resources(&self) -> ResourceStats {
        self.canvases.stats()
    }
}

struct TinySkiaRun<'a> {
    params: &'a BenchParams,
    randoms: &'a mut BenchRandoms,
    pixmap: PixmapMut<'a>,
    sprites: ArrayVec<PixmapRef<'a>, NUM_SPRITES>,
    blend_mode: BlendMode,
    stroke: Stroke,
    spread: SpreadMode,
    edge_mode: EdgeMode,
    _canvas: ResourceGuard<'a>,
}

impl<'a> TinySkiaRun<'a> {
    fn next_fill(&mut self, bounds: &Rect, index: u32) -> Fill {
        Fill::next(self.params.style, &mut self.randoms.color, bounds, index)
    }

    fn paint(&self, fill: &Fill) -> Option<Paint<'a>> {
        let shader = match *fill {
            Fill::Solid(c) => Shader::SolidColor(to_color(c)),
            Fill::Linear { start, end, ref stops } => LinearGradient::new(
                to_point(start),
                to_point(end),
                to_stops(stops),
                self.spread,
                Transform::identity(),
            )?,
            Fill::Radial { center, radius, ref stops } => RadialGradient::new(
                to_point(center),
                to_point(center),
                radius as f32,
                to_stops(stops),
                self.spread,
                Transform::identity(),
            )?,
            Fill::Conic { .. } => return None,
            Fill::Pattern { slot, filter, origin } => {
                let quality = match filter {
                    SpriteFilter::Nearest => FilterQuality::Nearest,
                    SpriteFilter::Bilinear => FilterQuality::Bilinear,
                };

                Pattern::new(
                    self.sprites[slot],
                    SpreadMode::Repeat,
                    quality,
                    1.0,
                    Transform::from_translate(origin.x as f32, origin.y as f32),
                )
            }
        };

        Some(Paint {
            shader,
            blend_mode: self.blend_mode,
            anti_alias: true,
            ..Paint::default()
        })
    }

    fn draw_rect(&mut self, rect: &Rect, fill: &Fill, stroke: bool, ts: Transform) {
        if stroke {
            let mut pb = Builder::new();
            outline::push_rect(&mut pb, rect);
            if let Some(path) = pb.finish() {
                self.draw_path(&path, fill, FillRule::Winding, true, ts);
            }

            return;
        }

        let rect = tiny_skia::Rect::from_xywh(
            rect.x as f32,
            rect.y as f32,
            rect.w as f32,
            rect.h as f32,
        );

        if let (Some(rect), Some(paint)) = (rect, self.paint(fill)) {
            self.pixmap.fill_rect(rect, &paint, ts, None);
        }
    }

    fn draw_path(&mut self, path: &Path, fill: &Fill, rule: FillRule, stroke: bool, ts: Transform) {
        let paint = match self.paint(fill) {
            Some(v) => v,
            None => return,
        };

        if stroke {
            self.pixmap.stroke_path(path, &paint, &self.stroke, ts, None);
        } else {
            self.pixmap.fill_path(path, &paint, rule, ts, None);
        }
    }
}

impl BenchRun for TinySkiaRun<'_> {
    fn comp_op(&self) -> CompOp {
        self.params.comp_op
    }

    fn edge_mode(&self) -> EdgeMode {
        self.edge_mode
    }

    fn rect_aligned(&mut self, stroke: bool) {
        let bounds = self.params.screen_size();
        let size = self.params.shape_size as i32;

        for i in 0..self.params.quantity {
            let rect = self.randoms.coord.next_rect_i(bounds, size, size).to_rect();
            let fill = self.next_fill(&rect, i);
            self.draw_rect(&rect, &fill, stroke, Transform::identity());
        }
    }

    fn rect_smooth(&mut self, stroke: bool) {
        let bounds = self.params.screen_size().to_size();
        let size = f64::from(self.params.shape_size);

        for i in 0..self.params.quantity {
            let rect = self.randoms.coord.next_rect(bounds, size, size);
            let fill = self.next_fill(&rect, i);
            self.draw_rect(&rect, &fill, stroke, Transform::identity());
        }
    }

    fn rect_rotated(&mut self, stroke: bool) {
        let bounds = self.params.screen_size().to_size();
        let size = f64::from(self.params.shape_size);

        for i in 0..self.params.quantity {
            let rect = self.randoms.coord.next_rect(bounds, size, size);
            let fill = self.next_fill(&rect, i);
            let ts = to_transform(&workload::rotation(self.params, i));
            self.draw_rect(&rect, &fill, stroke, ts);
        }
    }

    fn round_smooth(&mut self, stroke: bool) {
        let bounds = self.params.screen_size().to_size();
        let size = f64::from(self.params.shape_size);

        for i in 0..self.params.quantity {
            let rect = self.randoms.coord.next_rect(bounds, size, size);
            let radius = workload::next_round_radius(&mut self.randoms.extra, &rect);
            let fill = self.next_fill(&rect, i);

            let mut pb = Builder::new();
            outline::push_round_rect(&mut pb, &rect, radius);
            if let Some(path) = pb.finish() {
                self.draw_path(&path, &fill, FillRule::Winding, stroke, Transform::identity());
            }
        }
    }

    fn round_rotated(&mut self, stroke: bool) {
        let bounds = self.params.screen_size().to_size();
        let size = f64::from(self.params.shape_size);

        for i in 0..self.params.quantity {
            let rect = self.randoms.coord.next_rect(bounds, size, size);
            let radius = workload::next_round_radius(&mut self.randoms.extra, &rect);
            let fill = self.next_fill(&rect, i);
            let ts = to_transform(&workload::rotation(self.params, i));

            let mut pb = Builder::new();
            outline::push_round_rect(&mut pb, &rect, radius);
            if let Some(path) = pb.finish() {
                self.draw_path(&path, &fill, FillRule::Winding, stroke, ts);
            }
        }
    }

    fn polygon(&mut self, mode: PolygonMode, complexity: u32) {
        let (rule, stroke) = match mode {
            PolygonMode::FillNonZero => (FillRule::Winding, false),
            PolygonMode::FillEvenOdd => (FillRule::EvenOdd, false),
            PolygonMode::Stroke => (FillRule::Winding, true),
        };

        for i in 0..self.params.quantity {
            let polygon = Polygon::next(self.params, &mut self.randoms.coord, complexity);
            let fill = self.next_fill(&polygon.bounds, i);

            let mut pb = Builder::new();
            outline::push_polyline(&mut pb, &polygon.points, !stroke);
            if let Some(path) = pb.finish() {
                self.draw_path(&path, &fill, rule, stroke, Transform::identity());
            }
        }
    }

    fn shape(&mut self, stroke: bool, shape: &ShapeData<'_>) {
        let bounds = self.params.base_bounds();
        let size = f64::from(self.params.shape_size);
        // Shaders are transformed together with the path.
        let local = Rect::new(0.0, 0.0, size, size);

        let mut pb = Builder::new();
        outline::push_shape(&mut pb, shape, size);
        let path = pb.finish();

        for i in 0..self.params.quantity {
            let base = self.randoms.coord.next_point(bounds);
            let fill = self.next_fill(&local, i);
            if let Some(ref path) = path {
                let ts = Transform::from_translate(base.x as f32, base.y as f32);
                self.draw_path(path, &fill, FillRule::Winding, stroke, ts);
            }
        }
    }
}
