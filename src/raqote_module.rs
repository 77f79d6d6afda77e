// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use arrayvec::ArrayVec;
use raqote::{
    AntialiasMode, BlendMode, Color, DrawOptions, DrawTarget, ExtendMode, FilterMode, Gradient,
    Image, Path, PathBuilder, SolidSource, Source, Spread, StrokeStyle, Transform, Winding,
};

use shape_bench_core::outline::{self, PathSink};
use shape_bench_core::workload::{self, Fill, GradientStops, Polygon};
use shape_bench_core::{
    Affine, BenchError, BenchModule, BenchParams, BenchRandoms, BenchResult, BenchRun, CompOp,
    EdgeMode, Point, PolygonMode, Rect, ResourceGuard, ResourceStats, ResourceTracker, Rgba32,
    RunContext, ShapeData, SpriteFilter, Style, NUM_SPRITES,
};

const NAME: &str = "raqote";

/// Translates a compositing operator into a raqote blend mode.
///
/// Returns `None` when raqote cannot express the operator.
pub fn raqote_blend_mode(comp_op: CompOp) -> Option<BlendMode> {
    match comp_op {
        CompOp::SrcOver => Some(BlendMode::SrcOver),
        CompOp::SrcCopy => Some(BlendMode::Src),
        CompOp::SrcIn => Some(BlendMode::SrcIn),
        CompOp::SrcOut => Some(BlendMode::SrcOut),
        CompOp::SrcAtop => Some(BlendMode::SrcAtop),
        CompOp::DstOver => Some(BlendMode::DstOver),
        CompOp::DstCopy => Some(BlendMode::Dst),
        CompOp::DstIn => Some(BlendMode::DstIn),
        CompOp::DstOut => Some(BlendMode::DstOut),
        CompOp::DstAtop => Some(BlendMode::DstAtop),
        CompOp::Xor => Some(BlendMode::Xor),
        CompOp::Clear => Some(BlendMode::Clear),
        CompOp::Plus => Some(BlendMode::Add),
        CompOp::Modulate => None,
        CompOp::Multiply => Some(BlendMode::Multiply),
        CompOp::Screen => Some(BlendMode::Screen),
        CompOp::Overlay => Some(BlendMode::Overlay),
        CompOp::Darken => Some(BlendMode::Darken),
        CompOp::Lighten => Some(BlendMode::Lighten),
        CompOp::ColorDodge => Some(BlendMode::ColorDodge),
        CompOp::ColorBurn => Some(BlendMode::ColorBurn),
        CompOp::HardLight => Some(BlendMode::HardLight),
        CompOp::SoftLight => Some(BlendMode::SoftLight),
        CompOp::Difference => Some(BlendMode::Difference),
        CompOp::Exclusion => Some(BlendMode::Exclusion),
    }
}

/// Like [`raqote_blend_mode`], but accepts a raw operator code.
pub fn raqote_blend_mode_from_code(code: u32) -> Option<BlendMode> {
    CompOp::from_u32(code).and_then(raqote_blend_mode)
}

fn to_spread(mode: EdgeMode) -> Spread {
    match mode {
        EdgeMode::Clamp => Spread::Pad,
        EdgeMode::Repeat => Spread::Repeat,
        EdgeMode::Mirror => Spread::Reflect,
    }
}

fn to_point(p: Point) -> raqote::Point {
    raqote::Point::new(p.x as f32, p.y as f32)
}

fn to_transform(ts: &Affine) -> Transform {
    let [sx, ky, kx, sy, tx, ty] = ts.to_f32_row();
    Transform::new(sx, ky, kx, sy, tx, ty)
}

// raqote uses ARGB order.
fn to_color(c: Rgba32) -> Color {
    Color::new(c.a(), c.r(), c.g(), c.b())
}

fn to_gradient(stops: &GradientStops) -> Gradient {
    Gradient {
        stops: stops
            .iter()
            .map(|stop| raqote::GradientStop {
                position: stop.offset,
                color: to_color(stop.color),
            })
            .collect(),
    }
}

struct Builder(PathBuilder);

impl Builder {
    fn new() -> Self {
        Builder(PathBuilder::new())
    }

    fn finish(self, winding: Winding) -> Path {
        let mut path = self.0.finish();
        path.winding = winding;
        path
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

/// A [raqote](https://github.com/jrmuizel/raqote) module.
///
/// Supports every style, including conic gradients.
#[derive(Default, Debug)]
pub struct RaqoteModule {
    canvases: ResourceTracker,
}

impl RaqoteModule {
    /// Creates a new module.
    pub fn new() -> Self {
        RaqoteModule::default()
    }
}

impl BenchModule for RaqoteModule {
    fn name(&self) -> &str {
        NAME
    }

    fn supports_comp_op(&self, comp_op: CompOp) -> bool {
        raqote_blend_mode(comp_op).is_some()
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
            | Style::Conic
            | Style::PatternNearest
            | Style::PatternBilinear => true,
        }
    }

    fn on_before_run<'a>(&'a self, ctx: RunContext<'a>) -> BenchResult<Box<dyn BenchRun + 'a>> {
        let RunContext { params, surface, sprites, randoms } = ctx;
        params.validate()?;

        let blend_mode = raqote_blend_mode(params.comp_op).ok_or_else(|| {
            BenchError::backend(NAME, format!("'{}' is not supported", params.comp_op))
        })?;

        if surface.width() != params.screen_w || surface.height() != params.screen_h {
            return Err(BenchError::surface(format!(
                "surface is {}x{}, but the screen is {}x{}",
                surface.width(),
                surface.height(),
                params.screen_w,
                params.screen_h
            )));
        }

        let mut images = ArrayVec::new();
        for sprite in sprites.iter() {
            let data = sprite
                .packed_pixels()
                .ok_or_else(|| BenchError::surface("raqote requires packed sprite rows"))?;

            images.push(Image {
                width: sprite.width() as i32,
                height: sprite.height() as i32,
                data,
            });
        }

        let width = surface.width() as i32;
        let height = surface.height() as i32;
        let pixels = surface
            .packed_pixels_mut()
            .ok_or_else(|| BenchError::surface("raqote requires packed surface rows"))?;

        let mut dt = DrawTarget::from_backing(width, height, pixels);
        dt.clear(SolidSource::from_unpremultiplied_argb(0, 0, 0, 0));

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

        Ok(Box::new(RaqoteRun {
            params,
            randoms,
            dt,
            images,
            options: DrawOptions {
                blend_mode,
                alpha: 1.0,
                antialias: AntialiasMode::Gray,
            },
            stroke_style: StrokeStyle {
                width: params.stroke_width as f32,
                ..StrokeStyle::default()
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

struct RaqoteRun<'a> {
    params: &'a BenchParams,
    randoms: &'a mut BenchRandoms,
    dt: DrawTarget<&'a mut [u32]>,
    images: ArrayVec<Image<'a>, NUM_SPRITES>,
    options: DrawOptions,
    stroke_style: StrokeStyle,
    spread: Spread,
    edge_mode: EdgeMode,
    // Must stay the last field, so the canvas is released after the draw target is gone.
    _canvas: ResourceGuard<'a>,
}

impl<'a> RaqoteRun<'a> {
    fn next_fill(&mut self, bounds: &Rect, index: u32) -> Fill {
        Fill::next(self.params.style, &mut self.randoms.color, bounds, index)
    }

    fn source(&self, fill: &Fill) -> Source<'a> {
        match *fill {
            Fill::Solid(c) => {
                Source::Solid(SolidSource::from_unpremultiplied_argb(c.a(), c.r(), c.g(), c.b()))
            }
            Fill::Linear { start, end, ref stops } => Source::new_linear_gradient(
                to_gradient(stops),
                to_point(start),
                to_point(end),
                self.spread,
            ),
            Fill::Radial { center, radius, ref stops } => Source::new_radial_gradient(
                to_gradient(stops),
                to_point(center),
                radius as f32,
                self.spread,
            ),
            Fill::Conic { center, ref stops } => Source::new_sweep_gradient(
                to_gradient(stops),
                to_point(center),
                0.0,
                360.0,
                self.spread,
            ),
            Fill::Pattern { slot, filter, origin } => {
                let filter = match filter {
                    SpriteFilter::Nearest => FilterMode::Nearest,
                    SpriteFilter::Bilinear => FilterMode::Bilinear,
                };

                // Image transform maps destination into sprite space.
                Source::Image(
                    self.images[slot],
                    ExtendMode::Repeat,
                    filter,
                    Transform::translation(-origin.x as f32, -origin.y as f32),
                )
            }
        }
    }

    fn draw_rect(&mut self, rect: &Rect, fill: &Fill, stroke: bool) {
        if stroke {
            let mut pb = Builder::new();
            outline::push_rect(&mut pb, rect);
            self.draw_path(&pb.finish(Winding::NonZero), fill, true);
        } else {
            let src = self.source(fill);
            self.dt.fill_rect(
                rect.x as f32,
                rect.y as f32,
                rect.w as f32,
                rect.h as f32,
                &src,
                &self.options,
            );
        }
    }

    fn draw_path(&mut self, path: &Path, fill: &Fill, stroke: bool) {
        let src = self.source(fill);
        if stroke {
            self.dt.stroke(path, &src, &self.stroke_style, &self.options);
        } else {
            self.dt.fill(path, &src, &self.options);
        }
    }

    fn set_transform(&mut self, ts: &Affine) {
        self.dt.set_transform(&to_transform(ts));
    }
}

impl BenchRun for RaqoteRun<'_> {
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
            self.draw_rect(&rect, &fill, stroke);
        }
    }

    fn rect_smooth(&mut self, stroke: bool) {
        let bounds = self.params.screen_size().to_size();
        let size = f64::from(self.params.shape_size);

        for i in 0..self.params.quantity {
            let rect = self.randoms.coord.next_rect(bounds, size, size);
            let fill = self.next_fill(&rect, i);
            self.draw_rect(&rect, &fill, stroke);
        }
    }

    fn rect_rotated(&mut self, stroke: bool) {
        let bounds = self.params.screen_size().to_size();
        let size = f64::from(self.params.shape_size);

        for i in 0..self.params.quantity {
            let rect = self.randoms.coord.next_rect(bounds, size, size);
            let fill = self.next_fill(&rect, i);
            self.set_transform(&workload::rotation(self.params, i));
            self.draw_rect(&rect, &fill, stroke);
            self.set_transform(&Affine::identity());
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
            self.draw_path(&pb.finish(Winding::NonZero), &fill, stroke);
        }
    }

    fn round_rotated(&mut self, stroke: bool) {
        let bounds = self.params.screen_size().to_size();
        let size = f64::from(self.params.shape_size);

        for i in 0..self.params.quantity {
            let rect = self.randoms.coord.next_rect(bounds, size, size);
            let radius = workload::next_round_radius(&mut self.randoms.extra, &rect);
            let fill = self.next_fill(&rect, i);

            let mut pb = Builder::new();
            outline::push_round_rect(&mut pb, &rect, radius);
            self.set_transform(&workload::rotation(self.params, i));
            self.draw_path(&pb.finish(Winding::NonZero), &fill, stroke);
            self.set_transform(&Affine::identity());
        }
    }

    fn polygon(&mut self, mode: PolygonMode, complexity: u32) {
        let (winding, stroke) = match mode {
            PolygonMode::FillNonZero => (Winding::NonZero, false),
            PolygonMode::FillEvenOdd => (Winding::EvenOdd, false),
            PolygonMode::Stroke => (Winding::NonZero, true),
        };

        for i in 0..self.params.quantity {
            let polygon = Polygon::next(self.params, &mut self.randoms.coord, complexity);
            let fill = self.next_fill(&polygon.bounds, i);

            let mut pb = Builder::new();
            outline::push_polyline(&mut pb, &polygon.points, !stroke);
            self.draw_path(&pb.finish(winding), &fill, stroke);
        }
    }

    fn shape(&mut self, stroke: bool, shape: &ShapeData<'_>) {
        let bounds = self.params.base_bounds();
        let size = f64::from(self.params.shape_size);
        // Paint is defined in shape space, the draw target transform moves both.
        let local = Rect::new(0.0, 0.0, size, size);

        let mut pb = Builder::new();
        outline::push_shape(&mut pb, shape, size);
        let path = pb.finish(Winding::NonZero);

        for i in 0..self.params.quantity {
            let base = self.randoms.coord.next_point(bounds);
            let fill = self.next_fill(&local, i);
            self.set_transform(&Affine::translation(base.x, base.y));
            self.draw_path(&path, &fill, stroke);
        }

        self.set_transform(&Affine::identity());
    }
}
