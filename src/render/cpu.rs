use crate::foundation::core::{Affine, Point, Rect};
use crate::foundation::error::{StrataError, StrataResult};
use crate::mobject::node::Mobject;
use crate::render::backend::FrameRGBA;
use crate::render::camera::{Camera, CameraConfig};
use crate::render::composite::{over_in_place, solid};

/// Smallest drawn dot edge, in pixels, so thin clouds never vanish.
const MIN_DOT_PX: f64 = 1.0;

/// CPU rasterizer for point-cloud Mobjects, powered by `vello_cpu`.
///
/// Each point is painted as a square `dot_size` wide; runs of equally colored points share
/// one path. Mobjects are drawn onto a transparent layer which is then composited over the
/// base: the camera background, or a frozen snapshot of earlier Mobjects.
pub struct CpuRenderer {
    camera: Camera,
    ctx: Option<vello_cpu::RenderContext>,
    base: Vec<u8>,
    frozen: bool,
}

impl std::fmt::Debug for CpuRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuRenderer")
            .field("camera", &self.camera)
            .field("frozen", &self.frozen)
            .finish_non_exhaustive()
    }
}

impl CpuRenderer {
    pub fn new(config: CameraConfig) -> StrataResult<Self> {
        let camera = Camera::new(config)?;
        pixel_dims(&camera)?;
        let base = background(&camera)?;
        Ok(Self {
            camera,
            ctx: None,
            base,
            frozen: false,
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// `true` once [`CpuRenderer::freeze`] has replaced the plain background.
    pub fn has_frozen_background(&self) -> bool {
        self.frozen
    }

    /// Rasterize `mobjects` (bottom to top) over the current base.
    #[tracing::instrument(
        skip(self, mobjects),
        fields(w = self.camera.config().width_px, h = self.camera.config().height_px)
    )]
    pub fn render<'m>(
        &mut self,
        mobjects: impl IntoIterator<Item = &'m Mobject>,
    ) -> StrataResult<FrameRGBA> {
        let layer = self.rasterize(mobjects)?;
        let mut data = self.base.clone();
        over_in_place(&mut data, &layer, 1.0)?;
        let canvas = self.camera.canvas();
        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data,
            premultiplied: true,
        })
    }

    /// Bake `mobjects` into the base so later frames start from them.
    pub fn freeze<'m>(
        &mut self,
        mobjects: impl IntoIterator<Item = &'m Mobject>,
    ) -> StrataResult<()> {
        let frame = self.render(mobjects)?;
        self.base = frame.data;
        self.frozen = true;
        Ok(())
    }

    /// Drop any frozen background.
    pub fn reset_background(&mut self) -> StrataResult<()> {
        self.base = background(&self.camera)?;
        self.frozen = false;
        Ok(())
    }

    fn with_ctx_mut<R>(
        &mut self,
        f: impl FnOnce(&Camera, &mut vello_cpu::RenderContext) -> StrataResult<R>,
    ) -> StrataResult<R> {
        let (width, height) = pixel_dims(&self.camera)?;
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&self.camera, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn rasterize<'m>(
        &mut self,
        mobjects: impl IntoIterator<Item = &'m Mobject>,
    ) -> StrataResult<Vec<u8>> {
        self.with_ctx_mut(|camera, ctx| {
            let (width, height) = pixel_dims(camera)?;
            ctx.set_transform(affine_to_cpu(camera.world_to_pixel()));
            let visible = camera.visible_rect();
            let min_half = MIN_DOT_PX * 0.5 / camera.pixels_per_unit();
            for m in mobjects {
                for member in m.family() {
                    draw_member(ctx, member, visible, min_half);
                }
            }
            ctx.flush();
            let mut pixmap = vello_cpu::Pixmap::new(width, height);
            ctx.render_to_pixmap(&mut pixmap);
            Ok(pixmap.data_as_u8_slice().to_vec())
        })
    }
}

fn draw_member(ctx: &mut vello_cpu::RenderContext, m: &Mobject, visible: Rect, min_half: f64) {
    let opacity = m.opacity().clamp(0.0, 1.0) as f32;
    if m.len_points() == 0 || opacity <= 0.0 {
        return;
    }
    let half = (m.dot_size() * 0.5).max(min_half);
    let bounds = visible.inflate(half, half);

    if opacity < 1.0 {
        ctx.push_opacity_layer(opacity);
    }
    let mut run: Option<[u8; 3]> = None;
    let mut path = vello_cpu::kurbo::BezPath::new();
    for (p, c) in m.points().iter().zip(m.colors()) {
        if !bounds.contains(*p) {
            continue;
        }
        let rgb = c.to_rgb8();
        if run.is_some_and(|r| r != rgb) {
            fill_run(ctx, run, &path);
            path.truncate(0);
        }
        run = Some(rgb);
        push_square(&mut path, *p, half);
    }
    fill_run(ctx, run, &path);
    if opacity < 1.0 {
        ctx.pop_layer();
    }
}

fn fill_run(
    ctx: &mut vello_cpu::RenderContext,
    run: Option<[u8; 3]>,
    path: &vello_cpu::kurbo::BezPath,
) {
    let Some([r, g, b]) = run else {
        return;
    };
    if path.elements().is_empty() {
        return;
    }
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, 255));
    ctx.fill_path(path);
}

fn push_square(path: &mut vello_cpu::kurbo::BezPath, p: Point, half: f64) {
    let (x0, y0, x1, y1) = (p.x - half, p.y - half, p.x + half, p.y + half);
    path.move_to(point_to_cpu(Point::new(x0, y0)));
    path.line_to(point_to_cpu(Point::new(x1, y0)));
    path.line_to(point_to_cpu(Point::new(x1, y1)));
    path.line_to(point_to_cpu(Point::new(x0, y1)));
    path.close_path();
}

fn background(camera: &Camera) -> StrataResult<Vec<u8>> {
    let canvas = camera.canvas();
    let px = camera.config().background.to_rgba8_premul(1.0).to_array();
    solid(canvas.width, canvas.height, px)
}

fn pixel_dims(camera: &Camera) -> StrataResult<(u16, u16)> {
    let canvas = camera.canvas();
    let w = u16::try_from(canvas.width)
        .map_err(|_| StrataError::render(format!("width {} exceeds u16", canvas.width)))?;
    let h = u16::try_from(canvas.height)
        .map_err(|_| StrataError::render(format!("height {} exceeds u16", canvas.height)))?;
    Ok((w, h))
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
