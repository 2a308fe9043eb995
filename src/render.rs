use crate::constants::*;
use anyhow::anyhow;
use glam::{Mat4, Vec3};
use heart_core::constants::HEART_PICK_RADIUS;
use heart_core::{AnimatedObject, Scene, StarField, Transform};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

mod projection;
mod scoped;
pub use projection::*;
use scoped::with_saved;

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

struct HeartDraw {
    x: f64,
    y: f64,
    radius: f64,
    angle: f64,
    squash: f64,
    fill: String,
    alpha: f64,
}

/// Rasterizes a [`Scene`] onto a canvas with the 2D context API.
pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
    width: u32,
    height: u32,
    // Star colours never change after the scene is built
    star_fills: Vec<(String, Vec<usize>)>,
    star_fills_len: usize,
}

impl CanvasRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            ctx,
            width: canvas.width(),
            height: canvas.height(),
            star_fills: Vec::new(),
            star_fills_len: 0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width != self.width || height != self.height {
            log::debug!("[render] resize {}x{} -> {}x{}", self.width, self.height, width, height);
            self.width = width;
            self.height = height;
        }
    }

    fn refresh_star_fills(&mut self, stars: Option<&StarField>) {
        let len = stars.map_or(0, |s| s.colors.len());
        if len != self.star_fills_len {
            self.star_fills = stars.map_or_else(Vec::new, |s| {
                group_by_fill(&s.colors, STAR_OPACITY, STAR_COLOR_LEVELS)
            });
            self.star_fills_len = len;
            log::debug!("[render] {} stars in {} fills", len, self.star_fills.len());
        }
    }

    pub fn draw(&mut self, scene: &Scene) -> anyhow::Result<()> {
        self.refresh_star_fills(scene.star_field());
        let w = self.width.max(1) as f32;
        let h = self.height.max(1) as f32;
        let camera = scene.camera();
        let view_proj = camera.view_projection();
        let fovy = camera.fovy_radians;
        let view = View {
            view_proj,
            fovy,
            width: w,
            height: h,
        };

        self.ctx.set_global_composite_operation("source-over").map_err(js_err)?;
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_fill_style_str(BACKGROUND_CSS);
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);

        if let Some(stars) = scene.star_field() {
            let mvp = view_proj * rotation_matrix(stars.rotation);
            for (fill, indices) in &self.star_fills {
                self.ctx.set_fill_style_str(fill);
                for p in indices.iter().filter_map(|&i| stars.positions.get(i)) {
                    if let Some(sp) = project(&mvp, *p, w, h) {
                        let size = projected_radius(STAR_SIZE, sp.w, fovy, h).max(MIN_POINT_PX);
                        self.dot(sp, size);
                    }
                }
            }
        }

        if let Some(constellation) = scene.constellation() {
            let mvp = view_proj * rotation_matrix(constellation.rotation);
            let projected: Vec<Option<ScreenPoint>> = constellation
                .points
                .iter()
                .map(|p| project(&mvp, *p, w, h))
                .collect();
            self.ctx.set_stroke_style_str(&css_rgba(
                CONSTELLATION_LINE_RGB,
                CONSTELLATION_LINE_OPACITY,
            ));
            self.ctx.set_line_width(1.0);
            self.ctx.begin_path();
            for &(a, b) in &constellation.segments {
                if let (Some(Some(pa)), Some(Some(pb))) = (projected.get(a), projected.get(b)) {
                    self.ctx.move_to(pa.x as f64, pa.y as f64);
                    self.ctx.line_to(pb.x as f64, pb.y as f64);
                }
            }
            self.ctx.stroke();

            self.ctx.set_fill_style_str(&css_rgba(
                CONSTELLATION_POINT_RGB,
                CONSTELLATION_POINT_OPACITY,
            ));
            for sp in projected.iter().flatten() {
                let r = projected_radius(CONSTELLATION_POINT_RADIUS, sp.w, fovy, h).max(MIN_POINT_PX);
                self.ctx.begin_path();
                self.ctx
                    .arc(sp.x as f64, sp.y as f64, r as f64, 0.0, std::f64::consts::TAU)
                    .map_err(js_err)?;
                self.ctx.fill();
            }
        }

        if let Some(particles) = scene.particles() {
            self.ctx.set_global_composite_operation("lighter").map_err(js_err)?;
            self.ctx.set_fill_style_str(&css_rgba(PARTICLE_RGB, PARTICLE_OPACITY));
            for p in particles.positions() {
                if let Some(sp) = project(&view_proj, *p, w, h) {
                    let size = projected_radius(PARTICLE_SIZE, sp.w, fovy, h).max(MIN_POINT_PX);
                    self.dot(sp, size);
                }
            }
            self.ctx.set_global_composite_operation("source-over").map_err(js_err)?;
        }

        // Hearts back to front
        let mut hearts: Vec<(f32, HeartDraw)> = Vec::new();
        for heart in scene.floating_hearts() {
            let mut rgb = hsl_to_rgb(heart.params().hue, FLOATING_SATURATION, FLOATING_LIGHTNESS);
            if heart.is_hovered() {
                rgb = scale_rgb(rgb, HOVER_BRIGHTEN);
            }
            let rgb = add_emissive(rgb, rgb, heart.object.material.emissive_intensity);
            let alpha = heart.object.material.opacity;
            if let Some(d) = heart_draw(&heart.object, 1.0, rgb, alpha, &view) {
                hearts.push(d);
            }
        }
        if let Some(main) = scene.main_heart() {
            if let Some(glow) = &main.glow {
                let glow_scale = glow.transform.scale.max_element();
                let alpha = glow.material.opacity;
                if let Some(d) = heart_draw(&main.object, glow_scale, GLOW_RGB, alpha, &view) {
                    hearts.push(d);
                }
            }
            let rgb = add_emissive(
                MAIN_HEART_RGB,
                MAIN_HEART_EMISSIVE_RGB,
                main.object.material.emissive_intensity,
            );
            let alpha = main.object.material.opacity;
            if let Some(d) = heart_draw(&main.object, 1.0, rgb, alpha, &view) {
                hearts.push(d);
            }
        }
        // Far first; equal depth keeps push order so the glow stays behind
        hearts.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        for (_, d) in &hearts {
            self.heart(d)?;
        }
        self.ctx.set_global_alpha(1.0);
        Ok(())
    }

    #[inline]
    fn dot(&self, sp: ScreenPoint, size: f32) {
        let half = (size * 0.5) as f64;
        self.ctx.fill_rect(
            sp.x as f64 - half,
            sp.y as f64 - half,
            size as f64,
            size as f64,
        );
    }

    fn heart(&self, d: &HeartDraw) -> anyhow::Result<()> {
        with_saved(
            &self.ctx,
            web::CanvasRenderingContext2d::save,
            web::CanvasRenderingContext2d::restore,
            |ctx| -> anyhow::Result<()> {
                ctx.set_global_alpha(d.alpha);
                ctx.set_fill_style_str(&d.fill);
                ctx.translate(d.x, d.y).map_err(js_err)?;
                ctx.rotate(d.angle).map_err(js_err)?;
                ctx.scale(d.radius * d.squash, d.radius).map_err(js_err)?;
                ctx.begin_path();
                ctx.move_to(0.0, -0.5);
                ctx.bezier_curve_to(0.0, -1.1, -1.0, -1.1, -1.0, -0.5);
                ctx.bezier_curve_to(-1.0, 0.1, 0.0, 0.5, 0.0, 1.0);
                ctx.bezier_curve_to(0.0, 0.5, 1.0, 0.1, 1.0, -0.5);
                ctx.bezier_curve_to(1.0, -1.1, 0.0, -1.1, 0.0, -0.5);
                ctx.close_path();
                ctx.fill();
                Ok(())
            },
        )
    }
}

fn rotation_matrix(rotation: Vec3) -> Mat4 {
    Transform {
        rotation,
        ..Transform::default()
    }
    .matrix()
}

struct View {
    view_proj: Mat4,
    fovy: f32,
    width: f32,
    height: f32,
}

/// Screen-space heart glyph for an object, `extra_scale` multiplying its size.
/// Returns the depth used for back-to-front sorting with the glyph.
fn heart_draw(
    object: &AnimatedObject,
    extra_scale: f32,
    rgb: [f32; 3],
    alpha: f32,
    view: &View,
) -> Option<(f32, HeartDraw)> {
    let t = &object.transform;
    let sp = project(&view.view_proj, t.position, view.width, view.height)?;
    let world_radius = HEART_PICK_RADIUS * t.scale.max_element() * extra_scale;
    let radius = projected_radius(world_radius, sp.w, view.fovy, view.height).max(MIN_POINT_PX);
    Some((
        sp.w,
        HeartDraw {
            x: sp.x as f64,
            y: sp.y as f64,
            radius: radius as f64,
            angle: t.rotation.z as f64,
            // Spin around Y reads as a horizontal squash on a flat glyph
            squash: (t.rotation.y.cos().abs() as f64).max(0.05),
            fill: css_rgba(rgb, 1.0),
            alpha: alpha.clamp(0.0, 1.0) as f64,
        },
    ))
}
