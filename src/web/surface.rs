//! Wireframe rendering into a 2D canvas context.

use glam::{Mat4, Vec2, Vec3};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::Camera;
use crate::engine::RenderSurface;
use crate::scene::SceneGraph;

const BACKGROUND: &str = "#111318";
const LABEL_FONT: &str = "16px sans-serif";

/// A full-bleed `<canvas>` drawn with `CanvasRenderingContext2d`.
pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    /// Wrap `canvas`, acquiring its 2D context.
    ///
    /// # Errors
    ///
    /// Returns the JS error if the context is unavailable (e.g. the canvas
    /// already has a WebGL context).
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    fn to_pixels(&self, ndc: Vec3) -> Option<Vec2> {
        if !(0.0..=1.0).contains(&ndc.z) {
            return None;
        }
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.canvas.width() as f32,
            (1.0 - ndc.y) * 0.5 * self.canvas.height() as f32,
        ))
    }

    fn project(&self, camera: &Camera, world: &Mat4, p: Vec3) -> Option<Vec2> {
        camera
            .project(world.transform_point3(p))
            .and_then(|ndc| self.to_pixels(ndc))
    }

    fn clear(&self) {
        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx.fill_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }
}

fn css_color([r, g, b]: [f32; 3]) -> String {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("rgb({}, {}, {})", c(r), c(g), c(b))
}

impl RenderSurface for Canvas2dSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn render(&mut self, scene: &SceneGraph, camera: &Camera) {
        self.clear();
        let mut labels = Vec::new();
        scene.visit_all_visible(&mut |_, node, world| {
            let Some(mesh) = &node.mesh else {
                return;
            };
            self.ctx.set_stroke_style_str(&css_color(node.material.color));
            self.ctx.begin_path();
            let positions = mesh.positions();
            for (a, b) in mesh.edges() {
                let ends = (
                    self.project(camera, world, positions[a as usize]),
                    self.project(camera, world, positions[b as usize]),
                );
                if let (Some(pa), Some(pb)) = ends {
                    self.ctx.move_to(f64::from(pa.x), f64::from(pa.y));
                    self.ctx.line_to(f64::from(pb.x), f64::from(pb.y));
                }
            }
            self.ctx.stroke();

            if let Some(label) = &node.material.label {
                let centre = mesh.bounds().center();
                if let Some(at) = self.project(camera, world, centre) {
                    labels.push((label.clone(), at));
                }
            }
        });

        self.ctx.set_fill_style_str("#ffffff");
        self.ctx.set_font(LABEL_FONT);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        for (text, at) in labels {
            let _ = self
                .ctx
                .fill_text(&text, f64::from(at.x), f64::from(at.y));
        }
    }

    fn show_error(&mut self, message: &str) {
        self.clear();
        self.ctx.set_fill_style_str("#ff6b6b");
        self.ctx.set_font(LABEL_FONT);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        let _ = self.ctx.fill_text(
            message,
            f64::from(self.canvas.width()) * 0.5,
            f64::from(self.canvas.height()) * 0.5,
        );
    }
}
