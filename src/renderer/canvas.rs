//! Canvas 2D backend
//!
//! Executes a display list on a `CanvasRenderingContext2d` and owns the
//! bridge photos.

use std::cell::Cell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::draw::{DrawCmd, Gradient, Paint, Rect, Stroke};
use super::scene::{ImageSize, ImageTable};
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::platform::PlatformError;
use crate::sim::MaterialKind;

/// Bridge photos, one per material kind, loaded once at startup
pub struct ImageBank {
    images: [Option<HtmlImageElement>; 4],
}

impl ImageBank {
    /// Start loading every photo. `dirty` is raised when one finishes so the
    /// next frame picks it up. Failed loads are left in place and never
    /// report as complete.
    pub fn load(dirty: Rc<Cell<bool>>) -> Self {
        let images = MaterialKind::ALL.map(|kind| {
            let img = match HtmlImageElement::new() {
                Ok(img) => img,
                Err(e) => {
                    log::debug!("Could not create image for {}: {:?}", kind.as_str(), e);
                    return None;
                }
            };

            let onload = {
                let dirty = dirty.clone();
                Closure::<dyn FnMut()>::new(move || {
                    log::debug!("Loaded {} bridge photo", kind.as_str());
                    dirty.set(true);
                })
            };
            img.set_onload(Some(onload.as_ref().unchecked_ref()));
            onload.forget();

            let onerror = Closure::<dyn FnMut()>::new(move || {
                log::debug!("Bridge photo for {} failed to load", kind.as_str());
            });
            img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            onerror.forget();

            img.set_cross_origin(Some("anonymous"));
            img.set_src(kind.image_url());
            Some(img)
        });

        Self { images }
    }

    fn get(&self, kind: MaterialKind) -> Option<&HtmlImageElement> {
        self.images[kind.index()].as_ref()
    }

    /// Sizes of the photos that have finished loading
    pub fn sizes(&self) -> ImageTable {
        MaterialKind::ALL.map(|kind| {
            let img = self.get(kind)?;
            if !img.complete() || img.natural_width() == 0 {
                return None;
            }
            Some(ImageSize {
                width: img.natural_width() as f32,
                height: img.natural_height() as f32,
            })
        })
    }
}

/// Canvas renderer state
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    pub images: ImageBank,
}

impl CanvasRenderer {
    /// Bind to `canvas`, fixing its backing store at the logical size
    pub fn new(canvas: &HtmlCanvasElement, images: ImageBank) -> Result<Self, PlatformError> {
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or(PlatformError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| PlatformError::NoContext)?;

        Ok(Self { ctx, images })
    }

    /// Draw a full frame
    pub fn render(&self, cmds: &[DrawCmd]) {
        for cmd in cmds {
            self.execute(cmd);
        }
    }

    fn execute(&self, cmd: &DrawCmd) {
        let ctx = &self.ctx;
        match cmd {
            DrawCmd::Clear => {
                ctx.clear_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
            }
            DrawCmd::FillRect { rect, paint } => {
                self.set_fill(paint);
                ctx.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
            }
            DrawCmd::Polyline {
                points,
                stroke,
                alpha,
            } => {
                let Some((first, rest)) = points.split_first() else {
                    return;
                };
                self.set_stroke(stroke);
                ctx.set_global_alpha(*alpha as f64);
                ctx.begin_path();
                ctx.move_to(first.x as f64, first.y as f64);
                for p in rest {
                    ctx.line_to(p.x as f64, p.y as f64);
                }
                ctx.stroke();
                ctx.set_global_alpha(1.0);
            }
            DrawCmd::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                ctx.begin_path();
                if ctx
                    .arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)
                    .is_err()
                {
                    return;
                }
                if let Some(color) = fill {
                    ctx.set_fill_style_str(color);
                    ctx.fill();
                }
                if let Some(stroke) = stroke {
                    self.set_stroke(stroke);
                    ctx.stroke();
                }
            }
            DrawCmd::Image {
                kind,
                src,
                dst,
                alpha,
            } => self.draw_image(*kind, src, dst, *alpha),
            DrawCmd::Text { text, pos, font } => {
                ctx.set_font(font);
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                if let Err(e) = ctx.fill_text(text, pos.x as f64, pos.y as f64) {
                    log::trace!("fill_text failed: {:?}", e);
                }
            }
        }
    }

    fn draw_image(&self, kind: MaterialKind, src: &Rect, dst: &Rect, alpha: f32) {
        let Some(img) = self.images.get(kind) else {
            return;
        };
        if !img.complete() {
            return;
        }

        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(alpha as f64);
        let drawn = ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                img,
                src.x as f64,
                src.y as f64,
                src.w as f64,
                src.h as f64,
                dst.x as f64,
                dst.y as f64,
                dst.w as f64,
                dst.h as f64,
            );
        if let Err(e) = drawn {
            log::trace!("Skipped {} overlay: {:?}", kind.as_str(), e);
        }
        ctx.restore();
    }

    fn set_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(color),
            Paint::Vertical(gradient) => {
                let g = self.linear_gradient(gradient);
                self.ctx.set_fill_style_canvas_gradient(&g);
            }
        }
    }

    fn set_stroke(&self, stroke: &Stroke) {
        self.ctx.set_stroke_style_str(stroke.color);
        self.ctx.set_line_width(stroke.width as f64);
    }

    fn linear_gradient(&self, gradient: &Gradient) -> web_sys::CanvasGradient {
        let g = self
            .ctx
            .create_linear_gradient(0.0, gradient.y0 as f64, 0.0, gradient.y1 as f64);
        for (offset, color) in gradient.stops {
            // Stops are static and valid; a rejection only drops that stop
            let _ = g.add_color_stop(*offset, color);
        }
        g
    }
}
