//! Browser driver: one jar per `<canvas>`
//!
//! The page creates a `WebJar` per canvas, forwards socket votes/resets to it
//! and calls `start()`; each animation frame ticks the jar and paints the draw
//! list on the canvas' 2D context.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::frame_loop::FrameLoop;
use crate::events::VoteEvent;
use crate::render::draw::{self, DrawCommand, PathOp};
use crate::settings::JarConfig;
use crate::sim::Jar;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("Vote jar ready");
    }
}

struct Surface {
    jar: Jar,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    frames: FrameLoop,
}

impl Surface {
    /// Match the backing store to CSS size × device pixel ratio
    fn resize(&mut self) {
        let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let css_w = self.canvas.client_width().max(0) as f64;
        let css_h = self.canvas.client_height().max(0) as f64;
        self.canvas.set_width((css_w * dpr) as u32);
        self.canvas.set_height((css_h * dpr) as u32);
        let _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.jar.resize(css_w as f32, css_h as f32);
    }

    fn frame(&mut self) {
        let frame = self.jar.tick();
        let w = self.canvas.client_width() as f64;
        let h = self.canvas.client_height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        paint(&self.ctx, &draw::build(&frame));
    }
}

fn paint(ctx: &CanvasRenderingContext2d, commands: &[DrawCommand]) {
    for cmd in commands {
        match cmd {
            DrawCommand::Stroke {
                path,
                line_width,
                color,
            } => {
                ctx.save();
                ctx.set_line_width(*line_width as f64);
                ctx.set_stroke_style_str(color);
                ctx.begin_path();
                for op in path {
                    match *op {
                        PathOp::MoveTo { x, y } => ctx.move_to(x as f64, y as f64),
                        PathOp::LineTo { x, y } => ctx.line_to(x as f64, y as f64),
                        PathOp::QuadTo { cx, cy, x, y } => {
                            ctx.quadratic_curve_to(cx as f64, cy as f64, x as f64, y as f64)
                        }
                    }
                }
                ctx.stroke();
                ctx.restore();
            }
            DrawCommand::FillCircle {
                x,
                y,
                radius,
                color,
            } => {
                ctx.begin_path();
                let _ = ctx.arc(*x as f64, *y as f64, *radius as f64, 0.0, TAU);
                ctx.set_fill_style_str(color);
                ctx.fill();
            }
            DrawCommand::FillText {
                text,
                x,
                y,
                font_px,
                color,
            } => {
                ctx.set_fill_style_str(color);
                ctx.set_font(&format!("{}px {}", font_px, draw::FONT_FAMILY));
                ctx.set_text_align("center");
                ctx.set_text_baseline("middle");
                let _ = ctx.fill_text(text, *x as f64, *y as f64);
            }
        }
    }
}

fn request_animation_frame(surface: Rc<RefCell<Surface>>, generation: u64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        let current = {
            let mut s = surface.borrow_mut();
            let current = s.frames.is_current(generation);
            if current {
                s.frame();
            }
            current
        };
        if current {
            request_animation_frame(surface, generation);
        }
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

#[wasm_bindgen]
pub struct WebJar {
    surface: Rc<RefCell<Surface>>,
}

#[wasm_bindgen]
impl WebJar {
    /// Bind a jar to the canvas with `canvas_id`. `config_json` may override
    /// any tuning value.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<WebJar, JsValue> {
        let config = match config_json {
            Some(json) => JarConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => JarConfig::default(),
        };
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str("canvas not found"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("element is not a canvas"))?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("unexpected context type"))?;

        let seed = js_sys::Date::now() as u64;
        let jar = Jar::with_seed(config, 0.0, 0.0, seed);
        let mut surface = Surface {
            jar,
            canvas,
            ctx,
            frames: FrameLoop::default(),
        };
        surface.resize();
        log::info!("Jar bound to #{} (seed {})", canvas_id, seed);

        let surface = Rc::new(RefCell::new(surface));
        if let Some(window) = web_sys::window() {
            let surface = surface.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                surface.borrow_mut().resize();
            });
            let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        Ok(WebJar { surface })
    }

    pub fn spawn_token(&self, label: Option<String>, color: Option<String>) {
        self.surface
            .borrow_mut()
            .jar
            .spawn(label.as_deref(), color.as_deref());
    }

    pub fn spawn_random(&self, label: Option<String>) {
        self.surface.borrow_mut().jar.spawn_random(label.as_deref());
    }

    /// Spawn from a broadcast vote payload (JSON)
    pub fn on_vote(&self, payload: &str) -> Result<(), JsValue> {
        let vote = VoteEvent::from_json(payload).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let label = vote.token_label();
        let mut s = self.surface.borrow_mut();
        match vote.color.as_deref() {
            Some(color) => s.jar.spawn(label, Some(color)),
            None => s.jar.spawn_random(label),
        };
        Ok(())
    }

    pub fn clear_tokens(&self) {
        self.surface.borrow_mut().jar.clear();
    }

    pub fn resize(&self) {
        self.surface.borrow_mut().resize();
    }

    /// Tick once and paint
    pub fn frame(&self) {
        self.surface.borrow_mut().frame();
    }

    pub fn token_count(&self) -> usize {
        self.surface.borrow().jar.len()
    }

    /// Start the animation loop; a no-op while already running
    pub fn start(&self) {
        let generation = self.surface.borrow_mut().frames.start();
        if let Some(generation) = generation {
            request_animation_frame(self.surface.clone(), generation);
        }
    }

    /// Stop requesting frames; the jar keeps its tokens
    pub fn stop(&self) {
        self.surface.borrow_mut().frames.stop();
    }
}
