use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

/// Opacity of the line joining two points `distance` apart: fully opaque at
/// zero distance, fading linearly to nothing at `max_distance`.
pub fn connection_alpha(distance: f64, max_distance: f64) -> Option<f64> {
    if max_distance <= 0.0 || distance >= max_distance {
        return None;
    }
    Some(1.0 - distance / max_distance)
}

/// Fixed-size batch of drifting points bounced off the surface edges.
pub struct ParticleField {
    width: f64,
    height: f64,
    connect_distance: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(
        width: f64,
        height: f64,
        count: usize,
        connect_distance: f64,
        rng: &mut impl FnMut() -> f64,
    ) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng() * width,
                y: rng() * height,
                vx: (rng() - 0.5) * 1.0,
                vy: (rng() - 0.5) * 1.0,
                radius: 1.5 + rng() * 1.5,
            })
            .collect();
        Self {
            width,
            height,
            connect_distance,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Regenerates the batch for a new surface size. Positions are not
    /// preserved across a resize.
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl FnMut() -> f64) {
        *self = Self::new(width, height, self.particles.len(), self.connect_distance, rng);
    }

    /// Advances every point one frame, reflecting the velocity component at
    /// the edge it crossed and clamping the coordinate back onto the surface.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 {
                p.x = 0.0;
                p.vx = p.vx.abs();
            } else if p.x > self.width {
                p.x = self.width;
                p.vx = -p.vx.abs();
            }
            if p.y < 0.0 {
                p.y = 0.0;
                p.vy = p.vy.abs();
            } else if p.y > self.height {
                p.y = self.height;
                p.vy = -p.vy.abs();
            }
        }
    }

    /// All pairs close enough to connect, with the line opacity for each.
    pub fn connections(&self) -> Vec<(usize, usize, f64)> {
        let mut out = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = &self.particles[i];
                let b = &self.particles[j];
                let d = (b.x - a.x).hypot(b.y - a.y);
                if let Some(alpha) = connection_alpha(d, self.connect_distance) {
                    out.push((i, j, alpha));
                }
            }
        }
        out
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParticleShape {
    Dot,
    /// Hexagon outline drawn around each point, for the circuit-mesh look.
    Hexagon,
}

#[derive(Properties, PartialEq)]
pub struct ParticleCanvasProps {
    #[prop_or(60)]
    pub count: usize,
    #[prop_or(100.0)]
    pub connect_distance: f64,
    #[prop_or(ParticleShape::Dot)]
    pub shape: ParticleShape,
    #[prop_or_default]
    pub class: Classes,
}

fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField, shape: ParticleShape) {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());

    for p in field.particles() {
        match shape {
            ParticleShape::Dot => {
                ctx.begin_path();
                let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
                ctx.set_fill_style_str(config::NAVY);
                ctx.fill();
            }
            ParticleShape::Hexagon => {
                ctx.begin_path();
                let size = p.radius * 4.0;
                for i in 0..6 {
                    let angle = (PI / 3.0) * i as f64 - PI / 6.0;
                    let (x, y) = (p.x + size * angle.cos(), p.y + size * angle.sin());
                    if i == 0 {
                        ctx.move_to(x, y);
                    } else {
                        ctx.line_to(x, y);
                    }
                }
                ctx.close_path();
                ctx.set_stroke_style_str("rgba(255, 102, 0, 0.25)");
                ctx.set_line_width(1.0);
                ctx.stroke();

                ctx.begin_path();
                let _ = ctx.arc(p.x, p.y, 2.0, 0.0, PI * 2.0);
                ctx.set_fill_style_str(config::NAVY);
                ctx.fill();
            }
        }
    }

    let particles = field.particles();
    for (i, j, alpha) in field.connections() {
        let (a, b) = (&particles[i], &particles[j]);
        ctx.begin_path();
        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
        ctx.set_stroke_style_str(&format!("rgba(0, 51, 102, {alpha:.3})"));
        ctx.set_line_width(alpha * 1.5);
        ctx.stroke();
    }
}

fn viewport_size() -> (f64, f64) {
    let win = web_sys::window();
    let w = win
        .as_ref()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = win
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

/// Full-viewport decorative canvas. Skips setup silently when the canvas is
/// unavailable; cancels the frame loop and drops its listeners on unmount.
#[function_component(ParticleCanvas)]
pub fn particle_canvas(props: &ParticleCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(count, connect_distance, shape): &(usize, f64, ParticleShape)| {
                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| {});
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let (w, h) = viewport_size();
                    canvas.set_width(w as u32);
                    canvas.set_height(h as u32);

                    let ctx = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
                    if let Some(ctx) = ctx {
                        let mut rng = || js_sys::Math::random();
                        let field = Rc::new(RefCell::new(ParticleField::new(
                            w,
                            h,
                            *count,
                            *connect_distance,
                            &mut rng,
                        )));

                        // Self-perpetuating frame loop: each frame schedules
                        // the next and records the handle for cancellation.
                        let raf_id = Rc::new(Cell::new(None::<i32>));
                        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                            Rc::new(RefCell::new(None));
                        {
                            let field = field.clone();
                            let raf_id = raf_id.clone();
                            let frame_ref = frame.clone();
                            let shape = *shape;
                            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                                {
                                    let mut f = field.borrow_mut();
                                    f.step();
                                    draw(&ctx, &f, shape);
                                }
                                if let Some(win) = web_sys::window() {
                                    if let Some(cb) = frame_ref.borrow().as_ref() {
                                        if let Ok(id) = win.request_animation_frame(
                                            cb.as_ref().unchecked_ref(),
                                        ) {
                                            raf_id.set(Some(id));
                                        }
                                    }
                                }
                            })
                                as Box<dyn FnMut()>));
                        }
                        if let (Some(win), Some(cb)) = (web_sys::window(), frame.borrow().as_ref())
                        {
                            if let Ok(id) =
                                win.request_animation_frame(cb.as_ref().unchecked_ref())
                            {
                                raf_id.set(Some(id));
                            }
                        }

                        let resize = Closure::wrap(Box::new({
                            let field = field.clone();
                            let canvas = canvas.clone();
                            move || {
                                let (w, h) = viewport_size();
                                canvas.set_width(w as u32);
                                canvas.set_height(h as u32);
                                let mut rng = || js_sys::Math::random();
                                field.borrow_mut().resize(w, h, &mut rng);
                            }
                        })
                            as Box<dyn FnMut()>);
                        if let Some(win) = web_sys::window() {
                            let _ = win.add_event_listener_with_callback(
                                "resize",
                                resize.as_ref().unchecked_ref(),
                            );
                        }

                        cleanup = Box::new(move || {
                            if let (Some(win), Some(id)) = (web_sys::window(), raf_id.get()) {
                                let _ = win.cancel_animation_frame(id);
                            }
                            // Breaking the closure's self-reference releases it.
                            frame.borrow_mut().take();
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "resize",
                                    resize.as_ref().unchecked_ref(),
                                );
                            }
                            drop(resize);
                        });
                    }
                }
                move || cleanup()
            },
            (props.count, props.connect_distance, props.shape),
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            class={classes!("particle-canvas", props.class.clone())}
            style="position: absolute; inset: 0; z-index: 0; background-color: transparent;"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq_rng(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn points_start_inside_the_surface() {
        let mut rng = seq_rng(vec![0.1, 0.9, 0.3, 0.7, 0.5]);
        let field = ParticleField::new(200.0, 100.0, 10, 50.0, &mut rng);
        assert_eq!(field.particles().len(), 10);
        for p in field.particles() {
            assert!((0.0..=200.0).contains(&p.x));
            assert!((0.0..=100.0).contains(&p.y));
        }
    }

    #[test]
    fn crossing_an_edge_reflects_velocity_and_clamps_position() {
        let mut rng = seq_rng(vec![0.5]);
        let mut field = ParticleField::new(100.0, 100.0, 1, 50.0, &mut rng);
        {
            let p = &mut field.particles[0];
            p.x = 99.5;
            p.y = 0.2;
            p.vx = 2.0;
            p.vy = -1.0;
        }
        field.step();
        let p = field.particles()[0];
        assert_eq!(p.x, 100.0);
        assert_eq!(p.vx, -2.0);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.vy, 1.0);
    }

    #[test]
    fn points_never_escape_the_surface() {
        let mut rng = seq_rng(vec![0.05, 0.95, 0.9, 0.1, 0.6, 0.4, 0.2, 0.8]);
        let mut field = ParticleField::new(60.0, 40.0, 8, 30.0, &mut rng);
        for _ in 0..1000 {
            field.step();
            for p in field.particles() {
                assert!((0.0..=60.0).contains(&p.x));
                assert!((0.0..=40.0).contains(&p.y));
            }
        }
    }

    #[test]
    fn connection_alpha_decreases_with_distance() {
        let near = connection_alpha(10.0, 100.0).unwrap();
        let far = connection_alpha(60.0, 100.0).unwrap();
        assert!(near > far);
        assert_eq!(connection_alpha(0.0, 100.0), Some(1.0));
    }

    #[test]
    fn no_connection_at_or_beyond_the_threshold() {
        assert_eq!(connection_alpha(100.0, 100.0), None);
        assert_eq!(connection_alpha(250.0, 100.0), None);
    }

    #[test]
    fn connections_cover_exactly_the_close_pairs() {
        let mut rng = seq_rng(vec![0.0]);
        let mut field = ParticleField::new(1000.0, 1000.0, 3, 100.0, &mut rng);
        field.particles[0] = Particle { x: 0.0, y: 0.0, vx: 0.0, vy: 0.0, radius: 1.0 };
        field.particles[1] = Particle { x: 30.0, y: 0.0, vx: 0.0, vy: 0.0, radius: 1.0 };
        field.particles[2] = Particle { x: 500.0, y: 500.0, vx: 0.0, vy: 0.0, radius: 1.0 };
        let conns = field.connections();
        assert_eq!(conns.len(), 1);
        let (i, j, alpha) = conns[0];
        assert_eq!((i, j), (0, 1));
        assert!((alpha - 0.7).abs() < 1e-9);
    }

    #[test]
    fn resize_regenerates_the_same_number_of_points_in_new_bounds() {
        let mut rng = seq_rng(vec![0.2, 0.8, 0.4, 0.6]);
        let mut field = ParticleField::new(100.0, 100.0, 12, 50.0, &mut rng);
        field.resize(10.0, 10.0, &mut rng);
        assert_eq!(field.particles().len(), 12);
        for p in field.particles() {
            assert!((0.0..=10.0).contains(&p.x));
            assert!((0.0..=10.0).contains(&p.y));
        }
    }
}
