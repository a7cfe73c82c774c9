//! Color wheel view for one gradient endpoint.
//!
//! The wheel is rasterized once per canvas size into an RGBA8 image. Pointer
//! input is forwarded to the shared [`GradientSession`], which owns the drag
//! state and the endpoint colors.

use std::sync::Arc;

use floem::kurbo::{Circle, Point, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalUpdate, SignalWith};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::Rgb;
use crate::constants;
use crate::interaction::{self, Endpoint, PointerEvent};
use crate::session::{Canvas, GradientSession};
use crate::surface::PixelBuffer;
use crate::wheel::{draw_color_wheel, WheelGeometry};

enum WheelUpdate {
    Color(Rgb),
}

pub(crate) struct ColorWheel {
    id: ViewId,
    endpoint: Endpoint,
    session: RwSignal<GradientSession>,
    color: Rgb,
    size: floem::taffy::prelude::Size<f32>,
    /// Cached wheel raster and the canvas size it was drawn for.
    wheel_img: Option<peniko::Image>,
    wheel_hash: Vec<u8>,
    cached_dims: (u32, u32),
}

/// Creates the color wheel that edits `endpoint`'s hue and saturation.
pub(crate) fn color_wheel(session: RwSignal<GradientSession>, endpoint: Endpoint) -> ColorWheel {
    let id = ViewId::new();

    create_effect(move |_| {
        let c = session.with(|s| s.color(endpoint));
        id.update_state(WheelUpdate::Color(c));
    });

    ColorWheel {
        id,
        endpoint,
        session,
        color: session.with_untracked(|s| s.color(endpoint)),
        size: Default::default(),
        wheel_img: None,
        wheel_hash: Vec::new(),
        cached_dims: (0, 0),
    }
    .style(move |s| {
        let side = session.with(|st| st.sizes().wheel) as f32;
        s.width(side)
            .height(side)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl ColorWheel {
    fn canvas(&self) -> Canvas {
        Canvas::wheel(self.endpoint, self.size.width as f64, self.size.height as f64)
    }

    fn geometry(&self) -> WheelGeometry {
        WheelGeometry::new(self.size.width as f64, self.size.height as f64)
    }

    /// Forward an event to the session. Returns whether it was consumed.
    fn dispatch(&mut self, event: PointerEvent) -> bool {
        if !self.session.with_untracked(|s| s.interaction().accepts(&event)) {
            return false;
        }
        let canvas = self.canvas();
        self.session.update(|s| {
            s.pointer(&canvas, event);
        });
        true
    }

    fn ensure_wheel_image(&mut self) {
        let dims = (
            self.size.width.round() as u32,
            self.size.height.round() as u32,
        );
        if self.wheel_img.is_some() && self.cached_dims == dims {
            return;
        }

        let mut buf = PixelBuffer::new(dims.0, dims.1);
        draw_color_wheel(&mut buf);
        let blob = Blob::new(Arc::new(buf.into_bytes()));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, dims.0, dims.1);

        self.wheel_hash = blob.id().to_le_bytes().to_vec();
        self.wheel_img = Some(img);
        self.cached_dims = dims;
    }
}

fn to_point(pos: Point) -> interaction::Point {
    interaction::Point::new(pos.x, pos.y)
}

impl View for ColorWheel {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<WheelUpdate>() {
            match *update {
                WheelUpdate::Color(c) => self.color = c,
            }
            self.id.request_paint();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.dispatch(PointerEvent::Down(to_point(e.pos)));
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.dispatch(PointerEvent::Move(to_point(e.pos))) {
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                self.dispatch(PointerEvent::Up);
                EventPropagation::Continue
            }
            Event::PointerLeave | Event::FocusLost => {
                self.dispatch(PointerEvent::Leave);
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }

        self.ensure_wheel_image();
        if let Some(ref img) = self.wheel_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.wheel_hash,
                },
                Rect::new(0.0, 0.0, w, h),
            );
        }

        // Cursor at the current hue/saturation
        let (cur_x, cur_y) = self.geometry().position_of(self.color.to_hsv());
        let cur_pt = Point::new(cur_x, cur_y);
        let outer = Circle::new(cur_pt, constants::CURSOR_RADIUS + 1.0);
        cx.stroke(
            &outer,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let cursor = Circle::new(cur_pt, constants::CURSOR_RADIUS);
        cx.stroke(&cursor, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
    }
}
