//! Brightness slider view for one gradient endpoint.
//!
//! Renders a horizontal gradient from black (left) to the endpoint's hue and
//! saturation at full value (right) as a rasterized image, regenerated only
//! when the base color or canvas size changes.

use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalUpdate, SignalWith};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::brightness::{draw_brightness_slider, slider_base_color};
use crate::color::Rgb;
use crate::constants;
use crate::interaction::{Endpoint, Point, PointerEvent};
use crate::session::{Canvas, GradientSession};
use crate::surface::PixelBuffer;

enum BrightnessUpdate {
    Color(Rgb),
}

pub(crate) struct BrightnessSlider {
    id: ViewId,
    endpoint: Endpoint,
    session: RwSignal<GradientSession>,
    color: Rgb,
    size: floem::taffy::prelude::Size<f32>,
    /// Cached gradient image.
    grad_img: Option<peniko::Image>,
    grad_hash: Vec<u8>,
    cached_base: Rgb,
    cached_dims: (u32, u32),
}

/// Creates the brightness slider that edits `endpoint`'s value.
pub(crate) fn brightness_slider(
    session: RwSignal<GradientSession>,
    endpoint: Endpoint,
) -> BrightnessSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let c = session.with(|s| s.color(endpoint));
        id.update_state(BrightnessUpdate::Color(c));
    });

    BrightnessSlider {
        id,
        endpoint,
        session,
        color: session.with_untracked(|s| s.color(endpoint)),
        size: Default::default(),
        grad_img: None,
        grad_hash: Vec::new(),
        cached_base: Rgb::BLACK,
        cached_dims: (0, 0),
    }
    .style(move |s| {
        let sizes = session.with(|st| st.sizes());
        s.width(sizes.slider_width as f32)
            .height(sizes.slider_height as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl BrightnessSlider {
    fn dispatch(&mut self, event: PointerEvent) -> bool {
        if !self.session.with_untracked(|s| s.interaction().accepts(&event)) {
            return false;
        }
        let canvas = Canvas::brightness(
            self.endpoint,
            self.size.width as f64,
            self.size.height as f64,
        );
        self.session.update(|s| {
            s.pointer(&canvas, event);
        });
        true
    }

    fn ensure_gradient_image(&mut self) {
        let pw = self.size.width.round() as u32;
        let ph = self.size.height.round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        let base = slider_base_color(self.color);
        let dims = (pw, ph);
        if self.grad_img.is_some() && self.cached_dims == dims && self.cached_base == base {
            return;
        }

        let mut buf = PixelBuffer::new(pw, ph);
        draw_brightness_slider(&mut buf, base);
        let blob = Blob::new(Arc::new(buf.into_bytes()));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        let id = blob.id();
        self.grad_hash = id.to_le_bytes().to_vec();
        self.grad_img = Some(img);
        self.cached_base = base;
        self.cached_dims = dims;
    }
}

impl View for BrightnessSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<BrightnessUpdate>() {
            match *update {
                BrightnessUpdate::Color(c) => self.color = c,
            }
            self.id.request_paint();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.dispatch(PointerEvent::Down(Point::new(e.pos.x, e.pos.y)));
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.dispatch(PointerEvent::Move(Point::new(e.pos.x, e.pos.y))) {
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
        let rect = Rect::new(0.0, 0.0, w, h);

        // Black (left) → full-value color (right) as an image
        self.ensure_gradient_image();
        if let Some(ref img) = self.grad_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.grad_hash,
                },
                rect,
            );
        }

        cx.stroke(
            &rect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Thumb at the current value
        let value = self.color.to_hsv().v;
        let thumb_x = (value * w)
            .min(w - constants::THUMB_RADIUS)
            .max(constants::THUMB_RADIUS);
        let thumb_cy = h / 2.0;
        let circle = floem::kurbo::Circle::new((thumb_x, thumb_cy), constants::THUMB_RADIUS);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let inner = floem::kurbo::Circle::new((thumb_x, thumb_cy), constants::THUMB_RADIUS - 1.5);
        cx.stroke(&inner, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
    }
}
