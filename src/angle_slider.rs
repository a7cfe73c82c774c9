//! Gradient angle slider: a flat track from 0° (left) to 360° (right).

use floem::kurbo::Rect;
use floem::peniko::Color;

use floem::reactive::{create_effect, RwSignal, SignalUpdate, SignalWith};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::constants;
use crate::gradient::{angle_at, angle_position};
use crate::session::GradientSession;

enum AngleUpdate {
    Angle(u16),
}

pub(crate) struct AngleSlider {
    id: ViewId,
    session: RwSignal<GradientSession>,
    angle: u16,
    held: bool,
    size: floem::taffy::prelude::Size<f32>,
}

pub(crate) fn angle_slider(session: RwSignal<GradientSession>) -> AngleSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let angle = session.with(|s| s.descriptor().angle());
        id.update_state(AngleUpdate::Angle(angle));
    });

    AngleSlider {
        id,
        session,
        angle: session.with_untracked(|s| s.descriptor().angle()),
        held: false,
        size: Default::default(),
    }
    .style(|s| {
        s.width(constants::ANGLE_SLIDER_WIDTH)
            .height(constants::ANGLE_SLIDER_HEIGHT)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl AngleSlider {
    fn update_from_pointer(&mut self, x: f64) {
        let degrees = angle_at(x, self.size.width as f64);
        if degrees != self.angle as i32 {
            self.session.update(|s| s.set_angle(degrees));
        }
    }
}

impl View for AngleSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<AngleUpdate>() {
            match *update {
                AngleUpdate::Angle(a) => self.angle = a,
            }
            self.id.request_paint();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
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

        // Track
        let track_h = 4.0;
        let track = Rect::new(0.0, (h - track_h) / 2.0, w, (h + track_h) / 2.0)
            .to_rounded_rect(track_h / 2.0);
        cx.fill(&track, Color::rgb8(200, 200, 200), 0.0);

        // Thumb
        let radius = constants::THUMB_RADIUS.min(h / 2.0);
        let thumb_x = angle_position(self.angle, w).min(w - radius).max(radius);
        let circle = floem::kurbo::Circle::new((thumb_x, h / 2.0), radius);
        cx.fill(&circle, Color::WHITE, 0.0);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
