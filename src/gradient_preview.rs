//! Preview panel showing the rendered gradient.

use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalWith};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, PaintCx, UpdateCx},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::Rgb;
use crate::constants;
use crate::gradient::GradientDescriptor;
use crate::preview::render_preview;
use crate::session::GradientSession;

type PreviewKey = (Rgb, Rgb, GradientDescriptor);

pub(crate) struct GradientPreview {
    id: ViewId,
    key: PreviewKey,
    size: floem::taffy::prelude::Size<f32>,
    img: Option<peniko::Image>,
    img_hash: Vec<u8>,
    cached: Option<(PreviewKey, (u32, u32))>,
}

pub(crate) fn gradient_preview(session: RwSignal<GradientSession>) -> GradientPreview {
    let id = ViewId::new();
    let read = move || session.with(|s| (s.start().color, s.end().color, *s.descriptor()));

    create_effect(move |_| {
        id.update_state(read());
    });

    GradientPreview {
        id,
        key: session.with_untracked(|s| (s.start().color, s.end().color, *s.descriptor())),
        size: Default::default(),
        img: None,
        img_hash: Vec::new(),
        cached: None,
    }
    .style(|s| s.width_full().height(constants::PREVIEW_HEIGHT))
}

impl GradientPreview {
    fn ensure_image(&mut self) {
        let dims = (
            self.size.width.round() as u32,
            self.size.height.round() as u32,
        );
        if dims.0 == 0 || dims.1 == 0 || self.cached == Some((self.key, dims)) {
            return;
        }
        let (start, end, desc) = self.key;
        let buf = render_preview(dims.0, dims.1, start, end, &desc);
        let blob = Blob::new(Arc::new(buf.into_bytes()));
        self.img_hash = blob.id().to_le_bytes().to_vec();
        self.img = Some(peniko::Image::new(blob, peniko::Format::Rgba8, dims.0, dims.1));
        self.cached = Some((self.key, dims));
    }
}

impl View for GradientPreview {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(key) = state.downcast::<PreviewKey>() {
            self.key = *key;
            self.id.request_paint();
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
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);

        cx.save();
        cx.clip(&rrect);
        self.ensure_image();
        if let Some(ref img) = self.img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.img_hash,
                },
                rect,
            );
        }
        cx.restore();

        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
