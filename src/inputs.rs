//! Angle, blend mode and style controls, plus the copy button.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, SignalWith};

use crate::angle_slider::angle_slider;
use crate::constants;
use crate::error::GradientError;
use crate::gradient::{BlendMode, GradientStyle};
use crate::session::GradientSession;

/// The angle slider with its current value in degrees.
pub(crate) fn angle_control(session: RwSignal<GradientSession>) -> impl IntoView {
    h_stack((
        label(|| "Angle").style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
                .min_width(48.0)
        }),
        angle_slider(session),
        label(move || format!("{}°", session.with(|s| s.descriptor().angle()))).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .font_family("monospace".to_string())
                .min_width(36.0)
        }),
    ))
    .style(|s| s.items_center().gap(8.0))
}

/// A toggle-style button; highlighted while `selected` returns true.
fn choice_button(
    text: &'static str,
    selected: impl Fn() -> bool + 'static,
    on_select: impl Fn() + 'static,
) -> impl IntoView {
    label(move || text)
        .style(move |s| {
            let base = s
                .padding_horiz(8.0)
                .padding_vert(3.0)
                .font_size(constants::LABEL_FONT)
                .border(1.0)
                .border_radius(3.0)
                .cursor(floem::style::CursorStyle::Pointer);
            if selected() {
                base.background(Color::rgb8(59, 130, 246))
                    .color(Color::WHITE)
                    .border_color(Color::rgb8(59, 130, 246))
            } else {
                base.background(Color::WHITE)
                    .border_color(Color::rgb8(200, 200, 200))
                    .hover(|s| s.background(Color::rgb8(230, 230, 230)))
            }
        })
        .on_click_stop(move |_| on_select())
}

fn blend_button(mode: BlendMode, session: RwSignal<GradientSession>) -> impl IntoView {
    choice_button(
        mode.as_str(),
        move || session.with(|s| s.descriptor().blend_mode == mode),
        move || session.update(|s| s.set_blend_mode(mode)),
    )
}

/// One button per blend mode.
pub(crate) fn blend_mode_picker(session: RwSignal<GradientSession>) -> impl IntoView {
    let [screen, overlay, hard_light, color_burn] = BlendMode::ALL;
    h_stack((
        blend_button(screen, session),
        blend_button(overlay, session),
        blend_button(hard_light, session),
        blend_button(color_burn, session),
    ))
    .style(|s| s.gap(4.0).items_center())
}

fn style_button(
    text: &'static str,
    style: GradientStyle,
    session: RwSignal<GradientSession>,
) -> impl IntoView {
    choice_button(
        text,
        move || session.with(|s| s.descriptor().style == style),
        move || session.update(|s| s.set_style(style)),
    )
}

/// Plain linear gradient vs. checkerboard composite.
pub(crate) fn style_picker(session: RwSignal<GradientSession>) -> impl IntoView {
    h_stack((
        style_button("checkered", GradientStyle::Checkered, session),
        style_button("linear", GradientStyle::Linear, session),
    ))
    .style(|s| s.gap(4.0).items_center())
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(24.0, 24.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .align_self(Some(floem::taffy::AlignItems::Start))
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        if let Err(err) = copy_to_clipboard(&get_text()) {
            log::warn!("copy failed: {err}");
        }
    })
}

/// Write `text` to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<(), GradientError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    log::debug!("copied {} bytes to clipboard", text.len());
    Ok(())
}
