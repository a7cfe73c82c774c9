//! Gradient editor: preview on top, one wheel + brightness slider column per
//! endpoint, then angle, blend mode and style controls and the CSS output.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalWith};

use crate::brightness_slider::brightness_slider;
use crate::color_wheel::color_wheel;
use crate::constants;
use crate::gradient_preview::gradient_preview;
use crate::inputs::{angle_control, blend_mode_picker, copy_button, style_picker};
use crate::interaction::Endpoint;
use crate::session::GradientSession;

fn endpoint_column(session: RwSignal<GradientSession>, endpoint: Endpoint) -> impl IntoView {
    let title = match endpoint {
        Endpoint::Start => "Start",
        Endpoint::End => "End",
    };
    v_stack((
        h_stack((
            label(move || format!("{title}: {}", session.with(|s| s.color(endpoint)))).style(
                |s| {
                    s.font_size(constants::LABEL_FONT)
                        .font_family("monospace".to_string())
                },
            ),
            empty().style(move |st| {
                let c = session.with(|s| s.color(endpoint));
                st.width(16.0)
                    .height(16.0)
                    .border_radius(3.0)
                    .border(1.0)
                    .border_color(Color::rgb8(180, 180, 180))
                    .background(Color::rgb8(c.r, c.g, c.b))
            }),
        ))
        .style(|s| s.gap(6.0).items_center().justify_center()),
        color_wheel(session, endpoint),
        brightness_slider(session, endpoint),
    ))
    .style(|s| s.gap(constants::GAP).items_center())
}

/// Creates the full generator panel over a shared session.
pub(crate) fn gradient_editor(session: RwSignal<GradientSession>) -> impl IntoView {
    let css = move || session.with(|s| s.css());

    v_stack((
        gradient_preview(session),
        h_stack((
            endpoint_column(session, Endpoint::Start),
            endpoint_column(session, Endpoint::End),
        ))
        .style(|s| s.gap(32.0).justify_center()),
        angle_control(session),
        h_stack((blend_mode_picker(session), style_picker(session)))
            .style(|s| s.gap(16.0).items_center()),
        // CSS output + copy
        h_stack((
            label(css).style(|s| {
                s.font_size(constants::CODE_FONT)
                    .font_family("monospace".to_string())
                    .flex_grow(1.0)
                    .flex_basis(0.0)
                    .min_width(0.0)
            }),
            copy_button(css),
        ))
        .style(|s| {
            s.gap(constants::GAP)
                .padding(constants::GAP)
                .border_radius(constants::RADIUS)
                .background(Color::rgb8(230, 230, 230))
                .items_center()
        }),
    ))
    .style(|st| {
        st.gap(constants::GAP * 2.0)
            .padding(constants::PADDING)
            .size_full()
            .background(Color::rgb8(245, 245, 245))
    })
}
