//! Generator state: the two gradient endpoints, the gradient descriptor and
//! the pointer interaction state.
//!
//! Pointer events arrive tagged with the [`Canvas`] they landed on. The
//! interaction state decides whether the event samples, the canvas maps the
//! position to a color, and the active endpoint receives it.

use crate::brightness;
use crate::color::Rgb;
use crate::config::GeneratorConfig;
use crate::gradient::{self, BlendMode, GradientDescriptor, GradientStyle};
use crate::interaction::{CanvasKind, Endpoint, Interaction, Point, PointerEvent};
use crate::preview;
use crate::surface::PixelBuffer;
use crate::wheel::{self, WheelGeometry};

/// One of the two gradient colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientEndpoint {
    pub endpoint: Endpoint,
    pub color: Rgb,
}

/// A pointer-sensitive canvas and the endpoint it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub endpoint: Endpoint,
    pub kind: CanvasKind,
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn wheel(endpoint: Endpoint, width: f64, height: f64) -> Self {
        Self {
            endpoint,
            kind: CanvasKind::Wheel,
            width,
            height,
        }
    }

    pub fn brightness(endpoint: Endpoint, width: f64, height: f64) -> Self {
        Self {
            endpoint,
            kind: CanvasKind::Brightness,
            width,
            height,
        }
    }

    /// Color picked at `pos` given the endpoint's `current` color.
    ///
    /// `None` means the position selects nothing (outside the wheel).
    pub fn sample(&self, current: Rgb, pos: Point) -> Option<Rgb> {
        match self.kind {
            CanvasKind::Wheel => {
                wheel::wheel_color_at(&WheelGeometry::new(self.width, self.height), pos.x, pos.y)
            }
            CanvasKind::Brightness => {
                Some(brightness::brightness_color_at(current, pos.x, self.width))
            }
        }
    }
}

/// Pixel sizes of the wheel and brightness canvases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSizes {
    pub wheel: f64,
    pub slider_width: f64,
    pub slider_height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientSession {
    start: GradientEndpoint,
    end: GradientEndpoint,
    descriptor: GradientDescriptor,
    interaction: Interaction,
    sizes: CanvasSizes,
}

impl Default for GradientSession {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

impl GradientSession {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            start: GradientEndpoint {
                endpoint: Endpoint::Start,
                color: config.start,
            },
            end: GradientEndpoint {
                endpoint: Endpoint::End,
                color: config.end,
            },
            descriptor: GradientDescriptor::new(config.angle, config.blend_mode, config.style),
            interaction: Interaction::Idle,
            sizes: CanvasSizes {
                wheel: config.wheel_size as f64,
                slider_width: config.slider_width as f64,
                slider_height: config.slider_height as f64,
            },
        }
    }

    pub fn sizes(&self) -> CanvasSizes {
        self.sizes
    }

    /// The wheel canvas for `endpoint` at the configured size.
    pub fn wheel_canvas(&self, endpoint: Endpoint) -> Canvas {
        Canvas::wheel(endpoint, self.sizes.wheel, self.sizes.wheel)
    }

    /// The brightness canvas for `endpoint` at the configured size.
    pub fn brightness_canvas(&self, endpoint: Endpoint) -> Canvas {
        Canvas::brightness(endpoint, self.sizes.slider_width, self.sizes.slider_height)
    }

    pub fn color(&self, endpoint: Endpoint) -> Rgb {
        match endpoint {
            Endpoint::Start => self.start.color,
            Endpoint::End => self.end.color,
        }
    }

    pub fn start(&self) -> &GradientEndpoint {
        &self.start
    }

    pub fn end(&self) -> &GradientEndpoint {
        &self.end
    }

    pub fn descriptor(&self) -> &GradientDescriptor {
        &self.descriptor
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    fn set_color(&mut self, endpoint: Endpoint, color: Rgb) {
        let slot = match endpoint {
            Endpoint::Start => &mut self.start,
            Endpoint::End => &mut self.end,
        };
        if slot.color != color {
            log::debug!("{} color {} -> {}", endpoint.name(), slot.color, color);
        }
        slot.color = color;
    }

    /// Feed one pointer event from `canvas`. Returns the color emitted for
    /// the active endpoint, if any.
    pub fn pointer(&mut self, canvas: &Canvas, event: PointerEvent) -> Option<Rgb> {
        let (endpoint, pos) = self.interaction.handle(canvas.endpoint, event)?;
        let next = canvas.sample(self.color(endpoint), pos)?;
        self.set_color(endpoint, next);
        Some(next)
    }

    pub fn set_angle(&mut self, degrees: i32) {
        self.descriptor.set_angle(degrees);
    }

    pub fn set_blend_mode(&mut self, mode: BlendMode) {
        log::debug!("blend mode {}", mode);
        self.descriptor.blend_mode = mode;
    }

    pub fn set_style(&mut self, style: GradientStyle) {
        self.descriptor.style = style;
    }

    /// The CSS declaration for the current state.
    pub fn css(&self) -> String {
        gradient::css_declaration(self.start.color, self.end.color, &self.descriptor)
    }

    pub fn render_preview(&self, width: u32, height: u32) -> PixelBuffer {
        preview::render_preview(width, height, self.start.color, self.end.color, &self.descriptor)
    }
}
