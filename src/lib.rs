//! # floem-gradient
//!
//! A two-color CSS gradient generator for [Floem](https://github.com/lapce/floem).
//!
//! Each gradient endpoint gets an HSV color wheel (hue and saturation) and a
//! brightness slider (value). The angle, `background-blend-mode` and an
//! optional checkerboard backdrop shape the generated declaration, which is
//! previewed live and can be copied to the clipboard.
//!
//! The color math, rasterizers and interaction state machine are plain Rust
//! and usable without a window:
//!
//! ```rust
//! use floem_gradient::{Canvas, Endpoint, GradientSession, Point, PointerEvent};
//!
//! let mut session = GradientSession::default();
//! let wheel = Canvas::wheel(Endpoint::Start, 200.0, 200.0);
//! session.pointer(&wheel, PointerEvent::Down(Point::new(100.0, 100.0)));
//! assert_eq!(session.color(Endpoint::Start).to_hex(), "#ffffff");
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_gradient::{gradient_generator, GradientSession};
//!
//! let session = RwSignal::new(GradientSession::default());
//! // Use `gradient_generator(session)` in your Floem view tree.
//! ```

mod angle_slider;
mod blend;
pub mod brightness;
mod brightness_slider;
mod checkerboard;
mod color;
mod color_wheel;
mod config;
mod constants;
mod error;
mod gradient;
mod gradient_editor;
mod gradient_preview;
mod inputs;
mod interaction;
pub mod math;
pub mod preview;
mod session;
pub mod surface;
pub mod wheel;

pub use color::{Hsv, Rgb};
pub use config::GeneratorConfig;
pub use error::GradientError;
pub use gradient::{angle_at, css_background, css_declaration, BlendMode, GradientDescriptor, GradientStyle};
pub use inputs::copy_to_clipboard;
pub use interaction::{CanvasKind, Endpoint, Interaction, Point, PointerEvent};
pub use session::{Canvas, CanvasSizes, GradientEndpoint, GradientSession};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the top-level gradient generator view.
///
/// All pointer input and control changes are applied to `session`; external
/// changes to the signal are reflected in the UI.
pub fn gradient_generator(session: RwSignal<GradientSession>) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    log::debug!("building gradient generator");
    gradient_editor::gradient_editor(session)
}
