//! # debug-overlay
//!
//! Frame-scoped debug text overlay buffer for real-time applications.
//!
//! An overlay is a growable, in-memory list of formatted text entries,
//! each paired with the screen position it should be drawn at. A stacking
//! cursor assigns positions automatically: every append lands one line
//! height below the previous one, starting from `(5, 5)`.
//!
//! The intended loop is once per frame:
//!
//! ```
//! use debug_overlay::{DebugOverlay, debug_text};
//!
//! let mut overlay = DebugOverlay::new(10);
//!
//! // frame start
//! overlay.clear();
//! debug_text!(overlay, "HP: {}", 100)?;
//! debug_text!(overlay, "MP: {}", 50)?;
//!
//! // frame end: the renderer consumes text + position records
//! for entry in &overlay {
//!     let _ = (entry.position.x, entry.position.y, &entry.text);
//! }
//! # Ok::<(), debug_overlay::OverlayError>(())
//! ```
//!
//! Actual glyph rendering, font loading, and window handling live in the
//! caller; this crate only produces the records. There is no text
//! wrapping, no per-entry removal, and no internal synchronization.
//!
//! ## Modules
//!
//! - [`overlay`] - The overlay buffer and the [`debug_text!`] macro
//! - [`types`] - [`Entry`] and [`Position`] records
//! - [`clip`] - Grapheme-safe text clipping
//! - [`error`] - [`OverlayError`]

pub mod clip;
pub mod error;
pub mod overlay;
pub mod types;

pub use clip::clip_graphemes;
pub use error::OverlayError;
pub use overlay::{DebugOverlay, MAX_TEXT_LEN};
pub use types::{Entry, Position};
