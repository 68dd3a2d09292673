//! Overlay buffer — the frame-scoped accumulator of positioned debug text.
//!
//! Callers append formatted lines each frame, a renderer walks the entries
//! in insertion order, and [`DebugOverlay::clear`] resets the buffer for
//! the next frame. The stacking cursor is the entire layout engine: every
//! append lands at the cursor and pushes it down by one line height.

use std::fmt;

use crate::clip::clip_graphemes;
use crate::error::OverlayError;
use crate::types::{Entry, Position};

/// Maximum number of characters stored per entry. Longer formatted output
/// is clipped at a grapheme boundary, never rejected.
pub const MAX_TEXT_LEN: usize = 128;

const INIT_CAPACITY: usize = 8;
const INIT_POS: Position = Position::new(5, 5);

// =============================================================================
// DebugOverlay
// =============================================================================

/// A growable buffer of debug text entries with an auto-stacking cursor.
///
/// Entries keep insertion order, which is also render order. The overlay
/// is single-owner and not synchronized; callers needing multi-threaded
/// access serialize externally (one overlay per thread, or a mutex).
///
/// [`clear`](Self::clear) must be called once per frame, before the next
/// round of appends. Skipping it does not leak — everything is released
/// on drop — but entries from previous frames pile up and the buffer
/// grows without bound.
///
/// # Examples
///
/// ```
/// use debug_overlay::{DebugOverlay, debug_text};
///
/// let mut overlay = DebugOverlay::new(10);
///
/// // Per frame:
/// overlay.clear();
/// debug_text!(overlay, "HP: {}", 100)?;
/// debug_text!(overlay, "MP: {}", 50)?;
///
/// for entry in &overlay {
///     // hand entry.text and entry.position to the renderer
///     println!("{:?} {}", entry.position, entry.text);
/// }
/// # Ok::<(), debug_overlay::OverlayError>(())
/// ```
#[derive(Debug)]
pub struct DebugOverlay {
    entries: Vec<Entry>,
    cursor: Position,
    font_size: i32,
}

impl DebugOverlay {
    /// Create an overlay with the given font (line) size.
    ///
    /// The cursor starts at `(5, 5)` and advances down by `font_size`
    /// after each append. Starts with a small pre-allocated capacity.
    pub fn new(font_size: i32) -> Self {
        Self {
            entries: Vec::with_capacity(INIT_CAPACITY),
            cursor: INIT_POS,
            font_size,
        }
    }

    /// Drop all entries and reset the cursor to the initial position.
    ///
    /// Capacity is retained so the per-frame clear/append cycle settles
    /// into zero allocations once the buffer has grown to fit a frame's
    /// worth of text.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = INIT_POS;
    }

    /// Append a pre-built formatting call at the current cursor, then
    /// advance the cursor down by one line height.
    ///
    /// This is the forwarding shape: wrap it in your own variadic-style
    /// helper by passing `format_args!(...)` through. For the direct
    /// shape use [`debug_text!`](crate::debug_text).
    ///
    /// Output longer than [`MAX_TEXT_LEN`] characters is clipped at a
    /// grapheme boundary. On growth failure the overlay is unchanged:
    /// no entry is appended and the cursor does not move.
    pub fn push_args(&mut self, args: fmt::Arguments<'_>) -> Result<(), OverlayError> {
        self.ensure_space()?;

        let formatted = args.to_string();
        let clipped = clip_graphemes(&formatted, MAX_TEXT_LEN);
        let text = if clipped.len() == formatted.len() {
            formatted
        } else {
            clipped.to_owned()
        };

        self.entries.push(Entry {
            text,
            position: self.cursor,
        });
        self.cursor.y += self.font_size;

        Ok(())
    }

    /// Return a copy of the entry at `index`.
    ///
    /// Out-of-range lookups are a checked error, not a panic; callers are
    /// still expected to respect the [`len`](Self::len) bound in normal
    /// use. For a borrowed lookup see [`get`](Self::get).
    pub fn entry_at(&self, index: usize) -> Result<Entry, OverlayError> {
        self.entries
            .get(index)
            .cloned()
            .ok_or(OverlayError::OutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    /// Borrow the entry at `index`, or `None` out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the overlay holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current allocated capacity, in entries. Grows monotonically over
    /// the overlay's lifetime; [`clear`](Self::clear) never shrinks it.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// The line height entries are stacked by. Fixed at construction.
    #[inline]
    pub fn font_size(&self) -> i32 {
        self.font_size
    }

    /// Where the next appended entry will be placed.
    #[inline]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// All entries in insertion (render) order.
    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterate entries in insertion (render) order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Grow the backing storage by ×1.5 (integer division) when full.
    ///
    /// Geometric growth keeps appends amortized O(1) while bounding how
    /// often reallocation happens; the exact factor is a policy choice,
    /// not a correctness requirement.
    fn ensure_space(&mut self) -> Result<(), OverlayError> {
        let len = self.entries.len();
        if len < self.entries.capacity() {
            return Ok(());
        }

        // Always at least one extra slot, even from capacity 0 or 1.
        let target = (self.entries.capacity() * 3 / 2).max(len + 1);
        self.entries.try_reserve_exact(target - len)?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a DebugOverlay {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// Macro — direct formatting shape
// =============================================================================

/// Append formatted debug text to an overlay.
///
/// The direct-call companion to [`DebugOverlay::push_args`]: takes a
/// format string plus arguments and forwards them as one formatting call.
/// Returns the same `Result`.
///
/// # Examples
///
/// ```
/// use debug_overlay::{DebugOverlay, debug_text};
///
/// let mut overlay = DebugOverlay::new(12);
/// debug_text!(overlay, "frame time: {:.2} ms", 16.6)?;
/// assert_eq!(overlay.len(), 1);
/// # Ok::<(), debug_overlay::OverlayError>(())
/// ```
#[macro_export]
macro_rules! debug_text {
    ($overlay:expr, $($arg:tt)*) => {
        $overlay.push_args(::core::format_args!($($arg)*))
    };
}

// =============================================================================
// Tests
// =============================================================================
