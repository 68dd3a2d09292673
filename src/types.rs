//! Core types for debug-overlay.
//!
//! These are the records the renderer collaborator consumes: a screen
//! position and a positioned text entry. The overlay computes them, the
//! renderer draws them.

// =============================================================================
// Position
// =============================================================================

/// Screen coordinates for a text entry, in caller-defined units
/// (typically pixels).
///
/// Using signed integers so entries can sit partially off-screen; the
/// overlay never interprets the values, it only stacks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// Entry
// =============================================================================

/// One formatted debug text plus the screen position to draw it at.
///
/// Created at append time and never mutated afterward. The text is
/// bounded at [`MAX_TEXT_LEN`](crate::overlay::MAX_TEXT_LEN) characters;
/// longer formatted output is clipped, not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The formatted debug text.
    pub text: String,
    /// Where the renderer should draw it.
    pub position: Position,
}

// =============================================================================
// Tests
// =============================================================================
