//! Per-frame transient text storage
//!
//! HUD strings (scores, FPS) are formatted into one shared buffer that is
//! wiped at the start of every frame. Each stored string is addressed by a
//! [`FrameText`] id stamped with the frame it was made in; ids from an
//! earlier frame no longer resolve.

use std::fmt::{self, Write as _};

/// Id of a string stored in a [`FrameArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameText {
    epoch: u64,
    start: usize,
    end: usize,
}

/// Bump-style text arena, reset once per frame
#[derive(Debug, Default)]
pub struct FrameArena {
    buffer: String,
    epoch: u64,
    /// Largest buffer size seen, for logging
    high_water: usize,
}

impl FrameArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame: forget every string from the previous one.
    /// The allocation itself is kept for reuse.
    pub fn reset(&mut self) {
        self.high_water = self.high_water.max(self.buffer.len());
        self.buffer.clear();
        self.epoch += 1;
    }

    /// Format into the arena
    pub fn format(&mut self, args: fmt::Arguments<'_>) -> FrameText {
        let start = self.buffer.len();
        // Writing into a String cannot fail
        let _ = self.buffer.write_fmt(args);
        FrameText {
            epoch: self.epoch,
            start,
            end: self.buffer.len(),
        }
    }

    /// Copy a string into the arena
    pub fn push_str(&mut self, s: &str) -> FrameText {
        self.format(format_args!("{s}"))
    }

    /// Resolve an id made during the current frame
    pub fn get(&self, text: FrameText) -> Option<&str> {
        (text.epoch == self.epoch).then(|| &self.buffer[text.start..text.end])
    }

    /// Bytes used this frame
    #[inline]
    pub fn used(&self) -> usize {
        self.buffer.len()
    }

    /// Largest number of bytes any finished frame used
    #[inline]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
