//! Image viewer carousel cursor.
//!
//! The cursor indexes the filtered sequence exactly as the grid renders it.
//! Navigation keeps the hosting grid page in lockstep so closing the viewer
//! lands on the page that contains the last viewed image.

use crate::library_view::total_pages;

/// Viewer actions bound to keys while the viewer is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Close,
    Previous,
    Next,
}

impl ViewerCommand {
    /// Map a DOM `KeyboardEvent.key` value to a command.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(ViewerCommand::Close),
            "ArrowLeft" => Some(ViewerCommand::Previous),
            "ArrowRight" => Some(ViewerCommand::Next),
            _ => None,
        }
    }

    /// The command a key press triggers. Keys are unbound while the viewer
    /// is closed, so the page keeps their default behavior.
    pub fn bound(key: &str, viewer_open: bool) -> Option<Self> {
        if !viewer_open {
            return None;
        }
        Self::from_key(key)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewerState {
    is_open: bool,
    cursor: usize,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Open at `index`. Ignored when `index` is outside a sequence of `len`.
    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        self.is_open = true;
        self.cursor = index;
        true
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn can_prev(&self, len: usize) -> bool {
        self.is_open && self.cursor > 0 && self.cursor < len
    }

    pub fn can_next(&self, len: usize) -> bool {
        self.is_open && self.cursor + 1 < len
    }

    /// Step back one image. When the old cursor was the first item of its
    /// page the grid page is decremented as well.
    pub fn navigate_prev(&mut self, len: usize, page: &mut usize, page_size: usize) -> bool {
        if !self.can_prev(len) {
            return false;
        }
        let old = self.cursor;
        self.cursor -= 1;
        if page_size > 0 && old % page_size == 0 {
            *page = page.saturating_sub(1).max(1);
        }
        true
    }

    /// Step forward one image. When the old cursor was the last item of its
    /// page the grid page is incremented as well.
    pub fn navigate_next(&mut self, len: usize, page: &mut usize, page_size: usize) -> bool {
        if !self.can_next(len) {
            return false;
        }
        let old = self.cursor;
        self.cursor += 1;
        if page_size > 0 && (old + 1) % page_size == 0 {
            *page = (*page + 1).min(total_pages(len, page_size).max(1));
        }
        true
    }

    /// Apply a key command. Returns whether any state changed.
    pub fn apply(
        &mut self,
        command: ViewerCommand,
        len: usize,
        page: &mut usize,
        page_size: usize,
    ) -> bool {
        if !self.is_open {
            return false;
        }
        match command {
            ViewerCommand::Close => {
                self.close();
                true
            }
            ViewerCommand::Previous => self.navigate_prev(len, page, page_size),
            ViewerCommand::Next => self.navigate_next(len, page, page_size),
        }
    }

    /// Re-validate after the underlying sequence changed length.
    pub fn clamp_to(&mut self, len: usize) {
        if len == 0 {
            self.is_open = false;
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}
