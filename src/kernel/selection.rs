//! Cursor + anchor selection over document lines.
//!
//! The highlighted range is always `[min(cursor, anchor), max(cursor, anchor)]`, a closed,
//! non-empty interval. Transitions report whether anything changed so the caller decides
//! when to scroll and redraw.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub low: usize,
    pub high: usize,
}

impl LineRange {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn contains(&self, line: usize) -> bool {
        self.low <= line && line <= self.high
    }

    pub fn len(&self) -> usize {
        self.high - self.low + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl std::fmt::Display for LineRange {
    /// One-based, as shown to the user.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.low == self.high {
            write!(f, "{}", self.low + 1)
        } else {
            write!(f, "{}-{}", self.low + 1, self.high + 1)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    cursor: usize,
    anchor: usize,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn active_range(&self) -> LineRange {
        LineRange::new(self.cursor, self.anchor)
    }

    /// Moves the cursor by `delta` lines within `[0, len - 1]`.
    ///
    /// A plain move collapses the selection onto the new cursor line; an extending move keeps
    /// the anchor. Returns `false` without touching either index when the cursor cannot move.
    pub fn move_cursor(&mut self, delta: isize, extend: bool, len: usize) -> bool {
        let Some(target) = self.target(delta, len) else {
            return false;
        };

        self.cursor = target;
        if !extend {
            self.anchor = target;
        }
        true
    }

    /// Value-returning form of [`move_cursor`](Self::move_cursor).
    pub fn moved(self, delta: isize, extend: bool, len: usize) -> Self {
        let mut next = self;
        next.move_cursor(delta, extend, len);
        next
    }

    fn target(&self, delta: isize, len: usize) -> Option<usize> {
        if len == 0 || delta == 0 {
            return None;
        }
        let last = len - 1;
        let target = if delta < 0 {
            self.cursor.saturating_sub(delta.unsigned_abs())
        } else {
            self.cursor.saturating_add(delta as usize).min(last)
        };
        (target != self.cursor).then_some(target)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/selection.rs"]
mod tests;
