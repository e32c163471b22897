//! Focus state for the TUI.

/// Which button has keyboard focus.
///
/// Focus is a ring: the sidebar buttons first, then the buttons of the
/// mounted content holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar(usize),
    Content(usize),
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Sidebar(0)
    }
}

impl Focus {
    fn to_ring(self, sidebar_len: usize) -> usize {
        match self {
            Focus::Sidebar(i) => i,
            Focus::Content(i) => sidebar_len + i,
        }
    }

    fn from_ring(pos: usize, sidebar_len: usize) -> Self {
        if pos < sidebar_len {
            Focus::Sidebar(pos)
        } else {
            Focus::Content(pos - sidebar_len)
        }
    }

    /// Moves forward through the ring, wrapping at the end.
    pub fn next(self, sidebar_len: usize, content_len: usize) -> Self {
        let len = sidebar_len + content_len;
        if len == 0 {
            return self;
        }
        let pos = self.to_ring(sidebar_len).min(len - 1);
        Self::from_ring((pos + 1) % len, sidebar_len)
    }

    /// Moves backward through the ring, wrapping at the start.
    pub fn prev(self, sidebar_len: usize, content_len: usize) -> Self {
        let len = sidebar_len + content_len;
        if len == 0 {
            return self;
        }
        let pos = self.to_ring(sidebar_len).min(len - 1);
        let prev = if pos == 0 { len - 1 } else { pos - 1 };
        Self::from_ring(prev, sidebar_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_defaults_to_first_sidebar_button() {
        assert_eq!(Focus::default(), Focus::Sidebar(0));
    }

    #[test]
    fn next_walks_sidebar_then_content() {
        let mut focus = Focus::default();
        let mut seen = Vec::new();
        for _ in 0..5 {
            focus = focus.next(3, 2);
            seen.push(focus);
        }
        assert_eq!(
            seen,
            vec![
                Focus::Sidebar(1),
                Focus::Sidebar(2),
                Focus::Content(0),
                Focus::Content(1),
                Focus::Sidebar(0),
            ]
        );
    }

    #[test]
    fn next_wraps_within_sidebar_when_no_content_buttons() {
        assert_eq!(Focus::Sidebar(2).next(3, 0), Focus::Sidebar(0));
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        assert_eq!(Focus::Sidebar(0).prev(3, 2), Focus::Content(1));
        assert_eq!(Focus::Sidebar(0).prev(3, 0), Focus::Sidebar(2));
    }

    #[test]
    fn stale_content_focus_is_clamped() {
        // Content buttons vanished; the ring clamps to its last slot first.
        assert_eq!(Focus::Content(1).next(3, 0), Focus::Sidebar(0));
        assert_eq!(Focus::Content(1).prev(3, 0), Focus::Sidebar(1));
    }

    #[test]
    fn empty_ring_keeps_focus() {
        assert_eq!(Focus::Sidebar(0).next(0, 0), Focus::Sidebar(0));
        assert_eq!(Focus::Sidebar(0).prev(0, 0), Focus::Sidebar(0));
    }
}
