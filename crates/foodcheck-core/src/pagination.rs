//! Page-number window for pagination controls.
//!
//! Only a handful of page numbers are shown around the current page. The
//! first and last page stay reachable through jump controls, with ellipses
//! marking skipped ranges.

/// Page numbers shown on narrow displays.
pub const NARROW_MAX_VISIBLE: u32 = 3;
/// Page numbers shown on regular displays.
pub const WIDE_MAX_VISIBLE: u32 = 5;

/// Display width class, which decides how many page numbers fit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    #[default]
    Wide,
}

impl Viewport {
    pub fn from_narrow(narrow: bool) -> Self {
        if narrow { Self::Narrow } else { Self::Wide }
    }

    #[must_use]
    pub const fn max_visible(&self) -> u32 {
        match self {
            Self::Narrow => NARROW_MAX_VISIBLE,
            Self::Wide => WIDE_MAX_VISIBLE,
        }
    }
}

// =============================================================================
// WINDOW
// =============================================================================

/// The set of pagination controls to show for one page.
///
/// An empty window (no pages) means no pagination should be rendered at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageWindow {
    pub current: u32,
    pub total: u32,
    pub pages: Vec<u32>,
    pub show_first: bool,
    pub leading_ellipsis: bool,
    pub trailing_ellipsis: bool,
    pub show_last: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// A single control of a rendered pagination bar, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous { target: Option<u32> },
    Page { number: u32, active: bool },
    Ellipsis,
    Next { target: Option<u32> },
}

impl PageWindow {
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Controls in display order. Empty when the window is empty.
    pub fn controls(&self) -> Vec<PageControl> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut controls = Vec::with_capacity(self.pages.len() + 6);
        controls.push(PageControl::Previous {
            target: self.prev_enabled.then(|| self.current - 1),
        });
        if self.show_first {
            controls.push(self.page_control(1));
            if self.leading_ellipsis {
                controls.push(PageControl::Ellipsis);
            }
        }
        controls.extend(self.pages.iter().map(|&number| self.page_control(number)));
        if self.show_last {
            if self.trailing_ellipsis {
                controls.push(PageControl::Ellipsis);
            }
            controls.push(self.page_control(self.total));
        }
        controls.push(PageControl::Next {
            target: self.next_enabled.then(|| self.current + 1),
        });
        controls
    }

    fn page_control(&self, number: u32) -> PageControl {
        PageControl::Page {
            number,
            active: number == self.current,
        }
    }
}

/// Computes which page controls to show.
///
/// Returns an empty window when there is at most one page. `current` is
/// clamped into `1..=total`; a `max_visible` of zero is treated as one.
pub fn compute_window(current: u32, total: u32, max_visible: u32) -> PageWindow {
    if total <= 1 {
        return PageWindow::default();
    }
    let current = current.clamp(1, total);
    let max_visible = max_visible.max(1);

    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = total.min(start.saturating_add(max_visible - 1));
    if end - start + 1 < max_visible && start > 1 {
        start = end.saturating_sub(max_visible - 1).max(1);
    }

    PageWindow {
        current,
        total,
        pages: (start..=end).collect(),
        show_first: start > 1,
        leading_ellipsis: start > 2,
        trailing_ellipsis: end < total - 1,
        show_last: end < total,
        prev_enabled: current > 1,
        next_enabled: current < total,
    }
}
