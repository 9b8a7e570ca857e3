use contracts::shared::pagination::PageRequest;

/// Result of recording the server-reported page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFit {
    /// Current index is valid for the new page count.
    InRange,
    /// Index was past the end and has been moved to the last page.
    Clamped { from: usize, to: usize },
    /// Server reports no pages at all.
    Empty,
}

/// Current page index plus the last page count reported by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationState {
    page: usize,
    total_pages: usize,
}

impl PaginationState {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.page)
    }

    /// Move to page `n`. Returns `false` (and changes nothing) when `n` is
    /// outside `[0, total_pages)` or already current.
    pub fn go_to(&mut self, n: usize) -> bool {
        if n >= self.total_pages || n == self.page {
            return false;
        }
        self.page = n;
        true
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Store the page count of a successful fetch and bring the index back in
    /// range. This is the only writer of `total_pages`.
    pub fn record_total(&mut self, total_pages: usize) -> PageFit {
        self.total_pages = total_pages;
        if total_pages == 0 {
            self.page = 0;
            return PageFit::Empty;
        }
        if self.page >= total_pages {
            let from = self.page;
            self.page = total_pages - 1;
            return PageFit::Clamped { from, to: self.page };
        }
        PageFit::InRange
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_ignores_navigation() {
        let mut state = PaginationState::default();
        assert_eq!(state.page(), 0);
        assert_eq!(state.total_pages(), 0);
        assert!(!state.go_to(0));
        assert!(!state.go_to(1));
    }

    #[test]
    fn test_go_to_respects_bounds() {
        let mut state = PaginationState::default();
        state.record_total(5);
        assert!(state.go_to(4));
        assert_eq!(state.page(), 4);
        assert!(!state.go_to(5));
        assert!(!state.go_to(usize::MAX));
        assert_eq!(state.page(), 4);
        assert_eq!(state.request(), PageRequest::new(4));
    }

    #[test]
    fn test_record_total_clamps_to_last_page() {
        let mut state = PaginationState::default();
        state.record_total(3);
        state.go_to(2);
        assert_eq!(state.record_total(2), PageFit::Clamped { from: 2, to: 1 });
        assert_eq!(state.page(), 1);
        assert_eq!(state.record_total(2), PageFit::InRange);
        assert_eq!(state.record_total(0), PageFit::Empty);
        assert_eq!(state.page(), 0);
    }
}
