/// Active page of the task list.
///
/// The page count is reported unrounded (23 tasks at 10 per page is `2.3`); bounds checks
/// belong to the pagination bar, not to this controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: u32,
    page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self { current_page: 1, page_size: page_size.max(1) }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn set_page(&mut self, page: u32) {
        self.current_page = page;
    }

    /// `None` means the task list has not loaded yet, which reports zero pages.
    pub fn total_pages(&self, task_count: Option<usize>) -> f64 {
        match task_count {
            Some(count) => count as f64 / self.page_size as f64,
            None => 0.0,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(10)
    }
}

/// Page buttons for an unrounded page count: `2.3` yields `[1, 2, 3]`.
pub fn page_numbers(total_pages: f64) -> Vec<u32> {
    if !total_pages.is_finite() || total_pages <= 0.0 {
        return Vec::new();
    }
    (1..=total_pages.ceil() as u32).collect()
}
