/// Resolved position of one page within a match count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 1-based page index after clamping
    pub index: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Row range shown, `start..end`
    pub start: usize,
    pub end: usize,
}

/// Computes the window for `page` over `total` matching rows.
///
/// Page indices below 1 clamp to the first page and indices past the last
/// page clamp to the last. A zero page size is treated as one.
pub fn paginate(total: usize, page: usize, page_size: usize) -> Page {
    let page_size = page_size.max(1);
    let total_pages = total.div_ceil(page_size);
    let index = page.clamp(1, total_pages.max(1));
    let start = ((index - 1) * page_size).min(total);
    let end = (start + page_size).min(total);

    Page {
        index,
        page_size,
        total_pages,
        start,
        end,
    }
}
