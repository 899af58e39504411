use std::collections::BTreeSet;

/// Number of page buttons shown around the current page.
pub const DEFAULT_WINDOW_SIZE: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(u32),
    /// Elided range of pages, rendered as an ellipsis.
    Gap,
}

/// Page numbers to display, with gap markers between non-adjacent pages.
///
/// An empty plan means no pagination controls at all (a single page or none).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaginationPlan {
    pub entries: Vec<PageEntry>,
    pub total_pages: u32,
    pub current_page: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PaginationPlan {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pages(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            PageEntry::Page(page) => Some(*page),
            PageEntry::Gap => None,
        })
    }
}

pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total_items.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Computes the bounded set of page numbers to show for `current_page`.
///
/// Page 1 and the last page are always present. The window starts at
/// `current_page - window_size / 2` (never before page 2) and never reaches
/// the last page. A `window_size` of 0 behaves like 1.
pub fn plan(
    total_items: u64,
    page_size: u32,
    current_page: u32,
    window_size: u32,
) -> PaginationPlan {
    let total = total_pages(total_items, page_size);
    if total <= 1 {
        return PaginationPlan::default();
    }

    let window = u64::from(window_size.max(1));
    let last = u64::from(total);
    let start = u64::from(current_page)
        .saturating_sub(window / 2)
        .max(2);
    let end = (start + window - 1).min(last - 1);

    let mut pages = BTreeSet::new();
    pages.insert(1u64);
    pages.extend(start..=end);
    pages.insert(last);

    let mut entries = Vec::with_capacity(pages.len() * 2);
    let mut previous: Option<u64> = None;
    for page in pages {
        if previous.is_some_and(|prev| page - prev > 1) {
            entries.push(PageEntry::Gap);
        }
        // Every page is bounded by `total`, which fits in u32.
        entries.push(PageEntry::Page(page as u32));
        previous = Some(page);
    }

    PaginationPlan {
        entries,
        total_pages: total,
        current_page,
        prev_enabled: current_page > 1,
        next_enabled: current_page < total,
    }
}
