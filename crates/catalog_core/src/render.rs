use crate::{BookRecord, Locale, Msg, PageEntry, PaginationPlan};

pub const DEFAULT_COVER_HOST: &str = "https://covers.openlibrary.org";
pub const PLACEHOLDER_COVER: &str = "default-image.jpg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverRef {
    Url(String),
    Placeholder,
}

impl CoverRef {
    pub fn as_str(&self) -> &str {
        match self {
            CoverRef::Url(url) => url,
            CoverRef::Placeholder => PLACEHOLDER_COVER,
        }
    }
}

/// One rendered result entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub title: String,
    pub authors: String,
    pub year: String,
    pub cover: CoverRef,
    pub cover_alt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous { target: u32 },
    Page { number: u32, active: bool },
    Gap,
    Next { target: u32 },
}

impl PageControl {
    /// Intent emitted when the control is activated; gaps are inert.
    pub fn intent(&self) -> Option<Msg> {
        match *self {
            PageControl::Previous { target } | PageControl::Next { target } => {
                Some(Msg::GoToPage(target))
            }
            PageControl::Page { number, .. } => Some(Msg::GoToPage(number)),
            PageControl::Gap => None,
        }
    }
}

/// Medium-size cover image for an Open Library cover id.
pub fn cover_url(cover_host: &str, cover_id: i64) -> String {
    format!("{}/b/id/{}-M.jpg", cover_host.trim_end_matches('/'), cover_id)
}

pub fn render_list(records: &[BookRecord], locale: Locale, cover_host: &str) -> Vec<BookRow> {
    records
        .iter()
        .map(|record| BookRow {
            title: record.title.clone(),
            authors: if record.authors.is_empty() {
                locale.unknown().to_string()
            } else {
                record.authors.join(", ")
            },
            year: record
                .first_publish_year
                .map_or_else(|| locale.unknown().to_string(), |year| year.to_string()),
            // A zero id is not a real cover.
            cover: match record.cover_id {
                Some(id) if id != 0 => CoverRef::Url(cover_url(cover_host, id)),
                _ => CoverRef::Placeholder,
            },
            cover_alt: locale.cover_alt(&record.title),
        })
        .collect()
}

pub fn render_pagination(plan: &PaginationPlan, current_page: u32) -> Vec<PageControl> {
    if plan.is_empty() {
        return Vec::new();
    }

    let mut controls = Vec::with_capacity(plan.entries.len() + 2);
    if plan.prev_enabled {
        controls.push(PageControl::Previous {
            target: current_page.saturating_sub(1).max(1),
        });
    }
    controls.extend(plan.entries.iter().map(|entry| match *entry {
        PageEntry::Page(number) => PageControl::Page {
            number,
            active: number == current_page,
        },
        PageEntry::Gap => PageControl::Gap,
    }));
    if plan.next_enabled {
        controls.push(PageControl::Next {
            target: current_page.saturating_add(1),
        });
    }
    controls
}
