use catalog_core::{AppViewModel, BookRow, Locale, PageControl, ResultsView};

/// Draws the view model as terminal lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let locale = view.locale;
    let mut lines = Vec::new();

    if !view.query.is_empty() {
        let mut header = format!("{} \"{}\" ({})", search_label(locale), view.query, view.field);
        if view.total_pages > 0 {
            header.push_str(&format!(
                " | {} {}/{}",
                locale.page_label(),
                view.current_page,
                view.total_pages
            ));
        }
        lines.push(header);
    }

    if let Some(notice) = &view.notice {
        lines.push(locale.message(notice));
    }

    match &view.results {
        ResultsView::Empty => {}
        ResultsView::Message(message) => lines.push(locale.message(message)),
        ResultsView::Books(rows) => {
            for (index, row) in rows.iter().enumerate() {
                lines.extend(format_book(index + 1, row, locale));
            }
        }
    }

    if !view.pagination.is_empty() && !view.busy {
        lines.push(format_pagination(&view.pagination));
    }

    lines
}

fn search_label(locale: Locale) -> &'static str {
    match locale {
        Locale::English => "Search",
        Locale::Spanish => "Búsqueda",
    }
}

fn format_book(position: usize, row: &BookRow, locale: Locale) -> [String; 4] {
    [
        format!("{position:>3}. {}", row.title),
        format!("     {}: {}", locale.author_label(), row.authors),
        format!("     {}: {}", locale.year_label(), row.year),
        format!("     [{}] {}", row.cover_alt, row.cover.as_str()),
    ]
}

/// `« 1 ... 3 [4] 5 ... 10 »`
pub fn format_pagination(controls: &[PageControl]) -> String {
    controls
        .iter()
        .map(|control| match control {
            PageControl::Previous { .. } => "«".to_string(),
            PageControl::Page {
                number,
                active: true,
            } => format!("[{number}]"),
            PageControl::Page { number, .. } => number.to_string(),
            PageControl::Gap => "...".to_string(),
            PageControl::Next { .. } => "»".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
