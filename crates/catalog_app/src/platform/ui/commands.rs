use catalog_core::{AppViewModel, Msg, PageControl, SearchField};

/// What a line typed into the shell asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Intent(Msg),
    Help,
    Quit,
    /// Recognised, but nothing to do in the current view (e.g. `next` on the last page).
    Unavailable(&'static str),
    Unknown(String),
}

pub const HELP: &str = "\
commands:
  title <query>      search by title
  author <query>     search by author
  isbn <isbn>        search by ISBN (10 or 13 digits)
  <query>            search again by the current field
  next | n           next page
  prev | p           previous page
  page <n>           jump to page n
  filter <digits>    narrow shown results to ISBNs containing <digits>
  rows <n>           set the terminal height used for page size
  help               show this text
  quit | q           leave

A query starting with a command word (e.g. `next`, `q`) needs a field prefix.";

/// Parses one shell line against the current view.
pub fn parse_line(line: &str, view: &AppViewModel) -> Option<ShellCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "quit" | "q" | "exit" => ShellCommand::Quit,
        "help" | "?" => ShellCommand::Help,
        "next" | "n" => pagination_intent(view, |c| matches!(c, PageControl::Next { .. }))
            .unwrap_or(ShellCommand::Unavailable("no next page")),
        "prev" | "p" => pagination_intent(view, |c| matches!(c, PageControl::Previous { .. }))
            .unwrap_or(ShellCommand::Unavailable("no previous page")),
        "page" => match rest.parse::<u32>() {
            Ok(page) if page >= 1 && page <= view.total_pages => {
                ShellCommand::Intent(Msg::GoToPage(page))
            }
            Ok(_) => ShellCommand::Unavailable("page out of range"),
            Err(_) => ShellCommand::Unknown(line.to_string()),
        },
        "filter" => ShellCommand::Intent(Msg::FilterLocal(rest.to_string())),
        "rows" => match rest.parse::<u32>() {
            Ok(rows) => ShellCommand::Intent(Msg::Resize {
                viewport_height: rows,
            }),
            Err(_) => ShellCommand::Unknown(line.to_string()),
        },
        other => match other.parse::<SearchField>() {
            Ok(field) => ShellCommand::Intent(Msg::Submit {
                query: rest.to_string(),
                field,
            }),
            Err(_) => ShellCommand::Intent(Msg::Submit {
                query: line.to_string(),
                field: view.field,
            }),
        },
    };
    Some(command)
}

fn pagination_intent(
    view: &AppViewModel,
    wanted: impl Fn(&PageControl) -> bool,
) -> Option<ShellCommand> {
    view.pagination
        .iter()
        .find(|control| wanted(control))
        .and_then(PageControl::intent)
        .map(ShellCommand::Intent)
}
