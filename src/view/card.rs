use crate::models::Book;

pub const ELLIPSIS: char = '…';

pub const TITLE_LINES: usize = 2;
pub const AUTHOR_LINES: usize = 1;

/// Border rows plus the title and author rows.
pub const CARD_HEIGHT: usize = TITLE_LINES + AUTHOR_LINES + 2;

const MIN_CARD_WIDTH: usize = 8;

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = vec![];
    let mut line = String::new();
    let mut len = 0;

    for word in text.split_whitespace() {
        let mut chars = word.chars().collect::<Vec<_>>();

        // words wider than a line are split hard
        while chars.len() > width {
            if len > 0 {
                lines.push(std::mem::take(&mut line));
                len = 0;
            }

            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }

        if len > 0 && len + 1 + chars.len() > width {
            lines.push(std::mem::take(&mut line));
            len = 0;
        }

        if len > 0 {
            line.push(' ');
            len += 1;
        }

        len += chars.len();
        line.extend(chars);
    }

    if len > 0 {
        lines.push(line);
    }

    lines
}

/// Wraps `text` to `width` and keeps at most `max_lines`, ending the last
/// kept line with an ellipsis when something was cut.
pub fn clamp(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return vec![];
    }

    let mut lines = wrap(text, width);

    if lines.len() > max_lines {
        lines.truncate(max_lines);

        if let Some(last) = lines.last_mut() {
            let mut chars = last.chars().collect::<Vec<_>>();
            chars.truncate(width - 1);
            chars.push(ELLIPSIS);

            *last = chars.into_iter().collect();
        }
    }

    lines
}

fn boxed(text: &str, inner: usize) -> String {
    let pad = inner.saturating_sub(text.chars().count());

    format!("│ {}{} │", text, " ".repeat(pad))
}

/// ```text
/// ┌──────────────────────────┐
/// │ Pride and Prejudice      │
/// │                          │
/// │ Austen, Jane             │
/// └──────────────────────────┘
/// ```
pub fn card(book: &Book, width: usize) -> Vec<String> {
    let width = width.max(MIN_CARD_WIDTH);
    let inner = width - 4;
    let rule = "─".repeat(width - 2);

    let mut title = clamp(&book.title, inner, TITLE_LINES);
    title.resize(TITLE_LINES, String::new());

    let mut author = clamp(book.author_label(), inner, AUTHOR_LINES);
    author.resize(AUTHOR_LINES, String::new());

    let mut r = Vec::with_capacity(CARD_HEIGHT);

    r.push(format!("┌{}┐", rule));
    r.extend(title.iter().chain(author.iter()).map(|line| boxed(line, inner)));
    r.push(format!("└{}┘", rule));

    r
}
