use crate::config::Config;
use crate::models::{Book, LoadStatus};
use crate::utils::VecUtil;

use super::card::{card, CARD_HEIGHT};

pub const SPINNER: &str = "⟳";
const GUTTER: &str = "  ";

/// Text view of `status`. Same input, same output.
pub fn render(status: &LoadStatus, config: &Config) -> String {
    match status {
        LoadStatus::Loading => format!("{} Loading books...", SPINNER),
        LoadStatus::Error(detail) => format!("✖ Failed to load books\n  {}", detail),
        LoadStatus::Success(books) => shelf(books, config),
    }
}

fn grid(books: &[Book], config: &Config) -> Vec<String> {
    let rows = books
        .iter()
        .map(|book| card(book, config.card_width))
        .collect::<Vec<_>>()
        .seperate(config.columns.max(1));

    let mut r = vec![];

    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            r.push(String::new());
        }

        for line in 0..CARD_HEIGHT {
            let joined = row
                .iter()
                .map(|card| card[line].as_str())
                .collect::<Vec<_>>()
                .join(GUTTER);

            r.push(joined);
        }
    }

    r
}

fn footer(n: usize) -> String {
    let noun = if n == 1 { "book" } else { "books" };

    format!("Showing {} {} from an extensive collection", n, noun)
}

fn shelf(books: &[Book], config: &Config) -> String {
    let mut r = vec!["DIGITAL LIBRARY".to_string(), "Gutendex Books".to_string()];

    r.push(String::new());
    r.extend(grid(books, config));
    if !books.is_empty() {
        r.push(String::new());
    }
    r.push(footer(books.len()));

    r.join("\n")
}
