pub const GUTENDEX_ENDPOINT: &str = "https://gutendex.com/books/";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Collection URL, queried as `{endpoint}?page={page}`.
    pub endpoint: String,
    pub page: u32,
    /// Cards per grid row.
    pub columns: usize,
    /// Outer width of a card, borders included.
    pub card_width: usize,
}

impl Config {
    pub fn new(endpoint: impl Into<String>) -> Config {
        Config {
            endpoint: endpoint.into(),
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: GUTENDEX_ENDPOINT.to_string(),
            page: 1,
            columns: 3,
            card_width: 30,
        }
    }
}
