use super::Book;
use crate::error::LoadError;

/// Where one activation's load stands.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Loading,
    Success(Vec<Book>),
    Error(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }
}

impl Default for LoadStatus {
    fn default() -> Self {
        LoadStatus::Loading
    }
}

impl From<Result<Vec<Book>, LoadError>> for LoadStatus {
    fn from(r: Result<Vec<Book>, LoadError>) -> Self {
        match r {
            Ok(books) => LoadStatus::Success(books),
            Err(err) => LoadStatus::Error(err.to_string()),
        }
    }
}
