mod book;
mod page;
mod status;

pub use book::{Author, Book, UNKNOWN_AUTHOR};
pub use page::{ResultPage, MAX_BOOKS};
pub use status::LoadStatus;
