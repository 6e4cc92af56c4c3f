pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod stage;
pub mod utils;
pub mod view;

pub use config::Config;
pub use error::LoadError;
pub use models::{Book, LoadStatus};
pub use view::BookList;
