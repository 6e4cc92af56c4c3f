use async_trait::async_trait;

use crate::error::LoadError;

mod books;

pub use books::BookPage;

#[async_trait]
pub trait Parser: Sized {
    type RequestData;
    type ParseData;

    fn request_data(&self) -> Result<&Self::RequestData, LoadError>;

    fn url(&self) -> String;

    async fn request(self, client: &reqwest::Client) -> Result<Self, LoadError>;

    fn parse(&self) -> Result<Self::ParseData, LoadError>;
}
