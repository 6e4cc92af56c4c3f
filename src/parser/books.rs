use async_trait::async_trait;
use bytes::Bytes;
use log::{debug, trace};

use super::Parser;
use crate::error::LoadError;
use crate::models::{Book, ResultPage};

/// # BookPage Parser
/// One page of the Gutendex `/books/` collection.
pub struct BookPage {
    endpoint: String,
    page: u32,
    request_data: Option<Bytes>,
}

impl BookPage {
    pub fn new(endpoint: impl Into<String>, page: u32) -> BookPage {
        BookPage {
            endpoint: endpoint.into(),
            page,
            request_data: None,
        }
    }
}

#[async_trait]
impl Parser for BookPage {
    type RequestData = Bytes;
    type ParseData = Vec<Book>;

    fn request_data(&self) -> Result<&Self::RequestData, LoadError> {
        match self.request_data {
            Some(ref rd) => Ok(rd),
            None => Err(LoadError::transport("Can't get request_data")),
        }
    }

    fn url(&self) -> String {
        format!("{}?page={}", self.endpoint, self.page)
    }

    async fn request(mut self, client: &reqwest::Client) -> Result<Self, LoadError> {
        trace!("BookPage::request()");
        let url = self.url();

        debug!("url = {}", url);

        let response = client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Http(status.as_u16()));
        }

        let bytes = response.bytes().await?;

        debug!("body = {} bytes", bytes.len());

        self.request_data = Some(bytes);
        Ok(self)
    }

    fn parse(&self) -> Result<Self::ParseData, LoadError> {
        trace!("BookPage::parse()");
        let request_data = self.request_data()?;

        let page = serde_json::from_slice::<ResultPage>(request_data)?;

        debug!("books = {}", page.results.len());

        Ok(page.results)
    }
}
