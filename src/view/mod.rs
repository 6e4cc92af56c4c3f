use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{error, trace};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::LoadError;
use crate::models::{Book, LoadStatus};
use crate::parser::{BookPage, Parser};
use crate::stage::{self, Stage};

mod card;
mod render;

pub use card::clamp;
pub use render::render;

type SharedStatus = Arc<Mutex<LoadStatus>>;

fn lock(status: &SharedStatus) -> MutexGuard<'_, LoadStatus> {
    status.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # BookList
/// One activation of the book view: a single cancellable load and the
/// status it produces. Dropping it cancels the load.
pub struct BookList {
    config: Config,
    status: SharedStatus,
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl BookList {
    /// Starts loading the configured page. Must be called inside a tokio runtime.
    pub fn activate(config: Config) -> BookList {
        let status: SharedStatus = Arc::new(Mutex::new(LoadStatus::Loading));
        let token = CancellationToken::new();

        stage::update(Stage::Activated);

        let book_page = BookPage::new(config.endpoint.clone(), config.page);
        let task = tokio::spawn(load(book_page, token.clone(), status.clone()));

        BookList {
            config,
            status,
            token,
            task: Some(task),
        }
    }

    /// Cancels the outstanding load, if any. Returns whether there was one.
    pub fn deactivate(&self) -> bool {
        let status = lock(&self.status);
        let outstanding = status.is_loading() && !self.token.is_cancelled();

        // under the lock, so a finishing load sees the cancellation before writing
        self.token.cancel();
        drop(status);

        if outstanding {
            stage::update(Stage::Cancelled);
        }
        stage::update(Stage::Deactivated);

        outstanding
    }

    pub fn status(&self) -> LoadStatus {
        lock(&self.status).clone()
    }

    /// Waits until the load task has finished, whatever its outcome.
    pub async fn settled(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                error!("load task: {}", err);
            }
        }
    }

    pub fn render(&self) -> String {
        render(&lock(&self.status), &self.config)
    }
}

impl Drop for BookList {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn fetch(book_page: BookPage) -> Result<Vec<Book>, LoadError> {
    trace!("fetch()");
    let client = reqwest::Client::builder().build()?;

    let book_page = book_page.request(&client).await?;

    book_page.parse()
}

async fn load(book_page: BookPage, token: CancellationToken, status: SharedStatus) {
    stage::update(Stage::Requested(&book_page.url()));

    let r = tokio::select! {
        biased;
        _ = token.cancelled() => return,
        r = fetch(book_page) => r,
    };

    let mut status = lock(&status);
    if token.is_cancelled() {
        return;
    }

    match &r {
        Ok(books) => stage::update(Stage::Loaded(books.len())),
        Err(err) => stage::update(Stage::Failed(err)),
    }

    *status = LoadStatus::from(r);
}
