//! Async data-access service for the book tracker API.
//!
//! # Design
//! `DataService` pairs a `BookTrackerClient` with an injected `Transport`:
//! every method builds exactly one request, executes it, and parses the
//! response. Failures propagate unchanged except in `get_all_books`, which
//! folds any failure into a `BookTrackerError` value.
//!
//! The service also owns the "most popular book", seeded from the built-in
//! catalogue and replaced through `set_most_popular_book`.

use crate::client::BookTrackerClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::seed;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{AllBooks, Book, BookTrackerError, OldBook, Reader};

pub struct DataService<T = ReqwestTransport> {
    client: BookTrackerClient,
    transport: T,
    most_popular_book: Book,
}

impl DataService<ReqwestTransport> {
    /// Build a service talking to `config.base_url` over reqwest.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url, ReqwestTransport::new())
    }
}

impl<T: Transport> DataService<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: BookTrackerClient::new(base_url),
            transport,
            most_popular_book: seed::all_books().remove(0),
        }
    }

    pub fn most_popular_book(&self) -> &Book {
        &self.most_popular_book
    }

    pub fn set_most_popular_book(&mut self, popular_book: Book) {
        self.most_popular_book = popular_book;
    }

    pub async fn get_all_readers(&self) -> Result<Vec<Reader>, ApiError> {
        tracing::info!("Getting all readers from the server.");
        let response = self.transport.execute(self.client.build_list_readers()).await?;
        self.client.parse_list_readers(response)
    }

    pub async fn get_reader_by_id(&self, id: u32) -> Result<Reader, ApiError> {
        let response = self.transport.execute(self.client.build_get_reader(id)).await?;
        self.client.parse_reader(response)
    }

    /// List every book. Never fails: a transport or decoding failure comes
    /// back as `AllBooks::Failed` with error number 100.
    pub async fn get_all_books(&self) -> AllBooks {
        tracing::info!("Getting all books from the server.");
        match self.list_books().await {
            Ok(books) => AllBooks::Books(books),
            Err(err) => {
                tracing::warn!(error = %err, "failed to retrieve books");
                AllBooks::Failed(BookTrackerError::data_retrieval(err.status_text()))
            }
        }
    }

    pub async fn get_book_by_id(&self, id: u32) -> Result<Book, ApiError> {
        let response = self.transport.execute(self.client.build_get_book(id)).await?;
        self.client.parse_book(response)
    }

    pub async fn get_old_book_by_id(&self, id: u32) -> Result<OldBook, ApiError> {
        let response = self
            .transport
            .execute(self.client.build_get_old_book(id))
            .await?;
        let old_book = OldBook::from_book(&self.client.parse_book(response)?);
        tracing::info!(book_title = %old_book.book_title, year = old_book.year, "mapped old book");
        Ok(old_book)
    }

    pub async fn add_book(&self, new_book: &Book) -> Result<Book, ApiError> {
        let request = self.client.build_add_book(new_book)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_book(response)
    }

    pub async fn update_book(&self, updated_book: &Book) -> Result<(), ApiError> {
        let request = self.client.build_update_book(updated_book)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_ack(response)
    }

    pub async fn delete_book(&self, book_id: u32) -> Result<(), ApiError> {
        let response = self
            .transport
            .execute(self.client.build_delete_book(book_id))
            .await?;
        self.client.parse_ack(response)
    }

    pub async fn add_reader(&self, new_reader: &Reader) -> Result<Reader, ApiError> {
        let request = self.client.build_add_reader(new_reader)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_reader(response)
    }

    pub async fn update_reader(&self, updated_reader: &Reader) -> Result<(), ApiError> {
        let request = self.client.build_update_reader(updated_reader)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_ack(response)
    }

    pub async fn delete_reader(&self, reader_id: u32) -> Result<(), ApiError> {
        let response = self
            .transport
            .execute(self.client.build_delete_reader(reader_id))
            .await?;
        self.client.parse_ack(response)
    }

    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let response = self.transport.execute(self.client.build_list_books()).await?;
        self.client.parse_list_books(response)
    }
}
