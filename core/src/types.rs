//! Domain DTOs for the book tracker API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! JSON keys follow the API exactly (`bookID`, `publicationYear`, ...), so
//! every renamed field carries an explicit `#[serde(rename)]`.
//! Identifiers are assigned by the server; a `Book` or `Reader` that has not
//! been stored yet has no id, and none is serialized for it.

use serde::{Deserialize, Serialize};

/// Error code reported by `get_all_books` when the catalogue can't be fetched.
pub const DATA_RETRIEVAL_ERROR_NUMBER: u32 = 100;

/// User-facing text paired with `DATA_RETRIEVAL_ERROR_NUMBER`.
pub const DATA_RETRIEVAL_FRIENDLY_MESSAGE: &str = "An error occurred retrieving data.";

/// A book as stored by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    #[serde(rename = "bookID", default, skip_serializing_if = "Option::is_none")]
    pub book_id: Option<u32>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "publicationYear")]
    pub publication_year: i32,
}

/// Legacy projection of a `Book`: only the title and the publication year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OldBook {
    #[serde(rename = "bookTitle")]
    pub book_title: String,
    pub year: i32,
}

impl OldBook {
    pub fn from_book(book: &Book) -> Self {
        Self {
            book_title: book.title.clone(),
            year: book.publication_year,
        }
    }
}

impl From<&Book> for OldBook {
    fn from(book: &Book) -> Self {
        Self::from_book(book)
    }
}

/// A reader as stored by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reader {
    #[serde(rename = "readerID", default, skip_serializing_if = "Option::is_none")]
    pub reader_id: Option<u32>,
    pub name: String,
    #[serde(
        rename = "weeklyReadingGoal",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub weekly_reading_goal: Option<u32>,
    #[serde(
        rename = "totalMinutesRead",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_minutes_read: Option<u32>,
}

/// Failure reported as a value by `DataService::get_all_books`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookTrackerError {
    pub error_number: u32,
    pub message: String,
    pub friendly_message: String,
}

impl BookTrackerError {
    /// Build the data-retrieval error for the given transport status text.
    pub fn data_retrieval(status_text: impl Into<String>) -> Self {
        Self {
            error_number: DATA_RETRIEVAL_ERROR_NUMBER,
            message: status_text.into(),
            friendly_message: DATA_RETRIEVAL_FRIENDLY_MESSAGE.to_string(),
        }
    }
}

/// Outcome of listing all books: either the catalogue or the mapped error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllBooks {
    Books(Vec<Book>),
    Failed(BookTrackerError),
}
