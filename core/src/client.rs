//! Stateless HTTP request builder and response parser for the book tracker API.
//!
//! # Design
//! `BookTrackerClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `DataService` pairs them around a `Transport`, but the
//! client itself stays deterministic and free of I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Book, Reader};

/// Static credential attached to by-id reads.
pub const AUTHORIZATION_TOKEN: &str = "my-token";

const BOOKS_ROUTE: &str = "/api/books";
const READERS_ROUTE: &str = "/api/readers";

/// Synchronous, stateless client for the book tracker API.
#[derive(Debug, Clone)]
pub struct BookTrackerClient {
    base_url: String,
}

impl BookTrackerClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -- readers ------------------------------------------------------------

    pub fn build_list_readers(&self) -> HttpRequest {
        self.request(HttpMethod::Get, READERS_ROUTE.to_string(), Vec::new(), None)
    }

    pub fn build_get_reader(&self, id: u32) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            format!("{READERS_ROUTE}/{id}"),
            authorized_read_headers(),
            None,
        )
    }

    pub fn build_add_reader(&self, reader: &Reader) -> Result<HttpRequest, ApiError> {
        Ok(self.request(
            HttpMethod::Post,
            READERS_ROUTE.to_string(),
            json_content_headers(),
            Some(to_json(reader)?),
        ))
    }

    pub fn build_update_reader(&self, reader: &Reader) -> Result<HttpRequest, ApiError> {
        Ok(self.request(
            HttpMethod::Put,
            format!("{READERS_ROUTE}/{}", id_segment(reader.reader_id)),
            json_content_headers(),
            Some(to_json(reader)?),
        ))
    }

    pub fn build_delete_reader(&self, reader_id: u32) -> HttpRequest {
        self.request(
            HttpMethod::Delete,
            format!("{READERS_ROUTE}/{reader_id}"),
            Vec::new(),
            None,
        )
    }

    // -- books --------------------------------------------------------------

    pub fn build_list_books(&self) -> HttpRequest {
        self.request(HttpMethod::Get, BOOKS_ROUTE.to_string(), Vec::new(), None)
    }

    pub fn build_get_book(&self, id: u32) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            format!("{BOOKS_ROUTE}/{id}"),
            authorized_read_headers(),
            None,
        )
    }

    /// Same route as `build_get_book`, without the authorized read headers.
    pub fn build_get_old_book(&self, id: u32) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            format!("{BOOKS_ROUTE}/{id}"),
            Vec::new(),
            None,
        )
    }

    pub fn build_add_book(&self, book: &Book) -> Result<HttpRequest, ApiError> {
        Ok(self.request(
            HttpMethod::Post,
            BOOKS_ROUTE.to_string(),
            json_content_headers(),
            Some(to_json(book)?),
        ))
    }

    pub fn build_update_book(&self, book: &Book) -> Result<HttpRequest, ApiError> {
        Ok(self.request(
            HttpMethod::Put,
            format!("{BOOKS_ROUTE}/{}", id_segment(book.book_id)),
            json_content_headers(),
            Some(to_json(book)?),
        ))
    }

    pub fn build_delete_book(&self, book_id: u32) -> HttpRequest {
        self.request(
            HttpMethod::Delete,
            format!("{BOOKS_ROUTE}/{book_id}"),
            Vec::new(),
            None,
        )
    }

    // -- responses ----------------------------------------------------------

    pub fn parse_list_readers(&self, response: HttpResponse) -> Result<Vec<Reader>, ApiError> {
        parse_json(response)
    }

    pub fn parse_reader(&self, response: HttpResponse) -> Result<Reader, ApiError> {
        parse_json(response)
    }

    pub fn parse_list_books(&self, response: HttpResponse) -> Result<Vec<Book>, ApiError> {
        parse_json(response)
    }

    pub fn parse_book(&self, response: HttpResponse) -> Result<Book, ApiError> {
        parse_json(response)
    }

    /// Parse an update/delete response; any 2xx body is discarded.
    pub fn parse_ack(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn request(
        &self,
        method: HttpMethod,
        route: String,
        headers: Vec<(String, String)>,
        body: Option<String>,
    ) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{route}", self.base_url),
            headers,
            body,
        }
    }
}

/// Path segment for an entity's id. An unsaved entity yields an empty
/// segment; the server decides what that means.
fn id_segment(id: Option<u32>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

fn authorized_read_headers() -> Vec<(String, String)> {
    vec![
        ("Accept".to_string(), "application/json".to_string()),
        ("Authorization".to_string(), AUTHORIZATION_TOKEN.to_string()),
    ]
}

fn json_content_headers() -> Vec<(String, String)> {
    vec![("Content-Type".to_string(), "application/json".to_string())]
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization {
        status_text: response.status_text,
        message: e.to_string(),
    })
}

/// Map non-2xx status codes to `ApiError::Status`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        status_text: response.status_text.clone(),
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> BookTrackerClient {
        BookTrackerClient::new("http://localhost:3000")
    }

    fn response(status: u16, status_text: &str, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            status_text: status_text.to_string(),
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn read_headers() -> Vec<(String, String)> {
        vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("Authorization".to_string(), "my-token".to_string()),
        ]
    }

    fn write_headers() -> Vec<(String, String)> {
        vec![("Content-Type".to_string(), "application/json".to_string())]
    }

    #[test]
    fn build_list_books_has_no_headers() {
        let req = client().build_list_books();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/books");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn build_get_book_attaches_read_headers() {
        let req = client().build_get_book(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/books/42");
        assert_eq!(req.headers, read_headers());
        assert!(req.body.is_none());
    }

    #[test]
    fn build_get_old_book_has_no_headers() {
        let req = client().build_get_old_book(42);
        assert_eq!(req.path, "http://localhost:3000/api/books/42");
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_reader_attaches_read_headers() {
        let req = client().build_get_reader(3);
        assert_eq!(req.path, "http://localhost:3000/api/readers/3");
        assert_eq!(req.headers, read_headers());
    }

    #[test]
    fn build_add_book_sends_json_body() {
        let book = Book {
            book_id: None,
            title: "Emma".to_string(),
            author: Some("Jane Austen".to_string()),
            publication_year: 1815,
        };
        let req = client().build_add_book(&book).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/api/books");
        assert_eq!(req.headers, write_headers());
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Emma");
        assert_eq!(body["publicationYear"], 1815);
    }

    #[test]
    fn build_add_requests_never_send_an_id() {
        let c = client();
        let book: Book =
            serde_json::from_str(r#"{"title":"Emma","publicationYear":1815}"#).unwrap();
        let req = c.build_add_book(&book).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "Emma", "publicationYear": 1815 }));
        assert!(!req.body.unwrap().contains("bookID"));

        let reader: Reader = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        let req = c.build_add_reader(&reader).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "name": "Ada" }));
        assert!(!req.body.unwrap().contains("readerID"));
    }

    #[test]
    fn build_update_book_without_id_leaves_segment_empty() {
        let book = Book {
            book_id: None,
            title: "Emma".to_string(),
            author: None,
            publication_year: 1815,
        };
        let req = client().build_update_book(&book).unwrap();
        assert_eq!(req.path, "http://localhost:3000/api/books/");
    }

    #[test]
    fn build_update_reader_targets_reader_id() {
        let reader = Reader {
            reader_id: Some(7),
            name: "Ada".to_string(),
            weekly_reading_goal: None,
            total_minutes_read: None,
        };
        let req = client().build_update_reader(&reader).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/api/readers/7");
        assert_eq!(req.headers, write_headers());
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "readerID": 7, "name": "Ada" }));
    }

    #[test]
    fn build_delete_requests_have_no_headers() {
        let c = client();
        for req in [c.build_delete_book(5), c.build_delete_reader(5)] {
            assert_eq!(req.method, HttpMethod::Delete);
            assert!(req.headers.is_empty());
            assert!(req.body.is_none());
        }
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = BookTrackerClient::new("http://localhost:3000/");
        assert_eq!(client.build_list_readers().path, "http://localhost:3000/api/readers");
    }

    #[test]
    fn empty_base_url_yields_relative_paths() {
        let client = BookTrackerClient::new("");
        assert_eq!(client.build_get_book(42).path, "/api/books/42");
    }

    #[test]
    fn parse_book_returns_body_unchanged() {
        let resp = response(200, "OK", r#"{"bookID":42,"title":"Dune","publicationYear":1965}"#);
        let book = client().parse_book(resp).unwrap();
        assert_eq!(book.book_id, Some(42));
        assert_eq!(book.title, "Dune");
        assert_eq!(book.publication_year, 1965);
    }

    #[test]
    fn parse_list_readers_success() {
        let resp = response(200, "OK", r#"[{"readerID":1,"name":"Marie"}]"#);
        let readers = client().parse_list_readers(resp).unwrap();
        assert_eq!(readers.len(), 1);
        assert_eq!(readers[0].name, "Marie");
    }

    #[test]
    fn parse_book_not_found_keeps_status_text() {
        let err = client().parse_book(response(404, "Not Found", "")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.status_text(), "Not Found");
    }

    #[test]
    fn parse_reader_created_is_success() {
        let resp = response(201, "Created", r#"{"readerID":4,"name":"Grace"}"#);
        let reader = client().parse_reader(resp).unwrap();
        assert_eq!(reader.reader_id, Some(4));
    }

    #[test]
    fn parse_ack_accepts_any_2xx() {
        assert!(client().parse_ack(response(204, "No Content", "")).is_ok());
        assert!(client().parse_ack(response(200, "OK", "null")).is_ok());
    }

    #[test]
    fn parse_ack_rejects_server_error() {
        let err = client()
            .parse_ack(response(500, "Internal Server Error", "boom"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
    }

    #[test]
    fn parse_list_books_bad_json() {
        let err = client().parse_list_books(response(200, "OK", "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization { .. }));
        assert_eq!(err.status_text(), "OK");
    }
}
