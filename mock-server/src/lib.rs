use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    #[serde(rename = "bookID", default, skip_serializing_if = "Option::is_none")]
    pub book_id: Option<u32>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(rename = "publicationYear")]
    pub publication_year: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reader {
    #[serde(rename = "readerID", default, skip_serializing_if = "Option::is_none")]
    pub reader_id: Option<u32>,
    pub name: String,
    #[serde(rename = "weeklyReadingGoal", default, skip_serializing_if = "Option::is_none")]
    pub weekly_reading_goal: Option<u32>,
    #[serde(rename = "totalMinutesRead", default, skip_serializing_if = "Option::is_none")]
    pub total_minutes_read: Option<u32>,
}

/// In-memory contents of the API. Ids are assigned here, never by clients.
#[derive(Debug, Default)]
pub struct Store {
    pub books: BTreeMap<u32, Book>,
    pub readers: BTreeMap<u32, Reader>,
}

impl Store {
    /// Store pre-populated with the demo catalogue.
    pub fn seeded() -> Self {
        let books = [
            (1, "Goodnight Moon", "Margaret Wise Brown", 1953),
            (2, "Winnie-the-Pooh", "A. A. Milne", 1926),
            (3, "Where the Wild Things Are", "Maurice Sendak", 1963),
            (4, "The Hobbit", "J. R. R. Tolkien", 1937),
            (5, "Curious George", "H. A. Rey", 1941),
            (
                6,
                "Alexander and the Terrible, Horrible, No Good, Very Bad Day",
                "Judith Viorst",
                1972,
            ),
        ]
        .into_iter()
        .map(|(book_id, title, author, publication_year)| {
            let book = Book {
                book_id: Some(book_id),
                title: title.to_string(),
                author: Some(author.to_string()),
                publication_year,
            };
            (book_id, book)
        })
        .collect();

        let readers = [(1, "Marie", 400, 5600), (2, "Daniel", 210, 3000), (3, "Lanier", 140, 600)]
            .into_iter()
            .map(|(reader_id, name, goal, minutes)| {
                let reader = Reader {
                    reader_id: Some(reader_id),
                    name: name.to_string(),
                    weekly_reading_goal: Some(goal),
                    total_minutes_read: Some(minutes),
                };
                (reader_id, reader)
            })
            .collect();

        Self { books, readers }
    }
}

fn next_id<V>(map: &BTreeMap<u32, V>) -> u32 {
    map.keys().next_back().map_or(1, |last| last + 1)
}

pub type Db = Arc<RwLock<Store>>;

/// Router over the seeded catalogue.
pub fn app() -> Router {
    app_with(Store::seeded())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/api/books", get(list_books).post(create_book))
        .route(
            "/api/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
        .route("/api/readers", get(list_readers).post(create_reader))
        .route(
            "/api/readers/{id}",
            get(get_reader).put(update_reader).delete(delete_reader),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

// --- books ---

async fn list_books(State(db): State<Db>) -> Json<Vec<Book>> {
    let store = db.read().await;
    Json(store.books.values().cloned().collect())
}

async fn create_book(
    State(db): State<Db>,
    Json(mut book): Json<Book>,
) -> (StatusCode, Json<Book>) {
    let mut store = db.write().await;
    let id = next_id(&store.books);
    book.book_id = Some(id);
    store.books.insert(id, book.clone());
    tracing::info!(book_id = id, "created book");
    (StatusCode::CREATED, Json(book))
}

async fn get_book(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Book>, StatusCode> {
    let store = db.read().await;
    store.books.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_book(
    State(db): State<Db>,
    Path(id): Path<u32>,
    Json(mut book): Json<Book>,
) -> StatusCode {
    let mut store = db.write().await;
    match store.books.get_mut(&id) {
        Some(stored) => {
            book.book_id = Some(id);
            *stored = book;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_book(State(db): State<Db>, Path(id): Path<u32>) -> StatusCode {
    let mut store = db.write().await;
    store
        .books
        .remove(&id)
        .map_or(StatusCode::NOT_FOUND, |_| StatusCode::NO_CONTENT)
}

// --- readers ---

async fn list_readers(State(db): State<Db>) -> Json<Vec<Reader>> {
    let store = db.read().await;
    Json(store.readers.values().cloned().collect())
}

async fn create_reader(
    State(db): State<Db>,
    Json(mut reader): Json<Reader>,
) -> (StatusCode, Json<Reader>) {
    let mut store = db.write().await;
    let id = next_id(&store.readers);
    reader.reader_id = Some(id);
    store.readers.insert(id, reader.clone());
    tracing::info!(reader_id = id, "created reader");
    (StatusCode::CREATED, Json(reader))
}

async fn get_reader(
    State(db): State<Db>,
    Path(id): Path<u32>,
) -> Result<Json<Reader>, StatusCode> {
    let store = db.read().await;
    store.readers.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_reader(
    State(db): State<Db>,
    Path(id): Path<u32>,
    Json(mut reader): Json<Reader>,
) -> StatusCode {
    let mut store = db.write().await;
    match store.readers.get_mut(&id) {
        Some(stored) => {
            reader.reader_id = Some(id);
            *stored = reader;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn delete_reader(State(db): State<Db>, Path(id): Path<u32>) -> StatusCode {
    let mut store = db.write().await;
    store
        .readers
        .remove(&id)
        .map_or(StatusCode::NOT_FOUND, |_| StatusCode::NO_CONTENT)
}
