//! Built-in catalogue of books and readers.
//!
//! Seeds `DataService::most_popular_book`. The mock server keeps its own copy
//! of the same catalogue; the integration tests check that the two agree.

use crate::types::{Book, Reader};

fn book(book_id: u32, title: &str, author: &str, publication_year: i32) -> Book {
    Book {
        book_id: Some(book_id),
        title: title.to_string(),
        author: Some(author.to_string()),
        publication_year,
    }
}

fn reader(reader_id: u32, name: &str, weekly_reading_goal: u32, total_minutes_read: u32) -> Reader {
    Reader {
        reader_id: Some(reader_id),
        name: name.to_string(),
        weekly_reading_goal: Some(weekly_reading_goal),
        total_minutes_read: Some(total_minutes_read),
    }
}

pub fn all_books() -> Vec<Book> {
    vec![
        book(1, "Goodnight Moon", "Margaret Wise Brown", 1953),
        book(2, "Winnie-the-Pooh", "A. A. Milne", 1926),
        book(3, "Where the Wild Things Are", "Maurice Sendak", 1963),
        book(4, "The Hobbit", "J. R. R. Tolkien", 1937),
        book(5, "Curious George", "H. A. Rey", 1941),
        book(
            6,
            "Alexander and the Terrible, Horrible, No Good, Very Bad Day",
            "Judith Viorst",
            1972,
        ),
    ]
}

pub fn all_readers() -> Vec<Reader> {
    vec![
        reader(1, "Marie", 400, 5600),
        reader(2, "Daniel", 210, 3000),
        reader(3, "Lanier", 140, 600),
    ]
}
