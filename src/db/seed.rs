//! Startup seed data.
//!
//! The store is rebuilt from these rows on every process start; nothing else
//! populates it apart from the two append mutations.

use super::{AuthorRecord, BookRecord, PublisherRecord, Tables};

const AUTHORS: &[(i32, &str)] = &[(1, "JK Rowling"), (2, "J.R.R Tokein"), (3, "Brent Weeks")];

/// (id, name, author_id, publisher_id)
const BOOKS: &[(i32, &str, i32, i32)] = &[
    (1, "Harry Potter and the Philosopher’s Stone", 1, 1),
    (2, "Harry Potter and the Chamber of Secrets", 1, 3),
    (3, "Harry Potter and the Prisoner of Azkaban", 1, 2),
    (4, "A Middle English Vocabular", 2, 4),
    (5, "Sir Gawain & The Green Knight", 2, 1),
    (6, "The Hobbit: or There and Back Again", 2, 3),
    (7, "The Burning White", 3, 2),
    (8, "Way of Shadows", 3, 1),
];

const PUBLISHERS: &[(i32, &str)] = &[
    (1, "Penguin"),
    (2, "Pearson"),
    (3, "Thomson Reuters"),
    (4, "Harper Collins"),
];

/// Build the seeded tables.
pub fn tables() -> Tables {
    Tables {
        authors: AUTHORS
            .iter()
            .map(|&(id, name)| AuthorRecord {
                id,
                name: name.to_string(),
            })
            .collect(),
        books: BOOKS
            .iter()
            .map(|&(id, name, author_id, publisher_id)| BookRecord {
                id,
                name: name.to_string(),
                author_id,
                publisher_id: Some(publisher_id),
            })
            .collect(),
        publishers: PUBLISHERS
            .iter()
            .map(|&(id, name)| PublisherRecord {
                id,
                name: name.to_string(),
            })
            .collect(),
    }
}
