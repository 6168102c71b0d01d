use super::prelude::*;

#[derive(Default)]
pub struct BookQueries;

#[Object]
impl BookQueries {
    /// A single book
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> Option<Book> {
        let db = ctx.data_unchecked::<Database>();
        let record = id.and_then(|id| db.books().get_by_id(id));
        if record.is_none() {
            tracing::debug!(book_id = ?id, "Book not found");
        }
        record.map(Book::from)
    }

    /// List of Books
    async fn books(&self, ctx: &Context<'_>) -> Option<Vec<Option<Book>>> {
        let db = ctx.data_unchecked::<Database>();
        nullable_list(db.books().list())
    }
}
