use super::prelude::*;

#[derive(Default)]
pub struct BookMutations;

#[Object]
impl BookMutations {
    /// Add a book
    // The new book has no publisher; reading its `publisherid` is a field error.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        #[graphql(name = "authorid")] author_id: i32,
    ) -> Option<Book> {
        let db = ctx.data_unchecked::<Database>();
        let record = db.books().create(CreateBook { name, author_id });

        tracing::info!(
            book_id = record.id,
            author_id = record.author_id,
            book_name = %record.name,
            "Added book: {}",
            record.name
        );

        Some(Book::from(record))
    }
}
