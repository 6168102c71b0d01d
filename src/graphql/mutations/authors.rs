use super::prelude::*;

#[derive(Default)]
pub struct AuthorMutations;

#[Object]
impl AuthorMutations {
    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Option<Author> {
        let db = ctx.data_unchecked::<Database>();
        let record = db.authors().create(CreateAuthor { name });

        tracing::info!(
            author_id = record.id,
            author_name = %record.name,
            "Added author: {}",
            record.name
        );

        Some(Author::from(record))
    }
}
