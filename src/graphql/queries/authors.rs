use super::prelude::*;

#[derive(Default)]
pub struct AuthorQueries;

#[Object]
impl AuthorQueries {
    /// List of all Authors
    async fn authors(&self, ctx: &Context<'_>) -> Option<Vec<Option<Author>>> {
        let db = ctx.data_unchecked::<Database>();
        nullable_list(db.authors().list())
    }

    /// A single author
    async fn author(&self, ctx: &Context<'_>, id: Option<i32>) -> Option<Author> {
        let db = ctx.data_unchecked::<Database>();
        let record = id.and_then(|id| db.authors().get_by_id(id));
        if record.is_none() {
            tracing::debug!(author_id = ?id, "Author not found");
        }
        record.map(Author::from)
    }
}
