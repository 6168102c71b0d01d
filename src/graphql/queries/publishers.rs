use super::prelude::*;

#[derive(Default)]
pub struct PublisherQueries;

#[Object]
impl PublisherQueries {
    /// List of all Publishers
    async fn publishers(&self, ctx: &Context<'_>) -> Option<Vec<Option<Publisher>>> {
        let db = ctx.data_unchecked::<Database>();
        nullable_list(db.publishers().list())
    }
}
