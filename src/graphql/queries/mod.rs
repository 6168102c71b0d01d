pub mod authors;
pub mod books;
pub mod publishers;

pub use authors::AuthorQueries;
pub use books::BookQueries;
pub use publishers::PublisherQueries;

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, Object};

    pub(crate) use crate::db::*;
    pub(crate) use crate::graphql::types::*;
}
