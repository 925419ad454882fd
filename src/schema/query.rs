use crate::state::AppData;
use super::objects::book::Book;

#[derive(Clone, Copy, Debug)]
pub struct Query;

#[juniper::graphql_object(context = crate::state::AppData)]
impl Query {
    /// Every book in the catalog, in the order it was declared.
    fn books(ctx: &AppData) -> Option<Vec<Option<Book>>> {
        Some(ctx.catalog.books().iter().cloned().map(Some).collect())
    }
}
