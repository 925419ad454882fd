use juniper::GraphQLObject;
use serde::Serialize;

/// A single book in the catalog.
#[derive(GraphQLObject, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl Book {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
        }
    }
}
