use std::sync::Arc;

use crate::schema::objects::book::Book;

/// Read-only book collection shared by every request.
#[derive(Clone, Debug)]
pub struct Catalog {
    books: Arc<[Book]>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books: books.into() }
    }

    /// Books in declaration order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(seed())
    }
}

pub fn seed() -> Vec<Book> {
    vec![
        Book::new("The Awakening", "Kate Chopin"),
        Book::new("City of Glass", "Paul Auster"),
    ]
}
