use std::collections::{hash_map::Entry, HashMap};

use tokio::sync::Mutex;

use crate::book::{Book, BookId};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Book with id {0} not found")]
    NotFound(BookId),
    #[error("Book with id {0} already exists")]
    AlreadyExists(BookId),
}

/// In-memory id -> [`Book`] mapping.
///
/// Every operation holds the lock for its whole duration and nothing else,
/// so operations apply one at a time in some total order.
#[derive(Debug, Default)]
pub struct BookStore {
    books: Mutex<HashMap<BookId, Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every stored book, ordered by id.
    #[tracing::instrument(skip_all)]
    pub async fn list_all(&self) -> Vec<Book> {
        let books = self.books.lock().await;

        let mut all: Vec<Book> = books.values().cloned().collect();
        all.sort_by_key(|book| book.id);

        all
    }

    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: BookId) -> Result<Book, StoreError> {
        let books = self.books.lock().await;

        books.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// Inserts `book` unless its id is already taken.
    ///
    /// Does not check for the zero id, callers reject it beforehand.
    #[tracing::instrument(skip_all, fields(id = book.id))]
    pub async fn insert(&self, book: Book) -> Result<Book, StoreError> {
        let mut books = self.books.lock().await;

        match books.entry(book.id) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists(book.id)),
            Entry::Vacant(entry) => {
                let stored = entry.insert(book).clone();

                tracing::debug!(count = books.len(), "Inserted");

                Ok(stored)
            }
        }
    }

    /// Replaces the book stored under `id` wholesale.
    #[tracing::instrument(skip(self, book))]
    pub async fn replace(&self, id: BookId, book: Book) -> Result<Book, StoreError> {
        let mut books = self.books.lock().await;

        let slot = books.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = book;

        tracing::debug!("Replaced");

        Ok(slot.clone())
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, id: BookId) -> Result<Book, StoreError> {
        let mut books = self.books.lock().await;

        let removed = books.remove(&id).ok_or(StoreError::NotFound(id))?;

        tracing::debug!(count = books.len(), "Removed");

        Ok(removed)
    }

    pub async fn len(&self) -> usize {
        self.books.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
