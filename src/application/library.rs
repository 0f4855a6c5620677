//! Library lending use cases

use crate::domain::library::{Book, LibraryDocument, ReturnOutcome, ShelfChange};
use crate::domain::validate::timestamp_now;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, StoreSession, WorkspaceRepository};

/// Service for the library lending tracker
pub struct LibraryService {
    session: StoreSession<LibraryDocument>,
}

impl LibraryService {
    pub fn new(session: StoreSession<LibraryDocument>) -> Self {
        LibraryService { session }
    }

    /// Open the library data file named in the workspace config
    pub fn open(repository: &FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        let store = repository.store(&config.files.library);
        Ok(Self::new(StoreSession::open(store)))
    }

    pub fn add_book(&mut self, title: &str, copies: u64) -> Result<ShelfChange> {
        self.session.commit(|doc| doc.add_book(title, copies))
    }

    pub fn borrow(&mut self, title: &str) -> Result<Book> {
        let book = self
            .session
            .commit(|doc| doc.borrow(title, timestamp_now()))?;
        tracing::info!(book_id = book.id, copies = book.copies, "Book borrowed");
        Ok(book)
    }

    pub fn return_book(&mut self, title: &str, add_missing: bool) -> Result<ReturnOutcome> {
        self.session
            .commit(|doc| doc.return_book(title, add_missing, timestamp_now()))
    }

    pub fn books(&self) -> &[Book] {
        self.session.document().books.as_slice()
    }
}
