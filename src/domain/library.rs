//! Book catalogue and lending

use crate::domain::record::{reconcile, Collection, Counter, Document, Record};
use crate::domain::validate::required_text;
use crate::error::{Result, StorekeepError};
use serde::{Deserialize, Serialize};

const FIRST_BOOK_ID: u64 = 1;
const FIRST_LOAN_ID: u64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub copies: u64,
}

impl Record for Book {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanKind {
    Borrow,
    Return,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: u64,
    pub book_id: u64,
    pub title: String,
    pub kind: LoanKind,
    pub time: String,
}

impl Record for Loan {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Outcome of adding copies by title
#[derive(Debug, Clone, PartialEq)]
pub enum ShelfChange {
    Created(Book),
    Restocked(Book),
}

/// Outcome of returning a book
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnOutcome {
    Returned(Book),
    /// Unknown title, added back to the catalogue with one copy
    AddedToCatalogue(Book),
}

fn add_copies(book: &Book, copies: u64) -> Result<u64> {
    book.copies.checked_add(copies).ok_or_else(|| {
        StorekeepError::InvalidInput(format!(
            "Adding {} copies of '{}' exceeds the largest storable count",
            copies, book.title
        ))
    })
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
///
/// "pride and prejudice" -> "Pride And Prejudice", "1984" -> "1984".
pub fn normalize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut in_word = false;
    for ch in title.trim().chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryDocument {
    #[serde(default)]
    pub books: Collection<Book>,
    #[serde(default = "LibraryDocument::book_counter")]
    pub next_book_id: Counter,
    #[serde(default)]
    pub loans: Collection<Loan>,
    #[serde(default = "LibraryDocument::loan_counter")]
    pub next_loan_id: Counter,
}

impl Default for LibraryDocument {
    fn default() -> Self {
        LibraryDocument {
            books: Collection::default(),
            next_book_id: Self::book_counter(),
            loans: Collection::default(),
            next_loan_id: Self::loan_counter(),
        }
    }
}

impl Document for LibraryDocument {
    const NAME: &'static str = "library";

    fn reconcile_counters(&mut self) {
        reconcile(&mut self.next_book_id, &self.books);
        reconcile(&mut self.next_loan_id, &self.loans);
    }
}

impl LibraryDocument {
    fn book_counter() -> Counter {
        Counter::starting_at(FIRST_BOOK_ID)
    }

    fn loan_counter() -> Counter {
        Counter::starting_at(FIRST_LOAN_ID)
    }

    pub fn find_title(&self, title: &str) -> Option<&Book> {
        let title = normalize_title(title);
        self.books.find(|b| b.title == title)
    }

    pub fn add_book(&mut self, title: &str, copies: u64) -> Result<ShelfChange> {
        let title = normalize_title(&required_text("Title", title)?);

        if let Some(book) = self.books.find_mut(|b| b.title == title) {
            book.copies = add_copies(book, copies)?;
            return Ok(ShelfChange::Restocked(book.clone()));
        }

        let id = self.next_book_id.next_id();
        let book = self.books.add(Book { id, title, copies });
        Ok(ShelfChange::Created(book.clone()))
    }

    pub fn borrow(&mut self, title: &str, time: String) -> Result<Book> {
        let title = normalize_title(&required_text("Title", title)?);
        let book = self
            .books
            .find_mut(|b| b.title == title)
            .ok_or_else(|| StorekeepError::NameNotFound {
                kind: "book",
                name: title.clone(),
            })?;

        if book.copies == 0 {
            return Err(StorekeepError::Rejected(format!(
                "Sorry, all copies of '{}' are currently borrowed.",
                book.title
            )));
        }

        book.copies -= 1;
        let book = book.clone();
        self.record_loan(&book, LoanKind::Borrow, time);
        Ok(book)
    }

    /// Return one copy. Unknown titles are rejected unless `add_missing` is set.
    pub fn return_book(
        &mut self,
        title: &str,
        add_missing: bool,
        time: String,
    ) -> Result<ReturnOutcome> {
        let title = normalize_title(&required_text("Title", title)?);

        if let Some(book) = self.books.find_mut(|b| b.title == title) {
            book.copies = add_copies(book, 1)?;
            let book = book.clone();
            self.record_loan(&book, LoanKind::Return, time);
            return Ok(ReturnOutcome::Returned(book));
        }

        if !add_missing {
            return Err(StorekeepError::NameNotFound {
                kind: "book",
                name: title,
            });
        }

        let id = self.next_book_id.next_id();
        let book = self.books.add(Book { id, title, copies: 1 }).clone();
        self.record_loan(&book, LoanKind::Return, time);
        Ok(ReturnOutcome::AddedToCatalogue(book))
    }

    fn record_loan(&mut self, book: &Book, kind: LoanKind, time: String) {
        let id = self.next_loan_id.next_id();
        self.loans.add(Loan {
            id,
            book_id: book.id,
            title: book.title.clone(),
            kind,
            time,
        });
    }

    /// Starter catalogue for a fresh workspace
    pub fn seeded() -> Result<Self> {
        let mut doc = LibraryDocument::default();
        doc.add_book("The Great Gatsby", 3)?;
        doc.add_book("1984", 2)?;
        doc.add_book("Pride and Prejudice", 4)?;
        doc.add_book("Moby Dick", 0)?;
        Ok(doc)
    }
}
