// ---------------------------------------------------------------------------
// BookShelf — read-only view over the catalogue
// ---------------------------------------------------------------------------
//
// Wrapper handed out by CatalogueStore::all_books. Forwards every read
// operation to the backing sequence and rejects every mutating operation
// with CatalogueError::ReadOnly, so callers never get a handle they could
// use to modify the store. The backing sequence is fixed for the lifetime
// of the store, which is what makes lock-free concurrent reads sound.
// ---------------------------------------------------------------------------

use std::ops::Index;

use crate::error::CatalogueError;
use crate::types::Book;

/// Read-only, insertion-ordered view over every book in a catalogue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookShelf<'a> {
	books: &'a [Book],
}

impl<'a> BookShelf<'a> {
	pub(crate) fn new(books: &'a [Book]) -> Self {
		Self { books }
	}

	pub fn len(&self) -> usize {
		self.books.len()
	}

	pub fn is_empty(&self) -> bool {
		self.books.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&'a Book> {
		self.books.get(index)
	}

	pub fn first(&self) -> Option<&'a Book> {
		self.books.first()
	}

	pub fn last(&self) -> Option<&'a Book> {
		self.books.last()
	}

	pub fn contains(&self, book: &Book) -> bool {
		self.books.contains(book)
	}

	pub fn iter(&self) -> std::slice::Iter<'a, Book> {
		self.books.iter()
	}

	/// The view as a plain slice. Useful for order-sensitive comparisons.
	pub fn as_slice(&self) -> &'a [Book] {
		self.books
	}

	/// Owned copy of every book in view order.
	pub fn to_vec(&self) -> Vec<Book> {
		self.books.to_vec()
	}

	// -----------------------------------------------------------------------
	// Mutators — all rejected
	// -----------------------------------------------------------------------
	//
	// Each returns CatalogueError::ReadOnly and leaves the store untouched.

	pub fn insert(&self, _index: usize, _book: Book) -> Result<(), CatalogueError> {
		Err(CatalogueError::ReadOnly)
	}

	pub fn remove(&self, _index: usize) -> Result<Book, CatalogueError> {
		Err(CatalogueError::ReadOnly)
	}

	pub fn replace(&self, _index: usize, _book: Book) -> Result<Book, CatalogueError> {
		Err(CatalogueError::ReadOnly)
	}

	pub fn push(&self, _book: Book) -> Result<(), CatalogueError> {
		Err(CatalogueError::ReadOnly)
	}

	pub fn clear(&self) -> Result<(), CatalogueError> {
		Err(CatalogueError::ReadOnly)
	}
}

impl Index<usize> for BookShelf<'_> {
	type Output = Book;

	fn index(&self, index: usize) -> &Book {
		&self.books[index]
	}
}

impl<'a> IntoIterator for BookShelf<'a> {
	type Item = &'a Book;
	type IntoIter = std::slice::Iter<'a, Book>;

	fn into_iter(self) -> Self::IntoIter {
		self.books.iter()
	}
}

impl<'a> IntoIterator for &BookShelf<'a> {
	type Item = &'a Book;
	type IntoIter = std::slice::Iter<'a, Book>;

	fn into_iter(self) -> Self::IntoIter {
		self.books.iter()
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
