// ---------------------------------------------------------------------------
// Catalogue types — Book, Language
// ---------------------------------------------------------------------------
//
// Plain value types shared by the store, the loader, and the CLI. A Book is
// immutable once constructed; equality is full field comparison.
// ---------------------------------------------------------------------------

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// Language a catalogued book is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
	English,
	Dutch,
	German,
	French,
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Language::English => "English",
			Language::Dutch => "Dutch",
			Language::German => "German",
			Language::French => "French",
		};
		f.write_str(name)
	}
}

// ---------------------------------------------------------------------------
// Book
// ---------------------------------------------------------------------------

/// One catalogued book.
///
/// The `id` is unique within a catalogue by convention, but the store never
/// validates this; duplicated ids simply show up in every matching result
/// and id lookup resolves to the first one in store order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
	pub id: i64,
	pub title: String,
	pub author: String,
	pub publisher: String,
	pub isbn: String,
	pub language: Language,
	/// Negative denotes unset; the not-found sentinel uses -1.0.
	pub price: f64,
}

impl Book {
	/// Well-known sentinel returned by id lookup when no book matches.
	///
	/// Callers detect absence by comparing the returned value against this
	/// one. Kept for compatibility with the sentinel contract; new callers
	/// should prefer [`CatalogueStore::find_by_id`], which makes absence
	/// explicit.
	///
	/// [`CatalogueStore::find_by_id`]: crate::store::CatalogueStore::find_by_id
	pub fn null_object() -> Book {
		Book {
			id: 0,
			title: "Null object".to_string(),
			author: String::new(),
			publisher: String::new(),
			isbn: String::new(),
			language: Language::English,
			price: -1.0,
		}
	}

	/// True if this value is the id-lookup sentinel.
	pub fn is_null_object(&self) -> bool {
		*self == Book::null_object()
	}
}

impl fmt::Display for Book {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} | {} | {} | {} | {} | {} | {:.2}",
			self.id, self.title, self.author, self.publisher, self.isbn, self.language, self.price
		)
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
