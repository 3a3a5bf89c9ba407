// ---------------------------------------------------------------------------
// CatalogueStore — central store of books
// ---------------------------------------------------------------------------
//
// Built once from an ordered collection of Book records and read-only for
// the rest of its lifetime. Insertion order is canonical: every view and
// every query result preserves it. Because nothing mutates after
// construction, the store is Send + Sync and any number of threads may run
// any query concurrently without synchronization.
// ---------------------------------------------------------------------------

use std::collections::HashSet;
use std::fmt;

use crate::text_match::contains_ci;
use crate::types::Book;
use crate::view::BookShelf;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueStore {
	books: Vec<Book>,
}

impl CatalogueStore {
	/// Create a store from an ordered collection of books.
	///
	/// Takes ownership of the collection. Duplicate ids are not validated;
	/// duplicated records appear in every matching result and id lookup
	/// resolves to the first one in store order.
	pub fn new(books: Vec<Book>) -> Self {
		Self { books }
	}

	/// Read-only view over every stored book in insertion order.
	///
	/// Mutation attempts on the view fail with
	/// [`CatalogueError::ReadOnly`](crate::error::CatalogueError::ReadOnly);
	/// repeated calls observe identical content.
	pub fn all_books(&self) -> BookShelf<'_> {
		BookShelf::new(&self.books)
	}

	/// Books whose author, title, or publisher contains `term` as a
	/// case-insensitive substring, in store order.
	///
	/// The empty term matches every book. A book matching on several fields
	/// still appears once; the filter is per record, not per match.
	pub fn search_by_term(&self, term: &str) -> Vec<&Book> {
		self.filter(|book| {
			contains_ci(&book.author, term)
				|| contains_ci(&book.title, term)
				|| contains_ci(&book.publisher, term)
		})
	}

	/// Distinct author names containing `term` case-insensitively, in order
	/// of first occurrence among the stored books (not sorted).
	///
	/// Distinctness is by exact author string; the case-insensitivity
	/// applies only to the term match.
	pub fn authors_matching_term(&self, term: &str) -> Vec<&str> {
		let mut seen = HashSet::new();
		self.books
			.iter()
			.map(|book| book.author.as_str())
			.filter(|author| contains_ci(author, term))
			.filter(|author| seen.insert(*author))
			.collect()
	}

	/// First book (store order) with the given id, or the
	/// [`Book::null_object`] sentinel when no book matches.
	///
	/// Compatibility shim over [`find_by_id`](Self::find_by_id): absence is
	/// signalled by the sentinel value, never by an error, so callers must
	/// compare the result against the sentinel. New callers should prefer
	/// the `Option` form.
	pub fn get_by_id(&self, id: i64) -> Book {
		self.find_by_id(id).cloned().unwrap_or_else(Book::null_object)
	}

	/// First book (store order) with the given id.
	///
	/// Later records sharing the id are ignored; whether first-match-wins
	/// is policy or an artifact of unvalidated input is left open upstream,
	/// so the behavior is preserved as is.
	pub fn find_by_id(&self, id: i64) -> Option<&Book> {
		self.books.iter().find(|book| book.id == id)
	}

	/// Books for which `predicate` holds, in store order.
	///
	/// The general primitive beneath the named searches. The store knows
	/// nothing about the predicate; one that panics propagates to the
	/// caller uncaught.
	pub fn filter<P>(&self, predicate: P) -> Vec<&Book>
	where
		P: Fn(&Book) -> bool,
	{
		self.books.iter().filter(|book| predicate(book)).collect()
	}

	/// Display form of every book, one line per record, each terminated by
	/// a newline. The empty store renders as the empty string.
	pub fn to_display_string(&self) -> String {
		let mut out = String::new();
		for book in &self.books {
			out.push_str(&book.to_string());
			out.push('\n');
		}
		out
	}
}

impl fmt::Display for CatalogueStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_display_string())
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::CatalogueError;
	use crate::types::Language;

	fn book(id: i64, title: &str, author: &str, publisher: &str) -> Book {
		Book {
			id,
			title: title.to_string(),
			author: author.to_string(),
			publisher: publisher.to_string(),
			isbn: format!("isbn-{}", id),
			language: Language::English,
			price: 10.0,
		}
	}

	fn sample_store() -> CatalogueStore {
		CatalogueStore::new(vec![
			book(1, "Head First Design Patterns", "Freeman", "O'Reilly"),
			book(2, "Design Patterns", "Gamma", "Addison Wesley"),
			book(3, "Refactoring", "Fowler", "Addison Wesley"),
		])
	}

	#[test]
	fn all_books_preserves_insertion_order() {
		let store = sample_store();
		let ids: Vec<i64> = store.all_books().iter().map(|b| b.id).collect();
		assert_eq!(ids, vec![1, 2, 3]);

		// Repeated calls observe identical content.
		assert_eq!(store.all_books().to_vec(), store.all_books().to_vec());
	}

	#[test]
	fn search_matches_title_author_and_publisher() {
		let store = sample_store();

		let hits: Vec<i64> = store.search_by_term("design").iter().map(|b| b.id).collect();
		assert_eq!(hits, vec![1, 2]);

		let by_author: Vec<i64> = store.search_by_term("FOWLER").iter().map(|b| b.id).collect();
		assert_eq!(by_author, vec![3]);

		let by_publisher: Vec<i64> =
			store.search_by_term("wesley").iter().map(|b| b.id).collect();
		assert_eq!(by_publisher, vec![2, 3]);

		assert!(store.search_by_term("no such term").is_empty());
	}

	#[test]
	fn empty_term_matches_every_book() {
		let store = sample_store();
		assert_eq!(store.search_by_term("").len(), store.all_books().len());
	}

	#[test]
	fn record_matching_on_several_fields_appears_once() {
		let store = CatalogueStore::new(vec![book(
			1,
			"Patterns of Patterns",
			"Pattern Smith",
			"Pattern House",
		)]);
		assert_eq!(store.search_by_term("pattern").len(), 1);
	}

	#[test]
	fn authors_are_distinct_and_in_first_occurrence_order() {
		let store = CatalogueStore::new(vec![
			book(1, "A", "Gamma", "X"),
			book(2, "B", "Freeman", "X"),
			book(3, "C", "Gamma", "X"),
		]);

		assert_eq!(store.authors_matching_term(""), vec!["Gamma", "Freeman"]);
		assert_eq!(store.authors_matching_term("gamma"), vec!["Gamma"]);
		assert!(store.authors_matching_term("nobody").is_empty());
	}

	#[test]
	fn get_by_id_returns_match_or_sentinel() {
		let store = sample_store();

		assert_eq!(store.get_by_id(2).title, "Design Patterns");
		assert_eq!(store.get_by_id(99), Book::null_object());
		assert!(store.get_by_id(99).is_null_object());
	}

	#[test]
	fn duplicate_ids_resolve_to_the_first_record() {
		let store = CatalogueStore::new(vec![
			book(7, "First copy", "A", "X"),
			book(7, "Second copy", "B", "Y"),
		]);

		assert_eq!(store.get_by_id(7).title, "First copy");
		assert_eq!(store.find_by_id(7).map(|b| b.title.as_str()), Some("First copy"));

		// Both duplicates still appear in collection results.
		assert_eq!(store.search_by_term("").len(), 2);
	}

	#[test]
	fn find_by_id_makes_absence_explicit() {
		let store = sample_store();
		assert!(store.find_by_id(1).is_some());
		assert!(store.find_by_id(99).is_none());
	}

	#[test]
	fn filter_is_order_preserving() {
		let store = sample_store();

		let wesley: Vec<i64> = store
			.filter(|b| b.publisher == "Addison Wesley")
			.iter()
			.map(|b| b.id)
			.collect();
		assert_eq!(wesley, vec![2, 3]);

		let everything = store.filter(|_| true);
		assert_eq!(everything.len(), store.all_books().len());

		assert!(store.filter(|_| false).is_empty());
	}

	#[test]
	fn view_mutation_fails_and_store_is_unaffected() {
		let store = sample_store();
		let shelf = store.all_books();

		assert!(matches!(shelf.remove(0), Err(CatalogueError::ReadOnly)));
		assert!(matches!(
			shelf.insert(0, Book::null_object()),
			Err(CatalogueError::ReadOnly)
		));

		assert_eq!(store.all_books().len(), 3);
		assert_eq!(store.all_books()[0].id, 1);
	}

	#[test]
	fn display_string_has_one_newline_terminated_line_per_book() {
		let empty = CatalogueStore::new(Vec::new());
		assert_eq!(empty.to_display_string(), "");

		let store = CatalogueStore::new(vec![
			book(1, "Head First Design Patterns", "Freeman", "O'Reilly"),
			book(2, "Design Patterns", "Gamma", "Addison Wesley"),
		]);

		let rendered = store.to_display_string();
		let expected: String = store
			.all_books()
			.iter()
			.map(|b| format!("{}\n", b))
			.collect();
		assert_eq!(rendered, expected);
		assert!(rendered.ends_with('\n'));
		assert_eq!(rendered.lines().count(), 2);

		// Display delegates to the same rendering.
		assert_eq!(store.to_string(), rendered);
	}

	#[test]
	fn store_is_send_and_sync() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<CatalogueStore>();
	}
}
