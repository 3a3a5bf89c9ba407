// ---------------------------------------------------------------------------
// Catalogue file loader
// ---------------------------------------------------------------------------
//
// Parses the semicolon-delimited catalogue format into Book records:
//
//	id;title;author;publisher;isbn;language;price
//
// No header row. Record order in the file becomes the store order. The
// store itself never touches this module; it only sees the materialized
// Vec<Book>.
// ---------------------------------------------------------------------------

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::CatalogueError;
use crate::types::{Book, Language};

const FIELDS_PER_RECORD: usize = 7;

fn parse_language(code: &str, line: usize) -> Result<Language, CatalogueError> {
	match code.to_lowercase().as_str() {
		"en" => Ok(Language::English),
		"nl" => Ok(Language::Dutch),
		"de" => Ok(Language::German),
		"fr" => Ok(Language::French),
		_ => Err(CatalogueError::UnknownLanguage {
			code: code.to_string(),
			line,
		}),
	}
}

/// Parse a whole catalogue from any reader.
pub fn parse_catalogue<R: Read>(reader: R) -> Result<Vec<Book>, CatalogueError> {
	let mut csv_reader = ReaderBuilder::new()
		.delimiter(b';')
		.has_headers(false)
		.flexible(true)
		.trim(csv::Trim::All)
		.from_reader(reader);

	let mut books = Vec::new();
	for (index, record) in csv_reader.records().enumerate() {
		let line = index + 1;
		let record = record?;

		if record.len() != FIELDS_PER_RECORD {
			return Err(CatalogueError::Malformed {
				line,
				reason: format!(
					"expected {} fields, got {}",
					FIELDS_PER_RECORD,
					record.len()
				),
			});
		}

		let id: i64 = record[0].parse().map_err(|_| CatalogueError::Malformed {
			line,
			reason: format!("invalid id '{}'", &record[0]),
		})?;
		let price: f64 = record[6].parse().map_err(|_| CatalogueError::Malformed {
			line,
			reason: format!("invalid price '{}'", &record[6]),
		})?;
		let language = parse_language(&record[5], line)?;

		books.push(Book {
			id,
			title: record[1].to_string(),
			author: record[2].to_string(),
			publisher: record[3].to_string(),
			isbn: record[4].to_string(),
			language,
			price,
		});
	}

	tracing::debug!("parsed {} catalogue records", books.len());
	Ok(books)
}

/// Load a catalogue file from disk.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Book>, CatalogueError> {
	let file = File::open(path)?;
	parse_catalogue(file)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
