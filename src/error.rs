use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogueError {
	#[error("Read-only view: the catalogue cannot be modified after construction")]
	ReadOnly,
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),
	#[error("Malformed record on line {line}: {reason}")]
	Malformed { line: usize, reason: String },
	#[error("Unknown language code '{code}' on line {line}")]
	UnknownLanguage { code: String, line: usize },
}
