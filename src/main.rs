use clap::{Parser, Subcommand};

use catalogue_engine::{loader, CatalogueStore};

#[derive(Debug, Parser)]
#[command(name = "catalogue-engine", about = "Query a book catalogue file")]
struct Cli {
	/// Path to the semicolon-delimited catalogue file.
	#[arg(long, global = true, default_value = "data/library.csv")]
	catalogue: String,

	/// Emit results as JSON instead of display lines.
	#[arg(long, global = true)]
	json: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Print every book in the catalogue.
	List,
	/// Books whose title, author, or publisher contains the term.
	Search { term: String },
	/// Distinct authors whose name contains the term.
	Authors { term: String },
	/// Look up a single book by id (prints the null-object sentinel on a miss).
	Get { id: i64 },
}

fn print_json<T: serde::Serialize>(value: &T) {
	match serde_json::to_string_pretty(value) {
		Ok(rendered) => println!("{}", rendered),
		Err(e) => {
			tracing::error!("JSON encoding failed: {}", e);
			std::process::exit(1);
		}
	}
}

fn main() {
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.init();

	let cli = Cli::parse();

	let books = match loader::load_from_path(&cli.catalogue) {
		Ok(books) => books,
		Err(e) => {
			tracing::error!("Failed to load catalogue {}: {}", cli.catalogue, e);
			std::process::exit(1);
		}
	};
	tracing::info!("catalogue ready: {} records from {}", books.len(), cli.catalogue);

	let store = CatalogueStore::new(books);

	match cli.command {
		Command::List => {
			if cli.json {
				print_json(&store.all_books().to_vec());
			} else {
				print!("{}", store.to_display_string());
			}
		}
		Command::Search { term } => {
			let hits = store.search_by_term(&term);
			if cli.json {
				print_json(&hits);
			} else {
				for book in hits {
					println!("{}", book);
				}
			}
		}
		Command::Authors { term } => {
			let authors = store.authors_matching_term(&term);
			if cli.json {
				print_json(&authors);
			} else {
				for author in authors {
					println!("{}", author);
				}
			}
		}
		Command::Get { id } => {
			let book = store.get_by_id(id);
			if cli.json {
				print_json(&book);
			} else {
				println!("{}", book);
			}
		}
	}
}
