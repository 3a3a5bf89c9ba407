// ---------------------------------------------------------------------------
// catalogue-engine — read-only book catalogue store
// ---------------------------------------------------------------------------
//
// A catalogue is built once from an ordered collection of Book records and
// answers search, lookup, and filter queries over it for the rest of its
// lifetime. The delimited-file loader lives in `loader`; the query surface
// lives in `store`.
// ---------------------------------------------------------------------------

pub mod error;
pub mod loader;
pub mod store;
pub mod text_match;
pub mod types;
pub mod view;

pub use error::CatalogueError;
pub use store::CatalogueStore;
pub use types::{Book, Language};
pub use view::BookShelf;
