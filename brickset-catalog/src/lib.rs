//! LEGO set catalog: data model types, JSON loading, and read-only queries.
//!
//! The catalog is loaded once from a JSON array into an immutable
//! [`Repository`], and every query is a single pass over the loaded sets.

pub mod error;
pub mod query;
pub mod repository;
pub mod types;

pub use error::{LoadError, QueryError};
pub use query::{
    BUNDLED_SOURCE, LegoSetRepository, count_with_tag, find_by_number, largest_in_theme,
    names_sorted, names_under_piece_limit, packaging_types, pieces_by_theme, sum_pieces, themes,
};
pub use repository::Repository;
pub use types::*;
