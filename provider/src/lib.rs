//! Turns Scryfall pages into the compact per-category JSON files.

pub mod error;
pub mod import;
pub mod transform;
pub mod writer;

pub use error::ImportError;
pub use import::{import_and_write, import_category};
pub use transform::SeenArt;
pub use writer::{output_path, write_aggregate};
