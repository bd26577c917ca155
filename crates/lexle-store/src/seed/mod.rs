//! Seed import system
//!
//! Provides:
//! - Definition file format (one category and its words per file)
//! - JSON / YAML parser
//! - The idempotent directory importer and its report

pub mod format;
pub mod importer;
pub mod parser;
pub mod report;

pub use format::{CategoryDefinition, WordDefinition};
pub use importer::{import_all, import_one};
pub use parser::{parse_definition_bytes, parse_definition_file, DefinitionFormat};
pub use report::{FileOutcome, FileReport, ImportReport, ImportStage};
