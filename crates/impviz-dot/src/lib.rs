//! Graph rewriting module for compacting the analyzer's DOT output.
//!
//! The dependency analyzer emits one node per flattened module identifier
//! (`app_sub_helper`) plus styling attributes. This crate rewrites that text
//! into a smaller document: identifiers are shortened through the module
//! index (`sub•helper`), nodes and edges are deduplicated, self-loops and
//! back-edges into the project root are discarded, and every surviving node
//! gets a `label` attribute carrying its shortened name.
//!
//! # Module Structure
//!
//! - [`attrs`]: attribute-block parsing and formatting
//! - [`rewrite`]: line-oriented parsing, shortening and emission

mod attrs;
mod rewrite;

pub use attrs::AttrMap;
pub use rewrite::{ImportGraph, NAME_SEPARATOR, rewrite_graph, shorten};
