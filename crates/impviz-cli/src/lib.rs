//! impviz command-line interface.
//!
pub mod analyzer;
pub mod output;
pub mod pipeline;

use std::path::PathBuf;

use impviz_error::Result;

pub use pipeline::render_import_diagram;

/// Options for running impviz.
pub struct ImpvizOptions {
    /// Root module or package to analyze.
    pub module: String,
}

/// Main entry point
pub fn run_main(opts: &ImpvizOptions) -> Result<PathBuf> {
    pipeline::render_import_diagram(opts)
}
