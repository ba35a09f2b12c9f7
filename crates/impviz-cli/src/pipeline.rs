//! Core processing pipeline: index modules → analyze → rewrite → rasterize.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use impviz_core::index_modules;
use impviz_dot::rewrite_graph;
use impviz_error::Result;

use crate::ImpvizOptions;
use crate::analyzer;
use crate::output;

/// Render the import diagram for the configured root module.
///
/// This is the whole tool:
/// 1. Walk the project tree and index its modules
/// 2. Obtain the raw dependency graph from the analyzer
/// 3. Rewrite the graph with shortened, deduplicated names
/// 4. Rasterize the rewritten graph to PNG
/// 5. Write the image once, from memory
pub fn render_import_diagram(opts: &ImpvizOptions) -> Result<PathBuf> {
    let module = opts.module.as_str();

    // 1. Index modules
    let index_start = Instant::now();
    let modules = index_modules(Path::new(module), &[module.to_string()])?;
    info!(
        "Module indexing: {:.2}s ({} modules)",
        index_start.elapsed().as_secs_f64(),
        modules.len()
    );

    // 2. Analyze dependencies
    let analyze_start = Instant::now();
    let raw = analyzer::import_graph_dot(module)?;
    info!(
        "Dependency analysis: {:.2}s",
        analyze_start.elapsed().as_secs_f64()
    );

    // 3. Rewrite the graph
    let rewrite_start = Instant::now();
    let dot_source = rewrite_graph(module, &modules, &raw)?;
    info!(
        "Graph rewriting: {:.2}s",
        rewrite_start.elapsed().as_secs_f64()
    );

    // 4. Rasterize
    let render_start = Instant::now();
    let png = output::render_png(&dot_source)?;
    info!(
        "Rasterization: {:.2}s",
        render_start.elapsed().as_secs_f64()
    );

    // 5. Write the image
    output::write_image(module, &png)
}
