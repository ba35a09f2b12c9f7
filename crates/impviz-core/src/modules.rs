//! Module discovery for Python projects.
//!
//! Walks the project tree once and builds a [`ModuleIndex`]: a mapping from
//! the flattened identifiers the dependency analyzer emits (path components
//! joined with `_`) to the ordered display-name components shown in the
//! rendered diagram.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use impviz_error::{Error, ErrorKind, Result};

/// File stem of a package initializer. Initializer files never get an index
/// entry of their own; the containing directory's entry stands in for both.
pub const INIT_STEM: &str = "__init__";

/// Extension of indexable source files.
const PYTHON_EXT: &str = "py";

/// Mapping from flattened module key (components joined with `_`) to the
/// display-name component sequence. Ordered for deterministic iteration.
pub type ModuleIndex = BTreeMap<String, Vec<String>>;

/// Build the module index for the tree rooted at `root`.
///
/// `root_components` seeds the accumulated component sequence; callers pass
/// the root module name as a single element (e.g. `["app"]`).
///
/// Every directory and every non-initializer `.py` file below `root` yields
/// exactly one entry:
/// - a directory's display name is its component sequence with the leading
///   root component dropped, unless the sequence is the root alone;
/// - a file's display name is its component sequence with the leading root
///   component dropped.
///
/// Other files yield no entry. The flattened key is always the full
/// component sequence joined with `_`, independent of the display name.
pub fn index_modules(root: &Path, root_components: &[String]) -> Result<ModuleIndex> {
    let mut modules = ModuleIndex::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            Error::new(ErrorKind::TraversalFailed, e.to_string())
                .with_operation("modules::index_modules")
                .with_context("root", root.display().to_string())
                .set_source(e)
        })?;

        let components = accumulate(root, root_components, entry.path(), entry.depth())?;

        if entry.file_type().is_dir() {
            let display = if components.len() > 1 {
                components[1..].to_vec()
            } else {
                components.clone()
            };
            modules.insert(components.join("_"), display);
        } else if entry.file_type().is_file() && is_module_file(entry.path()) {
            let display = components[1..].to_vec();
            modules.insert(components.join("_"), display);
        }
    }

    debug!(count = modules.len(), root = %root.display(), "indexed modules");
    Ok(modules)
}

/// Check whether a file registers as a module: a `.py` file whose stem is
/// not the package initializer.
fn is_module_file(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str());
    let stem = path.file_stem().and_then(|s| s.to_str());
    ext == Some(PYTHON_EXT) && stem.is_some() && stem != Some(INIT_STEM)
}

/// Component sequence for `path`: the root's seed components followed by the
/// filename stem of every path component below the root.
fn accumulate(
    root: &Path,
    root_components: &[String],
    path: &Path,
    depth: usize,
) -> Result<Vec<String>> {
    let mut components = root_components.to_vec();
    if depth == 0 {
        return Ok(components);
    }

    let relative = path.strip_prefix(root).map_err(|e| {
        Error::new(ErrorKind::TraversalFailed, e.to_string())
            .with_operation("modules::accumulate")
            .with_context("path", path.display().to_string())
            .set_source(e)
    })?;

    for part in relative.iter() {
        let stem = Path::new(part)
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                Error::new(ErrorKind::TraversalFailed, "path component is not valid UTF-8")
                    .with_operation("modules::accumulate")
                    .with_context("path", path.display().to_string())
            })?;
        components.push(stem.to_string());
    }

    Ok(components)
}
