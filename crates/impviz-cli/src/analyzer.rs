//! Thin adapter over the external `pydeps` dependency analyzer.
//!
//! The analyzer is an opaque subprocess boundary: invoke it with arguments,
//! capture its stdout as DOT text. Nothing of its internals is reproduced
//! here.

use std::process::Command;

use tracing::debug;

use impviz_error::{Error, ErrorKind, Result};

/// Binary name of the analyzer.
pub const ANALYZER_BIN: &str = "pydeps";

/// One hop of fan-out/fan-in, DOT text on stdout, no image side effects.
const ANALYZER_ARGS: [&str; 4] = ["--max-bacon", "1", "--show-dot", "--no-output"];

/// Obtain the raw dependency graph for `module` as DOT text.
pub fn import_graph_dot(module: &str) -> Result<String> {
    debug!(module, "invoking {}", ANALYZER_BIN);

    let output = Command::new(ANALYZER_BIN)
        .arg(module)
        .args(ANALYZER_ARGS)
        .output()
        .map_err(|e| {
            Error::analyzer_failed(format!("failed to spawn {ANALYZER_BIN}"))
                .with_operation("analyzer::import_graph_dot")
                .with_context("module", module)
                .set_source(e)
        })?;

    if !output.status.success() {
        return Err(
            Error::analyzer_failed(String::from_utf8_lossy(&output.stderr).trim())
                .with_operation("analyzer::import_graph_dot")
                .with_context("module", module)
                .with_context("status", output.status.to_string()),
        );
    }

    String::from_utf8(output.stdout).map_err(|e| {
        Error::new(ErrorKind::EncodingError, "analyzer output is not valid UTF-8")
            .with_operation("analyzer::import_graph_dot")
            .with_context("module", module)
            .set_source(e)
    })
}
