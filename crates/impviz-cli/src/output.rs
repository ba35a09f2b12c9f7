//! Rasterization via Graphviz and final image placement.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use impviz_error::{Error, Result};

/// Binary name of the Graphviz layout engine.
pub const RENDERER_BIN: &str = "dot";

/// Images land here when the directory exists in the invocation directory.
const IMAGE_DIR: &str = "uml";

/// Rasterize DOT text to PNG bytes by piping it through Graphviz.
pub fn render_png(dot_source: &str) -> Result<Vec<u8>> {
    let mut child = Command::new(RENDERER_BIN)
        .arg("-Tpng")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            Error::render_failed(format!("failed to spawn {RENDERER_BIN}"))
                .with_operation("output::render_png")
                .set_source(e)
        })?;

    // Feed the graph text, then drop the handle so the renderer sees EOF.
    {
        let mut stdin = child.stdin.take().ok_or_else(|| {
            Error::render_failed("renderer stdin was not captured")
                .with_operation("output::render_png")
        })?;
        stdin.write_all(dot_source.as_bytes()).map_err(|e| {
            Error::render_failed("failed to write graph text to renderer")
                .with_operation("output::render_png")
                .set_source(e)
        })?;
    }

    let output = child.wait_with_output().map_err(|e| {
        Error::render_failed("failed to read renderer output")
            .with_operation("output::render_png")
            .set_source(e)
    })?;

    if !output.status.success() {
        return Err(
            Error::render_failed(String::from_utf8_lossy(&output.stderr).trim())
                .with_operation("output::render_png")
                .with_context("status", output.status.to_string()),
        );
    }

    debug!(bytes = output.stdout.len(), "rendered png");
    Ok(output.stdout)
}

/// Target path for the diagram: `uml/<module>.png` when a `uml` directory
/// exists under `base`, else `<module>.png` directly under `base`.
fn image_path(base: &Path, module: &str) -> PathBuf {
    let image_dir = base.join(IMAGE_DIR);
    if image_dir.is_dir() {
        image_dir.join(format!("{module}.png"))
    } else {
        base.join(format!("{module}.png"))
    }
}

/// Write the fully buffered PNG once, into the invocation directory.
pub fn write_image(module: &str, png: &[u8]) -> Result<PathBuf> {
    let target = image_path(Path::new("."), module);

    fs::write(&target, png)
        .map_err(|e| Error::from(e).with_context("path", target.display().to_string()))?;

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn image_lands_in_uml_directory_when_present() {
        let temp = tempdir().expect("create temp dir");
        fs::create_dir(temp.path().join("uml")).expect("create uml dir");

        let target = image_path(temp.path(), "app");
        assert_eq!(target, temp.path().join("uml").join("app.png"));
    }

    #[test]
    fn image_falls_back_to_invocation_directory() {
        let temp = tempdir().expect("create temp dir");

        let target = image_path(temp.path(), "app");
        assert_eq!(target, temp.path().join("app.png"));
    }

    #[test]
    fn uml_file_does_not_count_as_directory() {
        let temp = tempdir().expect("create temp dir");
        fs::write(temp.path().join("uml"), b"").expect("create uml file");

        let target = image_path(temp.path(), "app");
        assert_eq!(target, temp.path().join("app.png"));
    }
}
