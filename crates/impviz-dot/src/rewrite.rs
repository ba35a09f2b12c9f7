//! Line-oriented parsing, shortening and emission of the dependency graph.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt::Write;

use tracing::debug;

use impviz_core::ModuleIndex;
use impviz_error::{Error, Result};

use crate::attrs::AttrMap;

/// Joins display-name components into a shortened node name.
pub const NAME_SEPARATOR: &str = "•";

/// DOT keywords a shortened name must not collide with; colliding names are
/// suffixed with `_`.
const RESERVED_KEYWORDS: [&str; 3] = ["graph", "node", "edge"];

/// Layout directive dropped from the retained header.
const DROPPED_DIRECTIVE: &str = "concentrate";

/// Fixed-size header block at the top of the analyzer's output.
const HEADER_LINES: usize = 6;

/// Fixed closing boilerplate at the bottom of the analyzer's output.
const FOOTER_LINES: usize = 3;

const ARROW: &str = "->";

/// Shorten a raw analyzer identifier via the module index.
///
/// The trimmed identifier must have an index entry; its display components
/// are joined with [`NAME_SEPARATOR`]. Lookup is idempotent: shortening the
/// same raw identifier always yields the same name.
pub fn shorten(name: &str, modules: &ModuleIndex) -> Result<String> {
    let key = name.trim();
    let components = modules.get(key).ok_or_else(|| {
        Error::module_not_found(key).with_operation("dot::shorten")
    })?;

    let short = components.join(NAME_SEPARATOR);
    if RESERVED_KEYWORDS.contains(&short.as_str()) {
        return Ok(format!("{short}_"));
    }
    Ok(short)
}

/// The parsed, shortened and deduplicated form of the analyzer's output.
///
/// Nodes keep the attributes of their first occurrence; edges keep their
/// first-seen attributes and their first-seen order. Only nodes that are an
/// endpoint of a retained edge are emitted.
pub struct ImportGraph {
    header: Vec<String>,
    nodes: BTreeMap<String, AttrMap>,
    edges: Vec<((String, String), AttrMap)>,
    used: BTreeSet<String>,
}

impl ImportGraph {
    /// Parse the analyzer's raw DOT text.
    ///
    /// `root_module` is the unshortened root name; edges whose target
    /// shortens to it are back-edges into the project itself and are
    /// discarded, as are self-loops and duplicate ordered pairs.
    pub fn parse(root_module: &str, modules: &ModuleIndex, raw: &str) -> Result<Self> {
        let lines: Vec<&str> = raw.lines().collect();
        if lines.len() < HEADER_LINES + FOOTER_LINES {
            return Err(Error::parse_failed(format!(
                "expected at least {} lines of graph text, got {}",
                HEADER_LINES + FOOTER_LINES,
                lines.len()
            ))
            .with_operation("dot::ImportGraph::parse"));
        }

        let header: Vec<String> = lines[..HEADER_LINES]
            .iter()
            .filter(|line| !line.is_empty() && !line.contains(DROPPED_DIRECTIVE))
            .map(|line| line.to_string())
            .collect();

        let body = &lines[HEADER_LINES..lines.len() - FOOTER_LINES];

        let mut nodes: BTreeMap<String, AttrMap> = BTreeMap::new();
        for line in body.iter().filter(|l| !l.contains(ARROW) && !l.is_empty()) {
            let (name, block) = line.split_once('[').ok_or_else(|| {
                Error::parse_failed("node declaration without attribute block")
                    .with_operation("dot::ImportGraph::parse")
                    .with_context("line", *line)
            })?;

            let short = shorten(name, modules)?;
            // First occurrence of a shortened name wins.
            if nodes.contains_key(&short) {
                continue;
            }
            nodes.insert(short, AttrMap::parse(block)?);
        }

        let mut edges: Vec<((String, String), AttrMap)> = Vec::new();
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut used: BTreeSet<String> = BTreeSet::new();
        for line in body.iter().filter(|l| l.contains(ARROW)) {
            let (expr, block) = line.split_once('[').ok_or_else(|| {
                Error::parse_failed("edge declaration without attribute block")
                    .with_operation("dot::ImportGraph::parse")
                    .with_context("line", *line)
            })?;

            let mut parts = expr.split_whitespace();
            let (Some(from), Some(arrow), Some(to), None) =
                (parts.next(), parts.next(), parts.next(), parts.next())
            else {
                return Err(Error::parse_failed("edge expression is not `from -> to`")
                    .with_operation("dot::ImportGraph::parse")
                    .with_context("line", *line));
            };
            if arrow != ARROW {
                return Err(Error::parse_failed("edge expression is not `from -> to`")
                    .with_operation("dot::ImportGraph::parse")
                    .with_context("line", *line));
            }

            let from = shorten(from, modules)?;
            let to = shorten(to, modules)?;

            if from == to {
                continue;
            }
            if to == root_module {
                continue;
            }
            if !seen.insert((from.clone(), to.clone())) {
                continue;
            }

            let attrs = AttrMap::parse(block)?;
            used.insert(from.clone());
            used.insert(to.clone());
            edges.push(((from, to), attrs));
        }

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            used = used.len(),
            "parsed dependency graph"
        );

        Ok(Self {
            header,
            nodes,
            edges,
            used,
        })
    }

    /// Emit the rewritten DOT document.
    ///
    /// Retained header lines come first, then one declaration per used node
    /// (sorted by shortened name, with a `label` attribute appended), then
    /// the retained edges in first-seen order, then the closing brace.
    ///
    /// A used endpoint without a node declaration means the analyzer output
    /// and the module index disagree; that is an error, not something to
    /// reconcile here.
    pub fn to_dot(&self) -> Result<String> {
        let estimated = self.used.len() * 80 + self.edges.len() * 60 + 160;
        let mut out = String::with_capacity(estimated);

        for line in &self.header {
            let _ = writeln!(out, "{line}");
        }

        for name in &self.used {
            let attrs = self.nodes.get(name).ok_or_else(|| {
                Error::graph_invalid(format!("edge endpoint '{name}' has no node declaration"))
                    .with_operation("dot::ImportGraph::to_dot")
                    .with_context("node", name.clone())
            })?;

            let mut attrs = attrs.clone();
            attrs.insert("label", format!("\"{name}\""));
            let _ = writeln!(out, "    {name} {}", attrs.to_dot());
        }

        for ((from, to), attrs) in &self.edges {
            let _ = writeln!(out, "    {from} {ARROW} {to} {}", attrs.to_dot());
        }

        out.push('}');
        out.push('\n');
        Ok(out)
    }
}

/// One-call form: parse `raw` and emit the rewritten document.
pub fn rewrite_graph(root_module: &str, modules: &ModuleIndex, raw: &str) -> Result<String> {
    ImportGraph::parse(root_module, modules, raw)?.to_dot()
}
