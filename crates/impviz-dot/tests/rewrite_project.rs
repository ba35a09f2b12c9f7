use std::fs;
use std::path::Path;

use tempfile::tempdir;

use impviz_core::index_modules;
use impviz_dot::rewrite_graph;

/// Lay out the example project from the docs:
/// `app/__init__.py`, `app/utils.py`, `app/sub/__init__.py`,
/// `app/sub/helper.py`.
fn write_example_project(root: &Path) {
    let app = root.join("app");
    let sub = app.join("sub");
    fs::create_dir_all(&sub).expect("create package dirs");
    fs::write(app.join("__init__.py"), b"").expect("create app __init__");
    fs::write(app.join("utils.py"), b"").expect("create utils module");
    fs::write(sub.join("__init__.py"), b"").expect("create sub __init__");
    fs::write(sub.join("helper.py"), b"").expect("create helper module");
}

/// The raw text the analyzer produces for that project at one hop:
/// 6 header lines, node and edge declarations, 3 closing lines.
fn analyzer_output() -> String {
    [
        "digraph G {",
        "    concentrate = true;",
        "",
        "    rankdir = TB;",
        "    node [style=filled,fillcolor=\"#ffffff\",fontname=Helvetica,fontsize=10];",
        "",
        "    app [fillcolor=\"#ffffff\"];",
        "    app_sub [fillcolor=\"#feccce\"];",
        "    app_sub_helper [fillcolor=\"#feccce\"];",
        "    app_utils [fillcolor=\"#fee9cc\"];",
        "",
        "    app_sub_helper -> app [weight=2];",
        "    app_utils -> app_sub [weight=2];",
        "    app_utils -> app_sub_helper [weight=2];",
        "    app_utils -> app_sub_helper [weight=9];",
        "",
        "",
        "}",
    ]
    .join("\n")
}

#[test]
fn indexed_project_rewrites_to_compact_graph() {
    let temp = tempdir().expect("create temp dir");
    write_example_project(temp.path());

    let modules = index_modules(
        &temp.path().join("app"),
        &["app".to_string()],
    )
    .expect("index modules");

    let out = rewrite_graph("app", &modules, &analyzer_output()).expect("rewrite graph");

    // Header survives without the dropped directive.
    assert!(out.starts_with("digraph G {\n    rankdir = TB;\n"));
    assert!(!out.contains("concentrate"));

    // The back-edge into the root is gone, and with it the root node.
    assert!(!out.contains("-> app ["));
    assert!(!out.contains("\n    app ["));

    // Both remaining edges survive exactly once, first attributes winning.
    assert!(out.contains("    utils -> sub [weight=2];"));
    assert!(out.contains("    utils -> sub•helper [weight=2];"));
    assert!(!out.contains("weight=9"));

    // Used nodes carry their shortened name as label.
    assert!(out.contains("    sub [fillcolor=\"#feccce\",label=\"sub\"];"));
    assert!(out.contains("    sub•helper [fillcolor=\"#feccce\",label=\"sub•helper\"];"));
    assert!(out.contains("    utils [fillcolor=\"#fee9cc\",label=\"utils\"];"));

    assert!(out.ends_with("}\n"));
}
