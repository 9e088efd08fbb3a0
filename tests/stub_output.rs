//! End-to-end stub generation tests: JSON graph in, `.pyi` text out.

use std::fs;
use std::path::{Path, PathBuf};

use gistub::cli::run_generate;
use gistub::report::RunStatus;
use gistub_gi::GenConfig;

fn generate(graph_json: &str) -> (tempfile::TempDir, gistub::report::RunReport) {
    let dir = tempfile::tempdir().unwrap();
    let graph = dir.path().join("graph.json");
    fs::write(&graph, graph_json).unwrap();
    let report = run_generate(
        &graph,
        &dir.path().join("stubs"),
        &[],
        &GenConfig::default(),
    )
    .unwrap();
    (dir, report)
}

fn stub_text(dir: &Path, rel: &str) -> String {
    fs::read_to_string(dir.join("stubs").join(rel)).unwrap()
}

#[test]
fn minimal_class_stub_matches_exactly() {
    let graph = r#"{
        "modules": [{
            "name": "gi.repository.Demo",
            "exports": {
                "Counter": {"entity": {
                    "name": "Counter",
                    "module": "gi.repository.Demo",
                    "kind": "object",
                    "fields": [{"name": "value", "type": {"tag": "int32"}}],
                    "attrs": {
                        "double": {"callable": {
                            "name": "double",
                            "kind": "method",
                            "return": {"tag": "int32"},
                            "has_container": true
                        }},
                        "value": {"opaque": {"type_name": "getset_descriptor"}}
                    }
                }}
            }
        }]
    }"#;
    let (dir, report) = generate(graph);
    assert_eq!(report.status, RunStatus::Ok);

    let text = stub_text(dir.path(), "gi/repository/Demo.pyi");
    assert_eq!(
        text,
        "import typing\n\
         \n\
         class Counter:\n\
         \x20   def double(self) -> int: ...\n\
         \x20   value = ...  # type: int\n\
         \x20   ...\n"
    );
}

#[test]
fn widget_hierarchy_with_imports_and_out_params() {
    let graph = r#"{
        "modules": [{
            "name": "gi.repository.Gtk",
            "exports": {
                "MAJOR_VERSION": {"value": {"int": {"value": 3}}},
                "Widget": {"entity": {
                    "name": "Widget",
                    "module": "gi.repository.Gtk",
                    "kind": "object",
                    "parent": {"module": "gi.repository.GObject", "name": "Object"},
                    "attrs": {
                        "show": {"callable": {
                            "name": "show",
                            "kind": "method",
                            "return": {"tag": "void"},
                            "has_container": true
                        }},
                        "get_size_request": {"callable": {
                            "name": "get_size_request",
                            "kind": "method",
                            "args": [
                                {"name": "width", "type": {"tag": "int32"}, "direction": "out"},
                                {"name": "height", "type": {"tag": "int32"}, "direction": "out"}
                            ],
                            "return": {"tag": "void"},
                            "has_container": true
                        }},
                        "new_from_name": {"callable": {
                            "name": "new_from_name",
                            "kind": "constructor",
                            "args": [{"name": "name", "type": {"tag": "utf8"}}],
                            "return": {"tag": "interface", "interface": {
                                "entity": {"module": "gi.repository.Gtk", "name": "Widget"}
                            }},
                            "has_container": true
                        }}
                    }
                }}
            }
        }]
    }"#;
    let (dir, report) = generate(graph);
    assert_eq!(report.status, RunStatus::Ok);

    let text = stub_text(dir.path(), "gi/repository/Gtk.pyi");
    assert!(text.starts_with("import gi.repository.GObject\nimport typing\n"));
    assert!(text.contains("class Widget(gi.repository.GObject.GObject):"));
    assert!(text.contains("    def show(self) -> None: ..."));
    assert!(
        text.contains("    def get_size_request(self) -> typing.Tuple[int, int]: ...")
    );
    assert!(text.contains("    @staticmethod\n    def new_from_name(name: str) -> Widget: ..."));
    assert!(text.contains("MAJOR_VERSION = ...  # type: int"));
}

#[test]
fn boolean_strip_wrapper_survives_end_to_end() {
    let graph = r#"{
        "modules": [{
            "name": "gi.repository.Gtk",
            "exports": {
                "TreeSelection": {"entity": {
                    "name": "TreeSelection",
                    "module": "gi.repository.Gtk",
                    "kind": "object",
                    "attrs": {
                        "get_selected": {"wrapped": {
                            "qualname": "strip_boolean_result.<locals>.wrapped",
                            "wrapped": {
                                "name": "get_selected",
                                "kind": "method",
                                "args": [
                                    {"name": "model", "type": {"tag": "utf8"}, "direction": "out"},
                                    {"name": "iter", "type": {"tag": "int32"}, "direction": "out"}
                                ],
                                "return": {"tag": "boolean"},
                                "has_container": true
                            }
                        }}
                    }
                }}
            }
        }]
    }"#;
    let (dir, report) = generate(graph);
    assert_eq!(report.status, RunStatus::Ok);
    let text = stub_text(dir.path(), "gi/repository/Gtk.pyi");
    assert!(text.contains("    def get_selected(self) -> typing.Tuple[str, int]: ..."));
}

#[test]
fn enum_members_and_undeclared_values() {
    let graph = r#"{
        "modules": [{
            "name": "gi.repository.Gtk",
            "exports": {
                "Align": {"entity": {
                    "name": "Align",
                    "module": "gi.repository.Gtk",
                    "kind": "enum",
                    "members": {"FILL": 0, "START": 1},
                    "attrs": {
                        "FILL": {"enum-member": {"module": "gi.repository.Gtk", "type_name": "Align", "value": 0}},
                        "START": {"enum-member": {"module": "gi.repository.Gtk", "type_name": "Align", "value": 1}},
                        "BOGUS": {"enum-member": {"module": "gi.repository.Gtk", "type_name": "Align", "value": 9}}
                    }
                }}
            }
        }]
    }"#;
    let (dir, report) = generate(graph);
    assert_eq!(report.status, RunStatus::Ok);

    let text = stub_text(dir.path(), "gi/repository/Gtk.pyi");
    assert!(text.contains("    FILL = ...  # type: Align"));
    assert!(text.contains("    START = ...  # type: Align"));
    assert!(!text.contains("BOGUS"));

    let diags = &report.modules[0].diagnostics;
    assert!(diags.iter().any(|d| d.code == "enum-member"));
}

#[test]
fn override_module_lands_in_the_repository_tree() {
    let graph = r#"{
        "modules": [{
            "name": "gi.overrides.Gtk",
            "has_overrides": true,
            "exports": {
                "Widget": {"entity": {
                    "name": "Widget",
                    "module": "gi.overrides.Gtk",
                    "kind": "object",
                    "type_hints": {"props": "gi.repository.GObject.GProps"},
                    "attrs": {
                        "props": {"property": null},
                        "helper": {"py-function": {
                            "params": [
                                {"name": "self"},
                                {"name": "width", "annotation": "int", "default": "0"}
                            ],
                            "returns": "bool"
                        }}
                    }
                }}
            }
        }]
    }"#;
    let (dir, report) = generate(graph);
    assert_eq!(report.status, RunStatus::Ok);
    assert_eq!(
        report.modules[0].stub_path.as_deref().map(PathBuf::from),
        Some(dir.path().join("stubs/gi/repository/Gtk.pyi"))
    );

    let text = stub_text(dir.path(), "gi/repository/Gtk.pyi");
    assert!(text.contains("    def helper(self, width: int = 0) -> bool: ..."));
    assert!(text.contains("    props = ...  # type: gi.repository.GObject.GProps"));
    assert!(text.starts_with("import gi.repository.GObject\nimport typing\n"));
}

#[test]
fn struct_inconsistency_fails_only_that_module() {
    let graph = r#"{
        "modules": [
            {
                "name": "gi.repository.GLib",
                "exports": {
                    "PRIORITY_DEFAULT": {"value": {"int": {"value": 0}}}
                }
            },
            {
                "name": "gi.repository.Gdk",
                "exports": {
                    "Rectangle": {"entity": {
                        "name": "Rectangle",
                        "module": "gi.repository.Gdk",
                        "kind": "struct",
                        "attrs": {"bogus": {"property": null}}
                    }}
                }
            }
        ]
    }"#;
    let (dir, report) = generate(graph);
    assert_eq!(report.status, RunStatus::Error);

    let glib = report
        .modules
        .iter()
        .find(|m| m.module == "gi.repository.GLib")
        .unwrap();
    assert_eq!(glib.status, RunStatus::Ok);
    assert!(dir.path().join("stubs/gi/repository/GLib.pyi").exists());

    let gdk = report
        .modules
        .iter()
        .find(|m| m.module == "gi.repository.Gdk")
        .unwrap();
    assert_eq!(gdk.status, RunStatus::Error);
    assert!(gdk.error.as_deref().unwrap().contains("Rectangle"));
    assert!(!dir.path().join("stubs/gi/repository/Gdk.pyi").exists());
}

#[test]
fn top_level_module_stub_lands_at_the_stubs_root() {
    let graph = r#"{
        "modules": [{
            "name": "cairo",
            "exports": {
                "version": {"value": {"str": {"value": "1.16.0"}}}
            }
        }]
    }"#;
    let (dir, report) = generate(graph);
    assert_eq!(report.status, RunStatus::Ok);
    let text = stub_text(dir.path(), "cairo.pyi");
    assert_eq!(text, "import typing\nversion = ...  # type: str\n");
}

#[test]
fn package_markers_are_created() {
    let graph = r#"{
        "modules": [{
            "name": "gi.repository.GLib",
            "exports": {}
        }]
    }"#;
    let (dir, report) = generate(graph);
    assert_eq!(report.status, RunStatus::Ok);
    assert!(dir.path().join("stubs/gi/__init__.py").exists());
    assert!(dir.path().join("stubs/gi/repository/__init__.py").exists());
}
