use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use textsmith::generator::write_artifacts;
use textsmith::{plan_artifacts, FenceSpec, Identifier, OutputMode, ResourceTree, SanitizePolicy};

fn write_fixture(dir: &Path, rel: &str, contents: &str) {
    let path = dir.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

fn build_tree(dir: &Path, rel_paths: &[&str]) -> ResourceTree {
    let paths: BTreeSet<PathBuf> = rel_paths.iter().map(PathBuf::from).collect();
    ResourceTree::build(
        dir,
        &paths,
        Identifier::sanitize("Texts", SanitizePolicy::Replace),
        SanitizePolicy::Replace,
        FenceSpec::swift(),
    )
    .unwrap()
}

#[test]
fn test_single_mode_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "docs/readme.txt", "hello");
    write_fixture(dir.path(), "docs/notes/todo.txt", "\"# fixme\"");

    let tree = build_tree(dir.path(), &["docs/readme.txt", "docs/notes/todo.txt"]);
    let plans = plan_artifacts(&tree, OutputMode::Single);
    let out = dir.path().join("Generated");
    let artifacts = write_artifacts(&plans, "Texts", "0.0.0-test", &out, false).unwrap();

    assert_eq!(artifacts.len(), 1);
    let text = std::fs::read_to_string(&artifacts[0].path).unwrap();

    // Root declaration and the namespace skeleton.
    assert!(text.contains("// DO NOT EDIT"));
    assert!(text.contains("enum Texts {}"));
    assert!(text.contains("extension Texts { enum docs {} }"));
    assert!(text.contains("extension Texts.docs { enum notes {} }"));

    // Plain literal for plain content.
    assert!(text.contains("extension Texts.docs {\n    static let readme_txt: String = \"\"\"\nhello\n\"\"\"\n}"));

    // Fenced literal for content with quote/marker adjacency.
    assert!(text.contains("static let todo_txt: String = ##\"\"\"\n\"# fixme\"\n\"\"\"##"));
}

#[test]
fn test_multi_mode_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "docs/readme.txt", "hello");
    write_fixture(dir.path(), "docs/notes/todo.txt", "\"# fixme\"");

    let tree = build_tree(dir.path(), &["docs/readme.txt", "docs/notes/todo.txt"]);
    let plans = plan_artifacts(&tree, OutputMode::Multi);
    let out = dir.path().join("Generated");
    let artifacts = write_artifacts(&plans, "Texts", "0.0.0-test", &out, false).unwrap();
    assert_eq!(artifacts.len(), 3);

    let skeleton = std::fs::read_to_string(out.join("Texts.generated.swift")).unwrap();
    assert!(skeleton.contains("enum Texts {}"));
    assert!(skeleton.contains("extension Texts { enum docs {} }"));
    assert!(skeleton.contains("extension Texts.docs { enum notes {} }"));
    // The skeleton carries no resource content.
    assert!(!skeleton.contains("static let"));

    let readme =
        std::fs::read_to_string(out.join("Texts.docs.readme_txt.generated.swift")).unwrap();
    assert!(readme.contains("static let readme_txt"));
    assert!(readme.contains("hello"));
    // Leaf artifacts re-declare no namespaces.
    assert!(!readme.contains("enum"));

    let todo =
        std::fs::read_to_string(out.join("Texts.docs.notes.todo_txt.generated.swift")).unwrap();
    assert!(todo.contains("static let todo_txt: String = ##\"\"\""));
}

#[test]
fn test_output_is_deterministic_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "b/two.txt", "2");
    write_fixture(dir.path(), "a/one.txt", "1");

    let tree = build_tree(dir.path(), &["b/two.txt", "a/one.txt"]);
    let plans = plan_artifacts(&tree, OutputMode::Single);

    let out_a = dir.path().join("out_a");
    let out_b = dir.path().join("out_b");
    write_artifacts(&plans, "Texts", "0.0.0-test", &out_a, false).unwrap();
    write_artifacts(&plans, "Texts", "0.0.0-test", &out_b, false).unwrap();

    let a = std::fs::read_to_string(out_a.join("Texts.generated.swift")).unwrap();
    let b = std::fs::read_to_string(out_b.join("Texts.generated.swift")).unwrap();
    assert_eq!(a, b);

    // Sorted by canonical form: a.one_txt before b.two_txt.
    let one = a.find("one_txt").unwrap();
    let two = a.find("two_txt").unwrap();
    assert!(one < two);
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "a.txt", "x");

    let tree = build_tree(dir.path(), &["a.txt"]);
    let plans = plan_artifacts(&tree, OutputMode::Single);
    let out = dir.path().join("Generated");
    let artifacts = write_artifacts(&plans, "Texts", "0.0.0-test", &out, true).unwrap();

    assert_eq!(artifacts.len(), 1);
    assert!(!out.exists());
}

#[test]
fn test_version_stamped_in_header() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "a.txt", "x");

    let tree = build_tree(dir.path(), &["a.txt"]);
    let plans = plan_artifacts(&tree, OutputMode::Single);
    let out = dir.path().join("Generated");
    let artifacts = write_artifacts(&plans, "Texts", "9.9.9", &out, false).unwrap();

    let text = std::fs::read_to_string(&artifacts[0].path).unwrap();
    assert!(text.starts_with("// Generated using textsmith 9.9.9"));
}

#[test]
fn test_reserved_words_render_backquoted() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "enum/import.txt", "x");

    let tree = build_tree(dir.path(), &["enum/import.txt"]);
    let plans = plan_artifacts(&tree, OutputMode::Single);
    let out = dir.path().join("Generated");
    let artifacts = write_artifacts(&plans, "Texts", "0.0.0-test", &out, false).unwrap();

    let text = std::fs::read_to_string(&artifacts[0].path).unwrap();
    assert!(text.contains("extension Texts { enum `enum` {} }"));
    assert!(text.contains("extension Texts.`enum` {\n    static let import_txt"));
}
