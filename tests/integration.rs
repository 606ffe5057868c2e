use projsnap::{SnapshotBuilder, output, snapshot};
use std::fs;
use tempfile::tempdir;

#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.py"), "print('hi')").unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/util.py"), "def util(): pass").unwrap();
    fs::write(dir.path().join("README.md"), "# demo").unwrap();

    let options = SnapshotBuilder::new(dir.path()).build();
    let output_path = dir.path().join(&options.output_file);
    let structure_path = dir.path().join(&options.structure_file);

    let result = snapshot(options).unwrap();
    output::write_markdown(&result, &output_path).unwrap();
    output::write_structure_only(&result, &structure_path).unwrap();

    let full = fs::read_to_string(&output_path).unwrap();
    assert!(full.starts_with("# PROJECT STRUCTURE\n\n```\n"));
    assert!(full.contains("# FILE CONTENTS"));
    assert!(full.contains("## main.py"));
    assert!(full.contains("```python\nprint('hi')\n```"));
    assert!(full.contains("## src/util.py"));
    assert!(full.contains("```markdown\n# demo\n```"));

    let structure = fs::read_to_string(&structure_path).unwrap();
    assert!(structure.contains("├── README.md"));
    assert!(structure.contains("└── src/"));
    assert!(!structure.contains("# FILE CONTENTS"));
    assert!(!structure.contains("print('hi')"));
}

#[test]
fn integration_rerun_after_write_is_stable() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "x = 1").unwrap();
    fs::write(dir.path().join("b.md"), "notes").unwrap();

    let options = SnapshotBuilder::new(dir.path()).build();
    let output_path = dir.path().join(&options.output_file);
    let structure_path = dir.path().join(&options.structure_file);

    let first = snapshot(options).unwrap();
    output::write_markdown(&first, &output_path).unwrap();
    output::write_structure_only(&first, &structure_path).unwrap();

    // The written outputs are self-excluded, so a second run over the now
    // modified directory sees the same project.
    let second = snapshot(SnapshotBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(first.tree, second.tree);
    assert_eq!(first.files.len(), second.files.len());

    output::write_markdown(&second, &output_path).unwrap();
    let full = fs::read_to_string(&output_path).unwrap();
    assert!(!full.contains("# PROJECT STRUCTURE\n\n```\n# PROJECT STRUCTURE"));
}

#[test]
fn integration_json_format_round_trips() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "x = 1").unwrap();
    let result = snapshot(SnapshotBuilder::new(dir.path()).build()).unwrap();
    let json = output::format_snapshot(&result, output::OutputFormat::Json, false);
    let parsed: projsnap::Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.tree, result.tree);
    assert_eq!(parsed.files.len(), 1);
    assert_eq!(parsed.files[0].content, "x = 1");
}
