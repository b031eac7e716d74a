use assert_cmd::Command;

const DOC: &str = r#"{"user": {"name": "ada", "age": "36"}, "items": [{"id": 1}]}"#;

fn cli() -> Command {
    Command::cargo_bin("json-object").unwrap()
}

#[test]
fn get_reads_stdin() {
    cli()
        .args(["get", "user.name"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("\"ada\"\n");
}

#[test]
fn get_coerces() {
    cli()
        .args(["get", "user.age", "--as", "int"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("36\n");
}

#[test]
fn get_missing_exits_one() {
    cli()
        .args(["get", "user.email"])
        .write_stdin(DOC)
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn has_prints_boolean() {
    cli()
        .args(["has", "items.anything"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn put_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.json");
    std::fs::write(&path, "{}").unwrap();

    cli()
        .arg("--input")
        .arg(&path)
        .args(["put", "a.b", "true"])
        .assert()
        .success()
        .stdout("{\"a\":{\"b\":true}}\n");
}

#[test]
fn put_conflict_exits_two() {
    cli()
        .args(["put", "user.name.first", "x"])
        .write_stdin(DOC)
        .assert()
        .code(2);
}

#[test]
fn remove_prints_document() {
    cli()
        .args(["remove", "user.age"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("{\"items\":[{\"id\":1}],\"user\":{\"name\":\"ada\"}}\n");
}

#[test]
fn malformed_input_exits_two() {
    cli()
        .arg("fmt")
        .write_stdin("{not json")
        .assert()
        .code(2)
        .stdout("");
}

#[test]
fn oversized_path_exits_two() {
    cli()
        .args(["get", "k".repeat(2000).as_str()])
        .write_stdin(DOC)
        .assert()
        .code(2)
        .stdout("");
}

#[test]
fn fmt_indents() {
    cli()
        .arg("fmt")
        .write_stdin("  {\"b\":1,\"a\":[]}\n")
        .assert()
        .success()
        .stdout("{\n  \"a\": [],\n  \"b\": 1\n}\n");
}
