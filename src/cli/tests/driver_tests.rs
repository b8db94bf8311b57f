use clap::Parser;
use std::io::Write;

use crate::cli::args::CliArgs;
use crate::cli::driver::{execute, parse_program, read_program, reference_table, run};

const PROGRAM: &str = r#"{
  "type": "Script",
  "directives": [],
  "statements": [
    {
      "type": "VariableDeclarationStatement",
      "declaration": {
        "kind": "var",
        "declarators": [
          {
            "binding": { "type": "BindingIdentifier", "name": "x" },
            "init": { "type": "LiteralStringExpression", "value": "</script>" }
          }
        ]
      }
    },
    {
      "type": "ExpressionStatement",
      "expression": {
        "type": "CompoundAssignmentExpression",
        "binding": { "type": "AssignmentTargetIdentifier", "name": "x" },
        "operator": "+=",
        "expression": { "type": "IdentifierExpression", "name": "y" }
      }
    }
  ]
}"#;

fn write_program() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(PROGRAM.as_bytes()).expect("write program");
    file
}

#[test]
fn test_render_file_in_each_mode() {
    let file = write_program();
    let path = file.path().to_str().expect("utf-8 path");

    let pretty = run(&CliArgs::parse_from(["esgen", path])).expect("pretty run");
    assert_eq!(pretty, "var x = \"</script>\";\nx += y;\n");

    let compact = run(&CliArgs::parse_from(["esgen", "--mode", "compact", path])).expect("compact run");
    assert_eq!(compact, "var x=\"</script>\";x+=y;");

    let web_safe = run(&CliArgs::parse_from(["esgen", "--mode", "web-safe", path])).expect("web-safe run");
    assert_eq!(web_safe, r#"var x="</\x73cript>";x+=y;"#);
}

#[test]
fn test_reference_table() {
    let program = parse_program(PROGRAM).expect("valid program");
    assert_eq!(reference_table(&program), "x write\nx read-write\ny read\n");

    let args = CliArgs::parse_from(["esgen", "--references"]);
    assert_eq!(execute(&program, &args), "x write\nx read-write\ny read\n");
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("missing.json");
    let err = read_program(Some(&missing)).expect_err("missing file");
    assert!(err.to_string().contains("failed to read"), "{err:#}");
}

#[test]
fn test_invalid_json_is_reported() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"{ \"type\": \"Nope\" }").expect("write");
    let err = read_program(Some(file.path())).expect_err("invalid AST");
    assert!(err.to_string().contains("failed to decode AST"), "{err:#}");
}
