use clap::Parser;
use std::path::PathBuf;

use crate::cli::args::{CliArgs, Mode, NewLine};
use esgen_emitter::{NewLineKind, PrintOptions, RenderMode};

#[test]
fn test_defaults() {
    let args = CliArgs::parse_from(["esgen"]);
    assert_eq!(args.mode, Mode::Pretty);
    assert_eq!(args.indent, 2);
    assert_eq!(args.new_line, NewLine::Lf);
    assert!(!args.references);
    assert_eq!(args.input, None);
    assert_eq!(args.print_options(), PrintOptions::default());
}

#[test]
fn test_all_flags() {
    let args = CliArgs::parse_from([
        "esgen",
        "--mode",
        "web-safe",
        "--indent",
        "4",
        "--new-line",
        "crlf",
        "--references",
        "program.json",
    ]);
    assert_eq!(args.mode, Mode::WebSafe);
    assert!(args.references);
    assert_eq!(args.input, Some(PathBuf::from("program.json")));

    let options = args.print_options();
    assert_eq!(options.mode, RenderMode::WebSafe);
    assert_eq!(options.indent_width, 4);
    assert_eq!(options.new_line, NewLineKind::CarriageReturnLineFeed);
}

#[test]
fn test_mode_names() {
    assert_eq!(CliArgs::parse_from(["esgen", "-m", "compact"]).mode, Mode::Compact);
    assert_eq!(CliArgs::parse_from(["esgen", "--mode", "websafe"]).mode, Mode::WebSafe);
    assert!(CliArgs::try_parse_from(["esgen", "--mode", "minified"]).is_err());
}
