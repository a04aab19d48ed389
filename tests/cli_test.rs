use clap::Parser;
use create_halo_plugin::cli::{Args, UiTool};
use create_halo_plugin::constants::BUNDLED_TEMPLATE_DIR;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("create-halo-plugin")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_args() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.project_dir, None);
    assert_eq!(parsed.name, None);
    assert_eq!(parsed.ui_tool, None);
    assert_eq!(parsed.template, PathBuf::from(BUNDLED_TEMPLATE_DIR));
    assert!(!parsed.no_ui);
    assert!(!parsed.yes);
    assert!(!parsed.verbose);
}

#[test]
fn test_project_dir() {
    let parsed = Args::try_parse_from(make_args(&["./my-awesome-plugin"])).unwrap();
    assert_eq!(parsed.project_dir, Some(PathBuf::from("./my-awesome-plugin")));
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--name",
        "links",
        "--domain",
        "run.halo",
        "--author",
        "jane",
        "--ui-tool",
        "vite",
        "--template",
        "./tpl",
        "--classification",
        "./tpl.yaml",
        "--yes",
        "--verbose",
        "out",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.name.as_deref(), Some("links"));
    assert_eq!(parsed.domain.as_deref(), Some("run.halo"));
    assert_eq!(parsed.author.as_deref(), Some("jane"));
    assert_eq!(parsed.ui_tool, Some(UiTool::Vite));
    assert_eq!(parsed.template, PathBuf::from("./tpl"));
    assert_eq!(parsed.classification, Some(PathBuf::from("./tpl.yaml")));
    assert!(parsed.yes);
    assert!(parsed.verbose);
    assert_eq!(parsed.project_dir, Some(PathBuf::from("out")));
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-n", "links", "-d", "run.halo", "-u", "rsbuild", "-y", "-v"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.ui_tool, Some(UiTool::Rsbuild));
    assert!(parsed.yes);
    assert!(parsed.verbose);
}

#[test]
fn test_no_ui_conflicts_with_ui_tool() {
    let args = make_args(&["--no-ui", "--ui-tool", "vite"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_unknown_ui_tool() {
    let args = make_args(&["--ui-tool", "webpack"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["./one", "./two"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_ui_tool_names() {
    assert_eq!(UiTool::Rsbuild.as_str(), "rsbuild");
    assert_eq!(UiTool::Vite.as_str(), "vite");
    assert_eq!(UiTool::all(), [UiTool::Rsbuild, UiTool::Vite]);
}
