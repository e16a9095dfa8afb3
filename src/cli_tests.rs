use super::*;

use crate::output::OutputFormat;

#[test]
fn parses_root_with_defaults() {
    let cli = Cli::try_parse_from(["linetally", "/tmp/project"]).unwrap();

    assert_eq!(cli.root, std::path::PathBuf::from("/tmp/project"));
    assert!(cli.exclude.is_empty());
    assert!(!cli.gitignore);
    assert!(!cli.fail_fast);
    assert_eq!(cli.format, OutputFormat::Text);
    assert!(cli.output.is_none());
    assert!(!cli.quiet);
}

#[test]
fn missing_root_is_a_usage_error() {
    let result = Cli::try_parse_from(["linetally"]);
    assert!(result.is_err());
}

#[test]
fn exclude_can_repeat() {
    let cli = Cli::try_parse_from([
        "linetally",
        ".",
        "-x",
        "**/build/**",
        "--exclude",
        "**/*.bak",
    ])
    .unwrap();

    assert_eq!(cli.exclude, ["**/build/**", "**/*.bak"]);
}

#[test]
fn format_flag_parses() {
    let cli = Cli::try_parse_from(["linetally", ".", "--format", "json"]).unwrap();
    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn unknown_format_is_rejected() {
    let result = Cli::try_parse_from(["linetally", ".", "--format", "yaml"]);
    assert!(result.is_err());
}

#[test]
fn boolean_flags_parse() {
    let cli =
        Cli::try_parse_from(["linetally", ".", "--gitignore", "--fail-fast", "--quiet"]).unwrap();

    assert!(cli.gitignore);
    assert!(cli.fail_fast);
    assert!(cli.quiet);
}
