// tests/command_parse.rs

use cmdlauncher::config::CommandSpec;
use cmdlauncher::errors::ParseError;

#[test]
fn parses_name_executable_and_arguments() {
    let spec = CommandSpec::parse("power shell\npowershell\n-Command Get-Location").unwrap();

    assert_eq!(spec.name(), "power shell");
    assert_eq!(spec.executable(), "powershell");
    assert_eq!(spec.arguments(), "-Command Get-Location");
}

#[test]
fn single_line_is_malformed() {
    let result = CommandSpec::parse("invalid command");
    assert_eq!(result, Err(ParseError::MalformedCommandBlock { lines: 1 }));
}

#[test]
fn trims_every_line() {
    let spec = CommandSpec::parse("  a  \n  b  \n  c  ").unwrap();

    assert_eq!(spec.name(), "a");
    assert_eq!(spec.executable(), "b");
    assert_eq!(spec.arguments(), "c");
}

#[test]
fn trims_surrounding_whitespace_of_whole_block() {
    let spec =
        CommandSpec::parse("   power shell   \n   powershell   \n   -Command Get-Location   ")
            .unwrap();

    assert_eq!(spec.name(), "power shell");
    assert_eq!(spec.executable(), "powershell");
    assert_eq!(spec.arguments(), "-Command Get-Location");
}

#[test]
fn blank_lines_only_is_malformed() {
    assert!(CommandSpec::parse("\n\n").is_err());
    assert!(CommandSpec::parse("").is_err());
    assert!(CommandSpec::parse("   \n \t \n  ").is_err());
}

#[test]
fn two_lines_is_malformed() {
    assert_eq!(
        CommandSpec::parse("name\nexec"),
        Err(ParseError::MalformedCommandBlock { lines: 2 })
    );
    // Trailing newlines are trimmed away before counting.
    assert!(CommandSpec::parse("name\nexec\n\n\n").is_err());
}

#[test]
fn extra_lines_are_ignored() {
    let spec =
        CommandSpec::parse("power shell\npowershell\n-Command Get-Location\nextra line").unwrap();

    assert_eq!(spec.name(), "power shell");
    assert_eq!(spec.executable(), "powershell");
    assert_eq!(spec.arguments(), "-Command Get-Location");
}

#[test]
fn non_latin_text_is_preserved() {
    let spec = CommandSpec::parse("パワーシェル\npowershell\n-Command Get-Location").unwrap();

    assert_eq!(spec.name(), "パワーシェル");
    assert_eq!(spec.executable(), "powershell");
    assert_eq!(spec.arguments(), "-Command Get-Location");

    let spec = CommandSpec::parse("Редактор\nvim\n--clean файл.txt").unwrap();
    assert_eq!(spec.name(), "Редактор");
    assert_eq!(spec.arguments(), "--clean файл.txt");
}

#[test]
fn crlf_line_endings_are_trimmed() {
    let spec = CommandSpec::parse("name\r\nexec\r\nargs\r\n").unwrap();

    assert_eq!(spec.name(), "name");
    assert_eq!(spec.executable(), "exec");
    assert_eq!(spec.arguments(), "args");
}

#[test]
fn blank_argument_line_is_allowed_when_followed_by_content() {
    let spec = CommandSpec::parse("editor\nnvim\n\n# no arguments").unwrap();

    assert_eq!(spec.executable(), "nvim");
    assert_eq!(spec.arguments(), "");
}

#[test]
fn blank_executable_line_is_malformed() {
    let result = CommandSpec::parse("editor\n\n--clean");
    assert_eq!(
        result,
        Err(ParseError::BlankExecutable {
            name: "editor".to_string()
        })
    );

    // Three non-blank lines are not enough when the executable slot is empty.
    assert!(matches!(
        CommandSpec::parse("a\n\nb\nc"),
        Err(ParseError::BlankExecutable { .. })
    ));
}

#[test]
fn from_str_matches_parse() {
    let spec: CommandSpec = "a\nb\nc".parse().unwrap();
    assert_eq!(spec, CommandSpec::parse("a\nb\nc").unwrap());
}

#[test]
fn display_renders_three_lines() {
    let spec = CommandSpec::parse("  a  \n  b  \n  c d  \n  ignored").unwrap();
    assert_eq!(spec.to_string(), "a\nb\nc d");
}
