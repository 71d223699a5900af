use super::*;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_open() {
    match parse(&["ltm", "open", "https://example.com/post"]) {
        CliCommand::Open { url } => assert_eq!(url, "https://example.com/post"),
        _ => panic!("expected Open"),
    }
}

#[test]
fn cli_parse_open_bare_domain() {
    match parse(&["ltm", "open", "example.com"]) {
        CliCommand::Open { url } => assert_eq!(url, "example.com"),
        _ => panic!("expected Open"),
    }
}

#[test]
fn cli_parse_search() {
    match parse(&["ltm", "search", "https://example.com"]) {
        CliCommand::Search { url, no_open } => {
            assert_eq!(url, "https://example.com");
            assert!(!no_open);
        }
        _ => panic!("expected Search"),
    }
}

#[test]
fn cli_parse_search_no_open() {
    match parse(&["ltm", "search", "example.com", "--no-open"]) {
        CliCommand::Search { url, no_open } => {
            assert_eq!(url, "example.com");
            assert!(no_open);
        }
        _ => panic!("expected Search with no_open"),
    }
}

#[test]
fn cli_parse_panel() {
    match parse(&["ltm", "panel"]) {
        CliCommand::Panel { page_url } => assert!(page_url.is_none()),
        _ => panic!("expected Panel"),
    }
}

#[test]
fn cli_parse_panel_with_page_url() {
    match parse(&["ltm", "panel", "--page-url", "https://example.com/now"]) {
        CliCommand::Panel { page_url } => {
            assert_eq!(page_url.as_deref(), Some("https://example.com/now"));
        }
        _ => panic!("expected Panel with page_url"),
    }
}

#[test]
fn cli_parse_lang_list() {
    match parse(&["ltm", "lang"]) {
        CliCommand::Lang { code } => assert!(code.is_none()),
        _ => panic!("expected Lang"),
    }
}

#[test]
fn cli_parse_lang_set() {
    match parse(&["ltm", "lang", "en"]) {
        CliCommand::Lang { code } => assert_eq!(code.as_deref(), Some("en")),
        _ => panic!("expected Lang with code"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["ltm", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}
