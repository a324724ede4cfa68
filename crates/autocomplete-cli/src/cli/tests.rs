use super::*;
use clap::Parser;

#[test]
fn database_alone_defaults_to_interactive_session() {
    let cli = Cli::try_parse_from(["autocomplete", "terms.txt"]).expect("parse");
    assert_eq!(cli.database, PathBuf::from("terms.txt"));
    assert!(cli.command.is_none());
    assert!(!cli.json);
    assert_eq!(cli.limit, None);
}

#[test]
fn query_parses_prefix_and_trailing_global_flags() {
    let cli = Cli::try_parse_from([
        "autocomplete",
        "terms.txt",
        "query",
        "ca",
        "--limit",
        "3",
        "--json",
    ])
    .expect("parse");
    match cli.command {
        Some(Commands::Query(QueryArgs { prefix })) => assert_eq!(prefix, "ca"),
        _ => panic!("expected query command"),
    }
    assert_eq!(cli.limit, Some(3));
    assert!(cli.json);
}

#[test]
fn query_accepts_empty_prefix() {
    let cli = Cli::try_parse_from(["autocomplete", "terms.txt", "query", ""]).expect("parse");
    match cli.command {
        Some(Commands::Query(QueryArgs { prefix })) => assert!(prefix.is_empty()),
        _ => panic!("expected query command"),
    }
}

#[test]
fn policy_flags_parse_value_enums() {
    let cli = Cli::try_parse_from([
        "autocomplete",
        "--parse-policy",
        "reject",
        "--header-check",
        "warn",
        "terms.txt",
        "stats",
    ])
    .expect("parse");
    assert_eq!(cli.parse_policy, Some(ParsePolicyArg::Reject));
    assert_eq!(cli.header_check, Some(HeaderCheckArg::Warn));
    assert!(matches!(cli.command, Some(Commands::Stats)));
}

#[test]
fn unknown_policy_is_rejected() {
    let parsed = Cli::try_parse_from(["autocomplete", "--parse-policy", "ignore", "terms.txt"]);
    assert!(parsed.is_err(), "unknown parse policy must be rejected");
}

#[test]
fn missing_database_is_rejected() {
    assert!(Cli::try_parse_from(["autocomplete"]).is_err());
}
