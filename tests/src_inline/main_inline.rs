use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("web-audit-score").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_run_defaults_to_standard_mode() {
    let cli = parse(&["run", "--input", "snap.json", "--out", "out"]);
    let Command::Run(args) = cli.command else {
        panic!("expected run");
    };
    assert_eq!(args.mode, AuditMode::Standard);
    assert_eq!(args.input, PathBuf::from("snap.json"));
    assert!(args.profile.is_none());
    assert!(!args.log_json);
    assert_eq!(args.verbose, 0);
}

#[test]
fn test_run_accepts_mode_and_flags() {
    let cli = parse(&[
        "run",
        "--input",
        "snap.json",
        "--out",
        "out",
        "--mode",
        "security-focus",
        "--profile",
        "profile.json",
        "--log-json",
        "-vv",
    ]);
    let Command::Run(args) = cli.command else {
        panic!("expected run");
    };
    assert_eq!(args.mode, AuditMode::SecurityFocus);
    assert_eq!(args.profile, Some(PathBuf::from("profile.json")));
    assert!(args.log_json);
    assert_eq!(args.verbose, 2);
}

#[test]
fn test_run_requires_input() {
    let res = Cli::try_parse_from(["web-audit-score", "run", "--out", "out"]);
    assert!(res.is_err());
}

#[test]
fn test_level_for_verbosity() {
    assert_eq!(telemetry::level_for(0), tracing::Level::INFO);
    assert_eq!(telemetry::level_for(1), tracing::Level::DEBUG);
    assert_eq!(telemetry::level_for(5), tracing::Level::TRACE);
}

#[test]
fn test_run_audit_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("snapshot.json");
    std::fs::write(
        &input,
        r#"{"url": "https://example.com", "results": {
            "performance": {"response_time": 300},
            "seo_marketing": {"overall_score": 90},
            "ssl": {"ssl_valid": true},
            "dns": {"has_records": true}
        }}"#,
    )
    .unwrap();
    let out = dir.path().join("out");
    let args = RunArgs {
        input,
        out: out.clone(),
        mode: AuditMode::Standard,
        profile: None,
        log_json: false,
        verbose: 0,
    };
    run_audit(&args).unwrap();
    assert!(out.join("scorecard.json").is_file());
    assert!(out.join("components.tsv").is_file());
}

#[test]
fn test_run_audit_missing_input_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let args = RunArgs {
        input: dir.path().join("absent.json"),
        out: dir.path().join("out"),
        mode: AuditMode::Deep,
        profile: None,
        log_json: false,
        verbose: 0,
    };
    assert!(matches!(
        run_audit(&args),
        Err(CliError::Input(InputError::Io(_)))
    ));
}
