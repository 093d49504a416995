use super::*;
use crate::fixtures::{sample_dataset, write_file};

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["g2000-report"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

fn run_args(cli: Cli) -> RunArgs {
    match cli.command {
        Command::Run(args) => args,
        other => panic!("expected run, got {other:?}"),
    }
}

#[test]
fn test_run_defaults() {
    let args = run_args(parse(&["run", "--input", "g2000.csv", "--out", "out"]));
    assert_eq!(args.input, PathBuf::from("g2000.csv"));
    assert_eq!(args.top_n, 10);
    assert_eq!(args.rank_scope, RankScope::Full);
    assert!(args.filters.countries.is_none());
    assert!(args.filters.industries.is_none());
    assert!(args.company.is_none());
}

#[test]
fn test_run_repeated_filters() {
    let args = run_args(parse(&[
        "run",
        "--input",
        "g2000.csv",
        "--out",
        "out",
        "--country",
        "Japan",
        "--country",
        "China",
        "--industry",
        "Banking",
        "--company",
        "ICBC",
        "--top-n",
        "3",
        "--rank-scope",
        "filtered",
    ]));
    assert_eq!(
        args.filters.countries,
        Some(vec!["Japan".to_string(), "China".to_string()])
    );
    assert_eq!(args.filters.industries, Some(vec!["Banking".to_string()]));
    assert_eq!(args.company.as_deref(), Some("ICBC"));
    assert_eq!(args.top_n, 3);
    assert_eq!(args.rank_scope, RankScope::Filtered);
}

#[test]
fn test_rejects_zero_top_n() {
    let err = Cli::try_parse_from([
        "g2000-report",
        "run",
        "--input",
        "g2000.csv",
        "--out",
        "out",
        "--top-n",
        "0",
    ]);
    assert!(err.is_err());
}

#[test]
fn test_run_requires_out() {
    assert!(Cli::try_parse_from(["g2000-report", "run", "--input", "g2000.csv"]).is_err());
}

#[test]
fn test_options_subcommand() {
    let cli = parse(&["-v", "options", "--input", "g2000.csv", "--industry", "Banking"]);
    assert!(cli.verbose);
    match cli.command {
        Command::Options(args) => {
            assert_eq!(args.filters.industries, Some(vec!["Banking".to_string()]));
        }
        other => panic!("expected options, got {other:?}"),
    }
}

#[test]
fn test_resolve_selection_defaults_to_all() {
    let dataset = sample_dataset();
    let filters = FilterArgs {
        countries: None,
        industries: None,
        selection: None,
    };
    let (selection, company) = resolve_selection(&dataset, &filters).unwrap();
    assert_eq!(selection, FilterSelection::all(&dataset));
    assert!(company.is_none());
}

#[test]
fn test_resolve_selection_flags_override_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selection.json");
    write_file(
        &path,
        r#"{"countries": ["Japan"], "industries": ["Banking"], "company": "ICBC"}"#,
    );

    let dataset = sample_dataset();
    let filters = FilterArgs {
        countries: Some(vec!["China".to_string()]),
        industries: None,
        selection: Some(path),
    };
    let (selection, company) = resolve_selection(&dataset, &filters).unwrap();
    assert_eq!(
        selection.countries.into_iter().collect::<Vec<_>>(),
        vec!["China".to_string()]
    );
    assert_eq!(
        selection.industries.into_iter().collect::<Vec<_>>(),
        vec!["Banking".to_string()]
    );
    assert_eq!(company.as_deref(), Some("ICBC"));
}

#[test]
fn test_resolve_selection_bad_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selection.json");
    write_file(&path, r#"{"regions": []}"#);

    let filters = FilterArgs {
        countries: None,
        industries: None,
        selection: Some(path),
    };
    let err = resolve_selection(&sample_dataset(), &filters).unwrap_err();
    assert!(matches!(
        err,
        AppError::SelectionFile(SelectionFileError::Json { .. })
    ));
}

#[test]
fn test_run_report_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("g2000.csv");
    write_file(&input, crate::fixtures::SAMPLE_CSV);
    let out = dir.path().join("out");

    let args = run_args(parse(&[
        "run",
        "--input",
        input.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
        "--country",
        "Japan",
    ]));
    run_report(args).unwrap();

    let table = std::fs::read_to_string(out.join("filtered_companies.tsv")).unwrap();
    assert_eq!(table.lines().count(), 3);
    assert!(out.join("dashboard.json").is_file());
    assert!(out.join("report.txt").is_file());
}
