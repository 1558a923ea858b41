use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use taxon_cli::cli::{Cli, Command, DatasetArg, DatasetArgs, DetectArgs, ExportArgs, ValidateArgs};
use taxon_cli::commands::{load_pair, run_detect, run_export, run_validate};
use taxon_model::{DatasetKind, DetectedRole};

const STRINGS_CSV: &str = "Tier,Industry,Topic,Sub-Topic,Prefix,Fuzzing_Idx,Prompt,Risks,Keywords\n\
1,Fintech,Payments,ACH,p,0,Move money,fraud,ach\n\
2,fintech,payments,ach,p,1,Move more money,fraud,ach\n";

const CLASSIFICATIONS_CSV: &str = "Topic,SubTopic,Industry,Classification\n\
Payments,ACH,Fintech,Restricted\n";

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write csv");
    path
}

fn datasets(files: Vec<PathBuf>) -> DatasetArgs {
    DatasetArgs {
        files,
        ..DatasetArgs::default()
    }
}

#[test]
fn parses_global_and_command_flags() {
    let cli = Cli::try_parse_from([
        "taxon",
        "--log-level",
        "debug",
        "export",
        "a.csv",
        "b.csv",
        "--dataset",
        "classifications",
        "-o",
        "out.csv",
        "--delimiter",
        ";",
        "--no-headers",
    ])
    .expect("parse args");
    assert!(cli.log_level.is_some());
    let Command::Export(args) = cli.command else {
        panic!("expected export command");
    };
    assert_eq!(args.datasets.files.len(), 2);
    assert_eq!(DatasetKind::from(args.dataset), DatasetKind::Classifications);
    assert_eq!(args.delimiter, ';');
    assert!(args.no_headers);
}

#[test]
fn rejects_more_than_two_positional_files() {
    let parsed = Cli::try_parse_from(["taxon", "validate", "a.csv", "b.csv", "c.csv"]);
    assert!(parsed.is_err());
}

#[test]
fn detect_reports_each_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let strings = write(dir.path(), "a.csv", STRINGS_CSV);
    let missing = dir.path().join("missing.csv");
    let results = run_detect(&DetectArgs {
        files: vec![strings, missing],
        json: false,
    });
    assert_eq!(results.len(), 2);
    let analysis = results[0].1.analysis().expect("parsed");
    assert_eq!(analysis.detected_role, DetectedRole::Strings);
    assert_eq!(analysis.row_count, 2);
    assert!(results[1].1.analysis().is_none());
}

#[test]
fn roles_are_assigned_regardless_of_argument_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let strings = write(dir.path(), "first.csv", STRINGS_CSV);
    let classifications = write(dir.path(), "second.csv", CLASSIFICATIONS_CSV);
    let pair = load_pair(&datasets(vec![classifications, strings])).expect("load pair");
    assert_eq!(pair.strings.filename.as_deref(), Some("first.csv"));
    assert_eq!(pair.classifications.filename.as_deref(), Some("second.csv"));
    assert_eq!(pair.strings.headers[3], "SubTopic");
}

#[test]
fn validate_passes_for_matching_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let strings = write(dir.path(), "s.csv", STRINGS_CSV);
    let classifications = write(dir.path(), "c.csv", CLASSIFICATIONS_CSV);
    let result = run_validate(&ValidateArgs {
        datasets: DatasetArgs {
            files: Vec::new(),
            strings: Some(strings),
            classifications: Some(classifications),
        },
        json: false,
    })
    .expect("validate");
    assert!(result.response.is_valid());
    assert_eq!(result.response.status, 200);
}

#[test]
fn validate_reports_unmatched_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let strings = write(
        dir.path(),
        "strings.csv",
        "Tier,Industry,Topic,SubTopic,Prefix,Fuzzing-Idx,Prompt,Risks,Keywords\n\
         1,Retail,Returns,Refunds,p,0,x,y,z\n",
    );
    let classifications = write(dir.path(), "classifications.csv", CLASSIFICATIONS_CSV);
    let result = run_validate(&ValidateArgs {
        datasets: datasets(vec![strings, classifications]),
        json: true,
    })
    .expect("validate");
    assert!(!result.response.is_valid());
    let body = serde_json::to_value(&result.response.body).expect("encode");
    assert_eq!(
        body["invalidRows"][0]["reason"],
        "No classification for Topic='Returns', SubTopic='Refunds', Industry='Retail'"
    );
}

#[test]
fn export_writes_validated_dataset() {
    let dir = tempfile::tempdir().expect("temp dir");
    let strings = write(dir.path(), "s.csv", STRINGS_CSV);
    let classifications = write(dir.path(), "c.csv", CLASSIFICATIONS_CSV);
    let output = dir.path().join("out").join("classifications.csv");
    let result = run_export(&ExportArgs {
        datasets: datasets(vec![strings, classifications]),
        dataset: DatasetArg::Classifications,
        output: output.clone(),
        delimiter: ';',
        no_headers: false,
    })
    .expect("export");
    assert_eq!(result.rows, 1);
    assert_eq!(
        fs::read_to_string(&output).expect("read export"),
        "Topic;SubTopic;Industry;Classification\nPayments;ACH;Fintech;Restricted\n"
    );
}

#[test]
fn export_is_refused_when_validation_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let strings = write(
        dir.path(),
        "strings.csv",
        "Tier,Industry,Topic,SubTopic,Prefix,Fuzzing-Idx,Prompt,Risks,Keywords\n\
         1,Retail,Returns,,p,0,x,y,z\n",
    );
    let classifications = write(dir.path(), "classifications.csv", CLASSIFICATIONS_CSV);
    let output = dir.path().join("export.csv");
    let err = run_export(&ExportArgs {
        datasets: datasets(vec![strings, classifications]),
        dataset: DatasetArg::Strings,
        output: output.clone(),
        delimiter: ',',
        no_headers: false,
    })
    .unwrap_err();
    assert!(format!("{err:#}").contains("Export requires a successful validation"));
    assert!(!output.exists());
}
