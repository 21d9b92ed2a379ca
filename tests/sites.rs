extern crate cutsites;
extern crate tempfile;

use std::fs;
use std::path::Path;

use cutsites::args::{parse_from, SiteArgs};
use cutsites::enzyme::Enzyme;
use cutsites::sites::{self, Summary};

const FASTA: &str = ">chr1 first chromosome
CCAAGCTTCC
CCGATCCC
>chr2
nnnnnnnnnn
>chr3
gatcgaatcc
AAAA
";

fn site_args(input: &Path, enzymes: &[&str], output: &Path) -> SiteArgs {
    SiteArgs {
        input: input.to_string_lossy().into_owned(),
        enzymes: enzymes.iter().map(|e| Enzyme::parse(e).unwrap()).collect(),
        output: output.to_string_lossy().into_owned(),
        threads: 2,
    }
}

fn run(fasta: &str, enzymes: &[&str]) -> (Summary, String) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("genome.fa");
    let output = dir.path().join("sites.txt");
    fs::write(&input, fasta).unwrap();

    let summary = sites::main(&site_args(&input, enzymes, &output)).unwrap();

    (summary, fs::read_to_string(&output).unwrap())
}

#[test]
fn test_cut_sites_per_record() {
    let (summary, output) = run(FASTA, &["GATC", "AAGCTT"]);

    assert_eq!(output, "chr1 3 13 18\nchr2 10\nchr3 1 14\n");
    assert_eq!(
        summary,
        Summary {
            records: 3,
            bases: 42,
            sites: 3,
        }
    );
}

#[test]
fn test_cut_sites_with_wildcard_and_names() {
    let (_, output) = run(FASTA, &["DpnII", "g^antc"]);

    assert_eq!(output, "chr1 13 18\nchr2 10\nchr3 1 5 14\n");
}

#[test]
fn test_cut_sites_without_enzymes() {
    let (summary, output) = run(FASTA, &[]);

    assert_eq!(output, "chr1 18\nchr2 10\nchr3 14\n");
    assert_eq!(summary.sites, 0);
}

#[test]
fn test_cut_sites_empty_input() {
    let (summary, output) = run("", &["GATC"]);

    assert_eq!(output, "");
    assert_eq!(summary, Summary::default());
}

#[test]
fn test_cut_sites_are_reproducible() {
    let (_, first) = run(FASTA, &["GATC", "GANTC", "AAGCTT"]);
    let (_, second) = run(FASTA, &["AAGCTT", "GANTC", "GATC"]);

    assert_eq!(first, second);
}

#[test]
fn test_missing_input_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.fa");
    let output = dir.path().join("sites.txt");

    assert!(sites::main(&site_args(&input, &["GATC"], &output)).is_err());
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("genome.fa");
    let output = dir.path().join("missing").join("sites.txt");
    fs::write(&input, FASTA).unwrap();

    assert!(sites::main(&site_args(&input, &["GATC"], &output)).is_err());
}

#[test]
fn test_parse_arguments() {
    let args = parse_from(&[
        "cutsites", "-i", "genome.fa", "-e", "gatc", "GANTC", "HindIII", "-o", "out.txt",
    ])
    .unwrap();

    assert_eq!(args.input, "genome.fa");
    assert_eq!(args.output, "out.txt");
    assert_eq!(args.threads, 0);
    let sites: Vec<&str> = args.enzymes.iter().map(|e| e.site.as_str()).collect();
    assert_eq!(sites, vec!["GATC", "GANTC", "AAGCTT"]);
}

#[test]
fn test_parse_arguments_threads() {
    let args = parse_from(&[
        "cutsites", "--threads", "4", "-i", "in.fa", "-e", "GATC", "-o", "out.txt",
    ])
    .unwrap();

    assert_eq!(args.threads, 4);
    assert!(
        parse_from(&["cutsites", "--threads", "x", "-i", "a", "-e", "GATC", "-o", "b"]).is_err()
    );
}

#[test]
fn test_parse_arguments_missing_required() {
    assert!(parse_from(&["cutsites", "-e", "GATC", "-o", "out.txt"]).is_err());
    assert!(parse_from(&["cutsites", "-i", "in.fa", "-o", "out.txt"]).is_err());
    assert!(parse_from(&["cutsites", "-i", "in.fa", "-e", "GATC"]).is_err());
    assert!(parse_from(&["cutsites", "-i", "in.fa", "-e", "-o", "out.txt"]).is_err());
}

#[test]
fn test_parse_arguments_invalid_enzyme() {
    assert!(parse_from(&["cutsites", "-i", "in.fa", "-e", "GAYTC", "-o", "out.txt"]).is_err());
}

#[test]
fn test_malformed_fasta() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("genome.fa");
    let output = dir.path().join("sites.txt");
    fs::write(&input, "GATCGATC\n>chr1\nGATC\n").unwrap();

    assert!(sites::main(&site_args(&input, &["GATC"], &output)).is_err());
}

#[test]
fn test_partial_output_kept_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("genome.fa");
    let output = dir.path().join("sites.txt");
    fs::write(&input, ">chr1\nGATC\n>chr2\nGATéC\n").unwrap();

    assert!(sites::main(&site_args(&input, &["GATC"], &output)).is_err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "chr1 1 4\n");
}
