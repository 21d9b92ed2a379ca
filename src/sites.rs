use std::io::Write;
use std::time::Instant;

use bio::io::fasta;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::args::SiteArgs;
use crate::common::{format_bases, open_file_or_stdout};
use crate::errors::*;
use crate::pattern::SitePattern;
use crate::progress;
use crate::scan::{scan_sequence, CutSites};

/// Totals reported once every record has been written.
#[derive(Debug, Default, PartialEq)]
pub struct Summary {
    pub records: usize,
    pub bases: usize,
    pub sites: usize,
}

fn write_cut_sites(
    args: &SiteArgs,
    pattern: &SitePattern,
    pool: &ThreadPool,
    out: &mut dyn Write,
    reader: fasta::Reader<std::fs::File>,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for (idx, record) in reader.records().enumerate() {
        let record = record.chain_err(|| format!("failed to read FASTA file {:?}", args.input))?;
        record.check().map_err(|v| {
            ErrorKind::Msg(format!("invalid FASTA record {:?}: {}", record.id(), v))
        })?;

        let sequence = record.seq();
        let prefix = format!("  {}. {}: ", idx + 1, record.id());
        let pg = progress::with_prefix(sequence.len(), &prefix);
        let positions = pool.install(|| scan_sequence(pattern, sequence, &pg));
        pg.finish_and_clear();

        let sites = CutSites::new(record.id(), positions, sequence.len());
        sites.write(out)?;

        summary.records += 1;
        summary.bases += sites.length;
        summary.sites += sites.positions.len();
    }

    out.flush()
        .chain_err(|| format!("failed to write output file {:?}", args.output))?;

    Ok(summary)
}

pub fn main(args: &SiteArgs) -> Result<Summary> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build()
        .chain_err(|| "failed to build thread pool")?;

    let pattern = SitePattern::new(&args.enzymes)?;
    let names: Vec<&str> = args.enzymes.iter().map(|e| e.name.as_str()).collect();
    eprintln!(
        "Finding cut sites for {} matching pattern: {} ...",
        names.join(", "),
        pattern.as_str()
    );

    // Input must be opened before the output file is created
    eprintln!("Reading sequences from {:?}", args.input);
    let reader = fasta::Reader::from_file(&args.input)
        .chain_err(|| format!("failed to open FASTA file {:?}", args.input))?;

    let mut out = open_file_or_stdout(&args.output)?;

    let timer = Instant::now();
    let summary = write_cut_sites(args, &pattern, &pool, &mut *out, reader)?;

    eprintln!(
        "  Found {} cut sites in {} records ({}) in {} seconds",
        summary.sites,
        summary.records,
        format_bases(summary.bases),
        timer.elapsed().as_secs()
    );

    Ok(summary)
}
