use std::io::Write;

use rayon::prelude::*;

use crate::constants::BLOCK_SIZE;
use crate::errors::*;
use crate::pattern::SitePattern;
use crate::progress::ProgressBar;

/// Cut sites found in a single FASTA record.
#[derive(Debug, PartialEq)]
pub struct CutSites {
    pub id: String,
    pub positions: Vec<usize>,
    pub length: usize,
}

impl CutSites {
    pub fn new(id: &str, positions: Vec<usize>, length: usize) -> CutSites {
        CutSites {
            id: id.to_owned(),
            positions,
            length,
        }
    }

    /// Renders `<id> <pos_1> ... <pos_k> <length>`, or `<id> <length>`
    /// when no cut sites were found.
    pub fn to_line(&self) -> String {
        let mut fields = Vec::with_capacity(self.positions.len() + 2);
        fields.push(self.id.clone());
        fields.extend(self.positions.iter().map(|v| v.to_string()));
        fields.push(self.length.to_string());

        fields.join(" ")
    }

    pub fn write<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.to_line())
            .chain_err(|| format!("failed to write cut sites for {:?}", self.id))
    }
}

/// Finds all (overlapping) cut sites in `sequence`, scanning fixed-size
/// blocks in parallel. Positions are 1-based and ascending.
pub fn scan_sequence(pattern: &SitePattern, sequence: &[u8], pg: &ProgressBar) -> Vec<usize> {
    scan_sequence_with_block_size(pattern, sequence, BLOCK_SIZE, pg)
}

pub fn scan_sequence_with_block_size(
    pattern: &SitePattern,
    sequence: &[u8],
    block_size: usize,
    pg: &ProgressBar,
) -> Vec<usize> {
    let block_size = block_size.max(1);
    let num_blocks = (sequence.len() + block_size - 1) / block_size;
    let blocks: Vec<Vec<usize>> = (0..num_blocks)
        .into_par_iter()
        .map(|block| {
            let start = block * block_size;
            let end = usize::min(start + block_size, sequence.len());
            let sites = pattern.find_sites_in(sequence, start, end);

            pg.inc((end - start) as u64);
            sites
        })
        .collect();

    blocks.into_iter().flatten().collect()
}
