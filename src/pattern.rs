use regex::bytes::{Regex, RegexBuilder};

use crate::constants::{WILDCARD, WILDCARD_CLASS};
use crate::enzyme::Enzyme;
use crate::errors::*;

/// Combined, case-insensitive pattern matching any of a set of enzyme sites.
///
/// Every `N` in a site matches exactly one of A, C, G, or T; an `N` in the
/// scanned sequence is never matched.
#[derive(Clone, Debug)]
pub struct SitePattern {
    pattern: String,
    regex: Option<Regex>,
    min_len: usize,
    max_len: usize,
}

impl SitePattern {
    pub fn new(enzymes: &[Enzyme]) -> Result<SitePattern> {
        let sites: Vec<&str> = enzymes.iter().map(|e| e.site.as_str()).collect();
        let pattern = sites.join("|").replace(WILDCARD as char, WILDCARD_CLASS);

        // An empty alternation would match the empty string at every offset
        let regex = if enzymes.is_empty() {
            None
        } else {
            let regex = RegexBuilder::new(&pattern)
                .case_insensitive(true)
                .unicode(false)
                .build()
                .chain_err(|| format!("failed to compile pattern {:?}", pattern))?;

            Some(regex)
        };

        Ok(SitePattern {
            pattern,
            regex,
            min_len: enzymes.iter().map(Enzyme::len).min().unwrap_or(0),
            max_len: enzymes.iter().map(Enzyme::len).max().unwrap_or(0),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Returns the 1-based start of every match in `sequence`, including
    /// overlapping matches, in ascending order.
    pub fn find_sites(&self, sequence: &[u8]) -> Vec<usize> {
        self.find_sites_in(sequence, 0, sequence.len())
    }

    /// Returns 1-based starts of matches beginning in the 0-based range
    /// `[start, end)`. Bases past `end` are only read as far as needed to
    /// complete a match.
    pub fn find_sites_in(&self, sequence: &[u8], start: usize, end: usize) -> Vec<usize> {
        let mut sites = Vec::new();
        let regex = match &self.regex {
            Some(regex) => regex,
            None => return sites,
        };

        let end = end.min(sequence.len());
        let lookahead = (end + self.max_len).saturating_sub(1);
        let haystack = &sequence[..usize::min(sequence.len(), lookahead)];

        let mut offset = start;
        while offset < end {
            match regex.find_at(haystack, offset) {
                Some(mat) if mat.start() < end => {
                    sites.push(mat.start() + 1);
                    // Restart one base past the match start to catch overlaps
                    offset = mat.start() + 1;
                }
                _ => break,
            }
        }

        sites
    }
}
