// Degenerate base accepted in enzyme recognition sites
pub const WILDCARD: u8 = b'N';

// Bases matched by the wildcard; sequence-side N is never a match
pub const WILDCARD_CLASS: &str = "[ACGT]";

pub const ALPHABET: &[u8] = b"ACGTN";

// Optional cut-position marker in enzyme sites, e.g. "G^ANTC"
pub const CUT_MARKER: char = '^';

// Number of bases scanned per parallel work unit
pub const BLOCK_SIZE: usize = 1 << 20;
