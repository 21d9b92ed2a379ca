extern crate cutsites;

use cutsites::common::format_bases;

#[test]
fn test_format_bases() {
    assert_eq!(format_bases(0), "0 bp");
    assert_eq!(format_bases(999), "999 bp");
    assert_eq!(format_bases(1000), "1.0 Kbp");
    assert_eq!(format_bases(16_569), "16.6 Kbp");
    assert_eq!(format_bases(248_956_422), "249.0 Mbp");
    assert_eq!(format_bases(3_100_000_000), "3.1 Gbp");
}
