//! Non-overlapping scan for CG, GC, AT and TA pairs.

/// A DNA sequence, trimmed and normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence(String);

impl Sequence {
    /// Normalizes `raw` (surrounding whitespace removed, ASCII letters uppercased).
    pub fn new(raw: &str) -> Self {
        Sequence(raw.trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length in bytes. For A/C/G/T input this is the number of bases;
    /// the scan and its `len - 1` denominator work on the same byte count.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every symbol is one of A/C/G/T.
    pub fn has_only_nucleotides(&self) -> bool {
        self.0.bytes().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T'))
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pair counts and percentages for one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnalysisResult {
    pub gc_percent: f64,
    pub at_percent: f64,
    pub cg_count: usize,
    pub gc_count: usize,
    pub at_count: usize,
    pub ta_count: usize,
}

impl AnalysisResult {
    /// CG + GC pairs.
    pub fn gc_pairs(&self) -> usize {
        self.cg_count + self.gc_count
    }

    /// AT + TA pairs.
    pub fn at_pairs(&self) -> usize {
        self.at_count + self.ta_count
    }

    pub fn total_pairs(&self) -> usize {
        self.gc_pairs() + self.at_pairs()
    }

    /// Share of start positions not covered by either pair class.
    pub fn other_percent(&self) -> f64 {
        (100.0 - self.gc_percent - self.at_percent).max(0.0)
    }
}

/// Analyzes a normalized sequence.
pub fn analyze(seq: &Sequence) -> AnalysisResult {
    scan_pairs(seq.as_bytes())
}

/// Counts CG/GC/AT/TA pairs left to right without overlap.
///
/// A matched pair consumes both bases, so its second base never starts
/// another pair. Percentages are taken over all `len - 1` start positions,
/// whether or not a skip jumped over them. Sequences shorter than two bases
/// yield the all-zero result. Windows are compared case-insensitively.
pub fn scan_pairs(bases: &[u8]) -> AnalysisResult {
    let n = bases.len();
    if n < 2 {
        return AnalysisResult::default();
    }

    let mut result = AnalysisResult::default();
    let mut i = 0usize;
    while i + 1 < n {
        let pair = [bases[i].to_ascii_uppercase(), bases[i + 1].to_ascii_uppercase()];
        let counter = match &pair {
            b"CG" => Some(&mut result.cg_count),
            b"GC" => Some(&mut result.gc_count),
            b"AT" => Some(&mut result.at_count),
            b"TA" => Some(&mut result.ta_count),
            _ => None,
        };
        match counter {
            Some(c) => {
                *c += 1;
                i += 2;
            }
            None => i += 1,
        }
    }

    let total_positions = (n - 1) as f64;
    result.gc_percent = 100.0 * result.gc_pairs() as f64 / total_positions;
    result.at_percent = 100.0 * result.at_pairs() as f64 / total_positions;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn run(s: &str) -> AnalysisResult {
        analyze(&Sequence::new(s))
    }

    #[test]
    fn test_short_sequences_are_zero() {
        for s in ["", "A", "g", "  C  "] {
            assert_eq!(run(s), AnalysisResult::default(), "input {s:?}");
        }
    }

    #[test]
    fn test_cgcg_counts_two_pairs() {
        let r = run("CGCG");
        assert_eq!((r.cg_count, r.gc_count, r.at_count, r.ta_count), (2, 0, 0, 0));
        assert!((r.gc_percent - 200.0 / 3.0).abs() < EPS);
        assert_eq!(r.at_percent, 0.0);
    }

    #[test]
    fn test_cgc_is_a_single_pair() {
        let r = run("CGC");
        assert_eq!(r.cg_count, 1);
        assert_eq!(r.gc_count, 0);
        assert!((r.gc_percent - 50.0).abs() < EPS);
    }

    #[test]
    fn test_atatat() {
        let r = run("ATATAT");
        assert_eq!((r.cg_count, r.gc_count, r.at_count, r.ta_count), (0, 0, 3, 0));
        assert!((r.at_percent - 60.0).abs() < EPS);
        assert_eq!(r.gc_percent, 0.0);
    }

    #[test]
    fn test_skip_only_after_match() {
        // A C G T A: "AC" no match, "CG" match (skip G), "TA" match.
        let r = run("ACGTA");
        assert_eq!((r.cg_count, r.gc_count, r.at_count, r.ta_count), (1, 0, 0, 1));
        assert!((r.gc_percent - 25.0).abs() < EPS);
        assert!((r.at_percent - 25.0).abs() < EPS);
        assert!((r.other_percent() - 50.0).abs() < EPS);
    }

    #[test]
    fn test_no_pairs() {
        let r = run("AAAACCCC");
        assert_eq!(r.total_pairs(), 0);
        assert_eq!(r.other_percent(), 100.0);
    }

    #[test]
    fn test_two_base_pair_is_full() {
        let r = run("TA");
        assert_eq!(r.ta_count, 1);
        assert_eq!(r.at_percent, 100.0);
        assert_eq!(r.other_percent(), 0.0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(run("atat"), run("ATAT"));
        assert_eq!(scan_pairs(b"gcGc"), scan_pairs(b"GCGC"));
    }

    #[test]
    fn test_idempotent() {
        let seq = Sequence::new("TTAGCGCATCGATTA");
        assert_eq!(analyze(&seq), analyze(&seq));
    }

    #[test]
    fn test_ambiguous_bases_never_match() {
        let r = run("NNCGNN");
        assert_eq!(r.cg_count, 1);
        assert_eq!(r.total_pairs(), 1);
        assert!(!Sequence::new("ACGN").has_only_nucleotides());
        assert!(Sequence::new("acgt").has_only_nucleotides());
    }

    #[test]
    fn test_sequence_normalization() {
        let seq = Sequence::new("  acGt\r\n");
        assert_eq!(seq.as_str(), "ACGT");
        assert_eq!(seq.len(), 4);
        assert!(!seq.is_empty());
        assert_eq!(seq.to_string(), "ACGT");
    }

    #[test]
    fn test_len_matches_scan_denominator() {
        // 'é' is two bytes: 5 bytes, 4 start positions, one CG pair.
        let seq = Sequence::new("éCGA");
        assert_eq!(seq.len(), 5);
        assert!(!seq.has_only_nucleotides());
        let r = analyze(&seq);
        assert_eq!(r.cg_count, 1);
        assert!((r.gc_percent - 25.0).abs() < EPS);
    }

    /// Every sequence over ACGT up to length 6 respects the pair bound and the
    /// percentage range.
    #[test]
    fn test_bounds_hold_exhaustively() {
        const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];
        for len in 0..=6u32 {
            for code in 0..4usize.pow(len) {
                let mut c = code;
                let seq: Vec<u8> = (0..len)
                    .map(|_| {
                        let b = BASES[c % 4];
                        c /= 4;
                        b
                    })
                    .collect();
                let r = scan_pairs(&seq);
                assert!(r.total_pairs() <= seq.len() / 2, "{:?}", String::from_utf8_lossy(&seq));
                assert!((0.0..=100.0).contains(&r.gc_percent));
                assert!((0.0..=100.0).contains(&r.at_percent));
                assert!(r.gc_percent + r.at_percent <= 100.0 + EPS);
            }
        }
    }
}
