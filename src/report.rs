//! Text reports: a detail block per sequence and a summary table.

use std::io::{self, Write};

use crate::scanner::{analyze, AnalysisResult, Sequence};

/// One analysed sequence, numbered from 1 in input order.
#[derive(Debug, Clone)]
pub struct SequenceReport {
    pub index: usize,
    pub sequence: Sequence,
    pub result: AnalysisResult,
}

impl SequenceReport {
    pub fn length(&self) -> usize {
        self.sequence.len()
    }

    /// Row name used in the table.
    pub fn name(&self) -> String {
        format!("Seq {}", self.index)
    }

    /// Tick label used on charts.
    pub fn label(&self) -> String {
        format!("DNA {}", self.index)
    }
}

/// Analyses each sequence once.
pub fn build_reports(sequences: &[Sequence]) -> Vec<SequenceReport> {
    sequences
        .iter()
        .enumerate()
        .map(|(i, seq)| SequenceReport {
            index: i + 1,
            sequence: seq.clone(),
            result: analyze(seq),
        })
        .collect()
}

/// Writes the per-sequence breakdown.
pub fn write_details<W: Write>(out: &mut W, reports: &[SequenceReport]) -> io::Result<()> {
    writeln!(out, "=== Dinucleotide Analysis ===")?;
    writeln!(out)?;
    for rep in reports {
        let r = &rep.result;
        writeln!(out, "Sequence {}: {}", rep.index, rep.sequence)?;
        writeln!(out, "Length: {} nucleotides", rep.length())?;
        writeln!(out, "Dinucleotides (non-overlapping):")?;
        writeln!(
            out,
            "  CG: {}, GC: {} -> total GC pairs: {}",
            r.cg_count,
            r.gc_count,
            r.gc_pairs()
        )?;
        writeln!(
            out,
            "  AT: {}, TA: {} -> total AT pairs: {}",
            r.at_count,
            r.ta_count,
            r.at_pairs()
        )?;
        writeln!(out, "Percentages:")?;
        writeln!(out, "  GC pairs (CG+GC): {:.2}%", r.gc_percent)?;
        writeln!(out, "  AT pairs (AT+TA): {:.2}%", r.at_percent)?;
        writeln!(out, "{}", "-".repeat(50))?;
    }
    Ok(())
}

// Column widths: name, length, AT pairs, GC pairs, total, %AT, %GC
const WIDTHS: [usize; 7] = [10, 8, 10, 10, 10, 8, 8];
const HEADERS: [&str; 7] = ["Sequence", "Length", "AT pairs", "GC pairs", "Total", "%AT", "%GC"];

fn table_rule() -> String {
    // "| " + cells joined by " | " + " |"
    let inner = WIDTHS.iter().sum::<usize>() + 3 * (WIDTHS.len() - 1) + 2;
    format!("+{}+", "-".repeat(inner))
}

fn table_row(cells: &[String; 7]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(WIDTHS)
        .map(|(c, w)| format!("{c:^w$}"))
        .collect();
    format!("| {} |", padded.join(" | "))
}

/// Writes the summary table.
pub fn write_table<W: Write>(out: &mut W, reports: &[SequenceReport]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== Dinucleotide Pairs per Sequence ===")?;
    writeln!(out)?;

    let rule = table_rule();
    writeln!(out, "{rule}")?;
    writeln!(out, "{}", table_row(&HEADERS.map(String::from)))?;
    writeln!(out, "{rule}")?;
    for rep in reports {
        let r = &rep.result;
        let cells = [
            rep.name(),
            rep.length().to_string(),
            r.at_pairs().to_string(),
            r.gc_pairs().to_string(),
            r.total_pairs().to_string(),
            format!("{:.2}", r.at_percent),
            format!("{:.2}", r.gc_percent),
        ];
        writeln!(out, "{}", table_row(&cells))?;
    }
    writeln!(out, "{rule}")?;
    writeln!(out)?;
    Ok(())
}
