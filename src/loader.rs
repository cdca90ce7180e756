//! Sequence file reader: one sequence per line, `.gz` supported.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use log::{debug, warn};

use crate::errors::LoadError;
use crate::scanner::Sequence;

/// Opens `path`, gunzipping on the fly when the extension is `.gz`/`.gzip`.
fn open_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>, LoadError> {
    let f = File::open(path).map_err(|e| LoadError::from_io(path, e))?;
    let boxed: Box<dyn Read> = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("gz") || ext.eq_ignore_ascii_case("gzip") => {
            debug!("reading {} as gzip", path.display());
            Box::new(GzDecoder::new(f))
        }
        _ => Box::new(f),
    };
    Ok(BufReader::new(boxed))
}

/// Reads every non-blank line of `path` as a sequence.
pub fn read_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<Sequence>, LoadError> {
    let path = path.as_ref();
    let reader = open_reader(path)?;
    parse_sequences(reader, path)
}

/// Parses sequences from an open reader; `path` is only used in errors and logs.
pub fn parse_sequences<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Sequence>, LoadError> {
    let mut sequences = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| LoadError::from_io(path, e))?;
        let seq = Sequence::new(&line);
        if seq.is_empty() {
            continue;
        }
        if !seq.has_only_nucleotides() {
            warn!(
                "{}:{}: sequence contains symbols other than A/C/G/T; they never form pairs",
                path.display(),
                lineno + 1
            );
        }
        sequences.push(seq);
    }
    Ok(sequences)
}
