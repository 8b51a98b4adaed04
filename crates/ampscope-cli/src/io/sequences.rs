use crate::error::{CliError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// A sequence read from an input file, normalized to trimmed uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub id: String,
    pub sequence: String,
}

fn normalize(line: &str) -> String {
    line.split_whitespace()
        .collect::<String>()
        .to_ascii_uppercase()
}

fn generated_id(index: usize) -> String {
    format!("seq-{}", index + 1)
}

fn header_id(header: &str, index: usize) -> String {
    header
        .split_whitespace()
        .next()
        .map(str::to_string)
        .unwrap_or_else(|| generated_id(index))
}

/// Reads FASTA when the first meaningful line is a `>` header, otherwise one sequence per line.
///
/// Blank lines and `#` comments are skipped in both layouts. FASTA records may span several
/// lines and take their id from the first word of the header.
pub fn parse<R: BufRead>(reader: R) -> std::io::Result<Vec<SequenceRecord>> {
    let mut records: Vec<SequenceRecord> = Vec::new();
    let mut fasta: Option<bool> = None;

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let is_fasta = *fasta.get_or_insert_with(|| trimmed.starts_with('>'));

        if let Some(header) = trimmed.strip_prefix('>').filter(|_| is_fasta) {
            records.push(SequenceRecord {
                id: header_id(header, records.len()),
                sequence: String::new(),
            });
        } else if is_fasta {
            if let Some(current) = records.last_mut() {
                current.sequence.push_str(&normalize(trimmed));
            }
        } else {
            records.push(SequenceRecord {
                id: generated_id(records.len()),
                sequence: normalize(trimmed),
            });
        }
    }

    Ok(records)
}

pub fn read_sequences(path: &Path) -> Result<Vec<SequenceRecord>> {
    debug!("Reading sequences from {:?}", path);
    let file = File::open(path)?;
    let records = parse(BufReader::new(file)).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    debug!("Read {} sequence(s).", records.len());
    Ok(records)
}
