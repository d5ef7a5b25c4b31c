//! Aligned FASTA parser
//!
//! Reads the output of a multiple sequence aligner: one `>id` header per
//! record followed by residue lines. Gaps are `-`. All records of an
//! alignment must have the same length.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gap character in aligned sequences
pub const GAP: char = '-';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FastaError {
    #[error("line {line}: sequence data before the first '>' header")]
    SequenceBeforeHeader { line: usize },

    #[error("line {line}: empty record id")]
    EmptyId { line: usize },

    #[error("record '{id}' has no residues")]
    EmptyRecord { id: String },

    #[error("no FASTA records found")]
    NoRecords,

    #[error("ragged alignment: '{id}' has {found} columns, expected {expected}")]
    Ragged { id: String, expected: usize, found: usize },
}

/// One row of an alignment
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AlignedRecord {
    pub id: String,
    /// Upper-cased residues and gaps, whitespace removed
    pub residues: String,
}

impl AlignedRecord {
    pub fn new(id: impl Into<String>, residues: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            residues: residues.into(),
        }
    }

    /// Species name from an id such as `homo_sapiens` → `Homo Sapiens`
    pub fn species_name(&self) -> String {
        title_case(&self.id.replace('_', " "))
    }

    pub fn columns(&self) -> usize {
        self.residues.chars().count()
    }
}

fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse FASTA text into records, without checking that lengths agree
pub fn parse_fasta(text: &str) -> Result<Vec<AlignedRecord>, FastaError> {
    let mut records: Vec<AlignedRecord> = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            // The id is the first word; the rest is a free-form description
            let id = header.split_whitespace().next().unwrap_or("");
            if id.is_empty() {
                return Err(FastaError::EmptyId { line: line_no });
            }
            records.push(AlignedRecord::new(id, String::new()));
            continue;
        }

        let record = records
            .last_mut()
            .ok_or(FastaError::SequenceBeforeHeader { line: line_no })?;
        record.residues.extend(
            line.chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| c.to_ascii_uppercase()),
        );
    }

    if records.is_empty() {
        return Err(FastaError::NoRecords);
    }

    if let Some(empty) = records.iter().find(|r| r.residues.is_empty()) {
        return Err(FastaError::EmptyRecord { id: empty.id.clone() });
    }

    Ok(records)
}

/// Parse an alignment; every record must span the same number of columns
pub fn parse_alignment(text: &str) -> Result<Vec<AlignedRecord>, FastaError> {
    let records = parse_fasta(text)?;

    let expected = records[0].columns();
    for record in &records[1..] {
        let found = record.columns();
        if found != expected {
            return Err(FastaError::Ragged {
                id: record.id.clone(),
                expected,
                found,
            });
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALIGNMENT: &str = "\
>homo_sapiens description text
MFAD-RW
LFS
>mus_musculus
MFVDRRW
LFS
";

    #[test]
    fn test_parse_alignment_joins_lines() {
        let records = parse_alignment(ALIGNMENT).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], AlignedRecord::new("homo_sapiens", "MFAD-RWLFS"));
        assert_eq!(records[1].residues, "MFVDRRWLFS");
    }

    #[test]
    fn test_lowercase_and_whitespace_normalized() {
        let records = parse_fasta(">x\n  ac d \n\n;comment\ne-\n").unwrap();
        assert_eq!(records[0].residues, "ACDE-");
    }

    #[test]
    fn test_species_name() {
        assert_eq!(AlignedRecord::new("homo_sapiens", "A").species_name(), "Homo Sapiens");
        assert_eq!(
            AlignedRecord::new("canis_lupus_familiaris", "A").species_name(),
            "Canis Lupus Familiaris"
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_fasta("ACD\n>x\nA"), Err(FastaError::SequenceBeforeHeader { line: 1 }));
        assert_eq!(parse_fasta(">\nA"), Err(FastaError::EmptyId { line: 1 }));
        assert_eq!(parse_fasta(">x\n>y\nA"), Err(FastaError::EmptyRecord { id: "x".into() }));
        assert_eq!(parse_fasta("\n;only a comment\n"), Err(FastaError::NoRecords));
    }

    #[test]
    fn test_ragged_alignment_rejected() {
        assert_eq!(
            parse_alignment(">a\nACD\n>b\nAC\n"),
            Err(FastaError::Ragged {
                id: "b".into(),
                expected: 3,
                found: 2
            })
        );
    }
}
