//! Recognising block names in free-form text.
//!
//! Mesh dumps and simulation logs mention blocks among other words. The
//! scanner splits lines on whitespace, picks out words that look like block
//! names under its grammar, and decodes them. A token that looks like a
//! block name but fails to decode is reported as a [`Rejection`] and the
//! scan carries on.

use blockmesh_core::{is_octal_digit, Error, Result};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::decoder::{BlockAddress, BlockAddressDecoder};
use crate::grammar::Grammar;
use crate::path::OctreePath;

/// A block name found in the input.
#[derive(Clone, Debug, PartialEq)]
pub struct ScannedBlock {
    /// Zero-based line index in the input
    pub line: usize,
    /// The token as it appeared
    pub token: String,
    /// Parsed path
    pub path: OctreePath,
    /// Decoded level and bounds
    pub address: BlockAddress,
}

/// A candidate token that failed to decode.
#[derive(Debug)]
pub struct Rejection {
    /// Zero-based line index in the input
    pub line: usize,
    /// The token as it appeared
    pub token: String,
    /// Why it was rejected
    pub error: Error,
}

/// Everything found in one scan, in input order.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Successfully decoded blocks
    pub blocks: Vec<ScannedBlock>,
    /// Candidates that failed to decode
    pub rejections: Vec<Rejection>,
}

impl ScanReport {
    /// Total number of candidate tokens seen.
    pub fn candidates(&self) -> usize {
        self.blocks.len() + self.rejections.len()
    }
}

enum Outcome {
    Block(ScannedBlock),
    Rejected(Rejection),
}

/// Finds and decodes block names in lines of text.
#[derive(Clone, Debug)]
pub struct TokenScanner {
    decoder: BlockAddressDecoder,
}

impl TokenScanner {
    /// Create a scanner for `grammar`.
    pub fn new(grammar: Grammar) -> Result<Self> {
        grammar.validate()?;
        Ok(Self {
            decoder: BlockAddressDecoder::new(grammar),
        })
    }

    /// The grammar this scanner recognises.
    pub const fn grammar(&self) -> &Grammar {
        self.decoder.grammar()
    }

    /// Candidate block names in `line`, in order of appearance.
    pub fn candidates<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        line.split_whitespace()
            .filter_map(move |word| match self.grammar() {
                Grammar::Prefixed { marker } => {
                    is_prefixed_candidate(word, *marker).then_some(word)
                }
                Grammar::Delimited { marker, separator } => {
                    find_delimited(word, marker, *separator)
                }
            })
    }

    /// Decode every candidate in one line.
    pub fn scan_line(&self, line_index: usize, line: &str) -> ScanReport {
        let mut report = ScanReport::default();
        for outcome in self.scan_line_outcomes(line_index, line) {
            match outcome {
                Outcome::Block(block) => report.blocks.push(block),
                Outcome::Rejected(rejection) => report.rejections.push(rejection),
            }
        }
        report
    }

    /// Decode every candidate in `lines`, in parallel across lines.
    ///
    /// Output keeps input order.
    pub fn scan_lines<S>(&self, lines: &[S]) -> ScanReport
    where
        S: AsRef<str> + Sync,
    {
        let _span = tracing::trace_span!("scan_lines", lines = lines.len()).entered();

        let per_line: Vec<Vec<Outcome>> = lines
            .par_iter()
            .enumerate()
            .map(|(index, line)| self.scan_line_outcomes(index, line.as_ref()))
            .collect();

        let mut report = ScanReport::default();
        for outcome in per_line.into_iter().flatten() {
            match outcome {
                Outcome::Block(block) => report.blocks.push(block),
                Outcome::Rejected(rejection) => report.rejections.push(rejection),
            }
        }

        debug!(
            blocks = report.blocks.len(),
            rejected = report.rejections.len(),
            "scan complete"
        );
        report
    }

    fn scan_line_outcomes(&self, line_index: usize, line: &str) -> Vec<Outcome> {
        self.candidates(line)
            .map(|token| match self.decoder.decode_path(token) {
                Ok((path, address)) => {
                    debug!(
                        "{token} {} {:?} {:?}",
                        address.level,
                        address.lower(),
                        address.upper()
                    );
                    Outcome::Block(ScannedBlock {
                        line: line_index,
                        token: token.to_string(),
                        path,
                        address,
                    })
                }
                Err(error) => {
                    warn!(line = line_index + 1, "skipping block name: {error}");
                    Outcome::Rejected(Rejection {
                        line: line_index,
                        token: token.to_string(),
                        error,
                    })
                }
            })
            .collect()
    }
}

/// A word starting with the marker and then at least one octal digit.
fn is_prefixed_candidate(word: &str, marker: char) -> bool {
    word.strip_prefix(marker)
        .and_then(|rest| rest.chars().next())
        .is_some_and(is_octal_digit)
}

/// Leftmost `marker [0-7]* separator [0-7]*` inside `word`.
fn find_delimited<'a>(word: &'a str, marker: &str, separator: char) -> Option<&'a str> {
    if marker.is_empty() {
        return None;
    }

    let mut from = 0;
    while let Some(found) = word[from..].find(marker) {
        let start = from + found;
        let body_start = start + marker.len();
        let body = &word[body_start..];

        let head = octal_run_len(body);
        if body[head..].starts_with(separator) {
            let tail_start = head + separator.len_utf8();
            let tail = octal_run_len(&body[tail_start..]);
            return Some(&word[start..body_start + tail_start + tail]);
        }

        // Next search starts one character past this match's start.
        from = start + word[start..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

fn octal_run_len(text: &str) -> usize {
    text.len() - text.trim_start_matches(is_octal_digit).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockmesh_core::IdentifierFault;
    use glam::DVec3;

    fn prefixed() -> TokenScanner {
        TokenScanner::new(Grammar::default()).unwrap()
    }

    fn delimited() -> TokenScanner {
        TokenScanner::new(Grammar::delimited_default()).unwrap()
    }

    #[test]
    fn prefixed_candidates_need_a_digit() {
        let scanner = prefixed();
        let found: Vec<&str> = scanner
            .candidates("refine Z017 Zeta Z Z8 xZ01 Z7")
            .collect();
        assert_eq!(found, vec!["Z017", "Z7"]);
    }

    #[test]
    fn delimited_candidates_are_extracted_from_words() {
        let scanner = delimited();
        let found: Vec<&str> = scanner
            .candidates("block=b#12:34, [b#:] b#77 xb#b#0:1y")
            .collect();
        assert_eq!(found, vec!["b#12:34", "b#:", "b#0:1"]);
    }

    #[test]
    fn delimited_extraction_stops_at_non_octal() {
        assert_eq!(find_delimited("b#129:3", "b#", ':'), None);
        assert_eq!(find_delimited("b#12:389", "b#", ':'), Some("b#12:3"));
        assert_eq!(find_delimited("(b#1:)", "b#", ':'), Some("b#1:"));
        assert_eq!(find_delimited("nothing", "b#", ':'), None);
    }

    #[test]
    fn scan_line_decodes_and_rejects() {
        let report = prefixed().scan_line(3, "Z1 Z17, Z0");
        assert_eq!(report.candidates(), 3);
        assert_eq!(report.blocks.len(), 2);
        assert_eq!(report.blocks[0].token, "Z1");
        assert_eq!(report.blocks[0].line, 3);
        assert_eq!(report.blocks[1].token, "Z0");

        let rejection = &report.rejections[0];
        assert_eq!(rejection.token, "Z17,");
        assert_eq!(
            rejection.error.fault(),
            Some(&IdentifierFault::NotOctal {
                found: ',',
                position: 3
            })
        );
    }

    #[test]
    fn scan_lines_keeps_input_order() {
        let lines: Vec<String> = (0..64)
            .map(|i| format!("step {i} Z{} Z{}", i % 8, (i + 1) % 8))
            .collect();
        let report = prefixed().scan_lines(&lines);

        assert_eq!(report.blocks.len(), 128);
        assert!(report.rejections.is_empty());
        for (i, pair) in report.blocks.chunks(2).enumerate() {
            assert_eq!(pair[0].line, i);
            assert_eq!(pair[1].line, i);
            assert_eq!(pair[0].token, format!("Z{}", i % 8));
            assert_eq!(pair[1].token, format!("Z{}", (i + 1) % 8));
        }
    }

    #[test]
    fn delimited_scan_decodes_boxes() {
        let report = delimited().scan_lines(&["leaf b#7:", "leaf b#:7"]);
        assert_eq!(report.blocks.len(), 2);
        for block in &report.blocks {
            assert_eq!(block.address.level, 1);
            assert_eq!(block.address.lower(), DVec3::splat(0.5));
            assert_eq!(block.address.upper(), DVec3::ONE);
        }
    }

    #[test]
    fn invalid_grammar_rejected() {
        assert!(TokenScanner::new(Grammar::delimited("", ':')).is_err());
    }
}
