//! Multi-delimiter string splitting.
//!
//! A [`Splitter`] scans its source left to right. At each step it looks for the
//! delimiter occurrence that starts earliest at or after the cursor, emits the
//! text before it as a segment and jumps past the delimiter's literal text.
//! Empty segments are dropped, so runs of delimiters collapse:
//!
//! - `"a,,b"` split on `","` → `["a", "b"]`
//! - `"one two  three"` split on `" "` → `["one", "two", "three"]`
//! - `""` split on anything → `[]`

use crate::error::SplitError;
use std::cmp::Reverse;

/// Rule for choosing between delimiters that start at the same index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// The longest delimiter wins; equal lengths keep the order they were listed in.
    #[default]
    LongestFirst,
    /// The delimiter listed first wins.
    FirstListed,
}

/// A validated, reusable set of delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splitter {
    /// Deduplicated delimiters in tie-break priority order
    delimiters: Vec<String>,
    tie_break: TieBreak,
}

impl Splitter {
    /// Build a splitter with the default [`TieBreak::LongestFirst`] policy.
    pub fn new<I, S>(delimiters: I) -> Result<Self, SplitError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_tie_break(delimiters, TieBreak::default())
    }

    /// Build a splitter with an explicit tie-break policy.
    ///
    /// Fails if no delimiters are given or any of them is empty.
    pub fn with_tie_break<I, S>(delimiters: I, tie_break: TieBreak) -> Result<Self, SplitError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered: Vec<String> = Vec::new();
        for (index, delimiter) in delimiters.into_iter().enumerate() {
            let delimiter = delimiter.into();
            if delimiter.is_empty() {
                return Err(SplitError::EmptyDelimiter { index });
            }
            if !ordered.contains(&delimiter) {
                ordered.push(delimiter);
            }
        }

        if ordered.is_empty() {
            return Err(SplitError::EmptyDelimiters);
        }

        // Stable sort: equal lengths stay in listed order
        if tie_break == TieBreak::LongestFirst {
            ordered.sort_by_key(|delimiter| Reverse(delimiter.len()));
        }

        tracing::trace!(delimiters = ?ordered, ?tie_break, "Built splitter");

        Ok(Self {
            delimiters: ordered,
            tie_break,
        })
    }

    /// Delimiters in the order ties are resolved.
    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Lazily split `source`, skipping empty segments.
    pub fn split<'s, 'a>(&'s self, source: &'a str) -> Split<'s, 'a> {
        Split {
            pieces: self.pieces(source),
        }
    }

    /// Lazily scan `source` into raw pieces, keeping empty segments and
    /// recording which delimiter ended each one.
    ///
    /// Concatenating every `segment` followed by its `delimiter` reproduces
    /// `source` exactly.
    pub fn pieces<'s, 'a>(&'s self, source: &'a str) -> Pieces<'s, 'a> {
        Pieces {
            candidates: self
                .delimiters
                .iter()
                .map(|delimiter| Candidate {
                    delimiter: delimiter.as_str(),
                    start: None,
                })
                .collect(),
            source,
            cursor: 0,
            finished: false,
        }
    }
}

/// One scan step: the text between the cursor and the next delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece<'s, 'a> {
    pub segment: &'a str,
    /// The delimiter consumed after `segment`, or `None` for the tail.
    pub delimiter: Option<&'s str>,
}

/// A delimiter together with its next known occurrence in the source.
#[derive(Debug, Clone)]
struct Candidate<'s> {
    delimiter: &'s str,
    /// Absolute offset of the first occurrence at or after the last search
    start: Option<usize>,
}

impl Candidate<'_> {
    /// Bring `start` up to date for `cursor`. Returns `false` once the
    /// delimiter no longer occurs in the rest of `source`.
    ///
    /// A cached occurrence at or after the cursor is still the first one
    /// there, so each delimiter rescans only text it has not seen yet.
    fn refresh(&mut self, source: &str, cursor: usize) -> bool {
        if self.start.is_some_and(|start| start >= cursor) {
            return true;
        }
        match source[cursor..].find(self.delimiter) {
            Some(offset) => {
                self.start = Some(cursor + offset);
                true
            }
            None => false,
        }
    }
}

/// Iterator over raw [`Piece`]s. See [`Splitter::pieces`].
#[derive(Debug, Clone)]
pub struct Pieces<'s, 'a> {
    /// Delimiters still present in the source, in tie-break priority order
    candidates: Vec<Candidate<'s>>,
    source: &'a str,
    cursor: usize,
    finished: bool,
}

impl<'s, 'a> Iterator for Pieces<'s, 'a> {
    type Item = Piece<'s, 'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let (source, cursor) = (self.source, self.cursor);
        self.candidates
            .retain_mut(|candidate| candidate.refresh(source, cursor));

        // `min_by_key` keeps the first of equal minimums, which is the tie-break winner
        let leftmost = self
            .candidates
            .iter()
            .filter_map(|candidate| candidate.start.map(|start| (start, candidate.delimiter)))
            .min_by_key(|(start, _)| *start);

        match leftmost {
            Some((start, delimiter)) => {
                self.cursor = start + delimiter.len();
                Some(Piece {
                    segment: &source[cursor..start],
                    delimiter: Some(delimiter),
                })
            }
            None => {
                self.finished = true;
                Some(Piece {
                    segment: &source[cursor..],
                    delimiter: None,
                })
            }
        }
    }
}

/// Iterator over non-empty segments. See [`Splitter::split`].
#[derive(Debug, Clone)]
pub struct Split<'s, 'a> {
    pieces: Pieces<'s, 'a>,
}

impl<'a> Iterator for Split<'_, 'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.pieces
            .by_ref()
            .map(|piece| piece.segment)
            .find(|segment| !segment.is_empty())
    }
}

/// Split `source` on every delimiter in `delimiters`, dropping empty segments.
///
/// One-shot form of [`Splitter::split`] using the default tie-break policy.
pub fn split_by_delimiters<I, S>(source: &str, delimiters: I) -> Result<Vec<String>, SplitError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let splitter = Splitter::new(delimiters)?;
    Ok(splitter.split(source).map(str::to_owned).collect())
}
