//! Parsing for transition-selection strings
//!
//! The classic diagnostic tools select transitions with a compact comma
//! grammar: 1-based level indices grouped in pairs, terminated by a slash.
//! `"1,2,1,3/"` selects the 1→2 and 1→3 transitions. Empty or malformed
//! groups are ignored silently; whether the surviving set is usable is
//! checked at the point of use.

use crate::error::{Error, Result};

use nom::character::complete::{char, digit1, space0};
use nom::combinator::map_res;
use nom::multi::separated_list0;
use nom::sequence::{delimited, separated_pair};
use nom::IResult;

/// A parsed set of transitions
///
/// Pairs are stored zero-based as `(lower, upper)` regardless of the order
/// they were written in.
///
/// ```rust
/// # use nebtools_cel::LineSelection;
/// let nebular = LineSelection::parse("1,2,1,3/");
/// assert_eq!(nebular.pairs, vec![(0, 1), (0, 2)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSelection {
    /// Zero-based `(lower, upper)` level pairs
    pub pairs: Vec<(usize, usize)>,
}

/// A 1-based level index, tolerant of surrounding spaces
fn index(i: &str) -> IResult<&str, usize> {
    map_res(delimited(space0, digit1, space0), str::parse)(i)
}

/// One selection group, two indices joined by a comma
fn index_pair(i: &str) -> IResult<&str, (usize, usize)> {
    separated_pair(index, char(','), index)(i)
}

/// As many complete groups as the input yields
fn pair_list(i: &str) -> IResult<&str, Vec<(usize, usize)>> {
    separated_list0(char(','), index_pair)(i)
}

impl LineSelection {
    /// Parse a selection string
    ///
    /// Parsing never fails: groups that are incomplete, non-numeric,
    /// degenerate (equal indices) or reference level 0 are dropped
    /// silently, along with anything after the terminating slash.
    pub fn parse(selection: &str) -> Self {
        let pairs = match pair_list(selection) {
            Ok((_, raw)) => raw
                .into_iter()
                .filter(|(a, b)| *a != 0 && *b != 0 && a != b)
                .map(|(a, b)| (a.min(b) - 1, a.max(b) - 1))
                .collect(),
            Err(_) => Vec::new(),
        };
        Self { pairs }
    }

    /// Check the selection is usable against an `count`-level model
    pub fn validate(&self, count: usize) -> Result<()> {
        if self.pairs.is_empty() {
            return Err(Error::EmptySelection);
        }
        match self.pairs.iter().find(|(_, upper)| *upper >= count) {
            Some((_, upper)) => Err(Error::LevelOutOfRange {
                level: upper + 1,
                count,
            }),
            None => Ok(()),
        }
    }

    /// Number of selected transitions
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when no group survived parsing
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl From<&str> for LineSelection {
    fn from(selection: &str) -> Self {
        Self::parse(selection)
    }
}
