// Copyright 2025 Cowboy AI, LLC.

//! Genomic intervals as category elements
//!
//! Coordinates are 1-based and closed, so `20:1-100` covers both position 1
//! and position 100 on contig `20`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::builder::OrderedSource;
use crate::errors::{CategoryError, CategoryResult};
use crate::relation::SpatialRelations;

/// A closed interval on a named contig
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    contig: String,
    start: u64,
    end: u64,
}

impl Interval {
    /// Create an interval; `start` is at least 1 and `end` at least `start - 1`.
    ///
    /// `end == start - 1` describes an empty interval positioned before `start`.
    pub fn new(contig: impl Into<String>, start: u64, end: u64) -> CategoryResult<Self> {
        let contig = contig.into();
        if contig.is_empty() {
            return Err(CategoryError::invalid_argument("interval contig must not be empty"));
        }
        if start == 0 {
            return Err(CategoryError::invalid_argument(format!(
                "interval start is 1-based, got 0 on {contig}"
            )));
        }
        if end < start - 1 {
            return Err(CategoryError::invalid_argument(format!(
                "interval end {end} precedes start {start} on {contig}"
            )));
        }
        Ok(Self { contig, start, end })
    }

    /// Contig name
    pub fn contig(&self) -> &str {
        &self.contig
    }

    /// First covered position
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Last covered position
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of covered positions
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start - 1)
    }

    /// True for zero-length intervals
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unchecked wire form, validated through [`Interval::new`]
#[derive(Deserialize)]
struct RawInterval {
    contig: String,
    start: u64,
    end: u64,
}

impl TryFrom<RawInterval> for Interval {
    type Error = CategoryError;

    fn try_from(raw: RawInterval) -> CategoryResult<Self> {
        Interval::new(raw.contig, raw.start, raw.end)
    }
}

impl SpatialRelations for Interval {
    fn contains(&self, other: &Self) -> bool {
        self.contig == other.contig && self.start <= other.start && self.end >= other.end
    }

    fn overlaps(&self, other: &Self) -> bool {
        self.contig == other.contig && self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.contig, self.start, self.end)
    }
}

/// Named, ordered list of intervals
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntervalList {
    name: String,
    intervals: Vec<Interval>,
}

impl IntervalList {
    /// Empty list called `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            intervals: Vec::new(),
        }
    }

    /// List name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an interval, keeping insertion order
    pub fn push(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }

    /// Intervals in list order
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Number of intervals
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// True when the list holds no intervals
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Sort by contig, then start, then end
    pub fn sort(&mut self) {
        self.intervals.sort();
    }
}

impl OrderedSource for IntervalList {
    type Element = Interval;

    fn ordered_elements(&self) -> &[Interval] {
        &self.intervals
    }
}

impl Extend<Interval> for IntervalList {
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iter: I) {
        self.intervals.extend(iter);
    }
}
