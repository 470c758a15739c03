//! Grid-area grammar.
//!
//! A template's structure is written as rows of whitespace-separated region
//! names, the same shape as CSS `grid-template-areas`:
//!
//! ```text
//! title  title
//! date   date
//! slot-1 slot-2
//! slot-1 slot-3
//! ```
//!
//! Region names are `title`, `date`, `slot-<n>` (n ≥ 1) and `.` for an empty
//! cell. Every row must have the same number of columns.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// A named region of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Title,
    Date,
    /// Content slot, 1-based.
    Slot(usize),
    Empty,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Title => f.write_str("title"),
            Region::Date => f.write_str("date"),
            Region::Slot(n) => write!(f, "slot-{}", n),
            Region::Empty => f.write_str("."),
        }
    }
}

impl FromStr for Region {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Region::Title),
            "date" => Ok(Region::Date),
            "." => Ok(Region::Empty),
            _ => s
                .strip_prefix("slot-")
                .and_then(|n| n.parse::<usize>().ok())
                .filter(|n| *n >= 1)
                .map(Region::Slot)
                .ok_or_else(|| LayoutError::InvalidGrid(format!("unknown region '{}'", s))),
        }
    }
}

/// Bounding box of a region in grid cells (inclusive bounds).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRect {
    pub first_row: usize,
    pub last_row: usize,
    pub first_col: usize,
    pub last_col: usize,
}

impl CellRect {
    pub fn area(&self) -> usize {
        (self.last_row - self.first_row + 1) * (self.last_col - self.first_col + 1)
    }
}

/// A parsed grid of regions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct GridAreas {
    rows: Vec<Vec<Region>>,
}

impl GridAreas {
    /// Parses rows of region names.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, LayoutError> {
        let mut parsed = Vec::with_capacity(rows.len());
        for row in rows {
            let cells = row
                .as_ref()
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<Vec<Region>, _>>()?;
            if cells.is_empty() {
                return Err(LayoutError::InvalidGrid("empty row".to_string()));
            }
            parsed.push(cells);
        }

        if let Some(first) = parsed.first() {
            let width = first.len();
            if let Some(bad) = parsed.iter().position(|r| r.len() != width) {
                return Err(LayoutError::InvalidGrid(format!(
                    "row {} has {} columns, expected {}",
                    bad + 1,
                    parsed[bad].len(),
                    width
                )));
            }
        }

        Ok(Self { rows: parsed })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<Region>] {
        &self.rows
    }

    /// Bounding box of `region`, or `None` if it does not appear.
    pub fn bounds(&self, region: Region) -> Option<CellRect> {
        let mut rect: Option<CellRect> = None;
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if *cell != region {
                    continue;
                }
                rect = Some(match rect {
                    None => CellRect {
                        first_row: r,
                        last_row: r,
                        first_col: c,
                        last_col: c,
                    },
                    Some(b) => CellRect {
                        first_row: b.first_row.min(r),
                        last_row: b.last_row.max(r),
                        first_col: b.first_col.min(c),
                        last_col: b.last_col.max(c),
                    },
                });
            }
        }
        rect
    }

    /// Returns `true` when `region` fills its bounding box exactly.
    pub fn is_rectangular(&self, region: Region) -> bool {
        let Some(rect) = self.bounds(region) else {
            return false;
        };
        let cells = self.rows.iter().flatten().filter(|c| **c == region).count();
        cells == rect.area()
    }

    /// Every slot number that appears, ascending.
    pub fn slots(&self) -> BTreeSet<usize> {
        self.rows
            .iter()
            .flatten()
            .filter_map(|c| match c {
                Region::Slot(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    /// Indices of rows that contain at least one slot, ascending.
    pub fn slot_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.iter().any(|c| matches!(c, Region::Slot(_))))
            .map(|(i, _)| i)
            .collect()
    }

    /// Position within [`slot_rows`](Self::slot_rows) of the row where slot `k` ends.
    pub fn slot_row_ordinal(&self, k: usize) -> Option<usize> {
        let last_row = self.bounds(Region::Slot(k))?.last_row;
        self.slot_rows().iter().position(|r| *r == last_row)
    }
}

impl TryFrom<Vec<String>> for GridAreas {
    type Error = LayoutError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        Self::parse(&rows)
    }
}

impl From<GridAreas> for Vec<String> {
    fn from(areas: GridAreas) -> Self {
        areas
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(Region::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}
