//! Page count, position and extent comparison.

use crate::analyze::{AnalyzedDocument, PositionedChar, Range};
use serde::{Deserialize, Serialize};

use super::CountDiff;

/// Layout differences between two documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDiff {
    pub page_count_diff: CountDiff,
    pub position_differences: PositionDifferences,
    pub dimension_differences: DimensionDifferences,
}

/// Index-aligned differences of the positioned character sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionDifferences {
    pub total_differences: usize,
    pub differences: Vec<PositionDifference>,
}

/// One differing index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PositionDifference {
    /// Index exists only in the second document
    Added {
        position: PositionedChar,
        index: usize,
    },
    /// Index exists only in the first document
    Removed {
        position: PositionedChar,
        index: usize,
    },
    /// Both documents have the index but the character or its position differs
    Moved {
        from: PositionedChar,
        to: PositionedChar,
        index: usize,
        x_diff: i64,
        y_diff: i64,
    },
}

impl PositionDifference {
    pub fn index(&self) -> usize {
        match self {
            PositionDifference::Added { index, .. }
            | PositionDifference::Removed { index, .. }
            | PositionDifference::Moved { index, .. } => *index,
        }
    }
}

/// Extent change of one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeDiff {
    pub file1: Range,
    pub file2: Range,
    pub min_diff: i64,
    pub max_diff: i64,
}

impl RangeDiff {
    fn new(file1: Range, file2: Range) -> Self {
        Self {
            file1,
            file2,
            min_diff: i64::from(file2.min) - i64::from(file1.min),
            max_diff: i64::from(file2.max) - i64::from(file1.max),
        }
    }

    pub fn changed(&self) -> bool {
        self.min_diff != 0 || self.max_diff != 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionDifferences {
    pub x_range: RangeDiff,
    pub y_range: RangeDiff,
}

pub fn compare(doc1: &AnalyzedDocument, doc2: &AnalyzedDocument) -> LayoutDiff {
    let ranges1 = &doc1.layout.position_ranges;
    let ranges2 = &doc2.layout.position_ranges;

    LayoutDiff {
        page_count_diff: CountDiff::new(doc1.layout.total_pages, doc2.layout.total_pages),
        position_differences: compare_positions(&doc1.positions, &doc2.positions),
        dimension_differences: DimensionDifferences {
            x_range: RangeDiff::new(ranges1.x, ranges2.x),
            y_range: RangeDiff::new(ranges1.y, ranges2.y),
        },
    }
}

/// Compare two position sequences index by index.
///
/// There is no sequence alignment: an insertion or deletion shifts every
/// later index, so each later character is reported as `moved`.
pub fn compare_positions(
    positions1: &[PositionedChar],
    positions2: &[PositionedChar],
) -> PositionDifferences {
    let max_len = positions1.len().max(positions2.len());
    let mut differences = Vec::new();

    for index in 0..max_len {
        match (positions1.get(index), positions2.get(index)) {
            (None, Some(pos2)) => differences.push(PositionDifference::Added {
                position: *pos2,
                index,
            }),
            (Some(pos1), None) => differences.push(PositionDifference::Removed {
                position: *pos1,
                index,
            }),
            (Some(pos1), Some(pos2))
                if pos1.x != pos2.x || pos1.y != pos2.y || pos1.char_code != pos2.char_code =>
            {
                differences.push(PositionDifference::Moved {
                    from: *pos1,
                    to: *pos2,
                    index,
                    x_diff: i64::from(pos2.x) - i64::from(pos1.x),
                    y_diff: i64::from(pos2.y) - i64::from(pos1.y),
                })
            }
            _ => {}
        }
    }

    PositionDifferences {
        total_differences: differences.len(),
        differences,
    }
}
