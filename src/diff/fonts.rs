//! Font usage comparison keyed by font number.

use crate::analyze::{AnalyzedDocument, FontMap};
use serde::{Deserialize, Serialize};

/// Font differences between two documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontsDiff {
    pub font_usage_diff: FontUsageDiff,
    pub added_fonts: Vec<FontEntry>,
    pub removed_fonts: Vec<FontEntry>,
    pub changed_usage: Vec<UsageChange>,
}

impl FontsDiff {
    /// Added, removed and changed-usage fonts together.
    pub fn change_count(&self) -> usize {
        self.added_fonts.len() + self.removed_fonts.len() + self.changed_usage.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontUsageDiff {
    pub file1_font_count: usize,
    pub file2_font_count: usize,
    pub common_fonts: usize,
    /// Whether the two sets of font numbers differ
    pub different: bool,
}

/// A font present in only one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontEntry {
    pub font_num: u32,
    pub usage_count: u32,
    pub pages: Vec<i32>,
}

/// A font present in both documents with different selection counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageChange {
    pub font_num: u32,
    pub file1_usage: u32,
    pub file2_usage: u32,
    pub usage_diff: i64,
}

pub fn compare(doc1: &AnalyzedDocument, doc2: &AnalyzedDocument) -> FontsDiff {
    compare_fonts(&doc1.fonts, &doc2.fonts)
}

pub fn compare_fonts(fonts1: &FontMap, fonts2: &FontMap) -> FontsDiff {
    let only_in = |a: &FontMap, b: &FontMap| -> Vec<FontEntry> {
        a.iter()
            .filter(|(font_num, _)| !b.contains_key(font_num))
            .map(|(font_num, usage)| FontEntry {
                font_num: *font_num,
                usage_count: usage.usage_count,
                pages: usage.pages.clone(),
            })
            .collect()
    };

    let common: Vec<u32> = fonts1
        .keys()
        .filter(|font_num| fonts2.contains_key(font_num))
        .copied()
        .collect();

    let changed_usage = common
        .iter()
        .filter_map(|font_num| {
            let usage1 = fonts1[font_num].usage_count;
            let usage2 = fonts2[font_num].usage_count;
            (usage1 != usage2).then(|| UsageChange {
                font_num: *font_num,
                file1_usage: usage1,
                file2_usage: usage2,
                usage_diff: i64::from(usage2) - i64::from(usage1),
            })
        })
        .collect();

    FontsDiff {
        font_usage_diff: FontUsageDiff {
            file1_font_count: fonts1.len(),
            file2_font_count: fonts2.len(),
            common_fonts: common.len(),
            different: !fonts1.keys().eq(fonts2.keys()),
        },
        added_fonts: only_in(fonts2, fonts1),
        removed_fonts: only_in(fonts1, fonts2),
        changed_usage,
    }
}
