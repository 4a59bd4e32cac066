//! Character count, special, rule and text comparison.

use crate::analyze::{codes_to_text, AnalyzedDocument};
use crate::model::{Command, RawBytes};
use serde::{Deserialize, Serialize};

use super::CountDiff;

/// Content differences between two documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDiff {
    pub character_count_diff: CountDiff,
    pub special_commands_diff: ListDiff<RawBytes>,
    pub rules_diff: ListDiff<Command>,
    pub text_differences: TextDifferences,
}

/// Comparison of two ordered lists.
///
/// `changed` is ordered equality of the whole lists; `added` and `removed`
/// are list subtraction, so reordering alone leaves both empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDiff<T> {
    pub file1_count: usize,
    pub file2_count: usize,
    pub added: Vec<T>,
    pub removed: Vec<T>,
    pub changed: bool,
}

impl<T: Clone + PartialEq> ListDiff<T> {
    pub fn new(list1: &[T], list2: &[T]) -> Self {
        Self {
            file1_count: list1.len(),
            file2_count: list2.len(),
            added: subtract(list2, list1),
            removed: subtract(list1, list2),
            changed: list1 != list2,
        }
    }
}

/// Items of `from` with no equal item in `other`.
fn subtract<T: Clone + PartialEq>(from: &[T], other: &[T]) -> Vec<T> {
    from.iter()
        .filter(|item| !other.contains(item))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDifferences {
    pub pages_with_differences: usize,
    pub differences: Vec<PageTextDiff>,
}

/// Reconstructed text of one page in both documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTextDiff {
    /// Page index (0-based)
    pub page: usize,
    pub file1_chars: usize,
    pub file2_chars: usize,
    pub text1: String,
    pub text2: String,
    pub changed: bool,
}

pub fn compare(doc1: &AnalyzedDocument, doc2: &AnalyzedDocument) -> ContentDiff {
    ContentDiff {
        character_count_diff: CountDiff::new(
            doc1.content.total_characters,
            doc2.content.total_characters,
        ),
        special_commands_diff: ListDiff::new(
            &doc1.content.special_commands,
            &doc2.content.special_commands,
        ),
        rules_diff: ListDiff::new(&doc1.content.rules, &doc2.content.rules),
        text_differences: compare_texts(&doc1.page_codes, &doc2.page_codes),
    }
}

/// Compare the drawn character codes of each page; a page missing on one
/// side counts as empty.
///
/// Equality is decided on the codes, not on their text rendering, so codes
/// that render alike (such as two invalid scalars) still differ.
pub fn compare_texts(codes1: &[Vec<u32>], codes2: &[Vec<u32>]) -> TextDifferences {
    let max_pages = codes1.len().max(codes2.len());
    let differences: Vec<PageTextDiff> = (0..max_pages)
        .filter_map(|page| {
            let page1 = codes1.get(page).map(Vec::as_slice).unwrap_or_default();
            let page2 = codes2.get(page).map(Vec::as_slice).unwrap_or_default();
            if page1 == page2 {
                return None;
            }
            Some(PageTextDiff {
                page,
                file1_chars: page1.len(),
                file2_chars: page2.len(),
                text1: codes_to_text(page1),
                text2: codes_to_text(page2),
                changed: true,
            })
        })
        .collect();

    TextDifferences {
        pages_with_differences: differences.len(),
        differences,
    }
}
