//! Page-level types.

use super::Command;
use serde::{Deserialize, Serialize};

/// Number of `\count` registers recorded by every `bop`.
pub const PAGE_COUNTERS: usize = 10;

/// A single page in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// TeX `\count0`..`\count9` at shipout; `counters[0]` is the page number
    pub counters: [i32; PAGE_COUNTERS],

    /// Byte offset of the previous `bop`, or -1 for the first page
    pub previous_page_offset: i32,

    /// Commands in encounter order (the closing `eop` is not stored)
    pub commands: Vec<Command>,
}

impl Page {
    /// Create a page with the given counters and no commands.
    pub fn new(counters: [i32; PAGE_COUNTERS], previous_page_offset: i32) -> Self {
        Self {
            counters,
            previous_page_offset,
            commands: Vec::new(),
        }
    }

    /// Create a page whose `\count0` is `number` and other counters are zero.
    pub fn numbered(number: i32) -> Self {
        let mut counters = [0; PAGE_COUNTERS];
        counters[0] = number;
        Self::new(counters, -1)
    }

    /// The conventional page number (`\count0`).
    pub fn number(&self) -> i32 {
        self.counters[0]
    }

    /// Append a command to the page.
    pub fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Number of commands on the page.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Number of character-drawing commands on the page.
    pub fn character_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_char()).count()
    }

    /// Check if the page has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::numbered(1)
    }
}
