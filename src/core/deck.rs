//! Swipe deck: the card stack behind the interactive view
//!
//! Holds the cards and the index of the top card. Swiping right hands the
//! card back to the caller for saving; swiping left discards it.

use crate::types::CafeRecord;

/// Swipe direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Skip
    Left,
    /// Save
    Right,
}

impl Swipe {
    /// Parse a user command: `l`/`left`, `r`/`right`
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "l" | "left" | "skip" | "n" => Some(Swipe::Left),
            "r" | "right" | "save" | "y" => Some(Swipe::Right),
            _ => None,
        }
    }
}

/// What a swipe did
#[derive(Debug, Clone, PartialEq)]
pub enum SwipeOutcome {
    /// Card dismissed to the left
    Skipped(CafeRecord),
    /// Card dismissed to the right; the caller persists it
    Save(CafeRecord),
    /// No card left to swipe
    Empty,
}

/// Ordered card stack with a cursor
#[derive(Debug, Clone, Default)]
pub struct SwipeDeck {
    cards: Vec<CafeRecord>,
    index: usize,
}

impl SwipeDeck {
    pub fn new(cards: Vec<CafeRecord>) -> Self {
        Self { cards, index: 0 }
    }

    /// Card on top of the stack
    pub fn current(&self) -> Option<&CafeRecord> {
        self.cards.get(self.index)
    }

    /// Position of the top card (0-based)
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards not yet swiped
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.index)
    }

    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }

    /// Swipe the top card
    pub fn swipe(&mut self, direction: Swipe) -> SwipeOutcome {
        let Some(card) = self.cards.get(self.index).cloned() else {
            return SwipeOutcome::Empty;
        };
        self.index += 1;

        match direction {
            Swipe::Left => SwipeOutcome::Skipped(card),
            Swipe::Right => SwipeOutcome::Save(card),
        }
    }
}
