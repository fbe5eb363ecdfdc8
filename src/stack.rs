//! Pancakes and the stacks they are piled into.
//!
//! A stack is written top-first as a string over `+` (happy side up) and
//! `-` (burnt side up). Parsing is strict: an empty stack or any other
//! character is rejected with a [`StackError`] that points at the offending
//! position.

use std::fmt;
use std::str::FromStr;

/// A single pancake, either happy side up or burnt side up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pancake {
    /// Happy side up, written `+`.
    Up,
    /// Burnt side up, written `-`.
    Down,
}

impl Pancake {
    /// The pancake after being turned over.
    pub fn flipped(self) -> Self {
        match self {
            Pancake::Up => Pancake::Down,
            Pancake::Down => Pancake::Up,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Pancake::Up => '+',
            Pancake::Down => '-',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Pancake::Up),
            '-' => Some(Pancake::Down),
            _ => None,
        }
    }
}

/// Errors that can occur while reading a stack from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    /// The stack text had no pancakes in it.
    #[error("Stack error: case {case} is empty")]
    Empty { case: usize },

    /// Encountered a character other than `+` or `-`.
    #[error("Stack error: invalid pancake '{ch}' in case {case} at position {pos}")]
    InvalidCharacter { ch: char, pos: usize, case: usize },
}

/// An immutable, non-empty stack of pancakes, top of the stack first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stack {
    pancakes: Vec<Pancake>,
}

impl Stack {
    /// Build a stack from pancakes. Returns `None` when `pancakes` is empty.
    pub fn new(pancakes: Vec<Pancake>) -> Option<Self> {
        if pancakes.is_empty() {
            None
        } else {
            Some(Self { pancakes })
        }
    }

    /// Build a stack from its top pancake and the rest.
    pub(crate) fn from_top(top: Pancake, rest: impl IntoIterator<Item = Pancake>) -> Self {
        let mut pancakes = vec![top];
        pancakes.extend(rest);
        Self { pancakes }
    }

    /// Parse stack text for the given 1-based case number. The case number is
    /// only used to make the error point at the right input.
    pub fn parse_case(text: &str, case: usize) -> Result<Self, StackError> {
        let pancakes = text
            .chars()
            .enumerate()
            .map(|(pos, ch)| {
                Pancake::from_symbol(ch).ok_or(StackError::InvalidCharacter { ch, pos, case })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(pancakes).ok_or(StackError::Empty { case })
    }

    pub fn len(&self) -> usize {
        self.pancakes.len()
    }

    /// Whether the stack has no pancakes.
    pub fn is_empty(&self) -> bool {
        self.pancakes.is_empty()
    }

    pub fn pancakes(&self) -> &[Pancake] {
        &self.pancakes
    }

    /// Index of the lowest burnt pancake, scanning the whole stack.
    pub fn last_down(&self) -> Option<usize> {
        self.pancakes.iter().rposition(|p| *p == Pancake::Down)
    }

    pub fn is_happy(&self) -> bool {
        self.last_down().is_none()
    }

    /// A new stack with every pancake in `0..=index` turned over.
    /// Pancakes below `index` are untouched; an `index` past the bottom flips
    /// the whole stack.
    pub fn flip_through(&self, index: usize) -> Stack {
        let pancakes = self
            .pancakes
            .iter()
            .enumerate()
            .map(|(i, p)| if i <= index { p.flipped() } else { *p })
            .collect();
        Stack { pancakes }
    }
}

impl FromStr for Stack {
    type Err = StackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stack::parse_case(s, 1)
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.pancakes.iter().map(|p| p.symbol()).collect();
        // pad() so width/alignment specifiers work in table rows
        f.pad(&text)
    }
}

/// Split comma-separated stack text into stacks, numbering cases from 1.
/// Whitespace around each segment is ignored.
pub fn parse_stack_list(text: &str) -> Result<Vec<Stack>, StackError> {
    text.split(',')
        .enumerate()
        .map(|(i, segment)| Stack::parse_case(segment.trim(), i + 1))
        .collect()
}
