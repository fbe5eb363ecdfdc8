//! The flip resolver.
//!
//! Resolution repeats a single move until the stack is happy:
//! find the lowest burnt pancake, then flip everything from the top of the
//! stack down to and including it. This is a fixed greedy procedure, not an
//! optimal pancake sort.
//!
//! Quick start:
//!
//! ```
//! use happy_pancakes::{resolve, Stack};
//!
//! let stack: Stack = "+-".parse().unwrap();
//! let resolution = resolve(1, &stack);
//! assert_eq!(resolution.flip_count, 2);
//! assert_eq!(resolution.flipped.to_string(), "++");
//! ```

use tracing::{debug, trace};

use crate::Stack;

/// The outcome of resolving one stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// 1-based position of the stack in the input.
    pub case_number: usize,
    /// The stack exactly as supplied.
    pub original: Stack,
    /// The final, all happy side up stack.
    pub flipped: Stack,
    /// Number of flips performed.
    pub flip_count: usize,
}

/// One flip, as reported to a flip observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipStep {
    /// 1-based flip number within the case.
    pub step: usize,
    /// Index of the burnt pancake the flip went through.
    pub index: usize,
    pub before: Stack,
    pub after: Stack,
}

/// Resolves stacks, optionally reporting every flip to an observer.
#[derive(Default)]
pub struct FlipResolver {
    flip_observer: Option<Box<dyn Fn(&FlipStep) + Send + Sync>>,
}

impl FlipResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide a flip observer. It is called once per flip, after the flip is applied.
    pub fn set_flip_observer<F>(&mut self, observer: F)
    where
        F: Fn(&FlipStep) + Send + Sync + 'static,
    {
        self.flip_observer = Some(Box::new(observer));
    }

    /// Flip `stack` until no burnt pancake remains.
    ///
    /// The lowest burnt pancake is looked up again over the whole stack after
    /// every flip. Each flip turns that pancake happy side up and leaves the
    /// ones below it alone, so the count never exceeds the stack length.
    pub fn resolve(&self, case_number: usize, stack: &Stack) -> Resolution {
        let mut current = stack.clone();
        let mut flip_count = 0;

        while let Some(index) = current.last_down() {
            let next = current.flip_through(index);
            flip_count += 1;
            trace!(case_number, step = flip_count, index, before = %current, after = %next, "flip");

            if let Some(observer) = self.flip_observer.as_ref() {
                (observer)(&FlipStep {
                    step: flip_count,
                    index,
                    before: current,
                    after: next.clone(),
                });
            }

            current = next;
        }

        debug!(case_number, original = %stack, flip_count, "resolved stack");

        Resolution {
            case_number,
            original: stack.clone(),
            flipped: current,
            flip_count,
        }
    }

    /// Resolve every stack in input order, numbering cases from 1.
    pub fn resolve_all(&self, stacks: &[Stack]) -> Vec<Resolution> {
        stacks
            .iter()
            .enumerate()
            .map(|(i, stack)| self.resolve(i + 1, stack))
            .collect()
    }
}

/// Resolve a single stack without an observer.
pub fn resolve(case_number: usize, stack: &Stack) -> Resolution {
    FlipResolver::new().resolve(case_number, stack)
}

/// Resolve every stack in input order without an observer.
pub fn resolve_all(stacks: &[Stack]) -> Vec<Resolution> {
    FlipResolver::new().resolve_all(stacks)
}
