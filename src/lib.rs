//! Happy pancakes: flip stacks of pancakes until every one is happy side up.
//!
//! A stack is a string over `+` (happy side up) and `-` (burnt side up),
//! top of the stack first. Each stack is resolved by the same greedy move,
//! repeated until no burnt pancake is left:
//!
//! 1. find the lowest burnt pancake;
//! 2. flip every pancake from the top down to and including it.
//!
//! The number of flips is reported next to the original and final stacks.
//! This is not an optimal pancake sort, only the fixed greedy procedure.
//!
//! Quick start:
//!
//! ```
//! use happy_pancakes::{resolve_all, parse_stack_list};
//!
//! let stacks = parse_stack_list("-,-+,+-,+++,--+-").unwrap();
//! let counts: Vec<usize> = resolve_all(&stacks).iter().map(|r| r.flip_count).collect();
//! assert_eq!(counts, vec![1, 1, 2, 0, 3]);
//! ```

pub mod cli_util;
pub mod commands;
pub mod config;
pub mod generator;
pub mod logger;
pub mod resolver;
pub mod stack;
pub mod table;
pub mod theme;

pub use config::{Config, ConfigError, Options, StackSource};
pub use generator::{generate_stack, generate_stacks};
pub use resolver::{FlipResolver, FlipStep, Resolution, resolve, resolve_all};
pub use stack::{Pancake, Stack, StackError, parse_stack_list};
pub use table::TableWriter;
pub use theme::Theme;
