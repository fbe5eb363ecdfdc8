//! Run configuration.
//!
//! Values are resolved once, flags first, then environment, then defaults,
//! and validated into an immutable [`Config`] that is passed by value to the
//! rest of the program.

use std::ops::RangeInclusive;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::generator::generate_stacks;
use crate::stack::{Stack, StackError, parse_stack_list};

pub const DEFAULT_STACKS: &str = "-,-+,+-,+++,--+-";
pub const DEFAULT_CASES: i64 = 5;
pub const DEFAULT_MAX_LENGTH: i64 = 10;
pub const CASES_RANGE: RangeInclusive<i64> = 1..=100;
pub const MAX_LENGTH_RANGE: RangeInclusive<i64> = 1..=50;

pub const CASES_ENV: &str = "PANCAKES_CASES";
pub const MAX_LENGTH_ENV: &str = "PANCAKES_MAX_LENGTH";

/// Errors raised while validating the run configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Please enter a number of test cases between 1 and 100 (got {value})")]
    CasesOutOfRange { value: i64 },

    #[error("Please enter a max stack length between 1 and 50 (got {value})")]
    MaxLengthOutOfRange { value: i64 },
}

/// Where the stacks for this run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackSource {
    /// Comma-separated stack text supplied by the user (or the default list).
    Listed(String),
    /// Randomly generated stacks.
    Random,
}

impl StackSource {
    /// `random` and an empty value both ask for generated stacks.
    pub fn from_flag(value: Option<&str>) -> Self {
        match value {
            None => StackSource::Listed(DEFAULT_STACKS.to_string()),
            Some(v) if v.is_empty() || v == "random" => StackSource::Random,
            Some(v) => StackSource::Listed(v.to_string()),
        }
    }
}

/// Options as they arrive from the command line, before validation.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub stacks: Option<String>,
    pub cases: Option<i64>,
    pub max_length: Option<i64>,
    pub seed: Option<u64>,
    pub debug: bool,
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: StackSource,
    pub cases: usize,
    pub max_length: usize,
    pub seed: Option<u64>,
    pub debug: bool,
    pub color: bool,
}

impl Config {
    /// Resolve options against the process environment.
    pub fn from_options(options: Options) -> Result<Self, ConfigError> {
        Self::from_options_with_env(options, |key| std::env::var(key).ok())
    }

    /// Resolve options using `env` for environment lookups.
    /// Unparseable environment values are ignored.
    pub fn from_options_with_env<F>(options: Options, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = |key: &str| env(key).and_then(|s| s.trim().parse::<i64>().ok());

        let cases = options
            .cases
            .or_else(|| from_env(CASES_ENV))
            .unwrap_or(DEFAULT_CASES);
        if !CASES_RANGE.contains(&cases) {
            return Err(ConfigError::CasesOutOfRange { value: cases });
        }

        let max_length = options
            .max_length
            .or_else(|| from_env(MAX_LENGTH_ENV))
            .unwrap_or(DEFAULT_MAX_LENGTH);
        if !MAX_LENGTH_RANGE.contains(&max_length) {
            return Err(ConfigError::MaxLengthOutOfRange { value: max_length });
        }

        Ok(Self {
            source: StackSource::from_flag(options.stacks.as_deref()),
            // both ranges are positive, so the casts are lossless
            cases: cases as usize,
            max_length: max_length as usize,
            seed: options.seed,
            debug: options.debug,
            color: options.color,
        })
    }

    /// Build the stacks this run will resolve.
    pub fn stacks(&self) -> Result<Vec<Stack>, StackError> {
        match &self.source {
            StackSource::Listed(text) => parse_stack_list(text),
            StackSource::Random => {
                let stacks = match self.seed {
                    Some(seed) => generate_stacks(&mut StdRng::seed_from_u64(seed), self.cases, self.max_length),
                    None => generate_stacks(&mut rand::thread_rng(), self.cases, self.max_length),
                };
                Ok(stacks)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = Config::from_options_with_env(Options::default(), no_env).unwrap();
        assert_eq!(cfg.source, StackSource::Listed(DEFAULT_STACKS.to_string()));
        assert_eq!(cfg.cases, 5);
        assert_eq!(cfg.max_length, 10);
    }

    #[test]
    fn random_and_empty_select_generation() {
        assert_eq!(StackSource::from_flag(Some("random")), StackSource::Random);
        assert_eq!(StackSource::from_flag(Some("")), StackSource::Random);
        assert_eq!(StackSource::from_flag(Some("+-")), StackSource::Listed("+-".into()));
    }

    #[test]
    fn cases_out_of_range_is_rejected() {
        for value in [0, 101, 150, -3] {
            let opts = Options { cases: Some(value), ..Options::default() };
            assert_eq!(
                Config::from_options_with_env(opts, no_env),
                Err(ConfigError::CasesOutOfRange { value })
            );
        }
    }

    #[test]
    fn max_length_out_of_range_is_rejected() {
        for value in [0, 51] {
            let opts = Options { max_length: Some(value), ..Options::default() };
            assert_eq!(
                Config::from_options_with_env(opts, no_env),
                Err(ConfigError::MaxLengthOutOfRange { value })
            );
        }
    }

    #[test]
    fn range_edges_are_accepted() {
        let opts = Options { cases: Some(100), max_length: Some(1), ..Options::default() };
        let cfg = Config::from_options_with_env(opts, no_env).unwrap();
        assert_eq!((cfg.cases, cfg.max_length), (100, 1));
    }

    #[test]
    fn env_fills_in_missing_flags() {
        let env = |key: &str| match key {
            CASES_ENV => Some("12".to_string()),
            MAX_LENGTH_ENV => Some("not a number".to_string()),
            _ => None,
        };
        let cfg = Config::from_options_with_env(Options::default(), env).unwrap();
        assert_eq!(cfg.cases, 12);
        assert_eq!(cfg.max_length, 10);
    }

    #[test]
    fn flags_win_over_env() {
        let env = |_: &str| Some("7".to_string());
        let opts = Options { cases: Some(3), ..Options::default() };
        let cfg = Config::from_options_with_env(opts, env).unwrap();
        assert_eq!(cfg.cases, 3);
        assert_eq!(cfg.max_length, 7);
    }

    #[test]
    fn env_values_are_validated_too() {
        let env = |key: &str| (key == CASES_ENV).then(|| "500".to_string());
        assert_eq!(
            Config::from_options_with_env(Options::default(), env),
            Err(ConfigError::CasesOutOfRange { value: 500 })
        );
    }

    #[test]
    fn seeded_random_stacks_are_reproducible() {
        let opts = Options {
            stacks: Some("random".into()),
            cases: Some(8),
            seed: Some(42),
            ..Options::default()
        };
        let cfg = Config::from_options_with_env(opts, no_env).unwrap();
        let first = cfg.stacks().unwrap();
        assert_eq!(first.len(), 8);
        assert_eq!(first, cfg.stacks().unwrap());
    }

    #[test]
    fn listed_stacks_are_validated() {
        let opts = Options { stacks: Some("+,+a".into()), ..Options::default() };
        let cfg = Config::from_options_with_env(opts, no_env).unwrap();
        assert_eq!(
            cfg.stacks(),
            Err(StackError::InvalidCharacter { ch: 'a', pos: 1, case: 2 })
        );
    }
}
