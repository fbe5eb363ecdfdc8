use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex};

use clap::Args;
use tracing::info;

use crate::cli_util::print_stack_error;
use crate::config::{Config, ConfigError, Options, StackSource};
use crate::resolver::{FlipResolver, FlipStep};
use crate::table::TableWriter;
use crate::theme::Theme;

#[derive(Args, Debug, Default)]
#[command(disable_help_flag = true)]
pub struct FlipArgs {
    /// Comma-separated stacks, or "random" to generate them
    #[arg(short = 's', long = "stacks", value_name = "STACKS", allow_hyphen_values = true)]
    pub stacks: Option<String>,

    /// Random stacks to generate, 1-100 (fallback PANCAKES_CASES; default 5)
    #[arg(short = 'c', long = "cases", value_name = "N", allow_negative_numbers = true)]
    pub cases: Option<i64>,

    /// Upper bound on random stack length, 1-50 (fallback PANCAKES_MAX_LENGTH; default 10)
    #[arg(short = 'm', long = "max-length", value_name = "N", allow_negative_numbers = true)]
    pub max_length: Option<i64>,

    /// Seed for random stacks
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Print every flip under its result row
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    pub help: bool,
}

impl FlipArgs {
    fn into_options(self) -> Options {
        let color = color_enabled(
            self.no_color,
            std::env::var_os("NO_COLOR"),
            io::stdout().is_terminal(),
        );

        Options {
            stacks: self.stacks,
            cases: self.cases,
            max_length: self.max_length,
            seed: self.seed,
            debug: self.debug,
            color,
        }
    }
}

/// Colour is used only on a terminal, without `--no-color`, and without a
/// non-empty `NO_COLOR`.
pub fn color_enabled(no_color_flag: bool, no_color_env: Option<OsString>, is_tty: bool) -> bool {
    let env_disables = no_color_env.is_some_and(|v| !v.is_empty());
    is_tty && !no_color_flag && !env_disables
}

/// Exit code for usage and validation errors.
pub const EXIT_USAGE: i32 = 2;

pub fn run(program: &str, args: FlipArgs) -> i32 {
    if args.help {
        usage_and_exit(program, 0);
    }

    let config = match Config::from_options(args.into_options()) {
        Ok(c) => c,
        Err(err) => return report_config_error(program, &err),
    };
    info!(?config, "resolved configuration");

    // Validate every stack before printing anything
    let stacks = match config.stacks() {
        Ok(s) => s,
        Err(err) => {
            let text = match &config.source {
                StackSource::Listed(text) => text.as_str(),
                StackSource::Random => "",
            };
            print_stack_error(program, text, &err);
            return 1;
        }
    };

    let theme = config.color.then(Theme::load);
    let stdout = io::stdout().lock();
    let mut table = TableWriter::new(stdout, theme);

    let result = print_table(&mut table, &config, &stacks);
    if let Err(e) = result {
        eprintln!("{program}: failed writing output: {e}");
        let _ = io::stderr().flush();
        return 1;
    }
    0
}

fn print_table<W: Write>(
    table: &mut TableWriter<W>,
    config: &Config,
    stacks: &[crate::Stack],
) -> io::Result<()> {
    let steps: Arc<Mutex<Vec<FlipStep>>> = Arc::new(Mutex::new(Vec::new()));
    let mut resolver = FlipResolver::new();
    if config.debug {
        let sink = steps.clone();
        resolver.set_flip_observer(move |step| {
            if let Ok(mut s) = sink.lock() {
                s.push(step.clone());
            }
        });
    }

    table.write_banner()?;
    table.write_header()?;

    for (i, stack) in stacks.iter().enumerate() {
        let resolution = resolver.resolve(i + 1, stack);
        table.write_result(&resolution)?;

        if config.debug {
            let taken = steps
                .lock()
                .map(|mut s| std::mem::take(&mut *s))
                .unwrap_or_default();
            table.write_steps(&taken)?;
        }
    }

    table.finish()
}

fn report_config_error(program: &str, err: &ConfigError) -> i32 {
    eprintln!("{program}: {err}");
    let _ = io::stderr().flush();
    EXIT_USAGE
}

pub fn usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} [--stacks|-s <STACKS>] [--cases|-c <N>] [--max-length|-m <N>] [--seed <SEED>] [--debug|-d]

Options:
  --stacks,     -s <STACKS>  Comma-separated stacks, e.g. "-,-+,+-,+++,--+-" (the default).
                             Use "random" to generate stacks instead.
  --cases,      -c <N>       Number of random stacks, 1-100 (default 5)
  --max-length, -m <N>       Upper bound on random stack length, 1-50 (default 10)
  --seed <SEED>              Seed random stacks for repeatable runs
  --debug,      -d           Print every flip under its result row
  --no-color                 Disable colored output (also a non-empty NO_COLOR)
  --verbose,    -v           Log resolution details to stderr
  --version,    -V           Print version
  --help,       -h           Show this help

Notes:
- Each stack is written top first: '+' is happy side up, '-' is burnt side up.
- Any character other than '+' or '-' in a stack is an error.
- PANCAKES_CASES and PANCAKES_MAX_LENGTH are used when the flags are omitted.

Examples:
- Flip your own stacks:
    {0} --stacks "+-,--+-"
- Ten random stacks of up to 20 pancakes:
    {0} --stacks random --cases 10 --max-length 20
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}
