use clap::Parser;
use happy_pancakes::commands::flip::{self, FlipArgs};
use happy_pancakes::logger::init_cli_logger;
use std::env;

#[derive(Parser, Debug)]
#[command(name = "pancakes", version, disable_help_flag = true, disable_help_subcommand = true)]
struct Cli {
    /// Log resolution details to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    #[command(flatten)]
    flip: FlipArgs,
}

fn main() {
    // We still pull the program name for help rendering consistency
    let program = env::args().next().unwrap_or_else(|| String::from("pancakes"));

    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let code = flip::run(&program, cli.flip);
    std::process::exit(code);
}
