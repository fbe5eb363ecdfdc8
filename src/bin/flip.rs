use happy_pancakes::{Stack, resolve};
use std::env;

fn print_usage_and_exit(program: &str) -> ! {
    eprintln!(
        "Usage:\n  {0} <STACK>...   # Resolve each stack and print: <stack> <flips> <final>\n\nNotes:\n- Stacks are written top first using '+' (happy side up) and '-' (burnt side up).\n- Any other character is an error.\n",
        program
    );
    std::process::exit(2);
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let program = env::args().next().unwrap_or_else(|| "flip".to_string());

    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage_and_exit(&program);
    }

    // Parse everything up front so nothing is printed for bad input
    let mut stacks = Vec::with_capacity(args.len());
    for (i, arg) in args.iter().enumerate() {
        match Stack::parse_case(arg, i + 1) {
            Ok(stack) => stacks.push(stack),
            Err(err) => {
                eprintln!("{program}: {err}");
                std::process::exit(1);
            }
        }
    }

    for (i, stack) in stacks.iter().enumerate() {
        let r = resolve(i + 1, stack);
        println!("{} {} {}", r.original, r.flip_count, r.flipped);
    }
}
