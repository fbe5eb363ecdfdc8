use std::io::{self, Write};

use crate::StackError;

/// Pretty-print a StackError, with a caret under the offending pancake when
/// there is one. `stacks` is the comma-separated text the error came from.
pub fn print_stack_error(program: &str, stacks: &str, err: &StackError) {
    match err {
        StackError::InvalidCharacter { pos, case, .. } => {
            let segment = case_text(stacks, *case);
            print_error_with_context(&format!("{program}: {err}"), segment, *pos);
        }
        StackError::Empty { .. } => {
            eprintln!("{program}: {err}");
            let _ = io::stderr().flush();
        }
    }
}

/// The text of the 1-based `case` in comma-separated stack input.
fn case_text(stacks: &str, case: usize) -> &str {
    stacks
        .split(',')
        .nth(case.saturating_sub(1))
        .map(str::trim)
        .unwrap_or_default()
}

/// Print the message, then a short window of `text` with a caret under `pos`.
/// Positions are char indices so multi-byte input lines up.
pub fn print_error_with_context(message: &str, text: &str, pos: usize) {
    eprintln!("{message}");

    const WINDOW_CHARS: usize = 32;

    let total_chars = text.chars().count();
    let start_char = pos.saturating_sub(WINDOW_CHARS);
    let end_char = (pos + WINDOW_CHARS + 1).min(total_chars);

    let start_byte = char_to_byte_index(text, start_char);
    let end_byte = char_to_byte_index(text, end_char);
    eprintln!("  {}", &text[start_byte..end_byte]);

    let caret_offset_chars = pos.saturating_sub(start_char);
    eprintln!("  {}^", " ".repeat(caret_offset_chars));
    let _ = io::stderr().flush();
}

/// Convert a char index into a byte index in the given UTF-8 string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(s.len())
}
