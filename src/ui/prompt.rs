use crate::core::Confirm;
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdout and read the answer from `input`.
/// Anything other than "y"/"yes" (including EOF) counts as no.
pub fn ask_confirmation<R: BufRead>(prompt: &str, input: &mut R) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if input.read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Interactive confirmation on the process stdin.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        let stdin = io::stdin();
        let answer = ask_confirmation(prompt, &mut stdin.lock());
        println!();
        answer
    }
}

/// Non-interactive confirmation (`--yes`, or `confirm_delete: false`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}
