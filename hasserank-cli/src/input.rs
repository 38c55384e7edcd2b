/// Interactive terminal frontend: stdin command source and prompt renderer.
///
/// Commands are read one line at a time (g/l/s switch mode, r re-ranks,
/// q quits, a number selects a comparison). Raw single-key capture is
/// deliberately not used — line input works everywhere and stays testable.
use std::io::{self, BufRead, Write};

use hasserank_core::{CommandSource, Mode, Notice, Presenter, Prompt};

/// Reads one whitespace-trimmed token per line from stdin.
pub struct StdinSource {
    stdin: io::Stdin,
}

impl StdinSource {
    pub fn new() -> Self {
        StdinSource { stdin: io::stdin() }
    }
}

impl CommandSource for StdinSource {
    fn next_token(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.stdin.lock().read_line(&mut line) {
            Ok(0) => None, // EOF
            Ok(_) => Some(line.trim().to_string()),
            Err(_) => None,
        }
    }
}

/// Renders prompts as plain text on stdout.
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn present(&mut self, prompt: &Prompt<'_>) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out);

        if let Some(notice) = prompt.notice {
            let _ = writeln!(out, "{}", notice_line(notice));
        }

        let verb = match prompt.mode {
            Mode::Greater => "is preferred over",
            Mode::Less => "is NOT preferred over",
            Mode::Skip => "skip comparison with",
        };
        let _ = writeln!(
            out,
            "Focus: {}  [mode: {} | pending: {} | skipped: {} | moves: {}]",
            prompt.focus, prompt.mode, prompt.pending_count, prompt.skipped_count, prompt.move_count,
        );
        for (i, c) in prompt.candidates.iter().enumerate() {
            let _ = writeln!(out, "  {i}) {} {verb} {}  (resolves ≥{})", prompt.focus, c.other, c.score);
        }
        let _ = write!(out, "g/l/s mode, r re-rank, q quit, number to judge> ");
        let _ = out.flush();
    }
}

fn notice_line(notice: &Notice) -> String {
    match notice {
        Notice::InvalidInput(token) => format!("Unrecognized input \"{token}\"."),
        Notice::IndexOutOfRange { given, shown } => {
            format!("No comparison {given} — pick a number below {shown}.")
        }
        Notice::JudgmentRejected(msg) => format!("Judgment refused: {msg}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_lines() {
        let line = notice_line(&Notice::IndexOutOfRange { given: 9, shown: 3 });
        assert!(line.contains('9') && line.contains('3'));

        let line = notice_line(&Notice::InvalidInput("zz".to_string()));
        assert!(line.contains("zz"));
    }
}
