//! Line-oriented driver for the keypad calculator.
//!
//! # Usage
//!
//! ```bash
//! calc 12 + 30 =          # prints 42
//! calc --json 7 ÷ 0 =     # prints the session snapshot
//! calc                    # reads key lines from stdin
//! ```
//!
//! On stdin each line is a sequence of key labels. Lines starting with `:`
//! are shell commands: `:theme ID`, `:history`, `:snapshot`, `:quit`.

use anyhow::Context;
use clap::Parser;
use keycalc::config::CalculatorConfig;
use keycalc::session::Calculator;
use keycalc::theme::Theme;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "calc")]
#[command(about = "Keypad calculator", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme preset (theme1, theme2, theme3)
    #[arg(long)]
    theme: Option<Theme>,

    /// Print the session snapshot as JSON instead of the display line
    #[arg(long)]
    json: bool,

    /// Key labels to press, e.g. `12 + 3 =`
    #[arg(allow_hyphen_values = true)]
    keys: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CalculatorConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CalculatorConfig::default(),
    };

    let mut calculator = Calculator::builder().config(&config).build()?;
    if let Some(theme) = cli.theme {
        calculator.set_theme(theme);
    }

    if cli.keys.is_empty() {
        return run_interactive(&mut calculator, io::stdin().lock(), &mut io::stdout());
    }

    calculator.press_line(&cli.keys.join(" "))?;
    if cli.json {
        println!("{}", calculator.snapshot().to_json_pretty()?);
    } else {
        println!("{}", calculator.display());
    }

    Ok(())
}

fn run_interactive(
    calculator: &mut Calculator,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();

        if let Some(command) = line.strip_prefix(':') {
            if !run_command(calculator, command, out)? {
                break;
            }
            continue;
        }

        if let Err(err) = calculator.press_line(line) {
            eprintln!("error: {err}");
        }
        writeln!(out, "[{}] {}", calculator.theme(), calculator.display())?;
    }

    Ok(())
}

/// Returns `false` when the session should end.
fn run_command(
    calculator: &mut Calculator,
    command: &str,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("quit" | "q"), _) => return Ok(false),
        (Some("theme"), Some(id)) => match id.parse::<Theme>() {
            Ok(theme) => calculator.set_theme(theme),
            Err(err) => eprintln!("error: {err}"),
        },
        (Some("theme"), None) => writeln!(out, "{}", calculator.theme())?,
        (Some("history"), _) => {
            for record in calculator.history().records() {
                writeln!(
                    out,
                    "{} {}",
                    record.timestamp.format("%H:%M:%S%.3f"),
                    record.intent
                )?;
            }
        }
        (Some("snapshot"), _) => writeln!(out, "{}", calculator.snapshot().to_json_pretty()?)?,
        _ => eprintln!("error: unknown command ':{command}'"),
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keycalc::core::Intent;
    use keycalc::snapshot::Snapshot;

    fn command(calculator: &mut Calculator, command: &str) -> (bool, String) {
        let mut out = Vec::new();
        let keep_going = run_command(calculator, command, &mut out).unwrap();
        (keep_going, String::from_utf8(out).unwrap())
    }

    #[test]
    fn quit_ends_session() {
        let mut calculator = Calculator::new();
        assert_eq!(command(&mut calculator, "quit"), (false, String::new()));
        assert!(!command(&mut calculator, "q").0);
    }

    #[test]
    fn theme_command_sets_and_reports() {
        let mut calculator = Calculator::new();

        let (keep_going, printed) = command(&mut calculator, "theme 3");
        assert!(keep_going);
        assert!(printed.is_empty());
        assert_eq!(calculator.theme(), Theme::Theme3);

        assert_eq!(command(&mut calculator, "theme").1, "theme3\n");
    }

    #[test]
    fn unknown_theme_keeps_current() {
        let mut calculator = Calculator::new();
        assert!(command(&mut calculator, "theme neon").0);
        assert_eq!(calculator.theme(), Theme::Theme1);
    }

    #[test]
    fn history_prints_one_line_per_record() {
        let mut calculator = Calculator::new();
        calculator.press_line("4 × 2 =").unwrap();

        let (_, printed) = command(&mut calculator, "history");
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[3].ends_with(&Intent::Evaluate.to_string()));
    }

    #[test]
    fn snapshot_prints_restorable_json() {
        let mut calculator = Calculator::new();
        calculator.press_line("9 - 4").unwrap();

        let (_, printed) = command(&mut calculator, "snapshot");
        let snapshot = Snapshot::from_json(&printed).unwrap();
        assert_eq!(snapshot.state, *calculator.state());
    }

    #[test]
    fn unknown_command_continues() {
        let mut calculator = Calculator::new();
        assert_eq!(command(&mut calculator, "frobnicate"), (true, String::new()));
    }

    #[test]
    fn interactive_session_echoes_display_until_quit() {
        let mut calculator = Calculator::new();
        let input = "12 + 30 =\n:theme 2\n× 1000\n:quit\n7\n";
        let mut out = Vec::new();

        run_interactive(&mut calculator, input.as_bytes(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[theme1] 42\n[theme2] 42×1,000\n"
        );
        assert_eq!(calculator.state().current_operand(), Some("1000"));
    }
}
