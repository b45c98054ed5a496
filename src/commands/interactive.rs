use crate::cli::{Cli, Cmd};
use crate::commands::dispatch;
use crate::core::storage::AppCtx;
use clap::Parser;
use console::style;
use dialoguer::Input;

/// Run the CLI in interactive REPL mode against the already open store.
pub fn run(ctx: &mut AppCtx) -> Result<(), String> {
    println!("Entering interactive mode. Type 'exit' or 'quit' to leave.");
    loop {
        let input: String = Input::new()
            .with_prompt(format!("{}", style("pm >").blue().bold()))
            .allow_empty(true)
            .interact_text()
            .map_err(|e| format!("Input error: {}", e))?;

        let input = input.trim();
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }
        if input.is_empty() {
            continue;
        }

        let args = match shell_words::split(input) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("• Error parsing command: {}", e);
                continue;
            }
        };

        let full_args = std::iter::once("prompt-manager".to_string()).chain(args.iter().cloned());

        match Cli::try_parse_from(full_args) {
            Ok(cli) => match session_conflict(&args, &cli.command) {
                Some(reason) => eprintln!("• {}", reason),
                None => {
                    if let Err(e) = dispatch(cli.command, ctx) {
                        eprintln!("• {}", e);
                    }
                }
            },
            Err(e) => {
                e.print().unwrap_or(());
            }
        }
    }
    Ok(())
}

/// Why a parsed line cannot run inside the open session, if it cannot.
fn session_conflict(args: &[String], command: &Cmd) -> Option<&'static str> {
    if matches!(command, Cmd::Interactive) {
        return Some("Already in interactive mode");
    }
    if args.iter().any(|a| a == "--dir" || a.starts_with("--dir=")) {
        return Some("--dir cannot change the data directory of an open session");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> (Vec<String>, Cmd) {
        let args = shell_words::split(line).unwrap();
        let full_args = std::iter::once("prompt-manager".to_string()).chain(args.clone());
        let cli = Cli::try_parse_from(full_args).unwrap();
        (args, cli.command)
    }

    #[test]
    fn session_rejects_nested_interactive_and_dir() {
        let (args, cmd) = parse("interactive");
        assert_eq!(session_conflict(&args, &cmd), Some("Already in interactive mode"));

        let (args, cmd) = parse("list --dir /tmp/elsewhere");
        assert!(session_conflict(&args, &cmd).unwrap().contains("--dir"));

        let (args, cmd) = parse("--dir=/tmp/elsewhere stats");
        assert!(session_conflict(&args, &cmd).is_some());
    }

    #[test]
    fn session_runs_ordinary_lines() {
        let (args, cmd) = parse("search 'code review' --starred");
        assert_eq!(session_conflict(&args, &cmd), None);
    }
}
