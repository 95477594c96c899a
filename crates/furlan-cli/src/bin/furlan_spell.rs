// furlan-spell: Check spelling of Friulian text from stdin.
//
// Reads text from stdin and reports every word on its own line:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//   U: word    (could not be verified, a required table is unavailable)
// With --json, prints one JSON text report per input line instead.
//
// Usage:
//   furlan-spell [-d DICT_PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Dictionary directory containing words.tsv
//   -s, --suggest          Also print suggestions for misspelled words
//   --json                 Print a JSON report per line
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use furlan_core::enums::WordState;
use furlan_fur::tokenizer;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) =
        furlan_cli::parse_dict_path(&args).unwrap_or_else(|e| furlan_cli::fatal(&e));

    if furlan_cli::wants_help(&args) {
        println!("furlan-spell: Check spelling of Friulian text from stdin.");
        println!();
        println!("Usage: furlan-spell [-d DICT_PATH] [OPTIONS]");
        println!();
        println!("Reads text from stdin. Prints one line per word:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!("  U: word    (not verifiable)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary directory containing words.tsv");
        println!("  -s, --suggest          Also print suggestions for misspelled words");
        println!("  --json                 Print a JSON report per input line");
        println!("  -h, --help             Print this help");
        return;
    }

    furlan_cli::init_logging();
    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");
    let json = args.iter().any(|a| a == "--json");

    let handle =
        furlan_cli::load_handle(dict_path.as_deref()).unwrap_or_else(|e| furlan_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        if json {
            let report = handle
                .check_text(&line)
                .unwrap_or_else(|e| furlan_cli::fatal(&e.to_string()));
            match serde_json::to_string(&report) {
                Ok(s) => {
                    let _ = writeln!(out, "{s}");
                }
                Err(e) => furlan_cli::fatal(&format!("cannot encode report: {e}")),
            }
            continue;
        }

        for word in tokenizer::words(&line) {
            match handle.check_word(&word) {
                WordState::Unverified => {
                    let _ = writeln!(out, "U: {word}");
                }
                state if state.is_correct() => {
                    let _ = writeln!(out, "C: {word}");
                }
                _ => {
                    let _ = writeln!(out, "W: {word}");
                    if show_suggestions {
                        match handle.suggest(&word) {
                            Ok(suggestions) => {
                                for suggestion in suggestions {
                                    let _ = writeln!(out, "S: {suggestion}");
                                }
                            }
                            Err(e) => log::warn!("no suggestions for {word:?}: {e}"),
                        }
                    }
                }
            }
        }
    }
}
