// furlan-suggest: Generate spelling suggestions for Friulian words.
//
// Prints suggestions for misspelled words. Correctly spelled words are
// printed as-is.
//
// Usage:
//   furlan-suggest [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH     Dictionary directory containing words.tsv
//   -n, --max-suggestions N  Maximum number of suggestions (default: 10)
//   -a, --always             Suggest for correct words too
//   -h, --help               Print help

use std::io::{self, BufRead, Write};

use furlan_fur::FurlanHandle;

fn suggest_word(handle: &FurlanHandle, word: &str, always: bool, out: &mut impl Write) {
    let correct = !always && handle.check_word(word).is_correct();
    if correct {
        let _ = writeln!(out, "{word} (correct)");
        return;
    }
    match handle.suggest_always(word) {
        Ok(suggestions) if suggestions.is_empty() => {
            let _ = writeln!(out, "{word}: (no suggestions)");
        }
        Ok(suggestions) => {
            let _ = writeln!(out, "{word}:");
            for s in &suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }
        Err(e) => {
            let _ = writeln!(out, "{word}: (error: {e})");
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) =
        furlan_cli::parse_dict_path(&args).unwrap_or_else(|e| furlan_cli::fatal(&e));

    if furlan_cli::wants_help(&args) {
        println!("furlan-suggest: Generate spelling suggestions.");
        println!();
        println!("Usage: furlan-suggest [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Dictionary directory containing words.tsv");
        println!("  -n, --max-suggestions N  Maximum number of suggestions (default: 10)");
        println!("  -a, --always             Suggest for correct words too");
        println!("  -h, --help               Print this help");
        return;
    }

    furlan_cli::init_logging();
    let max_suggestions =
        furlan_cli::parse_max_suggestions(&args).unwrap_or_else(|e| furlan_cli::fatal(&e));
    let always = args.iter().any(|a| a == "-a" || a == "--always");

    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;
    for arg in &args {
        if skip_next {
            skip_next = false;
        } else if arg == "-n" || arg == "--max-suggestions" {
            skip_next = true;
        } else if !arg.starts_with('-') {
            words.push(arg.clone());
        }
    }

    let mut handle =
        furlan_cli::load_handle(dict_path.as_deref()).unwrap_or_else(|e| furlan_cli::fatal(&e));
    if let Some(max) = max_suggestions {
        handle.set_max_suggestions(max);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !words.is_empty() {
        for word in &words {
            suggest_word(&handle, word, always, &mut out);
        }
        return;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if !word.is_empty() {
            suggest_word(&handle, word, always, &mut out);
        }
    }
}
