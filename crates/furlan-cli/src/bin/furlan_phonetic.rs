// furlan-phonetic: Print the two phonetic hashes of Friulian words.
//
// Output format, one line per word:
//   word<TAB>primary<TAB>secondary
// or, with --json, one object per line:
//   {"primary":"A6A7","secondary":"c76E7","word":"cjase"}
//
// Usage:
//   furlan-phonetic [--json] [WORD...]
//
// Reads words from stdin (one per line) when no WORD is given. No
// dictionary is needed.

use std::io::{self, BufRead, Write};

use furlan_fur::phonetic::phonetic_hashes;

fn print_hashes(word: &str, json: bool, out: &mut impl Write) {
    let hashes = phonetic_hashes(word);
    if json {
        let mut value = serde_json::to_value(&hashes).unwrap_or_default();
        value["word"] = word.into();
        let _ = writeln!(out, "{value}");
    } else {
        let _ = writeln!(out, "{word}\t{}\t{}", hashes.primary, hashes.secondary);
    }
}

fn main() {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if furlan_cli::wants_help(&args) {
        println!("furlan-phonetic: Print the phonetic hashes of words.");
        println!();
        println!("Usage: furlan-phonetic [--json] [WORD...]");
        println!();
        println!("Prints: word<TAB>primary<TAB>secondary");
        println!("  --json    One JSON object per word instead");
        println!("Reads words from stdin (one per line) when no WORD is given.");
        return;
    }

    furlan_cli::init_logging();
    let json = args.iter().any(|a| a == "--json");
    args.retain(|a| a != "--json");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !args.is_empty() {
        for word in &args {
            print_hashes(word, json, &mut out);
        }
        return;
    }

    for line in io::stdin().lock().lines() {
        match line {
            Ok(l) if !l.trim().is_empty() => print_hashes(l.trim(), json, &mut out),
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        }
    }
}
