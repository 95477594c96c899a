// furlan-cli: shared utilities for the command-line tools.

use std::path::{Path, PathBuf};
use std::process;

use furlan_fur::FurlanHandle;
use furlan_fur::store::memory::files;

/// Environment variable naming the dictionary directory.
pub const DICT_PATH_ENV: &str = "FURLAN_DICT_PATH";

/// Search for a dictionary directory and open a FurlanHandle on it.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `FURLAN_DICT_PATH` environment variable
/// 3. `~/.furlan`
/// 4. `/usr/share/furlan`
/// 5. Current working directory
///
/// A directory qualifies when it holds `words.tsv`. When its `words.rt` is
/// missing the handle runs without the radix tree and a warning is logged.
pub fn load_handle(dict_path: Option<&str>) -> Result<FurlanHandle, String> {
    let search_paths = build_search_paths(
        dict_path,
        std::env::var(DICT_PATH_ENV).ok().as_deref(),
        home_dir().as_deref(),
        std::env::current_dir().ok().as_deref(),
    );

    let Some(dir) = find_dict_dir(&search_paths) else {
        return Err(format!(
            "could not find {} in any of the search paths:\n{}",
            files::SYSTEM_WORDS,
            search_paths
                .iter()
                .map(|p| format!("  - {}", p.display()))
                .collect::<Vec<_>>()
                .join("\n")
        ));
    };

    log::debug!("using dictionary at {}", dir.display());
    match FurlanHandle::open(dir) {
        Ok(handle) => Ok(handle),
        Err(err) if err.is_unavailable() => {
            log::warn!("{err}; continuing without suggestions from the radix tree");
            FurlanHandle::open_degraded(dir)
                .map_err(|e| format!("failed to load dictionary {}: {e}", dir.display()))
        }
        Err(err) => Err(format!("failed to load dictionary {}: {err}", dir.display())),
    }
}

/// Build the list of directories to search for dictionary files.
pub fn build_search_paths(
    dict_path: Option<&str>,
    env_path: Option<&str>,
    home: Option<&Path>,
    cwd: Option<&Path>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }
    if let Some(p) = env_path {
        paths.push(PathBuf::from(p));
    }
    if let Some(home) = home {
        paths.push(home.join(".furlan"));
    }
    paths.push(PathBuf::from("/usr/share/furlan"));
    if let Some(cwd) = cwd {
        paths.push(cwd.to_path_buf());
    }
    paths
}

/// First directory in `paths` holding a system word table.
pub fn find_dict_dir(paths: &[PathBuf]) -> Option<&Path> {
    paths
        .iter()
        .map(PathBuf::as_path)
        .find(|dir| dir.join(files::SYSTEM_WORDS).is_file())
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            let value = iter.next().ok_or_else(|| format!("{arg} requires a value"))?;
            dict_path = Some(value.clone());
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((dict_path, remaining))
}

/// Parse the value following `-n`/`--max-suggestions`, if present.
pub fn parse_max_suggestions(args: &[String]) -> Result<Option<usize>, String> {
    let Some(pos) = args.iter().position(|a| a == "-n" || a == "--max-suggestions") else {
        return Ok(None);
    };
    let value = args
        .get(pos + 1)
        .ok_or_else(|| "--max-suggestions requires a value".to_string())?;
    value
        .parse()
        .map(Some)
        .map_err(|_| format!("invalid number for --max-suggestions: {value}"))
}

/// Initialise logging from `RUST_LOG`, warnings by default.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
