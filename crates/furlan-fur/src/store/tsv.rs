// Tab-separated dictionary tables
//
// One `key<TAB>value` pair per line. Blank lines and lines starting with `#`
// are skipped; a trailing `\r` is dropped.

use std::io::ErrorKind;
use std::path::Path;

use hashbrown::HashMap;

use crate::error::Error;
use crate::store::StoreKind;

/// One parsed line, with its 1-based line number for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line: usize,
    pub key: String,
    pub value: String,
}

fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
}

pub fn parse_pairs(path: &Path, text: &str) -> Result<Vec<Record>, Error> {
    content_lines(text)
        .map(|(line, content)| {
            let (key, value) = content.split_once('\t').ok_or_else(|| Error::Parse {
                path: path.to_path_buf(),
                line,
                reason: "expected key<TAB>value".into(),
            })?;
            if key.is_empty() {
                return Err(Error::Parse {
                    path: path.to_path_buf(),
                    line,
                    reason: "empty key".into(),
                });
            }
            Ok(Record {
                line,
                key: key.to_string(),
                value: value.to_string(),
            })
        })
        .collect()
}

pub fn parse_lines(text: &str) -> Vec<String> {
    content_lines(text)
        .map(|(_, line)| line.trim().to_string())
        .collect()
}

/// Read a file, mapping "not found" to `None`.
fn read_optional(path: &Path) -> Result<Option<String>, Error> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(Error::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Pairs of an optional table; `None` if the file does not exist.
pub fn read_pairs(path: &Path) -> Result<Option<Vec<Record>>, Error> {
    read_optional(path)?
        .map(|text| parse_pairs(path, &text))
        .transpose()
}

/// Pairs of a required table.
pub fn read_required_pairs(path: &Path, store: StoreKind) -> Result<Vec<Record>, Error> {
    read_pairs(path)?
        .ok_or_else(|| Error::unavailable(store, format!("{} not found", path.display())))
}

/// Non-comment lines of an optional word list.
pub fn read_lines(path: &Path) -> Result<Option<Vec<String>>, Error> {
    Ok(read_optional(path)?.map(|text| parse_lines(&text)))
}

fn check_unique(store: StoreKind, records: &[Record]) -> Result<(), Error> {
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    for record in records {
        *counts.entry(record.key.as_str()).or_default() += 1;
    }
    match records.iter().find(|r| counts[r.key.as_str()] > 1) {
        Some(dup) => Err(Error::DuplicateKey {
            store,
            key: dup.key.clone(),
            count: counts[dup.key.as_str()],
        }),
        None => Ok(()),
    }
}

/// Build a map from records whose keys must be unique.
pub fn unique_map(store: StoreKind, records: Vec<Record>) -> Result<HashMap<String, String>, Error> {
    check_unique(store, &records)?;
    Ok(records.into_iter().map(|r| (r.key, r.value)).collect())
}

/// Parse frequency values, reporting the offending line on failure.
pub fn frequency_map(path: &Path, records: Vec<Record>) -> Result<HashMap<String, u32>, Error> {
    check_unique(StoreKind::Frequencies, &records)?;
    let mut out = HashMap::with_capacity(records.len());
    for record in records {
        let freq = record.value.trim().parse::<u32>().map_err(|err| Error::Parse {
            path: path.to_path_buf(),
            line: record.line,
            reason: format!("invalid frequency {:?}: {err}", record.value),
        })?;
        out.insert(record.key, freq);
    }
    Ok(out)
}
