// Friulian phonetic hashing
//
// A word is reduced to two hash codes by a fixed sequence of rewrites. The
// dictionaries group words by these codes, so the exact order of every
// rewrite below is part of the data format: reordering any two steps
// changes the codes and breaks lookups against existing dictionaries.

use furlan_core::character::is_apostrophe;
use serde::Serialize;

/// Primary and secondary phonetic codes of a word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct PhoneticHashes {
    pub primary: String,
    pub secondary: String,
}

impl PhoneticHashes {
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }

    /// The distinct non-empty codes, primary first.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        let secondary = (self.secondary != self.primary).then_some(self.secondary.as_str());
        std::iter::once(self.primary.as_str())
            .chain(secondary)
            .filter(|k| !k.is_empty())
    }

    pub fn into_pair(self) -> (String, String) {
        (self.primary, self.secondary)
    }
}

/// Compute both phonetic codes of `word`. Empty input yields two empty codes.
pub fn phonetic_hashes(word: &str) -> PhoneticHashes {
    if word.is_empty() {
        return PhoneticHashes::default();
    }

    let s = collapse_apostrophes(word);
    let s = s.replacen("e ", "'", 1);
    let s = strip_blanks(&s);
    let s = squeeze(&s);
    let mut s = s.to_lowercase();

    replace(&mut s, "h'", "K");
    for (base, variants) in ACCENT_FOLDS {
        for v in *variants {
            replace(&mut s, v, base);
        }
    }
    replace(&mut s, "\u{e7}i", "ci");
    replace(&mut s, "\u{e7}e", "ce");

    replace_suffix(&mut s, "ds", "ts");
    replace(&mut s, "sci", "ssi");
    replace(&mut s, "sce", "se");
    let mut s = squeeze(&s);

    s.retain(|c| !matches!(c, 'w' | 'y' | 'x'));
    replace_prefix(&mut s, "che", "chi");
    s.retain(|c| c != 'h');

    for (from, to) in [
        ("leng", "X"),
        ("lingu", "X"),
        ("amentri", "O"),
        ("ementri", "O"),
        ("amenti", "O"),
        ("ementi", "O"),
        ("uintri", "W"),
        ("ontra", "W"),
        ("ur", "Y"),
        ("uar", "Y"),
        ("or", "Y"),
    ] {
        replace(&mut s, from, to);
    }

    replace_prefix(&mut s, "'s", "s");
    replace_prefix(&mut s, "'n", "n");

    for ending in ["ins", "in", "ims", "im", "gns", "gn"] {
        replace_suffix(&mut s, ending, "1");
    }

    replace(&mut s, "mn", "5");
    replace(&mut s, "nm", "5");
    s = s.replace(['m', 'n'], "5");

    replace(&mut s, "er", "2");
    replace(&mut s, "ar", "2");

    replace_suffix(&mut s, "b", "3");
    replace_suffix(&mut s, "p", "3");
    replace_suffix(&mut s, "v", "4");
    replace_suffix(&mut s, "f", "4");

    let mut primary = s.clone();
    let mut secondary = s;
    primary_consonants(&mut primary);
    secondary_consonants(&mut secondary);

    PhoneticHashes {
        primary: finish(primary),
        secondary: finish(secondary),
    }
}

/// Primary code only.
pub fn phonetic_code(word: &str) -> String {
    phonetic_hashes(word).primary
}

/// Whether any code of `a` equals any code of `b`. Empty words are never
/// similar to anything.
pub fn are_phonetically_similar(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let ha = phonetic_hashes(a);
    let hb = phonetic_hashes(b);
    ha.primary == hb.primary
        || ha.primary == hb.secondary
        || ha.secondary == hb.primary
        || ha.secondary == hb.secondary
}

const ACCENT_FOLDS: &[(&str, &[&str])] = &[
    ("a", &["\u{e0}", "\u{e2}", "\u{e1}", "'a"]),
    ("e", &["\u{e8}", "\u{ea}", "\u{e9}", "'e"]),
    ("i", &["\u{ec}", "\u{ee}", "\u{ed}", "'i"]),
    ("o", &["\u{f2}", "\u{f4}", "\u{f3}", "'o"]),
    ("u", &["\u{f9}", "\u{fb}", "\u{fa}", "'u"]),
];

fn primary_consonants(s: &mut String) {
    replace(s, "'c", "A");
    for suffix in ["cjus", "cius", "cju", "ciu"] {
        // c[ji]us$ is tried before c[ji]u$
        replace_suffix(s, suffix, "A");
    }
    replace(s, "c'", "A");
    for cluster in ["ti", "ci", "si", "zs", "zi", "cj", "\u{e7}s", "tz", "z"] {
        replace(s, cluster, "A");
    }
    for cluster in ["c", "q", "k", "ts", "s"] {
        replace(s, cluster, "A");
    }
}

fn secondary_consonants(s: &mut String) {
    replace_suffix(s, "c", "0");
    replace_suffix(s, "g", "0");
    for cluster in ["bs", "cs", "fs", "gs", "ps", "vs"] {
        replace_suffix(s, cluster, "s");
    }
    replace_di_before_char(s);
    for cluster in ["gji", "gi", "gj", "g", "ts", "s", "zi", "z"] {
        replace(s, cluster, "E");
    }
}

/// Steps shared by both branches: `j` as `i`, vowel digits, leading `t`/`d`.
fn finish(mut s: String) -> String {
    replace(&mut s, "j", "i");
    let mut s = squeeze_char(&s, 'i');
    for (from, to) in [
        ("ai", "6"),
        ("a", "6"),
        ("ei", "7"),
        ("e", "7"),
        ("ou", "8"),
        ("oi", "8"),
        ("o", "8"),
        ("vu", "8"),
        ("u", "8"),
        ("i", "7"),
    ] {
        replace(&mut s, from, to);
    }
    replace_prefix(&mut s, "t", "H");
    replace_prefix(&mut s, "d", "I");
    s.replace(['t', 'd'], "9")
}

// ---------------------------------------------------------------------------
// String rewriting helpers
// ---------------------------------------------------------------------------

fn replace(s: &mut String, from: &str, to: &str) {
    if s.contains(from) {
        *s = s.replace(from, to);
    }
}

fn replace_prefix(s: &mut String, prefix: &str, with: &str) {
    if s.starts_with(prefix) {
        s.replace_range(..prefix.len(), with);
    }
}

fn replace_suffix(s: &mut String, suffix: &str, with: &str) {
    if s.ends_with(suffix) {
        let at = s.len() - suffix.len();
        s.replace_range(at.., with);
    }
}

/// `di` becomes `E` unless it ends the string.
fn replace_di_before_char(s: &mut String) {
    let mut out = String::with_capacity(s.len());
    let mut rest = s.as_str();
    while let Some(at) = rest.find("di") {
        let after = &rest[at + 2..];
        if after.is_empty() {
            break;
        }
        out.push_str(&rest[..at]);
        out.push('E');
        rest = after;
    }
    out.push_str(rest);
    *s = out;
}

/// A run of apostrophe variants becomes one ASCII apostrophe.
fn collapse_apostrophes(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut in_run = false;
    for c in word.chars() {
        if is_apostrophe(c) {
            if !in_run {
                out.push('\'');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

const SLASH_W: &str = "$slash_W";

/// Drop whitespace and the literal `$slash_W` (with any following `W`s) in
/// one left-to-right pass.
fn strip_blanks(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            rest = &rest[c.len_utf8()..];
        } else if let Some(after) = rest.strip_prefix(SLASH_W) {
            rest = after.trim_start_matches('W');
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}

/// Collapse runs of the same character.
fn squeeze(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last = None;
    for c in s.chars() {
        if last != Some(c) {
            out.push(c);
        }
        last = Some(c);
    }
    out
}

fn squeeze_char(s: &str, target: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last = None;
    for c in s.chars() {
        if !(c == target && last == Some(target)) {
            out.push(c);
        }
        last = Some(c);
    }
    out
}
