// Case class detection and re-casing

use serde::{Deserialize, Serialize};

/// Casing pattern of an input word, re-applied to every suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseClass {
    /// Lowercase, mixed case, or no cased letters at all: "furlan", "fUrlan".
    Lower,
    /// First letter uppercase, every other cased letter lowercase: "Furlan".
    UcFirst,
    /// Every cased letter uppercase: "FURLAN".
    Upper,
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase()
}

/// True when the text has at least one cased letter and none of them is lowercase.
fn all_upper<I: IntoIterator<Item = char>>(chars: I) -> bool {
    let mut seen_cased = false;
    for c in chars {
        if c.is_lowercase() {
            return false;
        }
        seen_cased |= is_cased(c);
    }
    seen_cased
}

/// True when the text has at least one cased letter and none of them is uppercase.
fn all_lower<I: IntoIterator<Item = char>>(chars: I) -> bool {
    let mut seen_cased = false;
    for c in chars {
        if c.is_uppercase() {
            return false;
        }
        seen_cased |= is_cased(c);
    }
    seen_cased
}

/// Classify the casing of a word.
///
/// `Upper` wins when every cased letter is uppercase (so a single capital
/// letter such as `"A"` is `Upper`). `UcFirst` requires an uppercase first
/// character followed by at least one more character whose cased letters are
/// all lowercase. Everything else, including interior mixed case, is `Lower`.
pub fn classify(word: &str) -> CaseClass {
    if all_upper(word.chars()) {
        return CaseClass::Upper;
    }
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            let rest = chars.as_str();
            if !rest.is_empty() && all_lower(rest.chars()) {
                CaseClass::UcFirst
            } else {
                CaseClass::Lower
            }
        }
        _ => CaseClass::Lower,
    }
}

/// Rewrite `word` so that it follows `case`.
pub fn apply(case: CaseClass, word: &str) -> String {
    match case {
        CaseClass::Lower => word.to_lowercase(),
        CaseClass::Upper => word.to_uppercase(),
        CaseClass::UcFirst => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::with_capacity(word.len());
                    out.extend(first.to_uppercase());
                    out.push_str(&chars.as_str().to_lowercase());
                    out
                }
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_lower() {
        assert_eq!(classify("furlan"), CaseClass::Lower);
        assert_eq!(classify("l'aghe"), CaseClass::Lower);
    }

    #[test]
    fn classify_ucfirst() {
        assert_eq!(classify("Furlan"), CaseClass::UcFirst);
        assert_eq!(classify("\u{00C7}ucjar"), CaseClass::UcFirst); // Çucjar
        assert_eq!(classify("L'aghe"), CaseClass::UcFirst);
    }

    #[test]
    fn classify_upper() {
        assert_eq!(classify("FURLAN"), CaseClass::Upper);
        assert_eq!(classify("A"), CaseClass::Upper);
        assert_eq!(classify("L'AGHE"), CaseClass::Upper);
    }

    #[test]
    fn classify_mixed_defaults_to_lower() {
        assert_eq!(classify("fUrlan"), CaseClass::Lower);
        assert_eq!(classify("FUrlan"), CaseClass::Lower);
        assert_eq!(classify("McDonald"), CaseClass::Lower);
    }

    #[test]
    fn classify_no_letters() {
        assert_eq!(classify(""), CaseClass::Lower);
        assert_eq!(classify("123"), CaseClass::Lower);
    }

    #[test]
    fn apply_each_class() {
        assert_eq!(apply(CaseClass::Lower, "FuRlAn"), "furlan");
        assert_eq!(apply(CaseClass::Upper, "furlan"), "FURLAN");
        assert_eq!(apply(CaseClass::UcFirst, "fURLAN"), "Furlan");
        assert_eq!(apply(CaseClass::UcFirst, "la aghe"), "La aghe");
    }

    #[test]
    fn apply_accented() {
        assert_eq!(apply(CaseClass::Upper, "cjat\u{00E2}"), "CJAT\u{00C2}");
        assert_eq!(apply(CaseClass::UcFirst, "\u{00E7}ucjar"), "\u{00C7}ucjar");
    }

    #[test]
    fn apply_empty() {
        assert_eq!(apply(CaseClass::UcFirst, ""), "");
    }

    #[test]
    fn roundtrip_classify_and_apply() {
        let case = classify("Cjase");
        assert_eq!(apply(case, "cjase"), "Cjase");
    }
}
