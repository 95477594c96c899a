// Friulian character classification and folding tables

// ---------------------------------------------------------------------------
// Apostrophes
// ---------------------------------------------------------------------------

/// The canonical apostrophe every variant is normalized to.
pub const APOSTROPHE: char = '\'';

/// Characters written in place of an apostrophe in Friulian text: the ASCII
/// apostrophe, typographic quotes, backtick, acute accent, prime, modifier
/// letters, and the C1 control codes left behind by Windows-1252 text
/// (U+0091/U+0092).
const APOSTROPHE_VARIANTS: &[char] = &[
    '\'', '\u{2018}', '\u{2019}', '`', '\u{00B4}', '\u{2032}', '\u{02BC}', '\u{02B9}', '\u{0091}',
    '\u{0092}',
];

/// Check whether a character is one of the apostrophe variants.
pub fn is_apostrophe(c: char) -> bool {
    APOSTROPHE_VARIANTS.contains(&c)
}

/// Replace every apostrophe variant with the canonical apostrophe.
pub fn normalize_apostrophes(word: &str) -> String {
    word.chars()
        .map(|c| if is_apostrophe(c) { APOSTROPHE } else { c })
        .collect()
}

// ---------------------------------------------------------------------------
// Vowel families
// ---------------------------------------------------------------------------

/// Map an accented (grave, acute, circumflex) lowercase or uppercase vowel to
/// its plain lowercase base vowel. Returns `None` for anything that is not a
/// vowel of the five Friulian families.
pub fn vowel_family(c: char) -> Option<char> {
    match c {
        'a' | 'à' | 'á' | 'â' | 'A' | 'À' | 'Á' | 'Â' => Some('a'),
        'e' | 'è' | 'é' | 'ê' | 'E' | 'È' | 'É' | 'Ê' => Some('e'),
        'i' | 'ì' | 'í' | 'î' | 'I' | 'Ì' | 'Í' | 'Î' => Some('i'),
        'o' | 'ò' | 'ó' | 'ô' | 'O' | 'Ò' | 'Ó' | 'Ô' => Some('o'),
        'u' | 'ù' | 'ú' | 'û' | 'U' | 'Ù' | 'Ú' | 'Û' => Some('u'),
        _ => None,
    }
}

/// Check whether a character belongs to one of the five vowel families.
pub fn is_vowel(c: char) -> bool {
    vowel_family(c).is_some()
}

/// Strip the accent from a lowercase accented vowel, leaving every other
/// character unchanged.
pub fn strip_vowel_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' => 'a',
        'è' | 'é' | 'ê' => 'e',
        'ì' | 'í' | 'î' => 'i',
        'ò' | 'ó' | 'ô' => 'o',
        'ù' | 'ú' | 'û' => 'u',
        _ => c,
    }
}

// ---------------------------------------------------------------------------
// Collation
// ---------------------------------------------------------------------------

/// Build the sort key used to order equally ranked suggestions.
///
/// The key is the lowercased word with accented vowels and `ç` folded to their
/// base letters, and a leading `'s` collapsed to `s`.
pub fn collation_key(word: &str) -> String {
    let mut key: String = word
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'ç' => 'c',
            _ => strip_vowel_accent(c),
        })
        .collect();
    if key.starts_with("'s") {
        key.remove(0);
    }
    key
}

/// Check whether the word contains at least one letter.
pub fn has_letter(word: &str) -> bool {
    word.chars().any(char::is_alphabetic)
}
