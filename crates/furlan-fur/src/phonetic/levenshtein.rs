// Vowel-tolerant edit distance and Friulian ordering

use std::cmp::Ordering;

use furlan_core::character::{collation_key, vowel_family};

/// Substitution cost between two characters: free when they are equal
/// ignoring case or are vowels of the same accent family (`a`/`à`/`á`/`â`,
/// ...), 1 otherwise.
fn substitution_cost(a: char, b: char) -> usize {
    if a == b || a.to_lowercase().eq(b.to_lowercase()) {
        return 0;
    }
    match (vowel_family(a), vowel_family(b)) {
        (Some(x), Some(y)) if x == y => 0,
        _ => 1,
    }
}

/// Levenshtein distance where accent-only vowel differences cost nothing.
/// Insertions and deletions cost 1.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = if a.len() >= b.len() { (&a, &b) } else { (&b, &a) };
    if short.is_empty() {
        return long.len();
    }

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current = vec![0; short.len() + 1];
    for (i, &c1) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, &c2) in short.iter().enumerate() {
            let insertion = previous[j + 1] + 1;
            let deletion = current[j] + 1;
            let substitution = previous[j] + substitution_cost(c1, c2);
            current[j + 1] = insertion.min(deletion).min(substitution);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[short.len()]
}

/// Compare two words in Friulian order: accents and cedilla folded, a
/// leading `'s` read as `s`. Ties on the folded key fall back to the raw
/// strings so the order is total.
pub fn friulian_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Sort words in place in Friulian order.
pub fn sort_friulian(words: &mut [String]) {
    words.sort_by_cached_key(|w| (collation_key(w), w.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_is_zero() {
        assert_eq!(levenshtein("cjase", "cjase"), 0);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn accent_only_differences_are_free() {
        assert_eq!(levenshtein("\u{e0}", "a"), 0);
        assert_eq!(levenshtein("\u{e8}", "e"), 0);
        assert_eq!(levenshtein("caf\u{e9}", "cafe"), 0);
        assert_eq!(levenshtein("cjase", "cj\u{e0}se"), 0);
        assert_eq!(levenshtein("fr\u{c2}S", "fras"), 0);
    }

    #[test]
    fn different_vowel_families_cost_one() {
        assert_eq!(levenshtein("cjase", "cjose"), 1);
        assert_eq!(levenshtein("\u{e0}", "e"), 1);
    }

    #[test]
    fn plain_edits() {
        assert_eq!(levenshtein("a", "b"), 1);
        assert_eq!(levenshtein("cjase", "gjase"), 1);
        assert_eq!(levenshtein("a", ""), 1);
        assert_eq!(levenshtein("", "a"), 1);
        assert_eq!(levenshtein("furlan", "furlane"), 1);
        assert_eq!(levenshtein("cjase", "cjale"), 1);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn symmetric() {
        assert_eq!(levenshtein("abc", "x\u{e0}bcd"), levenshtein("x\u{e0}bcd", "abc"));
    }

    #[test]
    fn friulian_order_folds_accents() {
        let mut words = vec![
            "cjase".to_string(),
            "\u{e7}avat".to_string(),
            "'sere".to_string(),
            "b\u{e2}r".to_string(),
            "bar".to_string(),
        ];
        sort_friulian(&mut words);
        assert_eq!(words, vec!["bar", "b\u{e2}r", "\u{e7}avat", "cjase", "'sere"]);
    }

    #[test]
    fn leading_elided_s_sorts_as_s() {
        assert_eq!(friulian_cmp("'sere", "sere"), Ordering::Less);
        assert_eq!(friulian_cmp("'sere", "sfuarc"), Ordering::Less);
    }
}
