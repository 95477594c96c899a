// Splits Friulian text into word, punctuation and whitespace tokens

use furlan_core::character::is_apostrophe;

/// Kind of a token produced by [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Punctuation,
    Whitespace,
}

/// A slice of the input text with its classification.
///
/// Concatenating the `text` of every token of a [`tokenize`] result gives
/// back the input unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

fn is_hyphen(c: char) -> bool {
    matches!(c, '-' | '\u{2010}' | '\u{2011}')
}

/// Length in chars of the word starting at `text[0]`.
///
/// A word is a run of letters and digits. An apostrophe variant continues
/// the word when a letter follows it (`l'aghe`, `d'àcue`), a hyphen when a
/// letter or digit follows it (`cjase-parol`).
fn word_length(text: &[char]) -> usize {
    let mut wlen = 0;
    while wlen < text.len() {
        let c = text[wlen];
        if is_word_char(c) {
            wlen += 1;
            continue;
        }
        let next = text.get(wlen + 1).copied();
        let joins = if is_apostrophe(c) {
            next.is_some_and(char::is_alphabetic)
        } else if is_hyphen(c) {
            next.is_some_and(is_word_char)
        } else {
            false
        };
        if !joins {
            return wlen;
        }
        wlen += 1;
    }
    wlen
}

/// Find the token starting at `pos`. Returns `None` at the end of the text.
pub fn next_token(text: &[char], pos: usize) -> Option<(TokenKind, usize)> {
    let slice = text.get(pos..).filter(|s| !s.is_empty())?;
    let first = slice[0];
    if is_word_char(first) {
        return Some((TokenKind::Word, word_length(slice)));
    }
    if first.is_whitespace() {
        let len = slice.iter().take_while(|c| c.is_whitespace()).count();
        return Some((TokenKind::Whitespace, len));
    }
    Some((TokenKind::Punctuation, 1))
}

/// Split `text` into tokens without dropping any character.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;
    while let Some((kind, len)) = next_token(&chars, pos) {
        tokens.push(Token {
            kind,
            text: chars[pos..pos + len].iter().collect(),
        });
        pos += len;
    }
    tokens
}

/// Iterate over the word tokens of `text` only.
pub fn words(text: &str) -> impl Iterator<Item = String> {
    tokenize(text)
        .into_iter()
        .filter(Token::is_word)
        .map(|t| t.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(TokenKind, String)> {
        tokenize(text).into_iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn sentence_is_split_losslessly() {
        let text = "Cheste e je une frâs, in furlan!";
        let tokens = tokenize(text);
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, text);
        let words: Vec<_> = tokens.iter().filter(|t| t.is_word()).map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["Cheste", "e", "je", "une", "frâs", "in", "furlan"]);
    }

    #[test]
    fn elided_article_stays_in_word() {
        assert_eq!(
            kinds("l'aghe"),
            vec![(TokenKind::Word, "l'aghe".to_string())]
        );
        assert_eq!(
            kinds("d\u{2019}àcue"),
            vec![(TokenKind::Word, "d\u{2019}àcue".to_string())]
        );
    }

    #[test]
    fn trailing_apostrophe_is_punctuation() {
        assert_eq!(
            kinds("un' "),
            vec![
                (TokenKind::Word, "un".to_string()),
                (TokenKind::Punctuation, "'".to_string()),
                (TokenKind::Whitespace, " ".to_string()),
            ]
        );
    }

    #[test]
    fn interior_hyphen_joins() {
        assert_eq!(
            kinds("cjase-parol"),
            vec![(TokenKind::Word, "cjase-parol".to_string())]
        );
    }

    #[test]
    fn dangling_hyphen_is_punctuation() {
        assert_eq!(
            kinds("cjase - parol"),
            vec![
                (TokenKind::Word, "cjase".to_string()),
                (TokenKind::Whitespace, " ".to_string()),
                (TokenKind::Punctuation, "-".to_string()),
                (TokenKind::Whitespace, " ".to_string()),
                (TokenKind::Word, "parol".to_string()),
            ]
        );
    }

    #[test]
    fn whitespace_runs_are_one_token() {
        assert_eq!(
            kinds("a \t\nb"),
            vec![
                (TokenKind::Word, "a".to_string()),
                (TokenKind::Whitespace, " \t\n".to_string()),
                (TokenKind::Word, "b".to_string()),
            ]
        );
    }

    #[test]
    fn numbers_are_words() {
        assert_eq!(kinds("2024"), vec![(TokenKind::Word, "2024".to_string())]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert_eq!(next_token(&[], 0), None);
        assert_eq!(next_token(&['a'], 5), None);
    }

    #[test]
    fn words_skips_everything_else() {
        let w: Vec<_> = words("Une, dôs; trê.").collect();
        assert_eq!(w, vec!["Une", "dôs", "trê"]);
    }
}
