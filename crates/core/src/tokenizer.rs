//! Word/separator tokenizer.
//!
//! Splits raw text into an ordered token sequence: a maximal run of word
//! characters (`0-9 a-z A-Z ' -`) is one token, every other character is
//! its own single-character token. The split is lossless: concatenating
//! the tokens reproduces the input exactly.
//!
//! Non-ASCII characters are separators; each becomes its own token.

/// True for characters that extend a word token.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '\'' || c == '-'
}

/// Split `text` into word and separator tokens, in input order.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if is_word_char(c) {
            if word_start.is_none() {
                word_start = Some(i);
            }
        } else {
            if let Some(start) = word_start.take() {
                tokens.push(text[start..i].to_string());
            }
            tokens.push(c.to_string());
        }
    }

    // Flush a word running to end of input
    if let Some(start) = word_start {
        tokens.push(text[start..].to_string());
    }

    tokens
}
