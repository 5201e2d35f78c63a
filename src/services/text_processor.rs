// Text Processing Service
// Normalization, rule-based sentence splitting and tokenization (English)

use crate::models::{DependencyRole, SentenceSpan, Token};
use regex::Regex;
use std::sync::OnceLock;

const SENTENCE_TERMINALS: [char; 7] = ['.', '!', '?', '\u{2026}', '。', '！', '？'];
const CLOSING_CHARS: [char; 6] = ['"', '\'', ')', ']', '}', '\u{bb}'];

/// Words that end in a period without ending the sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "fig", "vol", "approx", "dept",
    "inc", "ltd", "corp", "gen", "col", "lt", "sgt", "rev", "mt", "ft", "jan", "feb", "apr",
    "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

const COORDINATING_CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "&"];

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[\p{L}\p{M}]+(?:'[\p{L}\p{M}]+)*|\p{N}+(?:[.,]\p{N}+)*|\S")
            .expect("token regex")
    })
}

fn exotic_space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\u{3000}\u{00A0}\u{2007}\u{202F}]").expect("space regex"))
}

/// Normalize extracted text before segmentation.
///
/// Only canonicalizes characters; whitespace runs and line structure are kept so
/// character lengths stay close to the source.
pub fn normalize_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let s = text
        .replace('\u{201c}', "\"")
        .replace('\u{201d}', "\"")
        .replace('\u{2018}', "'")
        .replace('\u{2019}', "'")
        .replace("\r\n", "\n")
        .replace('\r', "\n");

    exotic_space_re().replace_all(&s, " ").into_owned()
}

fn is_terminal(ch: char) -> bool {
    SENTENCE_TERMINALS.contains(&ch)
}

fn is_closing(ch: char) -> bool {
    CLOSING_CHARS.contains(&ch)
}

fn is_cjk_terminal(ch: char) -> bool {
    matches!(ch, '。' | '！' | '？')
}

fn byte_at(chars: &[(usize, char)], idx: usize, len: usize) -> usize {
    chars.get(idx).map(|(pos, _)| *pos).unwrap_or(len)
}

fn push_span(text: &str, start: usize, end: usize, spans: &mut Vec<SentenceSpan>) {
    if start >= end {
        return;
    }
    let slice = &text[start..end];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = slice.len() - slice.trim_start().len();
    let s = start + lead;
    spans.push(SentenceSpan {
        text: trimmed.to_string(),
        start: s,
        end: s + trimmed.len(),
    });
}

fn word_start(chars: &[(usize, char)], idx: usize) -> usize {
    let mut begin = idx;
    while begin > 0 && !chars[begin - 1].1.is_whitespace() {
        begin -= 1;
    }
    begin
}

/// Word immediately before `idx`, without leading brackets or quotes.
fn word_before(chars: &[(usize, char)], idx: usize) -> String {
    let begin = word_start(chars, idx);
    let word: String = chars[begin..idx].iter().map(|(_, c)| *c).collect();
    word.trim_start_matches(|c: char| !c.is_alphanumeric()).to_string()
}

/// Whitespace-delimited word at or after `idx`.
fn word_after(chars: &[(usize, char)], idx: usize) -> String {
    chars[idx.min(chars.len())..]
        .iter()
        .map(|(_, c)| *c)
        .skip_while(|c| c.is_whitespace())
        .take_while(|c| !c.is_whitespace())
        .collect()
}

/// Word preceding the one that ends at `idx`, if any.
fn previous_word(chars: &[(usize, char)], idx: usize) -> Option<String> {
    let mut k = word_start(chars, idx);
    while k > 0 && chars[k - 1].1.is_whitespace() {
        k -= 1;
    }
    (k > 0).then(|| word_before(chars, k))
}

/// Single uppercase letter such as the "J" in "J. K."; the pronoun "I" is excluded.
fn is_initial(word: &str) -> bool {
    let mut letters = word.trim_end_matches('.').chars();
    matches!(
        (letters.next(), letters.next()),
        (Some(c), None) if c.is_uppercase() && c != 'I'
    )
}

/// Letter-dot abbreviations like "e.g", "U.S" or "Ph.D". Numbers ("2.5") and
/// domains ("example.com") do not qualify.
fn is_dotted_abbreviation(word: &str) -> bool {
    let segments: Vec<&str> = word.split('.').collect();
    segments.len() >= 2
        && segments
            .iter()
            .all(|seg| !seg.is_empty() && seg.chars().all(char::is_alphabetic))
        && segments.last().is_some_and(|seg| seg.chars().count() == 1)
}

/// Decide whether a run of periods at `chars[i..j]` closes the sentence.
fn period_ends_sentence(chars: &[(usize, char)], i: usize, j: usize) -> bool {
    let word = word_before(chars, i);
    let next = word_after(chars, j);
    let next_first = next.chars().next();

    if matches!(next_first, Some(c) if c.is_lowercase()) {
        return false;
    }

    let lower = word.to_lowercase();
    if ABBREVIATIONS.contains(&lower.as_str()) || is_dotted_abbreviation(&word) {
        return false;
    }

    if is_initial(&word) && matches!(next_first, Some(c) if c.is_uppercase()) {
        // "J. K. Rowling" keeps going; "plan B. It" ends.
        let after_prose = previous_word(chars, i)
            .and_then(|w| w.chars().next())
            .is_some_and(char::is_lowercase);
        return after_prose && !is_initial(&next);
    }

    true
}

/// Split text into trimmed, non-empty sentences with byte offsets.
///
/// Boundaries follow runs of terminal punctuation (plus trailing closing quotes or
/// brackets) that are followed by whitespace or the end of text. Blank lines always
/// separate sentences. Decimal numbers, common abbreviations and initials do not split.
pub fn split_sentences(text: &str) -> Vec<SentenceSpan> {
    let mut spans = Vec::new();
    if text.trim().is_empty() {
        return spans;
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let (pos, ch) = chars[i];

        if ch == '\n' {
            let mut j = i + 1;
            let mut newlines = 1;
            while j < chars.len() && chars[j].1.is_whitespace() {
                if chars[j].1 == '\n' {
                    newlines += 1;
                }
                j += 1;
            }
            if newlines >= 2 {
                push_span(text, start, pos, &mut spans);
                start = byte_at(&chars, j, text.len());
            }
            i = j;
            continue;
        }

        if !is_terminal(ch) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() && is_terminal(chars[j].1) {
            j += 1;
        }
        let only_periods = chars[i..j].iter().all(|(_, c)| *c == '.');
        while j < chars.len() && is_closing(chars[j].1) {
            j += 1;
        }

        let at_break = j >= chars.len() || chars[j].1.is_whitespace();
        if !at_break && !is_cjk_terminal(ch) {
            i = j;
            continue;
        }
        if only_periods && !period_ends_sentence(&chars, i, j) {
            i = j;
            continue;
        }

        let end = byte_at(&chars, j, text.len());
        push_span(text, start, end, &mut spans);
        start = end;
        i = j;
    }

    push_span(text, start, text.len(), &mut spans);
    spans
}

/// Split English clitics off a word: "don't" -> "do" + "n't", "it's" -> "it" + "'s".
fn split_clitics(word: &str) -> Vec<&str> {
    if !word.contains('\'') {
        return vec![word];
    }
    let lower = word.to_ascii_lowercase();
    if lower.ends_with("n't") && word.len() > 3 {
        let cut = word.len() - 3;
        return vec![&word[..cut], &word[cut..]];
    }
    match word.find('\'') {
        Some(idx) if idx > 0 => vec![&word[..idx], &word[idx..]],
        _ => vec![word],
    }
}

fn make_token(surface: &str) -> Token {
    let text = surface.to_lowercase();
    let is_alpha = !text.is_empty() && text.chars().all(char::is_alphabetic);
    let role = if COORDINATING_CONJUNCTIONS.contains(&text.as_str()) {
        DependencyRole::CoordinatingConjunction
    } else if text.chars().all(|c| !c.is_alphanumeric()) {
        DependencyRole::Punctuation
    } else {
        DependencyRole::Other
    };
    Token { text, is_alpha, role }
}

/// Tokenize a sentence into lowercased tokens with alphabetic flags and roles.
pub fn tokenize(sentence: &str) -> Vec<Token> {
    token_re()
        .find_iter(sentence)
        .flat_map(|m| split_clitics(m.as_str()))
        .map(make_token)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(spans: &[SentenceSpan]) -> Vec<&str> {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_normalize_text() {
        let output = normalize_text("Hello\u{201c}World\u{201d}\r\nit\u{2019}s\u{00A0}fine");
        assert_eq!(output, "Hello\"World\"\nit's fine");
    }

    #[test]
    fn test_normalize_keeps_whitespace_runs() {
        assert_eq!(normalize_text("a  b\n\nc"), "a  b\n\nc");
    }

    #[test]
    fn test_split_basic_sentences() {
        let spans = split_sentences("First one. Second one!  Third one?");
        assert_eq!(texts(&spans), vec!["First one.", "Second one!", "Third one?"]);
    }

    #[test]
    fn test_split_offsets_point_into_text() {
        let text = "  Alpha beta.   Gamma delta.  ";
        for span in split_sentences(text) {
            assert_eq!(&text[span.start..span.end], span.text);
        }
    }

    #[test]
    fn test_split_keeps_decimals_and_abbreviations() {
        let spans = split_sentences("Pi is 3.14 roughly. Dr. Smith agreed, e.g. on Monday. Fine.");
        assert_eq!(
            texts(&spans),
            vec!["Pi is 3.14 roughly.", "Dr. Smith agreed, e.g. on Monday.", "Fine."]
        );
    }

    #[test]
    fn test_split_keeps_initials() {
        let spans = split_sentences("J. K. Rowling wrote it. I did not.");
        assert_eq!(texts(&spans), vec!["J. K. Rowling wrote it.", "I did not."]);
    }

    #[test]
    fn test_split_after_trailing_number() {
        let spans = split_sentences("The rate rose to 2.5. Analysts were surprised.");
        assert_eq!(
            texts(&spans),
            vec!["The rate rose to 2.5.", "Analysts were surprised."]
        );
    }

    #[test]
    fn test_split_after_domain_name() {
        let spans = split_sentences("Visit example.com. Then sign up today.");
        assert_eq!(texts(&spans), vec!["Visit example.com.", "Then sign up today."]);
    }

    #[test]
    fn test_split_after_capital_letter_in_prose() {
        let spans = split_sentences("We chose plan B. It failed badly.");
        assert_eq!(texts(&spans), vec!["We chose plan B.", "It failed badly."]);
    }

    #[test]
    fn test_split_keeps_initials_after_lowercase_word() {
        let spans = split_sentences("It was written by J. K. Rowling in Edinburgh. Fans agree.");
        assert_eq!(
            texts(&spans),
            vec!["It was written by J. K. Rowling in Edinburgh.", "Fans agree."]
        );
    }

    #[test]
    fn test_dotted_abbreviations() {
        assert!(is_dotted_abbreviation("e.g"));
        assert!(is_dotted_abbreviation("U.S"));
        assert!(is_dotted_abbreviation("Ph.D"));
        assert!(!is_dotted_abbreviation("2.5"));
        assert!(!is_dotted_abbreviation("example.com"));
        assert!(!is_dotted_abbreviation("plain"));
    }

    #[test]
    fn test_split_includes_closing_quote() {
        let spans = split_sentences("He said \"stop.\" Then he left.");
        assert_eq!(texts(&spans), vec!["He said \"stop.\"", "Then he left."]);
    }

    #[test]
    fn test_split_blank_line_is_boundary() {
        let spans = split_sentences("Heading without period\n\nBody text here.\nStill body.");
        assert_eq!(
            texts(&spans),
            vec!["Heading without period", "Body text here.", "Still body."]
        );
    }

    #[test]
    fn test_split_single_newline_is_soft() {
        let spans = split_sentences("A line that wraps\nonto the next line.");
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn test_split_cjk_without_spaces() {
        let spans = split_sentences("这是第一句。这是第二句！");
        assert_eq!(texts(&spans), vec!["这是第一句。", "这是第二句！"]);
    }

    #[test]
    fn test_split_empty_and_whitespace() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences(" \n\n \t ").is_empty());
    }

    #[test]
    fn test_tokenize_roles_and_alpha() {
        let tokens = tokenize("Cats and dogs, 42 birds.");
        let words: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["cats", "and", "dogs", ",", "42", "birds", "."]);
        assert_eq!(tokens[1].role, DependencyRole::CoordinatingConjunction);
        assert_eq!(tokens[3].role, DependencyRole::Punctuation);
        assert!(!tokens[4].is_alpha);
        assert!(tokens[5].is_alpha);
    }

    #[test]
    fn test_tokenize_splits_clitics() {
        let words: Vec<String> = tokenize("Don't worry, it's fine.")
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(words, vec!["do", "n't", "worry", ",", "it", "'s", "fine", "."]);
    }

    #[test]
    fn test_tokenize_lowercases() {
        let tokens = tokenize("BUT Nor");
        assert!(tokens
            .iter()
            .all(|t| t.role == DependencyRole::CoordinatingConjunction));
        assert_eq!(tokens[0].text, "but");
    }
}
