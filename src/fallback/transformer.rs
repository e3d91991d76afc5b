//! Deterministic text transformations.
//!
//! # Responsibilities
//! - Route on task keywords found in the (lowercased) request text
//! - Summarize, fix grammar, generate questions, simplify
//! - Default branch echoes a truncated copy of the input
//!
//! # Design Decisions
//! - First keyword match wins; checked in a fixed priority order
//! - Pure and total: no I/O, no failure modes
//! - Character counts are Unicode scalar values, so truncation never
//!   splits a code point

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());
static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SENTENCE_CASE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.!?])\s*([a-z])").unwrap());
static HOWEVER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)however").unwrap());
static THEREFORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)therefore").unwrap());

/// Maximum number of characters echoed by the default branch.
const ECHO_LIMIT: usize = 200;

/// Minimum sentence length (in characters) considered for question generation.
const QUESTION_MIN_LEN: usize = 20;

/// Number of characters of a sentence quoted inside a generated question.
const QUESTION_QUOTE_LEN: usize = 50;

/// Maximum number of generated questions.
const QUESTION_LIMIT: usize = 5;

/// Transform `text` according to the task keyword it contains.
///
/// Keywords are matched case-insensitively, first match wins:
/// summarize → grammar/proofread → generate+question → simplify/rewrite →
/// default echo.
pub fn transform(text: &str) -> String {
    let lowered = text.to_lowercase();

    if lowered.contains("summarize") {
        summarize(extract_content_after_colon(text))
    } else if lowered.contains("fix grammar") || lowered.contains("proofread") {
        fix_grammar(extract_content_after_colon(text))
    } else if lowered.contains("generate") && lowered.contains("question") {
        generate_questions(extract_content_after_colon(text))
    } else if lowered.contains("simplify") || lowered.contains("rewrite") {
        simplify(extract_content_after_colon(text))
    } else {
        let head: String = text.chars().take(ECHO_LIMIT).collect();
        format!("Processed text (fallback mode - start local.ai for AI processing): {head}...")
    }
}

/// Extract the content portion of a prompt.
///
/// Returns the trimmed substring after the first `:` if present, else the
/// trimmed substring after the first blank line, else the text unchanged.
pub fn extract_content_after_colon(text: &str) -> &str {
    if let Some((_, rest)) = text.split_once(':') {
        rest.trim()
    } else if let Some((_, rest)) = text.split_once("\n\n") {
        rest.trim()
    } else {
        text
    }
}

/// Split on runs of sentence-ending punctuation into trimmed non-empty parts.
fn split_sentences(content: &str) -> Vec<&str> {
    SENTENCE_END_RE
        .split(content)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn summarize(content: &str) -> String {
    let sentences = split_sentences(content);

    if sentences.len() <= 3 {
        format!("{}.", sentences.join(". "))
    } else {
        format!(
            "{}. {}. {}.",
            sentences[0],
            sentences[sentences.len() / 2],
            sentences[sentences.len() - 1]
        )
    }
}

fn fix_grammar(content: &str) -> String {
    let collapsed = WHITESPACE_RUN_RE.replace_all(content, " ");
    let cased = SENTENCE_CASE_RE.replace_all(&collapsed, |caps: &regex::Captures| {
        format!("{} {}", &caps[1], caps[2].to_uppercase())
    });

    let mut chars = cased.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn generate_questions(content: &str) -> String {
    let questions: Vec<String> = split_sentences(content)
        .into_iter()
        .filter(|s| s.chars().count() > QUESTION_MIN_LEN)
        .take(QUESTION_LIMIT)
        .enumerate()
        .map(|(i, sentence)| {
            let quoted: String = sentence.chars().take(QUESTION_QUOTE_LEN).collect();
            format!("{}. What is the main point about: {quoted}...?", i + 1)
        })
        .collect();

    if questions.is_empty() {
        "1. What is the main topic?\n2. What are the key points?".to_string()
    } else {
        questions.join("\n")
    }
}

fn simplify(content: &str) -> String {
    let replaced = HOWEVER_RE.replace_all(content, "but");
    THEREFORE_RE.replace_all(&replaced, "so").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_after_first_colon() {
        assert_eq!(
            extract_content_after_colon("Summarize: Hello. World."),
            "Hello. World."
        );
    }

    #[test]
    fn extracts_after_blank_line_when_no_colon() {
        assert_eq!(
            extract_content_after_colon("summarize this\n\nBody text here"),
            "Body text here"
        );
    }

    #[test]
    fn extraction_passes_through_plain_text() {
        assert_eq!(extract_content_after_colon("no colon here"), "no colon here");
    }

    #[test]
    fn summarize_keeps_short_texts_whole() {
        assert_eq!(transform("Summarize: Hello. World."), "Hello. World.");
    }

    #[test]
    fn summarize_picks_first_middle_last() {
        // Five sentences: middle index is 5 / 2 = 2, i.e. the third.
        let result = transform("Summarize: Alpha. Bravo! Charlie? Delta. Echo.");
        assert_eq!(result, "Alpha. Charlie. Echo.");
    }

    #[test]
    fn summarize_handles_four_sentences() {
        let result = transform("Summarize: A. B. C. D.");
        assert_eq!(result, "A. C. D.");
    }

    #[test]
    fn grammar_fix_collapses_whitespace_and_recapitalizes() {
        let result = transform("Proofread: this is  a test. it was fine! ok?");
        assert_eq!(result, "This is a test. It was fine! Ok?");
    }

    #[test]
    fn questions_quote_long_sentences_only() {
        let result = transform("generate questions: This sentence is long enough to pass. No.");
        assert_eq!(
            result,
            "1. What is the main point about: This sentence is long enough to pass...?"
        );
    }

    #[test]
    fn questions_fall_back_to_fixed_lines() {
        let result = transform("generate questions: Short. Tiny.");
        assert_eq!(
            result,
            "1. What is the main topic?\n2. What are the key points?"
        );
    }

    #[test]
    fn questions_are_capped_at_five() {
        let body = (0..8)
            .map(|i| format!("Sentence number {i} which is certainly long enough"))
            .collect::<Vec<_>>()
            .join(". ");
        let result = transform(&format!("generate questions: {body}."));
        assert_eq!(result.lines().count(), 5);
        assert!(result.lines().last().unwrap().starts_with("5. "));
    }

    #[test]
    fn simplify_replaces_connectives_case_insensitively() {
        let result = transform("Simplify: However, we shipped; therefore it works. HOWEVER it rained.");
        assert_eq!(result, "but, we shipped; so it works. but it rained.");
    }

    #[test]
    fn default_branch_echoes_first_200_chars() {
        let input = "y".repeat(300);
        let result = transform(&input);
        let expected = format!(
            "Processed text (fallback mode - start local.ai for AI processing): {}...",
            "y".repeat(200)
        );
        assert_eq!(result, expected);
    }

    #[test]
    fn default_branch_does_not_split_code_points() {
        let input = "é".repeat(300);
        let result = transform(&input);
        assert!(result.ends_with(&format!("{}...", "é".repeat(200))));
    }
}
