//! Post-processing of raw generator output into a clean step list

use once_cell::sync::Lazy;
use regex::Regex;

static STEPS_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^\s*(?:answer step-by-step:|steps?:)").expect("valid steps header regex")
});

static LEADING_STEPS_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\A\s*(?:answer step-by-step:|steps?:)").expect("valid steps header regex")
});

static STOP_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^\s*(?:final answer:|answer:|question:)").expect("valid stop header regex")
});

static ECHO_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\A\s*(?:system|human):[^\n]*(?:\n|\z)").expect("valid echo line regex")
});

const STEPS_LABEL: &str = "Steps:";

/// Reduce raw generator text to its step-by-step section.
///
/// Never turns non-blank input into an empty string: every cutting step
/// keeps its input when the cut would leave nothing. Applying the function
/// to its own output returns the output unchanged.
pub fn extract_steps(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let text = after_steps_header(raw);
    let text = before_stop_header(text);
    let text = strip_echo_lines(text);

    let mut lines: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if lines.last() != Some(&line) {
            lines.push(line);
        }
    }

    let starts_with_steps = lines.first().is_some_and(|first| {
        let first = first.to_lowercase();
        first.starts_with("step") || first.starts_with("answer step-by-step")
    });

    let mut out = String::new();
    if !starts_with_steps {
        out.push_str(STEPS_LABEL);
    }
    for line in lines {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(line);
    }
    out
}

/// Text after the last line-start steps header that still has content after it
fn after_steps_header(text: &str) -> &str {
    let mut body = STEPS_HEADER
        .find_iter(text)
        .map(|m| &text[m.end()..])
        .filter(|rest| !rest.trim().is_empty())
        .last()
        .unwrap_or(text);

    while let Some(m) = LEADING_STEPS_HEADER.find(body) {
        let rest = &body[m.end()..];
        if rest.trim().is_empty() {
            break;
        }
        body = rest;
    }
    body
}

/// Text before the first answer or question header that has content before it
fn before_stop_header(text: &str) -> &str {
    STOP_HEADER
        .find_iter(text)
        .map(|m| &text[..m.start()])
        .find(|head| !head.trim().is_empty())
        .unwrap_or(text)
}

/// Drop echoed `System:` / `Human:` lines at the start
fn strip_echo_lines(mut text: &str) -> &str {
    while let Some(m) = ECHO_LINE.find(text) {
        let rest = &text[m.end()..];
        if rest.trim().is_empty() {
            break;
        }
        text = rest;
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_idempotent(raw: &str) {
        let once = extract_steps(raw);
        assert_eq!(extract_steps(&once), once, "not idempotent for {raw:?}");
    }

    #[test]
    fn test_cuts_prompt_echo_before_header() {
        let raw = "You are a math tutor.\nContext:\n...\nQuestion:\nSolve x+2=5\n\nAnswer step-by-step:\n1. Subtract 2\n2. x = 3";
        assert_eq!(extract_steps(raw), "Steps:\n1. Subtract 2\n2. x = 3");
    }

    #[test]
    fn test_truncates_at_final_answer() {
        let raw = "Steps:\n1. 2 + 2 = 4\nFinal Answer: 4\nQuestion: next one";
        assert_eq!(extract_steps(raw), "Steps:\n1. 2 + 2 = 4");
    }

    #[test]
    fn test_truncates_at_question_block() {
        let raw = "Steps:\n1. Expand\n2. Simplify\nQuestion: what is 3+3?";
        assert_eq!(extract_steps(raw), "Steps:\n1. Expand\n2. Simplify");
    }

    #[test]
    fn test_strips_system_and_human_echoes() {
        let raw = "System: you are helpful\nHuman: hi\n1. Factor the quadratic";
        assert_eq!(extract_steps(raw), "Steps:\n1. Factor the quadratic");
    }

    #[test]
    fn test_collapses_duplicates_and_blank_lines() {
        let raw = "Step 1: a\n\n  Step 1: a  \nStep 2: b\n\n";
        assert_eq!(extract_steps(raw), "Step 1: a\nStep 2: b");
    }

    #[test]
    fn test_keeps_existing_step_prefix() {
        assert_eq!(extract_steps("Step 1: differentiate"), "Step 1: differentiate");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_steps(""), "");
        assert_eq!(extract_steps(" \n\t"), "");
    }

    #[test]
    fn test_never_empties_non_blank_input() {
        assert_eq!(extract_steps("Answer: 42"), "Steps:\nAnswer: 42");
        assert_eq!(extract_steps("Steps:"), "Steps:");
        assert_eq!(extract_steps("System: echo"), "Steps:\nSystem: echo");
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            "plain answer",
            "Steps:\n1. a\n2. b",
            "Steps: Steps: x",
            "foo\nSteps:",
            "Steps:\nStep 1: a\nSteps:\nb",
            "foo\nQuestion: q\nAnswer: a",
            "Question: q\nfoo\nAnswer: a",
            "System: a\nHuman: b",
            "System: s\nAnswer: x",
            "Answer: 5\nSystem: z",
            "answer step-by-step: 1. x\n1. x\n\nFinal answer: 3",
            "Stepping up\nSteps:",
        ];
        for raw in samples {
            assert_idempotent(raw);
        }
    }
}
