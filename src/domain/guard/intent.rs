//! Mathematics intent heuristic

use once_cell::sync::Lazy;
use regex::Regex;

const MATH_KEYWORDS: &[&str] = &[
    "solve",
    "calculate",
    "find",
    "derive",
    "integrate",
    "differentiate",
    "equation",
    "inequality",
    "factor",
    "simplify",
    "proof",
    "theorem",
    "matrix",
    "vector",
    "probability",
    "expectation",
    "variance",
    "limit",
    "derivative",
    "integral",
    "gradient",
    "hessian",
    "algebra",
    "geometry",
    "trigonometry",
    "calculus",
    "number theory",
    "combinatorics",
    "cube",
    "square",
    "subtraction",
];

static MATH_SYMBOLS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[+\-*/=^(){}\[\]√∑∫]|\bpi\b|\btheta\b|\d").expect("valid math symbol regex")
});

/// True when the text carries a math keyword or a symbolic/numeric token
pub fn is_math_question(text: &str) -> bool {
    let lowered = text.to_lowercase();
    MATH_KEYWORDS.iter().any(|k| lowered.contains(k)) || MATH_SYMBOLS.is_match(&lowered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert!(is_math_question("Please Differentiate sin of x"));
        assert!(is_math_question("explain number theory basics"));
    }

    #[test]
    fn test_symbols_and_digits() {
        assert!(is_math_question("x + y"));
        assert!(is_math_question("what is 7 times eight"));
        assert!(is_math_question("value of pi"));
        assert!(is_math_question("∫ sin"));
    }

    #[test]
    fn test_non_math() {
        assert!(!is_math_question("What is the capital of France?"));
        assert!(!is_math_question("tell me a joke"));
        // word boundary on pi
        assert!(!is_math_question("a spicy recipe"));
    }
}
