// ABOUTME: Text-level checks run against the raw workflow source before parsing
// ABOUTME: Flags secrets and env comparisons in conditions that the runner rejects or misreads

use regex::Regex;
use std::sync::LazyLock;

/// `if:` condition comparing a secret with `!=`; group 1 is the text before the reference
static SECRET_CONDITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"if:\s*(.*?)secrets\.[A-Z_]+.*!=").expect("secret condition pattern")
});

static ENV_COMPARISON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"env\.[A-Z_]+.*!=").expect("env comparison pattern"));

const EXPRESSION_OPEN: &str = "${{";
const EXPRESSION_CLOSE: &str = "}}";

/// Whether the text ends inside an open `${{ ... }}` expression
fn inside_expression(before_reference: &str) -> bool {
    match before_reference.rfind(EXPRESSION_OPEN) {
        Some(open) => !before_reference[open..].contains(EXPRESSION_CLOSE),
        None => false,
    }
}

/// One heuristic hit, with a 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternMatch {
    UnwrappedSecretCondition { line: usize },
    EnvComparison { line: usize },
}

/// Scan the source line by line.
///
/// These are substring heuristics, not an expression parser: a match inside a
/// comment or a multi-line scalar is reported all the same.
pub fn scan(content: &str) -> Vec<PatternMatch> {
    let mut matches = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;

        if let Some(caps) = SECRET_CONDITION.captures(line) {
            let before_reference = caps.get(1).map_or("", |m| m.as_str());
            if !inside_expression(before_reference) {
                matches.push(PatternMatch::UnwrappedSecretCondition { line: line_no });
            }
        }

        if ENV_COMPARISON.is_match(line) {
            matches.push(PatternMatch::EnvComparison { line: line_no });
        }
    }

    matches
}
