//! Plain-text terminology digest used to ground external analysis.

use std::fmt::Write as _;

use lex_core::entities::{Rule, Term};

/// Heading line for the digest of `language`.
#[must_use]
pub fn heading(language: &str) -> String {
    let name = match language {
        "en" => "ENGLISH".to_string(),
        "jp" => "JAPANESE".to_string(),
        other => other.to_uppercase(),
    };
    format!("{name} UI TERMINOLOGY PREFERENCES:")
}

/// Render the digest from the first `rule_limit` rules and `term_limit` terms.
#[must_use]
pub fn render(
    language: &str,
    rules: &[Rule],
    terms: &[Term],
    rule_limit: usize,
    term_limit: usize,
) -> String {
    let mut out = heading(language);

    for rule in rules.iter().take(rule_limit) {
        let _ = write!(
            out,
            "\n- Use \"{}\" instead of pattern \"{}\"",
            rule.replacement, rule.pattern
        );
    }

    if !terms.is_empty() {
        out.push_str("\n\nKEY TERMINOLOGY:");
        for term in terms.iter().take(term_limit) {
            let _ = write!(out, "\n- \"{}\" → \"{}\"", term.source_term, term.target_term);
            if let Some(domain) = &term.domain {
                let _ = write!(out, " ({domain})");
            }
        }
    }

    out
}
