//! Last-chance cleanup of the expression text before evaluation

use crate::core::Operator;

/// Characters the evaluator understands
#[must_use]
pub fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '(' | ')') || Operator::is_operator_char(c)
}

/// Rewrites for malformed operator runs, checked in order
const RUN_REWRITES: [(&[&str], char); 3] = [
    (&["*-+", "/-+"], '+'),
    (&["+-*"], '*'),
    (&["+-/"], '/'),
];

/// Pre-evaluation cleanup
#[derive(Debug, Clone, Copy, Default)]
pub struct Sanitizer;

impl Sanitizer {
    /// Runs all three cleanup steps
    #[must_use]
    pub fn sanitize(text: &str) -> String {
        let stripped = Self::strip_disallowed(text);
        let resolved = Self::resolve_operator_runs(&stripped);
        Self::drop_trailing_operator(&resolved).to_string()
    }

    /// Removes every character outside the arithmetic alphabet
    #[must_use]
    pub fn strip_disallowed(text: &str) -> String {
        text.chars().filter(|c| is_allowed(*c)).collect()
    }

    /// Collapses operator runs that hold one of the known patterns.
    ///
    /// Runs matching none of the patterns are kept verbatim and left for
    /// the parser to accept or reject.
    #[must_use]
    pub fn resolve_operator_runs(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut run = String::new();

        for c in text.chars() {
            if Operator::is_operator_char(c) {
                run.push(c);
                continue;
            }
            Self::flush_run(&mut out, &mut run);
            out.push(c);
        }
        Self::flush_run(&mut out, &mut run);
        out
    }

    fn flush_run(out: &mut String, run: &mut String) {
        if run.len() >= 2 {
            if let Some(replacement) = Self::rewrite_for(run) {
                out.push(replacement);
                run.clear();
                return;
            }
        }
        out.push_str(run);
        run.clear();
    }

    fn rewrite_for(run: &str) -> Option<char> {
        RUN_REWRITES
            .iter()
            .find(|(patterns, _)| patterns.iter().any(|p| run.contains(p)))
            .map(|(_, replacement)| *replacement)
    }

    /// Drops exactly one trailing operator character
    #[must_use]
    pub fn drop_trailing_operator(text: &str) -> &str {
        match text.chars().last() {
            Some(c) if Operator::is_operator_char(c) => &text[..text.len() - c.len_utf8()],
            _ => text,
        }
    }
}
