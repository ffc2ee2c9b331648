//! Merges an operator keystroke with the operators already trailing the text
//!
//! The rules run in a fixed order, each one a rewrite over operator runs:
//!
//! 1. any run of two or more of `+ * /` becomes the incoming operator
//! 2. two or more `-` after a digit become one `-`
//! 3. a trailing run mixing `-` with `+ * /` after a digit becomes the
//!    incoming operator
//! 4. a leading `+ * /` is dropped
//! 5. a trailing `+ * /` is dropped when the incoming operator is not `-`
//! 6. the incoming operator is appended
//!
//! A trailing `-` survives rule 5 because it is the sign of the literal
//! about to be typed.

use super::Edit;
use crate::core::Operator;

fn is_non_minus(c: char) -> bool {
    matches!(c, '+' | '*' | '/')
}

/// Operator keystroke policy
#[derive(Debug, Clone, Copy, Default)]
pub struct OperatorCollapser;

impl OperatorCollapser {
    /// Returns the text after pressing `op`
    #[must_use]
    pub fn apply(text: &str, op: Operator) -> Edit {
        let mut next = Self::collapse_non_minus_runs(text, op);
        next = Self::collapse_minus_runs(&next);
        next = Self::collapse_mixed_tail(&next, op);
        next = Self::drop_leading_operator(&next).to_string();
        if !op.is_minus() {
            next = Self::drop_trailing_non_minus(&next).to_string();
        }
        next.push(op.symbol());

        let verbatim = text.len() + 1 == next.len() && next.starts_with(text);
        if verbatim {
            Edit::accepted(next)
        } else {
            Edit::collapsed(next)
        }
    }

    /// Rule 1: every run of two or more `+ * /` becomes `op`
    #[must_use]
    pub fn collapse_non_minus_runs(text: &str, op: Operator) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;

        while i < chars.len() {
            let run = chars[i..].iter().take_while(|c| is_non_minus(**c)).count();
            if run >= 2 {
                out.push(op.symbol());
                i += run;
            } else {
                out.push(chars[i]);
                i += 1;
            }
        }
        out
    }

    /// Rule 2: a digit followed by two or more `-` keeps a single `-`
    #[must_use]
    pub fn collapse_minus_runs(text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        let mut i = 0;

        while i < chars.len() {
            let after_digit = i > 0 && chars[i - 1].is_ascii_digit();
            let run = chars[i..].iter().take_while(|c| **c == '-').count();
            if after_digit && run >= 2 {
                out.push('-');
                i += run;
            } else {
                out.push(chars[i]);
                i += 1;
            }
        }
        out
    }

    /// Rule 3: a trailing operator run holding both `-` and one of `+ * /`,
    /// directly after a digit, becomes `op`
    #[must_use]
    pub fn collapse_mixed_tail(text: &str, op: Operator) -> String {
        let tail_len = text
            .chars()
            .rev()
            .take_while(|c| Operator::is_operator_char(*c))
            .count();
        if tail_len < 2 {
            return text.to_string();
        }

        // operator characters are ASCII, so char count equals byte count
        let (head, tail) = text.split_at(text.len() - tail_len);
        let mixed = tail.contains('-') && tail.chars().any(is_non_minus);
        let after_digit = head.chars().last().is_some_and(|c| c.is_ascii_digit());

        if mixed && after_digit {
            format!("{head}{}", op.symbol())
        } else {
            text.to_string()
        }
    }

    /// Rule 4: an expression never opens with `+ * /`
    #[must_use]
    pub fn drop_leading_operator(text: &str) -> &str {
        match text.chars().next() {
            Some(c) if is_non_minus(c) => &text[c.len_utf8()..],
            _ => text,
        }
    }

    /// Rule 5: strips one trailing `+ * /`
    #[must_use]
    pub fn drop_trailing_non_minus(text: &str) -> &str {
        match text.chars().last() {
            Some(c) if is_non_minus(c) => &text[..text.len() - c.len_utf8()],
            _ => text,
        }
    }
}
