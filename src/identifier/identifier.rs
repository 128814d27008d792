use super::charset::{self, IdentifierGrammar};
use std::fmt;

/// How illegal code points are handled during sanitization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SanitizePolicy {
    /// Every illegal code point becomes the substitute character
    #[default]
    Replace,
    /// Illegal code points are removed entirely
    Drop,
}

/// A single sanitized symbol name, valid under the target identifier grammar
///
/// Construction is pure and total: any input string maps to exactly one
/// `Identifier` under a given policy. Reserved words are escaped with the
/// grammar's quoting (back-quotes for Swift), never respelled.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Sanitize `input` under the Swift grammar.
    pub fn sanitize(input: &str, policy: SanitizePolicy) -> Identifier {
        Identifier::sanitize_with(charset::swift(), input, policy)
    }

    /// Sanitize `input` under an arbitrary grammar.
    ///
    /// Code points outside the continuation class are replaced or dropped per
    /// `policy`. If the *original* first code point is not head-class (or the
    /// input is empty), the substitute character is prepended so the result
    /// always starts legally. A result spelling a reserved word is wrapped in
    /// the grammar's escape quotes.
    pub fn sanitize_with(
        grammar: &IdentifierGrammar,
        input: &str,
        policy: SanitizePolicy,
    ) -> Identifier {
        let mut out = String::with_capacity(input.len());
        for c in input.chars() {
            if grammar.continuation.contains(c) {
                out.push(c);
            } else if policy == SanitizePolicy::Replace {
                out.push(grammar.substitute);
            }
        }
        let head_ok = input
            .chars()
            .next()
            .is_some_and(|first| grammar.head.contains(first));
        if !head_ok {
            out.insert(0, grammar.substitute);
        }
        if grammar.is_reserved(&out) {
            out.insert(0, grammar.escape_open);
            out.push(grammar.escape_close);
        }
        Identifier(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
