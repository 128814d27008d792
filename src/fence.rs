//! # Fence Module
//!
//! Computes the minimal raw-string "fence" needed to embed arbitrary content
//! as a delimited literal without ambiguity.
//!
//! Swift raw strings are bounded by `#`×n + `"""` … `"""` + `#`×n. The fence
//! length n must be chosen so that no substring of the content can be misread
//! as the closing delimiter, and so that no `\#`-run is misread as an
//! interpolation escape. The marker, quote and escape characters are
//! configuration; the Swift triple (`#`, `"`, `\`) is the shipped default.

use once_cell::sync::Lazy;
use regex::Regex;

/// A raw-literal syntax: marker/quote/escape characters plus the scanner
/// built from them
///
/// The scan pattern is compiled once at construction and the instance is
/// borrowed everywhere; there is no lazily-populated cache behind it.
#[derive(Debug)]
pub struct FenceSpec {
    marker: char,
    pattern: Regex,
}

static SWIFT: Lazy<FenceSpec> = Lazy::new(|| FenceSpec::new('#', '"', '\\'));

impl FenceSpec {
    /// Build a spec for a raw-literal grammar.
    ///
    /// The scanner matches every quote with its adjacent marker run, every
    /// marker run closed by a quote, and every escape character with its
    /// trailing marker run. The length of the longest match is exactly one
    /// more than the longest marker run adjacent to a quote or escape, which
    /// is the fence that makes the embedding unambiguous.
    pub fn new(marker: char, quote: char, escape: char) -> FenceSpec {
        let m = regex::escape(&marker.to_string());
        let q = regex::escape(&quote.to_string());
        let e = regex::escape(&escape.to_string());
        let pattern = Regex::new(&format!("({q}{m}*)|({m}*{q})|({e}{m}*)"))
            .expect("fence scan pattern should be valid");
        FenceSpec { marker, pattern }
    }

    /// The Swift raw-string grammar, the shipped default.
    pub fn swift() -> &'static FenceSpec {
        &SWIFT
    }

    /// Required fence length for `content`; 0 when a plain literal is safe.
    pub fn fence_len(&self, content: &str) -> usize {
        self.pattern
            .find_iter(content)
            .map(|m| m.as_str().chars().count())
            .max()
            .unwrap_or(0)
    }

    /// The fence rendered as the marker repeated `len` times.
    pub fn fence_marker(&self, len: usize) -> String {
        std::iter::repeat(self.marker).take(len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_content_needs_no_fence() {
        let spec = FenceSpec::swift();
        assert_eq!(spec.fence_len("hello"), 0);
        assert_eq!(spec.fence_len(""), 0);
        // Standalone marker runs with no quote or escape adjacency are inert.
        assert_eq!(spec.fence_len("#### issue tracker ####"), 0);
    }

    #[test]
    fn test_any_quote_or_escape_forces_a_fence() {
        let spec = FenceSpec::swift();
        assert_eq!(spec.fence_len("say \"hi\""), 1);
        assert_eq!(spec.fence_len("C:\\path"), 1);
    }

    #[test]
    fn test_marker_run_before_quote() {
        let spec = FenceSpec::swift();
        // k markers followed by a quote need a fence strictly greater than k.
        for k in 1..5 {
            let content = format!("{}\"", "#".repeat(k));
            assert_eq!(spec.fence_len(&content), k + 1);
        }
    }

    #[test]
    fn test_marker_run_after_quote() {
        let spec = FenceSpec::swift();
        assert_eq!(spec.fence_len("\"##"), 3);
    }

    #[test]
    fn test_escape_adjacent_markers() {
        let spec = FenceSpec::swift();
        // \## could be read as an interpolation escape under a 2-fence.
        assert_eq!(spec.fence_len("\\##"), 3);
    }

    #[test]
    fn test_spec_example_content() {
        let spec = FenceSpec::swift();
        // `"# fixme"` opens with quote-then-marker.
        assert!(spec.fence_len("\"# fixme\"") >= 1);
        assert_eq!(spec.fence_len("\"# fixme\""), 2);
    }

    #[test]
    fn test_fence_marker_rendering() {
        let spec = FenceSpec::swift();
        assert_eq!(spec.fence_marker(0), "");
        assert_eq!(spec.fence_marker(3), "###");
    }

    #[test]
    fn test_embedding_round_trip() {
        // Simulate the Swift lexer: the literal body ends at the first
        // occurrence of `"""` + marker×n. With the computed fence the only
        // such occurrence must be the real terminator.
        let spec = FenceSpec::swift();
        for content in [
            "hello",
            "say \"hi\"",
            "#\"",
            "\"\"\"",
            "##\"inner\"##",
            "\\#(interpolation)",
            "\"# fixme\"",
        ] {
            let n = spec.fence_len(content);
            let fence = spec.fence_marker(n);
            let terminator = format!("\"\"\"{fence}");
            let body = format!("\n{content}\n");
            let end = body.find(&terminator);
            // The body itself must not contain the closing delimiter.
            assert!(end.is_none(), "content {content:?} leaks past fence {n}");
        }
    }

    #[test]
    fn test_custom_grammar() {
        // A hypothetical grammar using @ markers around ' quotes.
        let spec = FenceSpec::new('@', '\'', '\\');
        assert_eq!(spec.fence_len("plain"), 0);
        assert_eq!(spec.fence_len("@@'"), 3);
        assert_eq!(spec.fence_marker(2), "@@");
    }
}
