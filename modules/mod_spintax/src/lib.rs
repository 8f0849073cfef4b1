use loom_traits::VariationSource;
use rand::Rng;
use tracing::trace;

/// Draws choice indices from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl VariationSource for ThreadRngSource {
    fn next_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Resolves `{option1|option2|...}` spintax templates into concrete text.
///
/// The scan is a single left-to-right pass: each `{` is paired with the
/// nearest following `}`, the interior is split on `|`, one alternative is
/// selected through the [`VariationSource`], and scanning resumes after the
/// emitted text. Chosen alternatives are never re-scanned, so groups do not
/// nest. Malformed input degrades to literal text instead of erroring: an
/// unmatched `{` is copied through verbatim along with everything after it.
pub struct SpintaxEngine<R: VariationSource> {
    source: R,
}

impl SpintaxEngine<ThreadRngSource> {
    pub fn new() -> Self {
        Self::with_source(ThreadRngSource)
    }
}

impl Default for SpintaxEngine<ThreadRngSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: VariationSource> SpintaxEngine<R> {
    pub fn with_source(source: R) -> Self {
        Self { source }
    }

    /// Produces one fully-resolved variation of `template`.
    pub fn expand(&mut self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open + 1..].find('}') else {
                // No closing brace anywhere ahead: the remainder is literal.
                break;
            };

            out.push_str(&rest[..open]);

            let interior = &rest[open + 1..open + 1 + close];
            let choices: Vec<&str> = interior.split('|').collect();
            // Splitting always yields at least one (possibly empty) choice.
            let idx = self.source.next_index(choices.len()).min(choices.len() - 1);
            trace!(group = interior, chosen = idx, "resolved choice group");
            out.push_str(choices[idx]);

            rest = &rest[open + 1 + close + 1..];
        }

        out.push_str(rest);
        out
    }

    /// Produces `count` independent variations. A `count` of zero yields an
    /// empty vector; variations may repeat since each draw is independent.
    pub fn expand_many(&mut self, template: &str, count: usize) -> Vec<String> {
        (0..count).map(|_| self.expand(template)).collect()
    }
}
