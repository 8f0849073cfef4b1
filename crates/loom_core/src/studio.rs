use loom_traits::VariationSource;
use mod_spintax::{SpintaxEngine, ThreadRngSource};

/// A post-render transformation applied to each expanded variation.
pub type PostRenderHook = Box<dyn Fn(String) -> String + Send + Sync>;

/// Composes the spintax engine with an ordered list of post-render hooks.
///
/// Hooks are registered once at construction time and run after every
/// expansion in registration order. Anything that needs to decorate
/// generated content (watermarks, tracking fragments, whitespace tweaks)
/// plugs in here instead of wrapping or replacing the render path at
/// runtime.
pub struct ContentStudio<R: VariationSource = ThreadRngSource> {
    engine: SpintaxEngine<R>,
    hooks: Vec<PostRenderHook>,
}

impl ContentStudio<ThreadRngSource> {
    pub fn new() -> Self {
        Self::with_source(ThreadRngSource)
    }
}

impl Default for ContentStudio<ThreadRngSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: VariationSource> ContentStudio<R> {
    pub fn with_source(source: R) -> Self {
        Self {
            engine: SpintaxEngine::with_source(source),
            hooks: Vec::new(),
        }
    }

    /// Registers a hook to run after expansion, in registration order.
    pub fn with_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Expands one variation and runs it through the hook chain.
    pub fn render(&mut self, template: &str) -> String {
        let mut text = self.engine.expand(template);
        for hook in &self.hooks {
            text = hook(text);
        }
        text
    }

    /// Produces `count` independent rendered variations.
    pub fn render_many(&mut self, template: &str, count: usize) -> Vec<String> {
        (0..count).map(|_| self.render(template)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FirstChoice;

    impl VariationSource for FirstChoice {
        fn next_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    #[test]
    fn render_without_hooks_is_plain_expansion() {
        let mut studio = ContentStudio::with_source(FirstChoice);
        assert_eq!(studio.render("{Hi|Hello} there"), "Hi there");
    }

    #[test]
    fn hooks_run_in_registration_order() {
        let mut studio = ContentStudio::with_source(FirstChoice)
            .with_hook(|text| format!("[{text}]"))
            .with_hook(|text| format!("{text}!"));
        assert_eq!(studio.render("{a|b}"), "[a]!");
    }

    #[test]
    fn render_many_applies_hooks_to_every_variation() {
        let mut studio =
            ContentStudio::with_source(FirstChoice).with_hook(|text| text.to_uppercase());
        assert_eq!(studio.render_many("{hey|ho}", 3), vec!["HEY", "HEY", "HEY"]);
    }

    #[test]
    fn render_many_honors_zero_count() {
        let mut studio = ContentStudio::new();
        assert!(studio.render_many("{a|b}", 0).is_empty());
    }
}
