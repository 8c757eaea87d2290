//! Style resolution: pick the concrete style for a widget instance.

use crate::style::descriptor::{DesktopStyle, StyleDescriptor};
use crate::style::store::{StyleCategory, StyleStore, DEFAULT_STYLE_NAME};

/// Anything that takes its visuals from a stylesheet.
pub trait Styled {
    /// The category to resolve against, or `None` for unstyled containers.
    fn style_category(&self) -> Option<StyleCategory>;

    /// The requested style name, if any.
    fn style_name(&self) -> Option<&str>;

    /// Receive the resolved style (`None` means built-in fallback visuals).
    fn apply_style(&mut self, style: Option<StyleDescriptor>);
}

/// Resolves `(category, name)` requests against a [`StyleStore`].
///
/// Resolution order: the exact named style, then the category default, then
/// nothing. It never fails.
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'a> {
    store: &'a StyleStore,
}

impl<'a> StyleResolver<'a> {
    pub fn new(store: &'a StyleStore) -> Self {
        Self { store }
    }

    /// Resolve a style request.
    pub fn resolve(
        &self,
        category: StyleCategory,
        requested: Option<&str>,
    ) -> Option<&'a StyleDescriptor> {
        let requested = requested.filter(|name| !name.is_empty());
        if let Some(style) = requested.and_then(|name| self.store.get(category, name)) {
            return Some(style);
        }
        if let Some(name) = requested {
            log::debug!("style '{name}' not found in '{category}', falling back to default");
        }
        self.store.get(category, DEFAULT_STYLE_NAME)
    }

    /// Resolve the style for a [`Styled`] value.
    pub fn resolve_for(&self, styled: &impl Styled) -> Option<&'a StyleDescriptor> {
        let category = styled.style_category()?;
        self.resolve(category, styled.style_name())
    }

    /// Resolve and hand a deep copy to `styled`.
    pub fn apply(&self, styled: &mut impl Styled) {
        let style = self.resolve_for(styled).cloned();
        styled.apply_style(style);
    }

    pub fn desktop(&self) -> Option<&'a DesktopStyle> {
        self.store.desktop()
    }
}

impl StyleStore {
    /// A resolver over this store.
    pub fn resolver(&self) -> StyleResolver<'_> {
        StyleResolver::new(self)
    }
}
