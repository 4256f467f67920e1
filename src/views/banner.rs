//! Dismissible ad banner

use super::escape;
use crate::i18n::Translator;

/// Dismissible ad strip below the navigation
#[derive(Debug, Clone)]
pub struct AdBanner {
    visible: bool,
}

impl AdBanner {
    pub fn new(visible: bool) -> Self {
        Self { visible }
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for AdBanner {
    fn default() -> Self {
        Self::new(true)
    }
}

pub fn render_banner(ctx: &Translator, banner: &AdBanner) -> String {
    if !banner.is_visible() {
        return String::new();
    }
    format!(
        "<div class=\"ad-banner sticky top-20 z-40\"><a href=\"#\">Ads</a>\
         <button type=\"button\" class=\"close\" aria-label=\"{}\">\u{00D7}</button></div>",
        escape(ctx.t("closeBanner"))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;

    #[test]
    fn test_dismiss_hides_banner() {
        let i18n = I18n::default();
        let mut banner = AdBanner::default();
        assert!(render_banner(&i18n.context(), &banner).contains("Banner schlie\u{00DF}en"));

        banner.dismiss();
        assert!(render_banner(&i18n.context(), &banner).is_empty());
    }
}
