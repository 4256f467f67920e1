//! Navigation bar with the language switcher

use super::escape;
use crate::i18n::{I18n, Translator};
use std::fmt::Write;

/// Section anchors linked from the navigation, with their label keys
const LINKS: [(&str, &str); 4] = [
    ("about", "about"),
    ("services", "services"),
    ("careers", "careers"),
    ("contact", "contact"),
];

/// Interaction state of the navigation bar
#[derive(Debug, Clone, Default)]
pub struct NavbarState {
    pub menu_open: bool,
    pub languages_open: bool,
    pub scrolled: bool,
}

impl NavbarState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_languages(&mut self) {
        self.languages_open = !self.languages_open;
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > 0.0;
    }

    /// Switch the site language and close both menus
    pub fn select_language(&mut self, i18n: &I18n, code: &str) {
        i18n.set_language(code);
        self.languages_open = false;
        self.menu_open = false;
    }
}

pub fn render_navbar(ctx: &Translator, state: &NavbarState) -> String {
    let background = if state.scrolled {
        "bg-gray-900/90 backdrop-blur-md shadow-lg shadow-black/20"
    } else {
        "bg-gray-900/80"
    };

    let mut links = String::new();
    for (anchor, key) in LINKS {
        let _ = write!(links, "<a href=\"#{}\" class=\"nav-link\">{}</a>", anchor, escape(ctx.t(key)));
    }

    let mut languages = String::new();
    for language in I18n::available_languages() {
        let _ = write!(
            languages,
            "<button type=\"button\" class=\"language-option\" data-lang=\"{}\"{}>{} {}</button>",
            language.code,
            if language.code == ctx.language() { " aria-current=\"true\"" } else { "" },
            language.flag,
            escape(language.name),
        );
    }

    let mut html = String::new();
    let _ = write!(
        html,
        "<nav class=\"fixed top-0 w-full z-50 {} border-b border-white/10\">\
         <a href=\"#\" class=\"brand\" aria-label=\"Connect Pro Group\">\
         <img src=\"/IMG_2715.PNG\" alt=\"Connect Pro Group\" loading=\"eager\" decoding=\"async\"></a>\
         <div class=\"desktop-menu\">{}<div class=\"language-menu\">\
         <button type=\"button\" class=\"language-toggle\">{}</button>",
        background,
        links,
        escape(ctx.t("language")),
    );
    if state.languages_open {
        let _ = write!(html, "<div class=\"language-dropdown\">{}</div>", languages);
    }
    html.push_str("</div></div>");
    if state.menu_open {
        let _ = write!(html, "<div class=\"mobile-menu\">{}{}</div>", links, languages);
    }
    html.push_str("</nav>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_language_closes_menus() {
        let i18n = I18n::default();
        let mut state = NavbarState::default();
        state.toggle_menu();
        state.toggle_languages();

        state.select_language(&i18n, "it");
        assert_eq!(i18n.current_language(), "it");
        assert!(!state.menu_open);
        assert!(!state.languages_open);
    }

    #[test]
    fn test_scroll_flag() {
        let mut state = NavbarState::default();
        state.on_scroll(12.0);
        assert!(state.scrolled);
        state.on_scroll(0.0);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_dropdown_only_when_open() {
        let i18n = I18n::default();
        let mut state = NavbarState::default();
        let closed = render_navbar(&i18n.context(), &state);
        assert!(!closed.contains("language-dropdown"));
        assert!(closed.contains("Karriere"));

        state.toggle_languages();
        let open = render_navbar(&i18n.context(), &state);
        assert!(open.contains("language-dropdown"));
        assert!(open.contains("data-lang=\"sq\""));
        assert!(open.contains("Fran\u{00E7}ais"));
    }
}
