//! Page composition

use super::{
    escape, render_about, render_banner, render_careers, render_contact, render_hero,
    render_navbar, render_partners, render_services, AdBanner, DecorElement, NavbarState,
};
use crate::carousel::Carousel;
use crate::core::SiteConfig;
use crate::forms::{ApplicationForm, ContactForm, PositionSelector};
use crate::i18n::Translator;
use std::fmt::Write;

/// Everything a page render reads besides the translation context
pub struct PageModel<'a> {
    pub navbar: &'a NavbarState,
    pub banner: &'a AdBanner,
    pub carousel: &'a Carousel,
    pub positions: &'a PositionSelector,
    pub application: &'a ApplicationForm,
    pub contact: &'a ContactForm,
    pub site: &'a SiteConfig,
    pub hero_decor: &'a [DecorElement],
    pub careers_decor: &'a [DecorElement],
    pub contact_decor: &'a [DecorElement],
}

/// Entrance animation wrapper
fn fade_in(delay: f64, body: &str) -> String {
    format!(
        "<div class=\"fade-in\" style=\"animation-delay: {:.1}s; animation-duration: 0.5s\">{}</div>",
        delay, body
    )
}

pub fn render_loading(ctx: &Translator) -> String {
    format!(
        "<div class=\"loading-screen\" role=\"status\"><div class=\"spinner\"></div><p>{}</p></div>",
        escape(ctx.t("loading"))
    )
}

/// Render the full document in the context's language
pub fn render_page(ctx: &Translator, page: &PageModel<'_>) -> String {
    let sections = [
        (0.0, render_hero(ctx, page.hero_decor)),
        (0.2, render_about(ctx)),
        (0.3, render_services(ctx, page.carousel)),
        (0.4, render_partners(ctx)),
        (0.5, render_careers(ctx, page.positions, page.application, page.careers_decor)),
        (0.6, render_contact(ctx, page.site, page.contact, page.contact_decor)),
    ];

    let mut main = String::new();
    for (delay, body) in &sections {
        main.push_str(&fade_in(*delay, body));
    }

    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Connect Pro Group</title>\n</head>\n\
         <body class=\"min-h-screen bg-white\">\n{navbar}\n{banner}\n<main class=\"pt-20\">{main}</main>\n</body>\n</html>\n",
        lang = escape(ctx.language()),
        navbar = render_navbar(ctx, page.navbar),
        banner = render_banner(ctx, page.banner),
        main = main,
    );
    html
}
