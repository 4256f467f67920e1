//! Hero section: headline, calls to action and feature highlights

use super::decor::{render_decor, DecorElement};
use super::escape;
use crate::i18n::Translator;
use std::fmt::Write;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1521737711867-e3b97375f902?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80";

const FEATURES: [(&str, &str); 3] = [
    ("Star", "yearsExperience"),
    ("Shield", "support247"),
    ("Sparkles", "premiumService"),
];

pub fn render_hero(ctx: &Translator, decor: &[DecorElement]) -> String {
    let mut features = String::new();
    for (icon, key) in FEATURES {
        let _ = write!(
            features,
            "<li class=\"feature\" data-icon=\"{}\">{}</li>",
            icon,
            escape(ctx.t(key))
        );
    }

    format!(
        "<section id=\"hero\" class=\"relative min-h-screen overflow-hidden\">{decor}\
         <div class=\"hero-content\">\
         <span class=\"badge\">{badge}</span>\
         <h1>{title}</h1><p class=\"subtitle\">{subtitle}</p><p>{description}</p>\
         <div class=\"cta\"><a href=\"#contact\" class=\"button primary\">{contact}</a>\
         <a href=\"#services\" class=\"button secondary\">{services}</a></div>\
         <ul class=\"features\">{features}</ul></div>\
         <figure class=\"hero-image\"><img src=\"{image}\" alt=\"{alt}\" loading=\"eager\" decoding=\"async\">\
         <figcaption><h3>{support}</h3><p>{available}</p></figcaption></figure></section>",
        decor = render_decor(decor),
        badge = escape(ctx.t("professionalCallCenter")),
        title = escape(ctx.t("heroTitle")),
        subtitle = escape(ctx.t("heroSubtitle")),
        description = escape(ctx.t("heroDescription")),
        contact = escape(ctx.t("contactUs")),
        services = escape(ctx.t("ourServices")),
        features = features,
        image = escape(HERO_IMAGE),
        alt = escape(ctx.t("callCenterImage")),
        support = escape(ctx.t("support247")),
        available = escape(ctx.t("alwaysAvailable")),
    )
}
