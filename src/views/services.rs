//! Services section: the carousel's current slide plus its controls

use super::escape;
use crate::carousel::Carousel;
use crate::i18n::Translator;
use std::fmt::Write;

pub fn render_services(ctx: &Translator, carousel: &Carousel) -> String {
    let slide = carousel.current_slide(ctx);

    let mut dots = String::new();
    for (index, active) in carousel.dots().into_iter().enumerate() {
        let _ = write!(
            dots,
            "<button type=\"button\" class=\"dot{}\" data-slide=\"{}\" aria-label=\"{} {}\"></button>",
            if active { " active" } else { "" },
            index,
            escape(ctx.t("goToSlide")),
            index + 1,
        );
    }

    format!(
        "<section id=\"services\" class=\"py-20 overflow-hidden\">\
         <h2>{title}</h2><p>{description}</p>\
         <div class=\"carousel\" data-autoplay=\"{autoplay}\">\
         <button type=\"button\" class=\"arrow prev\" aria-label=\"{prev}\"></button>\
         <button type=\"button\" class=\"arrow next\" aria-label=\"{next}\"></button>\
         <div class=\"slide\" data-index=\"{index}\">\
         <img src=\"{image}\" alt=\"{slide_title}\" loading=\"lazy\" decoding=\"async\">\
         <div class=\"overlay bg-gradient-to-br {style}\"></div>\
         <div class=\"slide-content\"><span class=\"icon\" data-icon=\"{icon}\"></span>\
         <h3>{slide_title}</h3><p>{slide_description}</p></div></div>\
         <div class=\"dots\">{dots}</div></div></section>",
        title = escape(ctx.t("servicesTitle")),
        description = escape(ctx.t("servicesDescription")),
        autoplay = carousel.autoplay_enabled(),
        prev = escape(ctx.t("previousSlide")),
        next = escape(ctx.t("nextSlide")),
        index = slide.index,
        image = escape(&slide.image),
        style = escape(&slide.bg_style),
        icon = escape(&slide.icon),
        slide_title = escape(&slide.title),
        slide_description = escape(&slide.description),
        dots = dots,
    )
}
