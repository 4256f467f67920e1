//! About section

use super::escape;
use crate::core::ABOUT_STATS;
use crate::i18n::Translator;
use std::fmt::Write;

const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1521737711867-e3b97375f902?ixlib=rb-1.2.1&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=1950&q=80";

/// (title key, text key, accent class) for each company value
const VALUES: [(&str, &str, &str); 3] = [
    ("professionalism", "professionalismText", "text-green-400"),
    ("innovation", "innovationText", "text-purple-400"),
    ("excellence", "excellenceText", "text-blue-400"),
];

pub fn render_about(ctx: &Translator) -> String {
    let mut stats = String::new();
    for stat in ABOUT_STATS {
        let _ = write!(
            stats,
            "<div class=\"stat\" data-icon=\"{}\"><strong>{}</strong><span>{}</span></div>",
            stat.icon,
            escape(stat.value),
            escape(ctx.t(stat.label_key))
        );
    }

    let mut values = String::new();
    for (title, text, accent) in VALUES {
        let _ = write!(
            values,
            "<div class=\"value\"><h4 class=\"{}\">{}</h4><p>{}</p></div>",
            accent,
            escape(ctx.t(title)),
            escape(ctx.t(text))
        );
    }

    format!(
        "<section id=\"about\" class=\"py-20 text-white\">\
         <h2>{title}</h2><p>{description}</p>\
         <div class=\"mission\"><h3>{mission}</h3><p>{mission_text}</p></div>\
         <div class=\"vision\"><h3>{vision}</h3><p>{vision_text}</p></div>\
         <img src=\"{image}\" alt=\"{title}\" loading=\"lazy\" decoding=\"async\">\
         <div class=\"stats\">{stats}</div>\
         <h3>{values_title}</h3><div class=\"values\">{values}</div></section>",
        title = escape(ctx.t("aboutTitle")),
        description = escape(ctx.t("aboutDescription")),
        mission = escape(ctx.t("mission")),
        mission_text = escape(ctx.t("missionText")),
        vision = escape(ctx.t("vision")),
        vision_text = escape(ctx.t("visionText")),
        image = escape(ABOUT_IMAGE),
        stats = stats,
        values_title = escape(ctx.t("values")),
        values = values,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;

    #[test]
    fn test_stats_and_values() {
        let i18n = I18n::default();
        i18n.set_language("en");
        let html = render_about(&i18n.context());

        assert!(html.contains("<h2>About Us</h2>"));
        assert!(html.contains("<h3>Our Mission</h3>"));
        assert_eq!(html.matches("class=\"stat\"").count(), ABOUT_STATS.len());
        assert!(html.contains("<strong>98%</strong><span>Client Satisfaction</span>"));
        assert_eq!(html.matches("class=\"value\"").count(), 3);
        assert!(html.contains("<h4 class=\"text-blue-400\">Excellence</h4>"));
    }

    #[test]
    fn test_german_headings() {
        let i18n = I18n::default();
        let html = render_about(&i18n.context());
        assert!(html.contains("<h2>\u{00DC}ber uns</h2>"));
        assert!(html.contains("<h3>Unsere Werte</h3>"));
    }
}
