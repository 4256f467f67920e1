//! Partner cards and trust indicators

use super::escape;
use crate::core::Partner;
use crate::i18n::Translator;
use std::fmt::Write;

const TRUST_INDICATORS: [(&str, &str); 3] = [
    ("wideExperience", "wideExperienceText"),
    ("manyPartners", "manyPartnersText"),
    ("support24_7", "support24_7Text"),
];

pub fn render_partners(ctx: &Translator) -> String {
    let mut cards = String::new();
    for (index, partner) in Partner::catalog().iter().enumerate() {
        let _ = write!(
            cards,
            "<div class=\"partner\" style=\"animation-delay: {:.1}s\" data-icon=\"{}\" data-logo=\"{}\">\
             <h3>{}</h3><p>{}</p></div>",
            index as f64 * 0.1,
            escape(&partner.icon),
            escape(&partner.logo),
            escape(ctx.t(&partner.name_key)),
            escape(ctx.t(&partner.description_key)),
        );
    }

    let mut indicators = String::new();
    for (title, text) in TRUST_INDICATORS {
        let _ = write!(
            indicators,
            "<div class=\"indicator\"><h4>{}</h4><p>{}</p></div>",
            escape(ctx.t(title)),
            escape(ctx.t(text))
        );
    }

    format!(
        "<section id=\"partners\" class=\"py-20 overflow-hidden\">\
         <h2>{}</h2><p>{}</p><div class=\"partners\">{}</div>\
         <div class=\"trust\">{}</div></section>",
        escape(ctx.t("partnersTitle")),
        escape(ctx.t("partnersDescription")),
        cards,
        indicators,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;

    #[test]
    fn test_partner_cards() {
        let i18n = I18n::default();
        i18n.set_language("en");
        let html = render_partners(&i18n.context());

        assert!(html.contains("<h2>Our Partners</h2>"));
        assert_eq!(html.matches("class=\"partner\"").count(), Partner::catalog().len());
        assert!(html.contains("<h3>Vodafone</h3><p>Telecommunications</p>"));
        assert!(html.contains("<h3>Balfin Group</h3><p>Investments</p>"));
        assert!(html.contains("animation-delay: 0.3s"));
    }

    #[test]
    fn test_trust_indicators() {
        let i18n = I18n::default();
        i18n.set_language("en");
        let html = render_partners(&i18n.context());
        assert_eq!(html.matches("class=\"indicator\"").count(), 3);
        assert!(html.contains("<h4>Wide Experience</h4>"));
    }
}
