//! Contact details, map and contact form

use super::decor::{render_decor, DecorElement};
use super::escape;
use crate::core::SiteConfig;
use crate::forms::ContactForm;
use crate::i18n::Translator;
use std::fmt::Write;

const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2996.4394037744856!2d19.8168863!3d41.3289589!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x135031653bb8ad39%3A0xd27b0d5cf36dbcc1!2sRruga%20Myslym%20Shyri%2C%20Tirana%2C%20Albania!5e0!3m2!1sen!2s!4v1647355846284!5m2!1sen!2s";

const SOCIAL: [&str; 4] = ["Instagram", "Twitter", "Facebook", "Linkedin"];

fn lines(items: &[String], separator: &str) -> String {
    items
        .iter()
        .map(|item| escape(item))
        .collect::<Vec<_>>()
        .join(separator)
}

pub fn render_contact(
    ctx: &Translator,
    site: &SiteConfig,
    form: &ContactForm,
    decor: &[DecorElement],
) -> String {
    let mut social = String::new();
    for network in SOCIAL {
        let _ = write!(
            social,
            "<a href=\"#\" target=\"_blank\" rel=\"noopener noreferrer\" data-icon=\"{}\"></a>",
            network
        );
    }

    format!(
        "<section id=\"contact\" class=\"relative py-20 overflow-hidden\">{decor}\
         <h2>{title}</h2><p>{description}</p>\
         <div class=\"details\">\
         <div class=\"detail\"><h3>{phone}</h3><p>{phones}</p></div>\
         <div class=\"detail\"><h3>{email}</h3><p>{emails}</p></div>\
         <div class=\"detail\"><h3>{address}</h3><p>{address_lines}</p></div></div>\
         <iframe src=\"{map}\" width=\"100%\" height=\"100%\" style=\"border: 0\" allowfullscreen \
         loading=\"lazy\" referrerpolicy=\"no-referrer-when-downgrade\"></iframe>\
         <form class=\"contact-form\" method=\"post\" onsubmit=\"return false\">\
         <label for=\"name\">{name}</label><input id=\"name\" type=\"text\" name=\"name\" value=\"{name_value}\" required>\
         <label for=\"email\">{email}</label><input id=\"email\" type=\"email\" name=\"email\" value=\"{email_value}\" required>\
         <label for=\"message\">{message}</label><textarea id=\"message\" name=\"message\" rows=\"4\" required>{message_value}</textarea>\
         <button type=\"submit\">{send}</button></form>\
         <div class=\"social\"><h3>{follow}</h3>{social}</div></section>",
        decor = render_decor(decor),
        title = escape(ctx.t("contactTitle")),
        description = escape(ctx.t("contactDescription")),
        phone = escape(ctx.t("phone")),
        phones = lines(&site.phones, "<br>"),
        email = escape(ctx.t("email")),
        emails = lines(&site.emails, "<br>"),
        address = escape(ctx.t("address")),
        address_lines = lines(&site.address, "<br>"),
        map = escape(MAP_EMBED),
        name = escape(ctx.t("name")),
        name_value = escape(&form.name),
        email_value = escape(&form.email),
        message = escape(ctx.t("message")),
        message_value = escape(&form.message),
        send = escape(ctx.t("sendMessage")),
        follow = escape(ctx.t("socialFollow")),
        social = social,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;

    #[test]
    fn test_contact_details_from_config() {
        let i18n = I18n::default();
        let site = SiteConfig::default();
        let html = render_contact(&i18n.context(), &site, &ContactForm::default(), &[]);

        assert!(html.contains("<h2>Kontakt</h2>"));
        assert!(html.contains("info@connectprogroup.com<br>support@connectprogroup.com"));
        assert!(html.contains("Rruga &quot;Myslym Shyri&quot;, Nr. 50"));
        assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 4);
    }
}
