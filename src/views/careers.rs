//! Careers section
//!
//! Open positions expand to show their requirements when selected. The
//! application form echoes back what has been entered so far.

use super::decor::{render_decor, DecorElement};
use super::escape;
use crate::core::JobPosition;
use crate::forms::{ApplicationForm, PositionSelector};
use crate::i18n::Translator;
use std::fmt::Write;

pub fn render_careers(
    ctx: &Translator,
    selector: &PositionSelector,
    form: &ApplicationForm,
    decor: &[DecorElement],
) -> String {
    let positions = JobPosition::catalog();

    let mut cards = String::new();
    let mut options = String::new();
    for position in &positions {
        let selected = selector.is_selected(position);
        let _ = write!(
            cards,
            "<div class=\"position{}\" data-position=\"{}\"><h3>{}</h3><p>{}</p>",
            if selected { " selected" } else { "" },
            escape(&position.id),
            escape(ctx.t(&position.title_key)),
            escape(ctx.t(&position.description_key)),
        );
        if selected {
            cards.push_str("<ul class=\"requirements\">");
            for key in &position.requirement_keys {
                let _ = write!(cards, "<li>{}</li>", escape(ctx.t(key)));
            }
            cards.push_str("</ul>");
        }
        cards.push_str("</div>");

        let _ = write!(
            options,
            "<option value=\"{}\"{}>{}</option>",
            escape(&position.id),
            if form.position == position.id { " selected" } else { "" },
            escape(ctx.t(&position.title_key)),
        );
    }

    let resume = form
        .resume
        .as_deref()
        .map(|name| format!("<span class=\"file-name\">{}</span>", escape(name)))
        .unwrap_or_default();

    format!(
        "<section id=\"careers\" class=\"relative py-20 overflow-hidden\">{decor}\
         <span class=\"badge\">{title}</span><h2>{title}</h2><p>{description}</p>\
         <div class=\"positions\">{cards}</div>\
         <form class=\"application\" method=\"post\" onsubmit=\"return false\">\
         <h3>{title}</h3><p>{description}</p>\
         <label>{full_name}<input type=\"text\" name=\"name\" value=\"{name}\" required></label>\
         <label>{email}<input type=\"email\" name=\"email\" value=\"{email_value}\" required></label>\
         <label>{phone}<input type=\"tel\" name=\"phone\" value=\"{phone_value}\" required></label>\
         <label>{position}<select name=\"position\" required>\
         <option value=\"\">{select}</option>{options}</select></label>\
         <label>{upload}<input type=\"file\" name=\"resume\" accept=\".pdf,.doc,.docx\">{resume}</label>\
         <button type=\"submit\">{send}</button></form></section>",
        decor = render_decor(decor),
        title = escape(ctx.t("careersTitle")),
        description = escape(ctx.t("careersDescription")),
        cards = cards,
        full_name = escape(ctx.t("fullName")),
        name = escape(&form.name),
        email = escape(ctx.t("email")),
        email_value = escape(&form.email),
        phone = escape(ctx.t("phoneNumber")),
        phone_value = escape(&form.phone),
        position = escape(ctx.t("position")),
        select = escape(ctx.t("selectPosition")),
        options = options,
        upload = escape(ctx.t("uploadCV")),
        resume = resume,
        send = escape(ctx.t("sendApplication")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;

    #[test]
    fn test_requirements_only_for_selected_position() {
        let i18n = I18n::default();
        i18n.set_language("en");
        let positions = JobPosition::catalog();
        let mut selector = PositionSelector::default();
        let form = ApplicationForm::default();

        let html = render_careers(&i18n.context(), &selector, &form, &[]);
        assert!(!html.contains("requirements"));

        selector.toggle(&positions[1]);
        let html = render_careers(&i18n.context(), &selector, &form, &[]);
        assert!(html.contains("<li>Degree in IT or a related field</li>"));
        assert!(!html.contains("Fluent Albanian and English"));
    }

    #[test]
    fn test_form_values_are_escaped() {
        let i18n = I18n::default();
        let mut form = ApplicationForm::default();
        form.set_field("name", "<script>alert(1)</script>");
        form.set_field("position", "1");

        let html = render_careers(&i18n.context(), &PositionSelector::default(), &form, &[]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<option value=\"1\" selected>"));
    }
}
