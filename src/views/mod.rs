//! Section render functions
//!
//! Each section is a plain function from a [`Translator`](crate::i18n::Translator)
//! (plus whatever state it shows) to HTML. [`render_page`] composes them in
//! page order.

mod about;
mod banner;
mod careers;
mod contact;
mod decor;
mod hero;
mod layout;
mod navbar;
mod partners;
mod services;

pub use about::render_about;
pub use banner::{render_banner, AdBanner};
pub use careers::render_careers;
pub use contact::render_contact;
pub use decor::{decor, DecorElement, DecorProfile, DEFAULT_DECOR_SEED};
pub use hero::render_hero;
pub use layout::{render_loading, render_page, PageModel};
pub use navbar::{render_navbar, NavbarState};
pub use partners::render_partners;
pub use services::render_services;

/// Escape text for use in HTML content and attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
