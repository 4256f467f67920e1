//! Composition root
//!
//! [`Site`] owns the translation provider and all per-section state, and
//! hands each render function the pieces it needs.

use crate::carousel::CarouselController;
use crate::core::{Config, Result, ServiceSlide};
use crate::forms::{ApplicationForm, ContactForm, PositionSelector};
use crate::i18n::{I18n, Translator};
use crate::views::{
    decor, render_page, AdBanner, DecorElement, DecorProfile, NavbarState, PageModel,
    DEFAULT_DECOR_SEED,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub struct Site {
    config: Config,
    i18n: I18n,
    navbar: NavbarState,
    banner: AdBanner,
    carousel: CarouselController,
    positions: PositionSelector,
    application: ApplicationForm,
    contact: ContactForm,
    hero_decor: Vec<DecorElement>,
    careers_decor: Vec<DecorElement>,
    contact_decor: Vec<DecorElement>,
}

impl Site {
    pub fn new(config: Config) -> Result<Self> {
        let i18n = I18n::new(&config.general.language);
        let carousel = CarouselController::new(
            ServiceSlide::catalog(),
            Duration::from_millis(config.carousel.interval_ms),
        )?;
        let seed = config.site.decor_seed.unwrap_or(DEFAULT_DECOR_SEED);

        Ok(Self {
            i18n,
            navbar: NavbarState::default(),
            banner: AdBanner::new(config.site.show_ad_banner),
            carousel,
            positions: PositionSelector::default(),
            application: ApplicationForm::default(),
            contact: ContactForm::default(),
            hero_decor: decor(seed, &DecorProfile::HERO),
            careers_decor: decor(seed.wrapping_add(1), &DecorProfile::CAREERS),
            contact_decor: decor(seed.wrapping_add(2), &DecorProfile::CONTACT),
            config,
        })
    }

    /// Mount the services carousel. Needs a tokio runtime.
    pub async fn mount(&mut self) {
        self.carousel.mount(self.config.carousel.autoplay).await;
    }

    pub async fn unmount(&mut self) {
        self.carousel.unmount().await;
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    /// Navigation bar language pick
    pub fn select_language(&mut self, code: &str) {
        self.navbar.select_language(&self.i18n, code);
    }

    pub fn navbar_mut(&mut self) -> &mut NavbarState {
        &mut self.navbar
    }

    pub fn banner_mut(&mut self) -> &mut AdBanner {
        &mut self.banner
    }

    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut CarouselController {
        &mut self.carousel
    }

    pub fn positions_mut(&mut self) -> &mut PositionSelector {
        &mut self.positions
    }

    pub fn application_mut(&mut self) -> &mut ApplicationForm {
        &mut self.application
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    /// Render the page in the selected language
    pub async fn render(&self) -> String {
        self.render_with(&self.i18n.context()).await
    }

    async fn render_with(&self, ctx: &Translator) -> String {
        let carousel = self.carousel.snapshot().await;
        let page = PageModel {
            navbar: &self.navbar,
            banner: &self.banner,
            carousel: &carousel,
            positions: &self.positions,
            application: &self.application,
            contact: &self.contact,
            site: &self.config.site,
            hero_decor: &self.hero_decor,
            careers_decor: &self.careers_decor,
            contact_decor: &self.contact_decor,
        };
        render_page(ctx, &page)
    }

    /// Write `index.html` in the selected language plus `index.<code>.html`
    /// for every available language
    pub async fn write_pages(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;
        let mut written = Vec::new();

        let index = dir.join("index.html");
        fs::write(&index, self.render().await)?;
        written.push(index);

        for language in I18n::available_languages() {
            let path = dir.join(format!("index.{}.html", language.code));
            let html = self.render_with(&self.i18n.context_for(language.code)).await;
            fs::write(&path, html)?;
            written.push(path);
        }

        for path in &written {
            log::info!("Wrote {}", path.display());
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Error, JobPosition, Partner, ABOUT_STATS};
    use crate::i18n::{Dictionary, FALLBACK_LANGUAGE};

    #[tokio::test]
    async fn test_language_switch_rerenders() {
        let mut site = Site::new(Config::default()).unwrap();
        let mut updates = site.i18n().subscribe();

        let german = site.render().await;
        assert!(german.contains("<html lang=\"de\">"));
        assert!(german.contains("<h2>Kontakt</h2>"));

        site.select_language("en");
        assert!(updates.has_changed().unwrap());
        assert_eq!(*updates.borrow_and_update(), "en");

        let english = site.render().await;
        assert!(english.contains("<html lang=\"en\">"));
        assert!(english.contains("<h2>Contact</h2>"));
        assert!(english.contains("<h3>Customer Service</h3>"));
    }

    #[tokio::test]
    async fn test_unknown_language_renders_german_text() {
        let mut site = Site::new(Config::default()).unwrap();
        site.select_language("xx");

        let html = site.render().await;
        assert!(html.contains("<html lang=\"xx\">"));
        assert!(html.contains("<h2>Kontakt</h2>"));
        assert!(!html.contains(">contactTitle<"));
    }

    #[tokio::test]
    async fn test_sections_in_order() {
        let site = Site::new(Config::default()).unwrap();
        let html = site.render().await;

        let order = ["<nav", "ad-banner", "id=\"hero\"", "id=\"about\"", "id=\"services\"",
            "id=\"partners\"", "id=\"careers\"", "id=\"contact\""];
        let positions: Vec<usize> = order
            .iter()
            .map(|marker| html.find(marker).unwrap_or_else(|| panic!("{} missing", marker)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_render_is_deterministic() {
        let mut config = Config::default();
        config.site.decor_seed = Some(99);
        let first = Site::new(config.clone()).unwrap().render().await;
        let second = Site::new(config).unwrap().render().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_banner_hidden_by_config() {
        let mut config = Config::default();
        config.site.show_ad_banner = false;
        let site = Site::new(config).unwrap();
        assert!(!site.render().await.contains("ad-banner"));
    }

    #[tokio::test]
    async fn test_write_pages() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(Config::default()).unwrap();

        let written = site.write_pages(dir.path()).await.unwrap();
        assert_eq!(written.len(), 6);

        let french = fs::read_to_string(dir.path().join("index.fr.html")).unwrap();
        assert!(french.contains("<html lang=\"fr\">"));
        assert!(french.contains("Nos partenaires"));
        // Writing other languages leaves the selection alone
        assert_eq!(site.i18n().current_language(), "de");
    }

    #[tokio::test(start_paused = true)]
    async fn test_mounted_carousel_shows_in_render() {
        let mut site = Site::new(Config::default()).unwrap();
        site.mount().await;
        tokio::time::sleep(Duration::from_millis(10_500)).await;

        let html = site.render().await;
        assert!(html.contains("data-index=\"2\""));
        assert!(html.contains("<h3>CRM-Management</h3>"));

        site.unmount().await;
    }

    /// Text nodes plus human-readable attribute values
    fn visible_text(html: &str) -> Vec<String> {
        let mut texts: Vec<String> = html
            .split('<')
            .filter_map(|chunk| chunk.split_once('>').map(|(_, text)| text.trim()))
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .collect();
        for attribute in ["alt=\"", "aria-label=\""] {
            for (at, _) in html.match_indices(attribute) {
                let rest = &html[at + attribute.len()..];
                if let Some(end) = rest.find('"') {
                    texts.push(rest[..end].to_string());
                }
            }
        }
        texts
    }

    fn looks_like_key(text: &str) -> bool {
        text.starts_with(|c: char| c.is_ascii_lowercase())
            && text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    #[tokio::test]
    async fn test_no_raw_keys_in_any_language() {
        let mut site = Site::new(Config::default()).unwrap();
        site.navbar_mut().toggle_menu();
        site.navbar_mut().toggle_languages();
        for position in JobPosition::catalog() {
            site.positions_mut().toggle(&position);
        }
        site.application_mut().attach_resume(Some("cv.pdf"));
        site.contact_mut().set_field("message", "Hallo");

        for code in ["sq", "en", "de", "it", "fr", "xx"] {
            site.select_language(code);
            for index in 0..ServiceSlide::catalog().len() {
                site.carousel_mut().go_to(index).await.unwrap();
                let html = site.render().await;
                let raw: Vec<String> = visible_text(&html)
                    .into_iter()
                    .filter(|text| looks_like_key(text))
                    .collect();
                assert!(raw.is_empty(), "untranslated in {}: {:?}", code, raw);
            }
        }
    }

    #[test]
    fn test_catalog_keys_exist_in_fallback() {
        let dictionary = Dictionary::builtin();
        let mut keys: Vec<String> = Vec::new();
        for slide in ServiceSlide::catalog() {
            keys.push(slide.title_key);
            keys.push(slide.description_key);
        }
        for position in JobPosition::catalog() {
            keys.push(position.title_key);
            keys.push(position.description_key);
            keys.extend(position.requirement_keys);
        }
        for partner in Partner::catalog() {
            keys.push(partner.name_key);
            keys.push(partner.description_key);
        }
        keys.extend(ABOUT_STATS.iter().map(|stat| stat.label_key.to_string()));

        for key in &keys {
            assert_ne!(dictionary.lookup(FALLBACK_LANGUAGE, key), key.as_str(), "{} missing", key);
        }
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut config = Config::default();
        config.carousel.interval_ms = 0;
        assert!(matches!(Site::new(config), Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_dismissed_banner_and_held_carousel() {
        let mut site = Site::new(Config::default()).unwrap();
        site.mount().await;
        assert!(site.carousel().has_timer());

        site.banner_mut().dismiss();
        site.carousel_mut().press_next().await;
        assert!(!site.carousel().has_timer());

        let html = site.render().await;
        assert!(!html.contains("ad-banner"));
        assert!(html.contains("data-autoplay=\"false\""));
        assert!(html.contains("data-index=\"1\""));
        site.unmount().await;
    }
}
