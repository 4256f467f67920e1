//! Connect Pro Site - Demo CLI
//!
//! Mounts the services carousel on a tokio runtime and prints each slide
//! as it auto-advances, then shows manual hold and language switching.

use std::time::Duration;

use connectpro_site_lib::carousel::CarouselController;
use connectpro_site_lib::core::{Config, ServiceSlide};
use connectpro_site_lib::i18n::I18n;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("==============================================");
    println!("   Connect Pro Site - Carousel Demo");
    println!("==============================================\n");

    let config = Config::default();
    let i18n = I18n::new(&config.general.language);
    let period = Duration::from_millis(config.carousel.interval_ms);

    // 1. Autoplay
    println!("[1/3] Autoplay ({} ms per slide)...\n", period.as_millis());
    let mut carousel = CarouselController::new(ServiceSlide::catalog(), period)?;
    carousel.mount(true).await;

    let mut language_changes = i18n.subscribe();
    for _ in 0..4 {
        let slide = carousel.snapshot().await.current_slide(&i18n.context());
        println!("  [{}] {:<28} {}", slide.index + 1, slide.title, slide.description);
        tokio::time::sleep(period).await;
    }

    // 2. Dot navigation holds the carousel
    println!("\n[2/3] Jumping to slide 7 (autoplay off)...\n");
    carousel.go_to(6).await?;
    tokio::time::sleep(period * 2).await;
    let snapshot = carousel.snapshot().await;
    println!(
        "  Still on slide {} after {} ms ({:?})",
        snapshot.current_index() + 1,
        (period * 2).as_millis(),
        snapshot.state()
    );

    // 3. Language switch re-renders the current slide
    println!("\n[3/3] Switching languages...\n");
    for language in I18n::available_languages() {
        i18n.set_language(language.code);
        if language_changes.has_changed()? {
            let code = language_changes.borrow_and_update().clone();
            let slide = carousel.snapshot().await.current_slide(&i18n.context());
            println!("  {} {:<3} {}", language.flag, code, slide.title);
        }
    }

    carousel.unmount().await;

    println!("\n==============================================");
    println!("   Demo finished");
    println!("==============================================\n");
    Ok(())
}
