//! Decorative background bubbles
//!
//! Positions and sizes come from a seeded RNG so a page renders the same
//! way every time for a given seed. Each section draws from its own
//! [`DecorProfile`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Write;
use std::ops::Range;

/// Seed used when the configuration does not set one
pub const DEFAULT_DECOR_SEED: u64 = 0x00C0_FFEE;

const COLORS: [&str; 3] = ["#4CAF50", "#2196F3", "#9C27B0"];
const ELEMENT_COUNT: usize = 8;

/// Size, drift and timing ranges for one section's bubbles
#[derive(Debug, Clone, PartialEq)]
pub struct DecorProfile {
    pub colors: &'static [&'static str],
    /// Pixels, for both width and height
    pub size: Range<f64>,
    /// Maximum horizontal drift in either direction, pixels
    pub drift_x: f64,
    /// Maximum vertical drift in either direction, pixels
    pub drift_y: f64,
    /// Seconds per animation cycle
    pub duration: Range<f64>,
}

impl DecorProfile {
    pub const HERO: DecorProfile = DecorProfile {
        colors: &COLORS,
        size: 100.0..400.0,
        drift_x: 25.0,
        drift_y: 25.0,
        duration: 5.0..10.0,
    };

    pub const CAREERS: DecorProfile = DecorProfile {
        colors: &COLORS,
        size: 100.0..400.0,
        drift_x: 50.0,
        drift_y: 50.0,
        duration: 10.0..20.0,
    };

    /// Flat green bubbles that only bob vertically
    pub const CONTACT: DecorProfile = DecorProfile {
        colors: &["#22C55E"],
        size: 50.0..350.0,
        drift_x: 0.0,
        drift_y: 50.0,
        duration: 5.0..10.0,
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecorElement {
    pub color: &'static str,
    /// Pixels
    pub width: f64,
    pub height: f64,
    /// Percent of the section
    pub left: f64,
    pub top: f64,
    /// Pixels of drift at the end of the animation
    pub drift_x: f64,
    pub drift_y: f64,
    /// Seconds per animation cycle
    pub duration: f64,
}

fn spread(rng: &mut StdRng, max: f64) -> f64 {
    if max > 0.0 {
        rng.gen_range(-max..max)
    } else {
        0.0
    }
}

pub fn decor(seed: u64, profile: &DecorProfile) -> Vec<DecorElement> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..ELEMENT_COUNT)
        .map(|i| DecorElement {
            color: profile.colors[i % profile.colors.len()],
            width: rng.gen_range(profile.size.clone()),
            height: rng.gen_range(profile.size.clone()),
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            drift_x: spread(&mut rng, profile.drift_x),
            drift_y: spread(&mut rng, profile.drift_y),
            duration: rng.gen_range(profile.duration.clone()),
        })
        .collect()
}

pub(crate) fn render_decor(elements: &[DecorElement]) -> String {
    let mut html = String::from("<div class=\"absolute inset-0 pointer-events-none\" aria-hidden=\"true\">");
    for element in elements {
        let _ = write!(
            html,
            "<div class=\"decor absolute rounded-full mix-blend-screen filter blur-xl\" \
             style=\"background: radial-gradient(circle, {} 0%, transparent 70%); \
             width: {:.0}px; height: {:.0}px; left: {:.2}%; top: {:.2}%; \
             --drift-x: {:.1}px; --drift-y: {:.1}px; animation-duration: {:.2}s;\"></div>",
            element.color,
            element.width,
            element.height,
            element.left,
            element.top,
            element.drift_x,
            element.drift_y,
            element.duration,
        );
    }
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_profile(elements: &[DecorElement], profile: &DecorProfile) {
        assert_eq!(elements.len(), 8);
        for (i, element) in elements.iter().enumerate() {
            assert_eq!(element.color, profile.colors[i % profile.colors.len()]);
            assert!(profile.size.contains(&element.width));
            assert!(profile.size.contains(&element.height));
            assert!((0.0..100.0).contains(&element.left));
            assert!((0.0..100.0).contains(&element.top));
            assert!(element.drift_x.abs() <= profile.drift_x);
            assert!(element.drift_y.abs() <= profile.drift_y);
            assert!(profile.duration.contains(&element.duration));
        }
    }

    #[test]
    fn test_same_seed_same_elements() {
        assert_eq!(decor(42, &DecorProfile::HERO), decor(42, &DecorProfile::HERO));
        assert_ne!(decor(42, &DecorProfile::HERO), decor(43, &DecorProfile::HERO));
    }

    #[test]
    fn test_hero_ranges_and_colors() {
        assert_in_profile(&decor(DEFAULT_DECOR_SEED, &DecorProfile::HERO), &DecorProfile::HERO);
    }

    #[test]
    fn test_careers_drifts_further_and_slower() {
        let elements = decor(DEFAULT_DECOR_SEED, &DecorProfile::CAREERS);
        assert_in_profile(&elements, &DecorProfile::CAREERS);
        assert!(elements.iter().all(|e| e.duration >= 10.0));
    }

    #[test]
    fn test_contact_only_bobs_vertically() {
        let elements = decor(DEFAULT_DECOR_SEED, &DecorProfile::CONTACT);
        assert_in_profile(&elements, &DecorProfile::CONTACT);
        assert!(elements.iter().all(|e| e.drift_x == 0.0));
        assert!(elements.iter().all(|e| e.color == "#22C55E"));
    }

    #[test]
    fn test_render_one_div_per_element() {
        let html = render_decor(&decor(1, &DecorProfile::HERO));
        assert_eq!(html.matches("class=\"decor ").count(), 8);
    }
}
