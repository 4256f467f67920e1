//! Services carousel
//!
//! [`Carousel`] is the synchronous state machine: a fixed, non-empty slide
//! list, a wrapping index and the autoplay state. [`CarouselController`]
//! mounts it on the tokio runtime and owns the single auto-advance timer.

mod autoplay;

pub use autoplay::CarouselController;

use crate::core::{Error, Result, ServiceSlide};
use crate::i18n::Translator;
use serde::Serialize;

/// Default auto-advance period in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 5000;

/// Lifecycle of a carousel instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CarouselState {
    /// Not mounted; no timer
    Idle,
    /// Timer active, advancing every interval
    AutoAdvancing,
    /// Autoplay disabled by user interaction for the rest of this mount
    ManualHold,
}

/// Localized view of the slide currently shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideView {
    pub index: usize,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub image: String,
    pub bg_style: String,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<ServiceSlide>,
    current_index: usize,
    state: CarouselState,
}

impl Carousel {
    /// Create an unmounted carousel. Fails on an empty slide list.
    pub fn new(items: Vec<ServiceSlide>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyCarousel);
        }
        Ok(Self {
            items,
            current_index: 0,
            state: CarouselState::Idle,
        })
    }

    /// Mount at the first slide, auto-advancing unless `autoplay` is off
    pub fn mount(&mut self, autoplay: bool) {
        self.current_index = 0;
        self.state = if autoplay {
            CarouselState::AutoAdvancing
        } else {
            CarouselState::ManualHold
        };
    }

    pub fn unmount(&mut self) {
        self.state = CarouselState::Idle;
    }

    /// Timer fire. Advances only while auto-advancing; returns whether it did.
    pub fn tick(&mut self) -> bool {
        if self.state != CarouselState::AutoAdvancing {
            return false;
        }
        self.next();
        true
    }

    pub fn next(&mut self) -> usize {
        self.current_index = (self.current_index + 1) % self.items.len();
        self.current_index
    }

    pub fn previous(&mut self) -> usize {
        let len = self.items.len();
        self.current_index = (self.current_index + len - 1) % len;
        self.current_index
    }

    /// Jump to a slide (dot indicator). Disables autoplay for good.
    ///
    /// Out-of-range indices are rejected and leave the carousel untouched.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(Error::SlideOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.current_index = index;
        self.hold();
        Ok(())
    }

    /// Stop autoplay for the rest of this mount
    pub fn hold(&mut self) {
        if self.state == CarouselState::AutoAdvancing {
            self.state = CarouselState::ManualHold;
        }
    }

    /// Arrow control: next slide and stop autoplay
    pub fn press_next(&mut self) -> usize {
        self.hold();
        self.next()
    }

    /// Arrow control: previous slide and stop autoplay
    pub fn press_previous(&mut self) -> usize {
        self.hold();
        self.previous()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.state == CarouselState::AutoAdvancing
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Never true; construction rejects empty slide lists
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ServiceSlide] {
        &self.items
    }

    pub fn current_item(&self) -> &ServiceSlide {
        &self.items[self.current_index]
    }

    /// Labels for the current slide in the context's language
    pub fn current_slide(&self, ctx: &Translator) -> SlideView {
        let item = self.current_item();
        SlideView {
            index: self.current_index,
            title: ctx.t(&item.title_key).to_string(),
            description: ctx.t(&item.description_key).to_string(),
            icon: item.icon.clone(),
            image: item.image.clone(),
            bg_style: item.bg_style.clone(),
        }
    }

    /// One entry per indicator dot, true for the active one
    pub fn dots(&self) -> Vec<bool> {
        (0..self.items.len())
            .map(|index| index == self.current_index)
            .collect()
    }
}
