//! Connect Pro Site library
//!
//! Translation provider, services carousel, section views and the
//! composition root that ties them into a rendered page.

pub mod carousel;
pub mod core;
pub mod forms;
pub mod i18n;
pub mod site;
pub mod views;
