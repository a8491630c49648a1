#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod navigation;

pub use navigation::{Access, LandingVariant, Screen, guard};
