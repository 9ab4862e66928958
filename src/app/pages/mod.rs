//! Dioxus fullstack page components.

mod portfolio;

pub use portfolio::Portfolio;
