//! Portfolio Site
//!
//! A personal portfolio page built with Dioxus fullstack.
//!
//! This library provides:
//! - Dark/light theme toggle persisted in localStorage
//! - Scroll-spy navigation highlighting
//! - Project list with view more/less
//! - AJAX contact form with modal feedback
//! - Streaming chat assistant rendered as markdown

pub mod app;
#[cfg(feature = "server")]
pub mod config;
