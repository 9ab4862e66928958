//! DOM contract lint - ensures the element ids the page relies on still exist.
//!
//! Scroll targets, the slider strip, the chat container and the theme icons
//! are looked up by id at runtime. Renaming one in markup without updating
//! its lookup fails silently in the browser, so this test pins them.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Ids looked up by id from Rust code or CSS
const REQUIRED_IDS: &[&str] = &[
    "theme-toggle",
    "theme-toggle-dark-icon",
    "theme-toggle-light-icon",
    "view-more-projects",
    "view-less-projects",
    "cert-slider",
    "prev-cert",
    "next-cert",
    "contact-form",
    "ai-chat-window",
    "ai-chat-form",
    "ai-user-input",
    "chat-bubble",
    "chat-messages",
];

/// Sections the navigation bar links to
const SECTION_IDS: &[&str] = &[
    "home",
    "about",
    "skills",
    "projects",
    "certificates",
    "contact",
];

fn app_sources() -> String {
    let app_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("app");

    WalkDir::new(&app_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .filter_map(|e| fs::read_to_string(e.path()).ok())
        .collect::<Vec<_>>()
        .join("\n")
}

fn declares_id(sources: &str, id: &str) -> bool {
    sources.contains(&format!("id: \"{}\"", id)) || sources.contains(&format!("= \"{}\";", id))
}

#[test]
fn load_bearing_ids_are_declared() {
    let sources = app_sources();
    let missing: Vec<_> = REQUIRED_IDS
        .iter()
        .filter(|id| !declares_id(&sources, id))
        .collect();

    assert!(
        missing.is_empty(),
        "Element ids referenced at runtime are no longer declared: {:?}",
        missing
    );
}

#[test]
fn every_nav_section_exists() {
    let sources = app_sources();
    for id in SECTION_IDS {
        assert!(
            sources.contains(&format!("\"#{}\"", id)),
            "Navigation has no link to #{}",
            id
        );
        assert!(
            sources.contains(&format!("section {{ id: \"{}\"", id)),
            "No section with id \"{}\" for the navigation link to scroll to",
            id
        );
    }
}

#[test]
fn stylesheet_defines_runtime_classes() {
    let css = fs::read_to_string(Path::new(env!("CARGO_MANIFEST_DIR")).join("public/main.css"))
        .expect("Failed to read public/main.css");

    for class in [
        ".hidden",
        ".animate-fade-in",
        ".animate-pulse-slow",
        ".no-scrollbar",
        ".nav-link.active",
    ] {
        assert!(css.contains(class), "main.css is missing {}", class);
    }
}
