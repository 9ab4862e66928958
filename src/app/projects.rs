//! "View more / view less" project list.

use dioxus::prelude::*;

use crate::app::content::Project;
use crate::app::dom;

/// Cards shown before the user asks for more.
pub const INITIAL_VISIBLE: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardState {
    pub hidden: bool,
    /// Set when "view more" revealed the card; only these are re-hidden.
    pub user_revealed: bool,
    pub animating: bool,
}

impl CardState {
    pub fn class(&self) -> &'static str {
        match (self.hidden, self.animating) {
            (true, _) => "hidden",
            (false, true) => "animate-fade-in",
            (false, false) => "",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectList {
    cards: Vec<CardState>,
    expanded: bool,
}

impl ProjectList {
    /// `count` cards, all but the first `visible` hidden.
    pub fn new(count: usize, visible: usize) -> Self {
        Self::from_hidden((0..count).map(|i| i >= visible))
    }

    pub fn from_hidden(hidden: impl IntoIterator<Item = bool>) -> Self {
        Self {
            cards: hidden
                .into_iter()
                .map(|hidden| CardState {
                    hidden,
                    ..CardState::default()
                })
                .collect(),
            expanded: false,
        }
    }

    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> CardState {
        self.cards.get(index).copied().unwrap_or_default()
    }

    /// Whether the toggle controls are needed at all.
    pub fn has_overflow(&self) -> bool {
        self.expanded || self.cards.iter().any(|c| c.hidden)
    }

    pub fn shows_view_more(&self) -> bool {
        !self.expanded
    }

    pub fn shows_view_less(&self) -> bool {
        self.expanded
    }

    /// Reveal every hidden card. Returns how many were revealed.
    ///
    /// Cards that are already visible keep their markers and animation.
    pub fn view_more(&mut self) -> usize {
        let mut revealed = 0;
        for card in self.cards.iter_mut().filter(|c| c.hidden) {
            card.hidden = false;
            card.user_revealed = true;
            card.animating = true;
            revealed += 1;
        }
        self.expanded = true;
        revealed
    }

    /// Hide exactly the user-revealed cards. Returns how many were hidden.
    pub fn view_less(&mut self) -> usize {
        let mut hidden = 0;
        for card in self.cards.iter_mut().filter(|c| c.user_revealed) {
            card.hidden = true;
            card.animating = false;
            card.user_revealed = false;
            hidden += 1;
        }
        self.expanded = false;
        hidden
    }

    /// Hide a card for reasons other than the toggle.
    #[cfg(test)]
    fn hide(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.hidden = true;
        }
    }
}

/// Projects section with the view more/less toggle.
#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> Element {
    let count = projects.len();
    let mut list = use_signal(move || ProjectList::new(count, INITIAL_VISIBLE));

    let on_more = move |_: MouseEvent| {
        let revealed = list.write().view_more();
        tracing::debug!("Revealed {} project cards", revealed);
    };
    let on_less = move |_: MouseEvent| {
        list.write().view_less();
        dom::scroll_into_view_smooth("projects");
    };

    let state = list.read().clone();

    rsx! {
        section { id: "projects", class: "py-20",
            div { class: "max-w-6xl mx-auto px-4",
                h2 { class: "text-3xl font-bold text-navy dark:text-white mb-8", "Projects" }
                div { class: "grid gap-6 md:grid-cols-2 lg:grid-cols-3",
                    for (i, project) in projects.iter().enumerate() {
                        article {
                            key: "{project.title}",
                            class: format!("project-card p-6 rounded-2xl bg-white dark:bg-slate-800 shadow-sm {}", state.card(i).class()),
                            h3 { class: "text-lg font-semibold text-navy dark:text-white mb-2", "{project.title}" }
                            p { class: "text-sm text-slate-600 dark:text-slate-400 mb-4", "{project.description}" }
                            div { class: "flex flex-wrap gap-2 mb-4",
                                for tag in project.technology_tags() {
                                    span { class: "px-2 py-1 text-xs rounded bg-sky/10 text-ocean", "{tag}" }
                                }
                            }
                            if let Some(link) = project.link {
                                a {
                                    class: "text-sm text-ocean hover:underline",
                                    href: "{link}",
                                    target: "_blank",
                                    rel: "noopener",
                                    "View source"
                                }
                            }
                        }
                    }
                }
                if state.has_overflow() {
                    div { class: "text-center mt-10",
                        button {
                            id: "view-more-projects",
                            r#type: "button",
                            class: if state.shows_view_more() { "btn-outline" } else { "btn-outline hidden" },
                            onclick: on_more,
                            "View More"
                        }
                        button {
                            id: "view-less-projects",
                            r#type: "button",
                            class: if state.shows_view_less() { "btn-outline" } else { "btn-outline hidden" },
                            onclick: on_less,
                            "View Less"
                        }
                    }
                }
            }
        }
    }
}
