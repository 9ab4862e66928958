//! Horizontal certificate slider.

use dioxus::prelude::*;

use crate::app::content::Certificate;
use crate::app::dom;

/// Pixels the strip moves per click.
pub const SLIDE_STEP_PX: f64 = 400.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    Prev,
    Next,
}

impl SlideDirection {
    pub fn offset(self) -> f64 {
        match self {
            SlideDirection::Prev => -SLIDE_STEP_PX,
            SlideDirection::Next => SLIDE_STEP_PX,
        }
    }
}

/// Shift the strip; clamping is left to the scroll container.
pub fn slide(direction: SlideDirection) {
    dom::scroll_by_smooth("cert-slider", direction.offset());
}

/// Certificates section with prev/next controls.
#[component]
pub fn CertificatesSection(certificates: Vec<Certificate>) -> Element {
    rsx! {
        section { id: "certificates", class: "py-20",
            div { class: "max-w-6xl mx-auto px-4",
                div { class: "flex items-center justify-between mb-8",
                    h2 { class: "text-3xl font-bold text-navy dark:text-white", "Certifications" }
                    div { class: "flex gap-2",
                        button {
                            id: "prev-cert",
                            r#type: "button",
                            class: "slider-control",
                            aria_label: "Previous certificate",
                            onclick: move |_| slide(SlideDirection::Prev),
                            "‹"
                        }
                        button {
                            id: "next-cert",
                            r#type: "button",
                            class: "slider-control",
                            aria_label: "Next certificate",
                            onclick: move |_| slide(SlideDirection::Next),
                            "›"
                        }
                    }
                }
                div {
                    id: "cert-slider",
                    class: "flex gap-6 overflow-x-auto snap-x scroll-smooth no-scrollbar pb-4",
                    for cert in certificates.iter() {
                        article {
                            key: "{cert.title}",
                            class: "cert-card snap-start shrink-0 w-80 p-6 rounded-2xl bg-white dark:bg-slate-800 shadow-sm",
                            h3 { class: "font-semibold text-navy dark:text-white", "{cert.title}" }
                            p { class: "text-sm text-slate-500 dark:text-slate-400", "{cert.issuer} · {cert.year}" }
                            if let Some(link) = cert.link {
                                a {
                                    class: "text-sm text-ocean hover:underline",
                                    href: "{link}",
                                    target: "_blank",
                                    rel: "noopener",
                                    "View credential"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
