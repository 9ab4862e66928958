//! The single portfolio page.

use dioxus::prelude::*;

use crate::app::chat::ChatWidget;
use crate::app::clipboard::copy_to_clipboard;
use crate::app::components::toast::use_toast;
use crate::app::components::Layout;
use crate::app::contact::ContactSection;
use crate::app::content::{profile, SkillCategory};
use crate::app::projects::ProjectsSection;
use crate::app::slider::CertificatesSection;

/// Portfolio page component.
#[component]
pub fn Portfolio() -> Element {
    let profile = use_hook(profile);
    let toast = use_toast();
    let email = profile.email;

    rsx! {
        Layout { title: format!("{} | Portfolio", profile.name), brand: profile.name,
            section { id: "home", class: "min-h-[80vh] flex items-center",
                div { class: "max-w-6xl mx-auto px-4 py-20",
                    p { class: "text-ocean font-semibold mb-2", "Hello, I'm" }
                    h1 { class: "text-5xl font-bold text-navy dark:text-white mb-4", "{profile.name}" }
                    p { class: "text-xl text-slate-600 dark:text-slate-400 mb-8", "{profile.headline}" }
                    div { class: "flex flex-wrap gap-4",
                        a { class: "btn-outline", href: "#contact", "Contact Me" }
                        button {
                            id: "copy-email",
                            r#type: "button",
                            class: "btn-outline",
                            onclick: move |_| copy_to_clipboard(email, "Email copied!", toast),
                            "Copy Email"
                        }
                        a { class: "btn-outline", href: "{profile.github}", target: "_blank", rel: "noopener", "GitHub" }
                        a { class: "btn-outline", href: "{profile.linkedin}", target: "_blank", rel: "noopener", "LinkedIn" }
                    }
                }
            }
            section { id: "about", class: "py-20",
                div { class: "max-w-4xl mx-auto px-4",
                    h2 { class: "text-3xl font-bold text-navy dark:text-white mb-6", "About Me" }
                    p { class: "text-slate-600 dark:text-slate-400 leading-relaxed", "{profile.objective}" }
                }
            }
            section { id: "skills", class: "py-20",
                div { class: "max-w-6xl mx-auto px-4",
                    h2 { class: "text-3xl font-bold text-navy dark:text-white mb-8", "Skills" }
                    div { class: "grid gap-6 md:grid-cols-2",
                        for category in SkillCategory::ALL {
                            div { class: "p-6 rounded-2xl bg-white dark:bg-slate-800 shadow-sm",
                                h3 { class: "font-semibold text-navy dark:text-white mb-4", {category.label()} }
                                div { class: "flex flex-wrap gap-2",
                                    for skill in profile.skills_in(category) {
                                        span { class: "px-3 py-1 text-sm rounded-full bg-sky/10 text-ocean", "{skill.name}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            ProjectsSection { projects: profile.projects.clone() }
            CertificatesSection { certificates: profile.certificates.clone() }
            ContactSection { email: profile.email, phone: profile.phone }
            ChatWidget {}
        }
    }
}
