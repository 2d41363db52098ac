use dioxus::prelude::*;

use crate::routes::Route;

// Placeholder pages; their content lives outside this crate.

#[component]
fn PageSection(title: String) -> Element {
    rsx! {
        section { class: "page",
            h1 { class: "page-title", "{title}" }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { PageSection { title: "Home".to_string() } }
}

#[component]
pub fn About() -> Element {
    rsx! { PageSection { title: "About".to_string() } }
}

#[component]
pub fn Experience() -> Element {
    rsx! { PageSection { title: "Experience".to_string() } }
}

#[component]
pub fn AiPhilosophy() -> Element {
    rsx! { PageSection { title: "AI Philosophy".to_string() } }
}

#[component]
pub fn Projects() -> Element {
    rsx! { PageSection { title: "Projects".to_string() } }
}

#[component]
pub fn FutureVision() -> Element {
    rsx! { PageSection { title: "Future Vision".to_string() } }
}

#[component]
pub fn Summary() -> Element {
    rsx! { PageSection { title: "Summary".to_string() } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        section { class: "page",
            h1 { class: "page-title", "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back home" }
        }
    }
}
