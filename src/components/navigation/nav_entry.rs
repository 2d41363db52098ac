use dioxus::prelude::*;

use crate::config::EntranceStagger;
use crate::hooks::DrawerHandle;
use crate::types::NavItem;

#[component]
pub fn NavEntry(
    item: NavItem,
    index: usize,
    active: bool,
    stagger: EntranceStagger,
    drawer: DrawerHandle,
) -> Element {
    let entry_style = stagger.entry_style(index);
    let glyph = item.icon.glyph();
    let link_class = if active {
        "nav-link nav-link-active"
    } else {
        "nav-link"
    };

    rsx! {
        li {
            class: "nav-entry",
            style: "{entry_style}",

            if item.is_action_button {
                button {
                    class: "nav-link nav-link-action",
                    onclick: move |_| drawer.select(&item),
                    span { class: "nav-icon", "{glyph}" }
                    span { class: "nav-label", "{item.label}" }
                }
            } else {
                Link {
                    to: item.destination.to_string(),
                    class: link_class.to_string(),
                    onclick: move |_| drawer.select(&item),
                    span { class: "nav-icon", "{glyph}" }
                    span { class: "nav-label", "{item.label}" }
                }
            }
        }
    }
}
