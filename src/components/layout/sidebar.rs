use dioxus::prelude::*;

use crate::components::navigation::NavEntry;
use crate::drawer::animation::{header_style, overlay_style, toggle_button_style};
use crate::drawer::nav_model::{BRAND_HOME, BRAND_NAME, BRAND_TAGLINE, NAV_ITEMS};
use crate::hooks::DrawerHandle;

#[component]
pub fn Sidebar() -> Element {
    let drawer = use_context::<DrawerHandle>();

    let state = drawer.state();
    let stagger = drawer.stagger();
    let desktop_glyph = drawer.desktop_toggle_icon().glyph();
    let mobile_glyph = drawer.mobile_toggle_icon().glyph();
    let toggle_style = toggle_button_style(state.desktop_open);
    let header_animation = header_style(stagger.duration_ms);
    let overlay_animation = overlay_style();

    rsx! {
        // Desktop toggle, always visible at lg and up
        button {
            class: "drawer-toggle drawer-toggle-desktop",
            aria_label: drawer.desktop_toggle_label(),
            style: "{toggle_style}",
            onclick: move |_| drawer.toggle_desktop(),
            "{desktop_glyph}"
        }

        button {
            class: "drawer-toggle drawer-toggle-mobile",
            aria_label: "Toggle menu",
            onclick: move |_| drawer.toggle_mobile(),
            "{mobile_glyph}"
        }

        if state.mobile_open {
            div {
                class: "drawer-overlay",
                style: "{overlay_animation}",
                onclick: move |_| drawer.overlay_clicked(),
            }
        }

        if state.mobile_open || state.desktop_open {
            aside {
                class: if state.desktop_open { "drawer drawer-desktop-open" } else { "drawer" },
                div { class: "drawer-inner",
                    div { class: "drawer-header", style: "{header_animation}",
                        Link {
                            to: BRAND_HOME.to_string(),
                            class: "drawer-brand".to_string(),
                            onclick: move |_| drawer.close_mobile(),
                            span { "{BRAND_NAME}" }
                        }
                        p { class: "drawer-tagline", "{BRAND_TAGLINE}" }
                    }

                    nav { class: "drawer-nav",
                        ul {
                            for (index, item) in NAV_ITEMS.iter().enumerate() {
                                NavEntry {
                                    key: "{item.label}",
                                    item: *item,
                                    index,
                                    active: drawer.is_active(item),
                                    stagger,
                                    drawer,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
