use dioxus::prelude::*;

use crate::config::DrawerConfig;
use crate::drawer::ToggleBroadcast;
use crate::hooks::use_drawer_state;
use crate::routes::Route;

/// Page shell. Mounts the drawer, shares it with the `Sidebar` and keeps a left
/// margin reserved for it while it is open on desktop.
///
/// A `DrawerConfig` or `ToggleBroadcast` already in context is reused, so a host
/// can listen to toggles from outside the layout.
#[component]
pub fn SiteLayout() -> Element {
    use_hook(|| {
        try_consume_context::<DrawerConfig>()
            .unwrap_or_else(|| provide_context(DrawerConfig::default()))
    });
    let broadcast = use_hook(|| {
        try_consume_context::<ToggleBroadcast>()
            .unwrap_or_else(|| provide_context(ToggleBroadcast::new()))
    });

    let drawer = use_drawer_state();
    use_context_provider(|| drawer);

    let reserve_margin = use_signal(|| drawer.controller.peek().desktop_open());

    let subscription = use_hook({
        let broadcast = broadcast.clone();
        move || {
            broadcast.subscribe(move |toggle| {
                let mut margin = reserve_margin;
                margin.set(toggle.is_open);
            })
        }
    });
    use_drop(move || {
        broadcast.unsubscribe(subscription);
    });

    rsx! {
        div { class: "site",
            crate::components::layout::Sidebar {}
            main {
                class: if reserve_margin() { "site-main site-main-shifted" } else { "site-main" },
                Outlet::<Route> {}
            }
            footer { id: "contact", class: "site-footer",
                h2 { "Get in touch" }
                p { "Open to conversations about products, teams and AI." }
            }
        }
    }
}
