use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::{DrawerConfig, EntranceStagger};
use crate::dom::{self, KeyListener, LocalStorage};
use crate::drawer::{DrawerController, DrawerState, ToggleBroadcast};
use crate::routes::Route;
use crate::types::{NavIcon, NavItem, NavOutcome, ScrollTarget};

/// Reactive handle on the drawer controller. Copy it freely into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct DrawerHandle {
    pub controller: Signal<DrawerController<LocalStorage>>,
}

/// Mount the drawer: read the viewport and stored preference, forward toggles to
/// the window `sidebar-toggle` event, listen for Escape, and close the mobile
/// drawer whenever the route changes. Listeners are released on unmount.
pub fn use_drawer_state() -> DrawerHandle {
    let config = use_hook(|| try_consume_context::<DrawerConfig>().unwrap_or_default());
    let broadcast = use_hook(|| try_consume_context::<ToggleBroadcast>().unwrap_or_default());

    let path = use_route::<Route>().to_string();

    let controller = use_signal({
        let config = config.clone();
        let broadcast = broadcast.clone();
        let path = path.clone();
        move || {
            let width = dom::viewport_width().unwrap_or(config.desktop_breakpoint);
            let mut drawer = DrawerController::mount(config, LocalStorage, width, broadcast);
            drawer.route_changed(&path);
            drawer
        }
    });
    let handle = DrawerHandle { controller };

    let window_subscription = use_hook({
        let broadcast = broadcast.clone();
        let event_name = config.toggle_event.clone();
        move || broadcast.subscribe(move |toggle| dom::dispatch_toggle_event(&event_name, toggle))
    });
    use_drop(move || {
        broadcast.unsubscribe(window_subscription);
    });

    // Dropped with the component, which deregisters the window listener
    use_hook(|| {
        Rc::new(KeyListener::register(move |key| {
            handle.key_pressed(&key);
        }))
    });

    use_effect(use_reactive((&path,), move |(path,)| {
        let mut controller = handle.controller;
        controller.write().route_changed(&path);
    }));

    handle
}

impl DrawerHandle {
    pub fn state(&self) -> DrawerState {
        self.controller.read().state()
    }

    pub fn stagger(&self) -> EntranceStagger {
        self.controller.read().config().stagger
    }

    pub fn desktop_toggle_label(&self) -> &'static str {
        self.controller.read().desktop_toggle_label()
    }

    pub fn desktop_toggle_icon(&self) -> NavIcon {
        self.controller.read().desktop_toggle_icon()
    }

    pub fn mobile_toggle_icon(&self) -> NavIcon {
        self.controller.read().mobile_toggle_icon()
    }

    pub fn is_active(&self, item: &NavItem) -> bool {
        self.controller.read().is_active(item)
    }

    /// Listeners run after the signal is released, so they may read the drawer.
    pub fn toggle_desktop(&self) {
        let mut controller = self.controller;
        let (next, broadcast) = {
            let mut drawer = controller.write();
            (drawer.flip_desktop(), drawer.broadcast().clone())
        };
        broadcast.notify(next);
    }

    pub fn toggle_mobile(&self) {
        let mut controller = self.controller;
        controller.write().toggle_mobile();
    }

    pub fn close_mobile(&self) {
        let mut controller = self.controller;
        controller.write().close_mobile();
    }

    pub fn overlay_clicked(&self) {
        let mut controller = self.controller;
        controller.write().overlay_clicked();
    }

    pub fn key_pressed(&self, key: &str) {
        let mut controller = self.controller;
        controller.write().key_pressed(key);
    }

    /// Activate an entry; link navigation itself is left to the router `Link`
    pub fn select(&self, item: &NavItem) {
        let mut controller = self.controller;
        let outcome = controller.write().select(item);
        if let NavOutcome::Scroll(target) = outcome {
            self.scroll(&target);
        }
    }

    fn scroll(&self, target: &ScrollTarget) {
        let selector = self.controller.read().config().footer_selector.clone();
        if !dom::scroll_into_view(target, &selector) {
            tracing::debug!(?target, "nothing to scroll to");
        }
    }
}
