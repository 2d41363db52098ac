//! Visibility controller: the mobile and desktop open flags and their triggers

use crate::config::DrawerConfig;
use crate::drawer::broadcast::ToggleBroadcast;
use crate::drawer::preference::{KeyValueStore, PreferenceStore};
use crate::types::{NavIcon, NavItem, NavOutcome, ScrollTarget};

pub const ESCAPE_KEY: &str = "Escape";

/// Two independent flags. Only `mobile_open` resets on navigation and only
/// `desktop_open` is persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerState {
    pub mobile_open: bool,
    pub desktop_open: bool,
}

pub struct DrawerController<S> {
    state: DrawerState,
    current_route: Option<String>,
    prefs: PreferenceStore<S>,
    broadcast: ToggleBroadcast,
    config: DrawerConfig,
}

/// Desktop flag a freshly mounted drawer starts with.
///
/// Narrow viewports always start closed, whatever is stored.
fn initial_desktop_open<S: KeyValueStore>(
    config: &DrawerConfig,
    prefs: &PreferenceStore<S>,
    viewport_width: f64,
) -> bool {
    if config.is_mobile_width(viewport_width) {
        false
    } else {
        prefs.load().unwrap_or(true)
    }
}

impl<S: KeyValueStore> DrawerController<S> {
    /// Mount initialization. Reads the viewport width and the stored preference once.
    pub fn mount(
        config: DrawerConfig,
        store: S,
        viewport_width: f64,
        broadcast: ToggleBroadcast,
    ) -> Self {
        let prefs = PreferenceStore::new(store, config.storage_key.clone());
        let desktop_open = initial_desktop_open(&config, &prefs, viewport_width);
        tracing::debug!(viewport_width, desktop_open, "drawer mounted");

        Self {
            state: DrawerState {
                mobile_open: false,
                desktop_open,
            },
            current_route: None,
            prefs,
            broadcast,
            config,
        }
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn mobile_open(&self) -> bool {
        self.state.mobile_open
    }

    pub fn desktop_open(&self) -> bool {
        self.state.desktop_open
    }

    pub fn current_route(&self) -> Option<&str> {
        self.current_route.as_deref()
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    pub fn preferences(&self) -> &PreferenceStore<S> {
        &self.prefs
    }

    pub fn broadcast(&self) -> &ToggleBroadcast {
        &self.broadcast
    }

    /// Flip and persist the desktop flag without announcing it. Returns the new value.
    ///
    /// Callers holding the controller behind a lock or signal should release it
    /// before passing the value to [`ToggleBroadcast::notify`], so listeners can
    /// read the drawer.
    pub fn flip_desktop(&mut self) -> bool {
        let next = !self.state.desktop_open;
        self.state.desktop_open = next;
        self.prefs.save(next);
        tracing::debug!(desktop_open = next, "desktop drawer toggled");
        next
    }

    /// Flip the desktop flag, persist it and announce it. Returns the new value.
    pub fn toggle_desktop(&mut self) -> bool {
        let next = self.flip_desktop();
        self.broadcast.notify(next);
        next
    }

    pub fn toggle_mobile(&mut self) -> bool {
        self.state.mobile_open = !self.state.mobile_open;
        self.state.mobile_open
    }

    pub fn close_mobile(&mut self) {
        self.state.mobile_open = false;
    }

    /// Record the active route. The mobile drawer closes on every change.
    pub fn route_changed(&mut self, path: &str) {
        if self.current_route.as_deref() != Some(path) {
            tracing::debug!(path, "route changed");
            self.current_route = Some(path.to_string());
        }
        self.close_mobile();
    }

    /// Returns true if the key was handled
    pub fn key_pressed(&mut self, key: &str) -> bool {
        if key == ESCAPE_KEY {
            self.close_mobile();
            true
        } else {
            false
        }
    }

    pub fn overlay_clicked(&mut self) {
        self.close_mobile();
    }

    /// Activate a drawer entry. Links hand their destination to the router;
    /// the action entry scrolls to the footer instead. Both close the mobile drawer.
    pub fn select(&mut self, item: &NavItem) -> NavOutcome {
        self.close_mobile();
        if item.is_action_button {
            NavOutcome::Scroll(ScrollTarget::Footer)
        } else {
            NavOutcome::Navigate(item.destination.to_string())
        }
    }

    pub fn is_active(&self, item: &NavItem) -> bool {
        self.current_route
            .as_deref()
            .is_some_and(|path| crate::drawer::nav_model::is_active(item, path))
    }

    pub fn drawer_visible(&self) -> bool {
        self.state.mobile_open || self.state.desktop_open
    }

    pub fn overlay_visible(&self) -> bool {
        self.state.mobile_open
    }

    pub fn desktop_toggle_label(&self) -> &'static str {
        if self.state.desktop_open {
            "Close drawer"
        } else {
            "Open drawer"
        }
    }

    pub fn desktop_toggle_icon(&self) -> NavIcon {
        panel_icon(self.state.desktop_open)
    }

    pub fn mobile_toggle_icon(&self) -> NavIcon {
        panel_icon(self.state.mobile_open)
    }
}

fn panel_icon(open: bool) -> NavIcon {
    if open {
        NavIcon::PanelLeftClose
    } else {
        NavIcon::PanelLeft
    }
}
