//! Portfolio navigation drawer
//!
//! A collapsible sidebar for a Dioxus web site:
//! - ordered page links plus one in-page "Contact" action
//! - independent mobile (session-only) and desktop (persisted) open flags
//! - the desktop flag stored as `"true"`/`"false"` under `sidebar-open`
//! - a `sidebar-toggle` broadcast for layout collaborators
//!
//! The state machine in [`drawer`] has no DOM dependency and can be driven with
//! an in-memory store:
//!
//! ```rust
//! use portfolio_drawer::prelude::*;
//!
//! let store = MemoryStore::new();
//! let mut drawer = DrawerController::mount(
//!     DrawerConfig::default(),
//!     store.clone(),
//!     1280.0,
//!     ToggleBroadcast::new(),
//! );
//!
//! assert!(drawer.desktop_open());
//! drawer.toggle_desktop();
//! assert_eq!(store.raw("sidebar-open").as_deref(), Some("false"));
//! ```

pub mod components;
pub mod config;
pub mod dom;
pub mod drawer;
pub mod error;
pub mod hooks;
pub mod pages;
pub mod routes;
pub mod types;

pub mod prelude {
    pub use crate::config::{DrawerConfig, EntranceStagger};
    pub use crate::drawer::{
        DrawerController, DrawerState, KeyValueStore, MemoryStore, PreferenceStore,
        SubscriptionId, ToggleBroadcast, UnavailableStore, NAV_ITEMS,
    };
    pub use crate::error::{ConfigError, StorageError};
    pub use crate::types::{NavIcon, NavItem, NavOutcome, ScrollTarget, SidebarToggle};
}
