pub mod animation;
pub mod broadcast;
pub mod controller;
pub mod nav_model;
pub mod preference;

pub use broadcast::{SubscriptionId, ToggleBroadcast};
pub use controller::{DrawerController, DrawerState};
pub use nav_model::NAV_ITEMS;
pub use preference::{KeyValueStore, MemoryStore, PreferenceStore, UnavailableStore};
