pub mod use_drawer_state;

pub use use_drawer_state::{use_drawer_state, DrawerHandle};
