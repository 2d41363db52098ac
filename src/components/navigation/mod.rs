pub mod nav_entry;

pub use nav_entry::NavEntry;
