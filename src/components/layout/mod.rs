pub mod sidebar;
pub mod site_layout;

pub use sidebar::Sidebar;
pub use site_layout::SiteLayout;
