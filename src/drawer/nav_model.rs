//! Static navigation entries and active-route matching

use crate::types::{NavIcon, NavItem};

pub const BRAND_NAME: &str = "Steve Dickens";
pub const BRAND_TAGLINE: &str = "Developer & Entrepreneur";
pub const BRAND_HOME: &str = "/";

#[rustfmt::skip]
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", destination: "/", icon: NavIcon::Home, is_action_button: false },
    NavItem { label: "About", destination: "/about", icon: NavIcon::User, is_action_button: false },
    NavItem { label: "Experience", destination: "/experience", icon: NavIcon::Briefcase, is_action_button: false },
    NavItem { label: "AI Philosophy", destination: "/ai-philosophy", icon: NavIcon::Brain, is_action_button: false },
    NavItem { label: "Projects", destination: "/projects", icon: NavIcon::FolderOpen, is_action_button: false },
    NavItem { label: "Future Vision", destination: "/future-vision", icon: NavIcon::Target, is_action_button: false },
    NavItem { label: "Summary", destination: "/summary", icon: NavIcon::FileText, is_action_button: false },
    NavItem { label: "Contact", destination: "#contact", icon: NavIcon::Mail, is_action_button: true },
];

/// Action entries never highlight; links match on exact path
pub fn is_active(item: &NavItem, current_path: &str) -> bool {
    !item.is_action_button && item.destination == current_path
}

pub fn action_entry_count(items: &[NavItem]) -> usize {
    items.iter().filter(|item| item.is_action_button).count()
}
