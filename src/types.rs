use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    User,
    Briefcase,
    Brain,
    FolderOpen,
    Target,
    FileText,
    Mail,
    PanelLeft,
    PanelLeftClose,
}

impl NavIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::Home => "⌂",
            NavIcon::User => "☺",
            NavIcon::Briefcase => "▣",
            NavIcon::Brain => "✺",
            NavIcon::FolderOpen => "▤",
            NavIcon::Target => "◎",
            NavIcon::FileText => "☰",
            NavIcon::Mail => "✉",
            NavIcon::PanelLeft => "›",
            NavIcon::PanelLeftClose => "‹",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub destination: &'static str, // Route path, or "#anchor" for action entries
    pub icon: NavIcon,
    pub is_action_button: bool,
}

/// Where an in-page scroll should land
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Footer,
}

/// What the host should do after a drawer entry is activated
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    Navigate(String),
    Scroll(ScrollTarget),
}

/// Payload of the `sidebar-toggle` broadcast
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarToggle {
    pub is_open: bool,
}
