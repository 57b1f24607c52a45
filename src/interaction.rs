//! Page interactions as commands applied to an explicit state object.
//!
//! Each user gesture the markup wires up (`.mobile-menu-btn`, `.nav-link`,
//! in-page anchors, window scroll, `.tab-btn[data-tab]`) maps to one
//! [`Command`]. Dispatching it updates [`PageState`] and may ask the host for
//! a follow-up [`Effect`].

use serde::Serialize;
use crate::render::TabFilter;

/// Height of the fixed header subtracted from anchor scroll targets.
pub const HEADER_OFFSET: f64 = 70.0;
/// Scroll position past which the header casts a shadow.
pub const SHADOW_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ToggleMenu,
    SelectNavLink,
    /// `target_top` is the target's top relative to the viewport, `None` when
    /// no element matches `href`.
    FollowAnchor {
        href: String,
        target_top: Option<f64>,
        scroll_y: f64,
    },
    Scroll { y: f64 },
    SelectTab(TabFilter),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ScrollTo { top: f64, smooth: bool },
    RenderNotes(TabFilter),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageState {
    pub menu_open: bool,
    pub scroll_locked: bool,
    pub header_shadow: bool,
    #[serde(serialize_with = "serialize_tab")]
    pub active_tab: TabFilter,
}

fn serialize_tab<S: serde::Serializer>(tab: &TabFilter, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(tab)
}

impl Default for PageState {
    fn default() -> Self {
        PageState {
            menu_open: false,
            scroll_locked: false,
            header_shadow: false,
            active_tab: TabFilter::All,
        }
    }
}

impl PageState {
    pub fn with_tab(active_tab: TabFilter) -> Self {
        PageState {
            active_tab,
            ..PageState::default()
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Option<Effect> {
        match command {
            Command::ToggleMenu => {
                self.toggle_menu();
                None
            }
            Command::SelectNavLink => {
                if self.menu_open {
                    self.toggle_menu();
                }
                None
            }
            Command::FollowAnchor {
                href,
                target_top,
                scroll_y,
            } => {
                if href == "#" {
                    return None;
                }
                target_top.map(|top| Effect::ScrollTo {
                    top: top + scroll_y - HEADER_OFFSET,
                    smooth: true,
                })
            }
            Command::Scroll { y } => {
                self.header_shadow = y > SHADOW_THRESHOLD;
                None
            }
            Command::SelectTab(tab) => {
                self.active_tab = tab;
                Some(Effect::RenderNotes(tab))
            }
        }
    }

    pub fn is_active(&self, tab: TabFilter) -> bool {
        self.active_tab == tab
    }

    fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        self.scroll_locked = self.menu_open;
    }
}
