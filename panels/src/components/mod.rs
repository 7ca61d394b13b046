//! Presentation units
//!
//! Components never touch the store. Their props carry the data to render
//! and plain `fn` callbacks that build actions; containers supply both.

mod menu;
mod modal;
mod sidebar;

pub use menu::{Menu, MenuProps};
pub use modal::{centered_rect, dim_buffer, ModalHost, ModalHostProps};
pub use sidebar::{Sidebar, SidebarProps, SIDEBAR_WIDTH};
