//! Sidebar, menu and modal panels driven by a slice-dispatch store
//!
//! - [`action`]: the closed action enum and its constructors
//! - [`state`] / [`reducer`]: one slice per concern, combined into [`state::PanelState`]
//! - [`store`]: store assembly from a [`store::PanelConfig`]
//! - [`containers`] / [`components`]: connected props and presentation
//! - [`app`]: key routing and layout for the terminal shell

pub mod action;
pub mod app;
pub mod components;
pub mod containers;
pub mod reducer;
pub mod state;
pub mod store;
