//! UI module - widgets shared by the sidebar and chat panel

pub mod components;
