#![recursion_limit = "1024"]

pub mod actions;
pub mod components;
pub mod connect_prompt;
pub mod globals;
pub mod panels;
pub mod theme;
pub mod workspace;

pub use globals::*;
pub use theme::DemoTheme;
pub use workspace::DemoWorkspace;
