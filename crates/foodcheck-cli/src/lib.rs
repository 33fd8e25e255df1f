//! Library components of the `foodcheck` terminal browser.

pub mod config;
pub mod input;
pub mod logging;
pub mod render;
