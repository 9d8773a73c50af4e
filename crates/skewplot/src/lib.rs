//! Interactive skewed distribution viewer
//!
//! A ratatui front end for [`skewplot_core`]: three sliders for mean,
//! standard deviation and skewness, a chart of the resulting curve with
//! mode/median/mean reference lines, and a panel explaining the skew.
//! Runs in a terminal (`native` feature) or in the browser through
//! ratzilla (`web` feature).

pub mod components;
pub mod data;
pub mod event;
pub mod export;
pub mod keybindings;
pub mod logging;
pub mod screens;
pub mod state;
pub mod util;

#[cfg(feature = "native")]
mod app;

#[cfg(feature = "web")]
mod web;

#[cfg(test)]
mod tests;

#[cfg(feature = "native")]
pub use app::App;
#[cfg(feature = "native")]
pub use logging::init_logging;
