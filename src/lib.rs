//! TV show catalog browser.
//!
//! Three nested state machines drive the session: show search, season and
//! episode browsing for the selected show, and the episode detail sheet.
//! They follow a Model-View-Intent layout (see [`ui::mvi`]): reducers are
//! pure, network work is described as effects, and a [`ui::mvi::Store`]
//! runs every transition on one logical sequence.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod shutdown;
pub mod ui;
