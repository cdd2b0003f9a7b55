// SPDX-License-Identifier: MIT

//! screener-bridge: a small web backend that turns SQL-like stock filters
//! into screener.in URLs and hands out signed voice-session URLs for the
//! selected analyst persona.

pub mod catalog;
pub mod config;
pub mod error;
pub mod screener;
pub mod server;
pub mod voice;
