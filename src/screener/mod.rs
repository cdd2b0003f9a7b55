// SPDX-License-Identifier: MIT

//! SQL-like filter translation for screener.in
//!
//! This module converts filter text like:
//! - `Market Capitalization > 30000`
//! - `Market Capitalization > 30000 AND Price to earning > 15`
//!
//! into the query-string URL format that screener.in's raw screen page
//! accepts.

mod translator;

pub use translator::translate;
