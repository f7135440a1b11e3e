#![doc(test(attr(deny(warnings))))]

//! Expense Tracker records income and expense entries in a CSV file and
//! reports monthly totals.
//!
//! The [`ledger`] module holds the pure core (typed records, input
//! validation and monthly aggregation). [`storage`] and [`config`] perform
//! the file I/O, and [`cli`] drives the text menu on top of them.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Expense Tracker tracing initialized.");
    });
}
