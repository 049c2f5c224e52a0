//! Shared test harness modules for the moonscore CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

#[cfg(feature = "store-sqlite")]
mod detail_steps;
mod helpers;
mod rank_unit;
