//! Time-accounting engine for a personal work-hours ledger.
//!
//! This crate classifies calendar days (workday, weekend, public holiday),
//! splits logged hours into normal and overtime portions, and computes gross
//! pay from per-entry rate snapshots, aggregated per day, week, or month.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
