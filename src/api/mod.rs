//! HTTP API module for the work-hours ledger.
//!
//! This module exposes the entry/settings CRUD and the day, period, and
//! month reports as a JSON API. All domain math happens in the engine; the
//! handlers only parse, lock the shared state, call, and serialize.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{MonthQuery, PeriodQuery};
pub use response::{ApiError, DayReport, MonthReport};
pub use state::AppState;
