//! HTTP API module for the shift ledger.
//!
//! This module provides the REST endpoints for entering and removing
//! shifts and for reading the ledger, its summary and the display report.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ShiftRequest;
pub use response::{
    ApiError, INVALID_DURATION_MESSAGE, MISSING_FIELDS_MESSAGE, MessageResponse, ShiftAdded,
    ThemeResponse,
};
pub use state::AppState;
