//! morbyx-web — HTTP boundary for the Morbyx symptom checker.
//! Provides:
//!   - JSON prediction API
//!   - Disease index browsing API
//!   - Service status endpoint
//!   - Server-rendered query page

pub mod handlers;
pub mod router;
pub mod state;
