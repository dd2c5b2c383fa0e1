//! HTTP handlers for all web routes.

pub mod diseases;
pub mod home;
pub mod predict;
pub mod status;
