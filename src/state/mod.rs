//! Shared client-side state.
//!
//! DESIGN
//! ======
//! State containers are owned values handed to whoever needs them instead of
//! process-wide singletons, so the guard and the HTTP interceptors can be
//! exercised against isolated instances.

pub mod auth;
