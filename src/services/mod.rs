//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the redirect decisions and simulated latency so
//! route handlers stay focused on extracting parameters and rendering.

pub mod dispatch;
pub mod invalidation;
pub mod issuance;
pub mod pacer;
