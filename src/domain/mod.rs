//! Wire-format DTOs
//!
//! These types mirror the JSON payloads of the tender backend. The client
//! owns none of this data; everything here is received from or sent to the
//! API and validated at the boundary.

pub mod applications;
pub mod auth;
pub mod offers;
pub mod summary;
pub mod tenders;

// Re-export commonly used types
pub use applications::*;
pub use auth::*;
pub use offers::*;
pub use tenders::*;

// Summary types are accessed via crate::domain::summary:: to avoid namespace pollution
