//! In-process storage implementation for InvestiZen.
//!
//! Implements the repository traits defined in `investizen-core` on top of
//! concurrent maps. Data lives as long as the repository value does.
//!
//! ```text
//! core (domain, analytics)
//!          │
//!          ▼
//!  storage-memory (this crate)
//!          │
//!          ▼
//!     DashMap per owner
//! ```

pub mod holdings;

pub use holdings::InMemoryHoldingRepository;

// Re-export from investizen-core for convenience
pub use investizen_core::errors::{Error, RepositoryError, Result};
