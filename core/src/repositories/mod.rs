//! Repository interfaces consumed by the service layer.
//!
//! Concrete implementations live in the infrastructure crate; in-memory
//! mocks are provided here for tests.

pub mod profile;
pub mod verification;

pub use profile::{MockProfileRepository, ProfileRepository};
pub use verification::{MockVerificationRepository, VerificationRepository};
