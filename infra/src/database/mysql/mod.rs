//! MySQL repository implementations

mod profile_repository;
mod verification_repository;

pub use profile_repository::MySqlProfileRepository;
pub use verification_repository::MySqlVerificationRepository;
