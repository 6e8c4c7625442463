//! Domain entities representing core business objects.

pub mod phone_verification;

pub use phone_verification::{
    PhoneVerification, CODE_EXPIRATION_MINUTES, CODE_LENGTH, MAX_ATTEMPTS,
};

#[cfg(test)]
mod tests;
