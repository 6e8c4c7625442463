//! Route handlers and shared application state.

pub mod send_sms;
pub mod verify_phone;

use std::sync::Arc;

use turno_core::dispatch::SmsDispatcher;
use turno_core::repositories::{ProfileRepository, VerificationRepository};
use turno_core::services::verification::VerificationService;

/// Dependencies shared by every handler.
pub struct AppState<R, P, D>
where
    R: VerificationRepository,
    P: ProfileRepository,
    D: SmsDispatcher,
{
    pub verification_service: Arc<VerificationService<R, P, D>>,
    pub sms_dispatcher: Arc<D>,
}

impl<R, P, D> AppState<R, P, D>
where
    R: VerificationRepository,
    P: ProfileRepository,
    D: SmsDispatcher,
{
    pub fn new(
        verification_service: Arc<VerificationService<R, P, D>>,
        sms_dispatcher: Arc<D>,
    ) -> Self {
        Self {
            verification_service,
            sms_dispatcher,
        }
    }
}
