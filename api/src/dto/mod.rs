//! Request and response payloads for the HTTP endpoints.

pub mod send_sms;
pub mod verify_phone;

pub use send_sms::{SendSmsRequest, SendSmsResponse};
pub use verify_phone::{VerifyPhoneRequest, VerifyPhoneResponse};
