//! Client-side verification flow driver
//!
//! Pure two-step state machine mirroring what a client UI walks through:
//! collect the phone, then collect the code. It never calls the server
//! itself; callers invoke it around the two service operations. The local
//! attempt counter only mirrors the server's accounting — the server stays
//! independently bounded by its own ceiling.

/// Consecutive local failures tolerated before the flow restarts
pub const LOCAL_ATTEMPT_LIMIT: u32 = 3;

/// The two user-visible steps of the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    CollectingPhone,
    CollectingCode,
}

/// Two-step verification flow state
#[derive(Debug, Clone)]
pub struct VerificationFlow {
    state: FlowState,
    phone: Option<String>,
    local_attempts: u32,
}

impl VerificationFlow {
    pub fn new() -> Self {
        Self {
            state: FlowState::CollectingPhone,
            phone: None,
            local_attempts: 0,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Phone currently being verified, once the flow has advanced
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn local_attempts(&self) -> u32 {
        self.local_attempts
    }

    /// Advance to code collection after a successful challenge request
    ///
    /// Only a confirmed request moves the flow forward; a failed request
    /// leaves it collecting the phone.
    pub fn challenge_requested(&mut self, phone: impl Into<String>) {
        self.phone = Some(phone.into());
        self.local_attempts = 0;
        self.state = FlowState::CollectingCode;
    }

    /// Record a failed code submission
    ///
    /// After three consecutive failures the flow returns to phone
    /// collection, discarding the entered code. No server reset is issued;
    /// the stored challenge stays bounded by its own attempt ceiling.
    pub fn submission_failed(&mut self) -> FlowState {
        if self.state == FlowState::CollectingCode {
            self.local_attempts += 1;
            if self.local_attempts >= LOCAL_ATTEMPT_LIMIT {
                self.local_attempts = 0;
                self.state = FlowState::CollectingPhone;
            }
        }
        self.state
    }

    /// Complete the flow, yielding the verified phone
    pub fn submission_succeeded(self) -> Option<String> {
        self.phone
    }
}

impl Default for VerificationFlow {
    fn default() -> Self {
        Self::new()
    }
}
