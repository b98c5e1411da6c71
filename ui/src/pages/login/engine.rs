//! Demo sign-in. Credentials are collected but never checked; every attempt
//! succeeds once the latency elapses.

use rand::Rng;

use crate::core::draft::{DraftError, FormDraft};
use crate::core::estimation::MockEstimator;
use crate::core::timing::Latency;

#[derive(Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// Keep passwords out of logs.
impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl TryFrom<&FormDraft> for LoginRequest {
    type Error = DraftError;

    fn try_from(draft: &FormDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            email: draft.required_text("email")?,
            password: draft.required_text("password")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedIn;

#[derive(Debug, Clone, Copy)]
pub struct Authenticator {
    latency: Latency,
}

impl Authenticator {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }
}

impl MockEstimator for Authenticator {
    type Request = LoginRequest;
    type Output = SignedIn;
    const NAME: &'static str = "login";

    fn latency(&self) -> Latency {
        self.latency
    }

    fn estimate<R: Rng + ?Sized>(&self, _request: &LoginRequest, _rng: &mut R) -> SignedIn {
        SignedIn
    }
}
