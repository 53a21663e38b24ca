use crate::history::{IdentityEvent, StateChange};
use serde::Serialize;
use std::fmt;
use trustgate_types::{
    Denial, Email, Outcome, PhoneNumber, StatusTransition, Timestamp, Username,
    ValidationError, VerificationStatus,
};

/// A validated identity with a verification status.
///
/// `username` and `phone` are fixed at construction. `email` can be replaced
/// through [`Identity::set_email`], which re-validates. Status moves only via
/// [`Identity::request_verification`] and [`Identity::verify`].
#[derive(Clone, Debug, Serialize)]
pub struct Identity {
    username: Username,
    email: Email,
    phone: PhoneNumber,
    status: VerificationStatus,
    history: Vec<StateChange>,
}

impl Identity {
    /// Validate email and phone and create an `UNVERIFIED` identity.
    ///
    /// History starts with the email and phone being set, then the
    /// initialization entry.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let username = Username::new(username);
        let email = Email::parse(email)?;
        let phone = PhoneNumber::parse(phone)?;

        let mut identity = Self {
            username,
            email,
            phone,
            status: VerificationStatus::Unverified,
            history: Vec::new(),
        };
        identity.record(
            now,
            IdentityEvent::EmailChanged,
            format!("Email set to {}", identity.email),
        );
        identity.record(
            now,
            IdentityEvent::PhoneSet,
            format!("Phone number set to {}", identity.phone),
        );
        identity.record(
            now,
            IdentityEvent::Initialized,
            format!("User identity created for {}", identity.username),
        );
        tracing::debug!(username = %identity.username, "identity created");
        Ok(identity)
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    pub fn status(&self) -> VerificationStatus {
        self.status
    }

    /// Replace the email address.
    ///
    /// On a validation failure nothing changes and no history entry is written.
    pub fn set_email(
        &mut self,
        new_email: impl Into<String>,
        now: Timestamp,
    ) -> Result<(), ValidationError> {
        let new_email = Email::parse(new_email)?;
        let old_email = std::mem::replace(&mut self.email, new_email);
        self.record(
            now,
            IdentityEvent::EmailChanged,
            format!("Email changed from {old_email} to {}", self.email),
        );
        tracing::debug!(username = %self.username, "email changed");
        Ok(())
    }

    /// `UNVERIFIED -> PENDING`.
    pub fn request_verification(&mut self, now: Timestamp) -> Outcome {
        self.transition(StatusTransition::RequestVerification, now)
    }

    /// `PENDING -> VERIFIED`.
    pub fn verify(&mut self, now: Timestamp) -> Outcome {
        self.transition(StatusTransition::Verify, now)
    }

    fn transition(&mut self, transition: StatusTransition, now: Timestamp) -> Outcome {
        let from = self.status;
        match from.apply(transition) {
            Some(to) => {
                self.status = to;
                let event = match transition {
                    StatusTransition::RequestVerification => IdentityEvent::VerificationRequested,
                    StatusTransition::Verify => IdentityEvent::Verified,
                };
                let message = format!("Status changed from {from} to {to}");
                self.record(now, event, message.clone());
                tracing::info!(username = %self.username, %from, %to, "verification status advanced");
                Outcome::approved(message)
            }
            None => {
                let reason = Denial::InvalidTransition {
                    from,
                    attempted: transition,
                };
                let event = match transition {
                    StatusTransition::RequestVerification => {
                        IdentityEvent::VerificationRequestDenied
                    }
                    StatusTransition::Verify => IdentityEvent::VerificationDenied,
                };
                self.record(now, event, reason.to_string());
                tracing::warn!(username = %self.username, %from, %transition, "status transition denied");
                Outcome::denied(reason)
            }
        }
    }

    /// A copy of the state history, oldest first.
    pub fn state_history(&self) -> Vec<StateChange> {
        self.history.clone()
    }

    pub fn last_change(&self) -> Option<&StateChange> {
        self.history.last()
    }

    fn record(&mut self, timestamp: Timestamp, event: IdentityEvent, description: String) {
        self.history.push(StateChange {
            timestamp,
            event,
            description,
            status: self.status,
        });
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Identity(username={}, email={}, phone={}, status={})",
            self.username, self.email, self.phone, self.status
        )
    }
}
