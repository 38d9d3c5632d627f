//! User mutation service
//!
//! Builds or merges user records, checks them against the acting admin and
//! records each mutation on the event log. Under the default policy a failed
//! check is logged and the event is emitted anyway; `Enforcement::Reject`
//! turns the failure into an error and suppresses the event.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::domain::user::{
    validate_email, Admin, DateText, Permission, Role, User, UserPatch, UserRepository,
};
use crate::domain::{DomainError, EventSink, UserEventType};

use super::clock::{Clock, SystemClock};
use super::date_format::{one_year_after, DateFormatVersion, DateFormatter};
use super::id_generator::{HexIdGenerator, IdGenerator, DEFAULT_ID_LENGTH};

/// What happens when a mutation fails validation or the permission check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Enforcement {
    /// Log the failure and emit the event regardless
    #[default]
    LogOnly,
    /// Return the failure and emit nothing
    Reject,
}

/// Tunable behaviour of [`UserMutationService`]
///
/// The defaults reproduce the historical behaviour, including the `create`
/// permission gating updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationPolicy {
    pub enforcement: Enforcement,
    /// Skip the event when a merged update equals the stored record
    pub skip_unchanged: bool,
    pub create_permission: Permission,
    pub update_permission: Permission,
    pub id_length: usize,
    pub date_format: DateFormatVersion,
}

impl Default for MutationPolicy {
    fn default() -> Self {
        Self {
            enforcement: Enforcement::LogOnly,
            skip_unchanged: false,
            create_permission: Permission::Create,
            update_permission: Permission::Create,
            id_length: DEFAULT_ID_LENGTH,
            date_format: DateFormatVersion::Legacy,
        }
    }
}

impl MutationPolicy {
    /// Reject failed checks, skip no-op updates and gate updates on `update`
    pub fn strict() -> Self {
        Self {
            enforcement: Enforcement::Reject,
            skip_unchanged: true,
            update_permission: Permission::Update,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id_length == 0 {
            return Err(DomainError::configuration(
                "id_length must be greater than 0",
            ));
        }
        Ok(())
    }
}

/// Result of a create or update call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutationOutcome {
    /// The candidate or merged record
    pub user: User,
    /// Whether an event was appended
    pub emitted: bool,
    /// Failed check that was logged and let through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<String>,
}

/// Service orchestrating user creation and updates
pub struct UserMutationService<R: UserRepository, E: EventSink> {
    repository: Arc<R>,
    events: Arc<E>,
    id_generator: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    formatter: DateFormatter,
    policy: MutationPolicy,
}

impl<R: UserRepository, E: EventSink> UserMutationService<R, E> {
    /// Create a service with an entropy-seeded id generator, the system clock
    /// and the default policy
    pub fn new(repository: Arc<R>, events: Arc<E>) -> Self {
        Self {
            repository,
            events,
            id_generator: Arc::new(HexIdGenerator::new()),
            clock: Arc::new(SystemClock),
            formatter: DateFormatter::default(),
            policy: MutationPolicy::default(),
        }
    }

    pub fn with_id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_policy(mut self, policy: MutationPolicy) -> Self {
        self.formatter = DateFormatter::new(policy.date_format);
        self.policy = policy;
        self
    }

    /// Create a user and record a `UserCreated` event
    pub async fn create_user(
        &self,
        actor: &Admin,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Result<MutationOutcome, DomainError> {
        let now = self.clock.now();

        let candidate = User {
            id: self.id_generator.generate(self.policy.id_length),
            name: name.into(),
            email: email.into(),
            is_admin: role.is_admin(),
            created_at: self.formatter.format(now),
            expires_at: one_year_after(now)
                .map(|expiry| self.formatter.format(expiry))
                .unwrap_or_else(DateText::invalid),
        };

        let check = self.check(
            actor,
            &candidate.email,
            self.policy.create_permission,
            "User creation error",
        );
        let violation = self.resolve(check, "created", actor)?;

        self.events
            .add_event(UserEventType::UserCreated, &candidate)
            .await?;

        info!(
            user_id = %candidate.id,
            actor_id = %actor.id(),
            event_type = %UserEventType::UserCreated,
            "User creation recorded"
        );

        Ok(MutationOutcome {
            user: candidate,
            emitted: true,
            violation,
        })
    }

    /// Merge `patch` over the stored user and record a `UserUpdated` event
    ///
    /// A missing user fails with `NotFound` before anything is emitted.
    pub async fn update_user(
        &self,
        actor: &Admin,
        user_id: &str,
        patch: UserPatch,
    ) -> Result<MutationOutcome, DomainError> {
        let saved = self.repository.get_by_id(user_id).await?;
        let updated = patch.apply_to(&saved);

        if self.policy.skip_unchanged && updated == saved {
            debug!(user_id = %user_id, "Update leaves user unchanged, no event emitted");
            return Ok(MutationOutcome {
                user: updated,
                emitted: false,
                violation: None,
            });
        }

        let check = self.check(
            actor,
            &updated.email,
            self.policy.update_permission,
            "User update error",
        );
        let violation = self.resolve(check, "updated", actor)?;

        self.events
            .add_event(UserEventType::UserUpdated, &updated)
            .await?;

        info!(
            user_id = %updated.id,
            actor_id = %actor.id(),
            event_type = %UserEventType::UserUpdated,
            "User update recorded"
        );

        Ok(MutationOutcome {
            user: updated,
            emitted: true,
            violation,
        })
    }

    /// Email structure first, then the actor's permission
    fn check(
        &self,
        actor: &Admin,
        email: &str,
        permission: Permission,
        denial: &str,
    ) -> Result<(), DomainError> {
        validate_email(email).map_err(|e| DomainError::validation(e.to_string()))?;

        if !actor.has_permission(permission) {
            return Err(DomainError::permission_denied(denial));
        }

        Ok(())
    }

    fn resolve(
        &self,
        check: Result<(), DomainError>,
        action: &str,
        actor: &Admin,
    ) -> Result<Option<String>, DomainError> {
        let Err(e) = check else {
            return Ok(None);
        };

        error!(actor_id = %actor.id(), "User could not be {}: {}", action, e.message());

        match self.policy.enforcement {
            Enforcement::LogOnly => Ok(Some(e.to_string())),
            Enforcement::Reject => Err(e),
        }
    }
}
