//! repository.rs - Verification-code lifecycle bookkeeping.
//!
//! The repository owns the full lifecycle of a stored code: generation from
//! the configured pattern, hashing, expiry arithmetic, the throttle window,
//! and deletion. One code per user at a time: creating a new one replaces
//! the previous record.
//!
//! License: MIT OR Apache-2.0

use chrono::{DateTime, Duration, Utc};
use log::debug;
use std::sync::Arc;

use twofa_patgen::Sequence;

use crate::config::TwoFactorConfig;
use crate::errors::TwoFactorError;
use crate::hasher::{Argon2Hasher, CodeHasher};
use crate::pattern;
use crate::store::{CodeRecord, CodeStore, InMemoryCodeStore};
use crate::users::TwoFactorUser;

/// Issues, checks, and expires verification codes for users.
pub struct VerificationCodeRepository {
    store: Arc<dyn CodeStore>,
    hasher: Arc<dyn CodeHasher>,
    /// Parsed form of the configured code pattern, shared via the global
    /// pattern cache.
    tree: Arc<Sequence>,
    expire_minutes: i64,
    throttle_seconds: i64,
}

impl VerificationCodeRepository {
    /// Builds a repository over the given store and hasher.
    ///
    /// The configured pattern is parsed here (through the shared cache), so
    /// a malformed pattern fails construction rather than the first
    /// issuance.
    pub fn new(
        store: Arc<dyn CodeStore>,
        hasher: Arc<dyn CodeHasher>,
        config: &TwoFactorConfig,
    ) -> Result<Self, TwoFactorError> {
        let tree = pattern::get_or_parse(&config.pattern)?;
        Ok(Self {
            store,
            hasher,
            tree,
            expire_minutes: config.expire_minutes,
            throttle_seconds: config.throttle_seconds,
        })
    }

    /// Convenience constructor: in-memory store, Argon2 hashing.
    pub fn in_memory(config: &TwoFactorConfig) -> Result<Self, TwoFactorError> {
        Self::new(
            Arc::new(InMemoryCodeStore::new()),
            Arc::new(Argon2Hasher),
            config,
        )
    }

    /// Creates a new verification code record for the given user, replacing
    /// any previous one.
    ///
    /// Returns the plaintext code. This is the only place it ever exists;
    /// the store sees just the hash.
    pub fn create(&self, user: &dyn TwoFactorUser) -> Result<String, TwoFactorError> {
        let user_id = user.auth_identifier();
        self.store.remove(&user_id);

        let code = self.generate_code();
        let record = CodeRecord {
            code_hash: self.hasher.hash(&code)?,
            created_at: Utc::now(),
        };
        self.store.put(&user_id, record);
        debug!("Issued a new verification code for user {}.", user_id);

        Ok(code)
    }

    /// Generates a fresh code from the configured pattern.
    pub fn generate_code(&self) -> String {
        self.tree.generate(&mut rand::rng())
    }

    /// Determines whether a valid record exists for `user` matching `code`:
    /// present, not expired, and the hash checks out.
    pub fn exists(&self, user: &dyn TwoFactorUser, code: &str) -> bool {
        match self.store.get(&user.auth_identifier()) {
            Some(record) => {
                !self.code_expired(record.created_at)
                    && self.hasher.verify(code, &record.code_hash)
            }
            None => false,
        }
    }

    /// Determines whether a not-yet-expired record exists for `user`,
    /// without checking any code.
    pub fn exists_not_expired(&self, user: &dyn TwoFactorUser) -> bool {
        match self.store.get(&user.auth_identifier()) {
            Some(record) => !self.code_expired(record.created_at),
            None => false,
        }
    }

    /// Determines whether `user` requested a code inside the throttle
    /// window. A throttle of 0 disables throttling.
    pub fn recently_created(&self, user: &dyn TwoFactorUser) -> bool {
        if self.throttle_seconds <= 0 {
            return false;
        }
        match self.store.get(&user.auth_identifier()) {
            Some(record) => {
                record.created_at + Duration::seconds(self.throttle_seconds) > Utc::now()
            }
            None => false,
        }
    }

    /// Deletes the record for `user`. Returns whether one existed.
    pub fn delete(&self, user: &dyn TwoFactorUser) -> bool {
        self.store.remove(&user.auth_identifier())
    }

    /// Deletes all expired records. Returns the number removed.
    pub fn delete_expired(&self) -> usize {
        let cutoff = Utc::now() - Duration::minutes(self.expire_minutes);
        let removed = self.store.remove_created_before(cutoff);
        if removed > 0 {
            debug!("Deleted {} expired verification code(s).", removed);
        }
        removed
    }

    fn code_expired(&self, created_at: DateTime<Utc>) -> bool {
        created_at + Duration::minutes(self.expire_minutes) < Utc::now()
    }
}
