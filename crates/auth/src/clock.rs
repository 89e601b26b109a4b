//! Time source and expiry policy

use std::sync::atomic::{AtomicI64, Ordering};

use crate::claims::ClaimSet;
use crate::error::VerificationError;

/// Source of "now" in Unix seconds
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Settable clock for tests and simulations
#[derive(Debug, Default)]
pub struct ManualClock(AtomicI64);

impl ManualClock {
    pub fn new(now: i64) -> Self {
        Self(AtomicI64::new(now))
    }

    pub fn set(&self, now: i64) {
        self.0.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, secs: i64) {
        self.0.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// A claim set is valid only while `now < exp`.
pub fn check_expiry(claims: &ClaimSet, now: i64) -> Result<(), VerificationError> {
    if now >= claims.exp {
        return Err(VerificationError::Expired);
    }
    Ok(())
}
