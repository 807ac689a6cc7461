use tracing::debug;

use crate::error::{FitError, Result};
use crate::models::{FitnessReport, UserProfile};
use crate::planner::{build_report, MealNameProvider};

/// Memoizes the report for the most recent profile and meal name provider.
///
/// Any change to the profile or the provider invalidates the cached report.
#[derive(Debug, Default)]
pub struct ReportCache {
    /// Provider cache key alongside the report built with it.
    last: Option<(String, FitnessReport)>,
    hits: u64,
    misses: u64,
}

impl ReportCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached report for `profile`, rebuilding it if the profile
    /// or the provider changed.
    pub fn get_or_build(
        &mut self,
        profile: &UserProfile,
        provider: &dyn MealNameProvider,
    ) -> Result<&FitnessReport> {
        let provider_key = provider.cache_key();
        let fresh = self
            .last
            .as_ref()
            .is_some_and(|(key, report)| *key == provider_key && report.profile == *profile);

        if fresh {
            self.hits += 1;
        } else {
            self.misses += 1;
            debug!(provider = %provider_key, "profile or provider changed, rebuilding report");
            // Clear first so a failed rebuild never leaves a stale report behind
            self.last = None;
            let report = build_report(profile, provider)?;
            self.last = Some((provider_key, report));
        }

        self.last
            .as_ref()
            .map(|(_, report)| report)
            .ok_or_else(|| FitError::InvalidInput("report cache is empty".to_string()))
    }

    /// The cached report, if any.
    pub fn current(&self) -> Option<&FitnessReport> {
        self.last.as_ref().map(|(_, report)| report)
    }

    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
