//! Property-test run profile parsing for CI and local overrides.
//!
//! Suites read their case count through this module so one environment
//! variable tunes every property test in the workspace.

use std::env;

/// Environment variable overriding the number of proptest cases.
pub const PBT_CASES_ENV_KEY: &str = "HAMPATH_PBT_CASES";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyRunProfile {
    cases: u32,
}

impl PropertyRunProfile {
    /// Loads the profile from the environment, falling back to
    /// `default_cases` when the override is absent or invalid.
    ///
    /// # Examples
    /// ```
    /// use hampath_test_support::proptest_profile::PropertyRunProfile;
    ///
    /// let profile = PropertyRunProfile::load(64);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        let cases = match env::var(PBT_CASES_ENV_KEY) {
            Ok(raw) => parse_cases(&raw).unwrap_or_else(|reason| {
                ::tracing::warn!(
                    env = PBT_CASES_ENV_KEY,
                    raw = %raw,
                    reason = %reason,
                    "invalid property-test case override; using default",
                );
                default_cases
            }),
            Err(_) => default_cases,
        };
        Self {
            cases: cases.max(1),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == 0 {
        return Err("cases must be > 0".to_owned());
    }
    Ok(parsed)
}
