//! Case-count and fork settings for property suites.
//!
//! `PROGTEST_CASES` overrides the number of cases and `POWERGRID_PBT_FORK`
//! toggles forked execution. Unparseable overrides are logged and ignored.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const POWERGRID_PBT_FORK_ENV_KEY: &str = "POWERGRID_PBT_FORK";

/// Resolved settings for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads overrides from the process environment.
    ///
    /// # Examples
    /// ```
    /// use powergrid_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Reads overrides through `lookup`, which maps a variable name to its
    /// value.
    #[must_use]
    pub fn from_lookup(
        default_cases: u32,
        default_fork: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        Self {
            cases: resolve(&lookup, PROGTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: resolve(&lookup, POWERGRID_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    #[must_use]
    #[rustfmt::skip]
    pub const fn cases(&self) -> u32 { self.cases }

    #[must_use]
    #[rustfmt::skip]
    pub const fn fork(&self) -> bool { self.fork }
}

fn resolve<T: Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
    parse: fn(&str) -> Result<T, &'static str>,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(env = key, raw = %raw, reason, "ignoring property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, &'static str> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be positive"),
        Ok(cases) => Ok(cases),
        Err(_) => Err("cases must be an unsigned integer"),
    }
}

fn parse_flag(raw: &str) -> Result<bool, &'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected true/false, 1/0, yes/no or on/off"),
    }
}
