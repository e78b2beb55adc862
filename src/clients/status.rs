//! Classification of response status codes into success or failure.

use std::ops::RangeInclusive;

/// Decides which response status codes are treated as failures.
///
/// The default, [`StatusPolicy::legacy`], fails only on 400, 401, 404 and
/// 500. Every other status, including other 4xx and 5xx codes, passes
/// through as success with the body intact. Use [`StatusPolicy::all_errors`]
/// or build a custom policy for stricter classification.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::StatusPolicy;
///
/// let legacy = StatusPolicy::legacy();
/// assert!(legacy.is_failure(404));
/// assert!(!legacy.is_failure(403));
///
/// let strict = StatusPolicy::none().with_failure_range(400..=599);
/// assert!(strict.is_failure(403));
/// assert!(!strict.is_failure(201));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusPolicy {
    failures: Vec<RangeInclusive<u16>>,
}

impl StatusPolicy {
    /// Status codes the legacy classification treats as failures.
    pub const LEGACY_FAILURE_CODES: [u16; 4] = [400, 401, 404, 500];

    /// A policy that treats every status as success.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    /// Fails exactly on 400, 401, 404 and 500.
    #[must_use]
    pub fn legacy() -> Self {
        Self::LEGACY_FAILURE_CODES
            .iter()
            .fold(Self::none(), |policy, &code| policy.with_failure(code))
    }

    /// Fails on every 4xx and 5xx status.
    #[must_use]
    pub fn all_errors() -> Self {
        Self::none().with_failure_range(400..=599)
    }

    /// Adds a single failing status code.
    #[must_use]
    pub fn with_failure(self, code: u16) -> Self {
        self.with_failure_range(code..=code)
    }

    /// Adds an inclusive range of failing status codes.
    #[must_use]
    pub fn with_failure_range(mut self, range: RangeInclusive<u16>) -> Self {
        self.failures.push(range);
        self
    }

    /// Returns `true` if `code` is classified as a failure.
    #[must_use]
    pub fn is_failure(&self, code: u16) -> bool {
        self.failures.iter().any(|range| range.contains(&code))
    }
}

impl Default for StatusPolicy {
    fn default() -> Self {
        Self::legacy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_policy_fails_on_exactly_four_codes() {
        let policy = StatusPolicy::legacy();
        let failing: Vec<u16> = (100..=599).filter(|&c| policy.is_failure(c)).collect();
        assert_eq!(failing, vec![400, 401, 404, 500]);
    }

    #[test]
    fn test_legacy_policy_passes_other_errors_through() {
        let policy = StatusPolicy::default();
        for code in [200, 201, 204, 403, 409, 422, 429, 502, 503] {
            assert!(!policy.is_failure(code), "{code} should pass through");
        }
    }

    #[test]
    fn test_all_errors_policy() {
        let policy = StatusPolicy::all_errors();
        assert!(policy.is_failure(400));
        assert!(policy.is_failure(422));
        assert!(policy.is_failure(599));
        assert!(!policy.is_failure(399));
        assert!(!policy.is_failure(200));
    }

    #[test]
    fn test_none_policy_never_fails() {
        let policy = StatusPolicy::none();
        assert!(!policy.is_failure(500));
    }

    #[test]
    fn test_custom_policy_combines_codes_and_ranges() {
        let policy = StatusPolicy::legacy()
            .with_failure(403)
            .with_failure_range(502..=504);
        assert!(policy.is_failure(403));
        assert!(policy.is_failure(503));
        assert!(policy.is_failure(404));
        assert!(!policy.is_failure(501));
    }
}
