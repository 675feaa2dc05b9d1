//! Lookup result value type.

use super::orgname;

/// One parsed external lookup response.
///
/// Immutable value type produced by parsing a single fetch response.
/// A result is valid iff the address is non-empty; `country` and
/// `organization` degrade independently and may be empty in an
/// otherwise valid result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResult {
    /// External IPv4 address, or empty when the fetch failed.
    pub ip: String,
    /// ISO country code (e.g. "US"), possibly empty.
    pub country: String,
    /// Raw AS-organization string (e.g. "AS906 DMIT Cloud Services"),
    /// possibly empty.
    pub organization: String,
}

impl LookupResult {
    /// Creates a result from parsed fields.
    #[must_use]
    pub fn new(
        ip: impl Into<String>,
        country: impl Into<String>,
        organization: impl Into<String>,
    ) -> Self {
        Self {
            ip: ip.into(),
            country: country.into(),
            organization: organization.into(),
        }
    }

    /// Returns an invalid (empty) result, used for failed fetches.
    #[must_use]
    pub fn invalid() -> Self {
        Self::default()
    }

    /// A result is valid iff it carries an address.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.ip.is_empty()
    }

    /// Returns the user-facing string: `"{country} {ip}"`, or just the
    /// address when no country code is known.
    #[must_use]
    pub fn display_string(&self) -> String {
        if self.country.is_empty() {
            self.ip.clone()
        } else {
            format!("{} {}", self.country, self.ip)
        }
    }

    /// Returns the shortened organization display name, or an empty
    /// string when no organization is known.
    #[must_use]
    pub fn organization_display_name(&self) -> String {
        if self.organization.is_empty() {
            String::new()
        } else {
            orgname::short_org_name(&self.organization)
        }
    }
}
