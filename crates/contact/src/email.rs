use core::cmp::Ordering;

use valuekit_core::{TotalOrder, Value, ValueError, ValueKind, ValueResult};

/// E-mail address value object. Renders as the address it was built from.
pub type Email = Value<EmailAddress>;

/// Attributes of an [`Email`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    local_part: String,
    domain: String,
}

impl EmailAddress {
    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    /// Domain, lower-cased.
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

impl ValueKind for EmailAddress {
    type Significance = String;
    const KIND: &'static str = "email";

    fn populate(significance: &String) -> ValueResult<Self> {
        if significance.is_empty() {
            return Err(ValueError::invalid(Self::KIND, "address cannot be empty"));
        }
        if significance.chars().any(char::is_whitespace) {
            return Err(ValueError::invalid(Self::KIND, "address cannot contain whitespace"));
        }

        let (local_part, domain) = match significance.split_once('@') {
            Some((local, domain)) if !domain.contains('@') => (local, domain),
            _ => {
                return Err(ValueError::invalid(
                    Self::KIND,
                    "address must contain exactly one '@'",
                ));
            }
        };

        if local_part.is_empty() {
            return Err(ValueError::invalid(Self::KIND, "local part cannot be empty"));
        }
        if !domain.contains('.') || domain.split('.').any(str::is_empty) {
            return Err(ValueError::invalid(
                Self::KIND,
                format!("'{domain}' is not a valid domain"),
            ));
        }

        Ok(Self {
            local_part: local_part.to_string(),
            domain: domain.to_ascii_lowercase(),
        })
    }

    fn compare_same(&self, other: &Self) -> Ordering {
        self.local_part
            .cmp(&other.local_part)
            .then_with(|| self.domain.cmp(&other.domain))
    }
}

impl TotalOrder for EmailAddress {}
