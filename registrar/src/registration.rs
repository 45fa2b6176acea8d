//! Registration records and related types.
//!
//! A registration is one person's submitted record: a name, an email
//! address and an optional date of birth, identified by a store-assigned
//! [`RegistrationId`].

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

/// Store-assigned identifier of a registration.
///
/// Ids are assigned by the database on insert, never change afterwards,
/// and are not reused after a record is deleted.
///
/// # Examples
///
/// ```
/// use registrar::RegistrationId;
///
/// let id: RegistrationId = "42".parse().unwrap();
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RegistrationId(i64);

impl RegistrationId {
    /// Wraps a raw row id.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw row id.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RegistrationId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i64> for RegistrationId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// The replaceable fields of a registration.
///
/// Used as the input of both create and update; update replaces every
/// field, so a `None` date of birth clears a previously stored one.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use registrar::RegistrationDetails;
///
/// let details = RegistrationDetails::new("Alice", "alice@x.com")
///     .with_date_of_birth(NaiveDate::from_ymd_opt(1990, 1, 1));
/// assert_eq!(details.name, "Alice");
/// assert!(details.date_of_birth.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDetails {
    /// Person's name.
    pub name: String,
    /// Email address, unique across all registrations.
    pub email: String,
    /// Date of birth, if given.
    pub date_of_birth: Option<NaiveDate>,
}

impl RegistrationDetails {
    /// Creates details with no date of birth.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            date_of_birth: None,
        }
    }

    /// Sets (or clears) the date of birth.
    #[must_use]
    pub fn with_date_of_birth(mut self, date_of_birth: Option<NaiveDate>) -> Self {
        self.date_of_birth = date_of_birth;
        self
    }
}

/// A stored registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    id: RegistrationId,
    name: String,
    email: String,
    date_of_birth: Option<NaiveDate>,
}

impl Registration {
    /// Assembles a registration from a stored id and its fields.
    #[must_use]
    pub fn new(id: RegistrationId, details: RegistrationDetails) -> Self {
        Self {
            id,
            name: details.name,
            email: details.email,
            date_of_birth: details.date_of_birth,
        }
    }

    /// Returns the store-assigned id.
    #[must_use]
    pub const fn id(&self) -> RegistrationId {
        self.id
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the date of birth, if one was stored.
    #[must_use]
    pub const fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    /// Returns the replaceable fields of this registration.
    #[must_use]
    pub fn details(&self) -> RegistrationDetails {
        RegistrationDetails {
            name: self.name.clone(),
            email: self.email.clone(),
            date_of_birth: self.date_of_birth,
        }
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:?}, {:?}, ", self.id, self.name, self.email)?;
        match self.date_of_birth {
            Some(date) => write!(f, "{date})"),
            None => write!(f, "-)"),
        }
    }
}

/// Outcome of an update or delete addressed by id.
///
/// A missing row is a warning, not an error, so it is reported here
/// rather than through [`Error`](crate::Error).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Exactly one row was changed.
    Applied,
    /// No row has the requested id; nothing was changed.
    NotFound,
}

impl WriteOutcome {
    /// Maps an affected-row count to an outcome.
    #[must_use]
    pub const fn from_rows_affected(rows: usize) -> Self {
        if rows > 0 {
            Self::Applied
        } else {
            Self::NotFound
        }
    }

    /// Returns true if a row was changed.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
