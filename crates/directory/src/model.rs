use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use uuid::Uuid;

/// Opaque identity of a contact.
///
/// Generated once when the contact is created and never changed afterwards.
/// Backed by a random (v4) UUID, so ids are not reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(Uuid);

impl ContactId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Kind of number a contact represents.
///
/// `Display` yields the label shown in the UI ("Emergency", "Toll-Free",
/// "Custom"). `FromStr` accepts those labels case-insensitively plus the
/// spellings `tollfree` / `toll_free`, which is what the CLI relies on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Category {
    #[strum(to_string = "Emergency")]
    Emergency,
    #[strum(to_string = "Toll-Free", serialize = "tollfree", serialize = "toll_free")]
    TollFree,
    // Kontakte aus dem Formular sind standardmäßig "Custom"
    #[default]
    #[strum(to_string = "Custom")]
    Custom,
}

impl Category {
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// One emergency / help-line entry.
///
/// Fields are read-only after construction; there is no edit operation,
/// a contact is only ever created or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id: ContactId,
    name: String,
    phone_number: String,
    category: Category,
}

impl Contact {
    /// Create a contact with a fresh id. Name and number are taken as-is,
    /// empty strings included.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: ContactId::new(),
            name: name.into(),
            phone_number: phone_number.into(),
            category,
        }
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn category(&self) -> Category {
        self.category
    }
}
