//! Form values and their defaults.
//!
//! [`FormValues`] is the single mutable record behind a form instance. It is
//! serialised as-is into the outbound payload, so the serde names here are
//! wire names (camelCase, confirmation password included).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::schema::FieldId;

/// Country preselected when the form mounts.
pub const DEFAULT_COUNTRY: &str = "United States";

/// Job roles offered by the role dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Project management.
    #[serde(rename = "Project Manager")]
    ProjectManager,
    /// UX design.
    #[serde(rename = "UX Designer")]
    UxDesigner,
    /// Frontend development.
    #[serde(rename = "Frontend Developer")]
    FrontendDeveloper,
    /// Backend development.
    #[serde(rename = "Backend Developer")]
    BackendDeveloper,
    /// Fullstack development.
    #[serde(rename = "Fullstack Developer")]
    FullstackDeveloper,
}

impl Role {
    /// Every selectable role, in dropdown order.
    pub const ALL: [Self; 5] = [
        Self::ProjectManager,
        Self::UxDesigner,
        Self::FrontendDeveloper,
        Self::BackendDeveloper,
        Self::FullstackDeveloper,
    ];

    /// Dropdown label, identical to the wire representation.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProjectManager => "Project Manager",
            Self::UxDesigner => "UX Designer",
            Self::FrontendDeveloper => "Frontend Developer",
            Self::BackendDeveloper => "Backend Developer",
            Self::FullstackDeveloper => "Fullstack Developer",
        }
    }

    /// Resolve a dropdown label back to its role.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.label() == label)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// User input applied to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// Text entered or an option label selected.
    Text(String),
    /// Checkbox state.
    Flag(bool),
}

/// Rejected field input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input kind does not fit the field (e.g. text into a checkbox).
    #[error("{field} expects {expected} input")]
    KindMismatch {
        /// Field the input was applied to.
        field: FieldId,
        /// Kind of input the field accepts.
        expected: &'static str,
    },
    /// The label is not one of the field's selectable options.
    #[error("{value:?} is not a selectable option for {field}")]
    UnknownOption {
        /// Field the input was applied to.
        field: FieldId,
        /// Rejected label.
        value: String,
    },
    /// The field is not part of the controller's active field set.
    #[error("{field} is not part of the active field set")]
    UnknownField {
        /// Rejected field.
        field: FieldId,
    },
}

/// Initial values supplied by the embedding page; unset fields fall back to
/// defaults (empty strings, `false`, [`DEFAULT_COUNTRY`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSeed {
    /// Initial display name.
    pub name: Option<String>,
    /// Initial email address.
    pub email: Option<String>,
    /// Initial password.
    pub password: Option<String>,
    /// Initial password confirmation.
    pub confirm_password: Option<String>,
    /// Initial role selection.
    pub role: Option<Role>,
    /// Initial country selection.
    pub country: Option<String>,
    /// Initial region selection.
    pub state: Option<String>,
    /// Initial terms checkbox state.
    pub accept_terms: Option<bool>,
}

/// Current values of every form field.
///
/// ## Invariants
/// - `state` is only meaningful for the current `country`; changing the
///   country clears it.
///
/// Serialises to the exact JSON shape the original posted, confirmation
/// password included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Chosen password.
    pub password: String,
    /// Password confirmation; sent on the wire as `confirmPassword`.
    pub confirm_password: String,
    /// Selected role, omitted from the payload while unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Selected country.
    pub country: String,
    /// Selected region within the country.
    pub state: String,
    /// Terms-of-service checkbox; sent on the wire as `acceptTerms`.
    pub accept_terms: bool,
}

impl FormValues {
    /// Build values from a seed, filling unset fields with defaults.
    pub fn initialize(seed: FormSeed) -> Self {
        Self {
            name: seed.name.unwrap_or_default(),
            email: seed.email.unwrap_or_default(),
            password: seed.password.unwrap_or_default(),
            confirm_password: seed.confirm_password.unwrap_or_default(),
            role: seed.role,
            country: seed.country.unwrap_or_else(|| DEFAULT_COUNTRY.to_owned()),
            state: seed.state.unwrap_or_default(),
            accept_terms: seed.accept_terms.unwrap_or_default(),
        }
    }

    /// Apply one user input to the addressed field.
    ///
    /// Selecting a different country clears the region, since the old region
    /// belongs to the old country's list.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when the input kind does not fit the field or a
    /// select label is not a known option.
    pub fn apply(&mut self, field: FieldId, input: FieldInput) -> Result<(), InputError> {
        match (field, input) {
            (FieldId::Name, FieldInput::Text(value)) => self.name = value,
            (FieldId::Email, FieldInput::Text(value)) => self.email = value,
            (FieldId::Password, FieldInput::Text(value)) => self.password = value,
            (FieldId::ConfirmPassword, FieldInput::Text(value)) => self.confirm_password = value,
            (FieldId::Role, FieldInput::Text(value)) => {
                self.role = if value.is_empty() {
                    None
                } else {
                    let role = Role::from_label(&value)
                        .ok_or(InputError::UnknownOption { field, value })?;
                    Some(role)
                };
            }
            (FieldId::Country, FieldInput::Text(value)) => {
                if value != self.country {
                    self.state.clear();
                }
                self.country = value;
            }
            (FieldId::State, FieldInput::Text(value)) => self.state = value,
            (FieldId::AcceptTerms, FieldInput::Flag(value)) => self.accept_terms = value,
            (FieldId::AcceptTerms, FieldInput::Text(_)) => {
                return Err(InputError::KindMismatch {
                    field,
                    expected: "boolean",
                });
            }
            (_, FieldInput::Flag(_)) => {
                return Err(InputError::KindMismatch {
                    field,
                    expected: "text",
                });
            }
        }
        Ok(())
    }

    /// Textual value of a field; the role reads as its label, a checkbox has
    /// no text and yields `None`.
    pub fn text(&self, field: FieldId) -> Option<&str> {
        match field {
            FieldId::Name => Some(self.name.as_str()),
            FieldId::Email => Some(self.email.as_str()),
            FieldId::Password => Some(self.password.as_str()),
            FieldId::ConfirmPassword => Some(self.confirm_password.as_str()),
            FieldId::Role => Some(self.role.map_or("", Role::label)),
            FieldId::Country => Some(self.country.as_str()),
            FieldId::State => Some(self.state.as_str()),
            FieldId::AcceptTerms => None,
        }
    }
}

impl Default for FormValues {
    fn default() -> Self {
        Self::initialize(FormSeed::default())
    }
}
