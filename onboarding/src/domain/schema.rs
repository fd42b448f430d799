//! Declarative field-set schema.
//!
//! The original UI shipped three near-identical form components that only
//! differed in which fields they rendered. Here a single configurable list of
//! [`FieldDescriptor`]s drives both rendering metadata and the validation
//! schema; the presets on [`FieldSet`] reproduce the three variants.

use std::fmt;

use super::values::Role;

/// Minimum password length accepted by the schema.
pub const PASSWORD_MIN: usize = 6;
/// Error shown when the password is shorter than [`PASSWORD_MIN`].
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
/// Error shown when the confirmation does not equal the password.
pub const PASSWORDS_MUST_MATCH: &str = "Passwords must match";
/// Error shown when the terms checkbox is left unticked.
pub const MUST_ACCEPT_TERMS: &str = "Must Accept Terms and Conditions";

/// Stable identifier of a form field.
///
/// `as_str` yields the wire name used in the outbound JSON payload, which is
/// also the path interpolated into required-field error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    /// Free-text display name.
    Name,
    /// Email address.
    Email,
    /// Chosen password.
    Password,
    /// Password confirmation.
    ConfirmPassword,
    /// Job role selection.
    Role,
    /// Country selection.
    Country,
    /// Region within the selected country.
    State,
    /// Terms-of-service checkbox.
    AcceptTerms,
}

impl FieldId {
    /// Wire name of the field (camelCase, matching the JSON payload).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Role => "role",
            Self::Country => "country",
            Self::State => "state",
            Self::AcceptTerms => "acceptTerms",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering kind of a field, dispatched by pattern matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain text input.
    Text,
    /// Email input.
    Email,
    /// Masked password input.
    Password,
    /// Dropdown with a fixed option list.
    Select {
        /// Labels offered by the dropdown.
        options: Vec<String>,
    },
    /// Country dropdown; options come from the region catalogue.
    Country,
    /// Region dropdown subordinate to the selected country.
    Region,
    /// Boolean checkbox.
    Checkbox,
}

/// One validation constraint attached to a field.
///
/// Rules are evaluated in declaration order and the first failure wins, so a
/// blank password reports the required-field message rather than the
/// minimum-length one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationRule {
    /// Value must be non-empty (a selection must be made).
    Required,
    /// Value must look like an email address.
    EmailSyntax,
    /// Value must be at least `min` characters long.
    MinLength {
        /// Minimum number of characters.
        min: usize,
        /// Error reported on violation.
        message: &'static str,
    },
    /// Value must equal the value of another field.
    MatchesField {
        /// Field this one must mirror.
        other: FieldId,
        /// Error reported on violation.
        message: &'static str,
    },
    /// Checkbox must be ticked.
    MustAccept {
        /// Error reported on violation.
        message: &'static str,
    },
}

/// Label, kind and validation rules of one rendered field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field identity.
    pub id: FieldId,
    /// Human-readable label shown next to the input.
    pub label: &'static str,
    /// Rendering kind.
    pub kind: FieldKind,
    /// Constraints evaluated against the current values.
    pub rules: Vec<ValidationRule>,
}

/// Ordered set of fields a form instance renders and validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<FieldDescriptor>,
}

impl FieldSet {
    /// The original form: name, email, password pair, and the terms checkbox.
    pub fn basic() -> Self {
        Self {
            fields: vec![
                name_field(),
                email_field(),
                password_field(),
                confirm_password_field(),
                accept_terms_field(),
            ],
        }
    }

    /// The first extension: [`FieldSet::basic`] plus a role dropdown.
    pub fn with_role() -> Self {
        Self {
            fields: vec![
                name_field(),
                email_field(),
                password_field(),
                confirm_password_field(),
                role_field(),
                accept_terms_field(),
            ],
        }
    }

    /// The final form: role plus country and region selection, with the
    /// terms checkbox moved to the end.
    pub fn full() -> Self {
        Self {
            fields: vec![
                name_field(),
                email_field(),
                password_field(),
                confirm_password_field(),
                role_field(),
                country_field(),
                state_field(),
                accept_terms_field(),
            ],
        }
    }

    /// Descriptors in render order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        self.fields.as_slice()
    }

    /// Look up the descriptor for a field, if it is part of this set.
    pub fn descriptor(&self, id: FieldId) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|descriptor| descriptor.id == id)
    }

    /// Whether the field is part of this set.
    pub fn contains(&self, id: FieldId) -> bool {
        self.descriptor(id).is_some()
    }
}

fn name_field() -> FieldDescriptor {
    FieldDescriptor {
        id: FieldId::Name,
        label: "Name",
        kind: FieldKind::Text,
        rules: vec![ValidationRule::Required],
    }
}

fn email_field() -> FieldDescriptor {
    FieldDescriptor {
        id: FieldId::Email,
        label: "Email",
        kind: FieldKind::Email,
        rules: vec![ValidationRule::Required, ValidationRule::EmailSyntax],
    }
}

fn password_field() -> FieldDescriptor {
    FieldDescriptor {
        id: FieldId::Password,
        label: "Password",
        kind: FieldKind::Password,
        rules: vec![
            ValidationRule::Required,
            ValidationRule::MinLength {
                min: PASSWORD_MIN,
                message: PASSWORD_TOO_SHORT,
            },
        ],
    }
}

fn confirm_password_field() -> FieldDescriptor {
    FieldDescriptor {
        id: FieldId::ConfirmPassword,
        label: "Confirm Password",
        kind: FieldKind::Password,
        rules: vec![
            ValidationRule::Required,
            ValidationRule::MatchesField {
                other: FieldId::Password,
                message: PASSWORDS_MUST_MATCH,
            },
        ],
    }
}

fn role_field() -> FieldDescriptor {
    FieldDescriptor {
        id: FieldId::Role,
        label: "Role",
        kind: FieldKind::Select {
            options: Role::ALL.iter().map(|role| role.label().to_owned()).collect(),
        },
        rules: vec![ValidationRule::Required],
    }
}

fn country_field() -> FieldDescriptor {
    FieldDescriptor {
        id: FieldId::Country,
        label: "Country",
        kind: FieldKind::Country,
        rules: vec![ValidationRule::Required],
    }
}

fn state_field() -> FieldDescriptor {
    FieldDescriptor {
        id: FieldId::State,
        label: "State",
        kind: FieldKind::Region,
        rules: vec![ValidationRule::Required],
    }
}

fn accept_terms_field() -> FieldDescriptor {
    FieldDescriptor {
        id: FieldId::AcceptTerms,
        label: "Terms of Service",
        kind: FieldKind::Checkbox,
        rules: vec![ValidationRule::MustAccept {
            message: MUST_ACCEPT_TERMS,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::basic(FieldSet::basic(), 5)]
    #[case::with_role(FieldSet::with_role(), 6)]
    #[case::full(FieldSet::full(), 8)]
    fn presets_expose_expected_field_counts(#[case] set: FieldSet, #[case] expected: usize) {
        assert_eq!(set.fields().len(), expected);
    }

    #[test]
    fn basic_preset_has_no_role_or_region_fields() {
        let set = FieldSet::basic();
        assert!(!set.contains(FieldId::Role));
        assert!(!set.contains(FieldId::Country));
        assert!(!set.contains(FieldId::State));
        assert!(set.contains(FieldId::AcceptTerms));
    }

    #[test]
    fn full_preset_renders_terms_checkbox_last() {
        let set = FieldSet::full();
        let last = set.fields().last().map(|descriptor| descriptor.id);
        assert_eq!(last, Some(FieldId::AcceptTerms));
        assert!(set.contains(FieldId::Country));
        assert!(set.contains(FieldId::State));
    }

    #[test]
    fn role_dropdown_offers_all_five_roles() {
        let set = FieldSet::with_role();
        let descriptor = set.descriptor(FieldId::Role).map(|d| d.kind.clone());
        match descriptor {
            Some(FieldKind::Select { options }) => {
                assert_eq!(options.len(), 5);
                assert!(options.iter().any(|label| label == "UX Designer"));
            }
            other => panic!("role field should be a select, got {other:?}"),
        }
    }

    #[test]
    fn field_ids_use_wire_names() {
        assert_eq!(FieldId::ConfirmPassword.as_str(), "confirmPassword");
        assert_eq!(FieldId::AcceptTerms.as_str(), "acceptTerms");
        assert_eq!(FieldId::Name.to_string(), "name");
    }
}
