//! Schema evaluation.
//!
//! Evaluates a [`FieldSet`] against the current [`FormValues`] and produces a
//! per-field error map. Evaluation is pure: the same values and field set
//! always yield the same map.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use super::schema::{FieldDescriptor, FieldId, FieldSet, ValidationRule};
use super::values::FormValues;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Syntax check only: one local part, one @, a dotted domain.
        // Deliverability is the server's concern.
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Evaluate every field of the set and collect the active errors.
///
/// Fields that pass all their rules are absent from the map; an empty map
/// means the values may be submitted.
pub fn validate(values: &FormValues, fields: &FieldSet) -> BTreeMap<FieldId, String> {
    fields
        .fields()
        .iter()
        .filter_map(|descriptor| {
            validate_field(values, descriptor).map(|message| (descriptor.id, message))
        })
        .collect()
}

/// Evaluate one field's rules in order; the first violated rule wins.
pub fn validate_field(values: &FormValues, descriptor: &FieldDescriptor) -> Option<String> {
    descriptor
        .rules
        .iter()
        .find_map(|rule| evaluate(values, descriptor.id, rule))
}

fn evaluate(values: &FormValues, field: FieldId, rule: &ValidationRule) -> Option<String> {
    match rule {
        ValidationRule::Required => {
            let text = values.text(field)?;
            text.is_empty()
                .then(|| format!("{field} is a required field"))
        }
        ValidationRule::EmailSyntax => {
            let text = values.text(field)?;
            (!text.is_empty() && !email_regex().is_match(text))
                .then(|| format!("{field} must be a valid email"))
        }
        ValidationRule::MinLength { min, message } => {
            let text = values.text(field)?;
            (text.chars().count() < *min).then(|| (*message).to_owned())
        }
        ValidationRule::MatchesField { other, message } => {
            (values.text(field) != values.text(*other)).then(|| (*message).to_owned())
        }
        ValidationRule::MustAccept { message } => {
            (!values.accept_terms).then(|| (*message).to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::{MUST_ACCEPT_TERMS, PASSWORDS_MUST_MATCH, PASSWORD_TOO_SHORT};
    use crate::domain::values::{FieldInput, FormSeed, Role};
    use rstest::rstest;

    fn filled_basic() -> FormValues {
        FormValues::initialize(FormSeed {
            name: Some("Ann".to_owned()),
            email: Some("ann@x.com".to_owned()),
            password: Some("secret1".to_owned()),
            confirm_password: Some("secret1".to_owned()),
            accept_terms: Some(true),
            ..FormSeed::default()
        })
    }

    #[test]
    fn filled_basic_values_pass_the_basic_schema() {
        let errors = validate(&filled_basic(), &FieldSet::basic());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn empty_values_fail_every_required_field() {
        let errors = validate(&FormValues::default(), &FieldSet::basic());
        assert_eq!(
            errors.get(&FieldId::Name).map(String::as_str),
            Some("name is a required field")
        );
        assert_eq!(
            errors.get(&FieldId::Email).map(String::as_str),
            Some("email is a required field")
        );
        assert_eq!(
            errors.get(&FieldId::AcceptTerms).map(String::as_str),
            Some(MUST_ACCEPT_TERMS)
        );
    }

    #[rstest]
    #[case::five_chars("five5")]
    #[case::one_char("a")]
    fn short_passwords_report_the_minimum_length_message(#[case] password: &str) {
        let mut values = filled_basic();
        values.password = password.to_owned();
        values.confirm_password = password.to_owned();

        let errors = validate(&values, &FieldSet::basic());
        assert_eq!(
            errors.get(&FieldId::Password).map(String::as_str),
            Some(PASSWORD_TOO_SHORT)
        );
    }

    #[test]
    fn blank_password_reports_required_before_minimum_length() {
        let mut values = filled_basic();
        values.password = String::new();
        values.confirm_password = String::new();

        let errors = validate(&values, &FieldSet::basic());
        assert_eq!(
            errors.get(&FieldId::Password).map(String::as_str),
            Some("password is a required field")
        );
    }

    #[test]
    fn mismatched_confirmation_reports_passwords_must_match() {
        let mut values = filled_basic();
        values.confirm_password = "wrong".to_owned();

        let errors = validate(&values, &FieldSet::basic());
        assert_eq!(
            errors.get(&FieldId::ConfirmPassword).map(String::as_str),
            Some(PASSWORDS_MUST_MATCH)
        );
    }

    #[rstest]
    #[case::missing_at("ann.example.com", false)]
    #[case::missing_domain_dot("ann@example", false)]
    #[case::spaces("ann @example.com", false)]
    #[case::plain("ann@x.com", true)]
    #[case::subdomain("ann@mail.example.co.uk", true)]
    fn email_syntax_cases(#[case] email: &str, #[case] valid: bool) {
        let mut values = filled_basic();
        values.email = email.to_owned();

        let errors = validate(&values, &FieldSet::basic());
        assert_eq!(
            errors.contains_key(&FieldId::Email),
            !valid,
            "email {email:?} validity should be {valid}"
        );
    }

    #[test]
    fn unticked_terms_fail_when_the_checkbox_is_active() {
        let mut values = filled_basic();
        values.accept_terms = false;

        let errors = validate(&values, &FieldSet::basic());
        assert_eq!(
            errors.get(&FieldId::AcceptTerms).map(String::as_str),
            Some(MUST_ACCEPT_TERMS)
        );
    }

    #[test]
    fn full_schema_requires_role_and_region() {
        let mut values = filled_basic();
        values.state = String::new();

        let errors = validate(&values, &FieldSet::full());
        assert_eq!(
            errors.get(&FieldId::Role).map(String::as_str),
            Some("role is a required field")
        );
        assert_eq!(
            errors.get(&FieldId::State).map(String::as_str),
            Some("state is a required field")
        );
        // Country is prefilled with the default and passes.
        assert!(!errors.contains_key(&FieldId::Country));
    }

    #[test]
    fn full_schema_passes_once_role_and_region_are_selected() {
        let mut values = filled_basic();
        values.role = Some(Role::FrontendDeveloper);
        values
            .apply(FieldId::State, FieldInput::Text("Oregon".to_owned()))
            .unwrap();

        let errors = validate(&values, &FieldSet::full());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn validation_is_idempotent_on_unchanged_values() {
        let mut values = filled_basic();
        values.confirm_password = "different".to_owned();
        let fields = FieldSet::full();

        let first = validate(&values, &fields);
        let second = validate(&values, &fields);
        assert_eq!(first, second);
    }
}
