//! Onboarding form core.
//!
//! A client-side registration form reduced to its logic: typed form values, a
//! declarative per-field validation schema, a touched/error controller, one
//! outbound HTTP POST per valid submit, and an append-only projection of the
//! users the server created. No persistence, no routing; state lives for the
//! lifetime of one [`FormController`].

pub mod domain;
pub mod outbound;
pub mod regions;

pub use domain::{
    FieldDescriptor, FieldId, FieldInput, FieldKind, FieldMeta, FieldSet, FormController,
    FormSeed, FormValues, InputError, RecordId, Role, SubmissionError, SubmitOutcome,
    SubmittedUser, UserSubmitter, ValidationRule,
};
pub use outbound::registration::{RegistrationConfig, RegistrationHttpClient};
