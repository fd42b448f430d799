//! Domain core of the onboarding form.
//!
//! Purpose: field values, the declarative validation schema, the controller
//! that ties them together, and the port the submission pipeline is driven
//! through. Everything here is transport agnostic; the outbound adapter maps
//! its failures into [`ports::SubmissionError`].
//!
//! Public surface:
//! - `FormController` (controller) — touched/error state and submit orchestration.
//! - `FieldSet` / `FieldDescriptor` (schema) — declarative field list driving
//!   rendering and validation.
//! - `FormValues` / `Role` (values) — the mutable record and its defaults.
//! - `UserSubmitter` / `SubmittedUser` (ports) — the pipeline seam.

pub mod controller;
pub mod ports;
pub mod schema;
pub mod validation;
pub mod values;

pub use self::controller::{FieldMeta, FormController, SubmitOutcome};
pub use self::ports::{RecordId, SubmissionError, SubmittedUser, UserSubmitter};
pub use self::schema::{FieldDescriptor, FieldId, FieldKind, FieldSet, ValidationRule};
pub use self::values::{FieldInput, FormSeed, FormValues, InputError, Role, DEFAULT_COUNTRY};
