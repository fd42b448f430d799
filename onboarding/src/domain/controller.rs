//! Form state controller.
//!
//! Owns field values and per-field touched/error state, runs the schema on
//! change, blur, and submit, and drives the submission pipeline. The submit
//! outcome is returned directly to the caller; the original funneled it
//! through a status slot watched by a render effect, which a result value
//! makes unnecessary.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, error};

use super::ports::{SubmittedUser, UserSubmitter};
use super::schema::{FieldId, FieldSet};
use super::validation;
use super::values::{FieldInput, FormSeed, FormValues, InputError};

/// Per-field presentation state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMeta {
    /// The field received and lost focus at least once; gates error display.
    pub touched: bool,
    /// Current schema error for the field, shown once touched.
    pub error: Option<String>,
}

/// Outcome of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the pipeline was not invoked. Every field is now
    /// marked touched so its error becomes visible.
    Rejected(BTreeMap<FieldId, String>),
    /// The record was created; its echo was appended to the submitted list
    /// and the values were reset to defaults.
    Submitted(SubmittedUser),
    /// The POST failed. Values and field state are left exactly as they
    /// were; the failure is logged and nothing else happens.
    Failed,
}

/// Controller binding one field set, its values, and a submitter.
///
/// All state is owned by the controller and mutated only through its event
/// methods; the one suspending operation is the awaited POST inside
/// [`FormController::submit`]. Nothing guards against overlapping submits
/// from clones of the same submitter; a double-click issues two requests,
/// as it did in the original.
pub struct FormController<S> {
    fields: FieldSet,
    values: FormValues,
    meta: BTreeMap<FieldId, FieldMeta>,
    submitted: Vec<SubmittedUser>,
    submitter: Arc<S>,
}

impl<S> FormController<S>
where
    S: UserSubmitter,
{
    /// Controller with default values for every field.
    pub fn new(fields: FieldSet, submitter: Arc<S>) -> Self {
        Self::with_seed(fields, submitter, FormSeed::default())
    }

    /// Controller seeded with initial values from the embedding page.
    pub fn with_seed(fields: FieldSet, submitter: Arc<S>, seed: FormSeed) -> Self {
        let meta = fields
            .fields()
            .iter()
            .map(|descriptor| (descriptor.id, FieldMeta::default()))
            .collect();
        let mut controller = Self {
            fields,
            values: FormValues::initialize(seed),
            meta,
            submitted: Vec::new(),
            submitter,
        };
        controller.refresh_errors();
        controller
    }

    /// The active field set, in render order.
    pub fn field_set(&self) -> &FieldSet {
        &self.fields
    }

    /// Current field values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Presentation state of a field in the active set.
    pub fn meta(&self, field: FieldId) -> Option<&FieldMeta> {
        self.meta.get(&field)
    }

    /// The error to render next to a field: present only once the field has
    /// been touched.
    pub fn visible_error(&self, field: FieldId) -> Option<&str> {
        self.meta
            .get(&field)
            .filter(|meta| meta.touched)
            .and_then(|meta| meta.error.as_deref())
    }

    /// Users created so far, in arrival order. Append-only for the lifetime
    /// of the controller.
    pub fn submitted(&self) -> &[SubmittedUser] {
        self.submitted.as_slice()
    }

    /// Most recently created user.
    pub fn last_submitted(&self) -> Option<&SubmittedUser> {
        self.submitted.last()
    }

    /// Change event: apply input to a field and re-run the schema.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when the field is not part of the active set or
    /// the input does not fit it.
    pub fn apply(&mut self, field: FieldId, input: FieldInput) -> Result<(), InputError> {
        if !self.fields.contains(field) {
            return Err(InputError::UnknownField { field });
        }
        self.values.apply(field, input)?;
        self.refresh_errors();
        Ok(())
    }

    /// Blur event: mark the field touched, making its error visible.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnknownField`] when the field is not part of the
    /// active set.
    pub fn blur(&mut self, field: FieldId) -> Result<(), InputError> {
        let meta = self
            .meta
            .get_mut(&field)
            .ok_or(InputError::UnknownField { field })?;
        meta.touched = true;
        Ok(())
    }

    /// Submit attempt: full-schema validation, then at most one POST.
    ///
    /// Success appends the server echo to the submitted list and resets the
    /// form to defaults. Failure logs a diagnostic and leaves everything
    /// untouched.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let errors = validation::validate(&self.values, &self.fields);
        if !errors.is_empty() {
            for (field, meta) in &mut self.meta {
                meta.touched = true;
                meta.error = errors.get(field).cloned();
            }
            return SubmitOutcome::Rejected(errors);
        }

        match self.submitter.submit(&self.values).await {
            Ok(user) => {
                debug!(id = %user.id, "user created");
                self.submitted.push(user.clone());
                self.reset();
                SubmitOutcome::Submitted(user)
            }
            Err(submission_error) => {
                // Mirrors the original: a diagnostic only, no retry, no
                // user-facing surface, field state untouched.
                error!(error = %submission_error, "user submission failed");
                SubmitOutcome::Failed
            }
        }
    }

    fn reset(&mut self) {
        self.values = FormValues::default();
        for meta in self.meta.values_mut() {
            *meta = FieldMeta::default();
        }
        self.refresh_errors();
    }

    fn refresh_errors(&mut self) {
        let errors = validation::validate(&self.values, &self.fields);
        for (field, meta) in &mut self.meta {
            meta.error = errors.get(field).cloned();
        }
    }
}
