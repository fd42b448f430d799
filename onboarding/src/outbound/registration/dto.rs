//! DTO for decoding created-user responses.
//!
//! The adapter decodes into this transport DTO first, then maps into the
//! domain echo (`SubmittedUser`) in one pass.

use serde::Deserialize;

use crate::domain::ports::{RecordId, SubmittedUser};
use crate::domain::values::FormValues;

#[derive(Debug, Deserialize)]
pub(super) struct CreatedUserDto {
    id: Option<RecordId>,
    #[serde(flatten)]
    record: FormValues,
}

impl CreatedUserDto {
    pub(super) fn into_submitted_user(self) -> Result<SubmittedUser, String> {
        let id = self
            .id
            .ok_or_else(|| String::from("created-user response is missing an id"))?;
        Ok(SubmittedUser {
            id,
            record: self.record,
        })
    }
}
