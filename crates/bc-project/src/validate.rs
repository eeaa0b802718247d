//! Case file validation logic.

use crate::schema::CaseFile;
use bc_cycle::{DomainError, SweepError};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid cycle: {0}")]
    Cycle(#[from] DomainError),

    #[error("Invalid sweep '{id}': {source}")]
    Sweep { id: String, source: SweepError },
}

pub fn validate_case(case: &CaseFile) -> Result<(), ValidationError> {
    if case.version == 0 || case.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    if case.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: format!("{:?}", case.name),
            reason: "must not be empty".to_string(),
        });
    }

    case.cycle.to_inputs().validate()?;

    let mut sweep_ids = HashSet::new();
    for sweep in &case.sweeps {
        if sweep.id.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "sweeps.id".to_string(),
                value: format!("{:?}", sweep.id),
                reason: "must not be empty".to_string(),
            });
        }
        if !sweep_ids.insert(&sweep.id) {
            return Err(ValidationError::DuplicateId {
                id: sweep.id.clone(),
                context: "sweeps".to_string(),
            });
        }
        sweep
            .to_definition()
            .map_err(|source| ValidationError::Sweep {
                id: sweep.id.clone(),
                source,
            })?;
    }

    Ok(())
}
