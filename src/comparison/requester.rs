//! Comparison requester: prompt in, validated comparison out.

use crate::collaborator::{Collaborator, IntegrationMode};
use crate::comparison::parser::parse_comparison_response;
use crate::comparison::prompt::{build_prompt, response_schema};
use crate::error::CompareError;
use crate::models::{ComparisonResult, HardwareKind, Slot, NOT_AVAILABLE};
use std::sync::Arc;
use std::time::Instant;

/// Issues one collaborator call per comparison and validates the reply.
///
/// There is no retry and no cache: identical comparisons are fetched again.
pub struct ComparisonRequester {
    collaborator: Arc<dyn Collaborator>,
    mode: IntegrationMode,
}

impl ComparisonRequester {
    pub fn new(collaborator: Arc<dyn Collaborator>, mode: IntegrationMode) -> Self {
        Self { collaborator, mode }
    }

    /// Compare two models of `kind`.
    ///
    /// Request failures and malformed replies both come back as
    /// [`CompareError`]; they are logged separately here.
    pub async fn compare(
        &self,
        kind: HardwareKind,
        name1: &str,
        name2: &str,
    ) -> Result<ComparisonResult, CompareError> {
        let name1 = name1.trim();
        let name2 = name2.trim();
        let prompt = build_prompt(kind, name1, name2);
        let schema = match self.mode {
            IntegrationMode::Structured => Some(response_schema(kind)),
            IntegrationMode::FreeText => None,
        };

        log::info!("[COMPARE] {} '{}' vs '{}' ({:?})", kind, name1, name2, self.mode);
        let started = Instant::now();

        let raw = self
            .collaborator
            .generate(prompt, schema)
            .await
            .map_err(|e| {
                log::warn!("[COMPARE] Request failed after {:?}: {}", started.elapsed(), e);
                CompareError::from(e)
            })?;

        let mut result = parse_comparison_response(&raw, kind).map_err(|e| {
            log::warn!("[COMPARE] Malformed response ({} chars): {}", raw.len(), e);
            CompareError::from(e)
        })?;

        // Fall back to the requested names so every result has a display model
        for (slot, requested) in [(Slot::One, name1), (Slot::Two, name2)] {
            if result.model(slot) == NOT_AVAILABLE {
                result.set_model(slot, requested.to_string());
            }
        }

        log::info!("[COMPARE] Done: {} comparison in {:?}", kind, started.elapsed());
        Ok(result)
    }
}
