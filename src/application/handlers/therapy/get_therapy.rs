//! GetTherapy - Query handler for a single therapy program.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, TherapyId};
use crate::domain::therapy::Therapy;
use crate::ports::TherapyRepository;

#[derive(Debug, Clone)]
pub struct GetTherapyQuery {
    pub therapy_id: TherapyId,
}

pub struct GetTherapyHandler {
    repository: Arc<dyn TherapyRepository>,
}

impl GetTherapyHandler {
    pub fn new(repository: Arc<dyn TherapyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetTherapyQuery) -> Result<Therapy, DomainError> {
        self.repository
            .find_by_id(&query.therapy_id)
            .await?
            .ok_or_else(|| not_found(&query.therapy_id))
    }
}

pub(super) fn not_found(id: &TherapyId) -> DomainError {
    DomainError::new(ErrorCode::TherapyNotFound, "Therapy not found")
        .with_detail("therapy_id", id.as_str())
}
