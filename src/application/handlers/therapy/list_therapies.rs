//! ListTherapies - Query handler for the therapy management screen.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::therapy::Therapy;
use crate::ports::TherapyRepository;

pub struct ListTherapiesHandler {
    repository: Arc<dyn TherapyRepository>,
}

impl ListTherapiesHandler {
    pub fn new(repository: Arc<dyn TherapyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Therapy>, DomainError> {
        self.repository.list_all().await
    }
}
