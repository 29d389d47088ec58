//! In-memory therapy programs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, TherapyId};
use crate::domain::therapy::{Therapy, TherapySettings};
use crate::ports::TherapyRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryTherapyRepository {
    therapies: Arc<RwLock<HashMap<TherapyId, Therapy>>>,
}

impl InMemoryTherapyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_therapies(therapies: Vec<Therapy>) -> Self {
        let map = therapies.into_iter().map(|t| (t.id.clone(), t)).collect();
        Self {
            therapies: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn insert(&self, therapy: Therapy) {
        self.therapies.write().await.insert(therapy.id.clone(), therapy);
    }
}

#[async_trait]
impl TherapyRepository for InMemoryTherapyRepository {
    async fn list_all(&self) -> Result<Vec<Therapy>, DomainError> {
        let mut therapies: Vec<Therapy> = self.therapies.read().await.values().cloned().collect();
        therapies.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(therapies)
    }

    async fn find_by_id(&self, id: &TherapyId) -> Result<Option<Therapy>, DomainError> {
        Ok(self.therapies.read().await.get(id).cloned())
    }

    async fn update_settings(
        &self,
        id: &TherapyId,
        settings: &TherapySettings,
    ) -> Result<Option<Therapy>, DomainError> {
        let mut therapies = self.therapies.write().await;
        Ok(therapies.get_mut(id).map(|therapy| {
            therapy.apply_settings(settings.clone());
            therapy.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn therapy(id: &str, title: &str) -> Therapy {
        Therapy::new(
            TherapyId::new(id).unwrap(),
            TherapySettings {
                title: title.to_string(),
                ..TherapySettings::default()
            },
        )
    }

    #[tokio::test]
    async fn lists_by_title() {
        let repo = InMemoryTherapyRepository::with_therapies(vec![
            therapy("b", "Mindfulness"),
            therapy("a", "Exposure"),
        ]);

        let titles: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["Exposure", "Mindfulness"]);
    }

    #[tokio::test]
    async fn update_settings_returns_stored_record() {
        let repo = InMemoryTherapyRepository::with_therapies(vec![therapy("cbt", "CBT")]);
        let id = TherapyId::new("cbt").unwrap();
        let settings = TherapySettings {
            title: "CBT Basics".into(),
            sessions: 6,
            ..TherapySettings::default()
        };

        let updated = repo.update_settings(&id, &settings).await.unwrap().unwrap();
        assert_eq!(updated.title, "CBT Basics");
        assert_eq!(repo.find_by_id(&id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_unknown_is_none() {
        let repo = InMemoryTherapyRepository::new();
        let id = TherapyId::new("missing").unwrap();
        let result = repo
            .update_settings(&id, &TherapySettings::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
