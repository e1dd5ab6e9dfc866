//! In-Memory Assessment Store Adapter
//!
//! Keeps each record as the JSON text a browser key-value store would hold,
//! under the same `readinessAssessment_<name>` key.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::MotivationScore;
use crate::domain::foundation::PatientName;
use crate::ports::{storage_key, AssessmentStore, StoreError};

/// In-memory storage for finished assessments
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentStore {
    records: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryAssessmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw JSON stored for a patient, if any
    pub async fn raw(&self, patient: &PatientName) -> Option<String> {
        self.records.read().await.get(&storage_key(patient)).cloned()
    }

    /// Stores raw text under a patient's key, bypassing serialization
    pub async fn insert_raw(&self, patient: &PatientName, json: impl Into<String>) {
        self.records
            .write()
            .await
            .insert(storage_key(patient), json.into());
    }

    /// Get the number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl AssessmentStore for InMemoryAssessmentStore {
    async fn save(&self, patient: &PatientName, score: &MotivationScore) -> Result<(), StoreError> {
        let json = serde_json::to_string(score)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;
        self.records.write().await.insert(storage_key(patient), json);
        Ok(())
    }

    async fn load(&self, patient: &PatientName) -> Result<Option<MotivationScore>, StoreError> {
        let records = self.records.read().await;
        records
            .get(&storage_key(patient))
            .map(|json| {
                serde_json::from_str(json)
                    .map_err(|e| StoreError::DeserializationFailed(e.to_string()))
            })
            .transpose()
    }

    async fn exists(&self, patient: &PatientName) -> Result<bool, StoreError> {
        Ok(self.records.read().await.contains_key(&storage_key(patient)))
    }

    async fn delete(&self, patient: &PatientName) -> Result<(), StoreError> {
        self.records.write().await.remove(&storage_key(patient));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::MotivationStage;
    use crate::domain::foundation::RulerRating;

    fn patient() -> PatientName {
        PatientName::new("Maria").unwrap()
    }

    fn score(value: f64) -> MotivationScore {
        MotivationScore::new(
            value,
            RulerRating::try_new(9).unwrap(),
            RulerRating::try_new(8).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_then_load_returns_same_score() {
        let store = InMemoryAssessmentStore::new();
        store.save(&patient(), &score(5.0)).await.unwrap();

        let loaded = store.load(&patient()).await.unwrap().unwrap();
        assert_eq!(loaded, score(5.0));
        assert_eq!(loaded.stage(), MotivationStage::Maintenance);
    }

    #[tokio::test]
    async fn stores_camel_case_json() {
        let store = InMemoryAssessmentStore::new();
        store.save(&patient(), &score(2.0)).await.unwrap();

        let raw = store.raw(&patient()).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["stage"], "contemplation");
        assert_eq!(value["importanceRating"], 9);
        assert_eq!(value["confidenceRating"], 8);
    }

    #[tokio::test]
    async fn missing_patient_loads_none() {
        let store = InMemoryAssessmentStore::new();
        assert_eq!(store.load(&patient()).await.unwrap(), None);
        assert!(!store.exists(&patient()).await.unwrap());
    }

    #[tokio::test]
    async fn save_replaces_previous_record() {
        let store = InMemoryAssessmentStore::new();
        store.save(&patient(), &score(2.0)).await.unwrap();
        store.save(&patient(), &score(4.0)).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.load(&patient()).await.unwrap(), Some(score(4.0)));
    }

    #[tokio::test]
    async fn corrupt_record_fails_to_deserialize() {
        let store = InMemoryAssessmentStore::new();
        store.insert_raw(&patient(), "{not json").await;

        let result = store.load(&patient()).await;
        assert!(matches!(result, Err(StoreError::DeserializationFailed(_))));
    }

    #[tokio::test]
    async fn mismatched_stage_is_rejected() {
        let store = InMemoryAssessmentStore::new();
        store
            .insert_raw(
                &patient(),
                r#"{"stage":"maintenance","score":1.0,"importanceRating":5,"confidenceRating":5}"#,
            )
            .await;

        assert!(store.load(&patient()).await.is_err());
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = InMemoryAssessmentStore::new();
        store.save(&patient(), &score(3.0)).await.unwrap();
        store.delete(&patient()).await.unwrap();

        assert!(store.is_empty().await);
        store.delete(&patient()).await.unwrap();
    }
}
