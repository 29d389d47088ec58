//! Shared wiring for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    Router,
};
use http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use mindcare::adapters::http::{api_router, ApiState};
use mindcare::adapters::memory::starter_stores;
use mindcare::adapters::{InMemoryAchievementStore, InMemoryKeyValueStore, InMemoryTherapyRepository};

pub struct TestApp {
    pub achievements: InMemoryAchievementStore,
    pub therapies: InMemoryTherapyRepository,
    pub activity: InMemoryKeyValueStore,
}

impl TestApp {
    pub fn new(achievements: InMemoryAchievementStore) -> Self {
        Self {
            achievements,
            therapies: InMemoryTherapyRepository::new(),
            activity: InMemoryKeyValueStore::new(),
        }
    }

    /// The stores a memory-backed server starts with.
    pub fn starter(seed: bool) -> Self {
        let (achievements, therapies) = starter_stores(seed);
        Self {
            achievements,
            therapies,
            activity: InMemoryKeyValueStore::new(),
        }
    }

    pub fn router(&self) -> Router {
        let achievements = Arc::new(self.achievements.clone());
        api_router(ApiState {
            achievement_catalog: achievements.clone(),
            user_achievements: achievements,
            therapies: Arc::new(self.therapies.clone()),
            activity_logs: Arc::new(self.activity.clone()),
        })
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.send(Method::POST, uri, body).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }
}
