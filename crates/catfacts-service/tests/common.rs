//! Common test utilities for catfacts integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;

use catfacts_service::{
    create_router, AppState, FactSource, FactSourceError, ServiceConfig, TranslateError,
    Translator,
};
use catfacts_store::{DatabaseConfig, SqliteStore};

/// Fact source returning a scripted fact, or failing when none is set.
#[derive(Default)]
pub struct StubSource {
    fact: Mutex<Option<String>>,
}

impl StubSource {
    /// Make the next calls return `fact`.
    pub fn set_fact(&self, fact: &str) {
        *self.fact.lock().unwrap() = Some(fact.to_string());
    }
}

#[async_trait]
impl FactSource for StubSource {
    async fn random_fact(&self) -> Result<String, FactSourceError> {
        self.fact
            .lock()
            .unwrap()
            .clone()
            .ok_or(FactSourceError::Status { status: 503 })
    }
}

/// Translator that prefixes text with `[es] `, or fails when told to.
#[derive(Default)]
pub struct StubTranslator {
    failing: Mutex<bool>,
    calls: AtomicUsize,
}

impl StubTranslator {
    /// Make the next calls fail.
    pub fn fail(&self) {
        *self.failing.lock().unwrap() = true;
    }

    /// Number of translation calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for StubTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if *self.failing.lock().unwrap() {
            return Err(TranslateError::Status { status: 500 });
        }
        Ok(format!("[es] {text}"))
    }
}

/// Default configuration pointed at an in-memory SQLite database.
pub fn test_config() -> ServiceConfig {
    ServiceConfig {
        database: DatabaseConfig::Sqlite {
            url: "sqlite::memory:".into(),
        },
        ..ServiceConfig::default()
    }
}

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Scripted fact source.
    pub source: Arc<StubSource>,
    /// Recording translator.
    pub translator: Arc<StubTranslator>,
}

impl TestHarness {
    /// Create a new test harness with a fresh in-memory database.
    pub async fn new() -> Self {
        let store = SqliteStore::in_memory()
            .await
            .expect("Failed to open in-memory store");

        let source = Arc::new(StubSource::default());
        let translator = Arc::new(StubTranslator::default());

        let state = AppState::with_collaborators(
            Arc::new(store),
            source.clone(),
            translator.clone(),
            test_config(),
        );
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            source,
            translator,
        }
    }

    /// Create a fact through the API and return its id.
    pub async fn create_fact(&self, fact_en: &str) -> i64 {
        let response = self
            .server
            .post("/api/hechos")
            .json(&serde_json::json!({ "fact_en": fact_en }))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let body: serde_json::Value = response.json();
        body["id"].as_i64().expect("id should be an integer")
    }
}
