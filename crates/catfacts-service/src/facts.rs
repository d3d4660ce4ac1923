//! Fact operations: fetch, create, list, read, update and delete.
//!
//! [`FactService`] owns the auto-translation policy. It holds no state of its own between
//! calls; everything durable lives in the [`FactStore`]. Every fetch and translation
//! happens before the single write of an operation, so a failed upstream call never
//! leaves a row behind.

use std::sync::Arc;

use catfacts_core::{
    CatFact, FactError, FactId, FactPage, FactPatch, NewFact, Result, DEFAULT_PAGE_LIMIT,
};
use catfacts_store::FactStore;

use crate::fact_source::FactSource;
use crate::translate::Translator;

/// Business rules for cat facts.
#[derive(Clone)]
pub struct FactService {
    store: Arc<dyn FactStore>,
    source: Arc<dyn FactSource>,
    translator: Arc<dyn Translator>,
}

impl FactService {
    /// Create a service over the given store and collaborators.
    #[must_use]
    pub fn new(
        store: Arc<dyn FactStore>,
        source: Arc<dyn FactSource>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            store,
            source,
            translator,
        }
    }

    /// Fetch a random fact, translate it and store the pair.
    pub async fn fetch_random_and_store(&self) -> Result<CatFact> {
        let fact_en = self.source.random_fact().await?;
        let fact_es = self.translate(&fact_en).await?;
        self.insert(fact_en, fact_es).await
    }

    /// Store a caller-supplied fact, translating it when no Spanish text is given.
    pub async fn create_manual(
        &self,
        fact_en: Option<String>,
        fact_es: Option<String>,
    ) -> Result<CatFact> {
        let new_fact = NewFact::validate(fact_en, fact_es)?;

        let fact_es = match new_fact.translation_source() {
            Some(text) => self.translate(text).await?,
            None => new_fact.fact_es.unwrap_or_default(),
        };

        self.insert(new_fact.fact_en, fact_es).await
    }

    /// List facts newest first.
    ///
    /// `limit` defaults to [`DEFAULT_PAGE_LIMIT`] and `offset` to 0. The total counts every
    /// stored fact, independent of the window.
    pub async fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<FactPage> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        let offset = offset.unwrap_or(0);

        let total = self.store.count().await?;
        let facts = self.store.list(limit, offset).await?;

        Ok(FactPage {
            total,
            limit,
            offset,
            facts,
        })
    }

    /// Check that the store answers a trivial query.
    pub async fn store_reachable(&self) -> Result<()> {
        self.store.count().await?;
        Ok(())
    }

    /// Get one fact.
    pub async fn get(&self, id: FactId) -> Result<CatFact> {
        self.store
            .get(id)
            .await?
            .ok_or(FactError::NotFound(id))
    }

    /// Apply a partial update.
    ///
    /// A new English text without Spanish text triggers a fresh translation that replaces
    /// the stored Spanish.
    pub async fn update(&self, id: FactId, patch: FactPatch) -> Result<CatFact> {
        let current = self.get(id).await?;

        let translated = match patch.translation_source() {
            Some(text) => Some(self.translate(text).await?),
            None => None,
        };

        let updated = patch.apply(current, translated);

        // The row may have been deleted while we were translating.
        if !self.store.update(&updated).await? {
            return Err(FactError::NotFound(id));
        }

        tracing::info!(fact_id = %id, "Fact updated");
        Ok(updated)
    }

    /// Delete one fact, returning its id.
    pub async fn delete(&self, id: FactId) -> Result<FactId> {
        if !self.store.delete(id).await? {
            return Err(FactError::NotFound(id));
        }

        tracing::info!(fact_id = %id, "Fact deleted");
        Ok(id)
    }

    /// Delete every fact, returning how many were removed.
    pub async fn delete_all(&self) -> Result<u64> {
        let removed = self.store.delete_all().await?;
        tracing::warn!(removed, "All facts deleted");
        Ok(removed)
    }

    async fn translate(&self, text: &str) -> Result<String> {
        let translated = self.translator.translate(text).await?;
        if translated.trim().is_empty() {
            return Err(FactError::Translation("empty translation".into()));
        }
        Ok(translated)
    }

    async fn insert(&self, fact_en: String, fact_es: String) -> Result<CatFact> {
        let id = self.store.insert(&fact_en, &fact_es).await?;
        tracing::info!(fact_id = %id, "Fact created");

        Ok(CatFact {
            id,
            fact_en,
            fact_es,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use catfacts_store::SqliteStore;

    use super::*;
    use crate::fact_source::FactSourceError;
    use crate::translate::TranslateError;

    struct StubSource(Option<&'static str>);

    #[async_trait]
    impl FactSource for StubSource {
        async fn random_fact(&self) -> std::result::Result<String, FactSourceError> {
            match self.0 {
                Some(fact) => Ok(fact.to_string()),
                None => Err(FactSourceError::Status { status: 502 }),
            }
        }
    }

    #[derive(Default)]
    struct StubTranslator {
        fail: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Translator for StubTranslator {
        async fn translate(&self, text: &str) -> std::result::Result<String, TranslateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(TranslateError::Status { status: 500 })
            } else {
                Ok(format!("[es] {text}"))
            }
        }
    }

    struct Fixture {
        service: FactService,
        store: Arc<SqliteStore>,
        translator: Arc<StubTranslator>,
    }

    async fn fixture(source: StubSource, translator: StubTranslator) -> Fixture {
        let store = Arc::new(SqliteStore::in_memory().await.unwrap());
        let translator = Arc::new(translator);
        let service = FactService::new(store.clone(), Arc::new(source), translator.clone());
        Fixture {
            service,
            store,
            translator,
        }
    }

    async fn default_fixture() -> Fixture {
        fixture(StubSource(Some("Cats purr.")), StubTranslator::default()).await
    }

    #[tokio::test]
    async fn create_without_spanish_translates() {
        let fx = default_fixture().await;

        let fact = fx
            .service
            .create_manual(Some("Cats sleep 70% of their lives.".into()), None)
            .await
            .unwrap();

        assert_eq!(fact.fact_en, "Cats sleep 70% of their lives.");
        assert_eq!(fact.fact_es, "[es] Cats sleep 70% of their lives.");
        assert_eq!(fx.translator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn create_with_spanish_skips_translation() {
        let fx = default_fixture().await;

        let fact = fx
            .service
            .create_manual(Some("Cats purr.".into()), Some("Ronronean.".into()))
            .await
            .unwrap();

        assert_eq!(fact.fact_es, "Ronronean.");
        assert_eq!(fx.translator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn create_with_empty_english_is_validation_error() {
        let fx = default_fixture().await;

        let err = fx
            .service
            .create_manual(Some(String::new()), Some("Hola".into()))
            .await
            .unwrap_err();

        assert!(matches!(err, FactError::Validation(_)));
        assert_eq!(fx.store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn get_returns_what_create_stored() {
        let fx = default_fixture().await;
        let created = fx
            .service
            .create_manual(Some("Cats purr.".into()), None)
            .await
            .unwrap();

        let fetched = fx.service.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn random_fact_is_translated_and_stored() {
        let fx = default_fixture().await;

        let fact = fx.service.fetch_random_and_store().await.unwrap();
        assert_eq!(fact.fact_en, "Cats purr.");
        assert_eq!(fact.fact_es, "[es] Cats purr.");
        assert_eq!(fx.store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn random_fact_upstream_failure_writes_nothing() {
        let fx = fixture(StubSource(None), StubTranslator::default()).await;

        let err = fx.service.fetch_random_and_store().await.unwrap_err();
        assert!(matches!(err, FactError::Upstream(_)));
        assert_eq!(fx.store.count().await.unwrap(), 0);
        assert_eq!(fx.translator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn random_fact_translation_failure_writes_nothing() {
        let translator = StubTranslator {
            fail: true,
            ..StubTranslator::default()
        };
        let fx = fixture(StubSource(Some("Cats purr.")), translator).await;

        let err = fx.service.fetch_random_and_store().await.unwrap_err();
        assert!(matches!(err, FactError::Translation(_)));
        assert_eq!(fx.store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_english_only_retranslates() {
        let fx = default_fixture().await;
        let created = fx
            .service
            .create_manual(Some("Cats purr.".into()), Some("Ronronean.".into()))
            .await
            .unwrap();

        let updated = fx
            .service
            .update(created.id, FactPatch::new(Some("New text".into()), None))
            .await
            .unwrap();

        assert_eq!(updated.fact_en, "New text");
        assert_eq!(updated.fact_es, "[es] New text");
        assert_eq!(fx.service.get(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_with_empty_spanish_retranslates() {
        let fx = default_fixture().await;
        let created = fx
            .service
            .create_manual(Some("Cats purr.".into()), Some("Ronronean.".into()))
            .await
            .unwrap();

        let updated = fx
            .service
            .update(
                created.id,
                FactPatch::new(Some("New text".into()), Some(String::new())),
            )
            .await
            .unwrap();

        assert_eq!(updated.fact_es, "[es] New text");
    }

    #[tokio::test]
    async fn update_spanish_only_keeps_english() {
        let fx = default_fixture().await;
        let created = fx
            .service
            .create_manual(Some("Cats purr.".into()), None)
            .await
            .unwrap();
        let calls_before = fx.translator.calls.load(Ordering::SeqCst);

        let updated = fx
            .service
            .update(created.id, FactPatch::new(None, Some("Manual".into())))
            .await
            .unwrap();

        assert_eq!(updated.fact_en, "Cats purr.");
        assert_eq!(updated.fact_es, "Manual");
        assert_eq!(fx.translator.calls.load(Ordering::SeqCst), calls_before);
    }

    #[tokio::test]
    async fn update_translation_failure_keeps_stored_fact() {
        let translator = StubTranslator {
            fail: true,
            ..StubTranslator::default()
        };
        let fx = fixture(StubSource(None), translator).await;
        let created = fx
            .service
            .create_manual(Some("Cats purr.".into()), Some("Ronronean.".into()))
            .await
            .unwrap();

        let err = fx
            .service
            .update(created.id, FactPatch::new(Some("New text".into()), None))
            .await
            .unwrap_err();

        assert!(matches!(err, FactError::Translation(_)));
        assert_eq!(fx.service.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn update_missing_fact_is_not_found() {
        let fx = default_fixture().await;

        let err = fx
            .service
            .update(FactId::new(404), FactPatch::new(None, Some("x".into())))
            .await
            .unwrap_err();

        assert!(matches!(err, FactError::NotFound(id) if id == FactId::new(404)));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let fx = default_fixture().await;
        let created = fx
            .service
            .create_manual(Some("Cats purr.".into()), None)
            .await
            .unwrap();

        assert_eq!(fx.service.delete(created.id).await.unwrap(), created.id);
        assert!(matches!(
            fx.service.get(created.id).await,
            Err(FactError::NotFound(_))
        ));
        assert!(matches!(
            fx.service.delete(created.id).await,
            Err(FactError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn list_returns_newest_window_and_total() {
        let fx = default_fixture().await;
        let mut ids = Vec::new();
        for i in 0..5 {
            let fact = fx
                .service
                .create_manual(Some(format!("Fact {i}")), None)
                .await
                .unwrap();
            ids.push(fact.id);
        }

        let page = fx.service.list(Some(2), Some(0)).await.unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.limit, 2);
        assert_eq!(page.offset, 0);
        let page_ids: Vec<_> = page.facts.iter().map(|f| f.id).collect();
        assert_eq!(page_ids, vec![ids[4], ids[3]]);
    }

    #[tokio::test]
    async fn list_defaults() {
        let fx = default_fixture().await;
        let page = fx.service.list(None, None).await.unwrap();
        assert_eq!(page.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(page.offset, 0);
        assert_eq!(page.total, 0);
        assert!(page.facts.is_empty());
    }

    #[tokio::test]
    async fn delete_all_reports_count_and_empties_store() {
        let fx = default_fixture().await;
        for i in 0..3 {
            fx.service
                .create_manual(Some(format!("Fact {i}")), None)
                .await
                .unwrap();
        }

        assert_eq!(fx.service.delete_all().await.unwrap(), 3);
        let page = fx.service.list(None, None).await.unwrap();
        assert_eq!(page.total, 0);
        assert!(page.facts.is_empty());
        assert_eq!(fx.service.delete_all().await.unwrap(), 0);
    }
}
