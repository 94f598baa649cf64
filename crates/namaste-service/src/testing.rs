//! Fixtures shared by the transport tests.

use std::sync::Arc;
use std::time::Duration;

use namaste_loader::CodeStore;
use namaste_resolver::{RecordStore, ResolverConfig, StoreError, StoreResult};
use namaste_types::{Category, CodeRecord};

use crate::server::TerminologyServer;

/// Small mapping set: two TM2 fever codes, one cough code, one unmapped record.
pub(crate) fn sample_store() -> CodeStore {
    let mut store = CodeStore::new();
    store.insert_records([
        CodeRecord::new("1", "NAM001", "Jvara", Category::Ayurveda)
            .with_description("Fever with headache")
            .with_target("SM2Z", "Fever disorder")
            .with_confidence(0.92),
        CodeRecord::new("2", "SID010", "Suram", Category::Siddha)
            .with_description("Fever with chills")
            .with_target("SM2Z", "Fever disorder")
            .with_confidence(0.81),
        CodeRecord::new("3", "UNA020", "Sual", Category::Unani)
            .with_description("Dry cough (night)")
            .with_target("SL1A", "Cough disorder")
            .with_confidence(0.7),
        CodeRecord::new("4", "YOG001", "Jvara pranayama", Category::Yoga)
            .with_description("Breathing practice for fever recovery"),
    ]);
    store
}

pub(crate) fn sample_server() -> TerminologyServer {
    TerminologyServer::from_code_store(
        sample_store(),
        ResolverConfig::default(),
        Duration::from_secs(5),
    )
}

/// Server over a store with `groups` distinct TM2 codes all matching "fever".
pub(crate) fn crowded_server(groups: usize) -> TerminologyServer {
    let mut store = CodeStore::new();
    store.insert_records((0..groups).map(|i| {
        CodeRecord::new(i.to_string(), format!("NAM{i:03}"), format!("Jvara {i}"), Category::Ayurveda)
            .with_description("Fever")
            .with_target(format!("TM{i:03}"), "Fever variant")
            .with_confidence(0.8)
    }));
    TerminologyServer::from_code_store(store, ResolverConfig::default(), Duration::from_secs(5))
}

/// Store that fails every query.
pub(crate) struct DownStore;

/// Store that sleeps before answering.
pub(crate) struct SlowStore(pub(crate) Duration);

pub(crate) fn server_over(store: impl RecordStore + 'static, timeout: Duration) -> TerminologyServer {
    TerminologyServer::new(Arc::new(store), ResolverConfig::default(), timeout)
}

impl RecordStore for DownStore {
    fn find_by_local_code(&self, _code: &str) -> StoreResult<Option<CodeRecord>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn find_by_any_code(&self, _code: &str) -> StoreResult<Vec<CodeRecord>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn find_by_target_code(&self, _code: &str) -> StoreResult<Option<CodeRecord>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn find_by_category(&self, _category: &Category) -> StoreResult<Vec<CodeRecord>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn find_by_title_prefix(&self, _term: &str) -> StoreResult<Vec<CodeRecord>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn free_text_search(&self, _escaped_literal: &str) -> StoreResult<Vec<CodeRecord>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn all_records(&self) -> StoreResult<Vec<CodeRecord>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

impl SlowStore {
    fn pause(&self) {
        std::thread::sleep(self.0);
    }
}

impl RecordStore for SlowStore {
    fn find_by_local_code(&self, _code: &str) -> StoreResult<Option<CodeRecord>> {
        self.pause();
        Ok(None)
    }

    fn find_by_any_code(&self, _code: &str) -> StoreResult<Vec<CodeRecord>> {
        self.pause();
        Ok(Vec::new())
    }

    fn find_by_target_code(&self, _code: &str) -> StoreResult<Option<CodeRecord>> {
        self.pause();
        Ok(None)
    }

    fn find_by_category(&self, _category: &Category) -> StoreResult<Vec<CodeRecord>> {
        self.pause();
        Ok(Vec::new())
    }

    fn find_by_title_prefix(&self, _term: &str) -> StoreResult<Vec<CodeRecord>> {
        self.pause();
        Ok(Vec::new())
    }

    fn free_text_search(&self, _escaped_literal: &str) -> StoreResult<Vec<CodeRecord>> {
        self.pause();
        Ok(Vec::new())
    }

    fn all_records(&self) -> StoreResult<Vec<CodeRecord>> {
        self.pause();
        Ok(Vec::new())
    }
}
