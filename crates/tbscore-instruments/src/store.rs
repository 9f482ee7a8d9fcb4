use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::info;
use uuid::Uuid;

use tbscore_core::models::assessment::ScoreResult;

use crate::config::EngineConfig;
use crate::error::ScoringError;
use crate::session::AssessmentSession;
use crate::Instrument;

type SharedSession = Arc<Mutex<AssessmentSession<'static>>>;

/// Open sessions keyed by id, for hosts serving several respondents.
///
/// Each session sits behind its own mutex so writes to one session are
/// serialized without blocking the others. Catalogs are shared read-only.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SharedSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session and return its id.
    pub fn open(&self, instrument: &'static dyn Instrument, config: EngineConfig) -> Uuid {
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(AssessmentSession::new(instrument, config)));
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, session);
        info!(session_id = %id, instrument = instrument.id(), "assessment session opened");
        id
    }

    /// Run `f` with exclusive access to one session.
    pub fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut AssessmentSession<'static>) -> T,
    ) -> Result<T, ScoringError> {
        let session = self.get(id)?;
        let mut guard = session.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&mut *guard))
    }

    pub fn record_answer(
        &self,
        id: Uuid,
        question_id: &str,
        value: u32,
    ) -> Result<(), ScoringError> {
        self.with_session(id, |s| s.record_answer(question_id, value))??;
        Ok(())
    }

    /// Finalize a session and drop it from the store. A session that
    /// refuses to finalize (e.g. incomplete) stays open.
    pub fn finalize(&self, id: Uuid) -> Result<ScoreResult, ScoringError> {
        let result = self.with_session(id, |s| s.finalize())??;
        self.close(id);
        Ok(result)
    }

    /// Abandon a session. Returns whether it existed.
    pub fn close(&self, id: Uuid) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, id: Uuid) -> Result<SharedSession, ScoringError> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or(ScoringError::UnknownSession(id))
    }
}
