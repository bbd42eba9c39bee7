use std::sync::{Arc, Mutex, RwLock};

use crate::{Term, WordFreq, WordFreqError};

/// A [`WordFreq`] usable from several threads.
///
/// Each `process` call holds the engine lock for the whole analyze and
/// finalize sequence. The resulting list is published as an immutable
/// snapshot so readers never wait on a running `process`.
#[derive(Debug)]
pub struct SharedWordFreq {
    engine: Mutex<WordFreq>,
    snapshot: RwLock<Arc<[Term]>>,
}

impl SharedWordFreq {
    pub fn new(engine: WordFreq) -> Self {
        let snapshot: Arc<[Term]> = engine.list().into();
        Self {
            engine: Mutex::new(engine),
            snapshot: RwLock::new(snapshot),
        }
    }

    pub fn process(&self, text: &str) -> Result<Arc<[Term]>, WordFreqError> {
        let mut engine = self.engine.lock().map_err(|_| WordFreqError::Poisoned)?;
        let list: Arc<[Term]> = engine.process(text).into();
        self.publish(Arc::clone(&list))?;
        Ok(list)
    }

    /// The list published by the last `process` call.
    pub fn list(&self) -> Result<Arc<[Term]>, WordFreqError> {
        let snapshot = self.snapshot.read().map_err(|_| WordFreqError::Poisoned)?;
        Ok(Arc::clone(&snapshot))
    }

    pub fn empty(&self) -> Result<(), WordFreqError> {
        let mut engine = self.engine.lock().map_err(|_| WordFreqError::Poisoned)?;
        engine.empty();
        self.publish(Arc::from(Vec::new()))
    }

    pub fn into_inner(self) -> Result<WordFreq, WordFreqError> {
        self.engine.into_inner().map_err(|_| WordFreqError::Poisoned)
    }

    fn publish(&self, list: Arc<[Term]>) -> Result<(), WordFreqError> {
        let mut snapshot = self.snapshot.write().map_err(|_| WordFreqError::Poisoned)?;
        *snapshot = list;
        Ok(())
    }
}
