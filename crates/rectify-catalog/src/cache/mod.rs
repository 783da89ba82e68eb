//! Catalog cache: owns the fetch -> parse -> derive lifecycle and one
//! atomically replaced snapshot.
//!
//! Single-flight discipline: the state mutex plus a condvar guarantee at
//! most one load is ever in flight. Concurrent callers that arrive while
//! a load is outstanding wait on the condvar and receive that load's
//! outcome; the next caller after settlement starts a fresh load if one
//! is still needed.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tracing::{debug, info, warn};

use rectify_core::{
    CacheStatus, CatalogError, CatalogResult, CatalogSnapshot, DocumentSource, LoadError, Rule,
    RuleSet,
};

use crate::parser::parse_rules;
use crate::rule_sets::derive_rule_sets;

#[derive(Default)]
struct CacheState {
    snapshot: Option<Arc<CatalogSnapshot>>,
    status: CacheStatus,
    last_error: Option<LoadError>,
    loading: bool,
    /// Bumped by `clear()`. A load that settles under a stale epoch
    /// discards its result instead of resurrecting cleared state.
    epoch: u64,
}

/// Stateful owner of the catalog snapshot. Construct one instance and
/// hand it to whatever boundary layer needs it; there is no global.
pub struct CatalogCache {
    source: Arc<dyn DocumentSource>,
    state: Mutex<CacheState>,
    settled: Condvar,
}

impl CatalogCache {
    pub fn new(source: Arc<dyn DocumentSource>) -> CatalogCache {
        CatalogCache {
            source,
            state: Mutex::new(CacheState::default()),
            settled: Condvar::new(),
        }
    }

    /// The current snapshot, loading it first if none is held.
    pub fn snapshot(&self) -> CatalogResult<Arc<CatalogSnapshot>> {
        let mut state = self.lock_state();
        loop {
            if let Some(snap) = &state.snapshot {
                return Ok(Arc::clone(snap));
            }
            if !state.loading {
                break;
            }
            // Attach to the in-flight load.
            let epoch = state.epoch;
            state = self.wait_settled(state);
            if state.epoch == epoch && !state.loading && state.snapshot.is_none() {
                if let Some(err) = &state.last_error {
                    return Err(CatalogError::LoadFailed {
                        message: err.message.clone(),
                    });
                }
            }
            // Cleared or spuriously woken: re-evaluate from the top.
        }
        self.run_load(state)
    }

    /// The snapshot together with the status it is served under, read
    /// back under one lock so the pair cannot straddle a concurrent
    /// reload.
    pub fn snapshot_with_status(&self) -> CatalogResult<(Arc<CatalogSnapshot>, CacheStatus)> {
        let loaded = self.snapshot()?;
        let state = self.lock_state();
        match &state.snapshot {
            Some(snap) => Ok((Arc::clone(snap), state.status)),
            // Cleared between the load and this read: serve the load's
            // own result under the current status.
            None => Ok((loaded, state.status)),
        }
    }

    /// All rules from the current snapshot, loading if needed.
    pub fn rules(&self) -> CatalogResult<Vec<Rule>> {
        Ok(self.snapshot()?.rules.clone())
    }

    /// All derived rule sets from the current snapshot, loading if needed.
    pub fn rule_sets(&self) -> CatalogResult<Vec<RuleSet>> {
        Ok(self.snapshot()?.rule_sets.clone())
    }

    /// Force a reload. On failure with a non-empty prior snapshot the
    /// error is absorbed: the stale snapshot keeps being served and the
    /// failure is only visible through `status()` / `last_error()`.
    pub fn refresh(&self) -> CatalogResult<Arc<CatalogSnapshot>> {
        let mut state = self.lock_state();
        while state.loading {
            let epoch = state.epoch;
            state = self.wait_settled(state);
            if state.epoch != epoch {
                continue;
            }
            if !state.loading {
                if let Some(snap) = &state.snapshot {
                    return Ok(Arc::clone(snap));
                }
                if let Some(err) = &state.last_error {
                    return Err(CatalogError::LoadFailed {
                        message: err.message.clone(),
                    });
                }
            }
        }
        self.run_load(state)
    }

    pub fn status(&self) -> CacheStatus {
        self.lock_state().status
    }

    /// Metadata about the most recent failed load, if any.
    pub fn last_error(&self) -> Option<LoadError> {
        self.lock_state().last_error.clone()
    }

    /// Reset to the initial empty state, discarding the snapshot and
    /// detaching from any in-flight load.
    pub fn clear(&self) {
        let mut state = self.lock_state();
        state.snapshot = None;
        state.status = CacheStatus::Empty;
        state.last_error = None;
        state.loading = false;
        state.epoch += 1;
        drop(state);
        self.settled.notify_all();
    }

    /// Perform the load while holding loader duty. The fetch runs
    /// outside the lock; the snapshot replacement is a single reference
    /// swap under it.
    fn run_load(&self, mut state: MutexGuard<'_, CacheState>) -> CatalogResult<Arc<CatalogSnapshot>> {
        state.loading = true;
        state.status = CacheStatus::Loading;
        let epoch = state.epoch;
        drop(state);

        debug!("fetching catalog document");
        let outcome = self.source.fetch_document().map(|text| {
            let rules = parse_rules(&text);
            let rule_sets = derive_rule_sets(&rules);
            Arc::new(CatalogSnapshot {
                rules,
                rule_sets,
                fetched_at: Utc::now(),
            })
        });

        let mut state = self.lock_state();
        if state.epoch != epoch {
            // Cleared while in flight. The caller still gets its result,
            // but the cache state stays as clear() left it.
            drop(state);
            self.settled.notify_all();
            return outcome.map_err(CatalogError::from);
        }
        state.loading = false;

        match outcome {
            Ok(snapshot) => {
                info!(
                    rules = snapshot.rules.len(),
                    rule_sets = snapshot.rule_sets.len(),
                    "catalog loaded"
                );
                state.snapshot = Some(Arc::clone(&snapshot));
                state.status = CacheStatus::Loaded;
                state.last_error = None;
                drop(state);
                self.settled.notify_all();
                Ok(snapshot)
            }
            Err(err) => {
                let fallback = state
                    .snapshot
                    .as_ref()
                    .filter(|s| !s.rules.is_empty())
                    .cloned();
                state.status = CacheStatus::Error;
                state.last_error = Some(LoadError {
                    message: err.to_string(),
                    occurred_at: Utc::now(),
                    had_fallback: fallback.is_some(),
                });
                drop(state);
                self.settled.notify_all();
                match fallback {
                    Some(snapshot) => {
                        warn!(error = %err, "catalog reload failed, serving stale snapshot");
                        Ok(snapshot)
                    }
                    None => {
                        warn!(error = %err, "catalog load failed with no fallback");
                        Err(err.into())
                    }
                }
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn wait_settled<'a>(&self, state: MutexGuard<'a, CacheState>) -> MutexGuard<'a, CacheState> {
        self.settled
            .wait(state)
            .unwrap_or_else(PoisonError::into_inner)
    }
}
