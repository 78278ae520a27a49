//! Session state container.
//!
//! Owns everything the view renders: the current record, a bounded
//! most-recent-first history, the ban list, and the loading/error flags.
//! Transitions are plain methods with no rendering coupling.

use std::collections::VecDeque;

use met_client::ArtObject;
use rand::Rng;

use crate::ban::{BanKind, BanList};
use crate::engine::{self, RecordSource};
use crate::pool::CandidatePool;

/// Maximum number of history entries kept; oldest are evicted first.
pub const HISTORY_LIMIT: usize = 20;

/// A discovery session. Created once at startup, discarded on exit.
#[derive(Debug)]
pub struct Session {
    current: Option<ArtObject>,
    history: VecDeque<ArtObject>,
    bans: BanList,
    pool: CandidatePool,
    loading: bool,
    error: Option<String>,
}

impl Session {
    pub fn new(pool: CandidatePool) -> Self {
        Self {
            current: None,
            history: VecDeque::with_capacity(HISTORY_LIMIT),
            bans: BanList::new(),
            pool,
            loading: false,
            error: None,
        }
    }

    /// Run one discover cycle against the session's pool and bans.
    ///
    /// On acceptance the record becomes `current` and is prepended to
    /// history; on failure a user-facing message lands in `error` and
    /// `current`/`history` are untouched. Returns whether a record was
    /// accepted.
    pub async fn discover<S, R>(&mut self, source: &S, rng: &mut R) -> bool
    where
        S: RecordSource,
        R: Rng,
    {
        self.loading = true;
        self.error = None;

        let result = engine::discover(source, &self.pool, &self.bans, rng).await;
        self.loading = false;

        match result {
            Ok(record) => {
                self.accept(record);
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }

    /// Toggle a ban predicate. Filtering is prospective: the current
    /// record stays displayed even if it would now be rejected. Returns
    /// whether the predicate is active after the call.
    pub fn toggle_ban(&mut self, kind: BanKind, value: &str) -> bool {
        self.bans.toggle(kind, value)
    }

    /// Display a record from history without re-fetching or mutating
    /// history. Out-of-range indices are ignored. Returns whether the
    /// selection happened.
    pub fn select_from_history(&mut self, index: usize) -> bool {
        match self.history.get(index) {
            Some(record) => {
                self.current = Some(record.clone());
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> Option<&ArtObject> {
        self.current.as_ref()
    }

    /// Previously accepted records, most recent first.
    pub fn history(&self) -> &VecDeque<ArtObject> {
        &self.history
    }

    pub fn bans(&self) -> &BanList {
        &self.bans
    }

    pub fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Accept a record: it becomes current and enters history, evicting
    /// the oldest entry past the limit. One insertion per acceptance,
    /// even for a repeated id.
    fn accept(&mut self, record: ArtObject) {
        self.history.push_front(record.clone());
        self.history.truncate(HISTORY_LIMIT);
        self.current = Some(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_object;

    fn session() -> Session {
        Session::new(CandidatePool::new(vec![1]).unwrap())
    }

    #[test]
    fn test_new_session_is_empty() {
        let s = session();
        assert!(s.current().is_none());
        assert!(s.history().is_empty());
        assert!(s.bans().is_empty());
        assert!(!s.loading());
        assert!(s.error().is_none());
    }

    #[test]
    fn test_accept_sets_current_and_prepends_history() {
        let mut s = session();
        s.accept(sample_object(1));
        s.accept(sample_object(2));

        assert_eq!(s.current().unwrap().object_id, 2);
        assert_eq!(s.history()[0].object_id, 2);
        assert_eq!(s.history()[1].object_id, 1);
    }

    #[test]
    fn test_history_bounded_to_limit_oldest_evicted() {
        let mut s = session();
        for id in 1..=25 {
            s.accept(sample_object(id));
        }

        assert_eq!(s.history().len(), HISTORY_LIMIT);
        assert_eq!(s.history()[0].object_id, 25);
        assert_eq!(s.history()[HISTORY_LIMIT - 1].object_id, 6);
    }

    #[test]
    fn test_repeated_id_enters_history_each_time() {
        let mut s = session();
        s.accept(sample_object(9));
        s.accept(sample_object(9));
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn test_select_from_history_no_mutation() {
        let mut s = session();
        s.accept(sample_object(1));
        s.accept(sample_object(2));

        assert!(s.select_from_history(1));
        assert_eq!(s.current().unwrap().object_id, 1);
        // History itself untouched.
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.history()[0].object_id, 2);
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let mut s = session();
        s.accept(sample_object(1));

        assert!(!s.select_from_history(5));
        assert_eq!(s.current().unwrap().object_id, 1);
    }

    #[test]
    fn test_toggle_ban_is_its_own_inverse() {
        let mut s = session();
        assert!(s.toggle_ban(crate::BanKind::Culture, "Greek"));
        assert!(!s.toggle_ban(crate::BanKind::Culture, "Greek"));
        assert!(s.bans().is_empty());
    }
}
