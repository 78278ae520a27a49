//! End-to-end session tests through a scripted record source.
//!
//! These drive the full discover cycle: pool draw, fetch, ban filter,
//! history and error bookkeeping.

use artscout_core::testing::{imageless_object, sample_object, MockSource};
use artscout_core::{BanKind, CandidatePool, Session, HISTORY_LIMIT};
use rand::{rngs::StdRng, SeedableRng};

fn rng() -> StdRng {
    StdRng::seed_from_u64(99)
}

/// A source where every id in the pool resolves to a displayable record.
fn full_source(ids: &[u32]) -> MockSource {
    ids.iter()
        .fold(MockSource::new(), |s, &id| s.with_record(sample_object(id)))
}

#[tokio::test]
async fn test_discover_sets_current_and_history() {
    let pool = CandidatePool::new(vec![1, 2, 3]).unwrap();
    let source = full_source(pool.ids());
    let mut session = Session::new(pool);
    let mut rng = rng();

    assert!(session.discover(&source, &mut rng).await);

    let current = session.current().unwrap();
    assert!(current.has_image());
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history()[0].object_id, current.object_id);
    assert!(!session.loading());
    assert!(session.error().is_none());
}

#[tokio::test]
async fn test_twenty_five_discoveries_keep_newest_twenty() {
    let pool = CandidatePool::new(vec![7]).unwrap();
    let source = full_source(pool.ids());
    let mut session = Session::new(pool);
    let mut rng = rng();

    for _ in 0..25 {
        assert!(session.discover(&source, &mut rng).await);
    }

    assert_eq!(session.history().len(), HISTORY_LIMIT);
    // Most recent first; all 25 acceptances inserted, oldest 5 evicted.
    assert_eq!(session.history()[0].object_id, 7);
    assert_eq!(source.calls().len(), 25);
}

#[tokio::test]
async fn test_banned_unknown_artist_is_rejected() {
    let mut anonymous = sample_object(1);
    anonymous.artist_display_name = "Unknown".to_string();

    // One banned id, many acceptable ones.
    let mut ids = vec![1];
    ids.extend(std::iter::repeat(2).take(63));
    let pool = CandidatePool::new(ids).unwrap();
    let source = MockSource::new()
        .with_record(anonymous)
        .with_record(sample_object(2));

    let mut session = Session::new(pool);
    session.toggle_ban(BanKind::Artist, "Unknown");

    let mut rng = rng();
    assert!(session.discover(&source, &mut rng).await);
    assert_eq!(session.current().unwrap().object_id, 2);
}

#[tokio::test]
async fn test_unban_restores_acceptance() {
    let mut greek = sample_object(3);
    greek.culture = "Greek".to_string();

    let pool = CandidatePool::new(vec![3]).unwrap();
    let source = MockSource::new().with_record(greek);
    let mut session = Session::new(pool);
    let mut rng = rng();

    session.toggle_ban(BanKind::Culture, "Greek");
    assert!(!session.discover(&source, &mut rng).await);
    assert!(session.error().unwrap().contains("No acceptable artwork"));

    session.toggle_ban(BanKind::Culture, "Greek");
    assert!(session.discover(&source, &mut rng).await);
    assert_eq!(session.current().unwrap().culture, "Greek");
    assert!(session.error().is_none());
}

#[tokio::test]
async fn test_fetch_failure_surfaces_error_and_preserves_state() {
    let pool = CandidatePool::new(vec![1]).unwrap();
    let good = full_source(pool.ids());
    let mut session = Session::new(pool);
    let mut rng = rng();

    assert!(session.discover(&good, &mut rng).await);
    let current_before = session.current().unwrap().clone();
    let history_before = session.history().len();

    let failing = MockSource::failing("connection reset");
    assert!(!session.discover(&failing, &mut rng).await);

    let error = session.error().unwrap();
    assert!(!error.is_empty());
    assert!(error.contains("connection reset"));
    assert!(!session.loading());
    assert_eq!(session.current().unwrap(), &current_before);
    assert_eq!(session.history().len(), history_before);
}

#[tokio::test]
async fn test_error_cleared_at_start_of_next_cycle() {
    let pool = CandidatePool::new(vec![1]).unwrap();
    let mut session = Session::new(pool.clone());
    let mut rng = rng();

    let failing = MockSource::failing("timeout");
    assert!(!session.discover(&failing, &mut rng).await);
    assert!(session.error().is_some());

    let good = full_source(pool.ids());
    assert!(session.discover(&good, &mut rng).await);
    assert!(session.error().is_none());
}

#[tokio::test]
async fn test_imageless_catalog_exhausts_with_error() {
    let pool = CandidatePool::new(vec![1, 2]).unwrap();
    let source = MockSource::new()
        .with_record(imageless_object(1))
        .with_record(imageless_object(2));
    let mut session = Session::new(pool);
    let mut rng = rng();

    assert!(!session.discover(&source, &mut rng).await);
    assert!(session.error().unwrap().contains("2 attempts"));
    assert!(session.current().is_none());
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_select_from_history_leaves_bans_and_history_alone() {
    let pool = CandidatePool::new(vec![4]).unwrap();
    let source = full_source(pool.ids());
    let mut session = Session::new(pool);
    let mut rng = rng();

    session.discover(&source, &mut rng).await;
    session.discover(&source, &mut rng).await;
    session.toggle_ban(BanKind::Department, "Arms and Armor");

    assert!(session.select_from_history(1));
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.bans().len(), 1);
    assert!(session
        .bans()
        .is_banned(BanKind::Department, "Arms and Armor"));
}

#[tokio::test]
async fn test_ban_does_not_evict_current_record() {
    let pool = CandidatePool::new(vec![5]).unwrap();
    let source = full_source(pool.ids());
    let mut session = Session::new(pool);
    let mut rng = rng();

    session.discover(&source, &mut rng).await;
    let artist = session.current().unwrap().artist_display_name.clone();

    // Banning the displayed record's own artist is prospective only.
    session.toggle_ban(BanKind::Artist, &artist);
    assert_eq!(session.current().unwrap().artist_display_name, artist);
}
