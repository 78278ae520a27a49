//! Selector/retry engine for discover cycles.
//!
//! One cycle draws random candidate ids, fetches each, and accepts the
//! first record that has an image and matches no ban predicate. Rejected
//! candidates are retried silently; fetch failures end the cycle.

use async_trait::async_trait;
use met_client::{ArtObject, Error as FetchError, MetClient};
use rand::Rng;
use thiserror::Error;

use crate::ban::BanList;
use crate::pool::CandidatePool;

/// Source of artwork records by object id.
///
/// The seam between the engine and the network, so tests can script
/// responses (see [`crate::testing::MockSource`]).
#[async_trait]
pub trait RecordSource {
    async fn fetch_object(&self, id: u32) -> Result<ArtObject, FetchError>;
}

#[async_trait]
impl RecordSource for MetClient {
    async fn fetch_object(&self, id: u32) -> Result<ArtObject, FetchError> {
        MetClient::fetch_object(self, id).await
    }
}

/// Why a discover cycle failed.
#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("Failed to fetch artwork: {0}")]
    Source(#[from] FetchError),

    #[error("No acceptable artwork found after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Run one discover cycle: draw, fetch, filter, repeat.
///
/// Attempts are capped at the pool size; if every draw is rejected the
/// cycle fails with [`DiscoverError::Exhausted`] rather than looping
/// forever on a fully banned or imageless catalog. A fetch failure is
/// fatal for the cycle and is never retried here.
pub async fn discover<S, R>(
    source: &S,
    pool: &CandidatePool,
    bans: &BanList,
    rng: &mut R,
) -> Result<ArtObject, DiscoverError>
where
    S: RecordSource,
    R: Rng,
{
    let max_attempts = pool.len();

    for _ in 0..max_attempts {
        let id = pool.draw(rng);
        let record = source.fetch_object(id).await?;

        if record.has_image() && !bans.matches(&record) {
            return Ok(record);
        }
    }

    Err(DiscoverError::Exhausted {
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ban::BanKind;
    use crate::testing::{imageless_object, sample_object, MockSource};
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(17)
    }

    #[tokio::test]
    async fn test_accepts_displayable_record() {
        let source = MockSource::new().with_record(sample_object(42));
        let pool = CandidatePool::new(vec![42]).unwrap();

        let record = discover(&source, &pool, &BanList::new(), &mut rng())
            .await
            .unwrap();
        assert_eq!(record.object_id, 42);
    }

    #[tokio::test]
    async fn test_banned_record_is_retried() {
        let mut banned = sample_object(1);
        banned.artist_display_name = "Unknown".to_string();

        let source = MockSource::new()
            .with_record(banned)
            .with_record(sample_object(2));
        // Heavily weighted toward the acceptable id so the attempt cap
        // cannot plausibly trip before it is drawn.
        let mut ids = vec![1];
        ids.extend(std::iter::repeat(2).take(63));
        let pool = CandidatePool::new(ids).unwrap();

        let mut bans = BanList::new();
        bans.toggle(BanKind::Artist, "Unknown");

        let record = discover(&source, &pool, &bans, &mut rng()).await.unwrap();
        assert_eq!(record.object_id, 2);
    }

    #[tokio::test]
    async fn test_fully_banned_pool_exhausts() {
        let mut banned = sample_object(1);
        banned.culture = "Greek".to_string();

        let source = MockSource::new().with_record(banned);
        let pool = CandidatePool::new(vec![1]).unwrap();

        let mut bans = BanList::new();
        bans.toggle(BanKind::Culture, "Greek");

        let err = discover(&source, &pool, &bans, &mut rng())
            .await
            .unwrap_err();
        assert!(matches!(err, DiscoverError::Exhausted { attempts: 1 }));
    }

    #[tokio::test]
    async fn test_imageless_pool_exhausts() {
        let source = MockSource::new()
            .with_record(imageless_object(1))
            .with_record(imageless_object(2));
        let pool = CandidatePool::new(vec![1, 2]).unwrap();

        let err = discover(&source, &pool, &BanList::new(), &mut rng())
            .await
            .unwrap_err();
        match err {
            DiscoverError::Exhausted { attempts } => assert_eq!(attempts, 2),
            other => panic!("expected Exhausted, got {other:?}"),
        }
        assert_eq!(source.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_fatal_for_cycle() {
        let source = MockSource::failing("connection refused");
        let pool = CandidatePool::new(vec![1, 2, 3]).unwrap();

        let err = discover(&source, &pool, &BanList::new(), &mut rng())
            .await
            .unwrap_err();
        assert!(matches!(err, DiscoverError::Source(_)));
        // No automatic retry on failure.
        assert_eq!(source.calls().len(), 1);
    }
}
