//! Candidate object-id pool.
//!
//! The pool is the set of ids a discover cycle may draw from. It is a
//! plain value so tests and alternate catalogs can inject their own.

use rand::Rng;

/// Curated object ids known to resolve in the collection, mostly from
/// the European Paintings department.
const DEFAULT_OBJECT_IDS: &[u32] = &[
    436524, 437112, 437113, 459193, 436121, 437438, 437439, 436105, 436106,
    437440, 459054, 437441, 436107, 436108, 437442, 436109, 437443, 436110,
    437444, 436111, 437445, 436112, 437446, 436113, 437447, 436114, 437448,
    436115, 437449, 436116, 437450, 436117, 437451, 436118, 437452, 436119,
    437453, 436120, 437454, 459055, 437455, 436122, 437456, 436123, 437457,
    436124, 437458, 436125, 437459, 436126, 437460, 436127, 437461, 436128,
    437462, 436129, 437463, 436130, 437464, 436131, 437465, 436132, 437466,
    436133, 437467, 436134, 437468, 436135, 437469, 436136,
];

/// A non-empty pool of candidate object ids.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    ids: Vec<u32>,
}

impl CandidatePool {
    /// Build a pool from explicit ids. Returns `None` for an empty list,
    /// since a pool with nothing to draw is unusable.
    pub fn new(ids: Vec<u32>) -> Option<Self> {
        if ids.is_empty() {
            None
        } else {
            Some(Self { ids })
        }
    }

    /// Draw one id uniformly at random. Draws are independent; the same
    /// id may come up repeatedly.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> u32 {
        self.ids[rng.gen_range(0..self.ids.len())]
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        // Guaranteed non-empty by construction.
        false
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }
}

impl Default for CandidatePool {
    fn default() -> Self {
        Self {
            ids: DEFAULT_OBJECT_IDS.to_vec(),
        }
    }
}
