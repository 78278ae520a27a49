//! Test doubles for the discovery engine.
//!
//! `MockSource` serves scripted records keyed by object id, so engine and
//! session behavior can be exercised deterministically without network
//! access. Unknown ids come back as 404-style API errors; a failing
//! source reports a network error on every call.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use met_client::{ArtObject, Error as FetchError};

use crate::engine::RecordSource;

/// A record source that returns scripted records.
#[derive(Debug, Default)]
pub struct MockSource {
    records: HashMap<u32, ArtObject>,
    failure: Option<String>,
    calls: Mutex<Vec<u32>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, keyed by its object id.
    pub fn with_record(mut self, record: ArtObject) -> Self {
        self.records.insert(record.object_id, record);
        self
    }

    /// A source whose every fetch fails with a network error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Ids fetched so far, in call order.
    pub fn calls(&self) -> Vec<u32> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordSource for MockSource {
    async fn fetch_object(&self, id: u32) -> Result<ArtObject, FetchError> {
        self.calls.lock().unwrap().push(id);

        if let Some(message) = &self.failure {
            return Err(FetchError::Network(message.clone()));
        }

        self.records.get(&id).cloned().ok_or(FetchError::Api {
            status: 404,
            message: format!("ObjectID not found: {id}"),
        })
    }
}

/// A displayable record with every bannable attribute populated.
pub fn sample_object(id: u32) -> ArtObject {
    ArtObject {
        object_id: id,
        title: format!("Study No. {id}"),
        primary_image: format!("https://images.example.org/{id}.jpg"),
        artist_display_name: "Jan van Eyck".to_string(),
        culture: "Netherlandish".to_string(),
        department: "European Paintings".to_string(),
        object_date: "1435".to_string(),
        medium: "Oil on wood".to_string(),
        object_url: format!("https://collection.example.org/objects/{id}"),
    }
}

/// A record without a primary image; never accepted by the engine.
pub fn imageless_object(id: u32) -> ArtObject {
    ArtObject {
        primary_image: String::new(),
        ..sample_object(id)
    }
}
