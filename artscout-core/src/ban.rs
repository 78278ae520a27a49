//! Attribute ban list.
//!
//! A ban predicate is a `(kind, value)` pair excluding every record whose
//! corresponding attribute equals the value exactly. Toggling the same
//! pair twice returns the list to its original state.

use std::fmt;

use met_client::ArtObject;

/// Which record attribute a ban predicate applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BanKind {
    Artist,
    Culture,
    Department,
    Period,
}

impl BanKind {
    /// The record field this kind matches against.
    pub fn value_of<'a>(&self, record: &'a ArtObject) -> &'a str {
        match self {
            BanKind::Artist => &record.artist_display_name,
            BanKind::Culture => &record.culture,
            BanKind::Department => &record.department,
            BanKind::Period => &record.object_date,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BanKind::Artist => "artist",
            BanKind::Culture => "culture",
            BanKind::Department => "department",
            BanKind::Period => "period",
        }
    }
}

impl fmt::Display for BanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One exclusion rule: records whose `kind` attribute equals `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanPredicate {
    pub kind: BanKind,
    pub value: String,
}

/// The active set of ban predicates, kept in insertion order for display.
///
/// Membership is by exact `(kind, value)` equality; no two identical
/// predicates coexist.
#[derive(Debug, Clone, Default)]
pub struct BanList {
    entries: Vec<BanPredicate>,
}

impl BanList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a predicate: remove it if present, add it otherwise.
    ///
    /// Empty values are silently ignored. Returns whether the predicate
    /// is active after the call.
    pub fn toggle(&mut self, kind: BanKind, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }

        if let Some(pos) = self.position(kind, value) {
            self.entries.remove(pos);
            false
        } else {
            self.entries.push(BanPredicate {
                kind,
                value: value.to_string(),
            });
            true
        }
    }

    /// Whether this exact `(kind, value)` pair is currently banned.
    pub fn is_banned(&self, kind: BanKind, value: &str) -> bool {
        self.position(kind, value).is_some()
    }

    /// Whether any active predicate matches the record.
    ///
    /// Comparison is case-sensitive string equality on the mapped field.
    pub fn matches(&self, record: &ArtObject) -> bool {
        self.entries
            .iter()
            .any(|p| p.kind.value_of(record) == p.value)
    }

    /// Active predicates in insertion order.
    pub fn entries(&self) -> &[BanPredicate] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, kind: BanKind, value: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|p| p.kind == kind && p.value == value)
    }
}
