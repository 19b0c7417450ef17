//! Ordered name catalogs.
//!
//! A catalog is the fixed, ordered list of round names or court names a
//! tournament uses. Order is significant: availability queries walk a
//! catalog front to back, so rounds are offered in bracket order and
//! courts in numbering order.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use thiserror::Error;

/// Why a list of names could not become a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No names were given.
    #[error("catalog is empty")]
    Empty,
    /// The same name appears twice.
    #[error("duplicate name: {0}")]
    Duplicate(String),
}

/// An ordered, duplicate-free list of names with a name → position map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    names: Vec<String>,
    #[serde(skip)]
    positions: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty or duplicated lists.
    pub fn new<I, S>(names: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut positions = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if positions.insert(name.clone(), i).is_some() {
                return Err(CatalogError::Duplicate(name.clone()));
            }
        }

        Ok(Self { names, positions })
    }

    /// Builds a catalog from a fixed, known-good name list.
    ///
    /// For built-in tables only; the list must be non-empty and free of
    /// duplicates.
    pub(crate) fn from_static(names: &[&str]) -> Self {
        let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        let positions: HashMap<String, usize> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        debug_assert!(!names.is_empty() && positions.len() == names.len());
        Self { names, positions }
    }

    /// Names in catalog order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterates names in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of names.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; construction rejects empty catalogs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `name` is part of this catalog.
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Zero-based position of `name`, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Orders two names by catalog position.
    ///
    /// Names outside the catalog sort after every catalog name, and
    /// lexically among themselves.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match (self.position(a), self.position(b)) {
            (Some(pa), Some(pb)) => pa.cmp(&pb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    }
}
