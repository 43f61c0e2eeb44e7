//! Listing records and identifier generation

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Opaque identifier for a listing, unique within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListingId(u64);

impl ListingId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out listing ids.
///
/// Seeded from the wall clock in milliseconds, then strictly incremented on
/// every call, so two listings submitted within the same millisecond still get
/// distinct ids.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Create a generator seeded from the current time
    pub fn new() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self::starting_at(millis)
    }

    /// Create a generator whose first id is `first`
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Issue the next id
    pub fn next_id(&mut self) -> ListingId {
        let id = ListingId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// One submitted property record.
///
/// Immutable once built; the only way to obtain one is through
/// [`FormState::submit`](super::FormState::submit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    id: ListingId,
    title: String,
    price: String,
}

impl Listing {
    pub(crate) fn new(id: ListingId, title: String, price: String) -> Self {
        Self { id, title, price }
    }

    pub fn id(&self) -> ListingId {
        self.id
    }

    /// Title exactly as it was typed, surrounding whitespace included
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free-form price text, never parsed
    pub fn price(&self) -> &str {
        &self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_increment() {
        let mut ids = IdGenerator::starting_at(41);
        assert_eq!(ids.next_id().value(), 41);
        assert_eq!(ids.next_id().value(), 42);
        assert_eq!(ids.next_id().value(), 43);
    }

    #[test]
    fn test_time_seeded_ids_unique() {
        let mut ids = IdGenerator::new();
        let seen: HashSet<ListingId> = (0..5000).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 5000);
    }

    #[test]
    fn test_id_display() {
        let mut ids = IdGenerator::starting_at(1_700_000_000_000);
        assert_eq!(ids.next_id().to_string(), "1700000000000");
    }
}
