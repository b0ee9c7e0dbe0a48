//! Core data types for the Decarbonator dashboard
//!
//! # Main Types
//!
//! - [`Plant`] - Minimal display record for one plant
//! - [`PlantList`] - Ordered, append-only sequence of plants
//!
//! Plants live only for the lifetime of the session. The list never removes
//! or edits an entry once it has been appended, so ids stay in insertion
//! order and `id == position + 1` for every record.

/// Placeholder body text shown on every plant card
pub const PLACEHOLDER_DESCRIPTION: &str = "Body text for whatever you'd like to say. \
Add main takeaway points, quotes, anecdotes, or even a very very short story.";

/// Number of plants a fresh session starts with
pub const SEED_PLANT_COUNT: usize = 2;

/// A plant shown on the Plant Stats page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plant {
    /// 1-based position at the time the plant was added
    pub id: u32,
    /// Display name, `"Plant {id}"` for synthetic entries
    pub name: String,
    /// Card body text
    pub description: String,
}

impl Plant {
    /// Build the synthetic record for a given id
    pub fn synthetic(id: u32) -> Self {
        Self {
            id,
            name: format!("Plant {}", id),
            description: PLACEHOLDER_DESCRIPTION.to_string(),
        }
    }
}

/// Append-only list of plants
///
/// Entries cannot be removed or mutated; callers only get shared access to
/// the records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantList {
    plants: Vec<Plant>,
}

impl PlantList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the list a fresh session starts with (`Plant 1`, `Plant 2`)
    pub fn seeded() -> Self {
        let mut list = Self::new();
        for _ in 0..SEED_PLANT_COUNT {
            list.add_plant();
        }
        list
    }

    /// Append one synthetic plant and return it
    ///
    /// The new id is the length before the append plus one.
    pub fn add_plant(&mut self) -> &Plant {
        let id = self.next_id();
        self.plants.push(Plant::synthetic(id));
        tracing::debug!("Added plant {} ({} total)", id, self.plants.len());
        &self.plants[self.plants.len() - 1]
    }

    /// Id the next appended plant will receive
    pub fn next_id(&self) -> u32 {
        u32::try_from(self.plants.len()).map_or(u32::MAX, |len| len.saturating_add(1))
    }

    /// All plants in insertion order
    pub fn as_slice(&self) -> &[Plant] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_list() {
        let list = PlantList::seeded();
        assert_eq!(list.len(), SEED_PLANT_COUNT);
        assert_eq!(list.as_slice()[0].name, "Plant 1");
        assert_eq!(list.as_slice()[1].name, "Plant 2");
        assert_eq!(list.as_slice()[1].id, 2);
    }

    #[test]
    fn test_add_plant_assigns_next_id() {
        let mut list = PlantList::seeded();
        let added = list.add_plant().clone();
        assert_eq!(added.id, 3);
        assert_eq!(added.name, "Plant 3");
        assert_eq!(added.description, PLACEHOLDER_DESCRIPTION);
        assert_eq!(list.len(), 3);
        assert_eq!(list.next_id(), 4);
    }

    #[test]
    fn test_empty_list() {
        let mut list = PlantList::new();
        assert!(list.is_empty());
        assert_eq!(list.next_id(), 1);
        assert_eq!(list.add_plant().id, 1);
    }

    #[test]
    fn test_placeholder_text() {
        assert!(PLACEHOLDER_DESCRIPTION.starts_with("Body text for whatever you'd like to say. Add"));
        assert!(PLACEHOLDER_DESCRIPTION.ends_with("a very very short story."));
    }
}
