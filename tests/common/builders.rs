//! Test data builders for creating test objects

use decarbonator_dashboard::{PageId, PlantList, SessionState};

/// Builder for creating test sessions
pub struct SessionBuilder {
    seeded: bool,
    extra_plants: usize,
    page: Option<PageId>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            seeded: true,
            extra_plants: 0,
            page: None,
        }
    }

    /// Start from an empty plant list instead of the two seed plants
    pub fn empty(mut self) -> Self {
        self.seeded = false;
        self
    }

    pub fn extra_plants(mut self, count: usize) -> Self {
        self.extra_plants = count;
        self
    }

    pub fn page(mut self, page: PageId) -> Self {
        self.page = Some(page);
        self
    }

    pub fn build(self) -> SessionState {
        let plants = if self.seeded {
            PlantList::seeded()
        } else {
            PlantList::new()
        };
        let mut session = SessionState::with_plants(plants);
        for _ in 0..self.extra_plants {
            session.add_plant();
        }
        if let Some(page) = self.page {
            session.set_page(page);
        }
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_builder() {
        let session = SessionBuilder::new()
            .extra_plants(3)
            .page(PageId::About)
            .build();

        assert_eq!(session.plants().len(), 5);
        assert_eq!(session.current_page(), PageId::About);
    }
}
