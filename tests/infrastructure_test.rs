//! Test to verify test infrastructure works correctly

mod common;

use common::builders::SessionBuilder;
use decarbonator_dashboard::PageId;

#[test]
fn test_infrastructure_setup() {
    let session = SessionBuilder::new().empty().extra_plants(2).build();

    assert_eq!(session.plants().len(), 2);
    assert_eq!(session.current_page(), PageId::Dashboard);
}

#[test]
fn test_empty_builder() {
    let session = SessionBuilder::new().empty().build();
    assert!(session.plants().is_empty());
}
