use palate_core::palate::TasteDimension;
use test_fixtures::builders::{CandidateBuilder, ExperienceBuilder, ProfileBuilder};
use test_fixtures::{catalog, fixture_exists, spicy_lover_log};

#[test]
fn datasets_exist() {
    assert!(fixture_exists("experiences/spicy_lover.json"));
    assert!(fixture_exists("catalog/dishes.json"));
    assert!(!fixture_exists("experiences/nobody.json"));
}

#[test]
fn spicy_log_is_chronological_and_single_user() {
    let log = spicy_lover_log();
    assert_eq!(log.len(), 5);
    assert!(log.iter().all(|e| e.user_id == "spice-lover"));
    assert!(log.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    assert_eq!(log[0].palate_vector.get(TasteDimension::Spicy), 9.0);
}

#[test]
fn catalog_has_unique_ids() {
    let items = catalog();
    let mut ids: Vec<_> = items.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), items.len());
}

#[test]
fn builders_apply_overrides() {
    let exp = ExperienceBuilder::new("alice")
        .id("e1")
        .food("Ramen", "japanese")
        .confidence(0.5)
        .build();
    assert_eq!(exp.id, "e1");
    assert_eq!(exp.cuisine, "japanese");
    assert_eq!(exp.confidence, 0.5);

    let profile = ProfileBuilder::new("alice").experiences(150).build();
    assert_eq!(profile.total_experiences, 150);
    assert_eq!(profile.profile_maturity.to_string(), "established");

    let item = CandidateBuilder::new("x").cuisine(" Thai ").build();
    assert_eq!(item.category(), "thai");
}
