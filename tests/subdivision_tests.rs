//! ISO 3166-2 resolution through an explicit Atlas.

use iso3166::data::units;
use iso3166::{to_region_code, Atlas, SubdivisionData, SubdivisionInfo};

fn california_only() -> Atlas {
    let mut atlas = Atlas::new();
    let data: SubdivisionData = [(
        "US-CA".to_string(),
        SubdivisionInfo {
            name: "California".to_string(),
            subdivision_type: "State".to_string(),
        },
    )]
    .into_iter()
    .collect();
    atlas.register("US", "United States", data);
    atlas
}

#[test]
fn where_code_falls_back_from_exact_to_case_to_name() {
    let atlas = california_only();
    let subdivisions = atlas.subdivisions();

    for input in ["US-CA", "us-ca", "US-California", "usa-ca", "840-CA"] {
        let found = subdivisions
            .where_code(input)
            .unwrap_or_else(|| panic!("{input} should resolve"));
        assert_eq!(found.code, "US-CA");
        assert_eq!(found.name, "California");
        assert_eq!(found.subdivision_type, "State");
        assert_eq!(found.country_code, "US");
        assert_eq!(found.country_name, "United States");
        assert_eq!(found.region_code, "CA");
    }
}

#[test]
fn where_code_misses_fold_into_none() {
    let atlas = california_only();
    let subdivisions = atlas.subdivisions();
    assert!(subdivisions.where_code("USCA").is_none());
    assert!(subdivisions.where_code("").is_none());
    assert!(subdivisions.where_code("XX-CA").is_none());
    assert!(subdivisions.where_code("US-NY").is_none());
    // Sweden is a valid country without a registered table.
    assert!(subdivisions.where_code("SE-O").is_none());
}

#[test]
fn where_code_folds_codes_as_ascii_and_names_as_unicode() {
    let atlas = california_only();
    assert!(atlas.subdivisions().where_code("uſ-ca").is_none());
    assert!(atlas.subdivisions().where_code("us-cſ").is_none());
    assert!(!atlas.subdivisions().is_valid_code("uſ-ca"));

    let atlas = Atlas::with_units([&units::JP]);
    let tokyo = atlas.subdivisions().where_code("JP-tôkyô").unwrap();
    assert_eq!(tokyo.code, "JP-13");
    assert_eq!(tokyo.region_code, "13");
}

#[test]
fn where_region_is_exact_only() {
    let atlas = california_only();
    let subdivisions = atlas.subdivisions();

    assert_eq!(subdivisions.where_region("US", "ca").unwrap().code, "US-CA");
    assert_eq!(subdivisions.where_region("usa", " CA ").unwrap().code, "US-CA");
    assert!(subdivisions.where_region("US", "California").is_none());
    assert!(subdivisions.where_region("XX", "CA").is_none());
}

#[test]
fn where_name_scans_one_country() {
    let atlas = Atlas::with_units([&units::US, &units::JP, &units::SE]);
    let subdivisions = atlas.subdivisions();

    assert_eq!(subdivisions.where_name("US", "california").unwrap().code, "US-CA");
    assert_eq!(subdivisions.where_name("JPN", "tôkyô").unwrap().code, "JP-13");
    assert_eq!(
        subdivisions.where_name("SE", "västra götalands län").unwrap().code,
        "SE-O"
    );
    assert!(subdivisions.where_name("US", "Narnia").is_none());
    assert!(subdivisions.where_name("SE", "California").is_none());
}

#[test]
fn region_code_splits_on_the_first_hyphen() {
    let atlas = Atlas::with_units([&units::GB]);
    assert!(atlas.registry().get_subdivisions("GB").unwrap().contains_key("GB-EAW"));
    assert_eq!(to_region_code("GB-EAW").as_deref(), Some("EAW"));
    assert_eq!(atlas.subdivisions().where_code("gb-eaw").unwrap().region_code, "EAW");
}

#[test]
fn for_country_and_all_are_sorted_by_code() {
    let atlas = Atlas::full();
    let subdivisions = atlas.subdivisions();

    let us = subdivisions.for_country("USA");
    assert_eq!(us.len(), units::US.len());
    assert!(us.windows(2).all(|pair| pair[0].code < pair[1].code));
    assert!(us.iter().all(|sub| sub.country_code == "US"));

    let all = subdivisions.all();
    let expected: usize = units::ALL.iter().map(|unit| unit.len()).sum();
    assert_eq!(all.len(), expected);
    assert!(all.windows(2).all(|pair| pair[0].code < pair[1].code));
}

#[test]
fn for_country_is_empty_for_unknown_or_unregistered() {
    let mut atlas = Atlas::with_units([&units::US]);
    assert!(atlas.subdivisions().for_country("XX").is_empty());
    assert!(atlas.subdivisions().for_country("NO").is_empty());

    atlas.register("NO", "Norway", SubdivisionData::new());
    assert!(atlas.subdivisions().for_country("NO").is_empty());
    assert!(atlas.subdivisions().has_subdivisions("NOR"));
}

#[test]
fn has_subdivisions_separates_unknown_from_unregistered() {
    let mut atlas = Atlas::new();
    assert!(atlas.countries().is_valid("US"));
    assert!(!atlas.subdivisions().has_subdivisions("US"));

    atlas.register_unit(&units::US);
    assert!(atlas.subdivisions().has_subdivisions("US"));
    assert!(atlas.subdivisions().has_subdivisions(840));

    assert!(!atlas.countries().is_valid("XX"));
    assert!(!atlas.subdivisions().has_subdivisions("XX"));
}

#[test]
fn conversions_use_exact_codes() {
    let atlas = Atlas::with_units([&units::US, &units::SE]);
    let subdivisions = atlas.subdivisions();

    assert_eq!(subdivisions.to_full_code("usa", "ca").as_deref(), Some("US-CA"));
    assert_eq!(subdivisions.to_full_code("US", "ZZ"), None);
    assert_eq!(subdivisions.to_name("se-o"), Some("Västra Götalands län"));
    assert_eq!(subdivisions.to_name("US-California"), None);
    assert_eq!(subdivisions.to_name_from("USA", "ny"), Some("New York"));
    assert_eq!(subdivisions.to_country_code("USA-CA"), Some("US"));
    // Country part only; the registry is not consulted.
    assert_eq!(subdivisions.to_country_code("NO-03"), Some("NO"));
    assert_eq!(subdivisions.to_country_code("XX-01"), None);
}

#[test]
fn validators_use_exact_codes() {
    let atlas = Atlas::with_units([&units::US, &units::DE]);
    let subdivisions = atlas.subdivisions();

    assert!(subdivisions.is_valid_code("US-CA"));
    assert!(subdivisions.is_valid_code("us-ca"));
    assert!(!subdivisions.is_valid_code("US-California"));
    assert!(!subdivisions.is_valid_code("USCA"));
    assert!(subdivisions.is_valid_region("DEU", "by"));
    assert!(!subdivisions.is_valid_region("DE", "Bayern"));
    assert!(subdivisions.is_valid_name("DE", "bayern"));
    assert!(!subdivisions.is_valid_name("US", "Bayern"));
}

#[test]
fn subdivision_serializes_type_field() {
    let atlas = california_only();
    let found = atlas.subdivisions().where_code("US-CA").unwrap();
    let payload = serde_json::to_value(&found).unwrap();
    assert_eq!(payload["type"], "State");
    assert_eq!(payload["region_code"], "CA");
    assert_eq!(payload["country_name"], "United States");
}
