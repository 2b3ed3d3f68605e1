//! CSV ingestion, dataset validation and loading extra data through LoadConfig.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use iso3166::data::csv_source::{
    country_rows_from_reader, country_table_from_rows, group_subdivision_rows,
    read_country_table, read_subdivision_sets, subdivision_rows_from_reader,
};
use iso3166::data::validate::{validate_country_rows, validate_subdivision_rows, Severity};
use iso3166::{Atlas, CountryTable, DataError, LoadConfig};

fn unique_temp_path(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("iso3166-{name}-{stamp}.csv"))
}

const NORDIC: &str = "\
country_name,code,name,type,alpha2
Norway,NO-03,Oslo,County,NO
Sweden,SE-AB,Stockholms län,County,SE
Norway,NO-46,Vestland,County,NO
Norway,NO-03,Oslo again,County,NO
";

#[test]
fn rows_group_by_country_in_first_seen_order() {
    let rows = subdivision_rows_from_reader(NORDIC.as_bytes()).unwrap();
    assert_eq!(rows.len(), 4);

    let sets = group_subdivision_rows(rows);
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0].country_code, "NO");
    assert_eq!(sets[0].country_name, "Norway");
    let codes: Vec<&str> = sets[0].subdivisions.keys().map(String::as_str).collect();
    assert_eq!(codes, vec!["NO-03", "NO-46"]);
    assert_eq!(sets[0].subdivisions["NO-03"].name, "Oslo");
    assert_eq!(sets[1].country_code, "SE");
}

#[test]
fn fields_are_trimmed_and_blank_codes_skipped() {
    let input = " Norway , NO-03 , Oslo , County , no \nNorway,,Nowhere,County,NO\n";
    let sets = group_subdivision_rows(subdivision_rows_from_reader(input.as_bytes()).unwrap());
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].country_code, "NO");
    assert_eq!(sets[0].subdivisions.len(), 1);
    assert_eq!(sets[0].subdivisions["NO-03"].subdivision_type, "County");
}

#[test]
fn extra_csv_replaces_compiled_in_tables() {
    let path = unique_temp_path("extra");
    fs::write(&path, "Sweden,SE-XY,Test län,County,SE\nNorway,NO-03,Oslo,County,NO\n")
        .expect("fixture should be written");

    let config = LoadConfig::from_vars(Some("se,us"), Some(path.to_string_lossy().as_ref()));
    let atlas = Atlas::from_config(&config).unwrap();
    let subdivisions = atlas.subdivisions();

    assert_eq!(subdivisions.for_country("SE").len(), 1);
    assert_eq!(subdivisions.where_code("SE-XY").unwrap().name, "Test län");
    assert!(subdivisions.where_code("SE-O").is_none());
    assert_eq!(subdivisions.where_name("NO", "oslo").unwrap().code, "NO-03");
    assert!(subdivisions.where_code("US-CA").is_some());

    assert_eq!(read_subdivision_sets(&path).unwrap().len(), 2);
    let _ = fs::remove_file(path);
}

#[test]
fn missing_extra_csv_is_an_io_error() {
    let config = LoadConfig::from_vars(Some("none"), Some("/nonexistent/iso3166/extra.csv"));
    let err = Atlas::from_config(&config).unwrap_err();
    assert!(matches!(err, DataError::Io(_)));
}

#[test]
fn country_rows_build_a_strict_table() {
    let input = "alpha2,alpha3,numeric,name\nAA,AAA,1,Alpha\nbb,bbb,002,Beta\n";
    let table = country_table_from_rows(country_rows_from_reader(input.as_bytes()).unwrap()).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("AA").unwrap().numeric, "001");
    assert_eq!(table.resolve_alpha2("bbb"), Some("BB"));
    assert_eq!(table.where_numeric(1).unwrap().name, "Alpha");

    let clash = "AA,AAA,001,Alpha\nBB,AAA,002,Beta\n";
    let err = country_table_from_rows(country_rows_from_reader(clash.as_bytes()).unwrap()).unwrap_err();
    assert!(matches!(err, DataError::DuplicateKey { field: "alpha3", .. }));
}

#[test]
fn country_csv_file_backs_a_shared_atlas_table() {
    let path = unique_temp_path("countries");
    fs::write(&path, "alpha2,alpha3,numeric,name
QQ,QQQ,901,Quux
ZZ,ZZZ,902,Zed
")
        .expect("fixture should be written");

    let table = std::sync::Arc::new(read_country_table(&path).unwrap());
    let atlas = Atlas::with_countries(std::sync::Arc::clone(&table));
    assert!(std::sync::Arc::ptr_eq(&atlas.shared_countries(), &table));
    assert_eq!(atlas.countries().resolve_alpha2(902), Some("ZZ"));
    assert_eq!(atlas.countries().where_name("quux").unwrap().alpha3, "QQQ");

    let _ = fs::remove_file(&path);
    assert!(matches!(read_country_table(&path), Err(DataError::Io(_))));
}

#[test]
fn custom_country_table_drives_subdivision_lookups() {
    let input = "QQ,QQQ,901,Quux\n";
    let table = country_table_from_rows(country_rows_from_reader(input.as_bytes()).unwrap()).unwrap();
    let mut atlas = Atlas::with_countries(std::sync::Arc::new(table));
    let sets = group_subdivision_rows(
        subdivision_rows_from_reader("Quux,QQ-N,North,Region,QQ\n".as_bytes()).unwrap(),
    );
    for set in sets {
        atlas.register_set(set);
    }

    let found = atlas.subdivisions().where_code("QQQ-n").unwrap();
    assert_eq!(found.code, "QQ-N");
    assert_eq!(found.country_name, "Quux");
    assert!(atlas.countries().where_alpha2("US").is_none());
}

#[test]
fn subdivision_validation_flags_duplicates_and_bad_codes() {
    let rows = subdivision_rows_from_reader(NORDIC.as_bytes()).unwrap();
    let report = validate_subdivision_rows(&rows, CountryTable::builtin());
    assert!(!report.is_usable());
    assert_eq!(report.errors(), 1);
    assert!(report.issues[0].message.contains("duplicate code 'NO-03' (first on line 2)"));

    let rows = subdivision_rows_from_reader(
        "Norway,NO-03,Oslo,County,NO\nNorway,NO-04,OSLO,,NO\nNorge,NO-05,Viken,County,NO\n".as_bytes(),
    )
    .unwrap();
    let report = validate_subdivision_rows(&rows, CountryTable::builtin());
    assert!(report.is_usable());
    assert_eq!(report.warnings(), 3);
    assert!(report.issues.iter().all(|issue| issue.severity == Severity::Warning));
}

#[test]
fn country_validation_checks_shapes_and_uniqueness() {
    let input = "AA,AAA,001,Alpha\nA1,BBB,02,Beta\nCC,AAA,001,alpha\n";
    let report = validate_country_rows(&country_rows_from_reader(input.as_bytes()).unwrap());

    let located: Vec<(u64, &str)> = report
        .issues
        .iter()
        .map(|issue| (issue.line, issue.field))
        .collect();
    assert_eq!(
        located,
        vec![(2, "alpha2"), (2, "numeric"), (3, "alpha3"), (3, "numeric"), (3, "name")]
    );
    assert_eq!(report.errors(), 4);
    assert_eq!(report.warnings(), 1);
    assert_eq!(
        report.issues[0].to_string(),
        "error line 2 alpha2: 'A1' is not a two-letter code"
    );
}
