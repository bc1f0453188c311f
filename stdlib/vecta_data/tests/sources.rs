use std::fs;

use pretty_assertions::assert_eq;
use vecta_data::{
    check_cases, check_clusters, check_temperature, CaseCounts, CaseSource, CaseTable, DataError,
    HotspotTable, ManualWeather, Newsletter, PayloadWeather, WeatherReading, WeatherSource,
};

fn init_test_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn case_table_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dengue_cases.csv");
    fs::write(&path, "Area,Cases,Clusters\nWoodlands,39,5\nBedok,3,0\n").unwrap();

    let table = CaseTable::from_path(&path).unwrap();
    assert_eq!(table.lookup("woodlands"), Some(CaseCounts::new(39, 5)));
    assert_eq!(table.lookup("Bedok"), Some(CaseCounts::new(3, 0)));
}

#[test]
fn case_rows_without_clusters_default_to_zero() {
    init_test_logger();
    let csv = "area,cases,clusters\nJurong West,7\nBedok,3,1\n";
    let table = CaseTable::from_reader(csv.as_bytes()).unwrap();
    assert_eq!(table.lookup("Jurong West"), Some(CaseCounts::new(7, 0)));
    assert_eq!(table.lookup("Bedok"), Some(CaseCounts::new(3, 1)));
}

#[test]
fn missing_case_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CaseTable::from_path(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, DataError::Io(_)));
}

#[test]
fn weather_sources_behind_one_trait() {
    let sources: Vec<Box<dyn WeatherSource>> = vec![
        Box::new(ManualWeather::new(WeatherReading::new(70.0, 30.0, 0.0))),
        Box::new(PayloadWeather::new(
            r#"{"main":{"temp":30.0,"humidity":70}}"#,
        )),
    ];
    for s in &sources {
        assert_eq!(
            s.reading("Woodlands").unwrap(),
            WeatherReading::new(70.0, 30.0, 0.0)
        );
    }
}

#[test]
fn invalid_input_names_the_field() {
    let err = WeatherReading::new(120.0, 30.0, 0.0).validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid input for humidity: 120 is outside 0..=100"
    );
}

#[test]
fn hotspot_file_overrides_demo() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dengue_hotspots.csv");
    fs::write(&path, "lat,lon,cases\n1.3521,103.8198,5\n").unwrap();
    let t = HotspotTable::from_path(&path).unwrap();
    assert_eq!(t.hotspots.len(), 1);
    assert_ne!(t, HotspotTable::demo());
}

#[test]
fn single_field_checks_match_struct_validation() {
    assert!(check_temperature(15.0).is_ok());
    assert!(check_temperature(14.9).is_err());
    assert!(check_cases(1000).is_ok());
    assert!(check_cases(1001).is_err());
    let err = check_clusters(51).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid input for active clusters: 51 is outside 0..=50"
    );
}

#[test]
fn newsletter_archive_on_disk() {
    init_test_logger();
    let dir = tempfile::tempdir().unwrap();
    let news = Newsletter::new(dir.path().join("newsletter.txt"));
    news.append("Mosquito awareness week starts Monday.").unwrap();
    let text = fs::read_to_string(news.path()).unwrap();
    assert!(text.starts_with("\n\n=== "));
    assert!(text.ends_with(" ===\nMosquito awareness week starts Monday."));
}
