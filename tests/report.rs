use std::fs;
use std::path::Path;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use rocket::http::Status;
use rocket::local::blocking::Client;
use rocket::routes;

use qualifying_report::errors::Error;
use qualifying_report::modules::helpers::config::Config;
use qualifying_report::modules::log_processor::LogProcessor;
use qualifying_report::modules::ranking_service::{RankingService, SortOrder};
use qualifying_report::routes::api;
use qualifying_report::{DriverDetail, DriverListing, LapStatus, ReportRow};

const START_LOG: &str = "SVF2018-05-24_12:02:58.917\nNHR2018-05-24_12:02:49.914\nBHS2018-05-24_12:14:51.985\n";
const END_LOG: &str = "SVF2018-05-24_12:04:03.332\nNHR2018-05-24_12:04:02.979\nKRF2018-05-24_12:03:01.250\n";
const ABBREVIATIONS: &str = "\
SVF_Sebastian Vettel_FERRARI
NHR_Nico Hulkenberg_RENAULT
BHS_Brendon Hartley_SCUDERIA TORO ROSSO HONDA
KRF_Kimi Raikkonen_FERRARI
";

fn write_data_dir(dir: &Path, start: &str, end: &str, abbreviations: &str) -> Config {
    fs::write(dir.join("start.log"), start).unwrap();
    fs::write(dir.join("end.log"), end).unwrap();
    fs::write(dir.join("abbreviations.txt"), abbreviations).unwrap();
    Config::with_data_dir(dir)
}

fn load_service(dir: &Path) -> RankingService {
    let config = write_data_dir(dir, START_LOG, END_LOG, ABBREVIATIONS);
    RankingService::new(Arc::new(LogProcessor::open(&config).unwrap()))
}

fn client(service: RankingService) -> Client {
    let rocket = rocket::build().manage(service).mount(
        "/",
        routes![
            api::report::full_report,
            api::report::all_drivers,
            api::report::driver_detail,
        ],
    );
    Client::tracked(rocket).unwrap()
}

#[test]
fn q1_report_end_to_end() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let service = load_service(dir.path());

    // Act
    let report = service.full_report(SortOrder::Ascending);

    // Assert
    assert_eq!(report.len(), 2);
    assert_eq!(
        report[0],
        ReportRow {
            position: 1,
            code: "SVF".to_string(),
            name: "Sebastian Vettel".to_string(),
            team: "FERRARI".to_string(),
            lap_time: "1:04.415".to_string(),
            lap_seconds: 64.415,
        }
    );
    assert_eq!(report[1].code, "NHR");
    assert_eq!(report[1].lap_seconds, 73.065);
}

#[test]
fn listing_contains_incomplete_drivers_but_not_end_only_codes() {
    let dir = tempfile::tempdir().unwrap();
    let service = load_service(dir.path());

    let codes: Vec<String> = service.all_drivers().into_iter().map(|d| d.code).collect();

    assert_eq!(codes, vec!["BHS", "NHR", "SVF"]);
    assert!(codes.len() >= service.rank(SortOrder::Descending).len());
}

#[test]
fn truncated_timestamp_fails_the_load() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let config = write_data_dir(dir.path(), "SVF2018-05-24_12:02:58.9\n", END_LOG, ABBREVIATIONS);
    let mut processor = LogProcessor::new(&config);

    // Act
    let result = processor.load();

    // Assert
    let error = result.unwrap_err();
    assert!(error.is_parse_error(), "unexpected error: {}", error);
    assert!(processor.drivers().is_empty());
}

#[test]
fn missing_abbreviations_file_fails_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_data_dir(dir.path(), START_LOG, END_LOG, ABBREVIATIONS);
    fs::remove_file(config.abbreviations_path()).unwrap();

    let result = LogProcessor::open(&config);

    assert!(matches!(result, Err(Error::IoError { .. })));
}

#[test]
fn report_route_honours_order() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let client = client(load_service(dir.path()));

    // Act
    let response = client.get("/report?order=desc").dispatch();

    // Assert
    assert_eq!(response.status(), Status::Ok);
    let report: Vec<ReportRow> = response.into_json().unwrap();
    assert_eq!(report[0].code, "NHR");
    assert_eq!(report[0].position, 1);
}

#[test]
fn drivers_route_ignores_order() {
    let dir = tempfile::tempdir().unwrap();
    let client = client(load_service(dir.path()));

    let response = client.get("/report/drivers?order=desc").dispatch();

    assert_eq!(response.status(), Status::Ok);
    let drivers: Vec<DriverListing> = response.into_json().unwrap();
    assert_eq!(drivers[0].code, "BHS");
}

#[test]
fn driver_route_reports_incomplete_and_unknown_drivers() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let client = client(load_service(dir.path()));

    // Act
    let incomplete = client.get("/report/drivers/BHS").dispatch();
    let unknown = client.get("/report/drivers/KRF").dispatch();

    // Assert
    assert_eq!(incomplete.status(), Status::Ok);
    let detail: DriverDetail = incomplete.into_json().unwrap();
    assert_eq!(detail.name, "Brendon Hartley");
    assert_eq!(detail.status, LapStatus::Incomplete);
    assert_eq!(detail.lap_time, None);
    assert_eq!(unknown.status(), Status::NotFound);
}
