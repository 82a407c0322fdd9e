/*
 * GreenField Estimator, an AI-assisted effort estimation form with GUI
 * Copyright (C) 2025 Athaariq A. Ramadhani <foss@athaariq.my.id>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

mod common;

use greenfield_estimator_lib::benchmark::{load_spreadsheet, BenchmarkLoader};
use greenfield_estimator_lib::{EstimatorConfig, EstimatorError};

fn read_fixture(name: &str) -> Vec<u8> {
	std::fs::read(common::fixture(name)).unwrap()
}

#[test]
fn first_sheet_becomes_table() {
	let table = load_spreadsheet(read_fixture("book3.xlsx"), "Book3.xlsx").unwrap();

	assert_eq!(
		table.columns,
		vec![
			"Project",
			"Client Revenue",
			"Number of Users",
			"RICEFW",
			"Estimated Effort (man days)"
		]
	);
	assert_eq!(table.rows.len(), 2);
	assert_eq!(
		table.row_cells(0).unwrap(),
		vec!["Atlas", "2", "500", "120", "1200"]
	);
	assert_eq!(
		table.row_cells(1).unwrap(),
		vec!["Borealis", "5.5", "1800", "", "3400"]
	);
	assert_eq!(table.row_cells(2), None);
}

#[test]
fn workbook_without_sheets_is_rejected() {
	let result = load_spreadsheet(read_fixture("no_sheets.xlsx"), "Book3.xlsx");

	match result {
		Err(EstimatorError::EmptyWorkbook { origin }) => assert_eq!(origin, "Book3.xlsx"),
		Err(EstimatorError::Spreadsheet { .. }) => {}
		other => panic!("unexpected outcome: {:?}", other),
	}
}

#[tokio::test]
async fn loads_bundled_file_and_backend_file() {
	let (endpoint, captured) = common::serve_once(
		200,
		"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
		read_fixture("backend.xlsx"),
	)
	.await;

	let loader = BenchmarkLoader::new(&common::config_for(&endpoint)).unwrap();
	let set = loader.load_all().await.unwrap();

	assert_eq!(set.local.rows.len(), 2);
	assert_eq!(set.local.rows[0]["Project"], "Atlas");

	assert_eq!(
		set.backend.columns,
		vec!["Wave", "Team", "Estimated Effort (man days)"]
	);
	assert_eq!(set.backend.rows.len(), 3);
	assert_eq!(set.backend.rows[1]["Estimated Effort (man days)"], "1350.5");

	let request = captured.await.unwrap();
	assert_eq!(request.method, "POST");
	assert_eq!(request.path, "/backend_excel");
}

#[tokio::test]
async fn relative_bundled_path_resolves_against_resource_dir() {
	let config = EstimatorConfig {
		benchmark_path: "book3.xlsx".into(),
		..EstimatorConfig::local()
	};

	let loader = BenchmarkLoader::new(&config)
		.unwrap()
		.with_resource_dir(common::fixture("book3.xlsx").parent().unwrap().to_path_buf());

	let table = loader.load_local().await.unwrap();
	assert_eq!(table.rows.len(), 2);
}

#[tokio::test]
async fn missing_bundled_file_is_io_error() {
	let directory = tempfile::tempdir().unwrap();
	let config = EstimatorConfig {
		benchmark_path: directory.path().join("Book3.xlsx"),
		..EstimatorConfig::local()
	};

	let loader = BenchmarkLoader::new(&config).unwrap();
	let err = loader.load_all().await.unwrap_err();

	assert!(matches!(err, EstimatorError::Io { .. }), "{:?}", err);
	assert!(err.to_string().starts_with("Could not fetch"));
}

#[tokio::test]
async fn backend_failure_fails_the_whole_load() {
	let (endpoint, _captured) = common::serve_json(404, "{}").await;
	let loader = BenchmarkLoader::new(&common::config_for(&endpoint)).unwrap();

	let err = loader.load_all().await.unwrap_err();
	assert_eq!(err.to_string(), "Could not fetch backend excel (404 Not Found)");
}

#[tokio::test]
async fn backend_payload_that_is_not_a_workbook_is_rejected() {
	let (endpoint, _captured) = common::serve_json(200, r#"{"rows": []}"#).await;
	let loader = BenchmarkLoader::new(&common::config_for(&endpoint)).unwrap();

	let err = loader.load_backend().await.unwrap_err();
	assert!(matches!(err, EstimatorError::Spreadsheet { .. }), "{:?}", err);
}
