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

use calamine::{Data, Reader};
use std::{
	collections::{BTreeMap, HashSet},
	io::Cursor,
};

use super::typedef::BenchmarkTable;
use crate::error::EstimatorError;

const EMPTY_HEADER: &'static str = "__EMPTY";

/// Parse the first worksheet of an xlsx/xls/xlsb/ods payload into a table.
///
/// The first row names the columns. Blank rows are skipped and missing
/// cells read as the empty string.
pub fn load_spreadsheet(bytes: Vec<u8>, origin: &str) -> Result<BenchmarkTable, EstimatorError> {
	let mut sheets = calamine::open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|source| {
		EstimatorError::Spreadsheet {
			origin: origin.to_string(),
			source,
		}
	})?;

	let first_sheet = match sheets.sheet_names().first() {
		Some(found) => found.clone(),
		None => {
			return Err(EstimatorError::EmptyWorkbook {
				origin: origin.to_string(),
			})
		}
	};

	let range = sheets
		.worksheet_range(&first_sheet)
		.map_err(|source| EstimatorError::Spreadsheet {
			origin: origin.to_string(),
			source,
		})?;

	let columns = match range.headers() {
		Some(found) => unique_headers(found),
		None => return Ok(Default::default()),
	};

	let rows = range
		.rows()
		.skip(1) // Skip header row
		.filter(|each_row| each_row.iter().any(|each| !matches!(each, Data::Empty)))
		.map(|each_row| {
			columns
				.iter()
				.enumerate()
				.map(|(i, column)| {
					let cell = each_row.get(i).map(ToString::to_string).unwrap_or_default();
					(column.clone(), cell)
				})
				.collect::<BTreeMap<_, _>>()
		})
		.collect::<Vec<_>>();

	tracing::debug!(
		origin,
		sheet = first_sheet.as_str(),
		columns = columns.len(),
		rows = rows.len(),
		"benchmark sheet parsed"
	);

	Ok(BenchmarkTable { columns, rows })
}

/// Blank headers become `__EMPTY`, repeated ones get a `_1`, `_2`, ... suffix.
pub(super) fn unique_headers(raw: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::<String>::with_capacity(raw.len());

	raw.into_iter()
		.map(|each| {
			let base = match each.trim() {
				"" => String::from(EMPTY_HEADER),
				trimmed => trimmed.to_string(),
			};

			let mut candidate = base.clone();
			let mut suffix = 0u32;
			while seen.contains(&candidate) {
				suffix += 1;
				candidate = format!("{}_{}", base, suffix);
			}

			seen.insert(candidate.clone());
			candidate
		})
		.collect()
}
