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

use serde::Serialize;
use std::collections::BTreeMap;

/// First worksheet of a benchmark file, header row turned into column names.
#[derive(Default, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkTable {
	pub columns: Vec<String>,
	pub rows: Vec<BTreeMap<String, String>>,
}

impl BenchmarkTable {
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Cells of one row in column order, blank where the sheet had nothing.
	pub fn row_cells(&self, index: usize) -> Option<Vec<&str>> {
		let row = self.rows.get(index)?;
		Some(
			self.columns
				.iter()
				.map(|each| row.get(each).map(String::as_str).unwrap_or_default())
				.collect(),
		)
	}
}

/// Both benchmark sources, the bundled file first.
#[derive(Default, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkSet {
	pub local: BenchmarkTable,
	pub backend: BenchmarkTable,
}
