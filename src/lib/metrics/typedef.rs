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

#[derive(Default, PartialEq, Eq, Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
	PROVIDED,
	#[default]
	ESTIMATED,
	COMPUTED,
}

impl std::fmt::Display for ValueSource {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ValueSource::PROVIDED => write!(f, "Provided by user"),
			ValueSource::ESTIMATED => write!(f, "Estimated by model"),
			ValueSource::COMPUTED => write!(f, "Computed"),
		}
	}
}

/// Numbers derived from the inputs and the latest prediction. Never stored.
#[derive(Default, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
	pub india_percent: Option<f64>,
	pub uk_percent: Option<f64>,
	pub estimated_effort: Option<f64>,
	pub blended_rate: Option<f64>,
	pub estimated_revenue: Option<f64>,
	pub currency: String,
}

#[derive(Default, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCard {
	pub field: String,
	pub label: String,
	pub value: String,
	pub source: ValueSource,
}

/// Everything the result panel shows, already formatted.
#[derive(Default, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EstimationSummary {
	pub cards: Vec<SummaryCard>,
	pub india_percent: String,
	pub uk_percent: String,
	pub estimated_revenue: String,
	pub estimated_effort: String,
	pub reliability: String,
	pub model_name: Option<String>,
	pub reliability_detail: Option<ReliabilityDetail>,
}

/// Target, model, R² as a percentage with two decimals, MAE and the current effort.
#[derive(Default, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReliabilityDetail {
	pub target: String,
	pub model_name: String,
	pub reliability: String,
	pub mae: String,
	pub estimated_effort: String,
}

#[derive(Default, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EstimationRow {
	pub field: String,
	pub value: String,
	pub source: String,
}

#[derive(Default, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EstimationReport {
	pub metrics: DerivedMetrics,
	pub summary: EstimationSummary,
	pub table: Vec<EstimationRow>,
}
