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

use std::str::FromStr;

use super::typedef::*;
use crate::config::EstimatorConfig;
use crate::error::EstimatorError;
use crate::input::{Currency, InputField, InputRecord};
use crate::predict::{ModelReport, PredictionResult};
use crate::typedef::FieldValue;

/// Shown wherever a value is missing or not a number.
pub const PLACEHOLDER: &'static str = "-";

/// `100 - india`, passed through without clamping.
pub fn uk_percent(india_percent: Option<f64>) -> Option<f64> {
	let india_percent = india_percent.filter(|each| each.is_finite())?;
	Some(100f64 - india_percent)
}

pub fn estimated_revenue(effort: Option<f64>, rate: Option<f64>) -> Option<f64> {
	let effort = effort.filter(|each| each.is_finite())?;
	let rate = rate.filter(|each| each.is_finite())?;
	Some(effort * rate)
}

/// Round half up to an integer and group thousands, e.g. `1234.6` becomes `1,235`.
pub fn format_number(value: Option<f64>) -> String {
	let value = match value.filter(|each| each.is_finite()) {
		Some(found) => found,
		None => return String::from(PLACEHOLDER),
	};

	// Same rounding as the browser's Math.round, halves go up
	let floor = value.floor();
	let rounded = if value - floor >= 0.5 { floor + 1f64 } else { floor };
	let digits = format!("{:.0}", rounded);
	group_thousands(if digits == "-0" { "0" } else { &digits })
}

/// Currency symbol followed by the grouped amount with at most two decimals.
/// Unknown codes are used verbatim as a prefix, e.g. `XYZ 1,500`.
pub fn format_currency(value: Option<f64>, currency_code: &str) -> String {
	let value = match value.filter(|each| each.is_finite()) {
		Some(found) => found,
		None => return String::from(PLACEHOLDER),
	};

	let prefix = match Currency::from_str(currency_code) {
		Ok(currency) => currency.symbol().to_string(),
		Err(_) => format!("{} ", currency_code),
	};

	let fixed = to_fixed(value, 2);
	let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
	let fraction = fraction.trim_end_matches('0');

	let mut output = prefix;
	output.push_str(&group_thousands(integer));
	if !fraction.is_empty() {
		output.push('.');
		output.push_str(fraction);
	}
	output
}

pub fn format_percent(value: Option<f64>) -> String {
	match value.filter(|each| each.is_finite()) {
		Some(found) => format!("{}%", found),
		None => String::from(PLACEHOLDER),
	}
}

/// R² of `report` as a percentage with one decimal, or `fallback` when the
/// service did not report one.
pub fn reliability(report: Option<&ModelReport>, fallback: Option<f64>) -> String {
	match report.and_then(|found| found.r2_mean).or(fallback) {
		Some(r2) if r2.is_finite() => format!("{:.1}%", r2 * 100f64),
		_ => String::from(PLACEHOLDER),
	}
}

/// Detail row under the reliability bar, `None` when no report targets the effort.
pub fn reliability_detail(
	report: Option<&ModelReport>,
	estimated_effort: Option<f64>,
) -> Option<ReliabilityDetail> {
	let report = report?;

	Some(ReliabilityDetail {
		target: report.target.clone(),
		model_name: report.model_name.clone(),
		reliability: to_fixed(report.r2_mean.unwrap_or_default() * 100f64, 2),
		mae: format_number(report.mae_mean),
		estimated_effort: format_number(estimated_effort),
	})
}

pub fn derive_metrics(
	inputs: &InputRecord,
	prediction: Option<&PredictionResult>,
	default_currency: Currency,
) -> DerivedMetrics {
	let india_percent = inputs.number(InputField::INDIA_COMPONENT_PCT);
	let blended_rate = inputs.number(InputField::BLENDED_RATE);

	// The model's effort wins, a user-provided one only fills in when there is no prediction
	let estimated_effort = prediction
		.and_then(|found| found.prediction(InputField::ESTIMATED_EFFORT))
		.and_then(FieldValue::as_number)
		.or(inputs.number(InputField::ESTIMATED_EFFORT));

	DerivedMetrics {
		india_percent,
		uk_percent: uk_percent(india_percent),
		estimated_effort,
		blended_rate,
		estimated_revenue: estimated_revenue(estimated_effort, blended_rate),
		currency: inputs.currency_code(default_currency),
	}
}

fn source_of(inputs: &InputRecord, key: &str) -> ValueSource {
	if inputs.contains(key) {
		ValueSource::PROVIDED
	} else {
		ValueSource::ESTIMATED
	}
}

pub fn summarize(
	inputs: &InputRecord,
	prediction: &PredictionResult,
	config: &EstimatorConfig,
) -> EstimationSummary {
	let metrics = derive_metrics(inputs, Some(prediction), config.default_currency);

	let cards = InputField::CANONICAL
		.iter()
		.map(|field| {
			let value = inputs
				.field(*field)
				.or(prediction.prediction(*field));

			let value = match (field, value) {
				(_, None) => String::from(PLACEHOLDER),
				(InputField::CLIENT_REVENUE, Some(found)) => format_number(found.as_number()),
				(_, Some(found)) => found.to_string(),
			};

			SummaryCard {
				field: field.key().to_string(),
				label: field.label().to_string(),
				value,
				source: source_of(inputs, field.key()),
			}
		})
		.collect::<Vec<_>>();

	let effort_report = prediction.report_for(InputField::ESTIMATED_EFFORT);

	EstimationSummary {
		cards,
		india_percent: format_percent(metrics.india_percent),
		uk_percent: format_percent(metrics.uk_percent),
		estimated_revenue: format_currency(metrics.estimated_revenue, &metrics.currency),
		estimated_effort: format_number(metrics.estimated_effort),
		reliability: reliability(effort_report, config.reliability_fallback),
		model_name: effort_report.map(|found| found.model_name.clone()),
		reliability_detail: reliability_detail(effort_report, metrics.estimated_effort),
	}
}

/// One row per predicted field, then the split and the revenue.
pub fn estimation_table(
	inputs: &InputRecord,
	prediction: &PredictionResult,
	config: &EstimatorConfig,
) -> Vec<EstimationRow> {
	let metrics = derive_metrics(inputs, Some(prediction), config.default_currency);

	let predicted_rows = prediction.predictions.iter().map(|(field, value)| EstimationRow {
		field: field.clone(),
		value: format_number(value.as_number()),
		source: source_of(inputs, field).to_string(),
	});

	let derived_rows = [
		EstimationRow {
			field: InputField::INDIA_COMPONENT_PCT.label().to_string(),
			value: format_percent(metrics.india_percent),
			source: String::from("User input"),
		},
		EstimationRow {
			field: String::from("UK component %"),
			value: format_percent(metrics.uk_percent),
			source: String::from("Computed (100 - India %)"),
		},
		EstimationRow {
			field: String::from("Estimated Revenue"),
			value: format_currency(metrics.estimated_revenue, &metrics.currency),
			source: String::from("Calculated"),
		},
	];

	predicted_rows.chain(derived_rows).collect()
}

pub fn write_estimation_csv<W: std::io::Write>(
	rows: &[EstimationRow],
	writer: W,
) -> Result<(), EstimatorError> {
	let mut writer = csv::Writer::from_writer(writer);
	writer.write_record(["Field", "Estimated Value", "Source"])?;

	for each in rows {
		writer.write_record([&each.field, &each.value, &each.source])?;
	}

	writer.flush().map_err(csv::Error::from)?;
	Ok(())
}

/// `decimals` fixed digits, halves rounded away from zero.
fn to_fixed(value: f64, decimals: i32) -> String {
	let scale = 10f64.powi(decimals);
	let rounded = (value * scale).round() / scale;
	format!("{:.*}", decimals as usize, rounded)
}

fn group_thousands(digits: &str) -> String {
	let (sign, digits) = match digits.strip_prefix('-') {
		Some(rest) => ("-", rest),
		None => ("", digits),
	};

	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
	for (i, each) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(each);
	}

	format!("{}{}", sign, grouped)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn grouping() {
		assert_eq!(group_thousands("0"), "0");
		assert_eq!(group_thousands("999"), "999");
		assert_eq!(group_thousands("1000"), "1,000");
		assert_eq!(group_thousands("-1234567"), "-1,234,567");
	}

	#[test]
	fn rounding_follows_half_up() {
		assert_eq!(format_number(Some(2.5)), "3");
		assert_eq!(format_number(Some(-2.5)), "-2");
		assert_eq!(format_number(Some(-0.4)), "0");
	}

	#[test]
	fn rounding_is_exact_near_halves_and_for_large_integers() {
		assert_eq!(format_number(Some(0.49999999999999994)), "0");
		assert_eq!(
			format_number(Some(4503599627370497.0)),
			"4,503,599,627,370,497"
		);
	}

	#[test]
	fn currency_keeps_up_to_two_decimals() {
		assert_eq!(format_currency(Some(1234.5), "EUR"), "€1,234.5");
		assert_eq!(format_currency(Some(99.999), "INR"), "₹100");
		assert_eq!(format_currency(Some(-1500.0), "GBP"), "£-1,500");
	}

	#[test]
	fn currency_rounds_halves_away_from_zero() {
		assert_eq!(format_currency(estimated_revenue(Some(1.5), Some(0.75)), "GBP"), "£1.13");
		assert_eq!(format_currency(Some(0.125), "USD"), "$0.13");
	}

	#[test]
	fn reliability_prefers_report_over_fallback() {
		let report = ModelReport {
			target: InputField::ESTIMATED_EFFORT.key().to_string(),
			model_name: String::from("rf"),
			r2_mean: Some(0.912),
			mae_mean: Some(40.0),
		};

		assert_eq!(reliability(Some(&report), Some(0.487)), "91.2%");
		assert_eq!(reliability(None, Some(0.487)), "48.7%");
		assert_eq!(reliability(None, None), PLACEHOLDER);
	}
}
