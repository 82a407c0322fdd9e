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

//! State of one estimation session.
//!
//! Network calls never run under the session lock. A caller takes a ticket,
//! performs the request, then hands the outcome back. Editing an input or
//! resetting the form makes every outstanding ticket stale, so a late
//! response can never overwrite a newer state.

use serde::Serialize;

use crate::benchmark::BenchmarkSet;
use crate::config::EstimatorConfig;
use crate::error::EstimatorError;
use crate::guard::RequestSlot;
use crate::input::InputRecord;
use crate::metrics::{self, DerivedMetrics, EstimationReport};
use crate::predict::PredictionResult;
use crate::typedef::FieldValue;

/// Proof that an estimate was admitted, carrying the inputs to send.
#[derive(Debug)]
pub struct EstimateTicket {
	id: u64,
	generation: u64,
	inputs: InputRecord,
}

impl EstimateTicket {
	pub fn inputs(&self) -> &InputRecord {
		&self.inputs
	}
}

#[derive(Debug)]
pub struct BenchmarkTicket {
	id: u64,
	generation: u64,
}

/// What happened to an outcome handed back to the session.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Completion {
	Applied,
	Failed(String),
	/// The form changed while the request was in flight, the outcome was dropped.
	Stale,
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
	pub inputs: InputRecord,
	pub prediction: Option<PredictionResult>,
	pub error_message: Option<String>,
	pub metrics: DerivedMetrics,
	pub has_any_input: bool,
	pub estimating: bool,
	pub loading_benchmark: bool,
	pub benchmark_visible: bool,
}

#[derive(Default, Debug)]
pub struct Session {
	config: EstimatorConfig,
	inputs: InputRecord,
	prediction: Option<PredictionResult>,
	error_message: Option<String>,
	benchmarks: BenchmarkSet,
	benchmark_visible: bool,
	estimate_slot: RequestSlot,
	benchmark_slot: RequestSlot,
	input_generation: u64,
	reset_generation: u64,
}

impl Session {
	pub fn new(config: EstimatorConfig) -> Self {
		Self {
			config,
			..Default::default()
		}
	}

	pub fn config(&self) -> &EstimatorConfig {
		&self.config
	}

	pub fn inputs(&self) -> &InputRecord {
		&self.inputs
	}

	pub fn prediction(&self) -> Option<&PredictionResult> {
		self.prediction.as_ref()
	}

	pub fn error_message(&self) -> Option<&str> {
		self.error_message.as_deref()
	}

	pub fn has_any_input(&self) -> bool {
		!self.inputs.is_empty()
	}

	pub fn is_estimating(&self) -> bool {
		self.estimate_slot.is_busy()
	}

	pub fn is_loading_benchmark(&self) -> bool {
		self.benchmark_slot.is_busy()
	}

	pub fn benchmarks(&self) -> Option<&BenchmarkSet> {
		self.benchmark_visible.then_some(&self.benchmarks)
	}

	/// Store one form value, an empty string removes it. Any edit discards
	/// the previous prediction and error.
	pub fn set_input(&mut self, key: &str, value: FieldValue) -> bool {
		let changed = self.inputs.set(key, value);

		self.prediction = None;
		self.error_message = None;
		self.input_generation += 1;

		changed
	}

	pub fn begin_estimate(&mut self) -> Result<EstimateTicket, EstimatorError> {
		if self.inputs.is_empty() {
			return Err(EstimatorError::NoInputs);
		}

		let id = self.estimate_slot.acquire()?;
		self.error_message = None;

		Ok(EstimateTicket {
			id,
			generation: self.input_generation,
			inputs: self.inputs.clone(),
		})
	}

	pub fn finish_estimate(
		&mut self,
		ticket: EstimateTicket,
		outcome: Result<PredictionResult, EstimatorError>,
	) -> Completion {
		self.estimate_slot.release(ticket.id);

		if ticket.generation != self.input_generation {
			tracing::debug!(ticket = ticket.id, "dropping prediction for outdated inputs");
			return Completion::Stale;
		}

		match outcome {
			Ok(result) => {
				self.prediction = Some(result);
				self.error_message = None;
				Completion::Applied
			}
			Err(err) => {
				tracing::warn!(error = %err, "prediction failed");
				let message = self.config.prediction_error_message.clone();
				self.error_message = Some(message.clone());
				Completion::Failed(message)
			}
		}
	}

	pub fn begin_benchmark(&mut self) -> Result<BenchmarkTicket, EstimatorError> {
		let id = self.benchmark_slot.acquire()?;
		self.error_message = None;

		Ok(BenchmarkTicket {
			id,
			generation: self.reset_generation,
		})
	}

	pub fn finish_benchmark(
		&mut self,
		ticket: BenchmarkTicket,
		outcome: Result<BenchmarkSet, EstimatorError>,
	) -> Completion {
		self.benchmark_slot.release(ticket.id);

		if ticket.generation != self.reset_generation {
			return Completion::Stale;
		}

		match outcome {
			Ok(benchmarks) => {
				self.benchmarks = benchmarks;
				self.benchmark_visible = true;
				Completion::Applied
			}
			Err(err) => {
				tracing::warn!(error = %err, "benchmark load failed");
				let message = err.to_string();
				self.benchmarks = Default::default();
				self.benchmark_visible = false;
				self.error_message = Some(message.clone());
				Completion::Failed(message)
			}
		}
	}

	pub fn hide_benchmark(&mut self) {
		self.benchmark_visible = false;
	}

	/// Back to an empty form. Requests still in flight are abandoned.
	pub fn reset(&mut self) {
		self.inputs.clear();
		self.prediction = None;
		self.error_message = None;
		self.benchmarks = Default::default();
		self.benchmark_visible = false;
		self.estimate_slot.abandon();
		self.benchmark_slot.abandon();
		self.input_generation += 1;
		self.reset_generation += 1;
	}

	pub fn metrics(&self) -> DerivedMetrics {
		metrics::derive_metrics(
			&self.inputs,
			self.prediction.as_ref(),
			self.config.default_currency,
		)
	}

	/// Formatted result panel, only once a prediction is in.
	pub fn report(&self) -> Option<EstimationReport> {
		let prediction = self.prediction.as_ref()?;

		Some(EstimationReport {
			metrics: self.metrics(),
			summary: metrics::summarize(&self.inputs, prediction, &self.config),
			table: metrics::estimation_table(&self.inputs, prediction, &self.config),
		})
	}

	pub fn snapshot(&self) -> SessionSnapshot {
		SessionSnapshot {
			inputs: self.inputs.clone(),
			prediction: self.prediction.clone(),
			error_message: self.error_message.clone(),
			metrics: self.metrics(),
			has_any_input: self.has_any_input(),
			estimating: self.is_estimating(),
			loading_benchmark: self.is_loading_benchmark(),
			benchmark_visible: self.benchmark_visible,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::input::InputField;
	use crate::predict::ModelReport;

	fn effort_result(effort: f64) -> PredictionResult {
		PredictionResult {
			predictions: [(
				InputField::ESTIMATED_EFFORT.key().to_string(),
				FieldValue::Number(effort),
			)]
			.into_iter()
			.collect(),
			reports: vec![ModelReport {
				target: InputField::ESTIMATED_EFFORT.key().to_string(),
				model_name: String::from("rf"),
				r2_mean: Some(0.487),
				mae_mean: Some(80.0),
			}],
		}
	}

	fn offline() -> EstimatorError {
		EstimatorError::Status {
			resource: String::from("prediction service"),
			status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
		}
	}

	#[test]
	fn empty_form_cannot_be_estimated() {
		let mut session = Session::default();
		assert!(matches!(session.begin_estimate(), Err(EstimatorError::NoInputs)));
		assert!(!session.is_estimating());
	}

	#[test]
	fn second_estimate_is_rejected_while_busy() {
		let mut session = Session::default();
		session.set_input("Number of Users", FieldValue::from("500"));

		let ticket = session.begin_estimate().unwrap();
		assert!(session.is_estimating());
		assert!(matches!(session.begin_estimate(), Err(EstimatorError::Busy)));

		assert_eq!(
			session.finish_estimate(ticket, Ok(effort_result(1200.0))),
			Completion::Applied
		);
		assert!(!session.is_estimating());
		assert!(session.begin_estimate().is_ok());
	}

	#[test]
	fn failure_keeps_inputs_and_sets_message() {
		let mut session = Session::default();
		session.set_input("Client Revenue", FieldValue::Number(2.0));
		let before = session.inputs().clone();

		let ticket = session.begin_estimate().unwrap();
		let completion = session.finish_estimate(ticket, Err(offline()));

		assert!(matches!(completion, Completion::Failed(_)));
		assert_eq!(
			session.error_message(),
			Some(session.config().prediction_error_message.as_str())
		);
		assert!(!session.is_estimating());
		assert!(session.prediction().is_none());
		assert_eq!(session.inputs(), &before);
	}

	#[test]
	fn edit_during_flight_makes_response_stale() {
		let mut session = Session::default();
		session.set_input("RICEFW", FieldValue::from("120"));
		let ticket = session.begin_estimate().unwrap();

		session.set_input("RICEFW", FieldValue::from("150"));
		assert!(session.is_estimating());

		assert_eq!(
			session.finish_estimate(ticket, Ok(effort_result(900.0))),
			Completion::Stale
		);
		assert!(session.prediction().is_none());
		assert!(!session.is_estimating());
	}

	#[test]
	fn reset_abandons_flight_and_frees_the_slot() {
		let mut session = Session::default();
		session.set_input("RICEFW", FieldValue::from("120"));
		let old = session.begin_estimate().unwrap();

		session.reset();
		assert!(!session.is_estimating());
		assert!(!session.has_any_input());

		session.set_input("RICEFW", FieldValue::from("80"));
		let new = session.begin_estimate().unwrap();

		assert_eq!(
			session.finish_estimate(old, Ok(effort_result(1.0))),
			Completion::Stale
		);
		assert!(session.is_estimating());

		assert_eq!(
			session.finish_estimate(new, Ok(effort_result(640.0))),
			Completion::Applied
		);
		assert_eq!(session.metrics().estimated_effort, Some(640.0));
	}

	#[test]
	fn any_edit_discards_previous_prediction() {
		let mut session = Session::default();
		session.set_input("RICEFW", FieldValue::from("120"));
		let ticket = session.begin_estimate().unwrap();
		session.finish_estimate(ticket, Ok(effort_result(1200.0)));
		assert!(session.report().is_some());

		session.set_input("wave", FieldValue::from("W2"));
		assert!(session.prediction().is_none());
		assert!(session.report().is_none());
	}

	#[test]
	fn benchmark_failure_hides_panel_and_reports() {
		let mut session = Session::default();
		let ticket = session.begin_benchmark().unwrap();
		assert!(session.is_loading_benchmark());

		let completion = session.finish_benchmark(
			ticket,
			Err(EstimatorError::EmptyWorkbook {
				origin: String::from("backend excel"),
			}),
		);

		assert_eq!(
			completion,
			Completion::Failed(String::from("backend excel contains no sheets."))
		);
		assert!(session.benchmarks().is_none());
		assert!(!session.is_loading_benchmark());
	}

	#[test]
	fn benchmark_survives_edits_but_not_reset() {
		let mut session = Session::default();
		let ticket = session.begin_benchmark().unwrap();
		session.finish_benchmark(ticket, Ok(Default::default()));

		session.set_input("team", FieldValue::from("Finance"));
		assert!(session.benchmarks().is_some());

		session.hide_benchmark();
		assert!(session.benchmarks().is_none());

		let ticket = session.begin_benchmark().unwrap();
		session.reset();
		assert_eq!(
			session.finish_benchmark(ticket, Ok(Default::default())),
			Completion::Stale
		);
		assert!(session.benchmarks().is_none());
	}
}
