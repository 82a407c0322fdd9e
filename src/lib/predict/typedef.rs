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

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::input::{InputField, InputRecord};
use crate::typedef::FieldValue;

#[derive(Serialize, Debug)]
pub(crate) struct PredictionRequest<'a> {
	pub inputs: &'a InputRecord,
}

/// How well the model behind one target field performed in cross-validation.
#[derive(Default, Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ModelReport {
	pub target: String,
	#[serde(default)]
	pub model_name: String,
	#[serde(default)]
	pub r2_mean: Option<f64>,
	#[serde(default)]
	pub mae_mean: Option<f64>,
}

#[derive(Default, Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct PredictionResult {
	#[serde(default)]
	pub predictions: BTreeMap<String, FieldValue>,
	#[serde(default)]
	pub reports: Vec<ModelReport>,
}

impl PredictionResult {
	pub fn prediction(&self, field: InputField) -> Option<&FieldValue> {
		self.predictions.get(field.key())
	}

	/// First report targeting `field`, the service lists the best model first.
	pub fn report_for(&self, field: InputField) -> Option<&ModelReport> {
		self.reports.iter().find(|each| each.target == field.key())
	}
}
