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

use super::typedef::*;
use crate::config::EstimatorConfig;
use crate::error::EstimatorError;
use crate::input::InputRecord;

const RESOURCE: &'static str = "prediction service";

/// Single best-effort POST to the model service. No retries, no backoff.
#[derive(Clone, Debug)]
pub struct PredictionClient {
	http: reqwest::Client,
	url: String,
}

impl PredictionClient {
	pub fn new(config: &EstimatorConfig) -> Result<Self, EstimatorError> {
		Ok(Self {
			http: config.http_client()?,
			url: config.predict_url(),
		})
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	pub async fn predict(&self, inputs: &InputRecord) -> Result<PredictionResult, EstimatorError> {
		tracing::debug!(url = %self.url, fields = inputs.len(), "requesting prediction");

		let response = self
			.http
			.post(&self.url)
			.json(&PredictionRequest { inputs })
			.send()
			.await
			.map_err(|source| EstimatorError::Transport {
				url: self.url.clone(),
				source,
			})?;

		let status = response.status();
		if !status.is_success() {
			tracing::warn!(url = %self.url, %status, "prediction rejected");
			return Err(EstimatorError::Status {
				resource: String::from(RESOURCE),
				status,
			});
		}

		let body = response
			.bytes()
			.await
			.map_err(|source| EstimatorError::Transport {
				url: self.url.clone(),
				source,
			})?;

		let result = serde_json::from_slice::<PredictionResult>(&body).map_err(|source| {
			EstimatorError::Decode {
				url: self.url.clone(),
				source,
			}
		})?;

		tracing::info!(
			predictions = result.predictions.len(),
			reports = result.reports.len(),
			"prediction received"
		);

		Ok(result)
	}
}
