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
use std::{
	path::{Path, PathBuf},
	time::Duration,
};

use crate::error::EstimatorError;
use crate::input::Currency;

pub const LOCAL_ENDPOINT: &'static str = "http://127.0.0.1:8009";
pub const HOSTED_ENDPOINT: &'static str = "https://greenfield-ml-model-1b.onrender.com";
pub const CONFIG_FILE_NAME: &'static str = "estimator.json";

const DEFAULT_BENCHMARK_PATH: &'static str = "Book3.xlsx";
const DEFAULT_PREDICTION_ERROR: &'static str =
	"Unable to contact the prediction service. Please check that the backend is running.";

/// Where the services live and how the result panel falls back when data is missing.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EstimatorConfig {
	/// Base address serving `/predict` and `/backend_excel`.
	pub endpoint: String,
	/// Spreadsheet bundled with the app, shown first in the benchmark panel.
	pub benchmark_path: PathBuf,
	pub default_currency: Currency,
	/// No timeout when unset.
	pub request_timeout_secs: Option<u64>,
	/// R² shown when the service reports nothing for the effort target.
	pub reliability_fallback: Option<f64>,
	pub prediction_error_message: String,
}

impl Default for EstimatorConfig {
	fn default() -> Self {
		Self::local()
	}
}

impl EstimatorConfig {
	pub fn local() -> Self {
		Self {
			endpoint: String::from(LOCAL_ENDPOINT),
			benchmark_path: PathBuf::from(DEFAULT_BENCHMARK_PATH),
			default_currency: Currency::GBP,
			request_timeout_secs: None,
			reliability_fallback: Some(0.487),
			prediction_error_message: String::from(DEFAULT_PREDICTION_ERROR),
		}
	}

	pub fn hosted() -> Self {
		Self {
			endpoint: String::from(HOSTED_ENDPOINT),
			..Self::local()
		}
	}

	/// Read a JSON config file, or fall back to the local preset when there is none.
	pub fn load(path: &Path) -> Result<Self, EstimatorError> {
		if !path.exists() {
			tracing::debug!("no config at {}, using defaults", path.display());
			return Ok(Self::default());
		}

		let raw = std::fs::read_to_string(path).map_err(|source| EstimatorError::Io {
			path: path.to_path_buf(),
			source,
		})?;

		let config = serde_json::from_str::<Self>(&raw).map_err(|err| EstimatorError::Config {
			path: path.to_path_buf(),
			reason: err.to_string(),
		})?;

		if config.endpoint.trim().is_empty() {
			return Err(EstimatorError::Config {
				path: path.to_path_buf(),
				reason: String::from("endpoint must not be empty"),
			});
		}

		tracing::info!("loaded config from {}", path.display());
		Ok(config)
	}

	pub fn predict_url(&self) -> String {
		self.service_url("predict")
	}

	pub fn backend_excel_url(&self) -> String {
		self.service_url("backend_excel")
	}

	pub(crate) fn http_client(&self) -> Result<reqwest::Client, EstimatorError> {
		let mut builder = reqwest::Client::builder().gzip(true);
		if let Some(secs) = self.request_timeout_secs {
			builder = builder.timeout(Duration::from_secs(secs));
		}

		builder.build().map_err(|source| EstimatorError::Transport {
			url: self.endpoint.clone(),
			source,
		})
	}

	fn service_url(&self, path: &str) -> String {
		format!("{}/{}", self.endpoint.trim_end_matches('/'), path)
	}
}
