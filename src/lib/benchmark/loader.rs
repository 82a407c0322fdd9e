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

use std::path::PathBuf;

use super::helper::load_spreadsheet;
use super::typedef::*;
use crate::config::EstimatorConfig;
use crate::error::EstimatorError;

const BACKEND_RESOURCE: &'static str = "backend excel";

#[derive(Clone, Debug)]
pub struct BenchmarkLoader {
	http: reqwest::Client,
	local_path: PathBuf,
	backend_url: String,
}

impl BenchmarkLoader {
	pub fn new(config: &EstimatorConfig) -> Result<Self, EstimatorError> {
		Ok(Self {
			http: config.http_client()?,
			local_path: config.benchmark_path.clone(),
			backend_url: config.backend_excel_url(),
		})
	}

	/// Resolve a relative bundled path against `dir`, typically the app resource directory.
	pub fn with_resource_dir(mut self, dir: PathBuf) -> Self {
		if self.local_path.is_relative() {
			self.local_path = dir.join(&self.local_path);
		}
		self
	}

	pub async fn load_local(&self) -> Result<BenchmarkTable, EstimatorError> {
		let bytes = tokio::fs::read(&self.local_path)
			.await
			.map_err(|source| EstimatorError::Io {
				path: self.local_path.clone(),
				source,
			})?;

		load_spreadsheet(bytes, &self.local_path.to_string_lossy())
	}

	pub async fn load_backend(&self) -> Result<BenchmarkTable, EstimatorError> {
		let response = self
			.http
			.post(&self.backend_url)
			.send()
			.await
			.map_err(|source| EstimatorError::Transport {
				url: self.backend_url.clone(),
				source,
			})?;

		let status = response.status();
		if !status.is_success() {
			return Err(EstimatorError::Status {
				resource: String::from(BACKEND_RESOURCE),
				status,
			});
		}

		let bytes = response
			.bytes()
			.await
			.map_err(|source| EstimatorError::Transport {
				url: self.backend_url.clone(),
				source,
			})?;

		load_spreadsheet(bytes.to_vec(), BACKEND_RESOURCE)
	}

	/// Bundled file first, then the backend one. The first failure wins.
	pub async fn load_all(&self) -> Result<BenchmarkSet, EstimatorError> {
		let local = self.load_local().await?;
		let backend = self.load_backend().await?;

		tracing::info!(
			local_rows = local.rows.len(),
			backend_rows = backend.rows.len(),
			"benchmarks loaded"
		);

		Ok(BenchmarkSet { local, backend })
	}
}
