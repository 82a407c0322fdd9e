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

/// Everything that can go wrong between the form and its two backends.
#[derive(Debug, thiserror::Error)]
pub enum EstimatorError {
	#[error("request to {url} failed: {source}")]
	Transport {
		url: String,
		#[source]
		source: reqwest::Error,
	},

	#[error("Could not fetch {resource} ({status})")]
	Status {
		resource: String,
		status: reqwest::StatusCode,
	},

	#[error("malformed response from {url}: {source}")]
	Decode {
		url: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("Cannot read {origin} as a spreadsheet: {source}")]
	Spreadsheet {
		origin: String,
		#[source]
		source: calamine::Error,
	},

	#[error("{origin} contains no sheets.")]
	EmptyWorkbook { origin: String },

	#[error("Could not fetch {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid configuration in {}: {reason}", path.display())]
	Config { path: PathBuf, reason: String },

	#[error(transparent)]
	Csv(#[from] csv::Error),

	#[error("the previous request has not finished yet")]
	Busy,

	#[error("no input has been provided yet")]
	NoInputs,
}
