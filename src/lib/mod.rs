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

pub mod typedef;

pub mod benchmark;
pub mod config;
pub mod error;
mod guard;
pub mod input;
pub mod metrics;
pub mod predict;
pub mod session;

#[cfg(feature = "desktop")]
mod event;

pub use config::EstimatorConfig;
pub use error::EstimatorError;
pub use session::{Completion, Session};
pub use typedef::{ErrorInfo, FieldValue};

/// Log to stderr, `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

	let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(feature = "desktop")]
pub use desktop::run;

#[cfg(feature = "desktop")]
mod desktop {
	use std::{borrow::Cow, sync::Mutex};
	use tauri::{AppHandle, Emitter, Manager, State};

	use crate::benchmark::BenchmarkLoader;
	use crate::predict::PredictionClient;
	use crate::session::{Session, SessionSnapshot};
	use crate::typedef::ErrorInfo;
	use crate::EstimatorConfig;

	// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/
	use crate::benchmark::command::*;
	use crate::input::command::*;
	use crate::metrics::command::*;
	use crate::predict::command::*;

	/// Network clients shared by every command, built once from the config.
	pub(crate) struct Services {
		pub predictor: PredictionClient,
		pub benchmarks: BenchmarkLoader,
	}

	pub(crate) fn report_error(app: &AppHandle, title: &'static str, message: String) {
		tracing::error!(title, %message);
		let _ = app.emit::<ErrorInfo>(
			crate::event::DIALOG_ERROR,
			ErrorInfo {
				title: Cow::Borrowed(title),
				message,
			},
		);
	}

	#[tauri::command]
	fn get_session(
		app: AppHandle,
		state: State<'_, Mutex<Session>>,
	) -> Option<SessionSnapshot> {
		match state.lock() {
			Ok(guarded_state) => Some(guarded_state.snapshot()),
			Err(err) => {
				report_error(&app, "State Inaccessible on Getting Session", err.to_string());
				None
			}
		}
	}

	#[tauri::command]
	pub(crate) fn restart(app: AppHandle, state: State<'_, Mutex<Session>>) {
		let mut guarded_state = match state.lock() {
			Ok(ok) => ok,
			Err(err) => {
				report_error(&app, "State Inaccessible on Restart", err.to_string());
				return;
			}
		};

		guarded_state.reset();
		let _ = app.emit(crate::event::SESSION_RESET, guarded_state.snapshot());
	}

	#[cfg_attr(mobile, tauri::mobile_entry_point)]
	pub fn run() {
		crate::init_logging();

		tauri::Builder::default()
			.plugin(tauri_plugin_opener::init())
			.plugin(tauri_plugin_dialog::init())
			.invoke_handler(tauri::generate_handler![
				get_session,
				list_fields,
				set_input,
				estimate,
				get_estimation,
				save_estimation,
				show_benchmark,
				hide_benchmark,
				restart
			])
			.setup(|app| {
				let config_path = app
					.path()
					.app_config_dir()?
					.join(crate::config::CONFIG_FILE_NAME);
				let config = EstimatorConfig::load(&config_path)?;

				let mut benchmarks = BenchmarkLoader::new(&config)?;
				if let Ok(resource_dir) = app.path().resource_dir() {
					benchmarks = benchmarks.with_resource_dir(resource_dir);
				}

				let services = Services {
					predictor: PredictionClient::new(&config)?,
					benchmarks,
				};
				tracing::info!(endpoint = %config.endpoint, "estimator ready");

				app.manage(Mutex::new(Session::new(config)));
				app.manage(services);
				Ok(())
			})
			.run(tauri::generate_context!())
			.expect("error while running tauri application");
	}
}
