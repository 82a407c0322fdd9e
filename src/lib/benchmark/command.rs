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

use std::sync::Mutex;
use tauri::{AppHandle, Emitter, State};

use super::typedef::BenchmarkSet;
use crate::desktop::{report_error, Services};
use crate::session::{Completion, Session};

const ERROR_BENCHMARK: &'static str = "Failed Loading Benchmark";

#[tauri::command]
pub(crate) async fn show_benchmark(
	app: AppHandle,
	state: State<'_, Mutex<Session>>,
	services: State<'_, Services>,
) -> Result<Option<BenchmarkSet>, ()> {
	let ticket = {
		let mut guarded_state = match state.lock() {
			Ok(ok) => ok,
			Err(err) => {
				report_error(&app, "State Inaccessible before Benchmark", err.to_string());
				return Err(());
			}
		};

		match guarded_state.begin_benchmark() {
			Ok(ok) => ok,
			Err(err) => {
				report_error(&app, ERROR_BENCHMARK, err.to_string());
				return Err(());
			}
		}
	};

	let _ = app.emit(crate::event::BENCHMARK_BUSY, true);

	let outcome = services.benchmarks.load_all().await;

	let mut guarded_state = match state.lock() {
		Ok(ok) => ok,
		Err(err) => {
			report_error(&app, "State Inaccessible after Benchmark", err.to_string());
			return Err(());
		}
	};

	let completion = guarded_state.finish_benchmark(ticket, outcome);
	let _ = app.emit(crate::event::BENCHMARK_BUSY, guarded_state.is_loading_benchmark());

	match completion {
		Completion::Applied => {
			let benchmarks = guarded_state.benchmarks().cloned();
			let _ = app.emit(crate::event::BENCHMARK_READY, benchmarks.clone());
			Ok(benchmarks)
		}
		Completion::Failed(message) => {
			report_error(&app, ERROR_BENCHMARK, message);
			Err(())
		}
		Completion::Stale => Ok(None),
	}
}

#[tauri::command]
pub(crate) fn hide_benchmark(app: AppHandle, state: State<'_, Mutex<Session>>) {
	match state.lock() {
		Ok(mut guarded_state) => guarded_state.hide_benchmark(),
		Err(err) => report_error(&app, "State Inaccessible on Hiding Benchmark", err.to_string()),
	}
}
