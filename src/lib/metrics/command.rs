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

use std::{fs::File, sync::Mutex};
use tauri::{AppHandle, State};
use tauri_plugin_dialog::{DialogExt, FilePath};

use super::helper::write_estimation_csv;
use super::typedef::*;
use crate::desktop::report_error;
use crate::session::Session;

const ERROR_SAVE: &'static str = "Cannot Save File";

#[tauri::command]
pub(crate) fn get_estimation(
	app: AppHandle,
	state: State<'_, Mutex<Session>>,
) -> Option<EstimationReport> {
	match state.lock() {
		Ok(guarded_state) => guarded_state.report(),
		Err(err) => {
			report_error(&app, "State Inaccessible on Getting Estimation", err.to_string());
			None
		}
	}
}

#[tauri::command]
pub(crate) async fn save_estimation(
	app: AppHandle,
	state: State<'_, Mutex<Session>>,
) -> Result<(), ()> {
	let rows = {
		let guarded_state = match state.lock() {
			Ok(ok) => ok,
			Err(err) => {
				report_error(&app, "State Inaccessible before Saving", err.to_string());
				return Err(());
			}
		};

		match guarded_state.report() {
			Some(found) => found.table,
			None => {
				report_error(
					&app,
					ERROR_SAVE,
					String::from("There is no estimation to save yet"),
				);
				return Err(());
			}
		}
	};

	let (tx, mut rx) = tauri::async_runtime::channel::<Option<FilePath>>(1024);

	app.dialog()
		.file()
		.set_title("Save the estimation table")
		.add_filter("Comma-Separated Values (CSV) File", &["csv"])
		.add_filter("Other File Type", &["*"])
		.save_file(move |file_path| {
			let _ = tx.blocking_send(file_path);
		});

	let file_path = match rx.recv().await.flatten() {
		Some(found) => found,
		None => return Ok(()),
	};

	let target_path = match file_path.into_path() {
		Ok(ok) => ok.with_extension("csv"),
		Err(err) => {
			report_error(&app, "Cannot Parse File Path", err.to_string());
			return Ok(());
		}
	};

	let file = match File::create(&target_path) {
		Ok(ok) => ok,
		Err(err) => {
			report_error(&app, ERROR_SAVE, err.to_string());
			return Err(());
		}
	};

	if let Err(err) = write_estimation_csv(&rows, file) {
		report_error(&app, "Potentially Corrupted", err.to_string());
		return Err(());
	}

	tracing::info!(path = %target_path.display(), rows = rows.len(), "estimation saved");
	Ok(())
}
