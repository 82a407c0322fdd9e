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

use crate::desktop::{report_error, Services};
use crate::session::{Completion, Session};

const ERROR_ESTIMATE: &'static str = "Cannot Estimate Effort";

#[tauri::command]
pub(crate) async fn estimate(
	app: AppHandle,
	state: State<'_, Mutex<Session>>,
	services: State<'_, Services>,
) -> Result<(), ()> {
	let ticket = {
		let mut guarded_state = match state.lock() {
			Ok(ok) => ok,
			Err(err) => {
				report_error(&app, "State Inaccessible before Estimation", err.to_string());
				return Err(());
			}
		};

		match guarded_state.begin_estimate() {
			Ok(ok) => ok,
			Err(err) => {
				report_error(&app, ERROR_ESTIMATE, err.to_string());
				return Err(());
			}
		}
	};

	let _ = app.emit(crate::event::ESTIMATE_BUSY, true);

	let outcome = services.predictor.predict(ticket.inputs()).await;

	let mut guarded_state = match state.lock() {
		Ok(ok) => ok,
		Err(err) => {
			report_error(&app, "State Inaccessible after Estimation", err.to_string());
			return Err(());
		}
	};

	let completion = guarded_state.finish_estimate(ticket, outcome);
	let _ = app.emit(crate::event::ESTIMATE_BUSY, guarded_state.is_estimating());

	match completion {
		Completion::Applied => {
			let _ = app.emit(crate::event::ESTIMATE_READY, guarded_state.report());
			Ok(())
		}
		Completion::Failed(message) => {
			report_error(&app, ERROR_ESTIMATE, message);
			Err(())
		}
		Completion::Stale => Ok(()),
	}
}
