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

use serde::Serialize;
use std::sync::Mutex;
use strum::IntoEnumIterator;
use tauri::{AppHandle, State};

use super::typedef::*;
use crate::desktop::report_error;
use crate::session::{Session, SessionSnapshot};
use crate::typedef::FieldValue;

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FieldInfo {
	pub key: &'static str,
	pub label: &'static str,
	pub kind: FieldKind,
	pub canonical: bool,
}

#[tauri::command]
pub(crate) fn list_fields() -> Vec<FieldInfo> {
	InputField::iter()
		.map(|each| FieldInfo {
			key: each.key(),
			label: each.label(),
			kind: each.kind(),
			canonical: InputField::CANONICAL.contains(&each),
		})
		.collect()
}

#[tauri::command]
pub(crate) fn set_input(
	app: AppHandle,
	state: State<'_, Mutex<Session>>,
	key: String,
	value: FieldValue,
) -> Option<SessionSnapshot> {
	let mut guarded_state = match state.lock() {
		Ok(ok) => ok,
		Err(err) => {
			report_error(&app, "State Inaccessible on Editing Input", err.to_string());
			return None;
		}
	};

	if guarded_state.set_input(&key, value) {
		tracing::debug!(key = key.as_str(), "input changed");
	}

	Some(guarded_state.snapshot())
}
