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

pub(crate) const DIALOG_ERROR: &'static str = "dialog-error";
pub(crate) const SESSION_RESET: &'static str = "session-reset";
pub(crate) const ESTIMATE_BUSY: &'static str = "estimate-busy";
pub(crate) const ESTIMATE_READY: &'static str = "estimate-ready";
pub(crate) const BENCHMARK_BUSY: &'static str = "benchmark-busy";
pub(crate) const BENCHMARK_READY: &'static str = "benchmark-ready";
