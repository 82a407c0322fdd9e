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

use chrono::NaiveDate;
use std::str::FromStr;

use super::typedef::*;
use crate::typedef::FieldValue;

/// Bring a raw form value into the shape the model service expects for `field`.
///
/// Unparseable values are kept as typed, the derived metrics treat them as absent.
pub(super) fn normalize_value(field: InputField, value: FieldValue) -> FieldValue {
	let text = match value {
		FieldValue::Number(_) => return value,
		FieldValue::Text(text) => text,
	};

	match field.kind() {
		FieldKind::NUMBER => match FieldValue::Text(text.clone()).as_number() {
			Some(number) => FieldValue::Number(number),
			None => FieldValue::Text(text),
		},
		FieldKind::TEXT => FieldValue::Text(text),
		FieldKind::CURRENCY => match Currency::from_str(text.trim()) {
			Ok(currency) => FieldValue::Text(currency.to_string()),
			Err(_) => FieldValue::Text(text),
		},
		FieldKind::MONTH => match parse_month(&text) {
			Some(month) => FieldValue::Text(month.format("%Y-%m").to_string()),
			None => FieldValue::Text(text),
		},
	}
}

/// Parse a `YYYY-MM` month picker value into the first day of that month.
pub fn parse_month(raw: &str) -> Option<NaiveDate> {
	let trimmed = raw.trim();
	if trimmed.is_empty() {
		return None;
	}

	NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d").ok()
}
