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
use std::borrow::Cow;

#[derive(Default, Serialize, Clone, Debug)]
pub struct ErrorInfo {
	pub title: Cow<'static, str>,
	pub message: String,
}

/// A scalar as typed into the form or returned by the model service.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
	Number(f64),
	Text(String),
}

impl FieldValue {
	/// Numeric reading of the value, `None` when it is not a finite number.
	pub fn as_number(&self) -> Option<f64> {
		let number = match self {
			FieldValue::Number(number) => *number,
			FieldValue::Text(text) => text.trim().parse::<f64>().ok()?,
		};

		number.is_finite().then_some(number)
	}

	pub fn is_blank(&self) -> bool {
		match self {
			FieldValue::Number(_) => false,
			FieldValue::Text(text) => text.is_empty(),
		}
	}
}

impl Default for FieldValue {
	fn default() -> Self {
		FieldValue::Text(String::new())
	}
}

impl std::fmt::Display for FieldValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			FieldValue::Number(number) => write!(f, "{}", number),
			FieldValue::Text(text) => write!(f, "{}", text),
		}
	}
}

impl From<f64> for FieldValue {
	fn from(value: f64) -> Self {
		FieldValue::Number(value)
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		FieldValue::Text(value.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		FieldValue::Text(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn text_reads_as_number_when_numeric() {
		assert_eq!(FieldValue::from(" 500 ").as_number(), Some(500.0));
		assert_eq!(FieldValue::from("1e3").as_number(), Some(1000.0));
		assert_eq!(FieldValue::from("five").as_number(), None);
		assert_eq!(FieldValue::from("inf").as_number(), None);
		assert_eq!(FieldValue::Number(f64::NAN).as_number(), None);
	}

	#[test]
	fn untagged_json_keeps_numbers_and_text_apart() {
		let parsed: Vec<FieldValue> = serde_json::from_str(r#"[2, "UK, IN"]"#).unwrap();
		assert_eq!(parsed[0], FieldValue::Number(2.0));
		assert_eq!(parsed[1], FieldValue::from("UK, IN"));
		assert_eq!(parsed[0].to_string(), "2");
	}
}
