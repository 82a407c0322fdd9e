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
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::typedef::FieldValue;

#[derive(Default, PartialEq, Eq, Deserialize, Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
	#[default]
	NUMBER,
	TEXT,
	CURRENCY,
	MONTH,
}

/// Every field the form knows about. The wire key is what the model service expects.
#[allow(non_camel_case_types)]
#[derive(PartialEq, Eq, Hash, EnumIter, Deserialize, Serialize, Clone, Copy, Debug)]
pub enum InputField {
	CLIENT_REVENUE,
	NUMBER_OF_USERS,
	RICEFW,
	DURATION_MONTHS,
	COUNTRIES_MARKET,
	ESTIMATED_EFFORT,
	BLENDED_RATE,
	USER_CURRENCY,
	INDIA_COMPONENT_PCT,
	WAVE,
	TEAM,
	ROLE,
	COUNT_IN,
	COUNT_UK,
	START_MONTH,
	END_MONTH,
}

impl InputField {
	/// Fields shown as cards on top of the result panel, in display order.
	pub const CANONICAL: [InputField; 5] = [
		InputField::CLIENT_REVENUE,
		InputField::NUMBER_OF_USERS,
		InputField::RICEFW,
		InputField::DURATION_MONTHS,
		InputField::COUNTRIES_MARKET,
	];

	pub const fn key(self) -> &'static str {
		match self {
			InputField::CLIENT_REVENUE => "Client Revenue",
			InputField::NUMBER_OF_USERS => "Number of Users",
			InputField::RICEFW => "RICEFW",
			InputField::DURATION_MONTHS => "Duration (Months)",
			InputField::COUNTRIES_MARKET => "Countries/Market",
			InputField::ESTIMATED_EFFORT => "Estimated Effort (man days)",
			InputField::BLENDED_RATE => "blendedRate",
			InputField::USER_CURRENCY => "userCurrency",
			InputField::INDIA_COMPONENT_PCT => "indiaComponentPct",
			InputField::WAVE => "wave",
			InputField::TEAM => "team",
			InputField::ROLE => "role",
			InputField::COUNT_IN => "countIN",
			InputField::COUNT_UK => "countUK",
			InputField::START_MONTH => "startMonth",
			InputField::END_MONTH => "endMonth",
		}
	}

	pub const fn label(self) -> &'static str {
		match self {
			InputField::CLIENT_REVENUE => "Client Revenue",
			InputField::NUMBER_OF_USERS => "Number of Users",
			InputField::RICEFW => "RICEFW",
			InputField::DURATION_MONTHS => "Duration (Months)",
			InputField::COUNTRIES_MARKET => "Countries/Market",
			InputField::ESTIMATED_EFFORT => "Estimated Effort (man days)",
			InputField::BLENDED_RATE => "Blended rate",
			InputField::USER_CURRENCY => "User currency",
			InputField::INDIA_COMPONENT_PCT => "India component %",
			InputField::WAVE => "Wave",
			InputField::TEAM => "Team",
			InputField::ROLE => "Role",
			InputField::COUNT_IN => "Count IN",
			InputField::COUNT_UK => "Count UK",
			InputField::START_MONTH => "Start (month / year)",
			InputField::END_MONTH => "End (month / year)",
		}
	}

	pub const fn kind(self) -> FieldKind {
		match self {
			InputField::COUNTRIES_MARKET
			| InputField::WAVE
			| InputField::TEAM
			| InputField::ROLE => FieldKind::TEXT,
			InputField::USER_CURRENCY => FieldKind::CURRENCY,
			InputField::START_MONTH | InputField::END_MONTH => FieldKind::MONTH,
			_ => FieldKind::NUMBER,
		}
	}

	pub fn from_key(key: &str) -> Option<Self> {
		InputField::iter().find(|each| each.key() == key)
	}
}

#[derive(
	Default,
	PartialEq,
	Eq,
	EnumIter,
	EnumString,
	Display,
	Deserialize,
	Serialize,
	Clone,
	Copy,
	Debug,
)]
#[strum(ascii_case_insensitive)]
pub enum Currency {
	#[default]
	GBP,
	INR,
	USD,
	EUR,
}

impl Currency {
	pub const fn symbol(self) -> &'static str {
		match self {
			Currency::GBP => "£",
			Currency::INR => "₹",
			Currency::USD => "$",
			Currency::EUR => "€",
		}
	}
}

/// Sparse record of what the user typed. A missing key means the model should estimate it.
#[derive(Default, PartialEq, Deserialize, Serialize, Clone, Debug)]
#[serde(transparent)]
pub struct InputRecord(BTreeMap<String, FieldValue>);

impl InputRecord {
	pub fn new() -> Self {
		Default::default()
	}

	/// Store `value` under `key`, or drop the key when the value is blank.
	/// Returns whether the record changed.
	pub fn set(&mut self, key: &str, value: FieldValue) -> bool {
		let value = match InputField::from_key(key) {
			Some(field) => super::helper::normalize_value(field, value),
			None => value,
		};

		if value.is_blank() {
			return self.0.remove(key).is_some();
		}

		match self.0.insert(key.to_string(), value.clone()) {
			Some(previous) => previous != value,
			None => true,
		}
	}

	pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
		self.0.remove(key)
	}

	pub fn get(&self, key: &str) -> Option<&FieldValue> {
		self.0.get(key)
	}

	pub fn field(&self, field: InputField) -> Option<&FieldValue> {
		self.0.get(field.key())
	}

	/// Numeric reading of a field, absent when missing or not a number.
	pub fn number(&self, field: InputField) -> Option<f64> {
		self.field(field).and_then(FieldValue::as_number)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Raw currency code, falling back to `default` when the user picked none.
	pub fn currency_code(&self, default: Currency) -> String {
		match self.field(InputField::USER_CURRENCY) {
			Some(found) => found.to_string(),
			None => default.to_string(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
		self.0.iter()
	}

	pub fn clear(&mut self) {
		self.0.clear();
	}
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for InputRecord {
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		let mut record = InputRecord::new();
		for (key, value) in iter {
			record.set(&key.into(), value.into());
		}
		record
	}
}
