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

use crate::error::EstimatorError;

/// Admits one outstanding request at a time. A second acquire while busy is rejected.
#[derive(Default, Debug)]
pub(crate) struct RequestSlot {
	current: Option<u64>,
	next_id: u64,
}

impl RequestSlot {
	pub fn acquire(&mut self) -> Result<u64, EstimatorError> {
		if self.current.is_some() {
			return Err(EstimatorError::Busy);
		}

		self.next_id += 1;
		self.current = Some(self.next_id);
		Ok(self.next_id)
	}

	/// Free the slot if `id` still owns it.
	pub fn release(&mut self, id: u64) -> bool {
		if self.current == Some(id) {
			self.current = None;
			return true;
		}

		false
	}

	/// Forget the owner. Its later release becomes a no-op.
	pub fn abandon(&mut self) {
		self.current = None;
	}

	pub fn is_busy(&self) -> bool {
		self.current.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn second_acquire_is_rejected_until_release() {
		let mut slot = RequestSlot::default();
		let first = slot.acquire().unwrap();
		assert!(matches!(slot.acquire(), Err(EstimatorError::Busy)));

		assert!(slot.release(first));
		assert!(!slot.is_busy());
		assert!(slot.acquire().is_ok());
	}

	#[test]
	fn abandoned_owner_cannot_release_newer_request() {
		let mut slot = RequestSlot::default();
		let old = slot.acquire().unwrap();
		slot.abandon();

		let new = slot.acquire().unwrap();
		assert!(!slot.release(old));
		assert!(slot.is_busy());
		assert!(slot.release(new));
	}
}
