// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::form::FormValues;
use crate::validation::ValidationRules;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://reqres.in/api/users";

/// Settings for an onboarding form instance. Any field left out of the source data takes its default.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormConfig {
	/// Where submissions are posted
	pub endpoint: String,
	/// Whether the TOS checkbox must be checked to submit
	pub require_tos: bool,
	/// Whether submitted passwords are echoed in the results list instead of being masked
	pub show_submitted_passwords: bool,
	/// Values the form starts with and returns to after a successful submission
	pub initial_values: FormValues,
}

impl Default for FormConfig {
	fn default() -> Self {
		Self {
			endpoint: String::from(DEFAULT_ENDPOINT),
			require_tos: false,
			show_submitted_passwords: false,
			initial_values: FormValues::default(),
		}
	}
}

impl FormConfig {
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	pub fn validation_rules(&self) -> ValidationRules {
		ValidationRules {
			require_tos: self.require_tos,
		}
	}
}
