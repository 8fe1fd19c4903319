// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::validation::{validate, ValidationErrors, ValidationRules};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One of the inputs on the onboarding form
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Field {
	Name,
	Email,
	Password,
	Tos,
}

impl Field {
	pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Password, Field::Tos];

	/// The name used for the field in the DOM and in error messages
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Email => "email",
			Self::Password => "password",
			Self::Tos => "tos",
		}
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// The values entered into the form. This is also the request body sent on submission.
#[derive(Clone, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormValues {
	pub name: String,
	pub email: String,
	pub password: String,
	#[serde(alias = "tos")]
	pub tos_accepted: bool,
}

// Values get logged on submission, so the password stays out of the output.
impl fmt::Debug for FormValues {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormValues")
			.field("name", &self.name)
			.field("email", &self.email)
			.field("password", &"<redacted>")
			.field("tos_accepted", &self.tos_accepted)
			.finish()
	}
}

/// Values, touched fields, and validation errors for the form.
///
/// The errors are always the result of validating the current values; every update function keeps them in sync.
#[derive(Clone, Debug, PartialEq)]
pub struct FormModel {
	initial_values: FormValues,
	rules: ValidationRules,
	values: FormValues,
	touched: BTreeSet<Field>,
	errors: ValidationErrors,
}

impl FormModel {
	pub fn new(initial_values: FormValues, rules: ValidationRules) -> Self {
		let errors = validate(&initial_values, &rules);
		Self {
			values: initial_values.clone(),
			initial_values,
			rules,
			touched: BTreeSet::new(),
			errors,
		}
	}

	pub fn values(&self) -> &FormValues {
		&self.values
	}

	pub fn errors(&self) -> &ValidationErrors {
		&self.errors
	}

	pub fn is_valid(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn set_name(&mut self, name: String) {
		self.values.name = name;
		self.revalidate();
	}

	pub fn set_email(&mut self, email: String) {
		self.values.email = email;
		self.revalidate();
	}

	pub fn set_password(&mut self, password: String) {
		self.values.password = password;
		self.revalidate();
	}

	pub fn set_tos_accepted(&mut self, accepted: bool) {
		self.values.tos_accepted = accepted;
		self.revalidate();
	}

	/// Sets one of the text fields. Passing [`Field::Tos`] does nothing; use [`FormModel::set_tos_accepted`].
	pub fn set_text(&mut self, field: Field, value: String) {
		match field {
			Field::Name => self.set_name(value),
			Field::Email => self.set_email(value),
			Field::Password => self.set_password(value),
			Field::Tos => log::warn!("Ignoring text value for the TOS checkbox"),
		}
	}

	/// Marks a field as having been visited by the user. This only affects which errors are shown.
	pub fn touch(&mut self, field: Field) {
		self.touched.insert(field);
	}

	pub fn touch_all(&mut self) {
		self.touched.extend(Field::ALL);
	}

	pub fn is_touched(&self, field: Field) -> bool {
		self.touched.contains(&field)
	}

	pub fn touched(&self) -> impl Iterator<Item = Field> + '_ {
		self.touched.iter().copied()
	}

	/// Gets the error message that should be displayed for a field, if any
	pub fn visible_error(&self, field: Field) -> Option<&str> {
		if self.is_touched(field) {
			self.errors.get(field)
		} else {
			None
		}
	}

	/// Returns the form to its initial values and forgets which fields were touched
	pub fn reset(&mut self) {
		self.values = self.initial_values.clone();
		self.touched.clear();
		self.revalidate();
	}

	fn revalidate(&mut self) {
		self.errors = validate(&self.values, &self.rules);
	}
}
