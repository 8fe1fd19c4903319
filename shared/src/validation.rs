// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::form::{Field, FormValues};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Local part, then a dotted domain whose last label is a top-level domain starting with a letter
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])$";

fn email_regex() -> &'static Regex {
	static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
	EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("Email pattern failed to compile"))
}

pub fn is_valid_email(email: &str) -> bool {
	email_regex().is_match(email)
}

/// Adjustable parts of validation
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationRules {
	/// Whether the TOS checkbox must be checked before the form can be submitted
	pub require_tos: bool,
}

/// Error messages keyed by the field they apply to. A field has at most one message.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
	pub fn get(&self, field: Field) -> Option<&str> {
		self.0.get(&field).map(String::as_str)
	}

	pub fn contains(&self, field: Field) -> bool {
		self.0.contains_key(&field)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
		self.0.iter().map(|(field, message)| (*field, message.as_str()))
	}

	fn insert(&mut self, field: Field, message: String) {
		self.0.entry(field).or_insert(message);
	}
}

fn required(errors: &mut ValidationErrors, field: Field, value: &str) -> bool {
	if value.is_empty() {
		errors.insert(field, format!("{} is a required field", field));
		false
	} else {
		true
	}
}

/// Validates form values against the rules
pub fn validate(values: &FormValues, rules: &ValidationRules) -> ValidationErrors {
	let mut errors = ValidationErrors::default();

	required(&mut errors, Field::Name, &values.name);
	if required(&mut errors, Field::Email, &values.email) && !is_valid_email(&values.email) {
		errors.insert(Field::Email, format!("{} must be a valid email", Field::Email));
	}
	required(&mut errors, Field::Password, &values.password);
	if rules.require_tos && !values.tos_accepted {
		errors.insert(Field::Tos, format!("{} must be accepted", Field::Tos));
	}

	errors
}
