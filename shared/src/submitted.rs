// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The response body returned by the endpoint for a successful submission, kept exactly as received
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubmissionStatus(Value);

impl SubmissionStatus {
	pub fn new(body: Value) -> Self {
		Self(body)
	}

	pub fn body(&self) -> &Value {
		&self.0
	}

	/// The identifier the endpoint assigned, if it sent one. Numeric IDs are converted to strings.
	pub fn id(&self) -> Option<String> {
		match self.0.get("id")? {
			Value::String(id) if !id.is_empty() => Some(id.clone()),
			Value::Number(id) => Some(id.to_string()),
			_ => None,
		}
	}

	pub fn name(&self) -> Option<&str> {
		self.string_field("name")
	}

	pub fn email(&self) -> Option<&str> {
		self.string_field("email")
	}

	pub fn password(&self) -> Option<&str> {
		self.string_field("password")
	}

	pub fn tos_accepted(&self) -> Option<bool> {
		self.0
			.get("tosAccepted")
			.or_else(|| self.0.get("tos"))
			.and_then(Value::as_bool)
	}

	fn string_field(&self, key: &str) -> Option<&str> {
		self.0.get(key).and_then(Value::as_str)
	}
}

impl From<Value> for SubmissionStatus {
	fn from(body: Value) -> Self {
		Self::new(body)
	}
}

/// Identifies an entry in the submitted users list
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum EntryKey {
	/// The ID from the endpoint's response
	Remote(String),
	/// A locally assigned sequence number, used when the response had no ID or its ID was already taken
	Local(u64),
}

impl fmt::Display for EntryKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Remote(id) => write!(f, "remote-{}", id),
			Self::Local(seq) => write!(f, "local-{}", seq),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmittedUser {
	pub key: EntryKey,
	pub status: SubmissionStatus,
}

/// Statuses received during this page session, in the order they arrived
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmittedUsers {
	entries: Vec<SubmittedUser>,
	next_local_key: u64,
}

impl SubmittedUsers {
	pub fn push(&mut self, status: SubmissionStatus) -> &SubmittedUser {
		let key = match status.id() {
			Some(id) if !self.contains_key(&EntryKey::Remote(id.clone())) => EntryKey::Remote(id),
			Some(id) => {
				log::warn!("Submission response reused ID {}; assigning a local key", id);
				self.next_local()
			}
			None => self.next_local(),
		};
		self.entries.push(SubmittedUser { key, status });
		&self.entries[self.entries.len() - 1]
	}

	pub fn entries(&self) -> &[SubmittedUser] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn contains_key(&self, key: &EntryKey) -> bool {
		self.entries.iter().any(|entry| entry.key == *key)
	}

	fn next_local(&mut self) -> EntryKey {
		let key = EntryKey::Local(self.next_local_key);
		self.next_local_key += 1;
		key
	}
}
