// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use onboarding_shared::submission::SubmissionError;
use std::fmt;

/// Errors reading the form configuration embedded in the host page
pub enum ConfigError {
	MissingDocument,
	Json(serde_json::Error),
}

impl From<serde_json::Error> for ConfigError {
	fn from(error: serde_json::Error) -> Self {
		Self::Json(error)
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingDocument => write!(f, "The page document is not available"),
			Self::Json(error) => write!(f, "The form configuration is not valid: {}", error),
		}
	}
}

/// Converts an error from sending the request or reading its response. Encoding the request body is mapped
/// separately where the body is built.
pub fn network_error(error: gloo_net::Error) -> SubmissionError {
	SubmissionError::Network(error.to_string())
}
