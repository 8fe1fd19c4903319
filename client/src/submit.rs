// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::network_error;
use gloo_net::http::Request;
use onboarding_shared::form::FormValues;
use onboarding_shared::submission::{response_outcome, SubmissionError, SubmitTransport};
use onboarding_shared::submitted::SubmissionStatus;

/// Posts form values as JSON using the browser's fetch API
pub struct HttpTransport {
	endpoint: String,
}

impl HttpTransport {
	pub fn new(endpoint: String) -> Self {
		Self { endpoint }
	}
}

impl SubmitTransport for HttpTransport {
	/// Sends one request. Any non-2xx status is an error, and a successful response must have a JSON body.
	async fn post(&self, values: &FormValues) -> Result<SubmissionStatus, SubmissionError> {
		let request = Request::post(&self.endpoint)
			.json(values)
			.map_err(|error| SubmissionError::Encode(error.to_string()))?;
		let response = request.send().await.map_err(network_error)?;
		let body = response.text().await.map_err(|error| error.to_string());
		response_outcome(response.status(), body)
	}
}
