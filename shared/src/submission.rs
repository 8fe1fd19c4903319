// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::FormConfig;
use crate::form::{FormModel, FormValues};
use crate::submitted::{SubmissionStatus, SubmittedUser, SubmittedUsers};
use crate::validation::ValidationErrors;
use std::fmt;

/// Errors from sending a submission to the endpoint
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmissionError {
	Encode(String),
	Network(String),
	Status { code: u16, body: String },
	Decode(String),
}

impl fmt::Display for SubmissionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Encode(error) => write!(f, "The form values could not be encoded: {}", error),
			Self::Network(error) => write!(f, "The request could not be completed: {}", error),
			Self::Status { code, body } => write!(f, "The endpoint responded with status {}: {}", code, body),
			Self::Decode(error) => write!(f, "The response body was not valid JSON: {}", error),
		}
	}
}

/// Interprets the endpoint's response. The status decides the outcome before the body does: an error status is
/// reported as such even when its body couldn't be read.
///
/// # Errors
///
/// Fails for a non-2xx status, for an unreadable body on a 2xx response, and for a 2xx body that isn't JSON.
pub fn response_outcome(code: u16, body: Result<String, String>) -> Result<SubmissionStatus, SubmissionError> {
	if !(200..300).contains(&code) {
		let body = body.unwrap_or_else(|error| {
			log::debug!("Couldn't read the body of a {} response: {}", code, error);
			String::new()
		});
		return Err(SubmissionError::Status { code, body });
	}

	let body = body.map_err(SubmissionError::Network)?;
	let body = serde_json::from_str(&body).map_err(|error| SubmissionError::Decode(error.to_string()))?;
	Ok(SubmissionStatus::new(body))
}

/// Reasons a submission attempt never reached the endpoint
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitRejected {
	Invalid(ValidationErrors),
	InFlight,
}

impl fmt::Display for SubmitRejected {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Invalid(errors) => {
				write!(f, "The form has errors:")?;
				for (field, message) in errors.iter() {
					write!(f, " [{}] {}", field, message)?;
				}
				Ok(())
			}
			Self::InFlight => write!(f, "A submission is already in progress"),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitError {
	Rejected(SubmitRejected),
	Failed(SubmissionError),
}

impl From<SubmitRejected> for SubmitError {
	fn from(error: SubmitRejected) -> Self {
		Self::Rejected(error)
	}
}

impl From<SubmissionError> for SubmitError {
	fn from(error: SubmissionError) -> Self {
		Self::Failed(error)
	}
}

impl fmt::Display for SubmitError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Rejected(error) => write!(f, "{}", error),
			Self::Failed(error) => write!(f, "{}", error),
		}
	}
}

/// Sends validated form values to the endpoint
#[allow(async_fn_in_trait)]
pub trait SubmitTransport {
	async fn post(&self, values: &FormValues) -> Result<SubmissionStatus, SubmissionError>;
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SubmitState {
	#[default]
	Idle,
	Submitting,
}

/// All state owned by one onboarding form: the fields, the submit control, and the results list
#[derive(Clone, Debug, PartialEq)]
pub struct OnboardingForm {
	model: FormModel,
	state: SubmitState,
	submitted: SubmittedUsers,
}

impl OnboardingForm {
	pub fn new(config: &FormConfig) -> Self {
		Self {
			model: FormModel::new(config.initial_values.clone(), config.validation_rules()),
			state: SubmitState::Idle,
			submitted: SubmittedUsers::default(),
		}
	}

	pub fn model(&self) -> &FormModel {
		&self.model
	}

	pub fn model_mut(&mut self) -> &mut FormModel {
		&mut self.model
	}

	pub fn state(&self) -> SubmitState {
		self.state
	}

	pub fn is_submitting(&self) -> bool {
		self.state == SubmitState::Submitting
	}

	pub fn submitted(&self) -> &SubmittedUsers {
		&self.submitted
	}

	/// Starts a submission. All fields become touched so any errors are shown. If the form is valid, the form enters
	/// the submitting state and the values to send are returned.
	///
	/// # Errors
	///
	/// Rejected while another submission is in flight or when the values don't validate. Neither case changes the
	/// values or the submit state.
	pub fn begin_submit(&mut self) -> Result<FormValues, SubmitRejected> {
		if self.is_submitting() {
			log::debug!("Ignoring submit while a submission is in flight");
			return Err(SubmitRejected::InFlight);
		}

		self.model.touch_all();
		if !self.model.is_valid() {
			let errors = self.model.errors().clone();
			log::debug!("Submit blocked by {} validation error(s)", errors.len());
			return Err(SubmitRejected::Invalid(errors));
		}

		self.state = SubmitState::Submitting;
		let values = self.model.values().clone();
		log::info!("Submitting {:?}", values);
		Ok(values)
	}

	/// Completes a submission started with [`OnboardingForm::begin_submit`]. The form returns to idle whatever the
	/// outcome. A successful response is added to the submitted list and the form is reset.
	///
	/// # Errors
	///
	/// A failed outcome is logged and handed back; the values and list are left as they were.
	pub fn finish_submit(
		&mut self,
		outcome: Result<SubmissionStatus, SubmissionError>,
	) -> Result<&SubmittedUser, SubmissionError> {
		if !self.is_submitting() {
			log::warn!("Received a submission outcome with no submission in flight");
		}
		self.state = SubmitState::Idle;

		match outcome {
			Ok(status) => {
				log::info!("Post successful: {}", status.body());
				self.model.reset();
				Ok(self.submitted.push(status))
			}
			Err(error) => {
				log::error!("There was a problem submitting the form: {}", error);
				Err(error)
			}
		}
	}

	/// Runs a whole submission through the given transport
	///
	/// # Errors
	///
	/// Fails when the submission is rejected before sending or when the transport fails.
	pub async fn submit<T: SubmitTransport>(&mut self, transport: &T) -> Result<&SubmittedUser, SubmitError> {
		let values = self.begin_submit()?;
		let outcome = transport.post(&values).await;
		Ok(self.finish_submit(outcome)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::form::Field;
	use crate::submitted::EntryKey;
	use futures::executor::block_on;
	use serde_json::json;
	use std::cell::RefCell;
	use std::collections::VecDeque;

	#[derive(Default)]
	struct RecordingTransport {
		requests: RefCell<Vec<FormValues>>,
		responses: RefCell<VecDeque<Result<SubmissionStatus, SubmissionError>>>,
	}

	impl RecordingTransport {
		fn responding(responses: Vec<Result<SubmissionStatus, SubmissionError>>) -> Self {
			Self {
				requests: RefCell::new(Vec::new()),
				responses: RefCell::new(responses.into()),
			}
		}

		fn request_count(&self) -> usize {
			self.requests.borrow().len()
		}
	}

	impl SubmitTransport for RecordingTransport {
		async fn post(&self, values: &FormValues) -> Result<SubmissionStatus, SubmissionError> {
			self.requests.borrow_mut().push(values.clone());
			self.responses
				.borrow_mut()
				.pop_front()
				.unwrap_or_else(|| Err(SubmissionError::Network(String::from("no response queued"))))
		}
	}

	fn fill(form: &mut OnboardingForm, name: &str, email: &str, password: &str, tos_accepted: bool) {
		let model = form.model_mut();
		model.set_name(String::from(name));
		model.set_email(String::from(email));
		model.set_password(String::from(password));
		model.set_tos_accepted(tos_accepted);
	}

	fn ada() -> FormValues {
		FormValues {
			name: String::from("Ada"),
			email: String::from("ada@example.com"),
			password: String::from("secret"),
			tos_accepted: true,
		}
	}

	#[test]
	fn valid_submission_posts_values_and_records_response() {
		let response = json!({
			"id": 1,
			"name": "Ada",
			"email": "ada@example.com",
			"password": "secret",
			"tosAccepted": true,
			"createdAt": "2024-05-01T12:00:00.000Z",
		});
		let transport = RecordingTransport::responding(vec![Ok(response.clone().into())]);
		let mut form = OnboardingForm::new(&FormConfig::default());
		fill(&mut form, "Ada", "ada@example.com", "secret", true);

		let entry = block_on(form.submit(&transport)).unwrap().clone();

		assert_eq!(*transport.requests.borrow(), vec![ada()]);
		assert_eq!(entry.key, EntryKey::Remote(String::from("1")));
		assert_eq!(entry.status.body(), &response);
		assert_eq!(form.submitted().len(), 1);
		assert_eq!(form.submitted().entries()[0].status.body(), &response);
		assert_eq!(form.model().values(), &FormValues::default());
		assert_eq!(form.model().touched().count(), 0);
		assert_eq!(form.state(), SubmitState::Idle);
	}

	#[test]
	fn invalid_submission_sends_nothing() {
		let transport = RecordingTransport::default();
		let mut form = OnboardingForm::new(&FormConfig::default());
		fill(&mut form, "", "bad", "x", false);
		let values_before = form.model().values().clone();

		let result = block_on(form.submit(&transport));

		let Err(SubmitError::Rejected(SubmitRejected::Invalid(errors))) = result else {
			panic!("expected a validation rejection");
		};
		assert!(errors.contains(Field::Name));
		assert!(errors.contains(Field::Email));
		assert!(!errors.contains(Field::Password));
		assert_eq!(transport.request_count(), 0);
		assert_eq!(form.model().values(), &values_before);
		assert!(form.submitted().is_empty());
		assert_eq!(form.state(), SubmitState::Idle);
	}

	#[test]
	fn rejected_submission_reveals_errors() {
		let mut form = OnboardingForm::new(&FormConfig::default());
		fill(&mut form, "", "bad", "x", false);
		assert_eq!(form.model().visible_error(Field::Name), None);

		assert!(form.begin_submit().is_err());

		assert_eq!(form.model().visible_error(Field::Name), Some("name is a required field"));
		assert_eq!(form.model().visible_error(Field::Email), Some("email must be a valid email"));
		assert_eq!(form.model().visible_error(Field::Password), None);
	}

	// Re-enabling the submit control only on success would leave the form stuck in Submitting after this failure.
	#[test]
	fn failed_submission_returns_to_idle_and_keeps_values() {
		let transport = RecordingTransport::responding(vec![Err(SubmissionError::Network(String::from(
			"connection refused",
		)))]);
		let mut form = OnboardingForm::new(&FormConfig::default());
		fill(&mut form, "Ada", "ada@example.com", "secret", true);

		let result = block_on(form.submit(&transport));

		assert_eq!(
			result.unwrap_err(),
			SubmitError::Failed(SubmissionError::Network(String::from("connection refused")))
		);
		assert_eq!(transport.request_count(), 1);
		assert_eq!(form.model().values(), &ada());
		assert!(form.submitted().is_empty());
		assert_eq!(form.state(), SubmitState::Idle);
		assert!(!form.is_submitting());
	}

	#[test]
	fn error_status_is_a_failure() {
		let transport = RecordingTransport::responding(vec![Err(SubmissionError::Status {
			code: 400,
			body: String::from("{\"error\":\"Missing password\"}"),
		})]);
		let mut form = OnboardingForm::new(&FormConfig::default());
		fill(&mut form, "Ada", "ada@example.com", "secret", false);

		assert!(matches!(
			block_on(form.submit(&transport)),
			Err(SubmitError::Failed(SubmissionError::Status { code: 400, .. }))
		));
		assert_eq!(form.model().values().name, "Ada");
		assert_eq!(form.state(), SubmitState::Idle);
	}

	#[test]
	fn second_submit_is_rejected_while_in_flight() {
		let mut form = OnboardingForm::new(&FormConfig::default());
		fill(&mut form, "Ada", "ada@example.com", "secret", true);

		let values = form.begin_submit().unwrap();
		assert_eq!(values, ada());
		assert_eq!(form.state(), SubmitState::Submitting);
		assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));

		form.finish_submit(Ok(json!({ "id": 5 }).into())).unwrap();
		assert_eq!(form.state(), SubmitState::Idle);
		assert_eq!(form.submitted().len(), 1);
	}

	#[test]
	fn identical_submissions_produce_distinct_entries() {
		let response = json!({ "id": 1, "name": "Ada" });
		let transport =
			RecordingTransport::responding(vec![Ok(response.clone().into()), Ok(response.clone().into())]);
		let mut form = OnboardingForm::new(&FormConfig::default());

		for _ in 0..2 {
			fill(&mut form, "Ada", "ada@example.com", "secret", true);
			block_on(form.submit(&transport)).unwrap();
		}

		let requests = transport.requests.borrow();
		assert_eq!(requests.len(), 2);
		assert_eq!(requests[0], requests[1]);
		let entries = form.submitted().entries();
		assert_eq!(entries.len(), 2);
		assert_ne!(entries[0].key, entries[1].key);
	}

	#[test]
	fn required_tos_blocks_submission() {
		let config = FormConfig {
			require_tos: true,
			..FormConfig::default()
		};
		let transport = RecordingTransport::responding(vec![Ok(json!({ "id": 2 }).into())]);
		let mut form = OnboardingForm::new(&config);
		fill(&mut form, "Ada", "ada@example.com", "secret", false);

		let result = block_on(form.submit(&transport));
		let Err(SubmitError::Rejected(SubmitRejected::Invalid(errors))) = result else {
			panic!("expected a validation rejection");
		};
		assert_eq!(errors.get(Field::Tos), Some("tos must be accepted"));
		assert_eq!(transport.request_count(), 0);

		form.model_mut().set_tos_accepted(true);
		assert!(block_on(form.submit(&transport)).is_ok());
		assert_eq!(transport.request_count(), 1);
	}

	#[test]
	fn reset_returns_to_configured_initial_values() {
		let initial = FormValues {
			email: String::from("team@example.com"),
			..FormValues::default()
		};
		let config = FormConfig {
			initial_values: initial.clone(),
			..FormConfig::default()
		};
		let transport = RecordingTransport::responding(vec![Ok(json!({}).into())]);
		let mut form = OnboardingForm::new(&config);
		assert_eq!(form.model().values(), &initial);
		fill(&mut form, "Ada", "ada@example.com", "secret", true);

		let entry_key = block_on(form.submit(&transport)).unwrap().key.clone();

		assert_eq!(entry_key, EntryKey::Local(0));
		assert_eq!(form.model().values(), &initial);
	}

	#[test]
	fn rejection_messages_name_the_fields() {
		let mut form = OnboardingForm::new(&FormConfig::default());
		let message = form.begin_submit().unwrap_err().to_string();
		assert!(message.contains("[name] name is a required field"));
		assert!(message.contains("[email] email is a required field"));
		assert_eq!(SubmitRejected::InFlight.to_string(), "A submission is already in progress");
	}

	#[test]
	fn created_response_becomes_the_status() {
		let status = response_outcome(201, Ok(String::from(r#"{"id":"17","name":"Ada"}"#))).unwrap();
		assert_eq!(status.body(), &json!({ "id": "17", "name": "Ada" }));
	}

	#[test]
	fn error_status_wins_over_an_unreadable_body() {
		assert_eq!(
			response_outcome(503, Err(String::from("stream closed"))),
			Err(SubmissionError::Status {
				code: 503,
				body: String::new(),
			})
		);
		assert_eq!(
			response_outcome(400, Ok(String::from("bad request"))),
			Err(SubmissionError::Status {
				code: 400,
				body: String::from("bad request"),
			})
		);
	}

	#[test]
	fn successful_status_needs_a_readable_json_body() {
		assert_eq!(
			response_outcome(200, Err(String::from("stream closed"))),
			Err(SubmissionError::Network(String::from("stream closed")))
		);
		assert!(matches!(
			response_outcome(200, Ok(String::from("<html>"))),
			Err(SubmissionError::Decode(_))
		));
	}

	#[test]
	fn encode_and_decode_errors_describe_their_direction() {
		let encode = SubmissionError::Encode(String::from("key must be a string")).to_string();
		assert!(encode.starts_with("The form values could not be encoded"));
		let decode = SubmissionError::Decode(String::from("expected value")).to_string();
		assert!(decode.starts_with("The response body was not valid JSON"));
	}
}
