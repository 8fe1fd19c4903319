// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::field_error::FieldError;
use super::submitted_users::SubmittedUsersView;
use crate::submit::HttpTransport;
use onboarding_shared::config::FormConfig;
use onboarding_shared::form::{Field, FormValues};
use onboarding_shared::submission::{OnboardingForm, SubmitTransport};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn OnboardingFormView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let config: &FormConfig = use_context(ctx);
	let transport = create_ref(ctx, HttpTransport::new(config.endpoint.clone()));
	let form = create_signal(ctx, OnboardingForm::new(config));

	// The inputs are bound to these signals, and the effects below copy each change into the form model so its errors
	// stay current.
	let FormValues {
		name,
		email,
		password,
		tos_accepted,
	} = form.get_untracked().model().values().clone();
	let name_signal = create_signal(ctx, name);
	let email_signal = create_signal(ctx, email);
	let password_signal = create_signal(ctx, password);
	let tos_signal = create_signal(ctx, tos_accepted);

	create_effect(ctx, move || {
		let name = (*name_signal.get()).clone();
		form.modify().model_mut().set_name(name);
	});
	create_effect(ctx, move || {
		let email = (*email_signal.get()).clone();
		form.modify().model_mut().set_email(email);
	});
	create_effect(ctx, move || {
		let password = (*password_signal.get()).clone();
		form.modify().model_mut().set_password(password);
	});
	create_effect(ctx, move || {
		let accepted = *tos_signal.get();
		form.modify().model_mut().set_tos_accepted(accepted);
	});

	let field_error = move |field: Field| {
		create_memo(ctx, move || {
			form.get().model().visible_error(field).map(String::from)
		})
	};
	let name_error = field_error(Field::Name);
	let email_error = field_error(Field::Email);
	let password_error = field_error(Field::Password);
	let tos_error = field_error(Field::Tos);

	let touch_handler = move |field: Field| {
		move |_event: WebEvent| {
			form.modify().model_mut().touch(field);
		}
	};

	let submitting = create_memo(ctx, || form.get().is_submitting());
	let submitted_users = create_memo(ctx, || form.get().submitted().entries().to_vec());

	create_effect(ctx, || {
		let count = submitted_users.get().len();
		if count > 0 {
			log::debug!("Submitted users list now has {} entries", count);
		}
	});

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let values = match form.modify().begin_submit() {
			Ok(values) => values,
			Err(error) => {
				log::debug!("Form not submitted: {}", error);
				return;
			}
		};

		spawn_local_scoped(ctx, async move {
			let outcome = transport.post(&values).await;

			let reset_values = {
				let mut form = form.modify();
				if form.finish_submit(outcome).is_err() {
					return;
				}
				form.model().values().clone()
			};

			name_signal.set(reset_values.name);
			email_signal.set(reset_values.email);
			password_signal.set(reset_values.password);
			tos_signal.set(reset_values.tos_accepted);
		});
	};

	view! {
		ctx,
		div(class="onboarding-form") {
			form(id="onboarding_form", on:submit=form_submission_handler) {
				label {
					"Name:"
					input(id="name", type="text", name="name", bind:value=name_signal, on:blur=touch_handler(Field::Name))
					FieldError(error=name_error)
				}
				label {
					"Email:"
					input(id="email", type="text", name="email", bind:value=email_signal, on:blur=touch_handler(Field::Email))
					FieldError(error=email_error)
				}
				label {
					"Password:"
					input(id="password", type="password", name="password", bind:value=password_signal, on:blur=touch_handler(Field::Password))
					FieldError(error=password_error)
				}
				label(class="checkbox-container") {
					"TOS Signed:"
					input(id="tos", type="checkbox", name="tos", bind:checked=tos_signal, on:blur=touch_handler(Field::Tos))
					span(class="checkmark")
					FieldError(error=tos_error)
				}
				button(type="submit", disabled=*submitting.get()) { "Add User" }
			}
			SubmittedUsersView(users=submitted_users)
		}
	}
}
