// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use onboarding_shared::config::FormConfig;
use onboarding_shared::submitted::SubmittedUser;
use sycamore::prelude::*;

const MASKED_PASSWORD: &str = "********";

#[derive(Prop)]
pub struct SubmittedUsersProps<'a> {
	users: &'a ReadSignal<Vec<SubmittedUser>>,
}

#[component]
pub fn SubmittedUsersView<'a, G: Html>(ctx: Scope<'a>, props: SubmittedUsersProps<'a>) -> View<G> {
	let config: &FormConfig = use_context(ctx);
	let show_passwords = config.show_submitted_passwords;

	view! {
		ctx,
		Keyed(
			iterable=props.users,
			key=|user| user.key.clone(),
			view=move |ctx, user| {
				let status = &user.status;
				let name = status.name().unwrap_or_default().to_string();
				let email = status.email().unwrap_or_default().to_string();
				let password = if show_passwords {
					status.password().unwrap_or_default().to_string()
				} else {
					String::from(MASKED_PASSWORD)
				};
				let tos_accepted = match status.tos_accepted() {
					Some(accepted) => accepted.to_string(),
					None => String::from("unknown"),
				};
				let entry_id = format!("submitted_user_{}", user.key);

				view! {
					ctx,
					ul(id=entry_id, class="submitted_user") {
						li { "Name: " (name) }
						li { "Email: " (email) }
						li { "Password: " (password) }
						li { "TOS Accepted: " (tos_accepted) }
					}
				}
			}
		)
	}
}
