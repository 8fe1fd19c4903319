// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use components::onboarding_form::OnboardingFormView;
use sycamore::prelude::*;

mod components;
mod config;
mod error;
mod submit;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

	let form_config = config::page_config();

	sycamore::render(|ctx| {
		provide_context(ctx, form_config);
		view! {
			ctx,
			OnboardingFormView {}
		}
	});
}
