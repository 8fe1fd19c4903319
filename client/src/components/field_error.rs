// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;

#[derive(Prop)]
pub struct FieldErrorProps<'a> {
	error: &'a ReadSignal<Option<String>>,
}

/// Shows a field's validation message beneath the field when there is one to show
#[component]
pub fn FieldError<'a, G: Html>(ctx: Scope<'a>, props: FieldErrorProps<'a>) -> View<G> {
	view! {
		ctx,
		(
			if let Some(error) = (*props.error.get()).clone() {
				view! {
					ctx,
					p(class="errors") { (error) }
				}
			} else {
				view! { ctx, }
			}
		)
	}
}
