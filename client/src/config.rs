// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::ConfigError;
use onboarding_shared::config::FormConfig;

/// ID of the `<script type="application/json">` element a host page can use to configure the form
pub const CONFIG_ELEMENT_ID: &str = "onboarding_config";

/// Reads the form configuration from the host page.
///
/// # Errors
///
/// Fails when the document can't be accessed or when the configuration element holds invalid JSON. A page without a
/// configuration element is not an error.
pub fn read_page_config() -> Result<Option<FormConfig>, ConfigError> {
	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or(ConfigError::MissingDocument)?;
	let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
		return Ok(None);
	};
	let json = element.text_content().unwrap_or_default();
	Ok(Some(FormConfig::from_json(&json)?))
}

/// Gets the configuration for this page, falling back to the defaults if the page doesn't provide a usable one
pub fn page_config() -> FormConfig {
	match read_page_config() {
		Ok(Some(config)) => {
			log::debug!("Loaded form configuration from #{}", CONFIG_ELEMENT_ID);
			config
		}
		Ok(None) => FormConfig::default(),
		Err(error) => {
			log::warn!("Using the default form configuration: {}", error);
			FormConfig::default()
		}
	}
}
