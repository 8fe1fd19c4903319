// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Platform-independent state for the onboarding form: field values, validation, the submit lifecycle, and the list
//! of users submitted during the session.

pub mod config;
pub mod form;
pub mod submission;
pub mod submitted;
pub mod validation;
