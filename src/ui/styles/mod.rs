// SPDX-License-Identifier: MPL-2.0
//! Style functions shared across the UI.

pub mod button;
pub mod container;
