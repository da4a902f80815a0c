// SPDX-License-Identifier: MPL-2.0
//! Small reusable pieces of UI state.

pub mod viewport;
