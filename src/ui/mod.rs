// SPDX-License-Identifier: MPL-2.0
//! UI components and visual building blocks.

pub mod design_tokens;
pub mod icons;
pub mod landing;
pub mod navbar;
pub mod state;
pub mod styles;
pub mod theming;
