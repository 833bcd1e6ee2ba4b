// SPDX-License-Identifier: MPL-2.0
//! Document viewer: lifecycle management plus the render surfaces.

pub mod component;
pub mod empty_state;
pub mod lifecycle;
pub mod outline;
pub mod subcomponents;
pub mod surface;
