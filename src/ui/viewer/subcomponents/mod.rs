// SPDX-License-Identifier: MPL-2.0
//! Sub-components composed by the document lifecycle cluster.

pub mod error_state;
pub mod loading;
pub mod session_holder;
