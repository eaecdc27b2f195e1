// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod contracts;
mod error;
pub mod helpers;
mod relay;
mod retry;
mod snapshot;
mod submit;

pub use contracts::*;
pub use error::*;
pub use helpers::*;
pub use relay::*;
pub use retry::*;
pub use snapshot::*;
pub use submit::*;
