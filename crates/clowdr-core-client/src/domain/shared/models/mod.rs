// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use ids::*;
pub use session_context::SessionContext;

mod ids;
mod session_context;
