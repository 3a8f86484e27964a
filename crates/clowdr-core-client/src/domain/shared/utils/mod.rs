// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use derived_task::{Canceled, DerivedTask};
pub use session_scope::SessionScope;

mod derived_task;
mod session_scope;
