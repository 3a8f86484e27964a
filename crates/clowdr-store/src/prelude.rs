// clowdr-core-client/clowdr-store
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::driver::Driver;
pub use crate::store::{Store, StoreError};
pub use crate::{InMemoryDriver, SqliteDriver};
