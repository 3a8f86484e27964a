// clowdr-core-client/clowdr-store
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use driver::in_memory::InMemoryDriver;
pub use driver::sqlite::SqliteDriver;
pub use driver::Driver;
pub use store::{Store, StoreError};

mod driver;
pub mod prelude;
mod store;
