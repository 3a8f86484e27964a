// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use system_time_provider::SystemTimeProvider;
pub use uuid_provider::UUIDProvider;

mod system_time_provider;
mod uuid_provider;
