// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use backend_functions_service::BackendFunctionsService;
pub use id_provider::IDProvider;
pub use time_provider::TimeProvider;

mod backend_functions_service;
mod id_provider;
mod time_provider;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::backend_functions_service::MockBackendFunctionsService;
}
