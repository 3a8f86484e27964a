// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use configuration_service::ConfigurationService;
pub use credential_broker::CredentialBroker;
pub use token_service::TokenService;

mod configuration_service;
mod credential_broker;
pub mod impls;
mod token_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::configuration_service::MockConfigurationService;
    pub use super::credential_broker::MockCredentialBroker;
    pub use super::token_service::MockTokenService;
}
