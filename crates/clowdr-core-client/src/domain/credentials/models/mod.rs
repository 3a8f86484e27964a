// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use configuration_value::ConfigurationValue;
pub use credential::Credential;
pub use errors::CredentialError;
pub use token_request::{IssuedToken, TokenRequest};

mod configuration_value;
mod credential;
mod errors;
mod token_request;
