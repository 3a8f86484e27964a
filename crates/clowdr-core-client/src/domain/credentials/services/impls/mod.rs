// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use credential_broker::{CredentialBroker, CredentialBrokerDependencies};

mod credential_broker;
