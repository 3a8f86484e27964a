// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod channels;
pub mod conference;
pub mod credentials;
pub mod general;
pub mod realtime;
pub mod shared;
pub mod sidebar;
