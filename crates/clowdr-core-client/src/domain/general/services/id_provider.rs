// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub trait IDProvider: Send + Sync {
    fn new_id(&self) -> String;
}
