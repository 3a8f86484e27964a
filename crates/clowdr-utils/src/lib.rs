// clowdr-core-client/clowdr-utils
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

mod id_string_macro;
