// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use channel::Channel;
pub use channel_filter::ChannelFilter;
pub use chat_descriptor::{ChatDescriptor, ChatKind};
pub use create_text_chat_request::CreateTextChatRequest;
pub use errors::LookupError;

mod channel;
mod channel_filter;
mod chat_descriptor;
mod create_text_chat_request;
mod errors;
