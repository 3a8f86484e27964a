// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use url::Url;

pub use crate::app::deps::AppConfig;
pub use crate::app::event_handlers::{DataEvent, DeletedObject, UpdatedObjects};
pub use crate::domain::{
    channels::models::{
        Channel, ChannelFilter, ChatDescriptor, ChatKind, CreateTextChatRequest, LookupError,
    },
    conference::models::{RoomMode, Sponsor, TextChat, UserProfile, VideoRoom, WatchedItems},
    credentials::models::{
        ConfigurationValue, Credential, CredentialError, IssuedToken, TokenRequest,
    },
    realtime::models::{
        ChannelJoinedEvent, ChannelLeftEvent, ConnectionErrorEvent, ConnectionErrorInfo,
        ConnectionState, ConnectionStateChangedEvent, Listener, MemberDescriptor,
        ProviderConnectionState, ProviderError, RawEventKind, RawRealtimeEvent,
        RealtimeEventType, RealtimeUser, RemoteChannel, SessionError, SessionEvent,
        SessionEventKind, UserDescriptor, UserUpdate, UserUpdateReason, UserUpdatedEvent,
    },
    realtime::services::ListenerRegistry,
    shared::models::{
        ChannelSid, ChatId, ConferenceId, ListenerId, ProfileId, RoomId, SessionContext,
        SessionIdentity, SponsorId, WatchedItemsId,
    },
    sidebar::models::{
        ChatsState, FilteredChat, FullRoomInfo, Notification, NotificationAction, RoomsState,
        SidebarChat, SidebarChatItem, SidebarChatKind, SidebarMember, SidebarRoomItem,
        SidebarRooms, SidebarUser,
    },
};
