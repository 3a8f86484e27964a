// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use clowdr_utils::id_string;

id_string!(ConferenceId);
id_string!(ProfileId);

// The backend object id of a text chat record.
id_string!(ChatId);

// The identifier the realtime provider assigned to a channel.
id_string!(ChannelSid);

id_string!(RoomId);
id_string!(SponsorId);
id_string!(WatchedItemsId);

// The backend session token of the logged-in user. The realtime token endpoint uses it to
// identify the caller.
id_string!(SessionIdentity);

id_string!(ListenerId);
