// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

pub use chats_sidebar_domain_service::{
    ChatsSidebarDomainService, ChatsSidebarDomainServiceDependencies,
};
pub use rooms_sidebar_domain_service::{
    RoomsSidebarDomainService, RoomsSidebarDomainServiceDependencies,
};

use crate::app::deps::DynUserProfileRepository;
use crate::domain::shared::models::{SessionContext, WatchedItemsId};

mod chats_sidebar_domain_service;
mod rooms_sidebar_domain_service;

/// Returns the id of the watched items record of the current user.
async fn current_watched_items_id(
    user_profile_repo: &DynUserProfileRepository,
    ctx: &SessionContext,
) -> Result<Option<WatchedItemsId>> {
    Ok(user_profile_repo
        .get(&ctx.conference_id, &ctx.profile_id)
        .await?
        .and_then(|profile| profile.watched_id))
}
