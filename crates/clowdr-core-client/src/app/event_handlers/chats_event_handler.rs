// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

use clowdr_proc_macros::InjectDependencies;

use crate::app::deps::DynChatsSidebarDomainService;
use crate::app::event_handlers::{DataEvent, DataEventHandler, DeletedObject, UpdatedObjects};

#[derive(InjectDependencies)]
pub struct ChatsEventHandler {
    #[inject]
    chats_sidebar_domain_service: DynChatsSidebarDomainService,
}

#[async_trait]
impl DataEventHandler for ChatsEventHandler {
    fn name(&self) -> &'static str {
        "chats"
    }

    async fn handle_event(&self, event: DataEvent) -> Result<Option<DataEvent>> {
        match event {
            DataEvent::Updated(UpdatedObjects::TextChats(chats)) => {
                self.chats_sidebar_domain_service
                    .handle_updated_chats(chats)
                    .await?;
            }
            DataEvent::Deleted(DeletedObject::TextChat(chat_id)) => {
                self.chats_sidebar_domain_service
                    .handle_deleted_chats(vec![chat_id])
                    .await?;
            }
            DataEvent::Updated(UpdatedObjects::UserProfiles(profiles)) => {
                self.chats_sidebar_domain_service
                    .handle_updated_users(profiles)
                    .await?;
            }
            DataEvent::Deleted(DeletedObject::UserProfile(profile_id)) => {
                self.chats_sidebar_domain_service
                    .handle_deleted_users(vec![profile_id])
                    .await?;
            }
            // Watched items concern rooms as well.
            DataEvent::Updated(UpdatedObjects::WatchedItems(ref items)) => {
                if let Err(err) = self
                    .chats_sidebar_domain_service
                    .handle_updated_watched_items(items.clone())
                    .await
                {
                    error!("Failed to update watched chats. {}", err.to_string());
                }
                return Ok(Some(event));
            }
            _ => return Ok(Some(event)),
        }

        Ok(None)
    }
}
