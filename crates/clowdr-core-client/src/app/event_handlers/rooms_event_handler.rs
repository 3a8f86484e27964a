// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use clowdr_proc_macros::InjectDependencies;

use crate::app::deps::DynRoomsSidebarDomainService;
use crate::app::event_handlers::{DataEvent, DataEventHandler, DeletedObject, UpdatedObjects};

#[derive(InjectDependencies)]
pub struct RoomsEventHandler {
    #[inject]
    rooms_sidebar_domain_service: DynRoomsSidebarDomainService,
}

#[async_trait]
impl DataEventHandler for RoomsEventHandler {
    fn name(&self) -> &'static str {
        "rooms"
    }

    async fn handle_event(&self, event: DataEvent) -> Result<Option<DataEvent>> {
        match event {
            DataEvent::Updated(UpdatedObjects::VideoRooms(rooms)) => {
                self.rooms_sidebar_domain_service
                    .handle_updated_rooms(rooms)
                    .await?
            }
            DataEvent::Deleted(DeletedObject::VideoRoom(room_id)) => {
                self.rooms_sidebar_domain_service
                    .handle_deleted_rooms(vec![room_id])
                    .await?
            }
            DataEvent::Updated(UpdatedObjects::Sponsors(sponsors)) => {
                self.rooms_sidebar_domain_service
                    .handle_updated_sponsors(sponsors)
                    .await?
            }
            DataEvent::Deleted(DeletedObject::Sponsor(sponsor_id)) => {
                self.rooms_sidebar_domain_service
                    .handle_deleted_sponsors(vec![sponsor_id])
                    .await?
            }
            DataEvent::Updated(UpdatedObjects::WatchedItems(items)) => {
                self.rooms_sidebar_domain_service
                    .handle_updated_watched_items(items)
                    .await?
            }
            _ => return Ok(Some(event)),
        }

        Ok(None)
    }
}
