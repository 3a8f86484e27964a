// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use clowdr_proc_macros::InjectDependencies;

use crate::app::deps::DynRoomsSidebarDomainService;
use crate::domain::sidebar::models::{RoomsState, SidebarRooms};

#[derive(InjectDependencies)]
pub struct RoomsSidebarService {
    #[inject]
    rooms_sidebar_domain_service: DynRoomsSidebarDomainService,
}

impl RoomsSidebarService {
    pub async fn load(&self) -> Result<()> {
        self.rooms_sidebar_domain_service.load().await
    }

    pub async fn search(&self, search: Option<String>) -> Result<()> {
        self.rooms_sidebar_domain_service.set_search(search).await
    }

    pub fn set_is_open(&self, is_open: bool) {
        self.rooms_sidebar_domain_service.set_is_open(is_open)
    }

    /// Tells the sidebar which page is currently displayed, e.g. `/room/<id>`.
    pub fn set_current_location(&self, location: impl Into<String>) {
        self.rooms_sidebar_domain_service
            .set_current_location(location.into())
    }

    pub fn state(&self) -> RoomsState {
        self.rooms_sidebar_domain_service.state()
    }

    pub fn sidebar_rooms(&self) -> SidebarRooms {
        self.rooms_sidebar_domain_service.sidebar_rooms()
    }
}
