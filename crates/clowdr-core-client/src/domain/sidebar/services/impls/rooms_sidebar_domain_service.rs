// clowdr-core-client/clowdr-core-client
//
// Copyright: 2023, The Clowdr Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use futures::future::try_join_all;
use futures::try_join;
use parking_lot::RwLock;
use tracing::info;

use clowdr_proc_macros::DependenciesStruct;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynUserProfileRepository, DynVideoRoomRepository,
};
use crate::domain::conference::models::{Sponsor, VideoRoom, WatchedItems};
use crate::domain::shared::models::{ConferenceId, RoomId, SponsorId};
use crate::domain::shared::utils::{DerivedTask, SessionScope};
use crate::domain::sidebar::models::{
    filter_rooms, next_rooms_state, FullRoomInfo, RoomsState, RoomsUpdate, SidebarRooms,
};
use crate::ClientEvent;

use super::super::RoomsSidebarDomainService as RoomsSidebarDomainServiceTrait;
use super::current_watched_items_id;

#[derive(DependenciesStruct)]
pub struct RoomsSidebarDomainService {
    client_event_dispatcher: DynClientEventDispatcher,
    ctx: DynAppContext,
    user_profile_repo: DynUserProfileRepository,
    video_room_repo: DynVideoRoomRepository,

    #[state]
    state: RwLock<RoomsState>,
    #[state]
    load_task: DerivedTask,
    #[state]
    filter_task: DerivedTask,
    #[state]
    scope: SessionScope,
}

#[async_trait]
impl RoomsSidebarDomainServiceTrait for RoomsSidebarDomainService {
    #[tracing::instrument(skip(self))]
    async fn load(&self) -> Result<()> {
        let ctx = self.ctx.session_context()?;

        self.load_task
            .run(
                async {
                    let (rooms, sponsors, watched_items) = try_join!(
                        self.video_room_repo.get_all(&ctx.conference_id),
                        self.video_room_repo.get_sponsors(&ctx.conference_id),
                        self.user_profile_repo
                            .get_watched_items(&ctx.conference_id, &ctx.profile_id)
                    )?;
                    let rooms = self.full_room_infos(&ctx.conference_id, rooms).await?;

                    Ok::<_, anyhow::Error>(vec![
                        RoomsUpdate::set_current_user_id(Some(ctx.profile_id.clone())),
                        RoomsUpdate::set_watched_room_ids(
                            watched_items
                                .map(|items| items.watched_rooms)
                                .unwrap_or_default(),
                        ),
                        RoomsUpdate::set_all_sponsors(sponsors),
                        RoomsUpdate::update_all_rooms(rooms),
                    ])
                },
                |updates| self.apply(updates),
            )
            .await?;

        self.refresh_filtered_rooms().await
    }

    async fn set_search(&self, search: Option<String>) -> Result<()> {
        self.apply([RoomsUpdate::search(search)]);
        self.refresh_filtered_rooms().await
    }

    fn set_is_open(&self, is_open: bool) {
        self.apply([RoomsUpdate::set_is_open(is_open)]);
    }

    fn set_current_location(&self, location: String) {
        self.apply([RoomsUpdate::set_current_location(location)]);
    }

    async fn handle_updated_rooms(&self, rooms: Vec<VideoRoom>) -> Result<()> {
        if rooms.is_empty() {
            return Ok(());
        }

        let ctx = self.ctx.session_context()?;
        let mut is_applied = false;

        self.scope
            .run(self.full_room_infos(&ctx.conference_id, rooms), |rooms| {
                is_applied = true;
                self.apply([RoomsUpdate::update_all_rooms(rooms)])
            })
            .await?;

        if !is_applied {
            return Ok(());
        }
        self.refresh_filtered_rooms().await
    }

    async fn handle_deleted_rooms(&self, room_ids: Vec<RoomId>) -> Result<()> {
        self.apply([RoomsUpdate::delete_rooms(room_ids)]);
        Ok(())
    }

    async fn handle_updated_sponsors(&self, sponsors: Vec<Sponsor>) -> Result<()> {
        self.apply([RoomsUpdate::upsert_sponsors(sponsors)]);
        Ok(())
    }

    async fn handle_deleted_sponsors(&self, sponsor_ids: Vec<SponsorId>) -> Result<()> {
        self.apply([RoomsUpdate::delete_sponsors(sponsor_ids)]);
        Ok(())
    }

    async fn handle_updated_watched_items(&self, items: Vec<WatchedItems>) -> Result<()> {
        let ctx = self.ctx.session_context()?;

        self.scope
            .run(
                current_watched_items_id(&self.user_profile_repo, &ctx),
                |watched_id| {
                    let Some(items) = watched_id.and_then(|watched_id| {
                        items.into_iter().find(|items| items.id == watched_id)
                    }) else {
                        return;
                    };
                    self.apply([RoomsUpdate::set_watched_room_ids(items.watched_rooms)]);
                },
            )
            .await
    }

    fn state(&self) -> RoomsState {
        self.state.read().clone()
    }

    fn sidebar_rooms(&self) -> SidebarRooms {
        self.state.read().sidebar_rooms(
            self.ctx.config.min_search_length,
            self.ctx.config.max_room_participants_to_list,
        )
    }

    fn reset(&self) {
        self.scope.reset();
        self.load_task.cancel();
        self.filter_task.cancel();
        *self.state.write() = Default::default();
    }
}

impl RoomsSidebarDomainService {
    /// Applies `updates`, dispatches `ClientEvent::RoomsChanged` if the state changed and
    /// forwards the resulting notifications.
    fn apply(&self, updates: impl IntoIterator<Item = RoomsUpdate>) {
        let notifications = {
            let mut state = self.state.write();
            let transition =
                next_rooms_state(&state, updates, self.ctx.config.notification_duration);
            if transition.state == *state {
                return;
            }
            *state = transition.state;
            transition.notifications
        };

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::RoomsChanged);

        for notification in notifications {
            info!("{}", notification.message);
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::Notification(notification));
        }
    }

    async fn refresh_filtered_rooms(&self) -> Result<()> {
        let filtered_rooms = {
            let state = self.state.read();
            filter_rooms(
                state.all_rooms.as_deref().unwrap_or_default(),
                state.room_search.as_deref(),
                self.ctx.config.min_search_length,
            )
        };

        self.filter_task
            .run(async { Ok::<_, anyhow::Error>(filtered_rooms) }, |rooms| {
                self.apply([RoomsUpdate::set_filtered_rooms(rooms)])
            })
            .await
    }

    async fn full_room_infos(
        &self,
        conference_id: &ConferenceId,
        rooms: Vec<VideoRoom>,
    ) -> Result<Vec<FullRoomInfo>> {
        try_join_all(rooms.into_iter().map(|room| async move {
            let (participants, feed_count) = try_join!(
                self.video_room_repo.get_participants(conference_id, &room.id),
                self.video_room_repo.count_feeds(conference_id, &room.id)
            )?;
            Ok::<_, anyhow::Error>(FullRoomInfo::new(room, participants, feed_count))
        }))
        .await
    }
}
