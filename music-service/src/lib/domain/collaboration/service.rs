use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::collaboration::errors::CollaborationError;
use crate::domain::collaboration::models::Collaboration;
use crate::domain::collaboration::models::CollaborationCommand;
use crate::domain::collaboration::models::CollaborationId;
use crate::domain::collaboration::ports::CollaborationRepository;
use crate::domain::collaboration::ports::CollaborationServicePort;
use crate::domain::playlist::ports::PlaylistRepository;
use crate::domain::playlist::service::ensure_owner;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

pub struct CollaborationService<CR, PR, UR>
where
    CR: CollaborationRepository,
    PR: PlaylistRepository,
    UR: UserRepository,
{
    repository: Arc<CR>,
    playlists: Arc<PR>,
    users: Arc<UR>,
}

impl<CR, PR, UR> CollaborationService<CR, PR, UR>
where
    CR: CollaborationRepository,
    PR: PlaylistRepository,
    UR: UserRepository,
{
    pub fn new(repository: Arc<CR>, playlists: Arc<PR>, users: Arc<UR>) -> Self {
        Self {
            repository,
            playlists,
            users,
        }
    }
}

#[async_trait]
impl<CR, PR, UR> CollaborationServicePort for CollaborationService<CR, PR, UR>
where
    CR: CollaborationRepository,
    PR: PlaylistRepository,
    UR: UserRepository,
{
    async fn add_collaboration(
        &self,
        command: CollaborationCommand,
        owner: &UserId,
    ) -> Result<Collaboration, CollaborationError> {
        ensure_owner(self.playlists.as_ref(), &command.playlist_id, owner).await?;

        let user = self
            .users
            .find_by_id(&command.user_id)
            .await
            .map_err(|e| CollaborationError::DatabaseError(e.to_string()))?;
        if user.is_none() {
            return Err(CollaborationError::UserNotFound(command.user_id));
        }

        let collaboration = self
            .repository
            .create(Collaboration {
                id: CollaborationId::new(),
                playlist_id: command.playlist_id,
                user_id: command.user_id,
            })
            .await?;

        tracing::info!(
            collaboration_id = %collaboration.id,
            playlist_id = %collaboration.playlist_id,
            user_id = %collaboration.user_id,
            "Collaborator added"
        );

        Ok(collaboration)
    }

    async fn delete_collaboration(
        &self,
        command: CollaborationCommand,
        owner: &UserId,
    ) -> Result<(), CollaborationError> {
        ensure_owner(self.playlists.as_ref(), &command.playlist_id, owner).await?;

        self.repository
            .delete(&command.playlist_id, &command.user_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::playlist::errors::PlaylistError;
    use crate::domain::playlist::models::Playlist;
    use crate::domain::playlist::models::PlaylistId;
    use crate::domain::playlist::models::PlaylistSummary;
    use crate::domain::song::models::SongId;
    use crate::domain::song::models::SongSummary;
    use crate::domain::user::models::User;
    use crate::domain::user::models::Username;
    use crate::user::errors::UserError;

    mock! {
        pub TestCollaborationRepository {}

        #[async_trait]
        impl CollaborationRepository for TestCollaborationRepository {
            async fn create(&self, collaboration: Collaboration) -> Result<Collaboration, CollaborationError>;
            async fn exists(&self, playlist_id: &PlaylistId, user_id: &UserId) -> Result<bool, CollaborationError>;
            async fn delete(&self, playlist_id: &PlaylistId, user_id: &UserId) -> Result<(), CollaborationError>;
        }
    }

    mock! {
        pub TestPlaylistRepository {}

        #[async_trait]
        impl PlaylistRepository for TestPlaylistRepository {
            async fn create(&self, playlist: Playlist) -> Result<Playlist, PlaylistError>;
            async fn find_by_id(&self, id: &PlaylistId) -> Result<Option<Playlist>, PlaylistError>;
            async fn find_summary(&self, id: &PlaylistId) -> Result<Option<PlaylistSummary>, PlaylistError>;
            async fn list_for_user(&self, user: &UserId) -> Result<Vec<PlaylistSummary>, PlaylistError>;
            async fn delete(&self, id: &PlaylistId) -> Result<(), PlaylistError>;
            async fn add_song(&self, id: &PlaylistId, song_id: &SongId) -> Result<(), PlaylistError>;
            async fn find_songs(&self, id: &PlaylistId) -> Result<Vec<SongSummary>, PlaylistError>;
            async fn remove_song(&self, id: &PlaylistId, song_id: &SongId) -> Result<(), PlaylistError>;
        }
    }

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
        }
    }

    fn owner() -> UserId {
        UserId::from("user-owner".to_string())
    }

    fn command() -> CollaborationCommand {
        CollaborationCommand::new("playlist-1".to_string(), "user-guest".to_string()).unwrap()
    }

    fn playlists() -> MockTestPlaylistRepository {
        let mut playlists = MockTestPlaylistRepository::new();
        playlists.expect_find_by_id().returning(|id| {
            Ok(Some(Playlist {
                id: id.clone(),
                name: "Road trip".to_string(),
                owner: owner(),
            }))
        });
        playlists
    }

    fn users(known: bool) -> MockTestUserRepository {
        let mut users = MockTestUserRepository::new();
        users.expect_find_by_id().returning(move |id| {
            Ok(known.then(|| User {
                id: id.clone(),
                username: Username::new("guest".to_string()).unwrap(),
                password_hash: "$argon2id$test_hash".to_string(),
                fullname: "Guest".to_string(),
            }))
        });
        users
    }

    #[tokio::test]
    async fn test_add_collaboration_success() {
        let mut repository = MockTestCollaborationRepository::new();
        repository
            .expect_create()
            .withf(|c| c.id.as_str().starts_with("collab-") && c.user_id.as_str() == "user-guest")
            .times(1)
            .returning(Ok);

        let service =
            CollaborationService::new(Arc::new(repository), Arc::new(playlists()), Arc::new(users(true)));

        let collaboration = service.add_collaboration(command(), &owner()).await.unwrap();
        assert_eq!(collaboration.playlist_id.as_str(), "playlist-1");
    }

    #[tokio::test]
    async fn test_add_collaboration_requires_owner() {
        let mut repository = MockTestCollaborationRepository::new();
        repository.expect_create().times(0);

        let service =
            CollaborationService::new(Arc::new(repository), Arc::new(playlists()), Arc::new(users(true)));

        let stranger = UserId::from("user-stranger".to_string());
        assert!(matches!(
            service.add_collaboration(command(), &stranger).await,
            Err(CollaborationError::Playlist(PlaylistError::AccessDenied(_)))
        ));
    }

    #[tokio::test]
    async fn test_add_collaboration_unknown_user() {
        let mut repository = MockTestCollaborationRepository::new();
        repository.expect_create().times(0);

        let service = CollaborationService::new(
            Arc::new(repository),
            Arc::new(playlists()),
            Arc::new(users(false)),
        );

        assert!(matches!(
            service.add_collaboration(command(), &owner()).await,
            Err(CollaborationError::UserNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_missing_collaboration() {
        let mut repository = MockTestCollaborationRepository::new();
        repository
            .expect_delete()
            .times(1)
            .returning(|_, _| Err(CollaborationError::NotFound));

        let service =
            CollaborationService::new(Arc::new(repository), Arc::new(playlists()), Arc::new(users(true)));

        assert!(matches!(
            service.delete_collaboration(command(), &owner()).await,
            Err(CollaborationError::NotFound)
        ));
    }
}
