//! Post lifecycle
//!
//! Draft creation, listing, scheduling views, and deletion over the Posts
//! collection. Access gating happens at the handler boundary; by the time a
//! call reaches this service the actor has already been admitted.

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Post, PostContent, PostType};
use crate::store::{BlobStore, PostRepository};

/// Post management service
pub struct PostService;

impl PostService {
    /// Create a draft and append it to the Posts collection
    pub async fn create_post(
        store: &dyn BlobStore,
        owner_id: Uuid,
        kind: PostType,
        content: PostContent,
        scheduled_time: Option<DateTime<Utc>>,
    ) -> AppResult<Post> {
        let post = Post {
            id: Uuid::new_v4(),
            user_id: owner_id,
            kind,
            content,
            scheduled_time,
            is_posted: false,
            created_at: Utc::now(),
        };

        let mut posts = PostRepository::load_all(store).await?;
        posts.push(post.clone());
        PostRepository::save_all(store, &posts).await?;

        info!(post_id = %post.id, kind = ?post.kind, scheduled = post.scheduled_time.is_some(), "post created");
        Ok(post)
    }

    /// All of a user's posts, in creation order
    pub async fn list_for_user(store: &dyn BlobStore, owner_id: Uuid) -> AppResult<Vec<Post>> {
        let posts = PostRepository::load_all(store).await?;
        Ok(posts.into_iter().filter(|p| p.user_id == owner_id).collect())
    }

    /// The user's scheduled posts, soonest first
    pub async fn scheduled_for_user(store: &dyn BlobStore, owner_id: Uuid) -> AppResult<Vec<Post>> {
        let mut scheduled: Vec<Post> = PostRepository::load_all(store)
            .await?
            .into_iter()
            .filter(|p| p.user_id == owner_id && p.scheduled_time.is_some())
            .collect();
        scheduled.sort_by_key(|p| p.scheduled_time);
        Ok(scheduled)
    }

    /// Remove a post by id
    pub async fn delete_post(store: &dyn BlobStore, post_id: Uuid) -> AppResult<()> {
        let mut posts = PostRepository::load_all(store).await?;
        let before = posts.len();
        posts.retain(|p| p.id != post_id);
        if posts.len() == before {
            return Err(AppError::NotFound("post not found".to_string()));
        }
        PostRepository::save_all(store, &posts).await?;

        info!(post_id = %post_id, "post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::Duration;

    fn content(text: &str) -> PostContent {
        PostContent {
            text: Some(text.to_string()),
            ..PostContent::default()
        }
    }

    #[tokio::test]
    async fn created_posts_start_unposted_and_keep_creation_order() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();

        let first = PostService::create_post(&store, owner, PostType::TextImage, content("a"), None)
            .await
            .unwrap();
        let second = PostService::create_post(&store, owner, PostType::Carousel, content("b"), None)
            .await
            .unwrap();
        assert!(!first.is_posted);

        let listed = PostService::list_for_user(&store, owner).await.unwrap();
        assert_eq!(
            listed.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![first.id, second.id]
        );
    }

    #[tokio::test]
    async fn listing_is_scoped_to_the_owner() {
        let store = MemoryStore::new();
        let ana = Uuid::new_v4();
        let other = Uuid::new_v4();

        PostService::create_post(&store, ana, PostType::TextImage, content("mine"), None)
            .await
            .unwrap();
        PostService::create_post(&store, other, PostType::TextImage, content("theirs"), None)
            .await
            .unwrap();

        let listed = PostService::list_for_user(&store, ana).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].content.text.as_deref(), Some("mine"));
    }

    #[tokio::test]
    async fn scheduled_view_sorts_soonest_first() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();
        let now = Utc::now();

        let later = PostService::create_post(
            &store,
            owner,
            PostType::Reel,
            content("later"),
            Some(now + Duration::hours(2)),
        )
        .await
        .unwrap();
        PostService::create_post(&store, owner, PostType::TextImage, content("draft"), None)
            .await
            .unwrap();
        let sooner = PostService::create_post(
            &store,
            owner,
            PostType::TextImage,
            content("sooner"),
            Some(now + Duration::hours(1)),
        )
        .await
        .unwrap();

        let scheduled = PostService::scheduled_for_user(&store, owner).await.unwrap();
        assert_eq!(
            scheduled.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![sooner.id, later.id]
        );
    }

    #[tokio::test]
    async fn delete_removes_only_the_named_post() {
        let store = MemoryStore::new();
        let owner = Uuid::new_v4();

        let keep = PostService::create_post(&store, owner, PostType::TextImage, content("keep"), None)
            .await
            .unwrap();
        let gone = PostService::create_post(&store, owner, PostType::TextImage, content("gone"), None)
            .await
            .unwrap();

        PostService::delete_post(&store, gone.id).await.unwrap();
        let listed = PostService::list_for_user(&store, owner).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, keep.id);
    }

    #[tokio::test]
    async fn deleting_an_unknown_post_is_not_found() {
        let store = MemoryStore::new();
        let err = PostService::delete_post(&store, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
