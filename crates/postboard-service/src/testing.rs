//! In-memory fakes for service tests

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use postboard_cache::MemorySessionStore;
use postboard_core::entities::{Post, PostView, SessionData, User};
use postboard_core::events::RealtimeEvent;
use postboard_core::traits::{
    EventBroadcaster, LikeRepository, PostRepository, RepoResult, UserRepository,
};
use postboard_core::value_objects::{LikeAction, LikeToggle, PostId, PostScope, UserId};
use postboard_core::DomainError;

use crate::services::ServiceContext;

#[derive(Default)]
struct State {
    next_user_id: UserId,
    next_post_id: PostId,
    users: Vec<(User, String)>,
    posts: Vec<Post>,
    likes: HashSet<(UserId, PostId)>,
}

impl State {
    fn insert_user(&mut self, username: &str, password_hash: &str) -> RepoResult<User> {
        if self.users.iter().any(|(u, _)| u.username == username) {
            return Err(DomainError::UsernameTaken(username.to_string()));
        }
        self.next_user_id += 1;
        let user = User::new(self.next_user_id, username);
        self.users.push((user.clone(), password_hash.to_string()));
        Ok(user)
    }

    fn insert_post(&mut self, user_id: UserId, content: &str) -> RepoResult<Post> {
        if !self.users.iter().any(|(u, _)| u.id == user_id) {
            return Err(DomainError::UserNotFound(user_id));
        }
        self.next_post_id += 1;
        let post = Post::new(self.next_post_id, user_id, content);
        self.posts.push(post.clone());
        Ok(post)
    }

    fn count(&self, post_id: PostId) -> i64 {
        self.likes.iter().filter(|(_, p)| *p == post_id).count() as i64
    }

    fn view(&self, post: &Post, viewer: UserId) -> PostView {
        let username = self
            .users
            .iter()
            .find(|(u, _)| u.id == post.user_id)
            .map(|(u, _)| u.username.clone())
            .unwrap_or_default();

        PostView {
            id: post.id,
            content: post.content.clone(),
            created_at: post.created_at,
            username,
            is_author: post.user_id == viewer,
            likes: self.count(post.id),
            liked: self.likes.contains(&(viewer, post.id)),
        }
    }
}

/// Users, posts, and likes held in one shared map
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn add_user(&self, username: &str, password_hash: &str) -> User {
        self.state.lock().insert_user(username, password_hash).unwrap()
    }

    pub fn add_post(&self, user_id: UserId, content: &str) -> Post {
        self.state.lock().insert_post(user_id, content).unwrap()
    }

    pub fn usernames(&self) -> Vec<String> {
        self.state
            .lock()
            .users
            .iter()
            .map(|(u, _)| u.username.clone())
            .collect()
    }

    pub fn posts(&self) -> Vec<Post> {
        self.state.lock().posts.clone()
    }

    pub fn like_count(&self, post_id: PostId) -> i64 {
        self.state.lock().count(post_id)
    }

    pub fn is_liked(&self, user_id: UserId, post_id: PostId) -> bool {
        self.state.lock().likes.contains(&(user_id, post_id))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let state = self.state.lock();
        Ok(state.users.iter().find(|(u, _)| u.id == id).map(|(u, _)| u.clone()))
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let state = self.state.lock();
        Ok(state
            .users
            .iter()
            .find(|(u, _)| u.username == username)
            .map(|(u, _)| u.clone()))
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self.state.lock().users.iter().any(|(u, _)| u.username == username))
    }

    async fn create(&self, username: &str, password_hash: &str) -> RepoResult<User> {
        self.state.lock().insert_user(username, password_hash)
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        let state = self.state.lock();
        Ok(state.users.iter().find(|(u, _)| u.id == id).map(|(_, h)| h.clone()))
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn create(&self, user_id: UserId, content: &str) -> RepoResult<Post> {
        self.state.lock().insert_post(user_id, content)
    }

    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        Ok(self.state.lock().posts.iter().find(|p| p.id == id).cloned())
    }

    async fn list_views(&self, viewer: UserId, scope: PostScope) -> RepoResult<Vec<PostView>> {
        let state = self.state.lock();
        let mut views: Vec<PostView> = state
            .posts
            .iter()
            .filter(|p| match scope {
                PostScope::All => true,
                PostScope::Mine => p.user_id == viewer,
                PostScope::Liked => state.likes.contains(&(viewer, p.id)),
            })
            .map(|p| state.view(p, viewer))
            .collect();
        views.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(views)
    }
}

#[async_trait]
impl LikeRepository for InMemoryStore {
    async fn toggle(&self, user_id: UserId, post_id: PostId) -> RepoResult<LikeToggle> {
        let mut state = self.state.lock();
        if !state.posts.iter().any(|p| p.id == post_id) {
            return Err(DomainError::PostNotFound(post_id));
        }
        let action = if state.likes.remove(&(user_id, post_id)) {
            LikeAction::Unliked
        } else {
            state.likes.insert((user_id, post_id));
            LikeAction::Liked
        };
        Ok(LikeToggle::new(action, state.count(post_id)))
    }
}

/// Keeps every broadcast event for later assertions
#[derive(Default)]
pub struct RecordingBroadcaster {
    events: Mutex<Vec<RealtimeEvent>>,
}

impl RecordingBroadcaster {
    pub fn events(&self) -> Vec<RealtimeEvent> {
        self.events.lock().clone()
    }
}

impl EventBroadcaster for RecordingBroadcaster {
    fn broadcast(&self, event: &RealtimeEvent) -> usize {
        self.events.lock().push(event.clone());
        1
    }
}

pub fn session_for(user: &User) -> SessionData {
    SessionData::new(user.id, user.username.clone())
}

/// A context wired entirely to fakes
pub fn test_context() -> (ServiceContext, InMemoryStore, Arc<RecordingBroadcaster>) {
    let store = InMemoryStore::default();
    let broadcaster = Arc::new(RecordingBroadcaster::default());

    let ctx = ServiceContext::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(MemorySessionStore::new(3600)),
        broadcaster.clone(),
    );

    (ctx, store, broadcaster)
}
