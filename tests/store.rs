mod common;

use common::{lubo, sample_posts, FakeApi, Reply};
use profile_viewer::api::User;
use profile_viewer::repository::{Repository, NO_USER};
use profile_viewer::resource::{Resource, GENERIC_ERROR};
use profile_viewer::store::ProfileStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

fn store(api: FakeApi) -> (ProfileStore<FakeApi>, Arc<FakeApi>) {
    let api = Arc::new(api);
    let store = ProfileStore::new(Repository::new(Arc::clone(&api)), Handle::current());
    (store, api)
}

#[tokio::test]
async fn test_slots_start_empty() {
    let (store, _) = store(FakeApi::new());
    assert_eq!(store.user(), Resource::Empty);
    assert_eq!(store.posts(), Resource::Empty);
}

#[tokio::test]
async fn test_request_user_publishes_loading_then_success() {
    let (store, api) = store(FakeApi::new().user_reply(Reply::Body(lubo())));

    let handle = store.request_user("uniqueuid");
    assert_eq!(store.user(), Resource::Loading);

    handle.await.unwrap();
    assert_eq!(store.user(), Resource::Success(lubo()));
    assert_eq!(api.user_calls(), 1);
    // The other slot is untouched.
    assert_eq!(store.posts(), Resource::Empty);
}

#[tokio::test]
async fn test_request_user_error_settles_as_error() {
    let (store, _) = store(FakeApi::new().user_reply(Reply::NoBody));
    store.request_user("uniqueuid").await.unwrap();
    assert_eq!(store.user(), Resource::Error(NO_USER.to_string()));
}

#[tokio::test]
async fn test_request_posts_success_and_error() {
    let (store, _) = store(
        FakeApi::new()
            .posts_reply(Reply::Body(sample_posts(4)))
            .posts_reply(Reply::NoBody),
    );

    store.request_posts("uniqueuid").await.unwrap();
    assert_eq!(store.posts(), Resource::Success(sample_posts(4)));

    let handle = store.request_posts("uniqueuid");
    assert_eq!(store.posts(), Resource::Loading);
    handle.await.unwrap();
    assert_eq!(store.posts(), Resource::Error(GENERIC_ERROR.to_string()));
}

#[tokio::test]
async fn test_subscriber_sees_loading_then_outcome() {
    let (store, _) = store(FakeApi::new().posts_reply(Reply::Timeout));
    let mut rx = store.subscribe_posts();

    let handle = store.request_posts("uniqueuid");
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), Resource::Loading);

    handle.await.unwrap();
    rx.changed().await.unwrap();
    assert_eq!(*rx.borrow_and_update(), Resource::Error("timeout".to_string()));
}

#[tokio::test]
async fn test_never_empty_after_request() {
    let (store, _) = store(FakeApi::new());
    let mut rx = store.subscribe_user();
    let handle = store.request_user("uniqueuid");

    assert_ne!(*rx.borrow_and_update(), Resource::Empty);
    handle.await.unwrap();
    assert_ne!(*rx.borrow_and_update(), Resource::Empty);
    assert!(store.user().is_settled());
}

#[tokio::test]
async fn test_concurrent_requests_last_writer_wins() {
    let slow = User::new("slow");
    let fast = User::new("fast");
    let (store, api) = store(
        FakeApi::new()
            .user_reply_after(Duration::from_millis(50), Reply::Body(slow.clone()))
            .user_reply(Reply::Body(fast.clone())),
    );

    let first = store.request_user("uniqueuid");
    let second = store.request_user("uniqueuid");
    assert_eq!(store.user(), Resource::Loading);

    second.await.unwrap();
    assert_eq!(store.user(), Resource::Success(fast));

    first.await.unwrap();
    assert_eq!(store.user(), Resource::Success(slow));
    assert_eq!(api.user_calls(), 2);
}

#[tokio::test]
async fn test_new_request_overwrites_previous_outcome() {
    let (store, _) = store(
        FakeApi::new()
            .user_reply(Reply::Body(lubo()))
            .user_reply(Reply::Connection("connection reset")),
    );

    store.request_user("uniqueuid").await.unwrap();
    assert!(matches!(store.user(), Resource::Success(_)));

    store.request_user("uniqueuid").await.unwrap();
    assert_eq!(
        store.user(),
        Resource::Error("connection reset".to_string())
    );
}

#[tokio::test]
async fn test_session_id_is_not_fetched_by_profile_requests() {
    let (store, api) = store(
        FakeApi::new()
            .with_session_id("anon-1")
            .user_reply(Reply::Body(lubo())),
    );

    store.request_user("uniqueuid").await.unwrap();
    store.request_posts("uniqueuid").await.unwrap();
    assert_eq!(api.session_calls(), 0);

    assert_eq!(store.session_id().await, Some("anon-1".to_string()));
    assert_eq!(api.session_calls(), 1);
}
