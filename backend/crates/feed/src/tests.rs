//! Unit tests for Feed crate
//! Use cases run against in-memory repositories, with wrappers that inject
//! storage failures to exercise the compensating writes.

#[cfg(test)]
mod support {
    use std::sync::{Arc, Mutex};

    use auth::domain::entity::account::Account;
    use auth::domain::repository::AccountRepository;
    use auth::domain::value_object::email::Email;
    use auth::{AuthError, AuthResult, CallContext, InMemoryAccountRepository};
    use kernel::id::{AccountId, PostId};
    use platform::password::{ClearTextPassword, MIN_COST, PasswordHasher};

    use crate::domain::entity::post::Post;
    use crate::domain::repository::{ImageStore, PostRepository};
    use crate::error::{FeedError, FeedResult};
    use crate::infra::memory::InMemoryPostRepository;

    pub async fn seed_account(repo: &InMemoryAccountRepository, email: &str) -> Account {
        let hash = PasswordHasher::new(MIN_COST)
            .unwrap()
            .hash(&ClearTextPassword::new("secret".to_string()))
            .unwrap();
        let account = Account::new(Email::new(email).unwrap(), "Author", hash);
        repo.create(&account).await.unwrap();
        account
    }

    pub fn ctx_for(account: &Account) -> CallContext {
        CallContext::authenticated(account.account_id, account.email.clone())
    }

    /// Records every removal request
    #[derive(Default)]
    pub struct RecordingImageStore {
        pub removed: Mutex<Vec<String>>,
        pub fail: bool,
    }

    impl RecordingImageStore {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn removed(&self) -> Vec<String> {
            self.removed.lock().unwrap().clone()
        }

        /// Let background removal tasks run
        pub async fn settle(&self, expected: usize) {
            for _ in 0..100 {
                if self.removed.lock().unwrap().len() >= expected {
                    return;
                }
                tokio::task::yield_now().await;
            }
        }
    }

    impl ImageStore for RecordingImageStore {
        async fn remove(&self, image_ref: &str) -> FeedResult<()> {
            self.removed.lock().unwrap().push(image_ref.to_string());
            if self.fail {
                return Err(FeedError::Image("disk unavailable".to_string()));
            }
            Ok(())
        }
    }

    /// Account store whose owner-link append always fails
    #[derive(Clone, Default)]
    pub struct FailingAttach(pub InMemoryAccountRepository);

    impl AccountRepository for FailingAttach {
        async fn create(&self, account: &Account) -> AuthResult<()> {
            self.0.create(account).await
        }

        async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
            self.0.find_by_id(account_id).await
        }

        async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
            self.0.find_by_email(email).await
        }

        async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
            self.0.exists_by_email(email).await
        }

        async fn update(&self, account: &Account) -> AuthResult<()> {
            self.0.update(account).await
        }

        async fn attach_post(&self, _: &AccountId, _: &PostId) -> AuthResult<()> {
            Err(AuthError::Internal("link table unavailable".to_string()))
        }

        async fn detach_post(&self, account_id: &AccountId, post_id: &PostId) -> AuthResult<()> {
            self.0.detach_post(account_id, post_id).await
        }
    }

    /// Post store whose delete always fails
    #[derive(Clone, Default)]
    pub struct FailingDelete(pub InMemoryPostRepository);

    impl PostRepository for FailingDelete {
        async fn create(&self, post: &Post) -> FeedResult<()> {
            self.0.create(post).await
        }

        async fn find_by_id(&self, post_id: &PostId) -> FeedResult<Option<Post>> {
            self.0.find_by_id(post_id).await
        }

        async fn update(&self, post: &Post) -> FeedResult<()> {
            self.0.update(post).await
        }

        async fn delete(&self, _: &PostId) -> FeedResult<bool> {
            Err(FeedError::Internal("posts table unavailable".to_string()))
        }

        async fn count(&self) -> FeedResult<u64> {
            self.0.count().await
        }

        async fn list_page(&self, offset: u64, limit: u64) -> FeedResult<Vec<Post>> {
            self.0.list_page(offset, limit).await
        }
    }

    pub fn arc<T>(value: T) -> Arc<T> {
        Arc::new(value)
    }
}

#[cfg(test)]
mod create_tests {
    use auth::domain::repository::AccountRepository;
    use auth::{CallContext, InMemoryAccountRepository};
    use kernel::error::kind::ErrorKind;

    use super::support::*;
    use crate::application::{CreatePostInput, CreatePostUseCase};
    use crate::domain::repository::PostRepository;
    use crate::error::FeedError;
    use crate::infra::memory::InMemoryPostRepository;

    fn input(title: &str, content: &str) -> CreatePostInput {
        CreatePostInput {
            title: title.to_string(),
            content: content.to_string(),
            image_url: Some("images/cover.png".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_requires_authentication() {
        let use_case = CreatePostUseCase::new(
            arc(InMemoryPostRepository::new()),
            arc(InMemoryAccountRepository::new()),
        );
        let err = use_case
            .execute(&CallContext::Anonymous, input("Hello", "World"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthenticated);
    }

    #[tokio::test]
    async fn test_create_validation_collects_all() {
        let accounts = InMemoryAccountRepository::new();
        let account = seed_account(&accounts, "a@x.io").await;
        let posts = arc(InMemoryPostRepository::new());
        let use_case = CreatePostUseCase::new(posts.clone(), arc(accounts));

        let err = use_case
            .execute(&ctx_for(&account), input("abc", ""))
            .await
            .unwrap_err();
        let FeedError::Validation(errors) = &err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(errors.len(), 2);
        assert_eq!(posts.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_for_vanished_account() {
        let ghost_repo = InMemoryAccountRepository::new();
        let ghost = seed_account(&ghost_repo, "ghost@x.io").await;

        let use_case = CreatePostUseCase::new(
            arc(InMemoryPostRepository::new()),
            arc(InMemoryAccountRepository::new()),
        );
        let err = use_case
            .execute(&ctx_for(&ghost), input("Hello", "World"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthenticated);
        assert_eq!(err.to_app_error().message(), "Invalid user!");
    }

    #[tokio::test]
    async fn test_create_attaches_to_owner() {
        let accounts = arc(InMemoryAccountRepository::new());
        let account = seed_account(&accounts, "a@x.io").await;
        let use_case = CreatePostUseCase::new(arc(InMemoryPostRepository::new()), accounts.clone());

        let details = use_case
            .execute(&ctx_for(&account), input("Hello", "World"))
            .await
            .unwrap();

        assert_eq!(details.post.creator_id, account.account_id);
        assert_eq!(details.post.image_url.as_deref(), Some("images/cover.png"));
        assert_eq!(details.creator.unwrap().name, "Author");

        let owner = accounts.find_by_id(&account.account_id).await.unwrap().unwrap();
        assert_eq!(owner.posts, vec![details.post.post_id]);
    }

    #[tokio::test]
    async fn test_failed_attach_removes_post() {
        let accounts = FailingAttach::default();
        let account = seed_account(&accounts.0, "a@x.io").await;
        let posts = arc(InMemoryPostRepository::new());
        let use_case = CreatePostUseCase::new(posts.clone(), arc(accounts));

        let err = use_case
            .execute(&ctx_for(&account), input("Hello", "World"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(posts.count().await.unwrap(), 0);
    }
}

#[cfg(test)]
mod read_tests {
    use chrono::{TimeDelta, Utc};
    use kernel::error::kind::ErrorKind;
    use kernel::id::PostId;

    use auth::{CallContext, InMemoryAccountRepository};

    use super::support::*;
    use crate::application::{GetPostUseCase, ListPostsUseCase};
    use crate::domain::entity::post::Post;
    use crate::domain::repository::PostRepository;
    use crate::error::FeedError;
    use crate::infra::memory::InMemoryPostRepository;

    #[tokio::test]
    async fn test_list_pages_newest_first() {
        let accounts = arc(InMemoryAccountRepository::new());
        let account = seed_account(&accounts, "a@x.io").await;
        let posts = arc(InMemoryPostRepository::new());

        let base = Utc::now();
        let mut ids = Vec::new();
        for i in 0..3 {
            let mut post = Post::new(format!("Title {i}"), "Content", None, account.account_id);
            post.created_at = base + TimeDelta::seconds(i);
            posts.create(&post).await.unwrap();
            ids.push(post.post_id);
        }

        let use_case = ListPostsUseCase::new(posts, accounts);
        let ctx = ctx_for(&account);

        let first = use_case.execute(&ctx, Some(1)).await.unwrap();
        assert_eq!(first.total_posts, 3);
        let first_ids: Vec<PostId> = first.posts.iter().map(|d| d.post.post_id).collect();
        assert_eq!(first_ids, vec![ids[2], ids[1]]);

        let second = use_case.execute(&ctx, Some(2)).await.unwrap();
        assert_eq!(second.posts.len(), 1);
        assert_eq!(second.posts[0].post.post_id, ids[0]);
        assert_eq!(second.posts[0].creator.as_ref().unwrap().name, "Author");

        let past_end = use_case.execute(&ctx, Some(3)).await.unwrap();
        assert!(past_end.posts.is_empty());
        assert_eq!(past_end.total_posts, 3);

        for page in [None, Some(0), Some(-1)] {
            let output = use_case.execute(&ctx, page).await.unwrap();
            let page_ids: Vec<PostId> = output.posts.iter().map(|d| d.post.post_id).collect();
            assert_eq!(page_ids, first_ids);
        }
    }

    #[tokio::test]
    async fn test_list_ties_broken_by_id() {
        let accounts = arc(InMemoryAccountRepository::new());
        let account = seed_account(&accounts, "a@x.io").await;
        let posts = arc(InMemoryPostRepository::new());

        let at = Utc::now();
        let mut ids = Vec::new();
        for _ in 0..4 {
            let mut post = Post::new("Same time", "Content", None, account.account_id);
            post.created_at = at;
            posts.create(&post).await.unwrap();
            ids.push(post.post_id);
        }
        ids.sort();
        ids.reverse();

        let use_case = ListPostsUseCase::new(posts, accounts);
        let ctx = ctx_for(&account);
        let mut seen = Vec::new();
        for page in 1..=2 {
            let output = use_case.execute(&ctx, Some(page)).await.unwrap();
            seen.extend(output.posts.into_iter().map(|d| d.post.post_id));
        }
        assert_eq!(seen, ids);
    }

    #[tokio::test]
    async fn test_list_requires_authentication() {
        let use_case = ListPostsUseCase::new(
            arc(InMemoryPostRepository::new()),
            arc(InMemoryAccountRepository::new()),
        );
        let err = use_case
            .execute(&CallContext::Anonymous, None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthenticated);
    }

    #[tokio::test]
    async fn test_get_post_lookups() {
        let accounts = arc(InMemoryAccountRepository::new());
        let account = seed_account(&accounts, "a@x.io").await;
        let posts = arc(InMemoryPostRepository::new());
        let post = Post::new("Hello", "World", None, account.account_id);
        posts.create(&post).await.unwrap();

        let use_case = GetPostUseCase::new(posts, accounts);
        let ctx = ctx_for(&account);

        let found = use_case.execute(&ctx, &post.post_id.to_string()).await.unwrap();
        assert_eq!(found.post, post);

        let err = use_case.execute(&ctx, "").await.unwrap_err();
        assert!(matches!(err, FeedError::Validation(_)));
        assert_eq!(
            err.to_app_error().data().unwrap().iter().next().unwrap().message,
            "Invalid post Id!"
        );

        let err = use_case.execute(&ctx, "not-an-id").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = use_case
            .execute(&ctx, &PostId::new().to_string())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = use_case
            .execute(&CallContext::Anonymous, &post.post_id.to_string())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthenticated);
    }
}

#[cfg(test)]
mod mutate_tests {
    use std::sync::Arc;

    use auth::domain::repository::AccountRepository;
    use auth::{CallContext, InMemoryAccountRepository};
    use kernel::error::kind::ErrorKind;

    use super::support::*;
    use crate::application::{
        CreatePostInput, CreatePostUseCase, DeletePostUseCase, UpdatePostInput, UpdatePostUseCase,
    };
    use crate::domain::repository::PostRepository;
    use crate::infra::memory::InMemoryPostRepository;

    struct Harness {
        accounts: Arc<InMemoryAccountRepository>,
        posts: Arc<InMemoryPostRepository>,
        images: Arc<RecordingImageStore>,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_images(RecordingImageStore::default())
        }

        fn with_images(images: RecordingImageStore) -> Self {
            Self {
                accounts: arc(InMemoryAccountRepository::new()),
                posts: arc(InMemoryPostRepository::new()),
                images: arc(images),
            }
        }

        fn update(
            &self,
        ) -> UpdatePostUseCase<InMemoryPostRepository, InMemoryAccountRepository, RecordingImageStore>
        {
            UpdatePostUseCase::new(self.posts.clone(), self.accounts.clone(), self.images.clone())
        }

        fn delete(
            &self,
        ) -> DeletePostUseCase<InMemoryPostRepository, InMemoryAccountRepository, RecordingImageStore>
        {
            DeletePostUseCase::new(self.posts.clone(), self.accounts.clone(), self.images.clone())
        }

        async fn create(&self, ctx: &CallContext, image: Option<&str>) -> String {
            CreatePostUseCase::new(self.posts.clone(), self.accounts.clone())
                .execute(
                    ctx,
                    CreatePostInput {
                        title: "Hello".to_string(),
                        content: "World".to_string(),
                        image_url: image.map(str::to_string),
                    },
                )
                .await
                .unwrap()
                .post
                .post_id
                .to_string()
        }
    }

    fn update_input(image: Option<&str>) -> UpdatePostInput {
        UpdatePostInput {
            title: "Updated title".to_string(),
            content: "Updated content".to_string(),
            image_url: image.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_update_by_owner() {
        let h = Harness::new();
        let owner = seed_account(&h.accounts, "a@x.io").await;
        let ctx = ctx_for(&owner);
        let id = h.create(&ctx, Some("images/a.png")).await;

        let details = h.update().execute(&ctx, &id, update_input(None)).await.unwrap();
        assert_eq!(details.post.title, "Updated title");
        assert_eq!(details.post.image_url.as_deref(), Some("images/a.png"));
        assert!(details.post.updated_at >= details.post.created_at);
    }

    #[tokio::test]
    async fn test_update_undefined_sentinel_keeps_image() {
        let h = Harness::new();
        let owner = seed_account(&h.accounts, "a@x.io").await;
        let ctx = ctx_for(&owner);
        let id = h.create(&ctx, Some("images/a.png")).await;

        let details = h
            .update()
            .execute(&ctx, &id, update_input(Some("undefined")))
            .await
            .unwrap();
        assert_eq!(details.post.image_url.as_deref(), Some("images/a.png"));

        tokio::task::yield_now().await;
        assert!(h.images.removed().is_empty());
    }

    #[tokio::test]
    async fn test_update_new_image_removes_old() {
        let h = Harness::new();
        let owner = seed_account(&h.accounts, "a@x.io").await;
        let ctx = ctx_for(&owner);
        let id = h.create(&ctx, Some("images/a.png")).await;

        let details = h
            .update()
            .execute(&ctx, &id, update_input(Some("images/b.png")))
            .await
            .unwrap();
        assert_eq!(details.post.image_url.as_deref(), Some("images/b.png"));

        h.images.settle(1).await;
        assert_eq!(h.images.removed(), vec!["images/a.png".to_string()]);
    }

    #[tokio::test]
    async fn test_update_by_other_is_forbidden() {
        let h = Harness::new();
        let owner = seed_account(&h.accounts, "a@x.io").await;
        let other = seed_account(&h.accounts, "b@x.io").await;
        let id = h.create(&ctx_for(&owner), None).await;

        let err = h
            .update()
            .execute(&ctx_for(&other), &id, update_input(None))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);

        let stored = h.posts.find_by_id(&id.parse().unwrap()).await.unwrap().unwrap();
        assert_eq!(stored.title, "Hello");
    }

    #[tokio::test]
    async fn test_update_checks_auth_before_input() {
        let h = Harness::new();
        let err = h
            .update()
            .execute(&CallContext::Anonymous, "", update_input(None))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthenticated);
    }

    #[tokio::test]
    async fn test_update_validates_before_lookup() {
        let h = Harness::new();
        let owner = seed_account(&h.accounts, "a@x.io").await;
        let mut input = update_input(None);
        input.title = "abc".to_string();

        let err = h
            .update()
            .execute(&ctx_for(&owner), "not-an-id", input)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationFailed);
    }

    #[tokio::test]
    async fn test_delete_by_owner() {
        let h = Harness::new();
        let owner = seed_account(&h.accounts, "a@x.io").await;
        let ctx = ctx_for(&owner);
        let id = h.create(&ctx, Some("images/a.png")).await;

        h.delete().execute(&ctx, &id).await.unwrap();

        assert_eq!(h.posts.count().await.unwrap(), 0);
        let stored_owner = h.accounts.find_by_id(&owner.account_id).await.unwrap().unwrap();
        assert!(stored_owner.posts.is_empty());

        h.images.settle(1).await;
        assert_eq!(h.images.removed(), vec!["images/a.png".to_string()]);

        let err = h.delete().execute(&ctx, &id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_delete_by_other_is_forbidden() {
        let h = Harness::new();
        let owner = seed_account(&h.accounts, "a@x.io").await;
        let other = seed_account(&h.accounts, "b@x.io").await;
        let id = h.create(&ctx_for(&owner), None).await;

        let err = h.delete().execute(&ctx_for(&other), &id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert_eq!(h.posts.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_image_removal_failure_does_not_fail_delete() {
        let h = Harness::with_images(RecordingImageStore::failing());
        let owner = seed_account(&h.accounts, "a@x.io").await;
        let ctx = ctx_for(&owner);
        let id = h.create(&ctx, Some("images/a.png")).await;

        h.delete().execute(&ctx, &id).await.unwrap();
        h.images.settle(1).await;
        assert_eq!(h.images.removed().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_delete_reattaches() {
        let accounts = arc(InMemoryAccountRepository::new());
        let posts = FailingDelete::default();
        let images = arc(RecordingImageStore::default());
        let owner = seed_account(&accounts, "a@x.io").await;
        let ctx = ctx_for(&owner);

        let id = CreatePostUseCase::new(arc(posts.0.clone()), accounts.clone())
            .execute(
                &ctx,
                CreatePostInput {
                    title: "Hello".to_string(),
                    content: "World".to_string(),
                    image_url: Some("images/a.png".to_string()),
                },
            )
            .await
            .unwrap()
            .post
            .post_id;

        let err = DeletePostUseCase::new(arc(posts.clone()), accounts.clone(), images.clone())
            .execute(&ctx, &id.to_string())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);

        let stored_owner = accounts.find_by_id(&owner.account_id).await.unwrap().unwrap();
        assert_eq!(stored_owner.posts, vec![id]);
        assert_eq!(posts.0.count().await.unwrap(), 1);

        tokio::task::yield_now().await;
        assert!(images.removed().is_empty());
    }
}
