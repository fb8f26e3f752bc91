//! Shared application state

use std::sync::Arc;

use auth::domain::repository::AccountRepository;
use auth::presentation::handlers::AuthAppState;
use auth::{AuthConfig, TokenService};
use feed::domain::repository::{ImageStore, PostRepository};

/// Everything the handlers need, built once at startup
pub struct AppState<A, P, I> {
    pub accounts: Arc<A>,
    pub posts: Arc<P>,
    pub images: Arc<I>,
    pub auth: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

impl<A, P, I> AppState<A, P, I>
where
    A: AccountRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    pub fn new(accounts: A, posts: P, images: I, auth: AuthConfig) -> Self {
        let tokens = Arc::new(auth.token_service());
        Self {
            accounts: Arc::new(accounts),
            posts: Arc::new(posts),
            images: Arc::new(images),
            auth: Arc::new(auth),
            tokens,
        }
    }

    /// State for the REST auth routes, sharing repository and token service
    pub fn auth_state(&self) -> AuthAppState<A> {
        AuthAppState {
            repo: self.accounts.clone(),
            config: self.auth.clone(),
            tokens: self.tokens.clone(),
        }
    }
}

impl<A, P, I> Clone for AppState<A, P, I> {
    fn clone(&self) -> Self {
        Self {
            accounts: self.accounts.clone(),
            posts: self.posts.clone(),
            images: self.images.clone(),
            auth: self.auth.clone(),
            tokens: self.tokens.clone(),
        }
    }
}
