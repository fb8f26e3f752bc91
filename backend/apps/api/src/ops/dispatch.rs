//! Operation dispatch
//!
//! Maps each operation onto its use case and shapes the result.

use serde_json::{Value, json};

use auth::application::{LoginInput, LoginUseCase, SignUpInput, SignUpUseCase, StatusUseCase};
use auth::domain::repository::AccountRepository;
use auth::models::LoginResponse;
use auth::{AuthError, CallContext};
use feed::application::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase,
    UpdatePostInput, UpdatePostUseCase,
};
use feed::domain::repository::{ImageStore, PostRepository};
use feed::models::{PostResponse, PostsPageResponse};
use feed::FeedError;
use kernel::error::app_error::AppError;

use super::request::Operation;
use crate::state::AppState;

fn auth_failure(err: AuthError) -> AppError {
    err.log();
    err.into()
}

fn feed_failure(err: FeedError) -> AppError {
    err.log();
    err.into()
}

pub async fn dispatch<A, P, I>(
    state: &AppState<A, P, I>,
    ctx: &CallContext,
    operation: Operation,
) -> Result<Value, AppError>
where
    A: AccountRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Send + Sync + 'static,
    I: ImageStore + Send + Sync + 'static,
{
    let data = match operation {
        Operation::CreateUser(args) => {
            let input = SignUpInput {
                email: args.user_input.email,
                password: args.user_input.password,
                name: args.user_input.name,
            };
            let output = SignUpUseCase::new(state.accounts.clone(), state.auth.clone())
                .execute(input)
                .await
                .map_err(auth_failure)?;
            serde_json::to_value(output.account)?
        }

        Operation::Login(args) => {
            let input = LoginInput {
                email: args.email,
                password: args.password,
            };
            let output = LoginUseCase::new(
                state.accounts.clone(),
                state.tokens.clone(),
                state.auth.clone(),
            )
            .execute(input)
            .await
            .map_err(auth_failure)?;
            serde_json::to_value(LoginResponse {
                token: output.token,
                user_id: output.account_id.to_string(),
            })?
        }

        Operation::CreatePost(args) => {
            let input = CreatePostInput {
                title: args.post_input.title,
                content: args.post_input.content,
                image_url: args.post_input.image_url,
            };
            let details = CreatePostUseCase::new(state.posts.clone(), state.accounts.clone())
                .execute(ctx, input)
                .await
                .map_err(feed_failure)?;
            serde_json::to_value(PostResponse::from(details))?
        }

        Operation::Posts(args) => {
            let output = ListPostsUseCase::new(state.posts.clone(), state.accounts.clone())
                .execute(ctx, args.page)
                .await
                .map_err(feed_failure)?;
            serde_json::to_value(PostsPageResponse::from(output))?
        }

        Operation::Post(args) => {
            let details = GetPostUseCase::new(state.posts.clone(), state.accounts.clone())
                .execute(ctx, &args.id)
                .await
                .map_err(feed_failure)?;
            serde_json::to_value(PostResponse::from(details))?
        }

        Operation::UpdatePost(args) => {
            let input = UpdatePostInput {
                title: args.post_input.title,
                content: args.post_input.content,
                image_url: args.post_input.image_url,
            };
            let details = UpdatePostUseCase::new(
                state.posts.clone(),
                state.accounts.clone(),
                state.images.clone(),
            )
            .execute(ctx, &args.id, input)
            .await
            .map_err(feed_failure)?;
            serde_json::to_value(PostResponse::from(details))?
        }

        Operation::DeletePost(args) => {
            DeletePostUseCase::new(
                state.posts.clone(),
                state.accounts.clone(),
                state.images.clone(),
            )
            .execute(ctx, &args.id)
            .await
            .map_err(feed_failure)?;
            json!(true)
        }

        Operation::Status(args) => {
            let status = StatusUseCase::new(state.accounts.clone());
            match args.status {
                None => {
                    let account = status.get(ctx).await.map_err(auth_failure)?;
                    serde_json::to_value(account.profile())?
                }
                Some(value) => {
                    status.update(ctx, value).await.map_err(auth_failure)?;
                    json!(true)
                }
            }
        }
    };

    Ok(data)
}
