//! Operation requests
//!
//! Argument names follow the camelCase wire format. Missing string fields
//! default to empty so the validators report them.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::envelope::OpsError;

/// Raw request body
#[derive(Debug, Deserialize)]
pub struct OpsRequest {
    pub operation: String,
    #[serde(default)]
    pub args: Value,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserArgs {
    pub user_input: UserInput,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginArgs {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostArgs {
    pub post_input: PostInput,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsArgs {
    #[serde(default)]
    pub page: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostIdArgs {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostArgs {
    pub id: String,
    pub post_input: PostInput,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusArgs {
    #[serde(default)]
    pub status: Option<String>,
}

/// A recognised operation with typed arguments
pub enum Operation {
    CreateUser(CreateUserArgs),
    Login(LoginArgs),
    CreatePost(CreatePostArgs),
    Posts(PostsArgs),
    Post(PostIdArgs),
    UpdatePost(UpdatePostArgs),
    DeletePost(PostIdArgs),
    Status(StatusArgs),
}

impl Operation {
    pub fn parse(request: OpsRequest) -> Result<Self, OpsError> {
        let OpsRequest { operation, args } = request;
        let args = match args {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };

        let parsed = match operation.as_str() {
            "createUser" => Operation::CreateUser(args_for(&operation, args)?),
            "login" => Operation::Login(args_for(&operation, args)?),
            "createPost" => Operation::CreatePost(args_for(&operation, args)?),
            "posts" => Operation::Posts(args_for(&operation, args)?),
            "post" => Operation::Post(args_for(&operation, args)?),
            "updatePost" => Operation::UpdatePost(args_for(&operation, args)?),
            "deletePost" => Operation::DeletePost(args_for(&operation, args)?),
            "status" => Operation::Status(args_for(&operation, args)?),
            _ => return Err(OpsError::UnknownOperation(operation)),
        };
        Ok(parsed)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateUser(_) => "createUser",
            Operation::Login(_) => "login",
            Operation::CreatePost(_) => "createPost",
            Operation::Posts(_) => "posts",
            Operation::Post(_) => "post",
            Operation::UpdatePost(_) => "updatePost",
            Operation::DeletePost(_) => "deletePost",
            Operation::Status(_) => "status",
        }
    }
}

fn args_for<T: DeserializeOwned>(operation: &str, args: Value) -> Result<T, OpsError> {
    serde_json::from_value(args).map_err(|e| OpsError::InvalidArguments {
        operation: operation.to_string(),
        reason: e.to_string(),
    })
}
