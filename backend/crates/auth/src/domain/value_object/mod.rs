pub mod account_status;
pub mod email;

pub use account_status::AccountStatus;
pub use email::Email;
