pub mod post;

pub use post::{ImageChange, Post};
