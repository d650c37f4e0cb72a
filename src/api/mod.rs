//! Client side of the blog REST API.

mod client;
mod error;
pub mod models;
mod service;

pub use client::HttpContentService;
pub use error::ApiError;
pub use models::{AuthorRef, Comment, Post, PostId, ProfileUser, UserProfile, Username};
pub use service::{ContentService, Resource};
