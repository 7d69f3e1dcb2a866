//! Post response DTOs

use serde::Serialize;

use crate::models::Post;

/// Post collection response
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<Post>,
    pub total: usize,
}

impl PostListResponse {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            total: posts.len(),
            posts,
        }
    }
}

/// Deletion success response
#[derive(Debug, Serialize)]
pub struct DeletePostResponse {
    pub message: String,
}
