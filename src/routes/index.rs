use axum::response::Response;

use crate::error::Result;
use crate::views::{self, IndexPage};

pub async fn index() -> Result<Response> {
    views::render(IndexPage)
}
