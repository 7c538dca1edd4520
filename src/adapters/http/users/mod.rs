//! HTTP adapter for user endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    GetReviewParams, ReviewListResponse, SetIsActiveRequest, SetIsActiveResponse, UserResponse,
};
pub use handlers::UserHandlers;
pub use routes::user_routes;
