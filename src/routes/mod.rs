use axum::extract::FromRequest;

use crate::errors::ApiError;

pub(crate) mod health;
pub(crate) mod network;
pub(crate) mod tutor;

/// JSON request body whose rejections are answered with the error envelope
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub(crate) struct ApiJson<T>(pub T);
