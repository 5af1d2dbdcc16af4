// Copyright 2023. The polls authors all rights reserved.

pub mod config;
pub mod env;
mod error;
mod extract;
mod handler;
pub mod polls;

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{Error, Result};

pub fn app() -> Router {
    let root_routers = Router::new().route("/", get(handler::root));
    let polls_routers = Router::new()
        .route("/polls/", any(handler::polls::index))
        .route("/polls/:question_id/", any(handler::polls::detail))
        .route("/polls/:question_id/results/", any(handler::polls::results))
        .route("/polls/:question_id/vote/", any(handler::polls::vote))
        .route("/polls", any(handler::append_slash))
        .route("/polls/:question_id", any(handler::append_slash_to_question))
        .route("/polls/:question_id/results", any(handler::append_slash_to_question))
        .route("/polls/:question_id/vote", any(handler::append_slash_to_question));

    Router::new()
        .merge(root_routers)
        .merge(polls_routers)
        .fallback(handler::not_found)
        .layer(TraceLayer::new_for_http())
}

pub fn about() -> String {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    let authors: Vec<&str> = env!("CARGO_PKG_AUTHORS").split(':').collect();
    const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");
    format!(
        "{NAME} - {DESCRIPTION}
{}

Version: {VERSION}
Authors: {:?}
\n",
        HOMEPAGE, authors
    )
}
