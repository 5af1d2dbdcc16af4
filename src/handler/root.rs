// Copyright 2023. The polls authors all rights reserved.

use axum::{extract::OriginalUri, http::Uri, response::Redirect};

use crate::{about, extract::QuestionPath, Error};

pub async fn root() -> String {
    about()
}

pub async fn not_found(OriginalUri(uri): OriginalUri) -> Error {
    Error::NotFound { path: uri.path().to_string() }
}

/// Redirects a route registered without its trailing slash to the canonical,
/// slash-terminated path. The query string is carried over.
pub async fn append_slash(OriginalUri(uri): OriginalUri) -> Redirect {
    redirect_with_slash(&uri)
}

/// Like [`append_slash`], but only once `question_id` is known to resolve, so
/// a malformed identifier is a 404 rather than a redirect to one.
pub async fn append_slash_to_question(
    QuestionPath(_question_id): QuestionPath,
    OriginalUri(uri): OriginalUri,
) -> Redirect {
    redirect_with_slash(&uri)
}

fn redirect_with_slash(uri: &Uri) -> Redirect {
    let location = match uri.query() {
        Some(query) => format!("{}/?{query}", uri.path()),
        None => format!("{}/", uri.path()),
    };
    Redirect::permanent(&location)
}
