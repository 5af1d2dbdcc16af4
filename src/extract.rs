// Copyright 2023. The polls authors all rights reserved.

use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::request::Parts,
};

use crate::{polls::QuestionId, Error};

/// Extracts the `question_id` path parameter.
///
/// Only a non-empty run of ASCII digits that fits a `QuestionId` reaches the
/// handler. Anything else, including a sign, is answered as if the route did
/// not exist.
#[derive(Debug, Clone, Copy)]
pub struct QuestionPath(pub QuestionId);

#[async_trait]
impl<S> FromRequestParts<S> for QuestionPath
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts.uri.path().to_string();
        let not_found = || Error::NotFound { path };
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(segment)) => parse_question_id(&segment).map(Self).ok_or_else(not_found),
            Err(PathRejection::FailedToDeserializePathParams(_)) => Err(not_found()),
            Err(rejection) => Err(Error::Unhandled(Box::new(rejection))),
        }
    }
}

/// `u64::from_str` accepts a leading `+`, so the digits are checked first.
fn parse_question_id(segment: &str) -> Option<QuestionId> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_digits() {
        assert_eq!(parse_question_id("5"), Some(5));
        assert_eq!(parse_question_id("007"), Some(7));
        assert_eq!(parse_question_id("18446744073709551615"), Some(QuestionId::MAX));
    }

    #[test]
    fn rejects_anything_but_digits() {
        for segment in ["", "+5", "-3", "1.5", "abc", " 5", "5 ", "١٢"] {
            assert_eq!(parse_question_id(segment), None, "{segment:?}");
        }
    }

    #[test]
    fn rejects_overflow() {
        assert_eq!(parse_question_id("18446744073709551616"), None);
    }
}
