// Copyright 2023. The polls authors all rights reserved.

use tracing::debug;

use crate::{extract::QuestionPath, polls};

pub async fn index() -> &'static str {
    polls::index()
}

pub async fn detail(QuestionPath(question_id): QuestionPath) -> String {
    debug!(question_id, "looking at question");
    polls::detail(question_id)
}

pub async fn results(QuestionPath(question_id): QuestionPath) -> String {
    debug!(question_id, "looking at question results");
    polls::results(question_id)
}

pub async fn vote(QuestionPath(question_id): QuestionPath) -> String {
    debug!(question_id, "voting on question");
    polls::vote(question_id)
}
