// Copyright 2023. The polls authors all rights reserved.

/// Identifier of a poll question, as it appears in the request path.
pub type QuestionId = u64;

/// Greeting shown at the polls index.
pub const INDEX_MESSAGE: &str = "Hello, world. You're at the polls index.";

pub fn index() -> &'static str {
    INDEX_MESSAGE
}

pub fn detail(question_id: QuestionId) -> String {
    format!("You are looking at question {question_id}.")
}

pub fn results(question_id: QuestionId) -> String {
    format!("You are looking at the results of question {question_id}.")
}

pub fn vote(question_id: QuestionId) -> String {
    format!("You are voting on question {question_id}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_fixed() {
        assert_eq!(index(), "Hello, world. You're at the polls index.");
    }

    #[test]
    fn detail_embeds_question_id() {
        assert_eq!(detail(5), "You are looking at question 5.");
        assert_eq!(detail(0), "You are looking at question 0.");
    }

    #[test]
    fn results_embeds_question_id() {
        assert_eq!(results(42), "You are looking at the results of question 42.");
    }

    #[test]
    fn vote_embeds_question_id() {
        assert_eq!(vote(1), "You are voting on question 1.");
    }

    #[test]
    fn question_id_is_rendered_in_decimal() {
        for id in [7, 10, 255, 1_000_000, QuestionId::MAX] {
            assert_eq!(detail(id), format!("You are looking at question {}.", id));
            assert_eq!(results(id), format!("You are looking at the results of question {}.", id));
            assert_eq!(vote(id), format!("You are voting on question {}.", id));
        }
    }
}
