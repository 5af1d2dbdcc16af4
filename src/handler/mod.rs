// Copyright 2023. The polls authors all rights reserved.

pub mod polls;
pub mod root;

pub use root::{append_slash, append_slash_to_question, not_found, root};
