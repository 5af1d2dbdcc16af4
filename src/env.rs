// Copyright 2023. The polls authors all rights reserved.

pub fn get_env_or(env: &str, default: &str) -> String {
    std::env::var(env).unwrap_or_else(|_| default.to_string())
}
