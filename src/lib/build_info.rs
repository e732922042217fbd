/// Short git commit baked in at build time, or "unknown" outside a checkout.
pub fn git_commit_hash() -> &'static str {
    option_env!("OTPGATE_WEB_GIT_SHA")
        .filter(|value| !value.is_empty())
        .unwrap_or("unknown")
}
