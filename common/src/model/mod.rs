pub mod auth;
pub mod community;
pub mod leaderboard;
pub mod opportunity;
pub mod organization;
pub mod profile;

/// Splits a comma separated form field (skills, interests, tags) into
/// trimmed, non-empty entries.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
