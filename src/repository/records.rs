//! Line grammar of the record files
//!
//! User records are `name#successCount#rootFlag` with `rootFlag` one of `Y`/`N`.
//! Word bank lines are bare words of 7-21 lowercase letters.

use crate::core::User;
use regex::Regex;
use std::sync::LazyLock;

static USER_RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9]+)#([0-9]+)#([YN])$")
        .expect("hard-coded user record regex should be valid")
});

static WORD_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]{7,21}$").expect("hard-coded word regex should be valid")
});

/// Parse one line of the user records file
///
/// Returns `None` unless the whole line matches the record grammar and the
/// success count fits in a `u32`.
#[must_use]
pub fn parse_user_record(line: &str) -> Option<User> {
    let captures = USER_RECORD.captures(line)?;

    let user_name = &captures[1];
    let num_success = captures[2].parse::<u32>().ok()?;
    let is_root = &captures[3] == "Y";

    Some(User::new(user_name, num_success, is_root))
}

/// Encode a user as a record line, without the trailing newline
#[must_use]
pub fn format_user_record(user: &User) -> String {
    format!(
        "{}#{}#{}",
        user.user_name(),
        user.num_success(),
        if user.is_root() { "Y" } else { "N" }
    )
}

/// Check one line of the word bank
#[must_use]
pub fn is_valid_word_entry(line: &str) -> bool {
    WORD_ENTRY.is_match(line)
}

/// Join lines into file contents, one per line with a trailing newline
pub fn to_file_contents<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut contents = String::new();
    for line in lines {
        contents.push_str(line.as_ref());
        contents.push('\n');
    }
    contents
}
