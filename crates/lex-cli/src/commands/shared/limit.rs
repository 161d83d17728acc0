/// Compute effective limit with precedence: global flag -> configured default.
#[must_use]
pub fn effective_limit(flag: Option<u32>, configured: u32) -> u32 {
    flag.unwrap_or(configured)
}

/// Truncate a result list to `--limit` when the flag is given.
pub fn apply_limit<T>(items: &mut Vec<T>, flag: Option<u32>) {
    if let Some(limit) = flag {
        items.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }
}
