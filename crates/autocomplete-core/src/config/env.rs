#[must_use]
pub(super) fn read_env_usize(name: &str, default_value: usize, min_value: usize) -> usize {
    parse_usize_at_least(std::env::var(name).ok().as_deref(), default_value, min_value)
}

#[must_use]
pub(super) fn parse_usize_at_least(raw: Option<&str>, default_value: usize, min_value: usize) -> usize {
    raw.and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|value| *value >= min_value)
        .unwrap_or(default_value)
}

#[cfg(test)]
mod tests {
    use super::parse_usize_at_least;

    #[test]
    fn usize_reader_falls_back_on_garbage_and_values_below_minimum() {
        assert_eq!(parse_usize_at_least(None, 10, 0), 10);
        assert_eq!(parse_usize_at_least(Some(" 25 "), 10, 0), 25);
        assert_eq!(parse_usize_at_least(Some("ten"), 10, 0), 10);
        assert_eq!(parse_usize_at_least(Some("0"), 10, 1), 10);
    }
}
