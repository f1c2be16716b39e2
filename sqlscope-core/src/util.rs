/// Shortens long SQL for log and error messages.
#[macro_export]
macro_rules! truncate_long {
    ($query:expr) => {{
        let query: &str = $query;
        let mut end = ::std::cmp::min(query.len(), 497);
        while !query.is_char_boundary(end) {
            end -= 1;
        }
        format!(
            "{}{}",
            query[..end].trim_end(),
            if query.len() > end { "..." } else { "" },
        )
    }};
}
