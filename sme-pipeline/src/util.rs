/// Short, human-readable name for a stage type.
///
/// Drops the module path and any generic arguments, so
/// `"sme_pipeline::components::LogSideEffect<sme_pipeline::types::X>"`
/// becomes `"LogSideEffect"`.
pub fn short_type_name(full: &str) -> &str {
    let base = match full.find('<') {
        Some(idx) => &full[..idx],
        None => full,
    };
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_path_and_generics() {
        assert_eq!(short_type_name("a::b::SeverityFilter"), "SeverityFilter");
        assert_eq!(short_type_name("a::Log<b::Risk>"), "Log");
        assert_eq!(short_type_name("Plain"), "Plain");
    }
}
