/// Log target prefixes whose messages are not about mazes at all.
const NOISY_TARGETS: &[&str] = &[
    // argument parsing internals, visible when a CLI enables trace logging
    "clap_builder::",
    "clap_lex::",
];

/// Log filter for programs that turn on verbose logging and want to see only what
/// maze generation itself reports.
///
/// At [`log::Level::Trace`], one generation run produces a few messages per attempt;
/// this filter keeps dependencies from burying them.
#[allow(clippy::missing_inline_in_public_items)]
pub fn standard_filter(metadata: &log::Metadata<'_>) -> bool {
    let target = metadata.target();
    !NOISY_TARGETS.iter().any(|prefix| target.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(target: &str) -> bool {
        standard_filter(&log::Metadata::builder().target(target).build())
    }

    #[test]
    fn filter() {
        assert!(!target("clap_builder::parser::parser"));
        assert!(target("maze_cubes::generate::builder"));
        assert!(target("maze_cubes_cli::config_files"));
    }
}
