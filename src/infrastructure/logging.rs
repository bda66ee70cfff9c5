use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber for the given filter directive (e.g. "info",
/// "tableport=debug"). Returns false when a global subscriber already exists.
pub fn init_logging(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        let _ = init_logging("debug");
        assert!(!init_logging("info"));
    }
}
