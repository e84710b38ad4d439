use std::env;
use tracing::debug;

/// A single place the API credential can come from.
struct CredentialSource {
    /// Environment variable consulted for this source.
    var: &'static str,
    /// Where deployments are expected to set it (diagnostics only).
    origin: &'static str,
}

/// Ranked credential sources; the first non-empty value wins.
///
/// `API_KEY` is what the hosting platform injects into the process
/// environment. `VITE_API_KEY` is the bundler-era name the dashboard
/// used before, kept as fallback so existing deployments keep working.
const SOURCES: &[CredentialSource] = &[
    CredentialSource {
        var: "API_KEY",
        origin: "hosting platform",
    },
    CredentialSource {
        var: "VITE_API_KEY",
        origin: "legacy runtime env",
    },
];

/// Resolve the API credential, or `None` when no source has one.
///
/// Resolution runs once per analysis call and the value is never cached
/// here; any caching is the hosting environment's business.
pub fn resolve() -> Option<String> {
    resolve_internal(true)
}

fn resolve_internal(load_dotenv: bool) -> Option<String> {
    // Pick up .env files the same way the old bundler setup did.
    if load_dotenv {
        let _ = dotenv::dotenv();
    }

    SOURCES.iter().find_map(|source| {
        let value = env::var(source.var).ok().filter(|v| !v.is_empty())?;
        debug!(
            "API credential resolved from {} ({})",
            source.var, source.origin
        );
        Some(value)
    })
}

#[cfg(test)]
fn resolve_no_dotenv() -> Option<String> {
    resolve_internal(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn setup_clean_env() {
        env::remove_var("API_KEY");
        env::remove_var("VITE_API_KEY");
    }

    #[test]
    #[serial]
    fn resolves_nothing_when_no_source_is_set() {
        setup_clean_env();

        assert_eq!(resolve_no_dotenv(), None);
    }

    #[test]
    #[serial]
    fn platform_key_wins_over_legacy_name() {
        setup_clean_env();
        env::set_var("API_KEY", "platform-key");
        env::set_var("VITE_API_KEY", "vite-key");

        assert_eq!(resolve_no_dotenv().as_deref(), Some("platform-key"));

        setup_clean_env();
    }

    #[test]
    #[serial]
    fn falls_back_to_legacy_name() {
        setup_clean_env();
        env::set_var("VITE_API_KEY", "vite-key");

        assert_eq!(resolve_no_dotenv().as_deref(), Some("vite-key"));

        setup_clean_env();
    }

    #[test]
    #[serial]
    fn empty_values_are_skipped_not_used() {
        setup_clean_env();
        env::set_var("API_KEY", "");
        env::set_var("VITE_API_KEY", "vite-key");

        assert_eq!(resolve_no_dotenv().as_deref(), Some("vite-key"));

        env::set_var("VITE_API_KEY", "");
        assert_eq!(resolve_no_dotenv(), None);

        setup_clean_env();
    }
}
