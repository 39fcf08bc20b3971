use pocket_config::PocketConfig;

/// Emit warnings for sections that fell back to defaults the commands need.
pub fn warn_unconfigured(config: &PocketConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PocketConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.api.is_configured() {
        if has_env_prefix(&env_keys, "POCKET_API") {
            warnings.push(
                "API config appears default while POCKET_API* env vars exist. Use double underscores (example: POCKET_API__BASE_URL)."
                    .to_string(),
            );
        } else {
            warnings.push(
                "No analytics backend configured; live insights cannot be fetched. Set POCKET_API__BASE_URL."
                    .to_string(),
            );
        }
    }

    if config.general.default_category.is_empty() && has_env_prefix(&env_keys, "POCKET_GENERAL") {
        warnings.push(
            "General config appears default while POCKET_GENERAL* env vars exist. Use double underscores (example: POCKET_GENERAL__DEFAULT_CATEGORY)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
