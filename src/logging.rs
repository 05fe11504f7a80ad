/// Installs the `env_logger` backend once per process.
///
/// `FURIPS_LOG` takes precedence over `default_level`. Repeated calls, including
/// from tests, are no-ops.
pub fn init(default_level: &str) {
    let env = env_logger::Env::default().filter_or(crate::config::ENV_LOG, default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn repeated_init_is_harmless() {
        super::init("debug");
        super::init("warn");
        log::debug!("logger installed");
    }
}
