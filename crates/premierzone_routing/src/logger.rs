// This module setup the logger level.

use std::env;

use tracing_subscriber::EnvFilter;

pub fn setup(logger_level: &str) {
    seed_rust_log(logger_level);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();
}

// A RUST_LOG set by the caller wins over the configured level.
fn seed_rust_log(logger_level: &str) {
    if env::var_os("RUST_LOG").is_none() {
        let env = format!(
            "info,premierzone_app={logger_level},premierzone_infrastructure={logger_level},\
             premierzone_routing={logger_level},tower_http={logger_level}"
        );

        env::set_var("RUST_LOG", env);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_is_seeded_only_when_unset() {
        env::remove_var("RUST_LOG");

        seed_rust_log("debug");
        let seeded = env::var("RUST_LOG").unwrap();
        assert!(seeded.contains("premierzone_routing=debug"));
        assert!(seeded.contains("tower_http=debug"));

        seed_rust_log("trace");
        assert_eq!(env::var("RUST_LOG").unwrap(), seeded);

        env::remove_var("RUST_LOG");
    }
}
