use env_logger::Env;

/// Process-wide setup. Call once, before any interaction.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}
