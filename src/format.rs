use crate::constants::ENV_FIBONACCI_LOG;

pub fn setup_logger() {
    let env = tracing_subscriber::EnvFilter::from_env(ENV_FIBONACCI_LOG);

    tracing_subscriber::fmt()
        .with_timer(tracing_subscriber::fmt::time::Uptime::default())
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .with_writer(std::io::stderr)
        .with_env_filter(env)
        .init();
    tracing::trace!(start = humantime::format_rfc3339(std::time::SystemTime::now()).to_string());
}
