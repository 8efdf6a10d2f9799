use fibonacci::format::setup_logger;

mod cli;

fn main() {
    setup_logger();

    let args = cli::cli().get_matches();
    let result = cli::main(&args, &mut std::io::stdout().lock());

    if let Err(e) = result {
        tracing::debug!("exiting with error: {:#}", e);
        eprintln!("error: {:?}", e);
        std::process::exit(1);
    }
}
