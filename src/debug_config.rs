use keyprobe::{
    framework::DotenvBootstrap,
    report::{debug_config, Sources},
    Options, ServerVars, SystemEnv,
};

fn run() -> keyprobe::Result<()> {
    let server = ServerVars::capture();
    let options = Options::try_from_env()?;
    keyprobe::init_logging(options.debug);
    tracing::debug!(root = %options.root.display(), key = %options.key, "checking application configuration");

    tracing::debug!(variables = server.len(), "captured server variables");

    let process = SystemEnv::new();
    let bootstrap = DotenvBootstrap::new(&options, process);
    let sources = Sources {
        process: &process,
        server: &server,
        bootstrap: &bootstrap,
    };

    let stdout = std::io::stdout();
    debug_config(&options, &sources, &mut stdout.lock())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
