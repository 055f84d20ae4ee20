use keyprobe::{report::debug_env, Options};

fn run() -> keyprobe::Result<()> {
    let options = Options::try_from_env()?;
    keyprobe::init_logging(options.debug);
    tracing::debug!(path = %options.env_file.display(), key = %options.key, "checking environment file");

    let stdout = std::io::stdout();
    debug_env(&options, &mut stdout.lock())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
