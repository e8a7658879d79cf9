use copy_rename::config::ImportConfig;
use copy_rename::processor::Processor;
use std::io;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Fixed layout: ./fp and ./sp into ./data
    let processor = Processor::new(ImportConfig::default())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    processor.run(&mut out)?;

    Ok(())
}
