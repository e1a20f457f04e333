use clap::Parser;
use figsaver_cli::{Cli, run};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    run(Cli::parse())
}
