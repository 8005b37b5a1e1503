mod cmds;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "shotgunsort")]
#[command(version)]
#[command(about = "Sorts a random array by shuffling it until it happens to come out sorted", long_about = None)]
struct Cli {
    #[command(flatten)]
    sort: cmds::sort::Opts,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    cmds::sort::run(&cli.sort)
}
