mod args;
mod commands;

use args::Opt;
use commands::Mode;
use structopt::StructOpt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str =
    "emoji_atlas=info,atlas_core=info,atlas_assets=info,atlas_metadata=info";
const VERBOSE_FILTER: &str =
    "emoji_atlas=debug,atlas_core=debug,atlas_assets=debug,atlas_metadata=debug";

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(opt.verbose).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = opt.config()?;
    commands::run(Mode::from(&opt.subcommand), &cfg)
}
