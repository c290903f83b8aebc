use std::path::PathBuf;

use clap::Parser;

use rctl::app::App;
use rctl::command::CommandTable;
use rctl::config::Config;
use rctl::error::AppResult;
use rctl::logging::init_logging;
use rctl::panel::Variant;

#[derive(Debug, Parser)]
#[command(name = "rctl", version, about = "Terminal remote for media, volume and window focus")]
struct Args {
    /// Which button panel to show.
    #[arg(long, value_enum, default_value_t)]
    variant: Variant,

    /// Append diagnostics to this file instead of the default state path.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,

    /// Print the panel's action table and exit.
    #[arg(long)]
    list: bool,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let code = match run(Args::parse()).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    };
    // A tool that never exits would otherwise keep the blocking pool alive.
    std::process::exit(code);
}

async fn run(args: Args) -> AppResult<()> {
    if args.list {
        print!("{}", render_action_table(args.variant));
        return Ok(());
    }

    let config = Config::resolve(args.variant, args.log_file, args.verbose);
    init_logging(&config)?;

    let mut app = App::new(config);
    app.run().await
}

fn render_action_table(variant: Variant) -> String {
    let table = CommandTable::for_variant(variant);
    let width = table
        .iter()
        .map(|(action, _)| action.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (action, spec) in table.iter() {
        out.push_str(&format!("{:<width$}  {spec}\n", action.as_str()));
    }
    out
}
