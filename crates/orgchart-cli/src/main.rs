//! orgchart CLI - Turn an indented staff list into an org chart

mod cli;

use clap::Parser;
use orgchart::core::logging::init_logging;

fn main() {
    let cli_args = cli::Cli::parse();

    // flags win over ORGCHART_LOG_LEVEL / ORGCHART_LOG_FORMAT, which win over the warn default
    if let Err(e) = init_logging(
        cli_args.log_level.map(|l| l.as_str()),
        cli_args.log_format.map(|f| f.as_str()),
    ) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let mut app = cli::OrgChartApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
