use clap::Parser;
use clickstudio::LayoutMode;
use clickstudio::core::config::{self, CliOverrides, StudioConfig};
use clickstudio::core::state::App;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "clickstudio", about = "Click Studio landing page, in your terminal")]
struct Args {
    /// Initial layout of the services stack
    #[arg(short, long, value_enum)]
    layout: Option<LayoutMode>,

    /// Skip the click-reveal intro
    #[arg(long)]
    skip_intro: bool,

    /// Print the initial render model as JSON and exit
    #[arg(long)]
    dump_render_model: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to clickstudio.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("clickstudio.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, falling back to defaults", e);
        StudioConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            layout: args.layout,
            skip_intro: args.skip_intro,
        },
    );

    log::info!(
        "Click Studio starting up (layout={}, services={})",
        resolved.default_layout,
        resolved.catalog.len()
    );

    if args.dump_render_model {
        let app = App::from_config(&resolved);
        let json = serde_json::to_string_pretty(&app.navigator.render_model())
            .map_err(std::io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    clickstudio::tui::run(resolved)
}
