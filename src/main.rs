use clap::Parser;
use prismik::PrintFormat;
use prismik::core::catalog::Catalog;
use prismik::core::config::{self, CliOverrides, ConfigSource};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "prismik", about = "Find the right chart type for your data")]
struct Args {
    /// Open this category's detail view on launch (e.g. "Distribution")
    #[arg(short, long)]
    category: Option<String>,

    /// Freeze the preview animations
    #[arg(long)]
    no_animation: bool,

    /// Print the catalog and exit instead of starting the interface
    #[arg(short, long, value_enum, num_args = 0..=1, default_missing_value = "text")]
    print: Option<PrintFormat>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_source) = config::load_config()?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            start_category: args.category.as_deref(),
            no_animation: args.no_animation,
        },
    );

    // Initialize file logger - stdout belongs to the terminal UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    // Config loading ran before the logger existed; report its outcome now
    match &config_source {
        ConfigSource::File(_) | ConfigSource::Generated(_) => log::info!("{}", config_source),
        ConfigSource::NoHomeDir | ConfigSource::GenerateFailed(..) => {
            log::warn!("{}", config_source)
        }
    }
    log::debug!("Config: {:?}", file_config);
    if let Some(level) = &resolved.rejected_log_level {
        log::warn!("Ignoring unknown log level '{}', using {}", level, resolved.log_level);
    }

    let catalog = Catalog::builtin();
    catalog.validate()?;

    if let Some(format) = args.print {
        print!("{}", prismik::render_catalog(catalog, format)?);
        return Ok(());
    }

    log::info!("Prismik starting up (animations: {})", resolved.animations);
    prismik::tui::run(resolved)?;
    Ok(())
}
