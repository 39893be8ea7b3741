use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tiredit::api::TireditApi;
use tiredit::commands::config::ConfigAction;
use tiredit::config::TireditConfig;
use tiredit::error::{Result, TireditError};

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_candidates, print_messages, print_series};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api()?;

    match cli.command {
        Commands::Params { file } => handle_params(&mut api, file),
        Commands::Show { file, param } => handle_show(&mut api, file, param),
        Commands::Set {
            file,
            param,
            rings,
            output,
        } => handle_set(&mut api, file, param, rings, output),
        Commands::Rewrite { file, output } => handle_rewrite(&mut api, file, output),
        Commands::Config { key, value } => handle_config(&mut api, key, value),
    }
}

fn init_api() -> Result<TireditApi> {
    let proj_dirs = ProjectDirs::from("org", "tiredit", "tiredit")
        .ok_or_else(|| TireditError::Api("Could not determine config dir".to_string()))?;
    let config_dir = proj_dirs.config_dir().to_path_buf();
    let config = TireditConfig::load(&config_dir).unwrap_or_default();
    Ok(TireditApi::new(config, config_dir))
}

fn handle_params(api: &mut TireditApi, file: PathBuf) -> Result<()> {
    let result = api.load(&file)?;
    print_messages(&result.messages);
    print_candidates(&result.candidates);
    Ok(())
}

fn handle_show(api: &mut TireditApi, file: PathBuf, param: String) -> Result<()> {
    let loaded = api.load(&file)?;
    print_messages(&loaded.messages);

    let result = api.show(&param)?;
    print_messages(&result.messages);
    if let Some(series) = &result.series {
        print_series(series);
    }
    Ok(())
}

fn handle_set(
    api: &mut TireditApi,
    file: PathBuf,
    param: String,
    rings: Vec<String>,
    output: PathBuf,
) -> Result<()> {
    let edits = parse_ring_edits(&rings)?;

    let loaded = api.load(&file)?;
    print_messages(&loaded.messages);

    let result = api.edit(&param, &edits)?;
    print_messages(&result.messages);

    let result = api.write(&output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rewrite(api: &mut TireditApi, file: PathBuf, output: PathBuf) -> Result<()> {
    let loaded = api.load(&file)?;
    print_messages(&loaded.messages);

    let result = api.rewrite(&output)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    api: &mut TireditApi,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("legacy-spacing"), None) => ConfigAction::ShowAll,
        (Some("legacy-spacing"), Some(v)) => {
            let parsed = v.parse::<bool>().map_err(|_| {
                TireditError::Api(format!("legacy-spacing takes true or false, got {}", v))
            })?;
            ConfigAction::SetLegacySpacing(parsed)
        }
        (Some("add-param"), Some(v)) => ConfigAction::AddParam(v),
        (Some("remove-param"), Some(v)) => ConfigAction::RemoveParam(v),
        (Some(key @ ("add-param" | "remove-param")), None) => {
            return Err(TireditError::Api(format!("{} requires a parameter name", key)));
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        println!("legacy-spacing = {}", config.legacy_spacing);
        println!("extra-params   = {}", config.extra_params.join(" "));
    }
    print_messages(&result.messages);
    Ok(())
}

/// Parses "RING=VALUE" arguments, e.g. "3=120.5".
fn parse_ring_edits(rings: &[String]) -> Result<Vec<(usize, f64)>> {
    rings
        .iter()
        .map(|raw| {
            let (ring, value) = raw
                .split_once('=')
                .ok_or_else(|| TireditError::Api(format!("Expected RING=VALUE, got {}", raw)))?;
            let ring = ring
                .trim()
                .parse::<usize>()
                .map_err(|_| TireditError::Api(format!("Invalid ring number in {}", raw)))?;
            let value = value
                .trim()
                .parse::<f64>()
                .map_err(|_| TireditError::Api(format!("Invalid value in {}", raw)))?;
            Ok((ring, value))
        })
        .collect()
}
