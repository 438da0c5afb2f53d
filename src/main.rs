use anyhow::{Context, Result};
use jsondate::config::Config;
use jsondate::constants::USAGE;
use jsondate::logger;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("-h") | Some("--help") => {
            eprintln!("{}", USAGE);
            Ok(())
        }
        Some("--init-config") => {
            let path = match args.get(1) {
                Some(path) => std::path::PathBuf::from(path),
                None => Config::get_default_config_path()?,
            };
            Config::generate_default_config(path)
        }
        Some(value) => {
            let config = Config::load()?;
            logger::init(&config.logging)?;

            let converter = config.converter()?;
            let value = unescape_json_literal(value)?;
            let format = args.get(1).map(String::as_str);

            log::debug!(
                "Converting {:?} with pattern {:?} in timezone {}",
                value,
                format,
                converter.formatter().timezone()
            );
            println!("{}", converter.convert_opt(&value, format));
            Ok(())
        }
    }
}

/// Accept values pasted straight out of a JSON document, e.g. `"\/Date(0)\/"`.
fn unescape_json_literal(value: &str) -> Result<String> {
    if value.starts_with('"') {
        serde_json::from_str::<String>(value).with_context(|| format!("Invalid JSON string literal: {}", value))
    } else {
        Ok(value.to_string())
    }
}
