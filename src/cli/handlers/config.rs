use conversors::form::Action;
use conversors::{Feature, LANGUAGES, SQL_DIALECTS, Settings};

use crate::cli::{
    args::{ConfigAction, ConfigCategory},
    global::GlobalArgs,
};

pub fn handle(
    action: ConfigAction,
    _global: &GlobalArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List { category, json } => handle_list(category, json),
        ConfigAction::Show => handle_show(settings),
    }
}

fn handle_list(
    category: Option<ConfigCategory>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let features: Vec<&str> = Feature::ALL.iter().map(|f| f.as_str()).collect();

    if json {
        let output = match category {
            Some(ConfigCategory::Features) => serde_json::json!({ "features": features }),
            Some(ConfigCategory::Dialects) => serde_json::json!({ "dialects": SQL_DIALECTS }),
            Some(ConfigCategory::Languages) => serde_json::json!({ "languages": LANGUAGES }),
            None => serde_json::json!({
                "features": features,
                "dialects": SQL_DIALECTS,
                "languages": LANGUAGES,
            }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match category {
        Some(ConfigCategory::Features) => println!("{}", features.join(",")),
        Some(ConfigCategory::Dialects) => println!("{}", SQL_DIALECTS.join(",")),
        Some(ConfigCategory::Languages) => println!("{}", LANGUAGES.join(",")),
        None => {
            println!("Features:");
            for feature in Feature::ALL {
                let spec = feature.spec();
                let target = match spec.action() {
                    Action::Local { .. } => "local".to_string(),
                    Action::Remote { path } => format!("POST {}", path),
                };
                println!("  {:<12} {:<30} {}", feature.as_str(), spec.display_title(), target);
            }
            println!("SQL dialects: {}", SQL_DIALECTS.join(", "));
            println!("Languages: {}", LANGUAGES.join(", "));
            println!("\nUse 'config list features|dialects|languages' for machine-readable output");
            println!("Use --json for structured output");
        }
    }

    Ok(())
}

fn handle_show(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let api_key = if settings.api.api_key.is_empty() {
        "(not set)"
    } else {
        "(set)"
    };

    println!("api.base_url     = {}", settings.api.base_url);
    println!("api.api_key      = {}", api_key);
    println!("api.timeout_secs = {}", settings.api.timeout_secs);
    println!("pdf.output       = {}", settings.pdf.output_path().display());

    Ok(())
}
