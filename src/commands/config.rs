use anyhow::Result;

use py_compliance_auditor::config::load_config;

pub fn handle_config(show: bool, validate: bool) -> Result<()> {
    if show {
        match load_config() {
            Ok(config) => {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            Err(e) => {
                eprintln!("Error loading configuration: {}", e);
                std::process::exit(1);
            }
        }
    }

    if validate {
        match load_config() {
            Ok(_) => println!("Configuration is valid"),
            Err(e) => {
                eprintln!("Configuration validation failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    if !show && !validate {
        eprintln!("Use --show or --validate");
        std::process::exit(1);
    }

    Ok(())
}
