use clap::Subcommand;
use kinytimer_core::{Settings, Store};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Get a settings value
    Get {
        /// Settings key (e.g. "pomodoro_time", "enable_sounds")
        key: String,
    },
    /// Set a settings value
    Set {
        /// Settings key
        key: String,
        /// New value
        value: String,
    },
    /// List all settings
    List,
    /// Reset settings to defaults
    Reset,
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;

    match action {
        SettingsAction::Get { key } => {
            let settings = store.load_settings()?;
            match settings.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        SettingsAction::Set { key, value } => {
            let mut settings = store.load_settings()?;
            settings.set(&key, &value)?;
            store.save_settings(&settings)?;
            println!("ok");
        }
        SettingsAction::List => {
            let settings = store.load_settings()?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        SettingsAction::Reset => {
            store.save_settings(&Settings::default())?;
            println!("settings reset to defaults");
        }
    }
    Ok(())
}
