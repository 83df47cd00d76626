use std::path::PathBuf;

use crate::config;
use crate::error::Result;
use crate::logger::RideLogger;
use crate::models::OptionKind;

/// Print the known riders or bikes
pub fn run(config_path: Option<PathBuf>, kind: OptionKind) -> Result<()> {
    let config = config::load_or_default(config_path)?;
    let logger = RideLogger::new(&config);

    print!("{}", render(kind, logger.list_options(kind)));
    Ok(())
}

/// Numbered listing, one value per line
fn render(kind: OptionKind, values: &[String]) -> String {
    let mut output = format!("\nAvailable {}:\n", kind.plural());
    for (i, value) in values.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, value));
    }
    output
}
