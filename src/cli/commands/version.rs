//! Version command implementation

use anyhow::Result;

use crate::cli::Output;

/// Execute the version command
pub async fn execute(output: &Output) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");
    let description = env!("CARGO_PKG_DESCRIPTION");

    output.status_indicator("VERSION", &format!("{} v{}", name, version), true);
    output.blank_line();

    output.category("About");
    output.key_value("Description:", description, false);

    output.category("Build Information");
    output.key_value("Rust edition:", "2024", false);
    output.key_value("Target:", std::env::consts::ARCH, false);
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
        false,
    );

    output.blank_line();
    Ok(())
}
