use colored::Colorize;

use crate::boot::{BootResult, ServeParams};

pub const BANNER: &str = r"
  _                 _ _
 | | __ _ _ __   __| (_)_ __   __ _
 | |/ _` | '_ \ / _` | | '_ \ / _` |
 | | (_| | | | | (_| | | | | | (_| |
 |_|\__,_|_| |_|\__,_|_|_| |_|\__, |
                              |___/
";

pub fn print_banner(boot_result: &BootResult, server_config: &ServeParams) {
    let ctx = &boot_result.app_context;
    println!("{BANNER}");
    let config = &ctx.config;

    println!("environment: {}", ctx.environment.to_string().green());
    if config.logger.enable {
        println!("     logger: {}", config.logger.level.to_string().green());
    } else {
        println!("     logger: {}", "disabled".bright_red());
    }

    println!();
    println!(
        "listening on {}:{}",
        server_config.binding.green(),
        server_config.port.to_string().green()
    );
}
