//! Check command implementation.
//!
//! Validates configuration and runtime requirements.

use crate::config::{validate_effective_config, Config};
use crate::startup_checks::validate_requirements;

/// Validates configuration and system requirements.
pub fn command_check(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 lowmem-stat - System Check");
    println!("==============================");

    let mut all_ok = true;

    println!("\n⚙️  Checking configuration...");
    match validate_effective_config(config) {
        Ok(_) => println!("   ✅ Configuration is valid"),
        Err(e) => {
            println!("   ❌ Configuration invalid: {}", e);
            all_ok = false;
        }
    }

    println!("\n📁 Checking {}...", config.proc_root.display());
    match validate_requirements(config) {
        Ok(_) => println!("   ✅ Memory accounting and process entries readable"),
        Err(e) => {
            println!("   ❌ {}", e);
            all_ok = false;
        }
    }

    println!("\n📋 Summary:");
    if all_ok {
        println!("   ✅ All checks passed - system is ready");
        Ok(())
    } else {
        println!("   ❌ Some checks failed - please review warnings");
        std::process::exit(1);
    }
}
