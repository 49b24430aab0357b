//! Basic resource naming.
//!
//! This example shows how to:
//! - Configure a naming engine with prefix segments
//! - Generate default, SSM parameter and S3 bucket names
//! - Add full or abbreviated regions to names
//!
//! Run with `RUST_LOG=cloud_naming=debug` to see the abbreviation and
//! advisory events.

use cloud_naming::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cloud_naming=warn")),
        )
        .compact()
        .init();

    println!("=== Basic Naming Example ===\n");

    let naming = Naming::new().with_prefix_segments(["prod", "shop"]);

    // 1. Names without region
    println!("Without region:");
    println!("  default        = {}", naming.default_name("orders")?);
    println!("  ssm parameter  = {}", naming.ssm_parameter("db-password")?);
    let bucket = naming.s3_bucket("assets")?;
    println!("  s3 bucket      = {}", bucket);
    if let Some(advisory) = bucket.advisory {
        println!("    note: {}", advisory);
    }
    println!();

    // 2. Full region names
    println!("Full region:");
    let orders = naming.with_region_default("orders", "eu-west-1")?;
    let assets = naming.with_region_s3_bucket("assets", "eu-west-1")?;
    println!("  default        = {}", orders);
    println!("  s3 bucket      = {}", assets);
    println!();

    // 3. Short region codes
    let naming = naming.with_short_region(true);
    println!("Short region:");
    let orders = naming.with_region_default("orders", "eu-west-1")?;
    println!("  default        = {}", orders);
    println!(
        "  ssm parameter  = {}",
        naming.with_region_ssm_parameter("db-password", "eu-west-1")?
    );
    println!();

    // 4. Unsupported regions fail instead of producing a partial name
    println!("Unsupported region:");
    match naming.with_region_default("orders", "mars-north-1") {
        Ok(name) => println!("  unexpected name {}", name),
        Err(e) => println!("  error: {}", e),
    }
    println!();

    // 5. Region table
    println!("Region table ({} regions):", SHORT_REGIONS.len());
    for (region, code) in regions().take(5) {
        println!("  {:<16} → {}", region, code);
    }
    println!("  ...");

    Ok(())
}
