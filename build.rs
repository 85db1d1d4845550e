use chrono::{DateTime, Utc};

fn main() {
    // Prefer SOURCE_DATE_EPOCH so reproducible builds stamp the same time
    let build_time = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now)
        .to_rfc3339();

    // Read back with env!("BUILD_TIME") for the footer copyright year
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
}
