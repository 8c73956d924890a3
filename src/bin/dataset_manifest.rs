use anyhow::{Context, Result};
use chrono::Utc;
use std::env;

use telecomdash::data::{generate_with, manifest, manifest_output_path, write_manifest};
use telecomdash::state::Config;

fn main() -> Result<()> {
    let cfg = Config::from_env();
    let out_path = manifest_output_path(env::args().nth(1), cfg.seed);

    let today = Utc::now().date_naive();
    let table = generate_with(cfg.project_count, cfg.seed, today);
    let m = manifest(&table, cfg.seed, today)?;
    write_manifest(&out_path, &m).with_context(|| format!("manifest for seed {}", cfg.seed))?;

    println!(
        "wrote manifest {} ({} rows, sha256 {})",
        out_path.display(),
        m.row_count,
        m.hash_sha256
    );
    Ok(())
}
