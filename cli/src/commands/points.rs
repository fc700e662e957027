use std::path::Path;

use anyhow::Context;
use scenegen_core::loader;

pub fn points(domains_path: &Path, name: &str, count_only: bool) -> anyhow::Result<()> {
    let domains = loader::load_domains(domains_path)
        .with_context(|| format!("could not load domains from {}", domains_path.display()))?;

    let Some(domain) = domains.get(name) else {
        let known: Vec<&str> = domains.names().collect();
        anyhow::bail!("unknown domain `{name}` (known: {})", known.join(", "));
    };

    let grid = &domain.scene.pixel_grid;
    if count_only {
        println!("{}", grid.point_count()?);
        return Ok(());
    }

    let points = grid.to_points()?;
    println!("{}", serde_json::to_string_pretty(&points)?);
    Ok(())
}
