use std::path::Path;

use anyhow::Context;
use colored::*;
use scenegen_common::scene::{DomainConfig, PARAMETER_NAMES};
use scenegen_core::loader;
use tracing::error;

use crate::terminal::print;

pub fn validate(domains_path: &Path) -> anyhow::Result<()> {
    let domains = loader::load_domains(domains_path)
        .with_context(|| format!("could not load domains from {}", domains_path.display()))?;

    let mut broken: Vec<&str> = Vec::new();
    for (idx, (name, domain)) in domains.iter().enumerate() {
        print::tree_head(idx, name);
        print::as_tree_one_level(&domain_details(domain));

        if let Err(e) = domain.scene.pixel_grid.to_points() {
            error!(domain = name, error = %e, "pixel grid cannot be expanded");
            broken.push(name);
        }
    }

    print::fat_separator();
    if !broken.is_empty() {
        anyhow::bail!("{} of {} domains cannot be expanded: {}", broken.len(), domains.len(), broken.join(", "));
    }

    let enabled: usize = domains.enabled().count();
    print::print(&format!(
        "{} domains valid, {} enabled",
        domains.len().to_string().bold().green(),
        enabled.to_string().bold().green()
    ));
    Ok(())
}

fn domain_details(domain: &DomainConfig) -> Vec<(&'static str, ColoredString)> {
    let grid = &domain.scene.pixel_grid;
    let simulation = &domain.scene.simulation_config;

    let enabled: ColoredString = match domain.is_enabled {
        true => "yes".green(),
        false => "no".yellow(),
    };
    let points: ColoredString = match grid.point_count() {
        Ok(count) => count.to_string().normal(),
        Err(e) => e.to_string().red(),
    };
    let set_names = simulation.parameters().set_names();
    let params = match set_names.is_empty() {
        true => format!("0/{}", PARAMETER_NAMES.len()),
        false => format!("{}/{} ({})", set_names.len(), PARAMETER_NAMES.len(), set_names.join(", ")),
    };
    let extent = format!(
        "x {}..{} by {}, y {}..{} by {}",
        grid.xmin(),
        grid.xmax(),
        grid.xres(),
        grid.ymin(),
        grid.ymax(),
        grid.yres()
    );

    vec![
        ("Enabled", enabled),
        ("Model", domain.scene.meteorology_model.as_str().normal()),
        ("Grid", extent.normal()),
        ("Points", points),
        ("Hours", simulation.n_hours().to_string().normal()),
        ("Params", params.normal()),
    ]
}
