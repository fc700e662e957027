use scenegen_common::scene::MeteorologyModel;
use scenegen_core::loader::{self, LoadError};

use crate::util::{SAMPLE_DOMAINS, fixture_domains};

/// The domain file shipped with the repository must always load.
#[test]
fn sample_domain_file_is_valid() {
    let domains = loader::load_domains(SAMPLE_DOMAINS).expect("domains.yaml failed to load");

    assert!(domains.contains("salt_lake_city"));
    for (name, domain) in domains.iter() {
        assert!(!name.is_empty());
        let grid = &domain.scene.pixel_grid;
        assert!(grid.xmin() >= -180.0 && grid.xmax() < 180.0);
        assert!(grid.ymin() > -90.0 && grid.ymax() < 90.0);
        assert!(grid.to_points().is_ok(), "{name} grid does not expand");
    }
}

#[test]
fn salt_lake_city_is_retrievable_by_name() {
    let domains = loader::load_domains(SAMPLE_DOMAINS).unwrap();
    let slc = domains.get("salt_lake_city").unwrap();

    assert!(slc.is_enabled);
    assert_eq!(slc.scene.meteorology_model, MeteorologyModel::Hrrr);
    assert_eq!(slc.scene.simulation_config.timeout(), 3600);
    assert_eq!(slc.scene.simulation_config.parameters().numpar, Some(200));
    assert_eq!(slc.scene.pixel_grid.point_count().unwrap(), 21 * 21);
}

#[test]
fn fixture_keeps_declaration_order() {
    let domains = fixture_domains();

    let names: Vec<&str> = domains.names().collect();
    assert_eq!(names, ["salt_lake_city", "uinta_basin", "provo"]);

    let enabled: Vec<&str> = domains.enabled().map(|(name, _)| name).collect();
    assert_eq!(enabled, ["salt_lake_city", "provo"]);
}

#[test]
fn one_invalid_domain_rejects_the_file() {
    let text = std::fs::read_to_string(crate::util::FIXTURE_DOMAINS)
        .unwrap()
        .replace("xmin: -110.0", "xmin: -181.0");

    match loader::parse_domains(&text) {
        Err(LoadError::Invalid { name, source }) => {
            assert_eq!(name, "uinta_basin");
            assert!(source.has_field("pixel_grid.xmin"));
        }
        other => panic!("expected uinta_basin to fail validation, got {other:?}"),
    }
}
