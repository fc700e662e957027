use scenegen_core::loader::{self, Domains};

pub const FIXTURE_DOMAINS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/domains.yaml");
pub const SAMPLE_DOMAINS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../domains.yaml");

pub fn fixture_domains() -> Domains {
    loader::load_domains(FIXTURE_DOMAINS).expect("fixture domain file should load")
}

/// Partial-JSON matcher selecting the request of one domain by its simulation id.
pub fn for_domain(name: &str) -> mockito::Matcher {
    mockito::Matcher::PartialJson(serde_json::json!({
        "simulation_config": { "simulation_id": name }
    }))
}
