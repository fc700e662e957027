use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use scenegen_common::config::Config;
use scenegen_core::client::{DryRunSink, HttpSceneClient, SCENES_API_URL_ENV, SceneSink};
use scenegen_core::loader;
use scenegen_core::submit::SubmissionService;
use tracing::info;

use super::SubmitArgs;
use crate::terminal::print;

pub async fn submit(domains_path: &Path, args: SubmitArgs) -> anyhow::Result<()> {
    let sink: Box<dyn SceneSink> = match (args.dry_run, args.api_url) {
        (true, _) => Box::new(DryRunSink),
        (false, Some(url)) => {
            let client = HttpSceneClient::new(url);
            info!(url = client.url(), "submitting to scene service");
            Box::new(client)
        }
        (false, None) => anyhow::bail!("{SCENES_API_URL_ENV} is not set and --api-url was not given"),
    };

    let domains = loader::load_domains(domains_path)
        .with_context(|| format!("could not load domains from {}", domains_path.display()))?;

    let cfg = Config {
        assign_ids: args.assign_ids,
        timestamp: args.time,
    };

    let start_time: Instant = Instant::now();
    let report = SubmissionService::new(sink).submit_all(&domains, &cfg).await?;
    print::submission_summary(&report, start_time.elapsed());

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} scene submissions failed: {}",
            report.failed.len(),
            report.attempted(),
            report.failed.join(", ")
        );
    }
    Ok(())
}
