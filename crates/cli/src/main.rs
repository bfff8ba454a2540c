use anyhow::Context;
use clap::Parser;
use diet_insights_core::fetch::{HttpInsightsFetcher, InsightsSource};
use diet_insights_core::transform;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod output;

#[derive(Debug, Parser)]
#[command(name = "diet_insights")]
struct Args {
    /// Analysis endpoint to query. Overrides DIET_INSIGHTS_ENDPOINT_URL.
    #[arg(long)]
    endpoint_url: Option<String>,

    /// Only keep records of this diet type. Repeat to keep several.
    #[arg(long = "diet")]
    diets: Vec<String>,

    /// Print the fetched dataset envelope instead of chart series.
    #[arg(long, conflicts_with = "ratios")]
    envelope: bool,

    /// Print protein:carbs and carbs:fat ratios per record instead of chart series.
    #[arg(long)]
    ratios: bool,
}

impl Args {
    fn view(&self) -> output::View {
        if self.envelope {
            output::View::Envelope
        } else if self.ratios {
            output::View::Ratios
        } else {
            output::View::Chart
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut settings = diet_insights_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();
    if let Some(url) = &args.endpoint_url {
        settings.endpoint_url = url.clone();
    }

    let fetcher = HttpInsightsFetcher::new(settings.fetcher_config())?;

    let envelope = match fetcher.fetch_insights().await {
        Ok(envelope) => envelope,
        Err(err) => {
            let err = anyhow::Error::new(err)
                .context(format!("fetching insights from {}", fetcher.endpoint_url()));
            sentry_anyhow::capture_anyhow(&err);
            let chain = format!("{err:#}");
            tracing::error!(error = %chain, "insights fetch failed");
            return Err(err);
        }
    };

    let records = transform::filter_by_diet(&envelope.records, args.diets.as_slice());
    tracing::info!(
        fetched_at = %envelope.fetched_at,
        total = envelope.records.len(),
        kept = records.len(),
        "insights ready"
    );
    if let Some(diet) = transform::highest_protein_diet(&records) {
        tracing::info!(%diet, "highest average protein diet");
    }

    let rendered =
        output::render(args.view(), &envelope, &records).context("failed to render output")?;

    println!("{rendered}");
    Ok(())
}

fn init_sentry(
    settings: &diet_insights_core::config::Settings,
) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
