extern crate nearest_neighbor_rec;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nearest_neighbor_rec::{Dataset, Metric, NeighborRecommender};

#[derive(Parser)]
#[command(name = "recommend")]
#[command(about = "Recommend items to a user from the ratings of their nearest neighbor")]
struct Cli {
    /// JSON file mapping each user to an object of item ratings
    #[arg(short, long)]
    dataset: PathBuf,

    /// User to recommend items for (case-insensitive)
    #[arg(short, long)]
    user: String,

    /// Manhattan, Euclidean or Pearson
    #[arg(short, long, default_value = "Pearson")]
    metric: String,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let metric: Metric = cli.metric.parse()?;
    let dataset = load_dataset(&cli.dataset)?;

    let recommender = NeighborRecommender::with_metric(&cli.user, dataset, metric)?;

    let nearest = recommender.compute_nearest_neighbor()?;
    println!("nearest neighbor: {} ({} {})", nearest.user, metric, nearest.score);

    for (item, score) in recommender.recommend()? {
        println!("{}\t{}", item, score);
    }

    Ok(())
}

fn load_dataset(path: &Path) -> Result<Dataset> {
    let file = File::open(path)
        .with_context(|| format!("failed to open dataset {}", path.display()))?;

    let dataset: Dataset = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse dataset {}", path.display()))?;

    for (user, ratings) in &dataset {
        for (item, score) in ratings {
            if !score.is_finite() {
                bail!("rating of {} for {} is not a finite number", user, item);
            }
        }
    }

    Ok(dataset)
}
