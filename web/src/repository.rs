use anyhow::Context;
use gloo::net::http::Request;
use trivia_core::Dataset;

pub(crate) const DEFAULT_DATASET_URL: &str = "questions.json";

async fn fetch_dataset(url: &str) -> anyhow::Result<Dataset> {
    let response = Request::get(url)
        .send()
        .await
        .with_context(|| format!("fetching {}", url))?;
    anyhow::ensure!(
        response.ok(),
        "fetching {}: HTTP {} {}",
        url,
        response.status(),
        response.status_text()
    );
    let body = response.text().await.context("reading question bank")?;
    Ok(Dataset::from_json(&body)?)
}

/// Loads the question bank once; any failure yields an empty dataset.
pub(crate) async fn load(url: &str) -> Dataset {
    log::debug!("loading questions from {}", url);
    let dataset = Dataset::or_empty(fetch_dataset(url).await);
    for (tile, authored) in dataset.points_mismatches() {
        log::warn!(
            "question {} is authored as {} points but shown as {}",
            tile,
            authored,
            tile.points()
        );
    }
    dataset
}
