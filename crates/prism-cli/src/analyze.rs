//! The `analyze` subcommand: batch enrichment of a product export.
//!
//! Extraction and rubric evaluation are pure CPU work and run per row;
//! image scoring performs network I/O and fans out over a bounded
//! concurrent stream. Rows are independent — results are re-keyed by row
//! index so arrival order never reorders the output.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use futures::stream::{self, StreamExt};
use serde::Deserialize;

use prism_core::{AppConfig, ListingQuality, ProductRecord};
use prism_extract::ItemExtractor;
use prism_listing::ListingQualityScorer;
use prism_score::{evaluate, ScoreInputs};

#[derive(Debug, Args)]
pub(crate) struct AnalyzeArgs {
    /// JSON-lines product export to read.
    #[arg(long)]
    input: PathBuf,

    /// Destination for enriched JSON-lines records.
    #[arg(long)]
    output: PathBuf,

    /// Skip image fetching entirely; every row gets the Error tier.
    #[arg(long)]
    no_images: bool,
}

/// One raw row of the product export.
///
/// Unknown columns are ignored and absent columns deserialize to `None`,
/// so partial exports flow through without schema validation. Numeric
/// parsing of display text (e.g. `"3K+"` sales) happens upstream.
#[derive(Debug, Clone, Deserialize)]
struct RawRow {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    review_count: Option<u32>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    monthly_sales: Option<f64>,
}

pub(crate) async fn run_analyze(config: &AppConfig, args: &AnalyzeArgs) -> anyhow::Result<()> {
    let file = File::open(&args.input)
        .with_context(|| format!("failed to open input {}", args.input.display()))?;
    let rows = parse_rows(BufReader::new(file));
    tracing::info!(rows = rows.len(), input = %args.input.display(), "loaded product export");

    let records = analyze_rows(config, rows, args.no_images).await?;
    write_records(&args.output, &records)?;

    let identified = records.iter().filter(|r| r.is_identified()).count();
    let degraded = records
        .iter()
        .filter(|r| r.listing_quality.is_error())
        .count();
    println!(
        "analyzed {} rows: {identified} items identified, {degraded} listings degraded to Error",
        records.len()
    );
    Ok(())
}

/// Parses JSON-lines rows, skipping blank lines and logging malformed ones.
///
/// A malformed row never aborts the batch.
fn parse_rows<R: BufRead>(reader: R) -> Vec<RawRow> {
    let mut rows = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(line = line_no + 1, error = %e, "unreadable line skipped");
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<RawRow>(&line) {
            Ok(row) => rows.push(row),
            Err(e) => {
                tracing::warn!(line = line_no + 1, error = %e, "malformed row skipped");
            }
        }
    }
    rows
}

/// Runs the three derivation stages over the batch.
async fn analyze_rows(
    config: &AppConfig,
    rows: Vec<RawRow>,
    no_images: bool,
) -> anyhow::Result<Vec<ProductRecord>> {
    let extractor = ItemExtractor::new();

    let tiers: Vec<ListingQuality> = if no_images {
        vec![ListingQuality::Error; rows.len()]
    } else {
        let scorer = ListingQualityScorer::new(config)?;
        score_images(&scorer, &rows, config.image_concurrency).await
    };

    Ok(rows
        .into_iter()
        .zip(tiers)
        .map(|(row, tier)| build_record(&extractor, row, tier))
        .collect())
}

/// Scores every row's image over a bounded concurrent stream, returning
/// tiers in row order.
async fn score_images(
    scorer: &ListingQualityScorer,
    rows: &[RawRow],
    concurrency: usize,
) -> Vec<ListingQuality> {
    let mut indexed: Vec<(usize, ListingQuality)> =
        stream::iter(rows.iter().enumerate().map(|(idx, row)| {
            let url = row.image_url.clone();
            async move { (idx, scorer.score(url.as_deref()).await) }
        }))
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;
    indexed.sort_by_key(|(idx, _)| *idx);
    indexed.into_iter().map(|(_, tier)| tier).collect()
}

/// Derives the three output signals and assembles the enriched record.
fn build_record(extractor: &ItemExtractor, row: RawRow, tier: ListingQuality) -> ProductRecord {
    let title = row.title.unwrap_or_default();
    let identified_item = extractor.identify(&title);
    let prism = evaluate(&ScoreInputs {
        price: row.price,
        review_count: row.review_count,
        rating: row.rating,
        listing_quality: Some(tier),
        monthly_sales: row.monthly_sales,
    });

    ProductRecord {
        title,
        image_url: row.image_url,
        price: row.price,
        review_count: row.review_count,
        rating: row.rating,
        monthly_sales: row.monthly_sales,
        identified_item,
        listing_quality: tier,
        prism_score: prism.score,
        potential: prism.potential,
        missing_data: prism.missing_data,
    }
}

fn write_records(path: &Path, records: &[ProductRecord]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for record in records {
        let json = serde_json::to_string(record).context("failed to serialize record")?;
        writeln!(writer, "{json}")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use prism_core::NOT_FOUND;

    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            log_level: "info".to_owned(),
            http_timeout_secs: 5,
            connect_timeout_secs: 5,
            user_agent: "prism-test/0.1".to_owned(),
            max_retries: 0,
            retry_backoff_base_secs: 0,
            image_concurrency: 2,
        }
    }

    #[test]
    fn parse_rows_reads_well_formed_lines() {
        let input = concat!(
            "{\"title\":\"Nike Men's Running Shoes\",\"price\":249.0}\n",
            "{\"title\":\"Acme Water Bottle 500ML Steel\"}\n",
        );
        let rows = parse_rows(Cursor::new(input));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title.as_deref(), Some("Nike Men's Running Shoes"));
        assert_eq!(rows[0].price, Some(249.0));
        assert!(rows[1].price.is_none());
    }

    #[test]
    fn parse_rows_skips_malformed_and_blank_lines() {
        let input = concat!(
            "{\"title\":\"Good Row\"}\n",
            "\n",
            "this is not json\n",
            "{\"title\":\"Another Good Row\"}\n",
        );
        let rows = parse_rows(Cursor::new(input));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn parse_rows_ignores_unknown_columns() {
        let input = "{\"title\":\"Row\",\"dashboard_note\":\"saved\"}\n";
        let rows = parse_rows(Cursor::new(input));
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn build_record_attaches_all_three_signals() {
        let extractor = ItemExtractor::new();
        let row = RawRow {
            title: Some("Boldfit Yoga Mat for Men Women Home Workout 6mm Thickness".to_owned()),
            image_url: Some("https://img.example.com/mat.jpg".to_owned()),
            price: Some(250.0),
            review_count: Some(150),
            rating: Some(4.5),
            monthly_sales: Some(600.0),
        };
        let record = build_record(&extractor, row, ListingQuality::Poor);
        assert!(record.identified_item.contains("Yoga Mat"));
        assert_eq!(record.listing_quality, ListingQuality::Poor);
        assert_eq!(record.prism_score, 100);
        assert!(!record.missing_data);
    }

    #[test]
    fn build_record_without_title_uses_sentinel() {
        let extractor = ItemExtractor::new();
        let row = RawRow {
            title: None,
            image_url: None,
            price: None,
            review_count: None,
            rating: None,
            monthly_sales: None,
        };
        let record = build_record(&extractor, row, ListingQuality::Error);
        assert_eq!(record.identified_item, NOT_FOUND);
        assert!(record.missing_data);
    }

    #[tokio::test]
    async fn analyze_rows_without_images_preserves_order_and_degrades_tier() {
        let rows = vec![
            RawRow {
                title: Some("First Product".to_owned()),
                image_url: Some("https://img.example.com/1.jpg".to_owned()),
                price: None,
                review_count: None,
                rating: None,
                monthly_sales: None,
            },
            RawRow {
                title: Some("Second Product".to_owned()),
                image_url: None,
                price: None,
                review_count: None,
                rating: None,
                monthly_sales: None,
            },
        ];
        let records = analyze_rows(&test_config(), rows, true)
            .await
            .expect("expected analyze to succeed");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "First Product");
        assert_eq!(records[1].title, "Second Product");
        assert!(records
            .iter()
            .all(|r| r.listing_quality == ListingQuality::Error));
    }
}
