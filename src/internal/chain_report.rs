#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_precision_loss)]

//! Inserts random keys into tables under both growth policies and plots how chain
//! lengths and lookup hit rates evolve with the number of keys.

use chainmap::{GrowthPolicy, HashTable, TableConfig, logger::initialize_logger};
use log::info;
use plotters::prelude::*;
use rand::Rng;

const LOAD_FACTOR: f64 = 0.75;
const INITIAL_CAPACITY: usize = 16;
const KEY_COUNTS: [usize; 8] = [100, 250, 500, 1_000, 2_500, 5_000, 10_000, 25_000];

const POLICIES: [(&str, GrowthPolicy); 2] =
    [("Rehash", GrowthPolicy::Rehash), ("Extend only", GrowthPolicy::ExtendOnly)];

/// Measurements for one table after all keys were inserted
struct Sample {
    capacity: usize,
    longest_chain: usize,
    entries: usize,
    hit_rate: f64,
}

fn measure(keys: &[String], policy: GrowthPolicy) -> Result<Sample, chainmap::TableError> {
    let config = TableConfig::new(LOAD_FACTOR, INITIAL_CAPACITY).with_growth_policy(policy);
    let mut table = HashTable::with_config(config)?;

    for (i, key) in keys.iter().enumerate() {
        table.set(key.as_str(), i);
    }

    let hits = keys.iter().filter(|key| table.has(key)).count();

    Ok(Sample {
        capacity: table.capacity(),
        longest_chain: table.longest_chain(),
        entries: table.len(),
        hit_rate: hits as f64 / keys.len().max(1) as f64,
    })
}

fn draw_chart(
    path: &str,
    caption: &str,
    y_desc: &str,
    series: &[Vec<f64>],
) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let colors = [RGBColor(50, 90, 220), RGBColor(220, 50, 50)];

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = series
        .iter()
        .flat_map(|points| points.iter())
        .fold(0.0, |max: f64, &y| max.max(y)) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..(KEY_COUNTS.len() - 1), 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_labels(KEY_COUNTS.len())
        .x_label_formatter(&|x| KEY_COUNTS.get(*x).map_or_else(String::new, ToString::to_string))
        .x_desc("Number of Keys Inserted")
        .y_desc(y_desc)
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (policy_idx, ((name, _), points)) in POLICIES.iter().zip(series).enumerate() {
        let color = &colors[policy_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(points.iter().copied().enumerate(), line_style))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            points.iter().enumerate().map(|(i, &y)| Circle::new((i, y), 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    initialize_logger();

    let mut rng = rand::rng();
    let max_keys = KEY_COUNTS.iter().copied().max().unwrap_or(0);
    let keys: Vec<String> =
        (0..max_keys).map(|_| format!("key-{}", rng.random_range(0..u64::MAX))).collect();

    let mut longest_chain: Vec<Vec<f64>> = vec![Vec::new(); POLICIES.len()];
    let mut hit_rate: Vec<Vec<f64>> = vec![Vec::new(); POLICIES.len()];

    for &n_keys in &KEY_COUNTS {
        info!("Testing with {n_keys} keys");

        for (policy_idx, (name, policy)) in POLICIES.iter().enumerate() {
            let sample = measure(&keys[..n_keys], *policy)?;

            info!(
                "  {}: capacity = {}, entries = {}, longest chain = {}, hit rate = {:.3}",
                name, sample.capacity, sample.entries, sample.longest_chain, sample.hit_rate
            );

            longest_chain[policy_idx].push(sample.longest_chain as f64);
            hit_rate[policy_idx].push(sample.hit_rate);
        }
    }

    draw_chart("chain_length.png", "Longest Chain After Insertion", "Entries", &longest_chain)?;
    draw_chart("lookup_hit_rate.png", "Lookup Hit Rate After Insertion", "Hit rate", &hit_rate)?;

    info!("Generated plot images: chain_length.png, lookup_hit_rate.png");

    Ok(())
}
