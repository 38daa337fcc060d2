mod common;
use common::{get_connector, today};
use pullsar::{ComparisonSet, Level, ListQuery, Pullsar, Scope, breadcrumbs, format_trend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pullsar = Pullsar::builder().with_connector(get_connector()).build()?;
    let today = today();

    // 1. Homepage counters and the overall chart.
    let q = ListQuery::defaults(today);
    let overview = pullsar.overview(&q.to_overall()).await?;
    println!(
        "{} catalogs, {} packages, {} bundles, {} pulls all time",
        overview.summary.total_catalogs,
        overview.summary.total_packages,
        overview.summary.total_bundles,
        overview.summary.total_pulls,
    );
    for row in pullsar.overall_chart(&q.to_overall()).await? {
        println!("  {} {:?}", row.date, row.get(pullsar::OVERALL_SERIES));
    }

    // 2. Catalog listing.
    let catalogs = pullsar.list_page(&q).await?;
    for item in &catalogs.items {
        println!(
            "{:<60} {:>10} {:>8}%",
            item.name,
            item.stats.total_pulls,
            format_trend(item.stats.trend)
        );
    }

    // 3. Drill into the first catalog and page through its packages.
    let Some(first) = catalogs.items.first() else {
        return Ok(());
    };
    let scope = Scope::Packages {
        catalog: first.name.clone(),
    };
    let trail: Vec<String> = breadcrumbs(&scope).into_iter().map(|b| b.label).collect();
    println!("\n{}", trail.join(" > "));
    let packages = pullsar.list_page(&q.with_scope(scope)).await?;
    let pager: Vec<String> = packages
        .pager
        .entries()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("pages: {}", pager.join(" "));

    // 4. Compare the top three packages.
    let mut set = ComparisonSet::new();
    for item in packages.items.iter().take(3) {
        set.toggle(item.clone());
    }
    let chart = pullsar.compare(&set, Level::Package);
    for s in &chart.series {
        println!("{} ({})", s.label, s.color);
    }
    println!("{} chart rows", chart.rows.len());
    Ok(())
}
