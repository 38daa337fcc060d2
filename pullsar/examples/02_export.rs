mod common;
use common::{get_connector, today};
use pullsar::{ListQuery, Pullsar};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pullsar = Pullsar::builder().with_connector(get_connector()).build()?;
    let today = today();

    let filters = pullsar.filters().await?;
    println!("versions: {}", filters.ocp_versions.join(", "));
    println!("sort by: {}", filters.sort_types.join(", "));

    let q = ListQuery::defaults(today).to_export();
    match pullsar.export_csv(&q, today).await {
        Ok(file) => {
            println!("{} ({} bytes)", file.file_name, file.bytes.len());
            print!("{}", String::from_utf8_lossy(&file.bytes));
        }
        Err(e) => eprintln!("export failed: {}", e.user_message()),
    }
    Ok(())
}
