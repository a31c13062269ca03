// Prints the generated OpenAPI document, error responses included.
// Run with: cargo run --bin openapi_export > openapi.json

use portfolio_api::api::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let doc = ApiDoc::openapi();
    let json = doc.to_pretty_json()?;

    println!("{}", json);

    eprintln!("OpenAPI specification generated successfully");
    Ok(())
}
