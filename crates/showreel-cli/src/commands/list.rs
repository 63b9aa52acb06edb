use anyhow::Result;

use showreel_core::Catalog;

pub fn run(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog.studies)?);
        return Ok(());
    }

    if catalog.is_empty() {
        println!("The catalog is empty.");
        println!("\nPoint `carousel.catalog_path` in the config at a TOML or JSON file,");
        println!("or remove it to use the built-in case studies.");
        return Ok(());
    }

    println!("Case studies ({}):\n", catalog.len());

    for (index, study) in catalog.iter().enumerate() {
        println!("  {}. {}", index + 1, study.title);
        if !study.image.is_empty() {
            println!("    Image: {}", study.image);
        }
        let link = if study.download_link == "#" {
            "(none)"
        } else {
            study.download_link.as_str()
        };
        println!("    Download: {}", link);
        println!();
    }

    Ok(())
}
