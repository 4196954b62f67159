//! Build script for validating the static catalog datasets in `data/`
//!
//! The JSON files are embedded into the binary with `include_str!`, so a
//! malformed file or a duplicate id fails the build here instead of at runtime.
//! Broken references are tolerated by the catalog and only reported as warnings.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=data");

    let data_dir = Path::new("data");

    if !data_dir.exists() {
        println!("cargo:warning=Data directory not found, skipping dataset validation");
        return;
    }

    if let Err(e) = validate_datasets(data_dir) {
        panic!("Invalid catalog dataset: {}", e);
    }
}

// ============================================================================
// JSON Schema Types (only the fields the checks need)
// ============================================================================

#[derive(Debug, Deserialize)]
struct UserJson {
    id: u32,
    #[allow(dead_code)]
    name: String,
    sex: String,
}

#[derive(Debug, Deserialize)]
struct CategoryJson {
    id: u32,
    title: String,
    #[allow(dead_code)]
    icon: String,
    #[serde(rename = "ownerId")]
    owner_id: u32,
}

#[derive(Debug, Deserialize)]
struct ProductJson {
    id: u32,
    name: String,
    #[serde(rename = "categoryId")]
    category_id: u32,
}

// ============================================================================
// Validation
// ============================================================================

fn validate_datasets(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let users: Vec<UserJson> = read_json(&data_dir.join("users.json"))?;
    let categories: Vec<CategoryJson> = read_json(&data_dir.join("categories.json"))?;
    let products: Vec<ProductJson> = read_json(&data_dir.join("products.json"))?;

    check_unique("users.json", users.iter().map(|u| u.id))?;
    check_unique("categories.json", categories.iter().map(|c| c.id))?;
    check_unique("products.json", products.iter().map(|p| p.id))?;

    for user in &users {
        if user.sex != "m" && user.sex != "f" {
            return Err(format!("users.json: user {} has unknown sex '{}'", user.id, user.sex).into());
        }
    }

    let user_ids: HashSet<u32> = users.iter().map(|u| u.id).collect();
    for category in &categories {
        if !user_ids.contains(&category.owner_id) {
            println!(
                "cargo:warning=Category {} '{}' references missing owner {}",
                category.id, category.title, category.owner_id
            );
        }
    }

    let category_ids: HashSet<u32> = categories.iter().map(|c| c.id).collect();
    for product in &products {
        if !category_ids.contains(&product.category_id) {
            println!(
                "cargo:warning=Product {} '{}' references missing category {}",
                product.id, product.name, product.category_id
            );
        }
    }

    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn read_json<T: serde::de::DeserializeOwned>(
    path: &Path,
) -> Result<Vec<T>, Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={}", path.display());
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let items = serde_json::from_str(&content)
        .map_err(|e| format!("failed to parse {}: {}", path.display(), e))?;
    Ok(items)
}

fn check_unique(
    file: &str,
    ids: impl Iterator<Item = u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(format!("{}: duplicate id {}", file, id).into());
        }
    }
    Ok(())
}
