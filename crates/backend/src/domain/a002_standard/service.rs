use super::{repository, seed};
use contracts::domain::a002_standard::{Standard, StandardsSet, StandardsSetId};

pub async fn list_sets() -> anyhow::Result<Vec<StandardsSet>> {
    repository::list_sets().await
}

/// Catalog for a set; `None` when the set does not exist
pub async fn list_by_set_id(set_id: StandardsSetId) -> anyhow::Result<Option<Vec<Standard>>> {
    if repository::get_set(set_id).await?.is_none() {
        return Ok(None);
    }
    Ok(Some(repository::list_by_set_id(set_id).await?))
}

/// Replace a set's catalog after validating every entry
pub async fn import_set(set: StandardsSet, catalog: Vec<Standard>) -> anyhow::Result<()> {
    for standard in &catalog {
        standard
            .validate()
            .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    }
    repository::replace_set(&set, &catalog).await?;
    tracing::info!(
        "Imported standards set {} '{}' ({} standards)",
        set.id,
        set.name,
        catalog.len()
    );
    Ok(())
}

/// Load the bundled demo sets
pub async fn insert_test_data() -> anyhow::Result<()> {
    for (set, catalog) in seed::demo_sets()? {
        import_set(set, catalog).await?;
    }
    Ok(())
}

/// Load the bundled demo sets only into an empty catalog
pub async fn insert_demo_data_if_empty() -> anyhow::Result<()> {
    if !repository::list_sets().await?.is_empty() {
        return Ok(());
    }
    insert_test_data().await
}
