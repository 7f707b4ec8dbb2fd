use scylla::Session;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, error, info, warn};

use crate::config::ScyllaConfig;

use super::DbError;

/// Run all `.cql` migrations using the provided session.
/// Migrations are executed sequentially in lexicographic order.
pub async fn run_migrations(session: &Session, config: &ScyllaConfig) -> Result<(), DbError> {
    let migrations_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("migrations");

    let mut entries = fs::read_dir(&migrations_dir).await.map_err(|e| {
        DbError::MigrationError(format!(
            "Failed to read migrations directory {}: {}",
            migrations_dir.display(),
            e
        ))
    })?;

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| {
        DbError::MigrationError(format!("Failed to iterate migrations: {}", e))
    })? {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("cql") {
            files.push(path);
        }
    }

    files.sort();

    if files.is_empty() {
        warn!(
            "No migrations found in '{}'; skipping migration step",
            migrations_dir.display()
        );
        return Ok(());
    }

    info!("Applying {} migration file(s)", files.len());

    for path in files {
        let display_path = path.display().to_string();
        info!("Running migration file: {}", display_path);

        let migration_cql = fs::read_to_string(&path).await.map_err(|e| {
            DbError::MigrationError(format!("Failed to read {}: {}", display_path, e))
        })?;

        // Replace default keyspace name with configured keyspace, if present.
        let migration_cql = migration_cql.replace("trivia", &config.keyspace);

        let statements = split_statements(&migration_cql);
        for (index, statement) in statements.iter().enumerate() {
            let upper = statement.to_uppercase();

            if upper.starts_with("USE ") {
                session.use_keyspace(&config.keyspace, false).await?;
                debug!("Statement {}: selected keyspace '{}'", index + 1, config.keyspace);
                continue;
            }

            match session.query(statement.as_str(), &[]).await {
                Ok(_) => {
                    debug!("Statement {} applied from {}", index + 1, display_path);
                }
                Err(err) => {
                    // Allow idempotent migrations.
                    let error_msg = err.to_string();
                    if error_msg.contains("already exists") {
                        warn!(
                            "Statement {} skipped: object already exists ({})",
                            index + 1,
                            error_msg
                        );
                        continue;
                    }

                    error!(
                        "Failed to execute statement {} from {}: {}",
                        index + 1,
                        display_path,
                        error_msg
                    );

                    return Err(DbError::MigrationError(format!(
                        "Failed to execute statement {} from {}: {}",
                        index + 1,
                        display_path,
                        err
                    )));
                }
            }

            if upper.contains("CREATE KEYSPACE") {
                if let Err(err) = session.await_schema_agreement().await {
                    warn!(
                        "Schema agreement wait after creating keyspace '{}' failed: {}",
                        config.keyspace, err
                    );
                }
                if let Err(err) = session.refresh_metadata().await {
                    warn!(
                        "Metadata refresh after creating keyspace '{}' failed: {}",
                        config.keyspace, err
                    );
                }
            }
        }
    }

    info!("Database migrations applied successfully");
    Ok(())
}

/// Split a migration file into statements, dropping blank lines and `--` comments.
fn split_statements(cql: &str) -> Vec<String> {
    cql.split(';')
        .filter_map(|chunk| {
            let cleaned = chunk
                .lines()
                .filter_map(|line| {
                    let trimmed = line.trim();
                    if trimmed.is_empty() || trimmed.starts_with("--") {
                        None
                    } else {
                        Some(trimmed)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");

            if cleaned.is_empty() { None } else { Some(cleaned) }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::split_statements;

    #[test]
    fn test_split_statements_strips_comments() {
        let cql = r#"
            -- schema
            CREATE TABLE IF NOT EXISTS questions (
                id int PRIMARY KEY
            );

            -- trailing comment only
        "#;

        let statements = split_statements(cql);
        assert_eq!(statements.len(), 1);
        assert!(statements[0].starts_with("CREATE TABLE IF NOT EXISTS questions"));
    }

    #[test]
    fn test_split_statements_handles_multiple() {
        let cql = "USE trivia;\nINSERT INTO categories (id, kind) VALUES (1, 'Science');";
        let statements = split_statements(cql);
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0], "USE trivia");
    }
}
