use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sd_doc::{DocumentHost, MemoryDocument};
use sd_protect::{ClearanceKeys, Scope, Sink, Source};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sealdoc")]
#[command(about = "Clearance-keyed sealing for document content", long_about = None)]
struct Cli {
    /// Document file (JSON) to operate on
    #[arg(short, long, default_value = "document.json")]
    document: PathBuf,

    /// Clearance keys file: a JSON map of level -> secret.
    /// Without it a built-in demo table is used (and a warning logged).
    #[arg(long)]
    clearance_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScopeArg {
    Selection,
    Body,
}

impl From<ScopeArg> for Scope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Selection => Scope::Selection,
            ScopeArg::Body => Scope::Body,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Seal content under a clearance level
    Encrypt {
        /// Clearance level selecting the secret
        #[arg(short, long)]
        level: String,

        /// What to seal
        #[arg(long, value_enum, default_value = "selection")]
        scope: ScopeArg,

        /// Store ciphertext out of line under this key, leaving the key as a
        /// visible placeholder
        #[arg(long)]
        store_key: Option<String>,
    },

    /// Recover sealed content
    Decrypt {
        /// Clearance level selecting the secret
        #[arg(short, long)]
        level: String,

        /// What to restore
        #[arg(long, value_enum, default_value = "selection")]
        scope: ScopeArg,

        /// Look the ciphertext up in the store under this key instead of
        /// reading it inline
        #[arg(long)]
        store_key: Option<String>,
    },

    /// List stored entry keys
    Keys,

    /// Delete a stored entry
    DeleteKey {
        /// Key to delete
        key: String,
    },

    /// Append sample text and a table for manual testing
    Sample,

    /// Print the document content and stored keys
    Show,
}

fn load_document(path: &Path) -> Result<MemoryDocument> {
    if path.exists() {
        let data = fs::read_to_string(path)
            .with_context(|| format!("read document {}", path.display()))?;
        serde_json::from_str(&data).with_context(|| format!("parse document {}", path.display()))
    } else {
        tracing::info!(path = %path.display(), "document file absent, starting empty");
        Ok(MemoryDocument::new())
    }
}

fn save_document(path: &Path, doc: &MemoryDocument) -> Result<()> {
    let data = serde_json::to_string_pretty(doc)?;
    fs::write(path, data).with_context(|| format!("write document {}", path.display()))?;
    Ok(())
}

fn load_clearance_keys(path: Option<&Path>) -> Result<ClearanceKeys> {
    match path {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("read clearance file {}", path.display()))?;
            let keys = ClearanceKeys::from_json(&data)
                .with_context(|| format!("parse clearance file {}", path.display()))?;
            anyhow::ensure!(!keys.is_empty(), "clearance file defines no levels");
            Ok(keys)
        }
        None => Ok(ClearanceKeys::demo()),
    }
}

fn show(doc: &MemoryDocument) -> Result<()> {
    let body = doc.body()?;
    let selection = doc.selection()?;
    println!("body text:\n{}", body.text);
    for (i, table) in body.tables.iter().enumerate() {
        println!(
            "body table {i}: {} x {}",
            table.row_count(),
            table.column_count()
        );
        for row in table.rows() {
            println!("  {}", row.join(" | "));
        }
    }
    println!("selection text:\n{}", selection.text);
    let keys = sd_store::list_keys(doc)?;
    if keys.is_empty() {
        println!("stored keys: (none)");
    } else {
        println!("stored keys: {}", keys.join(", "));
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let mut doc = load_document(&cli.document)?;

    match cli.command {
        Commands::Encrypt {
            level,
            scope,
            store_key,
        } => {
            let keys = load_clearance_keys(cli.clearance_file.as_deref())?;
            let sink = match store_key {
                Some(key) => Sink::Stored { key },
                None => Sink::Inline,
            };
            sd_protect::encrypt(&mut doc, &keys, &level, scope.into(), &sink)?;
            save_document(&cli.document, &doc)?;
            println!("sealed ({level})");
        }
        Commands::Decrypt {
            level,
            scope,
            store_key,
        } => {
            let keys = load_clearance_keys(cli.clearance_file.as_deref())?;
            let source = match store_key {
                Some(key) => Source::Stored { key },
                None => Source::Inline,
            };
            sd_protect::decrypt(&mut doc, &keys, &level, scope.into(), &source)?;
            save_document(&cli.document, &doc)?;
            println!("opened ({level})");
        }
        Commands::Keys => {
            for key in sd_protect::list_keys(&doc)? {
                println!("{key}");
            }
        }
        Commands::DeleteKey { key } => {
            if sd_protect::delete_key(&mut doc, &key)? {
                save_document(&cli.document, &doc)?;
                println!("deleted {key:?}");
            } else {
                println!("no entry under {key:?}");
            }
        }
        Commands::Sample => {
            sd_protect::insert_sample_content(&mut doc)?;
            save_document(&cli.document, &doc)?;
            println!("sample content appended");
        }
        Commands::Show => show(&doc)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sd_doc::ContentEnvelope;
    use tempfile::tempdir;

    #[test]
    fn document_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("document.json");

        let mut doc = MemoryDocument::new();
        doc.select(ContentEnvelope::plain("highlighted"));
        save_document(&path, &doc).unwrap();

        let loaded = load_document(&path).unwrap();
        assert_eq!(loaded.selection().unwrap().text, "highlighted");
    }

    #[test]
    fn absent_document_starts_empty() {
        let dir = tempdir().unwrap();
        let doc = load_document(&dir.path().join("missing.json")).unwrap();
        assert!(doc.body().unwrap().is_empty());
    }

    #[test]
    fn clearance_file_loading() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keys.json");
        fs::write(&path, r#"{"dv":"secret-a"}"#).unwrap();
        let keys = load_clearance_keys(Some(&path)).unwrap();
        assert_eq!(keys.secret("dv"), Some("secret-a"));

        fs::write(&path, "{}").unwrap();
        assert!(load_clearance_keys(Some(&path)).is_err());
    }
}
