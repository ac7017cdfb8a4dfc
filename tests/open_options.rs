/*
 * Copyright 2019-2020 Wren Powell
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use rstest::*;

use common::{entry, open_empty, reopen, store_config};
use termbook::repo::{
    seed_entries, Entry, OpenMode, OpenOptions, RenamePolicy, RepoConfig, UNCLASSIFIED,
};
use termbook::store::MemoryConfig;

mod common;

#[rstest]
fn missing_store_is_seeded_and_persisted(store_config: MemoryConfig) -> anyhow::Result<()> {
    let repo = OpenOptions::new().open(&store_config)?;

    assert_eq!(repo.len(), seed_entries().len());
    assert!(store_config.data().is_some());

    let reopened = reopen(&store_config);
    assert_eq!(
        reopened.iter().collect::<Vec<_>>(),
        seed_entries().iter().collect::<Vec<_>>()
    );

    Ok(())
}

#[test]
fn seed_keeps_declared_order() {
    let keys: Vec<_> = seed_entries().iter().map(|(key, _)| key.to_owned()).collect();

    assert_eq!(
        keys,
        vec![
            "permutations",
            "combinations",
            "product",
            "zip",
            "enumerate",
            "read_csv",
            "plot",
            "array",
            "st.write",
            "datetime",
            "open",
        ]
    );
}

#[rstest]
fn existing_store_is_not_reseeded(store_config: MemoryConfig) -> anyhow::Result<()> {
    let mut repo = OpenOptions::new().open(&store_config)?;
    repo.remove("zip")?;
    drop(repo);

    let repo = OpenOptions::new().open(&store_config)?;

    assert!(!repo.contains("zip"));
    assert_eq!(repo.len(), seed_entries().len() - 1);

    Ok(())
}

#[rstest]
fn unseeded_store_starts_empty(store_config: MemoryConfig) -> anyhow::Result<()> {
    let repo = OpenOptions::new().seed(false).open(&store_config)?;

    assert!(repo.is_empty());
    assert_eq!(store_config.data(), Some(b"{}".to_vec()));

    Ok(())
}

#[rstest]
fn open_mode_requires_existing_store(store_config: MemoryConfig) {
    let result = OpenOptions::new().mode(OpenMode::Open).open(&store_config);

    assert!(matches!(result, Err(termbook::Error::NotFound)));
    assert!(store_config.data().is_none());
}

#[rstest]
fn create_new_mode_rejects_existing_store(store_config: MemoryConfig) {
    open_empty(&store_config);

    let result = OpenOptions::new()
        .mode(OpenMode::CreateNew)
        .open(&store_config);

    assert!(matches!(result, Err(termbook::Error::AlreadyExists)));
}

#[test]
fn corrupt_store_errs_and_is_left_untouched() {
    let garbage = b"{ this is not json".to_vec();
    let store_config = MemoryConfig::with_data(garbage.clone());

    let result = OpenOptions::new().open(&store_config);

    assert!(matches!(result, Err(termbook::Error::Corrupt(_))));
    assert_eq!(store_config.data(), Some(garbage));
}

#[test]
fn wrongly_shaped_store_is_corrupt() {
    for document in [
        r#"["zip"]"#,
        r#"{"zip": "not an entry"}"#,
        r#"{"zip": {"genre": 1, "description": "a", "example": "b"}}"#,
        "",
    ] {
        let store_config = MemoryConfig::with_data(document);

        let result = OpenOptions::new().open(&store_config);

        assert!(
            matches!(result, Err(termbook::Error::Corrupt(_))),
            "document {:?} should be corrupt",
            document
        );
    }
}

#[test]
fn legacy_document_is_read_and_rewritten() -> anyhow::Result<()> {
    let legacy = r#"{
  "zip": {
    "ジャンル": "組込み関数",
    "説明": "複数のリストを並列に処理",
    "例": "for a, b in zip([1,2], ['a','b']):\n    print(a, b)"
  },
  "open": {
    "説明": "ファイルの読み書きに使う基本関数",
    "例": "open('file.txt')"
  }
}"#;
    let store_config = MemoryConfig::with_data(legacy);

    let mut repo = OpenOptions::new().open(&store_config)?;

    assert_eq!(repo.keys().collect::<Vec<_>>(), vec!["zip", "open"]);
    assert_eq!(repo.get("zip").unwrap().genre, "組込み関数");
    assert_eq!(repo.get("open").unwrap().genre, UNCLASSIFIED);

    repo.persist()?;

    let rewritten = String::from_utf8(store_config.data().unwrap())?;
    assert!(rewritten.contains("\"genre\": \"組込み関数\""));
    assert!(!rewritten.contains("ジャンル"));
    assert_eq!(reopen(&store_config).get("zip"), repo.get("zip"));

    Ok(())
}

#[rstest]
fn config_replaces_individual_settings(store_config: MemoryConfig) -> anyhow::Result<()> {
    let mut config = RepoConfig::default();
    config.rename_policy = RenamePolicy::Overwrite;
    config.seed = false;

    let repo = OpenOptions::new()
        .seed(true)
        .config(config.clone())
        .open(&store_config)?;

    assert!(repo.is_empty());
    assert_eq!(repo.config(), &config);

    Ok(())
}

#[test]
fn default_config_rejects_rename_collisions_and_seeds() {
    let config = RepoConfig::default();

    assert_eq!(config.rename_policy, RenamePolicy::Reject);
    assert!(config.seed);
}

#[test]
fn default_entry_is_unclassified() {
    assert_eq!(Entry::default(), Entry::new("", "", UNCLASSIFIED));
}

#[rstest]
fn entries_survive_reopening(store_config: MemoryConfig) -> anyhow::Result<()> {
    let mut repo = open_empty(&store_config);
    repo.insert("順列", entry("順列", "標準ライブラリ"))?;
    repo.insert("zip", entry("zip", "builtin"))?;

    let reopened = reopen(&store_config);

    assert_eq!(
        reopened.iter().collect::<Vec<_>>(),
        repo.iter().collect::<Vec<_>>()
    );

    Ok(())
}
