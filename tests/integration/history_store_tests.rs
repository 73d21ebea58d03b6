/*!
 * Integration tests for the SQLite history store
 */

use dialect_translator::database::{DatabaseConnection, HistoryStore, Repository};
use dialect_translator::language::LanguagePair;

use crate::common::{self, english_to_hokkien, english_to_teochew, hokkien_to_english, teochew_to_english};

#[tokio::test]
async fn test_insert_thenRecent_shouldRoundTripFields() {
    let repo = Repository::new_in_memory().unwrap();
    let output = "<b> Words </b>: 多谢<br><b> Pronunciation </b>: dor-sia<br><b> Usage </b>: thanks";

    let id = repo.insert(english_to_hokkien(), "thank you", output).await.unwrap();
    let records = repo.recent_by_pair(LanguagePair::Hokkien, 5).await.unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.id, id);
    assert_eq!(record.language_pair(), LanguagePair::Hokkien);
    assert_eq!(record.direction_label(), "English → Hokkien");
    assert_eq!(record.input_text, "thank you");
    assert_eq!(record.output_text, output);
    assert!(!record.created_at.is_empty());
}

#[tokio::test]
async fn test_recentByPair_withSevenRecords_shouldReturnNewestFive() {
    let repo = Repository::new_in_memory().unwrap();
    for i in 1..=7 {
        repo.insert(english_to_hokkien(), &format!("phrase {}", i), "out")
            .await
            .unwrap();
    }

    let inputs: Vec<String> = repo
        .recent_by_pair(LanguagePair::Hokkien, 5)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.input_text)
        .collect();

    assert_eq!(inputs, vec!["phrase 7", "phrase 6", "phrase 5", "phrase 4", "phrase 3"]);
}

/// Both directions of a pair show up; the other pair never does
#[tokio::test]
async fn test_recentByPair_shouldFilterByPairOnly() {
    let repo = Repository::new_in_memory().unwrap();
    repo.insert(english_to_hokkien(), "h1", "o").await.unwrap();
    repo.insert(english_to_teochew(), "t1", "o").await.unwrap();
    repo.insert(hokkien_to_english(), "h2", "o").await.unwrap();
    repo.insert(teochew_to_english(), "t2", "o").await.unwrap();

    let hokkien = repo.recent_by_pair(LanguagePair::Hokkien, 5).await.unwrap();
    let teochew = repo.recent_by_pair(LanguagePair::Teochew, 5).await.unwrap();

    assert_eq!(hokkien.len(), 2);
    assert!(hokkien.iter().all(|r| r.language_pair() == LanguagePair::Hokkien));
    assert_eq!(hokkien[0].direction_label(), "Hokkien → English");

    assert_eq!(teochew.len(), 2);
    assert!(teochew.iter().all(|r| r.language_pair() == LanguagePair::Teochew));
}

#[tokio::test]
async fn test_recentByPair_withNoRecords_shouldBeEmpty() {
    let repo = Repository::new_in_memory().unwrap();
    assert!(repo.recent_by_pair(LanguagePair::Teochew, 5).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_deleteById_shouldRemoveOnlyThatRow() {
    let repo = Repository::new_in_memory().unwrap();
    let first = repo.insert(english_to_hokkien(), "one", "o").await.unwrap();
    let second = repo.insert(english_to_hokkien(), "two", "o").await.unwrap();

    repo.delete_by_id(first).await.unwrap();

    let records = repo.recent_by_pair(LanguagePair::Hokkien, 5).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, second);
}

#[tokio::test]
async fn test_deleteById_withUnknownId_shouldBeNoOp() {
    let repo = Repository::new_in_memory().unwrap();
    repo.insert(english_to_teochew(), "one", "o").await.unwrap();

    repo.delete_by_id(9999).await.unwrap();
    assert_eq!(repo.recent_by_pair(LanguagePair::Teochew, 5).await.unwrap().len(), 1);
}

/// Records survive closing and reopening the database file
#[tokio::test]
async fn test_onDiskStore_afterReopen_shouldKeepRecords() {
    let dir = common::create_temp_dir().unwrap();
    let path = dir.path().join("history").join("translations.db");

    {
        let repo = Repository::new(DatabaseConnection::open(&path).unwrap());
        repo.insert(teochew_to_english(), "gam sia", "Thank you").await.unwrap();
        repo.close().unwrap();
    }
    assert!(path.exists());

    let db = DatabaseConnection::open(&path).unwrap();
    assert_eq!(db.stats().unwrap().translation_count, 1);

    let repo = Repository::new(db);
    let records = repo.recent_by_pair(LanguagePair::Teochew, 5).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].input_text, "gam sia");
    assert_eq!(records[0].direction_label(), "Teochew → English");
}

/// A row written without a direction does not hide the valid ones
#[tokio::test]
async fn test_recentByPair_withRowMissingDirection_shouldReturnValidRows() {
    let repo = Repository::new_in_memory().unwrap();
    let valid = repo.insert(english_to_hokkien(), "thank you", "out").await.unwrap();
    repo.connection()
        .execute(|conn| {
            conn.execute(
                "INSERT INTO translations (language_pair, input_text, output_text)
                 VALUES ('English ⇄ Hokkien', 'no direction', 'out')",
                [],
            )?;
            Ok(())
        })
        .unwrap();

    let records = repo.recent_by_pair(LanguagePair::Hokkien, 5).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, valid);
    assert_eq!(records[0].input_text, "thank you");
}
