/*!
 * Translate, history and delete flows through the controller
 */

use std::sync::Arc;

use dialect_translator::app_controller::{Controller, HistoryEntry, Notice};
use dialect_translator::database::{HistoryStore, Repository};
use dialect_translator::errors::{TranslationError, ValidationError};
use dialect_translator::language::LanguagePair;
use dialect_translator::providers::MockProvider;

use crate::common::{
    controller_with, english_to_hokkien, english_to_teochew, hokkien_to_english, BrokenStore,
    RecordingStore,
};

/// English → Hokkien "thank you" with a fixed answer stores exactly that answer
#[tokio::test]
async fn test_translate_thankYouToHokkien_shouldStoreFixedOutput() {
    let answer = MockProvider::three_field_answer("多谢", "dor-sia", "After a meal");
    let client = MockProvider::fixed(answer.clone());
    let (controller, store) = controller_with(client.clone());

    let outcome = controller
        .translate(english_to_hokkien(), "thank you")
        .await
        .unwrap();
    assert_eq!(outcome.output_text, answer);

    let prompts = client.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("thank you"));
    assert!(prompts[0].contains("<b> Words </b>: ..."));
    assert!(prompts[0].contains("<b> Pronunciation </b>: ..."));
    assert!(prompts[0].contains("<b> Usage </b>: ..."));

    let records = store
        .repository()
        .recent_by_pair(LanguagePair::Hokkien, 5)
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, outcome.id);
    assert_eq!(records[0].direction_label(), "English → Hokkien");
    assert_eq!(records[0].input_text, "thank you");
    assert_eq!(records[0].output_text, answer);
}

/// The stored input is trimmed, the prompt too
#[tokio::test]
async fn test_translate_withSurroundingWhitespace_shouldStoreTrimmedInput() {
    let client = MockProvider::working();
    let (controller, store) = controller_with(client.clone());

    controller
        .translate(hokkien_to_english(), "  lí hó  \n")
        .await
        .unwrap();

    assert!(client.prompts()[0].contains("\n\nlí hó\n\n"));
    let records = store
        .repository()
        .recent_by_pair(LanguagePair::Hokkien, 5)
        .await
        .unwrap();
    assert_eq!(records[0].input_text, "lí hó");
}

#[tokio::test]
async fn test_translate_withBlankInput_shouldNotCallOrStore() {
    let client = MockProvider::working();
    let (controller, store) = controller_with(client.clone());

    for input in ["", "   ", "\n\t"] {
        let result = controller.translate(english_to_teochew(), input).await;
        assert!(matches!(
            result,
            Err(TranslationError::Validation(ValidationError::EmptyInput))
        ));
    }

    assert_eq!(client.request_count(), 0);
    assert!(store
        .repository()
        .recent_by_pair(LanguagePair::Teochew, 5)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_submit_withFailingClient_shouldShowErrorAndStoreNothing() {
    let (controller, store) = controller_with(MockProvider::failing());

    let notice = controller.submit(english_to_hokkien(), "good night").await;
    match notice {
        Notice::Error(message) => assert!(message.starts_with("Error: ")),
        other => panic!("expected error notice, got {:?}", other),
    }

    assert!(store
        .repository()
        .recent_by_pair(LanguagePair::Hokkien, 5)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_submit_withEmptyModelAnswer_shouldShowError() {
    let (controller, _) = controller_with(MockProvider::empty());

    let notice = controller.submit(english_to_hokkien(), "hello").await;
    assert_eq!(
        notice,
        Notice::Error("Error: API returned an empty response".to_string())
    );
}

/// Storage failures are reported apart from model failures
#[tokio::test]
async fn test_submit_withBrokenStore_shouldReportSaveFailure() {
    let controller = Controller::new(
        Arc::new(MockProvider::fixed("<b>Words</b>: ho")),
        Arc::new(BrokenStore),
        5,
    );

    match controller.submit(english_to_hokkien(), "good").await {
        Notice::Error(message) => {
            assert!(message.contains("could not be saved"));
            assert!(message.contains("disk I/O error"));
        }
        other => panic!("expected error notice, got {:?}", other),
    }
}

#[tokio::test]
async fn test_submit_withIntermittentClient_shouldStoreOnlySuccesses() {
    let (controller, store) = controller_with(MockProvider::intermittent(2));

    let first = controller.submit(english_to_teochew(), "one").await;
    let second = controller.submit(english_to_teochew(), "two").await;

    assert!(matches!(first, Notice::Translated(_)));
    assert!(matches!(second, Notice::Error(_)));

    let records = store
        .repository()
        .recent_by_pair(LanguagePair::Teochew, 5)
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].input_text, "one");
}

/// Hiding the panel performs no store query at all
#[tokio::test]
async fn test_historyPanel_whenHidden_shouldNotQueryStore() {
    let (controller, store) = controller_with(MockProvider::working());
    controller.translate(english_to_hokkien(), "hi").await.unwrap();

    let panel = controller
        .history_panel(LanguagePair::Hokkien, false)
        .await
        .unwrap();

    assert!(panel.is_none());
    assert_eq!(store.reads(), 0);
}

#[tokio::test]
async fn test_historyPanel_whenShown_shouldListSummariesNewestFirst() {
    let (controller, store) = controller_with(MockProvider::working());
    for i in 1..=6 {
        controller
            .translate(english_to_hokkien(), &format!("phrase {}", i))
            .await
            .unwrap();
    }

    let entries: Vec<HistoryEntry> = controller
        .history_panel(LanguagePair::Hokkien, true)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(store.reads(), 1);
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0].input_text, "phrase 6");
    assert_eq!(entries[4].input_text, "phrase 2");
    assert_eq!(entries[0].direction, "English → Hokkien");
    assert_eq!(
        entries[0].summary,
        "<b> Words </b>: [TRANSLATED]<br><b> Pronunciation </b>: [PRONUNCIATION]"
    );
}

#[tokio::test]
async fn test_historyPanel_forOtherPair_shouldBeEmpty() {
    let (controller, _) = controller_with(MockProvider::working());
    controller.translate(english_to_hokkien(), "hi").await.unwrap();

    let entries = controller
        .history_panel(LanguagePair::Teochew, true)
        .await
        .unwrap()
        .unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_delete_thenHistory_shouldDropRow() {
    let (controller, _) = controller_with(MockProvider::working());
    let kept = controller.translate(english_to_hokkien(), "keep").await.unwrap();
    let gone = controller.translate(english_to_hokkien(), "drop").await.unwrap();

    controller.delete(gone.id).await.unwrap();
    controller.delete(424242).await.unwrap();

    let records = controller
        .recent_records(LanguagePair::Hokkien, None)
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, kept.id);
}

#[tokio::test]
async fn test_recentRecords_withLargeLimit_shouldCapAtPanelSize() {
    let repo = Repository::new_in_memory().unwrap();
    let store = RecordingStore::new(repo);
    let controller = Controller::new(Arc::new(MockProvider::working()), Arc::new(store), 3);

    for i in 0..4 {
        controller
            .translate(english_to_teochew(), &format!("t{}", i))
            .await
            .unwrap();
    }

    let records = controller
        .recent_records(LanguagePair::Teochew, Some(50))
        .await
        .unwrap();
    assert_eq!(records.len(), 3);

    let records = controller
        .recent_records(LanguagePair::Teochew, Some(1))
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].input_text, "t3");
}

#[tokio::test]
async fn test_healthCheck_shouldFollowClient() {
    let (healthy, _) = controller_with(MockProvider::working());
    assert!(healthy.health_check().await.is_ok());

    let (broken, _) = controller_with(MockProvider::failing());
    assert!(broken.health_check().await.is_err());
}
