//! Tests for batch orchestration against a scratch story corpus.

mod test_utils;

use std::path::Path;
use std::time::Duration;
use storybook_batch::BatchOrchestrator;
use storybook_core::PromptCatalog;
use storybook_error::ImagenErrorKind;
use storybook_models::IllustrationClient;
use storybook_rate_limit::{PathsConfig, RetryPolicy};
use storybook_storage::{ArtifactStore, MetadataUpdater, StoryStore};
use tempfile::TempDir;
use test_utils::{MockImageGenerator, MockResponse, RecordingPause};

const CROW: &str = "panchatantra-thirsty-crow";

const TWO_STORIES: &[(&str, &[&str])] = &[
    ("epic-a", &["First scene.", "Second scene."]),
    ("epic-b", &["Only scene."]),
];

const CROW_RECORD: &str = r#"{
  "id": "panchatantra-thirsty-crow",
  "title": "The Thirsty Crow",
  "sections": [
    { "text": "It was a hot summer day." },
    { "text": "A crow was very thirsty." },
    { "text": "He found a pitcher." },
    { "text": "The water was low." },
    { "text": "He dropped pebbles in." },
    { "text": "He drank and flew away." }
  ]
}
"#;

const CROW_RECORD_HI: &str = r#"{
  "id": "panchatantra-thirsty-crow",
  "title": "प्यासा कौआ",
  "sections": [
    { "text": "एक" },
    { "text": "दो" },
    { "text": "तीन" },
    { "text": "चार" },
    { "text": "पाँच" },
    { "text": "छह" }
  ]
}
"#;

type Orchestrator = BatchOrchestrator<MockImageGenerator, RecordingPause>;

fn write(path: &Path, text: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, text).unwrap();
}

fn corpus() -> (TempDir, PathsConfig) {
    let temp_dir = TempDir::new().unwrap();
    let paths = PathsConfig::rooted_at(temp_dir.path());
    write(&paths.primary_dir().join(format!("{CROW}.json")), CROW_RECORD);
    write(&paths.secondary_dir().join(format!("{CROW}.json")), CROW_RECORD_HI);
    (temp_dir, paths)
}

fn orchestrator_with(
    catalog: PromptCatalog,
    paths: &PathsConfig,
    generator: MockImageGenerator,
    policy: RetryPolicy,
) -> (Orchestrator, RecordingPause) {
    let pause = RecordingPause::default();
    let client = IllustrationClient::new(generator, "Style. ", policy).with_pause(pause.clone());
    let orchestrator = BatchOrchestrator::new(
        catalog,
        client,
        ArtifactStore::new(paths.images_dir()),
        MetadataUpdater::new(
            StoryStore::new(paths.primary_dir()),
            StoryStore::new(paths.secondary_dir()),
        ),
    );
    (orchestrator, pause)
}

fn orchestrator(
    paths: &PathsConfig,
    generator: MockImageGenerator,
) -> (Orchestrator, RecordingPause) {
    orchestrator_with(PromptCatalog::builtin(), paths, generator, RetryPolicy::default())
}

#[tokio::test]
async fn test_story_generates_every_scene() -> anyhow::Result<()> {
    let (_temp_dir, paths) = corpus();
    let (orchestrator, _) = orchestrator(&paths, MockImageGenerator::new_success());

    let summary = orchestrator.run(Some(CROW), false).await?;

    let outcome = &summary.stories()[0];
    let expected: Vec<String> = (1..=6).map(|n| format!("thirsty-crow-{n:02}")).collect();
    assert_eq!(outcome.image_ids(), &expected);
    assert_eq!(*outcome.generated(), 6);
    assert!(outcome.metadata_updated());
    assert_eq!(orchestrator.client().generator().call_count(), 6);

    for id in &expected {
        assert!(paths.images_dir().join(format!("{id}.png")).exists());
    }

    let en = StoryStore::new(paths.primary_dir()).load(CROW).await?.unwrap();
    let hi = StoryStore::new(paths.secondary_dir()).load(CROW).await?.unwrap();
    for (index, id) in expected.iter().enumerate() {
        assert_eq!(en.image(index), Some(id.as_str()));
        assert_eq!(hi.image(index), Some(id.as_str()));
    }
    Ok(())
}

#[tokio::test]
async fn test_prompts_carry_style_preamble() -> anyhow::Result<()> {
    let (_temp_dir, paths) = corpus();
    let (orchestrator, _) = orchestrator(&paths, MockImageGenerator::new_success());

    orchestrator.run(Some(CROW), false).await?;

    let scenes = orchestrator.catalog().get(CROW).unwrap();
    let prompts = orchestrator.client().generator().prompts();
    assert_eq!(prompts.len(), scenes.len());
    for (sent, scene) in prompts.iter().zip(scenes) {
        assert_eq!(sent, &format!("Style. {scene}"));
    }
    Ok(())
}

#[tokio::test]
async fn test_second_run_makes_no_calls() -> anyhow::Result<()> {
    let (_temp_dir, paths) = corpus();
    let record_path = paths.primary_dir().join(format!("{CROW}.json"));
    let (orchestrator, _) = orchestrator(&paths, MockImageGenerator::new_success());

    orchestrator.run(Some(CROW), false).await?;
    let first = std::fs::read(&record_path)?;

    let summary = orchestrator.run(Some(CROW), false).await?;
    let second = std::fs::read(&record_path)?;

    assert_eq!(orchestrator.client().generator().call_count(), 6);
    assert_eq!(summary.generated(), 0);
    assert_eq!(summary.skipped(), 6);
    assert_eq!(summary.stories()[0].image_ids().len(), 6);
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_dry_run_writes_nothing() -> anyhow::Result<()> {
    let (_temp_dir, paths) = corpus();
    let (orchestrator, pause) = orchestrator(&paths, MockImageGenerator::new_success());

    let summary = orchestrator.run(Some(CROW), true).await?;

    assert_eq!(summary.planned(), 6);
    assert_eq!(orchestrator.client().generator().call_count(), 0);
    assert!(pause.delays().is_empty());
    assert!(!paths.images_dir().exists());
    assert!(summary.stories()[0].metadata().is_none());
    let record = std::fs::read_to_string(paths.primary_dir().join(format!("{CROW}.json")))?;
    assert_eq!(record, CROW_RECORD);
    Ok(())
}

#[tokio::test]
async fn test_failed_scene_does_not_stop_story() -> anyhow::Result<()> {
    let (_temp_dir, paths) = corpus();
    let image = MockResponse::Image(b"png".to_vec());
    let generator = MockImageGenerator::new_sequence(vec![
        image.clone(),
        MockResponse::Error(ImagenErrorKind::ApiRequest("connection reset".to_string())),
        image.clone(),
        image.clone(),
        image.clone(),
        image,
    ]);
    let (orchestrator, pause) = orchestrator_with(
        PromptCatalog::builtin(),
        &paths,
        generator,
        RetryPolicy::default().with_max_attempts(1),
    );

    let summary = orchestrator.run(Some(CROW), false).await?;
    let outcome = &summary.stories()[0];

    assert_eq!(*outcome.generated(), 5);
    assert_eq!(*outcome.failed(), 1);
    assert_eq!(outcome.image_ids().len(), 6);
    assert!(!paths.images_dir().join("thirsty-crow-02.png").exists());
    assert!(paths.images_dir().join("thirsty-crow-06.png").exists());
    assert_eq!(pause.delays(), vec![Duration::from_millis(500); 6]);

    let en = StoryStore::new(paths.primary_dir()).load(CROW).await?.unwrap();
    assert_eq!(en.image(1), Some("thirsty-crow-02"));
    Ok(())
}

#[tokio::test]
async fn test_unknown_story_is_skipped() -> anyhow::Result<()> {
    let (_temp_dir, paths) = corpus();
    let (orchestrator, _) = orchestrator(&paths, MockImageGenerator::new_success());

    let summary = orchestrator.run(Some("wisdom-no-such-story"), false).await?;

    assert!(summary.stories().is_empty());
    assert_eq!(summary.unknown(), &vec!["wisdom-no-such-story".to_string()]);
    assert_eq!(orchestrator.client().generator().call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_full_run_visits_stories_in_order() -> anyhow::Result<()> {
    const ENTRIES: &[(&str, &[&str])] = &[
        ("vedic-river", &["A river at dawn."]),
        ("epic-bow", &["A bow.", "An archer."]),
    ];
    let (_temp_dir, paths) = corpus();
    let (orchestrator, _) = orchestrator_with(
        PromptCatalog::from_entries(ENTRIES),
        &paths,
        MockImageGenerator::new_success(),
        RetryPolicy::default(),
    );

    let summary = orchestrator.run(None, false).await?;

    let slugs: Vec<&str> = summary.stories().iter().map(|s| s.slug().as_str()).collect();
    assert_eq!(slugs, vec!["epic-bow", "vedic-river"]);
    assert_eq!(summary.generated(), 3);
    assert!(paths.images_dir().join("bow-02.png").exists());
    assert!(paths.images_dir().join("river-01.png").exists());
    assert!(!summary.stories()[0].metadata_updated());
    Ok(())
}

#[tokio::test]
async fn test_listing_reports_records_and_totals() -> anyhow::Result<()> {
    let (_temp_dir, paths) = corpus();
    let (orchestrator, _) = orchestrator(&paths, MockImageGenerator::new_success());

    let before = orchestrator.list().await?.to_string();
    assert!(before.contains("  panchatantra-thirsty-crow: 6 prompts (needs images)\n"));
    assert!(before.ends_with("\nTotal: 22 stories, 130 images (~$3.90)\n"));

    orchestrator.run(Some(CROW), false).await?;

    let after = orchestrator.list().await?;
    assert!(after.to_string().contains("  panchatantra-thirsty-crow: 6 prompts (HAS IMAGES)\n"));
    let with_images = after.entries().iter().filter(|e| *e.has_images()).count();
    assert_eq!(with_images, 1);
    Ok(())
}

#[tokio::test]
async fn test_write_error_pauses_and_continues() -> anyhow::Result<()> {
    let (_temp_dir, paths) = corpus();
    std::fs::create_dir_all(paths.images_dir().join("a-01.png.tmp"))?;
    let (orchestrator, pause) = orchestrator_with(
        PromptCatalog::from_entries(TWO_STORIES),
        &paths,
        MockImageGenerator::new_success(),
        RetryPolicy::default(),
    );

    let summary = orchestrator.run(None, false).await?;

    assert_eq!(
        pause.delays(),
        vec![
            Duration::from_secs(2),
            Duration::from_millis(500),
            Duration::from_millis(500),
        ]
    );
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.generated(), 2);
    assert!(!paths.images_dir().join("a-01.png").exists());
    assert!(paths.images_dir().join("a-02.png").exists());
    assert!(paths.images_dir().join("b-01.png").exists());
    assert_eq!(summary.stories()[0].image_ids().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_malformed_record_does_not_stop_run() -> anyhow::Result<()> {
    let (_temp_dir, paths) = corpus();
    write(&paths.primary_dir().join("epic-a.json"), r#"{"title": 1}"#);
    write(
        &paths.primary_dir().join("epic-b.json"),
        r#"{"sections": [{"text": "Only scene."}]}"#,
    );
    let (orchestrator, _) = orchestrator_with(
        PromptCatalog::from_entries(TWO_STORIES),
        &paths,
        MockImageGenerator::new_success(),
        RetryPolicy::default(),
    );

    let summary = orchestrator.run(None, false).await?;

    assert_eq!(summary.metadata_errors(), 1);
    assert!(summary.stories()[0].metadata_error().is_some());
    assert!(summary.stories()[1].metadata_error().is_none());
    assert!(summary.stories()[1].metadata_updated());
    assert!(paths.images_dir().join("b-01.png").exists());

    let b = StoryStore::new(paths.primary_dir()).load("epic-b").await?.unwrap();
    assert_eq!(b.image(0), Some("b-01"));

    let listing = orchestrator.list().await?;
    assert!(listing.to_string().contains("  epic-a: 2 prompts (needs images)\n"));
    assert!(listing.to_string().contains("  epic-b: 1 prompts (HAS IMAGES)\n"));
    Ok(())
}
