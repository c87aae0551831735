use std::path::Path;

use gesture_remote::{Configuration, intake::ReplaySource, output::RecordingKeySink, CoordinatorBuilder, StopReason};

fn demo(file: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(file)
}

#[test]
fn demo_config_runs_the_bundled_provider() {
    let configuration = Configuration::load(&demo("gesture-remote.toml")).unwrap();
    assert_eq!(configuration.provider.program, "python3");

    let script = configuration.provider.args[0].clone();
    assert!(Path::new(env!("CARGO_MANIFEST_DIR")).join(&script).is_file());
    assert_eq!(script, Configuration::default().provider.args[0]);
}

#[test]
fn bundled_provider_accepts_every_generated_flag() {
    let source = std::fs::read_to_string(demo("hand_landmarks.py")).unwrap();
    for flag in Configuration::default()
        .provider
        .command_args()
        .iter()
        .filter(|arg| arg.starts_with("--"))
    {
        assert!(
            source.contains(&format!("\"{}\"", flag)),
            "provider does not parse {}",
            flag
        );
    }
    for message in ["\"ready\"", "\"frame\"", "\"quit\"", "\"camera_error\"", "\"action\""] {
        assert!(source.contains(message), "provider does not handle {}", message);
    }
}

#[tokio::test]
async fn demo_session_replays_to_quit() {
    let keys = RecordingKeySink::new();
    let coordinator = CoordinatorBuilder::new(Configuration::default())
        .source(Box::new(ReplaySource::open(&demo("session.jsonl"), 2).await.unwrap()))
        .key_sink(Box::new(keys.clone()))
        .build()
        .unwrap();

    let summary = coordinator.run().await.unwrap();
    assert_eq!(summary.stop_reason, StopReason::Quit);
    assert_eq!(summary.frames, 63);
    assert!(!keys.pressed().is_empty());
}
