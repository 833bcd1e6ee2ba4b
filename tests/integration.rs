// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios driving the document lifecycle against the fake
//! engine, plus config/i18n wiring.

use deck_scrub::config::{self, Config};
use deck_scrub::document::{self, DocumentSource};
use deck_scrub::engine::{RenderEngine, SessionConfig, SurfaceId};
use deck_scrub::error::{Error, NetworkError};
use deck_scrub::i18n::fluent::I18n;
use deck_scrub::test_utils::FakeEngine;
use deck_scrub::ui::viewer::lifecycle::{Effect, Message, Phase, RequestId, State};
use deck_scrub::ui::theming::ThemeMode;
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

fn request_of(effects: &[Effect]) -> RequestId {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Resolve { request, .. } => Some(*request),
            _ => None,
        })
        .expect("expected a Resolve effect")
}

/// Runs a Resolve effect for real (file read) and feeds the result back,
/// then drives engine initialization, the way the orchestrator does.
async fn drive_effects(state: &mut State, engine: &FakeEngine, effects: Vec<Effect>, i18n: &I18n) {
    let mut pending = effects;
    while !pending.is_empty() {
        let mut next = Vec::new();
        for effect in pending {
            match effect {
                Effect::Resolve { request, source } => {
                    let result = source.resolve().await;
                    next.extend(state.handle(Message::Resolved { request, result }, i18n));
                }
                Effect::Initialize {
                    request,
                    document_name,
                    bytes,
                } => {
                    let result = engine
                        .initialize(SessionConfig::for_surface(
                            SurfaceId::PRIMARY,
                            document_name,
                            bytes,
                        ))
                        .await
                        .map_err(Error::from);
                    next.extend(state.handle(Message::SessionEstablished { request, result }, i18n));
                }
                Effect::Dispose(session) => {
                    let _ = session.dispose().await;
                }
                Effect::LoadingTimedOut => {}
            }
        }
        pending = next;
    }
}

fn write_deck(dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("create deck file");
    file.write_all(b"PK\x03\x04deck-bytes").expect("write deck");
    path
}

#[tokio::test]
async fn selecting_a_deck_reaches_ready_with_one_session() {
    let dir = tempdir().expect("temp dir");
    let deck = write_deck(dir.path(), "slides.pptx");
    let engine = FakeEngine::new();
    let i18n = I18n::default();
    let mut state = State::default();

    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(engine.created(), 0);

    let effects = state.handle(Message::SourceSelected(DocumentSource::File(deck)), &i18n);
    assert_eq!(state.phase(), Phase::Loading);

    drive_effects(&mut state, &engine, effects, &i18n).await;

    assert_eq!(state.phase(), Phase::Ready);
    assert_eq!(engine.live_sessions(), 1);
}

#[tokio::test]
async fn replacing_the_deck_swaps_sessions_without_overlap_at_rest() {
    let dir = tempdir().expect("temp dir");
    let first = write_deck(dir.path(), "first.pptx");
    let second = write_deck(dir.path(), "second.pptx");
    let engine = FakeEngine::new();
    let i18n = I18n::default();
    let mut state = State::default();

    let effects = state.handle(Message::SourceSelected(DocumentSource::File(first)), &i18n);
    drive_effects(&mut state, &engine, effects, &i18n).await;
    assert_eq!(engine.live_sessions(), 1);

    let effects = state.handle(Message::SourceSelected(DocumentSource::File(second)), &i18n);
    drive_effects(&mut state, &engine, effects, &i18n).await;

    assert_eq!(state.phase(), Phase::Ready);
    assert_eq!(state.holder.document_name(), Some("second.pptx"));
    assert_eq!(engine.created(), 2);
    assert_eq!(engine.disposed(), 1);
    assert_eq!(engine.live_sessions(), 1);
}

#[tokio::test]
async fn rejected_file_never_touches_the_engine() {
    let engine = FakeEngine::new();
    let state = State::default();

    let err = document::check_input_file(Path::new("notes.txt")).unwrap_err();
    assert!(matches!(err, Error::InvalidInputFile(_)));

    // Rejection happens before the lifecycle; nothing moved.
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(engine.created(), 0);
}

#[tokio::test]
async fn remote_404_surfaces_the_status_in_the_error() {
    let i18n = I18n::default();
    let mut state = State::default();

    let effects = state.handle(
        Message::SourceSelected(DocumentSource::Remote(
            "https://example.invalid/deck.pptx".into(),
        )),
        &i18n,
    );
    let request = request_of(&effects);

    state.handle(
        Message::Resolved {
            request,
            result: Err(Error::Network(NetworkError::Status(404))),
        },
        &i18n,
    );

    assert_eq!(state.phase(), Phase::Errored);
    assert!(state.error().expect("error state").details().contains("404"));
}

#[tokio::test]
async fn clearing_the_deck_releases_the_last_session() {
    let dir = tempdir().expect("temp dir");
    let deck = write_deck(dir.path(), "slides.pptx");
    let engine = FakeEngine::new();
    let i18n = I18n::default();
    let mut state = State::default();

    let effects = state.handle(Message::SourceSelected(DocumentSource::File(deck)), &i18n);
    drive_effects(&mut state, &engine, effects, &i18n).await;

    let effects = state.handle(Message::SourceCleared, &i18n);
    drive_effects(&mut state, &engine, effects, &i18n).await;

    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(engine.live_sessions(), 0);
}

#[test]
fn language_change_via_config_round_trips() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme: Some(ThemeMode::System),
        prefer_outline: Some(false),
    };
    config::save_to_path(&initial_config, &config_path).expect("Failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        theme: Some(ThemeMode::System),
        prefer_outline: Some(false),
    };
    config::save_to_path(&french_config, &config_path).expect("Failed to write french config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}
