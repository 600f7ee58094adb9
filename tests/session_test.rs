//! セッション（画像選択・解析・リセット）テスト

mod common;

use character_profiler::error::ProfilerError;
use character_profiler::{PersonaAnalyzer, Session, SessionStatus};
use character_profiler_common::{ImageMime, GENERIC_FAILURE_MESSAGE};
use common::{write_file, CannedModel, JPEG_SIGNATURE, PNG_SIGNATURE};
use tempfile::tempdir;

/// JPEG/PNGは受け付けてData URLになる
#[tokio::test]
async fn test_select_supported_types() {
    let dir = tempdir().expect("Failed to create temp dir");
    let jpeg = write_file(dir.path(), "hero.jpg", JPEG_SIGNATURE);
    let png = write_file(dir.path(), "villain.PNG", PNG_SIGNATURE);

    let mut session = Session::new();

    let selected = session.select_image(&jpeg).await.expect("JPEGは受け付ける");
    assert_eq!(selected.image.mime(), ImageMime::Jpeg);
    assert!(selected.image.data_url().starts_with("data:image/jpeg;base64,"));
    assert!(!selected.image.payload().unwrap().is_empty());

    let selected = session.select_image(&png).await.expect("PNGは受け付ける");
    assert_eq!(selected.image.mime(), ImageMime::Png);
    assert_eq!(selected.file_name, "villain.PNG");

    // 1枠のみ: 後から選んだ画像で置き換わる
    assert_eq!(session.selected().map(|s| s.file_name.as_str()), Some("villain.PNG"));
    assert!(session.error().is_none());
}

/// 非対応形式は拒否され、選択中の画像はそのまま
#[tokio::test]
async fn test_unsupported_type_keeps_previous_selection() {
    let dir = tempdir().expect("Failed to create temp dir");
    let png = write_file(dir.path(), "hero.png", PNG_SIGNATURE);
    let gif = write_file(dir.path(), "anim.gif", b"GIF89a");

    let mut session = Session::new();
    session.select_image(&png).await.unwrap();
    let before = session.selected().cloned();

    let err = session.select_image(&gif).await.unwrap_err();
    assert!(matches!(err, ProfilerError::UnsupportedImage(_)));

    assert_eq!(session.selected().cloned(), before);
    assert!(session.error().unwrap().contains("JPG or PNG"));
}

/// 存在しないファイル
#[tokio::test]
async fn test_select_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut session = Session::new();

    let err = session.select_image(&dir.path().join("ghost.jpg")).await.unwrap_err();
    assert!(matches!(err, ProfilerError::FileNotFound(_)));
    assert!(session.selected().is_none());
}

/// 空ファイルはペイロード無しとして拒否
#[tokio::test]
async fn test_select_empty_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let empty = write_file(dir.path(), "empty.png", b"");

    let mut session = Session::new();
    let err = session.select_image(&empty).await.unwrap_err();
    assert!(matches!(err, ProfilerError::Common(_)));
    assert!(session.selected().is_none());
}

/// 画像未選択での解析はエラー
#[tokio::test]
async fn test_analyze_without_selection() {
    let analyzer = PersonaAnalyzer::new(CannedModel::replying("{}"));
    let mut session = Session::new();

    let err = session.analyze(&analyzer).await.unwrap_err();
    assert!(matches!(err, ProfilerError::NoImageSelected));
    assert_eq!(session.error(), Some("Please select an image first"));
    assert_eq!(analyzer.model().calls(), 0);
}

/// 成功時は結果が保持される
#[tokio::test]
async fn test_analyze_success_updates_state() {
    let dir = tempdir().expect("Failed to create temp dir");
    let png = write_file(dir.path(), "hero.png", PNG_SIGNATURE);

    let analyzer = PersonaAnalyzer::new(CannedModel::replying(r#"{"voice":"Booming"}"#));
    let mut session = Session::new();
    session.select_image(&png).await.unwrap();

    let outcome = session.analyze(&analyzer).await.unwrap();
    assert!(outcome.is_success());
    assert_eq!(session.status(), SessionStatus::Succeeded);
    assert_eq!(session.result().map(|r| r.voice.as_str()), Some("Booming"));
    assert!(session.error().is_none());
    assert!(!session.is_busy());
}

/// 失敗時は一律メッセージがエラー欄に入る
#[tokio::test]
async fn test_analyze_failure_updates_state() {
    let dir = tempdir().expect("Failed to create temp dir");
    let jpg = write_file(dir.path(), "hero.jpg", JPEG_SIGNATURE);

    let analyzer = PersonaAnalyzer::new(CannedModel::replying("I cannot analyze this image."));
    let mut session = Session::new();
    session.select_image(&jpg).await.unwrap();

    let outcome = session.analyze(&analyzer).await.unwrap();
    assert!(!outcome.is_success());
    assert_eq!(session.status(), SessionStatus::Failed);
    assert_eq!(session.error(), Some(GENERIC_FAILURE_MESSAGE));
    assert!(session.result().is_none());
}

/// 新しい画像を選ぶと前の結果は消える
#[tokio::test]
async fn test_reselect_clears_previous_result() {
    let dir = tempdir().expect("Failed to create temp dir");
    let first = write_file(dir.path(), "first.png", PNG_SIGNATURE);
    let second = write_file(dir.path(), "second.jpg", JPEG_SIGNATURE);

    let analyzer = PersonaAnalyzer::new(CannedModel::replying("{}"));
    let mut session = Session::new();
    session.select_image(&first).await.unwrap();
    session.analyze(&analyzer).await.unwrap();
    assert!(session.result().is_some());

    session.select_image(&second).await.unwrap();
    assert!(session.result().is_none());
    assert_eq!(session.status(), SessionStatus::Idle);
}

/// reset後は初期状態と区別できない（何度呼んでも同じ）
#[tokio::test]
async fn test_reset_is_idempotent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let png = write_file(dir.path(), "hero.png", PNG_SIGNATURE);

    for reply in [r#"{"walk":"Strides"}"#, "no json at all"] {
        let analyzer = PersonaAnalyzer::new(CannedModel::replying(reply));
        let mut session = Session::new();
        session.select_image(&png).await.unwrap();
        session.analyze(&analyzer).await.unwrap();

        session.reset();
        assert_eq!(session, Session::new());

        session.reset();
        assert_eq!(session, Session::new());
        assert_eq!(session.status(), SessionStatus::Idle);
    }
}
