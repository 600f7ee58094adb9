//! APIレスポンスパーサー
//!
//! モデルの応答はきれいなJSONとは限らない（説明文やコードフェンスで囲まれる）。
//! 2段階で処理する:
//! 1. `extract_json_object`: 最初の `{` から最後の `}` までを取り出す
//! 2. `parse_and_backfill`: JSONとして解釈し、欠けたフィールドをデフォルト文言で補完

use crate::error::{Error, Result};
use crate::types::{
    PersonaResult, DEFAULT_PERSONALITY, DEFAULT_STYLE, DEFAULT_VOICE, DEFAULT_WALK,
};
use serde_json::{Map, Value};

/// 応答からJSONオブジェクトらしき部分を抽出
///
/// 最初の `{` から最後の `}` まで（貪欲マッチ）。
/// 括弧の対応はここでは検証しない。
///
/// # Examples
/// ```
/// use character_profiler_common::extract_json_object;
///
/// let reply = "Sure! {\"voice\": \"soft\"} Hope this helps.";
/// assert_eq!(extract_json_object(reply), Some("{\"voice\": \"soft\"}"));
/// assert_eq!(extract_json_object("no braces"), None);
/// ```
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// JSON文字列をPersonaResultに変換
///
/// - キーが無い、または値がnull/false/0/空文字ならデフォルト文言
/// - 文字列以外の値は文字列化して採用
/// - 余分なキーは無視
pub fn parse_and_backfill(json_text: &str) -> Result<PersonaResult> {
    let map: Map<String, Value> = serde_json::from_str(json_text)?;

    Ok(PersonaResult {
        voice: field_or(&map, "voice", DEFAULT_VOICE),
        walk: field_or(&map, "walk", DEFAULT_WALK),
        style: field_or(&map, "style", DEFAULT_STYLE),
        personality: field_or(&map, "personality", DEFAULT_PERSONALITY),
    })
}

/// モデル応答全体をパース（抽出 → 解釈）
pub fn parse_persona_response(response: &str) -> Result<PersonaResult> {
    let json_str = extract_json_object(response).ok_or(Error::NoJsonObject)?;
    parse_and_backfill(json_str)
}

fn field_or(map: &Map<String, Value>, key: &str, default: &str) -> String {
    map.get(key)
        .and_then(present_text)
        .unwrap_or_else(|| default.to_string())
}

fn present_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
