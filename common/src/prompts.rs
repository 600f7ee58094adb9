//! プロンプト定義
//!
//! リクエストごとにテンプレート展開はしない。画像以外は常に同じ文面。

/// ペルソナ解析の指示文
pub const PERSONA_PROMPT: &str = r#"Analyze this character image and provide a detailed description of the following aspects:
1. Voice Style: How would this character likely speak? Tone, manner, and speech patterns.
2. Walking Style: How would this character move and walk? Posture, gait, and movement style.
3. Fashion Style: Describe the character's clothing style, aesthetic, and fashion choices.
4. Personality Traits: What personality traits does this character likely have based on their appearance?

Format your response as a JSON object with these keys: voice, walk, style, personality.
Each value should be a detailed description (1-2 sentences)."#;

/// 応答JSONに期待するキー
pub const PERSONA_KEYS: [&str; 4] = ["voice", "walk", "style", "personality"];
