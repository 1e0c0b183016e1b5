//! セーブ/ロード機能。
//!
//! ## バージョニング方針
//!
//! - `SAVE_VERSION`: 現在のセーブ形式バージョン。フィールド追加時にインクリメントする。
//! - `MIN_COMPATIBLE_VERSION`: 互換性を維持できる最小バージョン。
//!   新フィールドの追加のみの場合はこの値を変えない（旧データを維持できる）。
//!   既存フィールドの意味変更や削除など破壊的変更を行った場合のみインクリメントする。
//!
//! 読み込みはフィールド単位で寛容に行う。欠けているフィールドや型の合わない値は
//! そのフィールドだけデフォルト値にフォールバックし、残りはそのまま復元する。
//! JSON として壊れているデータ、または `MIN_COMPATIBLE_VERSION` 未満のデータは
//! 「セーブなし」として扱い、ストレージから削除する。

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{info, warn};

use super::state::{ChallengeSnapshot, PlayerState, Settings};
use crate::error::SaveError;
use crate::storage::Storage;

/// セーブデータのフォーマットバージョン。
/// フィールド追加時にインクリメントすること。
pub const SAVE_VERSION: u32 = 1;

/// 互換性を維持できる最小バージョン。
pub const MIN_COMPATIBLE_VERSION: u32 = 1;

/// デフォルトのストレージキー。
pub const STORAGE_KEY: &str = "hoops_idle_save";

/// シリアライズ用のセーブデータ構造体。
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveData {
    #[serde(default)]
    pub version: u32,
    pub state: GameSave,
    /// 保存時刻 (UNIX ミリ秒)。
    #[serde(default, deserialize_with = "lenient")]
    pub timestamp: Option<u64>,
}

/// プレイヤー状態の永続化形式。全フィールド省略可能。
/// トリビアのプロンプトや実績ポップアップなど一時的なUI状態は含まない。
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSave {
    #[serde(deserialize_with = "lenient")]
    score: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    ap: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    ap_spent: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    rebirths: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    total_clicks: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    total_score: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    click_mult: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    auto_per_sec: Option<f64>,

    // ボール
    #[serde(deserialize_with = "lenient")]
    current_ball: Option<String>,
    #[serde(deserialize_with = "lenient")]
    unlocked_balls: Option<BTreeSet<String>>,

    // 永続的な購入・実績
    #[serde(deserialize_with = "lenient")]
    completed_achievements: Option<BTreeSet<String>>,
    #[serde(deserialize_with = "lenient")]
    bought_ap_upgrades: Option<BTreeSet<String>>,
    #[serde(deserialize_with = "lenient")]
    bought_prestige_upgrades: Option<BTreeSet<String>>,

    // ラン単位のトリビア・マイルストーン
    #[serde(deserialize_with = "lenient")]
    trivia_milestones_done: Option<BTreeSet<u64>>,
    #[serde(deserialize_with = "lenient")]
    trivia_asked_this_run: Option<BTreeSet<usize>>,
    #[serde(deserialize_with = "lenient")]
    run_milestones_celebrated: Option<BTreeSet<u64>>,

    // 統計
    #[serde(deserialize_with = "lenient")]
    clicks_in_10s: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    login_streak: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    last_login_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient")]
    trivia_answered: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    trivia_correct: Option<u32>,

    // チャレンジ
    #[serde(deserialize_with = "lenient")]
    challenge_last_daily_reset: Option<String>,
    #[serde(deserialize_with = "lenient")]
    challenge_last_weekly_reset: Option<String>,
    #[serde(deserialize_with = "lenient")]
    challenge_day_snapshot: Option<ChallengeSnapshot>,
    #[serde(deserialize_with = "lenient")]
    challenge_week_snapshot: Option<ChallengeSnapshot>,
    #[serde(deserialize_with = "lenient")]
    challenge_claimed: Option<BTreeMap<String, bool>>,

    #[serde(deserialize_with = "lenient")]
    settings: Option<Settings>,
}

/// 値を一旦 JSON として受け取り、`T` に変換できなければ `None` にする。
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// PlayerState からセーブ用データを抽出する。
pub fn extract_save(p: &PlayerState, timestamp_ms: u64) -> SaveData {
    SaveData {
        version: SAVE_VERSION,
        timestamp: Some(timestamp_ms),
        state: GameSave {
            score: Some(p.score),
            ap: Some(p.ap),
            ap_spent: Some(p.ap_spent),
            rebirths: Some(p.rebirths),
            total_clicks: Some(p.total_clicks),
            total_score: Some(p.total_score),
            click_mult: Some(p.click_mult),
            auto_per_sec: Some(p.auto_per_sec),
            current_ball: Some(p.current_ball.clone()),
            unlocked_balls: Some(p.unlocked_balls.clone()),
            completed_achievements: Some(p.completed_achievements.clone()),
            bought_ap_upgrades: Some(p.bought_ap_upgrades.clone()),
            bought_prestige_upgrades: Some(p.bought_prestige_upgrades.clone()),
            trivia_milestones_done: Some(p.trivia_milestones_done.clone()),
            trivia_asked_this_run: Some(p.trivia_asked_this_run.clone()),
            run_milestones_celebrated: Some(p.run_milestones_celebrated.clone()),
            clicks_in_10s: Some(p.clicks_in_10s),
            login_streak: Some(p.login_streak),
            last_login_date: p.last_login_date,
            trivia_answered: Some(p.trivia_answered),
            trivia_correct: Some(p.trivia_correct),
            challenge_last_daily_reset: p.challenge_last_daily_reset.clone(),
            challenge_last_weekly_reset: p.challenge_last_weekly_reset.clone(),
            challenge_day_snapshot: p.challenge_day_snapshot.clone(),
            challenge_week_snapshot: p.challenge_week_snapshot.clone(),
            challenge_claimed: Some(p.challenge_claimed.clone()),
            settings: Some(p.settings.clone()),
        },
    }
}

/// セーブデータから PlayerState を復元する。存在しないフィールドは初期値のまま。
/// 復元後に不変条件を修復する。
pub fn apply_save(save: GameSave) -> PlayerState {
    let mut p = PlayerState::new();
    macro_rules! restore {
        ($($field:ident),* $(,)?) => {
            $(if let Some(v) = save.$field { p.$field = v; })*
        };
    }
    restore!(
        score,
        ap,
        ap_spent,
        rebirths,
        total_clicks,
        total_score,
        click_mult,
        auto_per_sec,
        current_ball,
        unlocked_balls,
        completed_achievements,
        bought_ap_upgrades,
        bought_prestige_upgrades,
        trivia_milestones_done,
        trivia_asked_this_run,
        run_milestones_celebrated,
        clicks_in_10s,
        login_streak,
        trivia_answered,
        trivia_correct,
        challenge_claimed,
        settings,
    );
    p.last_login_date = save.last_login_date;
    p.challenge_last_daily_reset = save.challenge_last_daily_reset;
    p.challenge_last_weekly_reset = save.challenge_last_weekly_reset;
    p.challenge_day_snapshot = save.challenge_day_snapshot;
    p.challenge_week_snapshot = save.challenge_week_snapshot;
    p.normalize();
    p
}

/// JSON 文字列をセーブデータとして解釈する。
/// 壊れている、またはバージョンが古すぎる場合は `None`。
pub fn decode(json: &str) -> Option<PlayerState> {
    let data: SaveData = match serde_json::from_str(json) {
        Ok(d) => d,
        Err(e) => {
            warn!(error = %e, "セーブデータのパースに失敗（破棄します）");
            return None;
        }
    };
    if data.version < MIN_COMPATIBLE_VERSION {
        info!(
            saved = data.version,
            min_compatible = MIN_COMPATIBLE_VERSION,
            "セーブバージョンが古すぎます。新規ゲームを開始します"
        );
        return None;
    }
    if data.version < SAVE_VERSION {
        info!(
            saved = data.version,
            current = SAVE_VERSION,
            "旧バージョンのセーブデータをマイグレーション"
        );
    }
    Some(apply_save(data.state))
}

pub fn encode(p: &PlayerState, timestamp_ms: u64) -> Result<String, SaveError> {
    Ok(serde_json::to_string(&extract_save(p, timestamp_ms))?)
}

/// ゲーム状態を保存する。
pub fn save_game(
    storage: &mut dyn Storage,
    key: &str,
    p: &PlayerState,
    timestamp_ms: u64,
) -> Result<(), SaveError> {
    let json = encode(p, timestamp_ms)?;
    storage.set(key, &json)?;
    Ok(())
}

/// ゲーム状態を復元する。セーブが無い・読めない場合は `None`（新規ゲームになる）。
/// 壊れたデータや互換性のないデータは削除する。
pub fn load_game(storage: &mut dyn Storage, key: &str) -> Option<PlayerState> {
    let json = match storage.get(key) {
        Ok(Some(j)) => j,
        Ok(None) => return None,
        Err(e) => {
            warn!(error = %e, "ストレージからの読み込みに失敗");
            return None;
        }
    };
    let loaded = decode(&json);
    if loaded.is_none() {
        delete_save(storage, key);
    }
    loaded
}

/// セーブデータを削除する。
pub fn delete_save(storage: &mut dyn Storage, key: &str) {
    if let Err(e) = storage.remove(key) {
        warn!(error = %e, "セーブデータの削除に失敗");
    }
}
