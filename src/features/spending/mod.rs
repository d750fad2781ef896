// サブスクリプション支出集計機能モジュール
//
// アクティブなサブスクリプションの月額合計とカテゴリ別内訳を算出する。
// 月額換算は重複検出と同じロジックを使用する。

use crate::features::consolidation::cost::monthly_cost;
use crate::features::subscriptions::models::{Category, Subscription, SubscriptionStatus};
use crate::features::subscriptions::store::SubscriptionStore;
use crate::shared::errors::AppResult;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// サブスクリプション支出のサマリー
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingSummary {
    /// アクティブなサブスクリプションの月額合計（最小通貨単位）
    pub monthly_total: f64,
    /// カテゴリ別の月額合計
    pub by_category: BTreeMap<Category, f64>,
    /// アクティブなサブスクリプション数
    pub active_count: usize,
}

/// アクティブなサブスクリプションの月額合計を計算する
///
/// # 引数
/// * `subscriptions` - 集計対象のサブスクリプション（Active以外は除外される）
///
/// # 戻り値
/// 月額換算した料金の合計（最小通貨単位の実数）
pub fn monthly_total(subscriptions: &[Subscription]) -> f64 {
    subscriptions
        .iter()
        .filter(|s| s.status == SubscriptionStatus::Active)
        .fold(0.0, |acc, s| acc + monthly_cost(s.cost, s.billing_cycle))
}

/// アクティブなサブスクリプションの支出サマリーを作成する
///
/// # 引数
/// * `subscriptions` - 集計対象のサブスクリプション（Active以外は除外される）
///
/// # 戻り値
/// 月額合計・カテゴリ別内訳・アクティブ件数のサマリー
pub fn summarize(subscriptions: &[Subscription]) -> SpendingSummary {
    let mut by_category: BTreeMap<Category, f64> = BTreeMap::new();
    let mut total = 0.0;
    let mut active_count = 0;

    for subscription in subscriptions
        .iter()
        .filter(|s| s.status == SubscriptionStatus::Active)
    {
        let monthly = monthly_cost(subscription.cost, subscription.billing_cycle);
        *by_category.entry(subscription.category).or_insert(0.0) += monthly;
        total += monthly;
        active_count += 1;
    }

    SpendingSummary {
        monthly_total: total,
        by_category,
        active_count,
    }
}

/// 指定ユーザーの月額合計を取得する
///
/// # 引数
/// * `store` - サブスクリプションレコードストア
/// * `user_id` - ユーザーID
///
/// # 戻り値
/// 月額合計、またはレコード取得失敗時はエラー
pub fn monthly_total_for_user<S: SubscriptionStore>(store: &S, user_id: &str) -> AppResult<f64> {
    let subscriptions = store.find_all(user_id, true)?;
    Ok(monthly_total(&subscriptions))
}

/// 指定ユーザーの支出サマリーを取得する
///
/// # 引数
/// * `store` - サブスクリプションレコードストア
/// * `user_id` - ユーザーID
///
/// # 戻り値
/// 支出サマリー、またはレコード取得失敗時はエラー
pub fn summarize_for_user<S: SubscriptionStore>(
    store: &S,
    user_id: &str,
) -> AppResult<SpendingSummary> {
    let subscriptions = store.find_all(user_id, true)?;
    let summary = summarize(&subscriptions);

    info!(
        "支出サマリーを作成しました: アクティブ{}件, 月額合計{:.2}",
        summary.active_count, summary.monthly_total
    );

    Ok(summary)
}
