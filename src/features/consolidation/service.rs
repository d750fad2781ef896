use super::engine::consolidate;
use super::models::ConsolidationResult;
use crate::features::subscriptions::store::SubscriptionStore;
use crate::shared::errors::AppResult;
use log::info;

/// 指定ユーザーのアクティブなサブスクリプションに対して重複検出を実行する
///
/// # 引数
/// * `store` - サブスクリプションレコードストア
/// * `user_id` - ユーザーID
///
/// # 戻り値
/// 重複検出の集計結果、またはレコード取得失敗時はエラー
///
/// # 処理内容
/// 1. ストアからアクティブなサブスクリプションのみを取得
/// 2. 重複検出エンジンで判定
/// 3. 結果の概要をログに出力
pub fn consolidate_for_user<S: SubscriptionStore>(
    store: &S,
    user_id: &str,
) -> AppResult<ConsolidationResult> {
    // アクティブなサブスクリプションのみを取得する
    let subscriptions = store.find_all(user_id, true)?;
    let result = consolidate(&subscriptions);

    info!(
        "重複検出が完了しました: 対象{}件, グループ{}件, 見込み節約額{:.2}/月",
        subscriptions.len(),
        result.overlap_count,
        result.total_potential_savings
    );

    Ok(result)
}
