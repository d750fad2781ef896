use super::classifier::{OverlapClassifier, REASON_SIMILAR_FUNCTIONALITY};
use super::cost::monthly_cost;
use super::models::{ConsolidationResult, OverlapGroup, ServiceCost};
use crate::features::subscriptions::models::{Subscription, SubscriptionStatus};
use std::collections::HashSet;

/// サブスクリプション一覧から重複グループを検出する
///
/// # 引数
/// * `subscriptions` - 判定対象のサブスクリプション（Active以外は除外される）
///
/// # 戻り値
/// 重複グループ・見込み節約額・推奨文をまとめた集計結果
///
/// # 特性
/// 既定の競合サービスマップを使用する。マップを差し替える場合は
/// `consolidate_with`を使用すること。純粋な同期計算であり、I/Oや
/// 共有可変状態を持たないため、並行呼び出しに同期は不要。
pub fn consolidate(subscriptions: &[Subscription]) -> ConsolidationResult {
    consolidate_with(subscriptions, &OverlapClassifier::default())
}

/// 指定した分類器で重複グループを検出する
///
/// # 引数
/// * `subscriptions` - 判定対象のサブスクリプション（Active以外は除外される）
/// * `classifier` - ペア判定に使う分類器
///
/// # 戻り値
/// 重複グループ・見込み節約額・推奨文をまとめた集計結果。
/// アクティブなサブスクリプションが2件未満の場合は空の結果。
///
/// # 処理内容
/// 1. Activeのサブスクリプションのみを抽出
/// 2. 入力順にアンカーを選び、後続の未処理サブスクリプションと
///    ペア判定して成立したものをアンカーのグループに取り込む
/// 3. グループごとに利用頻度優先度の降順（同率は月額の昇順）で
///    並べ、先頭を継続推奨、残りを解約候補とする
///
/// # 注意
/// このクラスタリングは貪欲かつ入力順序に依存する。サブスクリプションは
/// 最初に条件を満たしたアンカーのグループにのみ属し、後からより適合する
/// アンカーが現れても再評価されない。大域最適ではないが、互換性のため
/// この挙動を変更してはならない。
pub fn consolidate_with(
    subscriptions: &[Subscription],
    classifier: &OverlapClassifier<'_>,
) -> ConsolidationResult {
    // Activeのレコードのみを対象にする
    let active: Vec<&Subscription> = subscriptions
        .iter()
        .filter(|s| s.status == SubscriptionStatus::Active)
        .collect();

    // 2件未満では重複は定義できないため、計算せずに空の結果を返す
    if active.len() < 2 {
        return ConsolidationResult::default();
    }

    let mut processed: HashSet<&str> = HashSet::new();
    let mut groups: Vec<OverlapGroup> = Vec::new();

    for (i, &anchor) in active.iter().enumerate() {
        if processed.contains(anchor.id.as_str()) {
            continue;
        }

        let mut partners: Vec<&Subscription> = Vec::new();
        let mut group_reason: Option<&'static str> = None;

        for &candidate in active.iter().skip(i + 1) {
            if processed.contains(candidate.id.as_str()) {
                continue;
            }

            let verdict = classifier.classify(anchor, candidate);
            if verdict.is_overlap() {
                // グループの理由は最初に成立したエッジのものを採用する
                if partners.is_empty() {
                    group_reason = verdict.reason;
                }
                partners.push(candidate);
                processed.insert(candidate.id.as_str());
            }
        }

        if partners.is_empty() {
            // パートナーのないアンカーはどのグループにも属さない
            continue;
        }

        processed.insert(anchor.id.as_str());
        groups.push(build_group(anchor, &partners, group_reason));
    }

    let total_potential_savings = groups.iter().map(|g| g.potential_savings).sum();
    let recommendations = groups.iter().map(format_recommendation).collect();

    ConsolidationResult {
        overlap_count: groups.len(),
        total_potential_savings,
        recommendations,
        overlap_groups: groups,
    }
}

/// アンカーとパートナーから重複グループを構築する
fn build_group(
    anchor: &Subscription,
    partners: &[&Subscription],
    reason: Option<&'static str>,
) -> OverlapGroup {
    // メンバー全員に月額換算コストを付与する
    let mut services: Vec<ServiceCost> = std::iter::once(anchor)
        .chain(partners.iter().copied())
        .map(|s| ServiceCost {
            subscription: s.clone(),
            monthly_cost: monthly_cost(s.cost, s.billing_cycle),
        })
        .collect();

    // 利用頻度優先度の降順、同率は月額の昇順
    services.sort_by(|a, b| {
        b.subscription
            .usage_priority()
            .cmp(&a.subscription.usage_priority())
            .then_with(|| a.monthly_cost.total_cmp(&b.monthly_cost))
    });

    let recommended = services[0].clone();
    let to_cancel: Vec<ServiceCost> = services[1..].to_vec();
    let potential_savings = to_cancel.iter().map(|s| s.monthly_cost).sum();

    OverlapGroup {
        category: anchor.category,
        services,
        recommended,
        to_cancel,
        potential_savings,
        // しきい値の構成上、理由なしでエッジが成立することはないが、
        // 防御的に既定の理由を用意しておく
        overlap_reason: reason.unwrap_or(REASON_SIMILAR_FUNCTIONALITY).to_string(),
    }
}

/// グループごとの表示用推奨文を組み立てる
///
/// 文字列の形式はプレゼンテーション層との契約のため英語のまま固定。
fn format_recommendation(group: &OverlapGroup) -> String {
    format!(
        "Keep {}, cancel {} other(s), save ${:.2}/month",
        group.recommended.subscription.name,
        group.to_cancel.len(),
        group.potential_savings / 100.0
    )
}
