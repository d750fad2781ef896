use crate::features::subscriptions::models::{Category, Subscription};
use serde::{Deserialize, Serialize};

/// 月額換算コストを付与したサブスクリプション
///
/// 重複グループのメンバー表現。エンジン実行中にのみ生成され、
/// 永続化されることはない。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCost {
    #[serde(flatten)]
    pub subscription: Subscription,
    /// 月額換算した料金（最小通貨単位の実数）
    pub monthly_cost: f64,
}

/// 重複グループ
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapGroup {
    /// グループのカテゴリ（アンカーとなったサブスクリプションのカテゴリ）
    pub category: Category,
    /// グループの全メンバー（利用頻度優先度の降順、同率は月額の昇順）
    pub services: Vec<ServiceCost>,
    /// 継続を推奨するサブスクリプション（ソート後の先頭）
    pub recommended: ServiceCost,
    /// 解約候補（ソート後の残り、順序維持）
    pub to_cancel: Vec<ServiceCost>,
    /// 解約候補の月額合計（見込み節約額、最小通貨単位）
    pub potential_savings: f64,
    /// グループ形成のきっかけとなった重複理由
    pub overlap_reason: String,
}

/// 重複検出の集計結果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidationResult {
    /// 検出された重複グループ
    pub overlap_groups: Vec<OverlapGroup>,
    /// 全グループ合計の見込み節約額（月額、最小通貨単位）
    pub total_potential_savings: f64,
    /// 重複グループ数
    pub overlap_count: usize,
    /// 表示用の推奨文のリスト（グループごとに1件）
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::subscriptions::models::{BillingCycle, SubscriptionStatus};

    #[test]
    fn test_service_cost_serializes_flattened() {
        let service = ServiceCost {
            subscription: Subscription {
                id: "V1StGXR8_Z5jdHi6B-myT".to_string(),
                name: "Netflix".to_string(),
                provider: "Netflix, Inc.".to_string(),
                category: Category::Entertainment,
                cost: 1599,
                currency: "USD".to_string(),
                billing_cycle: BillingCycle::Monthly,
                status: SubscriptionStatus::Active,
                usage_frequency: None,
            },
            monthly_cost: 1599.0,
        };

        let json = serde_json::to_value(&service).unwrap();

        // サブスクリプションのフィールドとmonthlyCostが同じ階層に並ぶ
        assert_eq!(json["name"], "Netflix");
        assert_eq!(json["billingCycle"], "monthly");
        assert_eq!(json["monthlyCost"], 1599.0);
    }

    #[test]
    fn test_consolidation_result_default_is_empty() {
        let result = ConsolidationResult::default();

        assert!(result.overlap_groups.is_empty());
        assert_eq!(result.total_potential_savings, 0.0);
        assert_eq!(result.overlap_count, 0);
        assert!(result.recommendations.is_empty());
    }
}
