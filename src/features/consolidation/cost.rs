use crate::features::subscriptions::models::BillingCycle;

/// 1か月あたりの平均週数（週払いの月額換算に使用）
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// 請求サイクルごとの料金を月額に換算する
///
/// # 引数
/// * `cost` - 請求サイクルごとの料金（最小通貨単位、0以上）
/// * `billing_cycle` - 請求サイクル
///
/// # 戻り値
/// 月額換算した料金（最小通貨単位の実数）
///
/// # 特性
/// - 純粋関数であり、失敗しない
/// - 丸め処理は行わない（表示用の整形は呼び出し側の責務）
/// - 通貨コードやカテゴリには依存しない
pub fn monthly_cost(cost: i64, billing_cycle: BillingCycle) -> f64 {
    let cost = cost as f64;
    match billing_cycle {
        BillingCycle::Monthly => cost,
        BillingCycle::Yearly => cost / 12.0,
        BillingCycle::Quarterly => cost / 3.0,
        BillingCycle::Biannual => cost / 6.0,
        BillingCycle::Weekly => cost * WEEKS_PER_MONTH,
        // 未知の請求サイクルは月額扱い（意図的なフォールバック）
        BillingCycle::Unknown => cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_monthly_cost_for_each_cycle() {
        assert_eq!(monthly_cost(1200, BillingCycle::Monthly), 1200.0);
        assert_eq!(monthly_cost(1200, BillingCycle::Yearly), 100.0);
        assert_eq!(monthly_cost(1200, BillingCycle::Quarterly), 400.0);
        assert_eq!(monthly_cost(1200, BillingCycle::Biannual), 200.0);
        assert!((monthly_cost(1000, BillingCycle::Weekly) - 4330.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_cycle_falls_back_to_identity() {
        // 未知のサイクルは月額扱いになる
        assert_eq!(monthly_cost(999, BillingCycle::Unknown), 999.0);
    }

    #[test]
    fn test_zero_cost() {
        assert_eq!(monthly_cost(0, BillingCycle::Monthly), 0.0);
        assert_eq!(monthly_cost(0, BillingCycle::Yearly), 0.0);
        assert_eq!(monthly_cost(0, BillingCycle::Weekly), 0.0);
    }

    #[quickcheck]
    fn prop_monthly_cycle_is_identity(cost: u32) -> bool {
        monthly_cost(i64::from(cost), BillingCycle::Monthly) == f64::from(cost)
    }

    #[quickcheck]
    fn prop_monthly_cost_is_non_negative(cost: u32) -> bool {
        let cycles = [
            BillingCycle::Monthly,
            BillingCycle::Yearly,
            BillingCycle::Weekly,
            BillingCycle::Quarterly,
            BillingCycle::Biannual,
            BillingCycle::Unknown,
        ];
        cycles
            .iter()
            .all(|&cycle| monthly_cost(i64::from(cost), cycle) >= 0.0)
    }
}
