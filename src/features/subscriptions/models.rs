use serde::{Deserialize, Serialize};

/// サブスクリプションのカテゴリ
///
/// レコードストアは定義済みの値のみを返す契約だが、
/// 未知の値を受け取った場合はOtherに吸収する（パニックさせない）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Entertainment,
    Productivity,
    Gaming,
    Education,
    Health,
    Finance,
    Utilities,
    News,
    Social,
    #[serde(other)]
    Other,
}

/// 請求サイクル
///
/// 未知の値はUnknownに吸収し、月額換算では月額扱い（恒等変換）とする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
    Weekly,
    Quarterly,
    Biannual,
    #[serde(other)]
    Unknown,
}

/// サブスクリプションの状態
///
/// 重複検出はActiveのレコードのみを対象とする。
/// 未知の値はUnknownに吸収され、検出対象から外れる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
    Paused,
    Trial,
    #[serde(other)]
    Unknown,
}

/// 利用頻度
///
/// 未知の値はUnknownに吸収され、優先度は最低（Neverと同じ0）になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageFrequency {
    Daily,
    Weekly,
    Monthly,
    Rarely,
    Never,
    #[serde(other)]
    Unknown,
}

impl UsageFrequency {
    /// 推奨順位付けに使う利用頻度の優先度を返す
    ///
    /// # 戻り値
    /// daily=4, weekly=3, monthly=2, rarely=1, never=0（未知の値も0）
    pub fn priority(&self) -> u8 {
        match self {
            UsageFrequency::Daily => 4,
            UsageFrequency::Weekly => 3,
            UsageFrequency::Monthly => 2,
            UsageFrequency::Rarely => 1,
            UsageFrequency::Never | UsageFrequency::Unknown => 0,
        }
    }
}

/// サブスクリプションデータモデル
///
/// レコードストアが所有する入力データ。重複検出エンジンは
/// このモデルを読み取るだけで、一切変更しない。
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,                             // nanoId（21文字）
    pub name: String,                           // サービス名、100文字以内
    pub provider: String,                       // 提供事業者名
    pub category: Category,                     // カテゴリ
    pub cost: i64,                              // 請求サイクルごとの料金（最小通貨単位）、0以上
    pub currency: String,                       // ISO通貨コード（例: "JPY", "USD"）
    pub billing_cycle: BillingCycle,            // 請求サイクル
    pub status: SubscriptionStatus,             // 状態
    #[serde(default)]
    pub usage_frequency: Option<UsageFrequency>, // 利用頻度（未設定の場合は最低優先度扱い）
}

impl Subscription {
    /// 推奨順位付けに使う利用頻度の優先度を返す
    ///
    /// # 戻り値
    /// 利用頻度が未設定の場合は0、それ以外はUsageFrequency::priorityの値
    pub fn usage_priority(&self) -> u8 {
        self.usage_frequency.map_or(0, |f| f.priority())
    }
}

/// サブスクリプション作成用DTO
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionDto {
    pub name: String,
    pub provider: String,
    pub category: Category,
    pub cost: i64,
    pub currency: String,
    pub billing_cycle: BillingCycle,
    #[serde(default)]
    pub usage_frequency: Option<UsageFrequency>,
}

/// サブスクリプション更新用DTO
///
/// Noneのフィールドは既存の値を維持する。
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionDto {
    pub name: Option<String>,
    pub provider: Option<String>,
    pub category: Option<Category>,
    pub cost: Option<i64>,
    pub currency: Option<String>,
    pub billing_cycle: Option<BillingCycle>,
    pub status: Option<SubscriptionStatus>,
    pub usage_frequency: Option<UsageFrequency>,
}
