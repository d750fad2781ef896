// 機能モジュール構造
pub mod features;
pub mod shared;

// 主要な公開インターフェースの再エクスポート
pub use features::consolidation::{
    canonicalize, consolidate, consolidate_for_user, consolidate_with, monthly_cost, similarity,
    CompetitorMap, ConsolidationResult, OverlapClassifier, OverlapGroup, OverlapScore, ServiceCost,
};
pub use features::spending::{
    monthly_total, monthly_total_for_user, summarize, summarize_for_user, SpendingSummary,
};
pub use features::subscriptions::{
    BillingCycle, Category, CreateSubscriptionDto, InMemorySubscriptionStore, Subscription,
    SubscriptionStatus, SubscriptionStore, UpdateSubscriptionDto, UsageFrequency,
};
pub use shared::errors::{AppError, AppResult};
