/// サブスクリプション機能モジュール
///
/// このモジュールは、サブスクリプションレコードの管理に関連する機能を提供します：
/// - サブスクリプションのデータモデルと列挙型
/// - レコードストアの抽象化（SubscriptionStoreトレイト）
/// - インメモリの参照実装
pub mod models;
pub mod store;

// 公開インターフェース
pub use models::{
    BillingCycle, Category, CreateSubscriptionDto, Subscription, SubscriptionStatus,
    UpdateSubscriptionDto, UsageFrequency,
};

pub use store::{InMemorySubscriptionStore, SubscriptionStore};
