/// サブスクリプション重複検出・整理機能モジュール
///
/// このモジュールは、アクティブなサブスクリプションの重複検出に関連する機能を提供します：
/// - 請求サイクルごとの料金の月額換算
/// - サービス名の正規化と類似度計算
/// - 既知の競合サービスの対応表
/// - ペア単位の重複判定と貪欲クラスタリング
/// - 継続推奨・解約候補・見込み節約額の算出
pub mod canonical;
pub mod classifier;
pub mod competitors;
pub mod cost;
pub mod engine;
pub mod models;
pub mod service;
pub mod similarity;

// 公開インターフェース
pub use canonical::canonicalize;
pub use classifier::{OverlapClassifier, OverlapScore, OVERLAP_THRESHOLD};
pub use competitors::{default_map, CompetitorMap};
pub use cost::{monthly_cost, WEEKS_PER_MONTH};
pub use engine::{consolidate, consolidate_with};
pub use models::{ConsolidationResult, OverlapGroup, ServiceCost};
pub use service::consolidate_for_user;
pub use similarity::{levenshtein, similarity};
