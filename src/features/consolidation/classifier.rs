use super::canonical::canonicalize;
use super::competitors::{default_map, CompetitorMap};
use super::similarity::similarity;
use crate::features::subscriptions::models::Subscription;

/// 重複エッジとして採用するスコアのしきい値
pub const OVERLAP_THRESHOLD: f64 = 0.6;

/// カテゴリ一致の重み
pub const WEIGHT_SAME_CATEGORY: f64 = 0.3;
/// 既知の競合関係の重み
pub const WEIGHT_KNOWN_COMPETITOR: f64 = 0.7;
/// サービス名類似の重み
pub const WEIGHT_SIMILAR_NAME: f64 = 0.5;
/// 提供事業者類似の重み
pub const WEIGHT_SAME_PROVIDER: f64 = 0.4;

/// サービス名が類似とみなされる類似度のしきい値
pub const NAME_SIMILARITY_THRESHOLD: f64 = 0.7;
/// 提供事業者が同一とみなされる類似度のしきい値
pub const PROVIDER_SIMILARITY_THRESHOLD: f64 = 0.8;

// 重複理由の表示文字列。プレゼンテーション層との契約のため英語のまま固定。
pub const REASON_KNOWN_COMPETITOR: &str = "Known competing service";
pub const REASON_SIMILAR_NAME: &str = "Similar service names";
pub const REASON_SAME_PROVIDER: &str = "Same provider";
pub const REASON_SIMILAR_FUNCTIONALITY: &str = "Similar functionality";

/// ペア分類の結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapScore {
    /// 成立したシグナルの重みの合計
    pub score: f64,
    /// 最初に成立したシグナルの理由（優先度: 競合 > サービス名 > 事業者）
    pub reason: Option<&'static str>,
}

impl OverlapScore {
    /// 重複エッジとして成立するかを判定する
    ///
    /// # 戻り値
    /// スコアがしきい値（0.6）以上の場合はtrue
    pub fn is_overlap(&self) -> bool {
        self.score >= OVERLAP_THRESHOLD
    }
}

/// 2つのサブスクリプションの重複度を判定する分類器
///
/// 競合サービスマップは参照として注入する。通常は`default`で
/// プロセス共有の既定マップを使い、テストでは独自のマップに差し替える。
#[derive(Debug, Clone)]
pub struct OverlapClassifier<'a> {
    competitor_map: &'a CompetitorMap,
}

impl<'a> OverlapClassifier<'a> {
    /// 指定した競合サービスマップを使う分類器を作成する
    ///
    /// # 引数
    /// * `competitor_map` - 分類に使用する競合サービスの対応表
    pub fn new(competitor_map: &'a CompetitorMap) -> Self {
        Self { competitor_map }
    }

    /// 2つのサブスクリプションの重複スコアを計算する
    ///
    /// # 引数
    /// * `a` - 比較するサブスクリプション（競合マップの検索キー側）
    /// * `b` - 比較するサブスクリプション
    ///
    /// # 戻り値
    /// 重みの合計スコアと、最初に成立したシグナルの理由
    ///
    /// # 処理内容（評価順）
    /// 1. カテゴリ一致 → +0.3
    /// 2. 正規化名が既知の競合関係 → +0.7
    /// 3. 正規化名の類似度 > 0.7 → +0.5
    /// 4. 事業者名（小文字化）の類似度 > 0.8 → +0.4
    ///
    /// 2つのSubscriptionのみに依存する純粋関数で、失敗しない。
    pub fn classify(&self, a: &Subscription, b: &Subscription) -> OverlapScore {
        let mut score = 0.0;
        let mut reason: Option<&'static str> = None;

        // 1. カテゴリ一致
        if a.category == b.category {
            score += WEIGHT_SAME_CATEGORY;
        }

        let canonical_a = canonicalize(&a.name);
        let canonical_b = canonicalize(&b.name);

        // 2. 既知の競合関係（aをキーとした一方向検索）
        if self
            .competitor_map
            .are_competitors(&canonical_a, &canonical_b)
        {
            score += WEIGHT_KNOWN_COMPETITOR;
            if reason.is_none() {
                reason = Some(REASON_KNOWN_COMPETITOR);
            }
        }

        // 3. サービス名の類似
        if similarity(&canonical_a, &canonical_b) > NAME_SIMILARITY_THRESHOLD {
            score += WEIGHT_SIMILAR_NAME;
            if reason.is_none() {
                reason = Some(REASON_SIMILAR_NAME);
            }
        }

        // 4. 提供事業者の類似
        let provider_a = a.provider.to_lowercase();
        let provider_b = b.provider.to_lowercase();
        if similarity(&provider_a, &provider_b) > PROVIDER_SIMILARITY_THRESHOLD {
            score += WEIGHT_SAME_PROVIDER;
            if reason.is_none() {
                reason = Some(REASON_SAME_PROVIDER);
            }
        }

        OverlapScore { score, reason }
    }
}

impl Default for OverlapClassifier<'static> {
    fn default() -> Self {
        Self::new(default_map())
    }
}
