use crate::shared::errors::{AppError, AppResult};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// 業種ごとの既知の競合サービスグループ（正規化済みキー）
///
/// 同一グループ内のサービスは相互に競合として扱われる。
const COMPETITOR_GROUPS: &[&[&str]] = &[
    // 動画ストリーミング
    &[
        "netflix",
        "prime_video",
        "disney_plus",
        "apple_tv_plus",
        "hulu",
        "hbo_max",
        "paramount_plus",
    ],
    // 音楽ストリーミング
    &[
        "spotify",
        "apple_music",
        "amazon_music",
        "youtube_music",
        "tidal",
        "pandora",
    ],
    // クラウドストレージ
    &["google_drive", "icloud", "dropbox", "onedrive", "box"],
    // オフィススイート
    &["microsoft_365", "google_workspace", "apple_iwork"],
    // パスワード管理
    &["lastpass", "1password", "bitwarden", "dashlane", "keeper"],
    // VPN
    &[
        "nordvpn",
        "expressvpn",
        "surfshark",
        "cyberghost",
        "pia",
        "protonvpn",
    ],
    // メール
    &["gmail", "outlook", "yahoo_mail", "protonmail"],
    // ビデオ会議
    &["zoom", "teams", "google_meet", "webex", "gotomeeting"],
];

/// 既知の競合サービスの対応表
///
/// 正規化済みサービス名から、競合する正規化済みサービス名の集合への
/// マッピング。プロセス起動後は読み取り専用として扱う。
#[derive(Debug, Clone)]
pub struct CompetitorMap {
    entries: HashMap<String, HashSet<String>>,
}

impl CompetitorMap {
    /// 業種グループのリストから対応表を構築する
    ///
    /// # 引数
    /// * `groups` - 正規化済みサービス名のグループのリスト
    ///
    /// # 戻り値
    /// グループ内の全サービスを相互に競合として登録した対応表
    ///
    /// # 特性
    /// グループから構築するため、対称性（AがBを列挙するならBもAを列挙する）
    /// は構築時に保証される。
    pub fn from_groups(groups: &[&[&str]]) -> Self {
        let mut entries: HashMap<String, HashSet<String>> = HashMap::new();

        for group in groups {
            for service in group.iter() {
                let competitors = entries.entry(service.to_string()).or_default();
                for other in group.iter() {
                    if other != service {
                        competitors.insert(other.to_string());
                    }
                }
            }
        }

        Self { entries }
    }

    /// 生のエントリから対応表を構築する
    ///
    /// # 引数
    /// * `entries` - サービス名から競合サービス集合へのマッピング
    ///
    /// # 注意
    /// 対称性は呼び出し側が保証すること。`validate`で検証できる。
    pub fn from_entries(entries: HashMap<String, HashSet<String>>) -> Self {
        Self { entries }
    }

    /// 2つの正規化済みサービス名が既知の競合関係にあるかを判定する
    ///
    /// # 引数
    /// * `service` - 検索キーとなる正規化済みサービス名
    /// * `other` - 競合候補の正規化済みサービス名
    ///
    /// # 戻り値
    /// `other`が`service`の競合リストに含まれる場合はtrue
    ///
    /// # 注意
    /// 検索は第1引数をキーとした一方向で行う。対称性が保たれていれば
    /// 引数の順序は結果に影響しない。
    pub fn are_competitors(&self, service: &str, other: &str) -> bool {
        self.entries
            .get(service)
            .map_or(false, |competitors| competitors.contains(other))
    }

    /// 指定サービスの競合サービス集合を取得する
    ///
    /// # 引数
    /// * `service` - 正規化済みサービス名
    ///
    /// # 戻り値
    /// 競合サービスの集合。未登録のサービスの場合はNone
    pub fn competitors_of(&self, service: &str) -> Option<&HashSet<String>> {
        self.entries.get(service)
    }

    /// 対称性の不変条件を検証する
    ///
    /// # 戻り値
    /// 全エントリが対称な場合はOk(())、崩れている場合はエラー
    ///
    /// # 注意
    /// 対称性が崩れていてもクラッシュはしないが、ペアの評価順序に
    /// よって判定結果が変わるため、マップ拡張時はこの検証を通すこと。
    pub fn validate(&self) -> AppResult<()> {
        for (service, competitors) in &self.entries {
            for competitor in competitors {
                let reciprocal = self
                    .entries
                    .get(competitor)
                    .map_or(false, |set| set.contains(service));
                if !reciprocal {
                    return Err(AppError::validation(format!(
                        "競合サービスマップの対称性が崩れています: {service} -> {competitor} の逆方向エントリがありません"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for CompetitorMap {
    fn default() -> Self {
        Self::from_groups(COMPETITOR_GROUPS)
    }
}

/// プロセス全体で共有する既定の競合サービスマップ
static DEFAULT_MAP: Lazy<CompetitorMap> = Lazy::new(CompetitorMap::default);

/// 既定の競合サービスマップへの参照を取得する
///
/// # 戻り値
/// プロセス存続期間中有効な、読み取り専用の対応表への参照
pub fn default_map() -> &'static CompetitorMap {
    &DEFAULT_MAP
}
