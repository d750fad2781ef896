use serde::{Deserialize, Serialize};
use thiserror::Error;

/// アプリケーション全体で使用する統一エラー型
///
/// # 特性
/// - thiserrorによる自動的なDisplay実装
/// - serde_jsonエラーからの自動変換
/// - ユーザー向けメッセージと内部詳細の分離
#[derive(Error, Debug)]
pub enum AppError {
    /// データストア操作エラー
    #[error("データストアエラー: {0}")]
    Database(String),

    /// バリデーションエラー
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// リソースが見つからないエラー
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 外部サービス連携エラー
    #[error("外部サービスエラー: {0}")]
    ExternalService(String),

    /// 設定エラー
    #[error("設定エラー: {0}")]
    Configuration(String),

    /// JSON処理エラー
    #[error("JSON処理エラー: {0}")]
    Json(#[from] serde_json::Error),
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    /// 低: ユーザー入力の誤りなど、通常運用で発生しうるもの
    Low,
    /// 中: 処理は継続できるが調査が必要なもの
    Medium,
    /// 高: データ整合性に影響しうるもの
    High,
    /// 致命的: アプリケーションの動作継続が困難なもの
    Critical,
}

impl AppError {
    /// ユーザー向けのエラーメッセージを取得
    ///
    /// # 戻り値
    /// 内部実装の詳細を含まない、表示用の日本語メッセージ
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(_) => "データの保存・取得に失敗しました".to_string(),
            AppError::Validation(msg) => format!("入力内容に問題があります: {msg}"),
            AppError::NotFound(resource) => format!("{resource}が見つかりません"),
            AppError::ExternalService(_) => {
                "外部サービスとの連携に失敗しました。時間をおいて再度お試しください".to_string()
            }
            AppError::Configuration(_) => "アプリケーションの設定に問題があります".to_string(),
            AppError::Json(_) => "データの形式が正しくありません".to_string(),
        }
    }

    /// ログ出力用の詳細情報を取得
    pub fn details(&self) -> String {
        self.to_string()
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Validation(_) | AppError::NotFound(_) => ErrorSeverity::Low,
            AppError::ExternalService(_) | AppError::Json(_) => ErrorSeverity::Medium,
            AppError::Database(_) => ErrorSeverity::High,
            AppError::Configuration(_) => ErrorSeverity::Critical,
        }
    }

    /// バリデーションエラーを生成
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// リソース未発見エラーを生成
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        AppError::NotFound(resource.into())
    }

    /// データストアエラーを生成
    pub fn database<S: Into<String>>(message: S) -> Self {
        AppError::Database(message.into())
    }

    /// 外部サービスエラーを生成
    pub fn external_service<S: Into<String>>(message: S) -> Self {
        AppError::ExternalService(message.into())
    }

    /// 設定エラーを生成
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

/// フロントエンド境界でのエラー文字列変換
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.user_message()
    }
}

/// アプリケーション全体で使用する統一Result型
pub type AppResult<T> = Result<T, AppError>;
