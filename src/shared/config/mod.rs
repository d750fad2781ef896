/// 環境設定管理モジュール
pub mod environment;

// 便利な再エクスポート
pub use environment::{
    get_environment, initialize_logging_system, load_environment_variables, Environment,
    EnvironmentConfig,
};
