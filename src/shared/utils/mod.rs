/// ID生成ユーティリティ
pub mod nanoid;

use crate::shared::errors::{AppError, AppResult};

// 便利な再エクスポート
pub use self::nanoid::{generate_record_id, is_valid_nanoid};

/// 必須フィールドのバリデーション
///
/// # 引数
/// * `text` - 検証対象の文字列
/// * `field_name` - フィールド名（エラーメッセージ用）
///
/// # 戻り値
/// 空でない場合はOk(())、空の場合はエラー
pub fn validate_required_field(text: &str, field_name: &str) -> AppResult<()> {
    if text.trim().is_empty() {
        return Err(AppError::validation(format!("{field_name}は必須項目です")));
    }
    Ok(())
}

/// 文字列の長さバリデーション
///
/// # 引数
/// * `text` - 検証対象の文字列
/// * `max_length` - 最大文字数
/// * `field_name` - フィールド名（エラーメッセージ用）
///
/// # 戻り値
/// 有効な長さの場合はOk(())、無効な場合はエラー
pub fn validate_text_length(text: &str, max_length: usize, field_name: &str) -> AppResult<()> {
    let char_count = text.chars().count();
    if char_count > max_length {
        return Err(AppError::validation(format!(
            "{field_name}は{max_length}文字以内で入力してください（現在: {char_count}文字）"
        )));
    }
    Ok(())
}

/// 料金（最小通貨単位）のバリデーション
///
/// # 引数
/// * `cost` - 請求サイクルごとの料金（セントなどの最小通貨単位）
///
/// # 戻り値
/// 有効な料金の場合はOk(())、無効な場合はエラー
///
/// # バリデーション規則
/// - 0以上であること（無料トライアル中のサブスクリプションは0を許容）
/// - 10桁以内であること
pub fn validate_cost(cost: i64) -> AppResult<()> {
    if cost < 0 {
        return Err(AppError::validation("料金は0以上で入力してください"));
    }

    if cost >= 10_000_000_000 {
        return Err(AppError::validation("料金は10桁以内で入力してください"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_field() {
        // 有効な値
        assert!(validate_required_field("有効な値", "テスト").is_ok());
        assert!(validate_required_field("  有効な値  ", "テスト").is_ok()); // 前後の空白は許可

        // 無効な値
        assert!(validate_required_field("", "テスト").is_err());
        assert!(validate_required_field("   ", "テスト").is_err()); // 空白のみ
    }

    #[test]
    fn test_validate_text_length() {
        // 有効な長さ
        assert!(validate_text_length("短いテキスト", 10, "テスト").is_ok());
        assert!(validate_text_length("", 10, "テスト").is_ok());

        // 無効な長さ
        assert!(validate_text_length("これは非常に長いテキストです", 5, "テスト").is_err());
    }

    #[test]
    fn test_validate_cost() {
        // 有効な料金
        assert!(validate_cost(0).is_ok()); // 無料トライアル
        assert!(validate_cost(1599).is_ok());
        assert!(validate_cost(9_999_999_999).is_ok());

        // 無効な料金
        assert!(validate_cost(-1).is_err()); // 負の数
        assert!(validate_cost(10_000_000_000).is_err()); // 上限超過
    }
}
