use super::models::{
    CreateSubscriptionDto, Subscription, SubscriptionStatus, UpdateSubscriptionDto,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{
    generate_record_id, validate_cost, validate_required_field, validate_text_length,
};
use std::collections::HashMap;

/// サブスクリプションレコードストアの抽象化
///
/// 重複検出エンジンはこのトレイト経由でレコードを取得する。
/// 永続化方式（SQLite、APIサーバーなど）は実装側の責務。
pub trait SubscriptionStore {
    /// サブスクリプション一覧を取得する
    ///
    /// # 引数
    /// * `user_id` - ユーザーID
    /// * `active_only` - アクティブなサブスクリプションのみを取得するか
    ///
    /// # 戻り値
    /// サービス名順のサブスクリプションのリスト、または失敗時はエラー
    fn find_all(&self, user_id: &str, active_only: bool) -> AppResult<Vec<Subscription>>;

    /// IDでサブスクリプションを取得する
    ///
    /// # 引数
    /// * `id` - サブスクリプションID
    /// * `user_id` - ユーザーID
    ///
    /// # 戻り値
    /// サブスクリプション、または失敗時はエラー
    fn find_by_id(&self, id: &str, user_id: &str) -> AppResult<Subscription>;

    /// サブスクリプションを作成する
    ///
    /// # 引数
    /// * `dto` - サブスクリプション作成用DTO
    /// * `user_id` - ユーザーID
    ///
    /// # 戻り値
    /// 作成されたサブスクリプション（状態はActive）、または失敗時はエラー
    fn create(&mut self, dto: CreateSubscriptionDto, user_id: &str) -> AppResult<Subscription>;

    /// サブスクリプションを更新する
    ///
    /// # 引数
    /// * `id` - サブスクリプションID
    /// * `dto` - サブスクリプション更新用DTO（Noneのフィールドは既存の値を維持）
    /// * `user_id` - ユーザーID
    ///
    /// # 戻り値
    /// 更新されたサブスクリプション、または失敗時はエラー
    fn update(
        &mut self,
        id: &str,
        dto: UpdateSubscriptionDto,
        user_id: &str,
    ) -> AppResult<Subscription>;

    /// サブスクリプションを解約済みにする
    ///
    /// # 引数
    /// * `id` - サブスクリプションID
    /// * `user_id` - ユーザーID
    ///
    /// # 戻り値
    /// 更新されたサブスクリプション、または失敗時はエラー
    fn cancel(&mut self, id: &str, user_id: &str) -> AppResult<Subscription>;

    /// サブスクリプションを削除する
    ///
    /// # 引数
    /// * `id` - サブスクリプションID
    /// * `user_id` - ユーザーID
    ///
    /// # 戻り値
    /// 成功時はOk(())、失敗時はエラー
    fn delete(&mut self, id: &str, user_id: &str) -> AppResult<()>;
}

/// インメモリのサブスクリプションレコードストア
///
/// ユーザーIDごとにレコードを保持する参照実装。
/// テストおよび永続化層を持たない組み込み用途向け。
#[derive(Debug, Default)]
pub struct InMemorySubscriptionStore {
    records: HashMap<String, Vec<Subscription>>,
}

impl InMemorySubscriptionStore {
    /// 空のストアを作成する
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    fn not_found(id: &str) -> AppError {
        AppError::NotFound(format!("ID {id} のサブスクリプションが見つかりません"))
    }

    fn validate_create_dto(dto: &CreateSubscriptionDto) -> AppResult<()> {
        validate_required_field(&dto.name, "サービス名")?;
        validate_text_length(&dto.name, 100, "サービス名")?;
        validate_required_field(&dto.provider, "提供事業者")?;
        validate_required_field(&dto.currency, "通貨コード")?;
        validate_cost(dto.cost)?;
        Ok(())
    }

    fn validate_update_dto(dto: &UpdateSubscriptionDto) -> AppResult<()> {
        if let Some(name) = &dto.name {
            validate_required_field(name, "サービス名")?;
            validate_text_length(name, 100, "サービス名")?;
        }
        if let Some(provider) = &dto.provider {
            validate_required_field(provider, "提供事業者")?;
        }
        if let Some(currency) = &dto.currency {
            validate_required_field(currency, "通貨コード")?;
        }
        if let Some(cost) = dto.cost {
            validate_cost(cost)?;
        }
        Ok(())
    }
}

impl SubscriptionStore for InMemorySubscriptionStore {
    fn find_all(&self, user_id: &str, active_only: bool) -> AppResult<Vec<Subscription>> {
        let mut subscriptions: Vec<Subscription> = self
            .records
            .get(user_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|s| !active_only || s.status == SubscriptionStatus::Active)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        // サービス名順で返す
        subscriptions.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(subscriptions)
    }

    fn find_by_id(&self, id: &str, user_id: &str) -> AppResult<Subscription> {
        self.records
            .get(user_id)
            .and_then(|records| records.iter().find(|s| s.id == id))
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    fn create(&mut self, dto: CreateSubscriptionDto, user_id: &str) -> AppResult<Subscription> {
        Self::validate_create_dto(&dto)?;

        let subscription = Subscription {
            id: generate_record_id(),
            name: dto.name,
            provider: dto.provider,
            category: dto.category,
            cost: dto.cost,
            currency: dto.currency,
            billing_cycle: dto.billing_cycle,
            status: SubscriptionStatus::Active,
            usage_frequency: dto.usage_frequency,
        };

        self.records
            .entry(user_id.to_string())
            .or_default()
            .push(subscription.clone());

        Ok(subscription)
    }

    fn update(
        &mut self,
        id: &str,
        dto: UpdateSubscriptionDto,
        user_id: &str,
    ) -> AppResult<Subscription> {
        Self::validate_update_dto(&dto)?;

        let slot = self
            .records
            .get_mut(user_id)
            .and_then(|records| records.iter_mut().find(|s| s.id == id))
            .ok_or_else(|| Self::not_found(id))?;

        // 更新するフィールドを決定（Noneは既存の値を維持）
        let existing = slot.clone();
        *slot = Subscription {
            id: existing.id,
            name: dto.name.unwrap_or(existing.name),
            provider: dto.provider.unwrap_or(existing.provider),
            category: dto.category.unwrap_or(existing.category),
            cost: dto.cost.unwrap_or(existing.cost),
            currency: dto.currency.unwrap_or(existing.currency),
            billing_cycle: dto.billing_cycle.unwrap_or(existing.billing_cycle),
            status: dto.status.unwrap_or(existing.status),
            usage_frequency: dto.usage_frequency.or(existing.usage_frequency),
        };

        Ok(slot.clone())
    }

    fn cancel(&mut self, id: &str, user_id: &str) -> AppResult<Subscription> {
        let slot = self
            .records
            .get_mut(user_id)
            .and_then(|records| records.iter_mut().find(|s| s.id == id))
            .ok_or_else(|| Self::not_found(id))?;

        slot.status = SubscriptionStatus::Cancelled;
        Ok(slot.clone())
    }

    fn delete(&mut self, id: &str, user_id: &str) -> AppResult<()> {
        let records = self
            .records
            .get_mut(user_id)
            .ok_or_else(|| Self::not_found(id))?;

        let before = records.len();
        records.retain(|s| s.id != id);

        if records.len() == before {
            return Err(Self::not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::subscriptions::models::{BillingCycle, Category, UsageFrequency};
    use crate::shared::utils::is_valid_nanoid;

    fn create_dto(name: &str) -> CreateSubscriptionDto {
        CreateSubscriptionDto {
            name: name.to_string(),
            provider: "Test Provider".to_string(),
            category: Category::Entertainment,
            cost: 1000,
            currency: "USD".to_string(),
            billing_cycle: BillingCycle::Monthly,
            usage_frequency: Some(UsageFrequency::Weekly),
        }
    }

    #[test]
    fn test_create_assigns_id_and_active_status() {
        let mut store = InMemorySubscriptionStore::new();
        let created = store.create(create_dto("Netflix"), "user_1").unwrap();

        assert!(is_valid_nanoid(&created.id));
        assert_eq!(created.status, SubscriptionStatus::Active);
        assert_eq!(created.name, "Netflix");
    }

    #[test]
    fn test_create_rejects_invalid_input() {
        let mut store = InMemorySubscriptionStore::new();

        // 空のサービス名
        let mut dto = create_dto("");
        assert!(store.create(dto, "user_1").is_err());

        // 101文字のサービス名
        dto = create_dto(&"a".repeat(101));
        assert!(store.create(dto, "user_1").is_err());

        // 負の料金
        dto = create_dto("Netflix");
        dto.cost = -1;
        assert!(store.create(dto, "user_1").is_err());
    }

    #[test]
    fn test_find_by_id() {
        let mut store = InMemorySubscriptionStore::new();
        let created = store.create(create_dto("Netflix"), "user_1").unwrap();

        let found = store.find_by_id(&created.id, "user_1").unwrap();
        assert_eq!(found.name, "Netflix");

        // 存在しないID
        let result = store.find_by_id("missing_id_123456789x", "user_1");
        assert!(matches!(result, Err(AppError::NotFound(_))));

        // 別ユーザーからは見えない
        let result = store.find_by_id(&created.id, "user_2");
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_find_all_sorts_by_name_and_filters_active() {
        let mut store = InMemorySubscriptionStore::new();
        store.create(create_dto("Spotify"), "user_1").unwrap();
        let hulu = store.create(create_dto("Hulu"), "user_1").unwrap();
        store.create(create_dto("Netflix"), "user_1").unwrap();

        // 名前順で返る
        let all = store.find_all("user_1", false).unwrap();
        let names: Vec<&str> = all.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Hulu", "Netflix", "Spotify"]);

        // 解約済みはactive_only=trueで除外される
        store.cancel(&hulu.id, "user_1").unwrap();
        let active = store.find_all("user_1", true).unwrap();
        let names: Vec<&str> = active.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Netflix", "Spotify"]);

        // レコードのないユーザーは空のリスト
        assert!(store.find_all("user_2", false).unwrap().is_empty());
    }

    #[test]
    fn test_update_merges_partial_fields() {
        let mut store = InMemorySubscriptionStore::new();
        let created = store.create(create_dto("Netflix"), "user_1").unwrap();

        let dto = UpdateSubscriptionDto {
            name: Some("Netflix Premium".to_string()),
            provider: None,
            category: None,
            cost: Some(2299),
            currency: None,
            billing_cycle: None,
            status: None,
            usage_frequency: None,
        };
        let updated = store.update(&created.id, dto, "user_1").unwrap();

        // 指定したフィールドのみ更新される
        assert_eq!(updated.name, "Netflix Premium");
        assert_eq!(updated.cost, 2299);
        assert_eq!(updated.provider, "Test Provider");
        assert_eq!(updated.billing_cycle, BillingCycle::Monthly);
        assert_eq!(updated.usage_frequency, Some(UsageFrequency::Weekly));
    }

    #[test]
    fn test_update_rejects_invalid_cost() {
        let mut store = InMemorySubscriptionStore::new();
        let created = store.create(create_dto("Netflix"), "user_1").unwrap();

        let dto = UpdateSubscriptionDto {
            name: None,
            provider: None,
            category: None,
            cost: Some(-500),
            currency: None,
            billing_cycle: None,
            status: None,
            usage_frequency: None,
        };
        assert!(store.update(&created.id, dto, "user_1").is_err());

        // 元のレコードは変更されない
        let found = store.find_by_id(&created.id, "user_1").unwrap();
        assert_eq!(found.cost, 1000);
    }

    #[test]
    fn test_cancel_sets_cancelled_status() {
        let mut store = InMemorySubscriptionStore::new();
        let created = store.create(create_dto("Netflix"), "user_1").unwrap();

        let cancelled = store.cancel(&created.id, "user_1").unwrap();
        assert_eq!(cancelled.status, SubscriptionStatus::Cancelled);

        // 存在しないIDはエラー
        let result = store.cancel("missing_id_123456789x", "user_1");
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_delete_removes_record() {
        let mut store = InMemorySubscriptionStore::new();
        let created = store.create(create_dto("Netflix"), "user_1").unwrap();

        store.delete(&created.id, "user_1").unwrap();

        let result = store.find_by_id(&created.id, "user_1");
        assert!(matches!(result, Err(AppError::NotFound(_))));

        // 二重削除はNotFound
        let result = store.delete(&created.id, "user_1");
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
