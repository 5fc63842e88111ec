use async_trait::async_trait;
use medgen_domain::{EntityKind, IdentifierResolver, MedgenResult};
use sqlx::PgPool;
use tracing::{debug, instrument};

/// 基于 `EntityKind` 声明式映射的标识符解析器
///
/// SQL 由实体类型自带的表名/主键列名拼装，
/// 不存在按表名字符串分支的特殊处理。
pub struct PgIdentifierResolver {
    pool: PgPool,
}

impl PgIdentifierResolver {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentifierResolver for PgIdentifierResolver {
    #[instrument(skip(self))]
    async fn resolve(&self, kind: EntityKind) -> MedgenResult<Vec<i64>> {
        let sql = format!(
            "SELECT {id} FROM {table} ORDER BY {id}",
            id = kind.id_column(),
            table = kind.table(),
        );

        let ids: Vec<i64> = sqlx::query_scalar(&sql).fetch_all(&self.pool).await?;
        debug!("解析 {} 标识符 {} 个", kind, ids.len());
        Ok(ids)
    }
}
