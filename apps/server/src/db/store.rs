//! PostgreSQL restaurant store

use super::query_builder::{BindValue, QueryBuilder, RESTAURANT_COLUMNS};
use super::traits::RestaurantStore;
use crate::{config::DatabaseConfig, metrics, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use foodie_models::{NewRestaurant, PriceRange, Restaurant, RestaurantFilter};
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool, Postgres, Transaction};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Row shape of the `restaurants` table
#[derive(Debug, FromRow)]
struct RestaurantRow {
    id: Uuid,
    name: String,
    cuisine: String,
    location: String,
    rating: f64,
    price_range: String,
    delivery_time: f64,
    image: String,
    description: Option<String>,
    is_open: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RestaurantRow> for Restaurant {
    type Error = crate::Error;

    fn try_from(row: RestaurantRow) -> Result<Self> {
        let price_range = row.price_range.parse::<PriceRange>().map_err(|e| {
            crate::Error::Internal(format!("Corrupt row {}: {}", row.id, e))
        })?;

        Ok(Restaurant {
            id: row.id.to_string(),
            name: row.name,
            cuisine: row.cuisine,
            location: row.location,
            rating: row.rating,
            price_range,
            delivery_time: row.delivery_time,
            image: row.image,
            description: row.description,
            is_open: row.is_open,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Restaurant store backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PostgresRestaurantStore {
    pool: PgPool,
}

impl PostgresRestaurantStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool from configuration and optionally apply migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .min_connections(config.pool_min_size)
            .max_connections(config.pool_max_size)
            .acquire_timeout(Duration::from_secs(config.pool_timeout_seconds))
            .connect(&config.url)
            .await?;

        tracing::info!(
            pool_min_size = config.pool_min_size,
            pool_max_size = config.pool_max_size,
            "Database pool established"
        );

        if config.run_migrations {
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Database migrations applied");
        }

        Ok(Self::new(pool))
    }

    async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        restaurant: NewRestaurant,
    ) -> Result<Restaurant> {
        let sql = format!(
            "INSERT INTO restaurants \
             (id, name, cuisine, location, rating, price_range, delivery_time, image, description, is_open) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {}",
            RESTAURANT_COLUMNS
        );

        let row: RestaurantRow = sqlx::query_as(&sql)
            .bind(Uuid::new_v4())
            .bind(restaurant.name)
            .bind(restaurant.cuisine)
            .bind(restaurant.location)
            .bind(restaurant.rating)
            .bind(restaurant.price_range.as_str())
            .bind(restaurant.delivery_time)
            .bind(restaurant.image)
            .bind(restaurant.description)
            .bind(restaurant.is_open)
            .fetch_one(&mut **tx)
            .await?;

        row.try_into()
    }
}

fn observe<T>(query_type: &str, start: Instant, result: &Result<T>) {
    metrics::DB_QUERY_DURATION_SECONDS
        .with_label_values(&[query_type])
        .observe(start.elapsed().as_secs_f64());
    if let Err(e) = result {
        tracing::warn!(query_type, error = %e, "Database query failed");
        metrics::DB_QUERY_ERRORS_TOTAL
            .with_label_values(&[query_type])
            .inc();
    }
}

#[async_trait]
impl RestaurantStore for PostgresRestaurantStore {
    async fn list(&self, filter: &RestaurantFilter) -> Result<Vec<Restaurant>> {
        let start = Instant::now();
        let (sql, bind_values) = QueryBuilder::new(filter).build_sql();
        tracing::debug!(sql = %sql, binds = bind_values.len(), "Executing restaurant search");

        let mut query = sqlx::query_as::<_, RestaurantRow>(&sql);
        for value in bind_values {
            query = match value {
                BindValue::Text(v) => query.bind(v),
                BindValue::Float(v) => query.bind(v),
                BindValue::Bool(v) => query.bind(v),
            };
        }

        let result = query
            .fetch_all(&self.pool)
            .await
            .map_err(crate::Error::Database)
            .and_then(|rows| rows.into_iter().map(Restaurant::try_from).collect());
        observe("list", start, &result);
        result
    }

    async fn distinct_cuisines(&self) -> Result<Vec<String>> {
        let start = Instant::now();
        // DISTINCT requires the ORDER BY expression in the select list
        let result = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT cuisine COLLATE \"C\" AS cuisine FROM restaurants ORDER BY 1",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(crate::Error::Database);
        observe("distinct_cuisines", start, &result);
        result
    }

    async fn create(&self, restaurant: NewRestaurant) -> Result<Restaurant> {
        let start = Instant::now();
        let result = async {
            let mut tx = self.pool.begin().await?;
            let created = Self::insert(&mut tx, restaurant).await?;
            tx.commit().await?;
            Ok::<_, crate::Error>(created)
        }
        .await;
        observe("create", start, &result);
        result
    }

    async fn create_many(&self, restaurants: Vec<NewRestaurant>) -> Result<Vec<Restaurant>> {
        let start = Instant::now();
        let result = async {
            let mut tx = self.pool.begin().await?;
            let mut created = Vec::with_capacity(restaurants.len());
            for restaurant in restaurants {
                created.push(Self::insert(&mut tx, restaurant).await?);
            }
            // Dropping `tx` on an early return rolls the batch back.
            tx.commit().await?;
            Ok::<_, crate::Error>(created)
        }
        .await;
        observe("create_many", start, &result);
        result
    }

    async fn count(&self) -> Result<i64> {
        let start = Instant::now();
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM restaurants")
            .fetch_one(&self.pool)
            .await
            .map_err(crate::Error::Database);
        observe("count", start, &result);
        result
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
