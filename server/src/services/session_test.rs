use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionUser
// =============================================================================

#[test]
fn session_user_serializes_public_fields_only() {
    let user = SessionUser { id: Uuid::nil(), email: "ada@example.com".into(), name: "Ada".into() };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "email": "ada@example.com",
            "name": "Ada"
        })
    );
}

// =============================================================================
// Live database
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required for live-db-tests");
        crate::db::init_pool(&url, 2).await.expect("init pool")
    }

    #[tokio::test]
    async fn session_lifecycle() {
        let pool = pool().await;
        let user_id = Uuid::new_v4();
        sqlx::query("INSERT INTO users (id, email, name, password_hash) VALUES ($1, $2, $3, 'x')")
            .bind(user_id)
            .bind(format!("{user_id}@example.com"))
            .bind("Live")
            .execute(&pool)
            .await
            .unwrap();

        let token = create_session(&pool, user_id, 5).await.unwrap();
        let user = validate_session(&pool, &token).await.unwrap().unwrap();
        assert_eq!(user.id, user_id);

        delete_session(&pool, &token).await.unwrap();
        assert!(validate_session(&pool, &token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn new_session_prunes_expired_rows() {
        let pool = pool().await;
        let user_id = Uuid::new_v4();
        sqlx::query("INSERT INTO users (id, email, name, password_hash) VALUES ($1, $2, $3, 'x')")
            .bind(user_id)
            .bind(format!("{user_id}@example.com"))
            .bind("Live")
            .execute(&pool)
            .await
            .unwrap();
        let stale = generate_token();
        sqlx::query("INSERT INTO sessions (token, user_id, expires_at) VALUES ($1, $2, now() - interval '1 minute')")
            .bind(&stale)
            .bind(user_id)
            .execute(&pool)
            .await
            .unwrap();

        let fresh = create_session(&pool, user_id, 5).await.unwrap();

        let remaining: Vec<String> = sqlx::query_scalar("SELECT token FROM sessions WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(&pool)
            .await
            .unwrap();
        assert_eq!(remaining, vec![fresh]);
    }
}
