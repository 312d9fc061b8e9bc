//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use campus_core::{Role, ToggleReconciler, UpvoteOutcome};
use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Account Tests
// ============================================================================

#[tokio::test]
async fn test_requests_without_token_are_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/feedback/inbox").await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_token_for_unknown_account_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let account = server.seed_account(Role::Participant, None).await.unwrap();
    sqlx::query("DELETE FROM profiles WHERE id = $1")
        .bind(account.id)
        .execute(server.pool())
        .await
        .unwrap();

    let response = server.get_auth("/api/v1/accounts/@me", &account.token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_current_account_lists_capabilities() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.seed_account(Role::Admin, None).await.unwrap();
    let buddy = server.seed_account(Role::Buddy, None).await.unwrap();

    let response = server.get_auth("/api/v1/accounts/@me", &admin.token).await.unwrap();
    let me: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me["id"], admin.id.to_string());
    assert_eq!(me["role"], "admin");
    let capabilities = me["capabilities"].as_array().cloned().unwrap_or_default();
    assert!(capabilities.contains(&json!("VIEW_INBOX")));
    assert!(capabilities.contains(&json!("MANAGE_SETTINGS")));

    let response = server.get_auth("/api/v1/accounts/@me", &buddy.token).await.unwrap();
    let me: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me["capabilities"], json!(["EDIT_CHECKPOINT"]));
}

#[tokio::test]
async fn test_profile_update_round_trips() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let buddy = server.seed_account(Role::Buddy, None).await.unwrap();

    let body = json!({
        "full_name": "Meera Nair",
        "bio": "Builds rovers",
        "profile_image_url": "https://cdn.example.edu/meera.png",
    });
    let response = server.patch_auth("/api/v1/accounts/@me", &buddy.token, &body).await.unwrap();
    let updated: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated["full_name"], "Meera Nair");
    assert_eq!(updated["role"], "buddy");

    let response = server.get_auth("/api/v1/accounts/@me", &buddy.token).await.unwrap();
    let me: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me["bio"], "Builds rovers");
    assert_eq!(me["profile_image_url"], "https://cdn.example.edu/meera.png");

    let response = server
        .patch_auth("/api/v1/accounts/@me", &buddy.token, &json!({ "profile_image_url": "meera.png" }))
        .await
        .unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "VALIDATION_ERROR");
}

// ============================================================================
// User Directory Tests
// ============================================================================

#[tokio::test]
async fn test_user_directory_is_scoped_by_role() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let campus = server.seed_campus().await.unwrap();
    let other = server.seed_campus().await.unwrap();
    let coordinator = server.seed_account(Role::CampusCoordinator, Some(campus)).await.unwrap();
    server.seed_account(Role::Participant, Some(campus)).await.unwrap();
    server.seed_account(Role::Buddy, Some(other)).await.unwrap();
    let admin = server.seed_account(Role::Admin, None).await.unwrap();
    let lead = server.seed_account(Role::QaLead, None).await.unwrap();
    let stranded = server.seed_account(Role::CampusCoordinator, None).await.unwrap();

    // The coordinator's own campus wins over the requested one
    let path = format!("/api/v1/admin/users?campus_id={other}");
    let response = server.get_auth(&path, &coordinator.token).await.unwrap();
    let page: DirectoryPageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.total_pages, 1);
    assert!(page.users.iter().all(|u| u.campus_id == Some(campus.to_string())));

    let response = server.get_auth(&path, &admin.token).await.unwrap();
    let page: DirectoryPageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.users[0].role, "buddy");

    let response = server.get_auth("/api/v1/admin/users", &lead.token).await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(err.error.code, "MISSING_CAPABILITY");

    let response = server.get_auth("/api/v1/admin/users", &stranded.token).await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(err.error.code, "NO_ASSIGNED_CAMPUS");

    let response = server.get_auth("/api/v1/admin/users?role=dean", &admin.token).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Feedback Inbox Tests
// ============================================================================

#[tokio::test]
async fn test_participant_inbox_is_empty() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let participant = server.seed_account(Role::Participant, None).await.unwrap();
    let request = SubmitFeedbackRequest::unique();
    let response = server
        .post_auth("/api/v1/feedback", &participant.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/feedback/inbox", &participant.token)
        .await
        .unwrap();
    let page: FeedbackPageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.total, 0);

    let response = server
        .get_auth("/api/v1/feedback/stats", &participant.token)
        .await
        .unwrap();
    let stats: FeedbackStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.all, 0);
}

#[tokio::test]
async fn test_coordinator_sees_only_their_campus() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let north = server.seed_campus().await.unwrap();
    let south = server.seed_campus().await.unwrap();
    let coordinator = server.seed_account(Role::CampusCoordinator, Some(north)).await.unwrap();
    let north_student = server.seed_account(Role::Participant, Some(north)).await.unwrap();
    let south_student = server.seed_account(Role::Participant, Some(south)).await.unwrap();

    for student in [&north_student, &north_student, &south_student] {
        let response = server
            .post_auth("/api/v1/feedback", &student.token, &SubmitFeedbackRequest::unique())
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get_auth("/api/v1/feedback/inbox?status=all&limit=10", &coordinator.token)
        .await
        .unwrap();
    let page: FeedbackPageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.total, 2);
    assert!(page.data.iter().all(|f| f.campus_id.as_deref() == Some(north.to_string().as_str())));

    let response = server
        .get_auth("/api/v1/feedback/stats", &coordinator.token)
        .await
        .unwrap();
    let stats: FeedbackStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.new, 2);
    assert_eq!(stats.work_in_progress, 0);
    assert_eq!(stats.completed, 0);
    assert_eq!(stats.all, 2);
}

#[tokio::test]
async fn test_unknown_status_filter_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.seed_account(Role::Admin, None).await.unwrap();

    let response = server
        .get_auth("/api/v1/feedback/inbox?status=archived", &admin.token)
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_QUERY_PARAMETER");
}

#[tokio::test]
async fn test_status_change_respects_scope() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let north = server.seed_campus().await.unwrap();
    let south = server.seed_campus().await.unwrap();
    let student = server.seed_account(Role::Participant, Some(north)).await.unwrap();
    let coordinator = server.seed_account(Role::CampusCoordinator, Some(north)).await.unwrap();
    let outsider = server.seed_account(Role::CampusCoordinator, Some(south)).await.unwrap();

    let response = server
        .post_auth("/api/v1/feedback", &student.token, &SubmitFeedbackRequest::unique())
        .await
        .unwrap();
    let created: FeedbackResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.status, "new");
    assert_eq!(created.created_by, student.id.to_string());

    let path = format!("/api/v1/feedback/{}/status", created.id);
    let body = json!({ "status": "work_in_progress" });

    let response = server.patch_auth(&path, &student.token, &body).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.patch_auth(&path, &outsider.token, &body).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.patch_auth(&path, &coordinator.token, &body).await.unwrap();
    let updated: FeedbackResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "work_in_progress");

    let response = server.get_auth("/api/v1/feedback/mine", &student.token).await.unwrap();
    let mine: Vec<FeedbackResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].status, "work_in_progress");
}

// ============================================================================
// Thread Tests
// ============================================================================

#[tokio::test]
async fn test_thread_replies_and_reactions() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let campus = server.seed_campus().await.unwrap();
    let student = server.seed_account(Role::Participant, Some(campus)).await.unwrap();
    let lead = server.seed_account(Role::QaLead, None).await.unwrap();
    let stranger = server.seed_account(Role::Participant, Some(campus)).await.unwrap();

    let response = server
        .post_auth("/api/v1/feedback", &student.token, &SubmitFeedbackRequest::unique())
        .await
        .unwrap();
    let created: FeedbackResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let replies_path = format!("/api/v1/feedback/{}/replies", created.id);
    let response = server
        .post_auth(&replies_path, &lead.token, &json!({ "message": "Looking into it" }))
        .await
        .unwrap();
    let reply: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(reply["is_admin_reply"], true);

    let response = server
        .post_auth(&replies_path, &stranger.token, &json!({ "message": "me too" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let toggle = json!({ "target_id": created.id, "target_kind": "feedback", "emoji": "👍" });
    let response = server
        .post_auth("/api/v1/feedback/reactions/toggle", &student.token, &toggle)
        .await
        .unwrap();
    let added: ToggleReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(added.added);
    assert_eq!(added.count, 1);

    let thread_path = format!("/api/v1/feedback/{}/thread", created.id);
    let response = server.get_auth(&thread_path, &student.token).await.unwrap();
    let thread: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(thread["replies"].as_array().map(Vec::len), Some(1));
    assert_eq!(thread["reaction_counts"][0]["count"], 1);
    assert_eq!(thread["reaction_counts"][0]["me"], true);

    let response = server
        .post_auth("/api/v1/feedback/reactions/toggle", &student.token, &toggle)
        .await
        .unwrap();
    let removed: ToggleReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!removed.added);
    assert_eq!(removed.count, 0);

    let response = server.get_auth(&thread_path, &stranger.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_unsupported_emoji_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let student = server.seed_account(Role::Participant, None).await.unwrap();
    let response = server
        .post_auth("/api/v1/feedback", &student.token, &SubmitFeedbackRequest::unique())
        .await
        .unwrap();
    let created: FeedbackResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let toggle = json!({ "target_id": created.id, "target_kind": "feedback", "emoji": "🦀" });
    let response = server
        .post_auth("/api/v1/feedback/reactions/toggle", &student.token, &toggle)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Daily Update Tests
// ============================================================================

#[tokio::test]
async fn test_one_update_per_day() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.seed_account(Role::Participant, None).await.unwrap();
    let body = json!({ "content": format!("Shipped feature {}", unique_suffix()) });

    let response = server.post_auth("/api/v1/daily-updates", &author.token, &body).await.unwrap();
    let created: DailyUpdateResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.upvote_count, 0);
    assert!(!created.has_upvoted);

    let response = server.post_auth("/api/v1/daily-updates", &author.token, &body).await.unwrap();
    let err: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "ALREADY_POSTED_TODAY");

    let response = server.get_auth("/api/v1/daily-updates/mine", &author.token).await.unwrap();
    let mine: Vec<DailyUpdateResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, created.id);
}

#[tokio::test]
async fn test_search_by_keyword() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.seed_account(Role::Participant, None).await.unwrap();
    let marker = format!("marker{}x{}", unique_suffix(), Uuid::new_v4().simple());
    let body = json!({ "content": format!("Today I learned about {marker}") });
    let response = server.post_auth("/api/v1/daily-updates", &author.token, &body).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/daily-updates?keyword={}&sort=oldest", marker.to_uppercase());
    let response = server.get_auth(&path, &author.token).await.unwrap();
    let page: UpdateSearchResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.total_pages, 1);
    assert!(page.updates[0].content.contains(&marker));

    let response = server
        .get_auth("/api/v1/daily-updates?date=05-03-2024", &author.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_upvote_reconciles_with_server_outcome() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.seed_account(Role::Participant, None).await.unwrap();
    let voter = server.seed_account(Role::Buddy, None).await.unwrap();
    let body = json!({ "content": format!("Pairing notes {}", unique_suffix()) });
    let response = server.post_auth("/api/v1/daily-updates", &author.token, &body).await.unwrap();
    let created: DailyUpdateResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let update_id: Uuid = created.id.parse().unwrap();
    let path = format!("/api/v1/daily-updates/{update_id}/upvote");

    let mut reconciler = ToggleReconciler::new();
    reconciler.track(update_id, false, 0).unwrap();

    reconciler.begin(update_id).unwrap();
    let response = server
        .post_auth(&path, &voter.token, &json!({ "action": "upvote" }))
        .await
        .unwrap();
    let outcome: UpvoteOutcome = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(reconciler.apply_outcome(update_id, &outcome).unwrap().is_none());
    let entry = reconciler.entry(update_id).unwrap();
    assert!(entry.active);
    assert_eq!(entry.count, 1);

    // A second upvote from a stale client is refused and rolls back locally
    reconciler.track(update_id, false, 1).unwrap();
    reconciler.begin(update_id).unwrap();
    let response = server
        .post_auth(&path, &voter.token, &json!({ "action": "upvote" }))
        .await
        .unwrap();
    let outcome: UpvoteOutcome = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!outcome.success);
    let notice = reconciler.apply_outcome(update_id, &outcome).unwrap();
    assert_eq!(notice.map(|n| n.message), Some("Already upvoted".to_string()));
    assert_eq!(reconciler.entry(update_id).map(|e| e.count), Some(1));

    let response = server
        .post_auth(&path, &voter.token, &json!({ "action": "remove" }))
        .await
        .unwrap();
    let outcome: UpvoteOutcome = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(outcome.data.map(|d| d.new_count), Some(0));
}

#[tokio::test]
async fn test_simultaneous_upvotes_land_once() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.seed_account(Role::Participant, None).await.unwrap();
    let voter = server.seed_account(Role::Buddy, None).await.unwrap();
    let body = json!({ "content": format!("Hackathon recap {}", unique_suffix()) });
    let response = server.post_auth("/api/v1/daily-updates", &author.token, &body).await.unwrap();
    let created: DailyUpdateResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/daily-updates/{}/upvote", created.id);

    let upvote = json!({ "action": "upvote" });
    let (first, second) = tokio::join!(
        server.post_auth(&path, &voter.token, &upvote),
        server.post_auth(&path, &voter.token, &upvote),
    );
    let first: UpvoteOutcome = assert_json(first.unwrap(), StatusCode::OK).await.unwrap();
    let second: UpvoteOutcome = assert_json(second.unwrap(), StatusCode::OK).await.unwrap();

    let (won, lost) = if first.success { (first, second) } else { (second, first) };
    assert!(won.success);
    assert_eq!(won.data.map(|d| d.new_count), Some(1));
    assert!(!lost.success);
    assert_eq!(lost.message.as_deref(), Some("Already upvoted"));

    let response = server.get_auth("/api/v1/daily-updates/mine", &author.token).await.unwrap();
    let mine: Vec<DailyUpdateResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.iter().find(|u| u.id == created.id).map(|u| u.upvote_count), Some(1));
}

// ============================================================================
// Settings Tests
// ============================================================================

#[tokio::test]
async fn test_only_admins_change_settings() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let admin = server.seed_account(Role::Admin, None).await.unwrap();
    let coordinator = server.seed_account(Role::CampusCoordinator, None).await.unwrap();

    let response = server
        .put_auth("/api/v1/admin/settings", &coordinator.token, &json!({ "checkpoints_enabled": false }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .put_auth("/api/v1/admin/settings", &admin.token, &json!({ "checkpoints_enabled": true }))
        .await
        .unwrap();
    let saved: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(saved["checkpoints_enabled"], true);
    assert_eq!(saved["updated_by"], admin.id.to_string());

    let response = server
        .get_auth("/api/v1/admin/settings", &coordinator.token)
        .await
        .unwrap();
    let current: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(current["checkpoints_enabled"], true);
}
