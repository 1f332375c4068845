//! End-to-end tests of the fallback pipeline through the task-level API,
//! driven by the scripted fake provider.

use std::sync::Arc;

use harahachi_core::{
    analyze_meal_image, cost_recipe, discover_recipes, evaluate_daily_log, search_food,
    suggest_next_meal, AiConfig, AnalysisSource, DailyIntake, DailyLogSummary, FakeProvider,
    FallbackClient, ImageData, MealSlot, TaskError,
};

fn config_with_models(models: &[&str]) -> AiConfig {
    AiConfig {
        api_key: Some("test-key".to_string()),
        models: models.iter().map(|m| m.to_string()).collect(),
        coaching_models: models.iter().map(|m| m.to_string()).collect(),
        ..AiConfig::default()
    }
}

fn client_with(provider: Arc<FakeProvider>, models: &[&str]) -> FallbackClient {
    FallbackClient::with_provider(config_with_models(models), provider)
}

#[tokio::test]
async fn first_success_wins_and_later_models_are_never_invoked() {
    let fake = Arc::new(
        FakeProvider::new()
            .with_failure("a", "connection reset")
            .with_text("b", r#"{"foodName":"Gyoza","calories":350}"#)
            .with_text("c", r#"{"foodName":"never seen","calories":1}"#),
    );
    let client = client_with(fake.clone(), &["a", "b", "c"]);

    let result = search_food(&client, "gyoza", &[]).await.unwrap();

    assert_eq!(result.model_used, "b");
    assert_eq!(fake.call_count("a"), 1);
    assert_eq!(fake.call_count("b"), 1);
    assert_eq!(fake.call_count("c"), 0);
}

#[tokio::test]
async fn exhaustion_surfaces_the_last_models_failure() {
    let fake = Arc::new(
        FakeProvider::new()
            .with_failure("m1", "quota exceeded")
            .with_failure("m2", "internal server error"),
    );
    let client = client_with(fake.clone(), &["m1", "m2"]);

    let err = cost_recipe(&client, "200g chicken breast").await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("m2"));
    assert!(message.contains("internal server error"));
    assert!(!message.contains("quota exceeded"));
}

#[tokio::test]
async fn rate_limited_then_success_scenario() {
    let fake = Arc::new(
        FakeProvider::new()
            .with_failure("m1", "rate limited")
            .with_text(
                "m2",
                r#"{"foodName":"Curry Rice","calories":950,"macros":{"protein":30,"fat":40,"carbs":110},"reasoning":"ok"}"#,
            ),
    );
    let client = client_with(fake.clone(), &["m1", "m2"]);

    let result = cost_recipe(&client, "curry roux, rice, pork").await.unwrap();

    assert_eq!(result.model_used, "m2");
    assert_eq!(result.estimate.food_name, "Curry Rice");
    assert_eq!(result.estimate.calories, 950.0);
    assert_eq!(result.estimate.macros.protein, 30.0);
    assert_eq!(result.estimate.macros.fat, 40.0);
    assert_eq!(result.estimate.macros.carbs, 110.0);
    assert_eq!(result.estimate.reasoning, "ok");
}

#[tokio::test]
async fn unparseable_output_falls_through_to_next_model() {
    let fake = Arc::new(
        FakeProvider::new()
            .with_text("m1", "Sorry, I cannot tell what this dish is.")
            .with_text("m2", r#"{"suggestions":[{"foodName":"Ramen","calories":800}]}"#),
    );
    let client = client_with(fake.clone(), &["m1", "m2"]);

    let result = search_food(&client, "ramen", &[]).await.unwrap();

    assert_eq!(result.model_used, "m2");
    assert_eq!(result.suggestions.len(), 1);
    assert_eq!(result.suggestions[0].food_name, "Ramen");
    assert_eq!(result.suggestions[0].calories, 800.0);
}

#[tokio::test]
async fn no_credential_makes_zero_calls_and_degrades_immediately() {
    let fake = Arc::new(FakeProvider::new().with_text("m1", "{}"));
    let config = AiConfig {
        api_key: None,
        models: vec!["m1".to_string()],
        ..AiConfig::default()
    };
    let client = FallbackClient::with_provider(config, fake.clone());

    // A failing task errors without any provider call.
    let err = search_food(&client, "ramen", &[]).await.unwrap_err();
    assert!(matches!(
        err,
        TaskError::Fallback(harahachi_core::FallbackError::NotConfigured)
    ));
    assert_eq!(fake.total_calls(), 0);

    // The image task degrades to the mock instead.
    let image = ImageData::jpeg(vec![0u8; 17]);
    let result = analyze_meal_image(&client, image, None).await;
    assert!(result.is_mock());
    assert!(result.degraded_reason.is_some());
    assert_eq!(fake.total_calls(), 0);
}

#[tokio::test]
async fn image_exhaustion_degrades_to_deterministic_mock() {
    let fake = Arc::new(FakeProvider::new().with_failure("m1", "model overloaded"));
    let client = client_with(fake.clone(), &["m1"]);

    let image = ImageData::jpeg(vec![0u8; 123]);
    let first = analyze_meal_image(&client, image.clone(), None).await;
    let second = analyze_meal_image(&client, image, None).await;

    assert_eq!(first.source, AnalysisSource::Mock);
    assert_eq!(first.analysis.food_name, second.analysis.food_name);
    assert_eq!(first.confidence, second.confidence);
    assert!(first
        .degraded_reason
        .as_deref()
        .unwrap()
        .contains("model overloaded"));
}

#[tokio::test]
async fn image_success_is_tagged_with_the_producing_model() {
    let fake = Arc::new(FakeProvider::new().with_text(
        "vision-1",
        "<thinking>bowl, broth, noodles</thinking>\n```json\n{\"foodName\":\"Ramen\",\"calories\":800,\"macros\":{\"protein\":40,\"fat\":30,\"carbs\":90},\"breakdown\":[\"noodles\",\"broth\"],\"reasoning\":\"looks rich\"}\n```",
    ));
    let client = client_with(fake.clone(), &["vision-1"]);

    let result = analyze_meal_image(&client, ImageData::jpeg(vec![1, 2, 3]), None).await;

    assert_eq!(
        result.source,
        AnalysisSource::Model("vision-1".to_string())
    );
    assert_eq!(result.analysis.food_name, "Ramen");
    assert_eq!(result.analysis.calories, 800.0);
    assert!(result.degraded_reason.is_none());
}

#[tokio::test]
async fn meal_suggestion_degrades_to_empty_list_with_advice() {
    let fake = Arc::new(FakeProvider::new().with_failure("m1", "service unavailable"));
    let client = client_with(fake.clone(), &["m1"]);

    let result = suggest_next_meal(
        &client,
        MealSlot::Dinner,
        &[],
        &DailyIntake {
            total_calories: 1400.0,
            target_calories: 2000.0,
            ..DailyIntake::default()
        },
    )
    .await;

    assert!(result.model_used.is_none());
    assert!(result.suggestions.suggestions.is_empty());
    assert_eq!(result.suggestions.meal_category, "dinner");
    assert!(result.suggestions.advice.contains("unavailable"));
    assert!(result.suggestions.advice.contains("service unavailable"));
}

#[tokio::test]
async fn recipe_discovery_propagates_exhaustion() {
    let fake = Arc::new(FakeProvider::new().with_failure("m1", "bad gateway"));
    let client = client_with(fake.clone(), &["m1"]);

    let err = discover_recipes(&client, "low-carb dinner").await.unwrap_err();
    assert!(err.to_string().contains("bad gateway"));
}

#[tokio::test]
async fn daily_evaluation_uses_coaching_models_and_decodes_assessments() {
    let fake = Arc::new(FakeProvider::new().with_text(
        "coach-1",
        r#"{"score":82,"title":"Solid day","advice":"More protein at lunch.","foodAssessments":[{"foodName":"Katsu curry","assessment":"negative","reason":"fat-heavy"},{"foodName":"Salad","assessment":"positive","reason":"lean"}],"reasoning":"slightly over target"}"#,
    ));
    let config = AiConfig {
        api_key: Some("test-key".to_string()),
        models: vec!["never-used".to_string()],
        coaching_models: vec!["coach-1".to_string()],
        ..AiConfig::default()
    };
    let client = FallbackClient::with_provider(config, fake.clone());

    let summary = DailyLogSummary {
        date: chrono::NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
        consumed_calories: 2100.0,
        target_calories: 2000.0,
        meals: vec![],
        current_weight: None,
        target_weight: None,
        target_date: None,
    };

    let result = evaluate_daily_log(&client, &summary).await.unwrap();

    assert_eq!(result.model_used, "coach-1");
    assert_eq!(result.evaluation.score, 82.0);
    assert_eq!(result.evaluation.food_assessments.len(), 2);
    assert_eq!(fake.call_count("never-used"), 0);
    assert_eq!(fake.call_count("coach-1"), 1);
}

#[tokio::test]
async fn syntactically_valid_but_odd_json_still_wins() {
    // First-success-wins applies to extraction success, not semantic quality:
    // valid JSON with missing fields short-circuits and decodes leniently.
    let fake = Arc::new(
        FakeProvider::new()
            .with_text("m1", r#"{"unexpected":"shape"}"#)
            .with_text("m2", r#"{"foodName":"Perfect","calories":500}"#),
    );
    let client = client_with(fake.clone(), &["m1", "m2"]);

    let result = cost_recipe(&client, "tofu").await.unwrap();

    assert_eq!(result.model_used, "m1");
    assert_eq!(result.estimate.food_name, "");
    assert_eq!(result.estimate.calories, 0.0);
    assert_eq!(fake.call_count("m2"), 0);
}
