//! Different fields validated concurrently from one validator.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::collect_all;
use fieldcheck_validator::prelude::*;
use futures::future::join_all;
use pretty_assertions::assert_eq;
use serde_json::Value;

fn slow(message: &'static str, delay_ms: u64) -> SharedValidator {
    async_validator(move |_: Value| async move {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        Ok::<_, BoxError>(message)
    })
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn fields_are_independent() {
    let validator = collect_all();
    let email = FieldDescriptor::new("email", "x")
        .with_rules(FieldRules::new().validate(slow("email taken", 20)));
    let name = FieldDescriptor::new("name", "al").with_rules(FieldRules::new().min_length(3));
    let city = FieldDescriptor::new("city", "Oslo").with_rules(FieldRules::new().required(true));

    let (email, name, city) = tokio::join!(
        validator.validate_field(&email),
        validator.validate_field(&name),
        validator.validate_field(&city),
    );

    assert_eq!(email.unwrap().get("email").unwrap().message, "email taken");
    assert_eq!(name.unwrap().get("name").unwrap().kind, RuleKind::MinLength);
    assert!(city.unwrap().is_valid());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn one_field_erroring_does_not_affect_others() {
    let validator = collect_all();
    let broken = FieldDescriptor::new("broken", "x").with_rules(FieldRules::new().validate(
        try_validator(|_| Err::<bool, _>("backend down".into())),
    ));
    let fine = FieldDescriptor::new("fine", "x")
        .with_rules(FieldRules::new().validate(slow("nope", 5)));

    let (broken, fine) = tokio::join!(validator.validate_field(&broken), validator.validate_field(&fine));
    assert!(broken.is_err());
    assert_eq!(fine.unwrap().get("fine").unwrap().message, "nope");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn spawned_tasks_share_one_validator() {
    let validator = Arc::new(collect_all());
    let handles: Vec<_> = (0..16)
        .map(|i| {
            let validator = Arc::clone(&validator);
            tokio::spawn(async move {
                let field = FieldDescriptor::new(format!("field{i}"), "x".repeat(i))
                    .with_rules(FieldRules::new().max_length(8));
                validator.validate_field(&field).await
            })
        })
        .collect();

    let outcomes = join_all(handles).await;
    for (i, outcome) in outcomes.into_iter().enumerate() {
        let outcome = outcome.expect("task panicked").expect("no validator errors");
        assert_eq!(outcome.is_valid(), i <= 8, "field{i}");
    }
}
