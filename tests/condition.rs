//! Tests for DOM condition scripts and conditional stop evaluation.
mod common;
use common::*;
use kiroku::condition::truthy;
use kiroku::prelude::*;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::rc::Rc;
use std::result::Result;

/// Engine that records every script and answers with a fixed value.
struct RecordingEngine {
    answer: Result<Value, String>,
    scripts: Rc<RefCell<Vec<String>>>,
}

impl RecordingEngine {
    fn answering(answer: Result<Value, String>) -> Self {
        Self {
            answer,
            scripts: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl ScriptEngine for RecordingEngine {
    fn evaluate(&self, script: &str) -> Result<Value, String> {
        self.scripts.borrow_mut().push(script.to_string());
        self.answer.clone()
    }
}

fn stop_step(condition: Option<&str>, message: Option<&str>) -> StepRecord {
    let mut step = StepRecord::new(StepKind::ConditionalStop, "Stop check");
    if let Some(condition) = condition {
        step = step.with_field(StepField::Condition, condition);
    }
    if let Some(message) = message {
        step = step.with_field(StepField::StopMessage, message);
    }
    step
}

#[test]
fn test_dom_scripts() {
    let exists = DomCondition::new("#result", DomCheck::Exists);
    assert_eq!(exists.script(None), "document.querySelector('#result') !== null");

    let missing = DomCondition::new("#result", DomCheck::NotExists);
    assert_eq!(missing.script(None), "document.querySelector('#result') === null");

    let visible = DomCondition::new(".banner", DomCheck::Visible);
    assert!(visible.script(None).contains("el.offsetParent !== null"));

    let text = DomCondition::new("h1", DomCheck::ContainsText("Not Found".to_string()));
    let script = text.script(None);
    assert!(script.contains("document.querySelector('h1')"));
    assert!(script.contains("el.textContent.includes('Not Found')"));
}

#[test]
fn test_dom_script_escapes_quotes_and_fills_inputs() {
    let condition = DomCondition::new(
        "a[title='{candidateId}']",
        DomCheck::ContainsText("it's {unknown}".to_string()),
    );
    let script = condition.script(Some(&candidate_inputs()));
    assert!(script.contains(r"document.querySelector('a[title=\'42\']')"));
    assert!(script.contains(r"includes('it\'s {unknown}')"));
}

#[test]
fn test_dom_check_parse() {
    assert_eq!(DomCheck::parse("exists", None).unwrap(), DomCheck::Exists);
    assert_eq!(DomCheck::parse("not_exists", None).unwrap(), DomCheck::NotExists);
    assert_eq!(DomCheck::parse("visible", None).unwrap(), DomCheck::Visible);
    assert_eq!(
        DomCheck::parse("contains_text", Some("ok")).unwrap(),
        DomCheck::ContainsText("ok".to_string())
    );
    assert_eq!(
        DomCheck::parse("contains_text", None),
        Err(ConditionError::MissingExpectedText)
    );
    assert_eq!(
        DomCheck::parse("hovered", None),
        Err(ConditionError::UnsupportedCheck("hovered".to_string()))
    );
}

#[test]
fn test_truthiness() {
    let falsy_values = [
        json!(null),
        json!(false),
        json!(0),
        json!(0.0),
        json!(""),
        json!([]),
        json!({}),
    ];
    for falsy in falsy_values {
        assert!(!truthy(&falsy), "{} should be falsy", falsy);
    }
    let truthy_values = [
        json!(true),
        json!(1),
        json!(-0.5),
        json!("no"),
        json!([0]),
        json!({"a": null}),
    ];
    for truthy_value in truthy_values {
        assert!(truthy(&truthy_value), "{} should be truthy", truthy_value);
    }
}

#[test]
fn test_evaluate_coerces_and_negates() {
    let evaluator = ConditionEvaluator::new(RecordingEngine::answering(Ok(json!(2))));
    assert!(evaluator.evaluate("1 + 1", None, false).unwrap());
    assert!(!evaluator.evaluate("1 + 1", None, true).unwrap());

    let evaluator = ConditionEvaluator::new(RecordingEngine::answering(Ok(json!(false))));
    assert!(evaluator.evaluate("false", None, true).unwrap());
}

#[test]
fn test_evaluate_passes_rendered_script_to_engine() {
    let seen = RefCell::new(Vec::new());
    let engine = |script: &str| -> Result<Value, String> {
        seen.borrow_mut().push(script.to_string());
        Ok(json!(true))
    };
    let evaluator = ConditionEvaluator::new(engine);
    evaluator
        .evaluate("document.title === '{candidateId}'", Some(&candidate_inputs()), false)
        .unwrap();
    evaluator
        .evaluate("x === '{nope}'", Some(&candidate_inputs()), false)
        .unwrap();
    drop(evaluator);
    assert_eq!(
        seen.into_inner(),
        vec!["document.title === '42'".to_string(), "x === '{nope}'".to_string()]
    );
}

#[test]
fn test_evaluate_wraps_engine_failure() {
    let evaluator =
        ConditionEvaluator::new(RecordingEngine::answering(Err("no active page".to_string())));
    let err = evaluator.evaluate("document.title", None, false).unwrap_err();
    assert_eq!(
        err,
        ConditionError::Script {
            condition: "document.title".to_string(),
            message: "no active page".to_string(),
        }
    );
}

#[test]
fn test_evaluate_dom_runs_generated_script() {
    let engine = RecordingEngine::answering(Ok(json!(true)));
    let scripts = Rc::clone(&engine.scripts);
    let evaluator = ConditionEvaluator::new(engine);
    let condition = DomCondition::new("#ok", DomCheck::Exists);
    assert!(evaluator.evaluate_dom(&condition, None).unwrap());
    assert_eq!(
        *scripts.borrow(),
        vec!["document.querySelector('#ok') !== null".to_string()]
    );
}

#[test]
fn test_should_stop_uses_stop_message() {
    let evaluator = ConditionEvaluator::new(RecordingEngine::answering(Ok(json!(true))));
    let step = stop_step(Some("document.title.includes('404')"), Some("Page missing"));
    let reason = evaluator.should_stop(&step, None).unwrap().expect("should stop");
    assert_eq!(reason.message, "Page missing");
    assert_eq!(reason.condition, "document.title.includes('404')");

    let step = stop_step(Some("true"), None);
    let reason = evaluator.should_stop(&step, None).unwrap().unwrap();
    assert_eq!(reason.message, "Condition met: true");
}

#[test]
fn test_should_stop_when_condition_false_or_absent() {
    let evaluator = ConditionEvaluator::new(RecordingEngine::answering(Ok(json!(null))));
    assert_eq!(evaluator.should_stop(&stop_step(Some("x"), None), None), Ok(None));
    assert_eq!(evaluator.should_stop(&stop_step(None, Some("m")), None), Ok(None));
}

#[test]
fn test_should_stop_rejects_other_kinds() {
    let evaluator = ConditionEvaluator::new(RecordingEngine::answering(Ok(json!(true))));
    let step = navigation_step("https://example.com");
    assert_eq!(
        evaluator.should_stop(&step, None),
        Err(ConditionError::NotConditional)
    );
}
