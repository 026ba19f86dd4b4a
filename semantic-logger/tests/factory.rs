//! Integration tests for obtaining loggers through the factory.

use std::sync::Arc;

use semantic_logger::log::{LogLevel, NoOpLogger, RecordingLogger};
use semantic_logger::SemanticLoggerFactory;

struct ShoppingCart;

#[test]
fn logger_for_type_is_usable() {
    let logger = SemanticLoggerFactory::get_logger_for::<ShoppingCart>();

    assert_eq!(logger.name(), std::any::type_name::<ShoppingCart>());
    logger.as_expected_by_default("cart created");
}

#[test]
fn logger_for_name_is_usable() {
    let logger = SemanticLoggerFactory::get_logger("A class");

    assert_eq!(logger.name(), "A class");
    logger.to_investigate_tomorrow_with("cart {} abandoned", 17);
}

#[test]
fn logger_for_delegate_is_usable() {
    let backend = Arc::new(RecordingLogger::new("delegate"));
    let logger = SemanticLoggerFactory::from_logger(backend.clone());

    logger.wake_me_up_in_the_middle_of_the_night("checkout down");

    assert_eq!(logger.name(), "delegate");
    assert_eq!(backend.records_at(LogLevel::Error).len(), 1);
}

#[test]
fn noop_delegate_swallows_everything() {
    let logger = SemanticLoggerFactory::from_logger(Arc::new(NoOpLogger));

    logger.for_test_purpose("ignored");
    logger
        .remind_to_remove_unused_implementation_after("2000-01-01", "ignored")
        .unwrap();

    assert_eq!(logger.name(), "NOP");
}

#[test]
fn loggers_with_same_delegate_are_independent_instances() {
    let backend = Arc::new(RecordingLogger::new("shared"));
    let first = SemanticLoggerFactory::from_logger(backend.clone());
    let second = SemanticLoggerFactory::from_logger(backend.clone());

    first.for_test_purpose("from first");
    second.for_test_purpose("from second");

    let messages: Vec<String> = backend.records().into_iter().map(|r| r.message).collect();
    assert_eq!(messages, vec!["from first", "from second"]);
}
