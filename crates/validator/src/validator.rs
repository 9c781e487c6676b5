//! Validator - a registry of field rules evaluated as one pass.
//!
//! A [`Validator<T>`] is assembled once through [`ValidatorBuilder`] and is
//! immutable afterwards. Every call to [`Validator::validate`] runs every
//! registered rule, with no early exit, and folds all failures into one
//! [`ErrorReport`]:
//!
//! 1. keys are visited in first-registration order, rules under a key in
//!    registration order;
//! 2. each rule is applied to its selected value and bound to its display
//!    name;
//! 3. failures are recorded under the registry key, replaced by the field's
//!    message override when one was given.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//!
//! let validator = Validator::<Todo>::builder()
//!     .rules("Label", |t| t.label.as_str(), [not_empty(), longer_than(3)])
//!     .rule("IntValue", |t| &t.int_value, greater_than(0))
//!     .computed(Field::unkeyed(), |t| t.priority.unwrap_or(0), at_least(1))
//!     .build();
//!
//! match validator.validate(todo) {
//!     Ok(todo) => store(todo),
//!     Err(report) => render(&report),
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use crate::combinators::is_valid;
use crate::foundation::{ErrorReport, Rule, Validatable, ValidationResult, ValidatorOptions};
use crate::registry::{Field, FieldRule, Stage, ValidationRegistry};

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates values of `T` against a fixed set of field rules.
///
/// Cloning is cheap and clones share the registry. A validator holds no
/// per-call state, so one instance can serve any number of threads.
pub struct Validator<T> {
    registry: Arc<ValidationRegistry<T>>,
}

impl<T: 'static> Validator<T> {
    /// Starts a builder with default options.
    pub fn builder() -> ValidatorBuilder<T> {
        ValidatorBuilder::new()
    }

    /// Starts a builder with custom options.
    pub fn builder_with(options: ValidatorOptions) -> ValidatorBuilder<T> {
        ValidatorBuilder::with_options(options)
    }
}

impl<T> Validator<T> {
    /// Validates `value`, handing it back on success.
    ///
    /// # Errors
    ///
    /// Every failure of every rule, grouped by field key.
    pub fn validate(&self, value: T) -> ValidationResult<T> {
        let report = self.report(&value);
        if report.is_empty() { Ok(value) } else { Err(report) }
    }

    /// Validates a borrowed value.
    ///
    /// # Errors
    ///
    /// Every failure of every rule, grouped by field key.
    pub fn check(&self, value: &T) -> Result<(), ErrorReport> {
        let report = self.report(value);
        if report.is_empty() { Ok(()) } else { Err(report) }
    }

    /// Returns true if `value` passes every rule.
    pub fn is_valid(&self, value: &T) -> bool {
        self.report(value).is_empty()
    }

    /// Runs every rule and returns the aggregated report.
    ///
    /// A failing rule always contributes at least one message, so an empty
    /// report means every rule passed.
    pub fn report(&self, value: &T) -> ErrorReport {
        let mut report = ErrorReport::new();

        for (key, rules) in self.registry.iter() {
            for rule in rules {
                let Err(failure) = rule.evaluate(value) else {
                    continue;
                };

                tracing::trace!(
                    field = %key,
                    display_name = %rule.display_name(),
                    messages = failure.len(),
                    "rule failed"
                );

                match rule.message_override() {
                    Some(message) => report.add(key, message),
                    None => {
                        for message in failure.into_messages() {
                            report.add(key, message);
                        }
                    }
                }
            }
        }

        tracing::debug!(
            validator = std::any::type_name::<T>(),
            rules = self.registry.rule_count(),
            failed_fields = report.len(),
            failures = report.total_messages(),
            "validation completed"
        );

        report
    }

    /// Registered field keys in evaluation order.
    pub fn field_keys(&self) -> impl Iterator<Item = &str> {
        self.registry.keys()
    }

    /// Number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.registry.rule_count()
    }

    /// The underlying registry.
    pub fn registry(&self) -> &ValidationRegistry<T> {
        &self.registry
    }
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("input", &std::any::type_name::<T>())
            .field("registry", &self.registry)
            .finish()
    }
}

impl<T> Validatable<T> for Validator<T> {
    fn report(&self, value: &T) -> ErrorReport {
        Validator::report(self, value)
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Collects field rules for a [`Validator`].
///
/// Selectors come in two shapes: [`rule`](Self::rule) and
/// [`rules`](Self::rules) borrow from the value (`Fn(&T) -> &U`), while
/// [`computed`](Self::computed) derives an owned value (`Fn(&T) -> U`).
pub struct ValidatorBuilder<T> {
    registry: ValidationRegistry<T>,
    options: ValidatorOptions,
}

impl<T: 'static> ValidatorBuilder<T> {
    /// Creates a builder with default options.
    pub fn new() -> Self {
        Self::with_options(ValidatorOptions::default())
    }

    /// Creates a builder with custom options.
    pub fn with_options(options: ValidatorOptions) -> Self {
        Self {
            registry: ValidationRegistry::new(),
            options,
        }
    }

    /// Registers one rule for the value selected from `T`.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<U, S>(self, field: impl Into<Field>, selector: S, rule: Rule<U>) -> Self
    where
        U: ?Sized + 'static,
        S: Fn(&T) -> &U + Send + Sync + 'static,
    {
        self.rules(field, selector, [rule])
    }

    /// Registers several rules for the same selected value.
    ///
    /// Each rule becomes its own registry record, so a message override
    /// on `field` replaces the messages of each failing rule separately.
    #[must_use = "builder methods must be chained or built"]
    pub fn rules<U, S, I>(mut self, field: impl Into<Field>, selector: S, rules: I) -> Self
    where
        U: ?Sized + 'static,
        S: Fn(&T) -> &U + Send + Sync + 'static,
        I: IntoIterator<Item = Rule<U>>,
    {
        let field = field.into();
        let selector = Arc::new(selector);
        for rule in rules {
            let selector = Arc::clone(&selector);
            self.push(
                &field,
                Box::new(move |value: &T| rule.apply((*selector)(value))),
            );
        }
        self
    }

    /// Registers a rule for a value derived from `T`.
    #[must_use = "builder methods must be chained or built"]
    pub fn computed<U, S>(mut self, field: impl Into<Field>, selector: S, rule: Rule<U>) -> Self
    where
        U: 'static,
        S: Fn(&T) -> U + Send + Sync + 'static,
    {
        let field = field.into();
        self.push(
            &field,
            Box::new(move |value: &T| rule.apply(&selector(value))),
        );
        self
    }

    /// Registers a rule without a field key.
    ///
    /// Failures land under the empty key `""`; messages use
    /// [`ValidatorOptions::default_field_name`].
    #[must_use = "builder methods must be chained or built"]
    pub fn value<U, S>(self, selector: S, rule: Rule<U>) -> Self
    where
        U: ?Sized + 'static,
        S: Fn(&T) -> &U + Send + Sync + 'static,
    {
        self.rule(Field::unkeyed(), selector, rule)
    }

    /// Registers a nested validator for the selected sub-value.
    ///
    /// Shorthand for `rule(field, selector, is_valid(validator))`.
    #[must_use = "builder methods must be chained or built"]
    pub fn nested<U, S, V>(self, field: impl Into<Field>, selector: S, validator: V) -> Self
    where
        U: ?Sized + 'static,
        S: Fn(&T) -> &U + Send + Sync + 'static,
        V: Validatable<U> + Send + Sync + 'static,
    {
        self.rule(field, selector, is_valid(validator))
    }

    /// Freezes the registry into a validator.
    pub fn build(self) -> Validator<T> {
        tracing::debug!(
            validator = std::any::type_name::<T>(),
            fields = self.registry.len(),
            rules = self.registry.rule_count(),
            "validator built"
        );
        Validator {
            registry: Arc::new(self.registry),
        }
    }

    fn push(&mut self, field: &Field, stage: Stage<T>) {
        let display_name = field.resolve_display_name(&self.options.default_field_name);
        let message = field.message().map(str::to_string);
        self.registry
            .register(field.key(), FieldRule::new(display_name, stage, message));
    }
}

impl<T: 'static> Default for ValidatorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ValidatorBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("registry", &self.registry)
            .field("options", &self.options)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{for_each, optional, required};
    use crate::foundation::ReportError;
    use crate::validators::{at_least, greater_than, longer_than, not_empty};

    #[derive(Debug, Clone, PartialEq)]
    struct Todo {
        label: String,
        int_value: i32,
        priority: Option<i32>,
    }

    fn todo(label: &str, int_value: i32) -> Todo {
        Todo {
            label: label.to_string(),
            int_value,
            priority: None,
        }
    }

    fn todo_validator() -> Validator<Todo> {
        Validator::builder()
            .rules("Label", |t: &Todo| t.label.as_str(), [not_empty(), longer_than(3)])
            .rule("IntValue", |t: &Todo| &t.int_value, greater_than(0))
            .computed(Field::unkeyed(), |t: &Todo| t.priority.unwrap_or(0), at_least(1))
            .build()
    }

    #[test]
    fn test_valid_value_is_returned() {
        let input = Todo {
            priority: Some(2),
            ..todo("Write docs", 5)
        };

        assert_eq!(todo_validator().validate(input.clone()), Ok(input));
    }

    #[test]
    fn test_every_rule_runs_and_aggregates() {
        let report = todo_validator().validate(todo("", -1)).unwrap_err();

        assert_eq!(report.len(), 3);
        assert_eq!(report.total_messages(), 4);
        assert_eq!(report.keys().collect::<Vec<_>>(), ["Label", "IntValue", ""]);
        assert_eq!(report.lookup("Label").unwrap().len(), 2);
        assert_eq!(report.lookup("IntValue").unwrap().len(), 1);
        assert_eq!(
            report.lookup("").unwrap().messages(),
            ["Value must be greater than or equal to 1"]
        );
    }

    #[test]
    fn test_message_override_replaces_rule_messages() {
        let validator = Validator::<Todo>::builder()
            .rule(
                Field::named("Label").with_message("Give the item a name"),
                |t| t.label.as_str(),
                not_empty(),
            )
            .build();

        let report = validator.check(&todo("", 1)).unwrap_err();
        assert_eq!(report.lookup("Label").unwrap().messages(), ["Give the item a name"]);
    }

    #[test]
    fn test_display_name_differs_from_report_key() {
        let validator = Validator::<Todo>::builder()
            .rule(
                Field::named("label").display_as("Item label"),
                |t| t.label.as_str(),
                not_empty(),
            )
            .build();

        let report = validator.check(&todo("", 1)).unwrap_err();
        assert_eq!(
            report.lookup("label").unwrap().messages(),
            ["Item label must not be empty"]
        );
    }

    #[test]
    fn test_default_field_name_option() {
        let validator = Validator::<Todo>::builder_with(
            ValidatorOptions::default().with_default_field_name("Item"),
        )
        .value(|t| &t.int_value, greater_than(0))
        .build();

        let report = validator.check(&todo("abcd", 0)).unwrap_err();
        assert_eq!(report.lookup("").unwrap().messages(), ["Item must be greater than 0"]);
    }

    #[test]
    fn test_required_and_optional_fields() {
        let required_priority = Validator::<Todo>::builder()
            .rule("Priority", |t| &t.priority, required([greater_than(0)]))
            .build();
        let optional_priority = Validator::<Todo>::builder()
            .rule("Priority", |t| &t.priority, optional([greater_than(0)]))
            .build();

        let missing = todo("abcd", 1);
        assert_eq!(
            required_priority.check(&missing).unwrap_err().lookup("Priority"),
            Ok(&crate::foundation::FieldError::new("Priority", "Priority is required"))
        );
        assert!(optional_priority.is_valid(&missing));
    }

    #[test]
    fn test_strict_lookup_of_passing_field() {
        let report = todo_validator().check(&todo("", 1)).unwrap_err();
        assert!(matches!(
            report.lookup("IntValue"),
            Err(ReportError::KeyNotFound { .. })
        ));
    }

    #[test]
    fn test_nested_and_for_each() {
        #[derive(Debug)]
        struct Board {
            title: String,
            items: Vec<Todo>,
        }

        let item_validator = Validator::<Todo>::builder()
            .rule("Label", |t| t.label.as_str(), not_empty())
            .build();

        let board_validator = Validator::<Board>::builder()
            .rule("Title", |b| b.title.as_str(), not_empty())
            .rule(
                "Items",
                |b| b.items.as_slice(),
                for_each(is_valid(item_validator.clone())),
            )
            .build();

        let board = Board {
            title: "Sprint".to_string(),
            items: vec![todo("", 1), todo("ok", 1), todo("", 1)],
        };

        let report = board_validator.check(&board).unwrap_err();
        assert_eq!(report.keys().collect::<Vec<_>>(), ["Items"]);
        assert_eq!(
            report.lookup("Items").unwrap().messages(),
            ["Label must not be empty", "Label must not be empty"]
        );
    }

    #[test]
    fn test_registry_introspection() {
        let validator = todo_validator();
        assert_eq!(validator.field_keys().collect::<Vec<_>>(), ["Label", "IntValue", ""]);
        assert_eq!(validator.rule_count(), 4);
    }

    #[test]
    fn test_validator_is_send_sync_and_clone() {
        fn assert_send_sync<V: Send + Sync + Clone>() {}
        assert_send_sync::<Validator<Todo>>();
    }

    #[test]
    fn test_one_validator_shared_across_threads() {
        let validator = todo_validator();
        let inputs: Vec<Todo> = (-4..4).map(|n| todo("", n)).collect();
        let expected: Vec<ErrorReport> = inputs.iter().map(|t| validator.report(t)).collect();

        let shared = &validator;
        let reports: Vec<ErrorReport> = std::thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|input| scope.spawn(move || shared.report(input)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(reports, expected);
        assert!(reports.iter().all(|report| report.contains_key("Label")));
    }
}
