//! Descriptor-driven data entry for the page actions.
//!
//! A form lists its fields once. The same descriptor backs the interactive
//! wizard (one prompt per field, with back/cancel/help) and positional
//! arguments in script mode, so both paths share every validator.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::Month;

use crate::cli::io;
use crate::cli::ui::prompts::{
    choice_menu, confirm_menu, text_input, ChoicePromptResult, ConfirmationPromptResult,
    TextPromptResult,
};
use crate::config::{MAX_AMOUNT, MAX_RATE_PERCENT, MAX_TERM_MONTHS, MIN_TERM_MONTHS};
use crate::core::services::ProjectionParams;
use crate::core::session::BudgetCheckState;
use crate::domain::common::ensure_name;
use crate::domain::{Activity, ActivityCategory, ReturnActivity};
use crate::utils::format::format_money;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormResult<T> {
    Completed(T),
    Cancelled,
}

/// Answer to a single field prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    Value(String),
    /// Keep the default shown with the prompt.
    Keep,
    Cancel,
    Back,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationResponse {
    Confirm,
    Back,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone)]
pub enum FieldKind {
    Text,
    Decimal,
    Integer,
    Choice(Vec<String>),
}

type ValidatorCallback = dyn Fn(&str) -> Result<String, String> + Send + Sync;

/// Normalises raw input into the canonical string stored for a field.
#[derive(Clone)]
pub enum Validator {
    None,
    NonEmpty,
    Custom(Arc<ValidatorCallback>),
}

impl Validator {
    pub fn validate(&self, input: &str) -> Result<String, ValidationError> {
        match self {
            Validator::None => Ok(input.to_string()),
            Validator::NonEmpty => {
                let trimmed = input.trim();
                if trimmed.is_empty() {
                    Err(ValidationError::new("Value cannot be empty"))
                } else {
                    Ok(trimmed.to_string())
                }
            }
            Validator::Custom(callback) => callback(input).map_err(ValidationError::new),
        }
    }
}

#[derive(Clone)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub help: Option<&'static str>,
    pub validator: Validator,
}

impl FieldDescriptor {
    pub fn new(
        key: &'static str,
        label: &'static str,
        kind: FieldKind,
        validator: Validator,
    ) -> Self {
        Self {
            key,
            label,
            kind,
            help: None,
            validator,
        }
    }

    pub fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

pub struct FormDescriptor {
    pub name: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl FormDescriptor {
    pub fn new(name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        Self { name, fields }
    }
}

/// Everything an interaction needs to draw one prompt.
pub struct PromptContext<'a> {
    pub field: &'a FieldDescriptor,
    pub position: usize,
    pub total: usize,
    pub default: Option<&'a str>,
    pub error: Option<&'a str>,
    pub show_help: bool,
}

pub trait FormInteraction {
    fn prompt_field(&mut self, context: &PromptContext<'_>) -> PromptResponse;
    fn confirm(&mut self, summary: &[String]) -> ConfirmationResponse;
}

pub trait FormFlow {
    type Output;

    fn descriptor(&self) -> &FormDescriptor;

    fn defaults(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    /// Builds the output from validated field values.
    fn commit(&self, values: &BTreeMap<String, String>) -> Result<Self::Output, ValidationError>;
}

pub struct FormEngine<'a, F: FormFlow> {
    flow: &'a F,
}

impl<'a, F: FormFlow> FormEngine<'a, F> {
    pub fn new(flow: &'a F) -> Self {
        Self { flow }
    }

    /// Walks the fields with `interaction` until the user confirms or cancels.
    pub fn run(&self, interaction: &mut dyn FormInteraction) -> FormResult<F::Output> {
        let fields = &self.flow.descriptor().fields;
        let mut values = self.flow.defaults();
        let mut index = 0;
        let mut error: Option<String> = None;
        let mut show_help = false;

        loop {
            if index >= fields.len() {
                let summary = summary_lines(fields, &values);
                match interaction.confirm(&summary) {
                    ConfirmationResponse::Confirm => match self.flow.commit(&values) {
                        Ok(output) => return FormResult::Completed(output),
                        Err(err) => {
                            error = Some(err.message);
                            index = fields.len().saturating_sub(1);
                        }
                    },
                    ConfirmationResponse::Back => index = fields.len().saturating_sub(1),
                    ConfirmationResponse::Cancel => return FormResult::Cancelled,
                }
                continue;
            }

            let field = &fields[index];
            let response = {
                let context = PromptContext {
                    field,
                    position: index + 1,
                    total: fields.len(),
                    default: values.get(field.key).map(String::as_str),
                    error: error.as_deref(),
                    show_help,
                };
                interaction.prompt_field(&context)
            };
            show_help = false;

            match response {
                PromptResponse::Value(raw) => match field.validator.validate(&raw) {
                    Ok(value) => {
                        values.insert(field.key.to_string(), value);
                        error = None;
                        index += 1;
                    }
                    Err(err) => error = Some(err.message),
                },
                PromptResponse::Keep => {
                    if values.contains_key(field.key) {
                        error = None;
                        index += 1;
                    } else {
                        error = Some(format!("{} has no default; enter a value", field.label));
                    }
                }
                PromptResponse::Back => {
                    error = None;
                    index = index.saturating_sub(1);
                }
                PromptResponse::Help => show_help = true,
                PromptResponse::Cancel => return FormResult::Cancelled,
            }
        }
    }

    /// Fills fields from positional arguments; missing trailing fields fall
    /// back to the form defaults.
    pub fn from_args(&self, args: &[&str]) -> Result<F::Output, ValidationError> {
        let fields = &self.flow.descriptor().fields;
        if args.len() > fields.len() {
            return Err(ValidationError::new(format!(
                "Expected at most {} value(s): {}",
                fields.len(),
                field_labels(fields)
            )));
        }

        let mut values = self.flow.defaults();
        for (idx, field) in fields.iter().enumerate() {
            match args.get(idx) {
                Some(raw) => {
                    let value = field.validator.validate(raw).map_err(|err| {
                        ValidationError::new(format!("{}: {}", field.label, err.message))
                    })?;
                    values.insert(field.key.to_string(), value);
                }
                None if values.contains_key(field.key) => {}
                None => {
                    return Err(ValidationError::new(format!(
                        "Missing value for {} (expected: {})",
                        field.label,
                        field_labels(fields)
                    )))
                }
            }
        }
        self.flow.commit(&values)
    }
}

fn field_labels(fields: &[FieldDescriptor]) -> String {
    fields
        .iter()
        .map(|field| format!("<{}>", field.key))
        .collect::<Vec<_>>()
        .join(" ")
}

fn summary_lines(fields: &[FieldDescriptor], values: &BTreeMap<String, String>) -> Vec<String> {
    fields
        .iter()
        .map(|field| {
            let value = values.get(field.key).map(String::as_str).unwrap_or("-");
            format!("  {:<14} {}", format!("{}:", field.label), value)
        })
        .collect()
}

fn required<'v>(values: &'v BTreeMap<String, String>, key: &str) -> Result<&'v str, ValidationError> {
    values
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| ValidationError::new(format!("Missing value for `{key}`")))
}

fn parse_number<T: FromStr>(values: &BTreeMap<String, String>, key: &str) -> Result<T, ValidationError> {
    required(values, key)?
        .parse::<T>()
        .map_err(|_| ValidationError::new(format!("Invalid number for `{key}`")))
}

fn name_validator() -> Validator {
    Validator::Custom(Arc::new(|input| {
        ensure_name(input).map_err(|_| "Enter the activity name.".to_string())
    }))
}

fn amount_validator() -> Validator {
    Validator::Custom(Arc::new(|input| {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err("Amount is required".into());
        }
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| "Enter a numeric amount".to_string())
            .and_then(|value| {
                if value < 0.0 {
                    Err("Amount must be zero or positive".into())
                } else if value > MAX_AMOUNT {
                    Err(format!("Amount must not exceed {}", format_money("", MAX_AMOUNT)))
                } else {
                    Ok(value.to_string())
                }
            })
    }))
}

fn category_validator() -> Validator {
    Validator::Custom(Arc::new(|input| {
        ActivityCategory::from_str(input)
            .map(|category| category.label().to_string())
            .map_err(|err| match err {
                crate::errors::ActivityError::Validation(message) => message,
                other => other.to_string(),
            })
    }))
}

fn month_validator() -> Validator {
    Validator::Custom(Arc::new(|input| {
        parse_month(input)
            .map(|month| month.name().to_string())
            .ok_or_else(|| "Enter a month name or a number from 1 to 12".to_string())
    }))
}

fn rate_validator() -> Validator {
    Validator::Custom(Arc::new(|input| {
        let trimmed = input.trim().trim_end_matches('%');
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|rate| (0.0..=MAX_RATE_PERCENT).contains(rate))
            .map(|rate| rate.to_string())
            .ok_or_else(|| "Rate must be a percentage between 0 and 100".to_string())
    }))
}

fn term_validator() -> Validator {
    Validator::Custom(Arc::new(|input| {
        input
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|months| (MIN_TERM_MONTHS..=MAX_TERM_MONTHS).contains(months))
            .map(|months| months.to_string())
            .ok_or_else(|| {
                format!("Months must be a whole number between {MIN_TERM_MONTHS} and {MAX_TERM_MONTHS}")
            })
    }))
}

/// Month by English name, three-letter abbreviation, or number.
pub fn parse_month(input: &str) -> Option<Month> {
    let trimmed = input.trim();
    if let Ok(number) = trimmed.parse::<u8>() {
        return Month::try_from(number).ok();
    }
    trimmed.parse::<Month>().ok()
}

pub fn month_names() -> Vec<String> {
    (1..=12u8)
        .filter_map(|number| Month::try_from(number).ok())
        .map(|month| month.name().to_string())
        .collect()
}

/// Name, category, budget and spend for the activity pages.
pub struct ActivityForm {
    descriptor: FormDescriptor,
}

impl Default for ActivityForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityForm {
    pub fn new() -> Self {
        let fields = vec![
            FieldDescriptor::new("name", "Activity name", FieldKind::Text, name_validator()),
            FieldDescriptor::new(
                "category",
                "Category",
                FieldKind::Choice(ActivityCategory::labels()),
                category_validator(),
            )
            .with_help("Pick a label or its number from the list."),
            FieldDescriptor::new("budget", "Budget", FieldKind::Decimal, amount_validator()),
            FieldDescriptor::new(
                "actual_spend",
                "Actual spend",
                FieldKind::Decimal,
                amount_validator(),
            ),
        ];
        Self {
            descriptor: FormDescriptor::new("activity", fields),
        }
    }
}

impl FormFlow for ActivityForm {
    type Output = Activity;

    fn descriptor(&self) -> &FormDescriptor {
        &self.descriptor
    }

    fn defaults(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(
            "category".to_string(),
            ActivityCategory::default().label().to_string(),
        )])
    }

    fn commit(&self, values: &BTreeMap<String, String>) -> Result<Activity, ValidationError> {
        let category = ActivityCategory::from_str(required(values, "category")?)
            .map_err(|err| ValidationError::new(err.to_string()))?;
        Ok(Activity::new(
            required(values, "name")?,
            category,
            parse_number(values, "budget")?,
            parse_number(values, "actual_spend")?,
        ))
    }
}

pub struct ReturnForm {
    descriptor: FormDescriptor,
}

impl Default for ReturnForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ReturnForm {
    pub fn new() -> Self {
        let fields = vec![
            FieldDescriptor::new("name", "Activity name", FieldKind::Text, name_validator()),
            FieldDescriptor::new("budget", "Amount invested", FieldKind::Decimal, amount_validator()),
        ];
        Self {
            descriptor: FormDescriptor::new("return", fields),
        }
    }
}

impl FormFlow for ReturnForm {
    type Output = ReturnActivity;

    fn descriptor(&self) -> &FormDescriptor {
        &self.descriptor
    }

    fn commit(&self, values: &BTreeMap<String, String>) -> Result<ReturnActivity, ValidationError> {
        Ok(ReturnActivity::new(
            required(values, "name")?,
            parse_number(values, "budget")?,
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetCheckInput {
    pub month: Month,
    pub budget: f64,
    pub spend: f64,
}

/// Month, budget and spend, prefilled from the current check values.
pub struct BudgetCheckForm {
    descriptor: FormDescriptor,
    current: BudgetCheckInput,
}

impl BudgetCheckForm {
    pub fn new(state: &BudgetCheckState) -> Self {
        let fields = vec![
            FieldDescriptor::new(
                "month",
                "Month",
                FieldKind::Choice(month_names()),
                month_validator(),
            ),
            FieldDescriptor::new("budget", "Budget", FieldKind::Decimal, amount_validator()),
            FieldDescriptor::new("spend", "Spend", FieldKind::Decimal, amount_validator()),
        ];
        Self {
            descriptor: FormDescriptor::new("budget check", fields),
            current: BudgetCheckInput {
                month: state.month,
                budget: state.budget,
                spend: state.spend,
            },
        }
    }
}

impl FormFlow for BudgetCheckForm {
    type Output = BudgetCheckInput;

    fn descriptor(&self) -> &FormDescriptor {
        &self.descriptor
    }

    fn defaults(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("month".to_string(), self.current.month.name().to_string()),
            ("budget".to_string(), self.current.budget.to_string()),
            ("spend".to_string(), self.current.spend.to_string()),
        ])
    }

    fn commit(&self, values: &BTreeMap<String, String>) -> Result<BudgetCheckInput, ValidationError> {
        let month = parse_month(required(values, "month")?)
            .ok_or_else(|| ValidationError::new("Unknown month"))?;
        Ok(BudgetCheckInput {
            month,
            budget: parse_number(values, "budget")?,
            spend: parse_number(values, "spend")?,
        })
    }
}

/// Rate percentage and term for one return projection.
pub struct ProjectionForm {
    descriptor: FormDescriptor,
    default_rate_percent: f64,
    default_term_months: u32,
}

impl ProjectionForm {
    pub fn new(default_rate_percent: f64, default_term_months: u32) -> Self {
        let fields = vec![
            FieldDescriptor::new("rate", "Rate (%)", FieldKind::Decimal, rate_validator())
                .with_help("Applied to every record, e.g. 5 for 5% per month."),
            FieldDescriptor::new("months", "Months", FieldKind::Integer, term_validator()),
        ];
        Self {
            descriptor: FormDescriptor::new("projection", fields),
            default_rate_percent,
            default_term_months,
        }
    }
}

impl FormFlow for ProjectionForm {
    type Output = ProjectionParams;

    fn descriptor(&self) -> &FormDescriptor {
        &self.descriptor
    }

    fn defaults(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("rate".to_string(), self.default_rate_percent.to_string()),
            ("months".to_string(), self.default_term_months.to_string()),
        ])
    }

    fn commit(&self, values: &BTreeMap<String, String>) -> Result<ProjectionParams, ValidationError> {
        ProjectionParams::from_percent(parse_number(values, "rate")?, parse_number(values, "months")?)
            .map_err(|err| ValidationError::new(err.to_string()))
    }
}

/// Terminal-backed interaction used by the interactive shell.
pub struct WizardInteraction;

impl FormInteraction for WizardInteraction {
    fn prompt_field(&mut self, context: &PromptContext<'_>) -> PromptResponse {
        if let Some(message) = context.error {
            io::print_warning(message);
        }
        if context.show_help {
            io::print_hint(
                context
                    .field
                    .help
                    .unwrap_or("Type a value, `:back` for the previous field or `:cancel` to stop."),
            );
        }

        let label = format!("[{}/{}] {}", context.position, context.total, context.field.label);
        match &context.field.kind {
            FieldKind::Choice(options) => {
                match choice_menu(&label, options, context.default, context.position > 1) {
                    Ok(ChoicePromptResult::Value(value)) => PromptResponse::Value(value),
                    Ok(ChoicePromptResult::Back) => PromptResponse::Back,
                    Ok(ChoicePromptResult::Cancel) | Err(_) => PromptResponse::Cancel,
                }
            }
            FieldKind::Text | FieldKind::Decimal | FieldKind::Integer => {
                match text_input(&label, context.default) {
                    Ok(TextPromptResult::Value(value)) => PromptResponse::Value(value),
                    Ok(TextPromptResult::Keep) => PromptResponse::Keep,
                    Ok(TextPromptResult::Back) => PromptResponse::Back,
                    Ok(TextPromptResult::Help) => PromptResponse::Help,
                    Ok(TextPromptResult::Cancel) | Err(_) => PromptResponse::Cancel,
                }
            }
        }
    }

    fn confirm(&mut self, summary: &[String]) -> ConfirmationResponse {
        match confirm_menu(summary) {
            Ok(ConfirmationPromptResult::Confirm) => ConfirmationResponse::Confirm,
            Ok(ConfirmationPromptResult::Back) => ConfirmationResponse::Back,
            Ok(ConfirmationPromptResult::Cancel) | Err(_) => ConfirmationResponse::Cancel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct MockInteraction {
        prompts: VecDeque<PromptResponse>,
        confirmations: VecDeque<ConfirmationResponse>,
        errors_seen: Vec<String>,
        help_requests: usize,
    }

    impl MockInteraction {
        fn new(prompts: Vec<PromptResponse>, confirmations: Vec<ConfirmationResponse>) -> Self {
            Self {
                prompts: prompts.into(),
                confirmations: confirmations.into(),
                errors_seen: Vec::new(),
                help_requests: 0,
            }
        }
    }

    impl FormInteraction for MockInteraction {
        fn prompt_field(&mut self, context: &PromptContext<'_>) -> PromptResponse {
            if let Some(error) = context.error {
                self.errors_seen.push(error.to_string());
            }
            if context.show_help {
                self.help_requests += 1;
            }
            self.prompts.pop_front().unwrap_or(PromptResponse::Cancel)
        }

        fn confirm(&mut self, _summary: &[String]) -> ConfirmationResponse {
            self.confirmations
                .pop_front()
                .unwrap_or(ConfirmationResponse::Confirm)
        }
    }

    fn value(text: &str) -> PromptResponse {
        PromptResponse::Value(text.into())
    }

    #[test]
    fn activity_wizard_completes() {
        let form = ActivityForm::new();
        let mut interaction = MockInteraction::new(
            vec![value("  Rent "), value("housing"), value("1200"), value("1250.5")],
            vec![ConfirmationResponse::Confirm],
        );
        let result = FormEngine::new(&form).run(&mut interaction);
        let FormResult::Completed(activity) = result else {
            panic!("wizard did not complete");
        };
        assert_eq!(activity.name, "Rent");
        assert_eq!(activity.category, ActivityCategory::Housing);
        assert_eq!(activity.budget, 1200.0);
        assert_eq!(activity.actual_spend, 1250.5);
    }

    #[test]
    fn invalid_values_are_reprompted() {
        let form = ActivityForm::new();
        let mut interaction = MockInteraction::new(
            vec![
                value("   "),
                value("Food"),
                PromptResponse::Keep,
                value("-5"),
                value("50"),
                value("20"),
            ],
            vec![ConfirmationResponse::Confirm],
        );
        let result = FormEngine::new(&form).run(&mut interaction);
        assert!(matches!(result, FormResult::Completed(_)));
        assert_eq!(
            interaction.errors_seen,
            ["Enter the activity name.", "Amount must be zero or positive"]
        );
    }

    #[test]
    fn back_help_and_cancel_are_honoured() {
        let form = ReturnForm::new();
        let mut interaction = MockInteraction::new(
            vec![
                value("Deposit"),
                PromptResponse::Back,
                PromptResponse::Help,
                value("Bond"),
                PromptResponse::Cancel,
            ],
            vec![],
        );
        let result = FormEngine::new(&form).run(&mut interaction);
        assert_eq!(result, FormResult::Cancelled);
        assert_eq!(interaction.help_requests, 1);
    }

    #[test]
    fn confirmation_back_returns_to_last_field() {
        let form = ReturnForm::new();
        let mut interaction = MockInteraction::new(
            vec![value("Deposit"), value("100"), value("250")],
            vec![ConfirmationResponse::Back, ConfirmationResponse::Confirm],
        );
        let FormResult::Completed(record) = FormEngine::new(&form).run(&mut interaction) else {
            panic!("wizard did not complete");
        };
        assert_eq!(record.budget, 250.0);
    }

    #[test]
    fn positional_arguments_use_the_same_validators() {
        let form = ActivityForm::new();
        let engine = FormEngine::new(&form);

        let activity = engine.from_args(&["Bus", "7", "40", "35"]).unwrap();
        assert_eq!(activity.category, ActivityCategory::Transport);

        let err = engine.from_args(&["", "Food", "1", "1"]).unwrap_err();
        assert!(err.message.contains("Enter the activity name."));

        let err = engine.from_args(&["Bus"]).unwrap_err();
        assert!(err.message.contains("Missing value for Budget"));

        assert!(engine.from_args(&["a", "Food", "1", "1", "extra"]).is_err());

        let err = engine.from_args(&["a", "Food", "1e308", "1"]).unwrap_err();
        assert!(err.message.contains("must not exceed"));
    }

    #[test]
    fn projection_form_defaults_apply_without_arguments() {
        let form = ProjectionForm::new(5.0, 12);
        let engine = FormEngine::new(&form);
        let params = engine.from_args(&[]).unwrap();
        assert_eq!(params.term_months(), 12);
        assert!((params.rate() - 0.05).abs() < 1e-12);

        let params = engine.from_args(&["10%", "6"]).unwrap();
        assert_eq!(params.term_months(), 6);
        assert!(engine.from_args(&["150", "6"]).is_err());
        assert!(engine.from_args(&["5", "61"]).is_err());
    }

    #[test]
    fn budget_check_form_parses_months() {
        let state = BudgetCheckState::default();
        let form = BudgetCheckForm::new(&state);
        let engine = FormEngine::new(&form);
        let input = engine.from_args(&["mar", "200", "250"]).unwrap();
        assert_eq!(input.month, Month::March);
        let input = engine.from_args(&["12"]).unwrap();
        assert_eq!(input.month, Month::December);
        assert_eq!(input.budget, 1000.0);
        assert!(engine.from_args(&["13"]).is_err());
    }
}
