use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::animated::{AnimatedSection, RevealKind};

pub const INSURANCE_TYPES: &[&str] = &[
    "Auto Insurance",
    "Home Insurance",
    "Renters Insurance",
    "Umbrella Insurance",
    "Multiple Policies",
    "Other",
];

/// Transient form state, mutated on every keystroke and reset to empty on a
/// successful submit.
#[derive(Clone, PartialEq, Default)]
pub struct QuoteFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub insurance_type: String,
    pub message: String,
}

/// Field-scoped validation messages. Recomputed wholesale on each submit
/// attempt and cleared per-field while the user edits. The optional message
/// field has no entry here because it can never fail.
#[derive(Clone, PartialEq, Default)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub insurance_type: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn count(&self) -> usize {
        [&self.name, &self.email, &self.phone, &self.insurance_type]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

/// `local@domain.tld` shape: no whitespace, a single `@`, and a dot inside
/// the domain with content on both sides of it.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn eat_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, n: usize) -> bool {
    for _ in 0..n {
        match chars.next() {
            Some(c) if c.is_ascii_digit() => {}
            _ => return false,
        }
    }
    true
}

fn eat_separator(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    if matches!(chars.peek(), Some('-' | '.' | ' ')) {
        chars.next();
    }
}

/// 10-digit North-American number with optional parentheses around the area
/// code and an optional dash, dot, or space between groups.
pub(crate) fn is_valid_phone(phone: &str) -> bool {
    let mut chars = phone.chars().peekable();
    if matches!(chars.peek(), Some('(')) {
        chars.next();
    }
    if !eat_digits(&mut chars, 3) {
        return false;
    }
    if matches!(chars.peek(), Some(')')) {
        chars.next();
    }
    eat_separator(&mut chars);
    if !eat_digits(&mut chars, 3) {
        return false;
    }
    eat_separator(&mut chars);
    if !eat_digits(&mut chars, 4) {
        return false;
    }
    chars.next().is_none()
}

/// Progressive `(ddd) ddd-dddd` rendering of whatever digits the input holds,
/// truncated to 10. Idempotent over its own output.
pub(crate) fn format_phone(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(10)
        .collect();
    match digits.len() {
        0 => String::new(),
        1..=3 => format!("({digits}"),
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// All rules evaluated together; fields are not validated individually until
/// the first submit attempt.
pub(crate) fn validate(data: &QuoteFormData) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if data.name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }

    if data.email.trim().is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !is_valid_email(&data.email) {
        errors.email = Some("Please enter a valid email address".to_string());
    }

    if data.phone.trim().is_empty() {
        errors.phone = Some("Phone number is required".to_string());
    } else if !is_valid_phone(&data.phone) {
        errors.phone = Some("Please enter a valid phone number".to_string());
    }

    if data.insurance_type.is_empty() {
        errors.insurance_type = Some("Please select an insurance type".to_string());
    }

    errors
}

fn field_error(message: &Option<String>) -> Html {
    match message {
        Some(message) => html! { <p class="field-error">{ message.clone() }</p> },
        None => html! {},
    }
}

fn input_class(error: &Option<String>) -> &'static str {
    if error.is_some() {
        "field-input field-input-error"
    } else {
        "field-input"
    }
}

/// Lead-capture form with simulated submission: a valid submit disables the
/// control for a fixed 2 s delay and then clears the form. Nothing is sent
/// anywhere; delivery is a stubbed external collaborator.
#[function_component(QuoteForm)]
pub fn quote_form() -> Html {
    let data = use_state(QuoteFormData::default);
    let errors = use_state(FieldErrors::default);
    let submitting = use_state_eq(|| false);
    let submitted = use_state_eq(|| false);

    let on_name = {
        let data = data.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*data).clone();
            next.name = input.value();
            data.set(next);
            if errors.name.is_some() {
                let mut next = (*errors).clone();
                next.name = None;
                errors.set(next);
            }
        })
    };
    let on_email = {
        let data = data.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*data).clone();
            next.email = input.value();
            data.set(next);
            if errors.email.is_some() {
                let mut next = (*errors).clone();
                next.email = None;
                errors.set(next);
            }
        })
    };
    let on_phone = {
        let data = data.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*data).clone();
            next.phone = format_phone(&input.value());
            data.set(next);
            if errors.phone.is_some() {
                let mut next = (*errors).clone();
                next.phone = None;
                errors.set(next);
            }
        })
    };
    let on_type = {
        let data = data.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*data).clone();
            next.insurance_type = select.value();
            data.set(next);
            if errors.insurance_type.is_some() {
                let mut next = (*errors).clone();
                next.insurance_type = None;
                errors.set(next);
            }
        })
    };
    let on_message = {
        let data = data.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*data).clone();
            next.message = area.value();
            data.set(next);
        })
    };

    let on_submit = {
        let data = data.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let found = validate(&data);
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::default());
            submitting.set(true);
            log!("Quote request validated, simulating submission");
            let data = data.clone();
            let submitting = submitting.clone();
            let submitted = submitted.clone();
            spawn_local(async move {
                // Stand-in for the delivery round trip.
                TimeoutFuture::new(2_000).await;
                submitting.set(false);
                submitted.set(true);
                data.set(QuoteFormData::default());
            });
        })
    };

    let form_style = r#"
        .quote-form {
            background: #fff;
            border-radius: 16px;
            box-shadow: 0 8px 24px rgba(15, 30, 80, 0.1);
            padding: 2.5rem;
        }
        .quote-form h3 { font-size: 1.6rem; margin-bottom: 0.5rem; }
        .quote-form .intro { color: #55607a; margin-bottom: 1.5rem; }
        .field-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
        @media (max-width: 767px) { .field-row { grid-template-columns: 1fr; } }
        .field { margin-bottom: 1.5rem; }
        .field label { display: block; font-size: 0.9rem; font-weight: 500; margin-bottom: 0.5rem; }
        .field .required { color: #dc2626; }
        .field-input {
            width: 100%;
            padding: 0.8rem 1rem;
            border: 1px solid #d4d8e3;
            border-radius: 10px;
            font: inherit;
            transition: border-color 0.2s ease;
        }
        .field-input:focus { outline: 2px solid #2563eb; border-color: #2563eb; }
        .field-input-error { border-color: #fca5a5; }
        .field-error { color: #dc2626; font-size: 0.85rem; margin-top: 0.35rem; }
        .submit-btn {
            width: 100%;
            background: #1d4ed8;
            color: #fff;
            padding: 1.1rem;
            border-radius: 10px;
            font-weight: 600;
            font-size: 1.1rem;
            transition: background 0.2s ease;
        }
        .submit-btn:hover { background: #1e40af; }
        .submit-btn:disabled { opacity: 0.5; cursor: not-allowed; }
        .submit-spinner {
            display: inline-block;
            width: 1.1rem; height: 1.1rem;
            border: 2px solid #fff;
            border-bottom-color: transparent;
            border-radius: 50%;
            margin-right: 0.5rem;
            vertical-align: middle;
            animation: submit-spin 1s linear infinite;
        }
        @keyframes submit-spin { to { transform: rotate(360deg); } }
        .submit-confirmation {
            background: #f0fdf4;
            border: 1px solid #bbf7d0;
            border-radius: 16px;
            padding: 2.5rem;
            text-align: center;
        }
        .submit-confirmation .check { font-size: 3rem; color: #16a34a; margin-bottom: 1rem; }
        .submit-confirmation h3 { color: #166534; margin-bottom: 0.5rem; }
        .submit-confirmation p { color: #15803d; }
        .submit-confirmation button {
            margin-top: 1rem;
            color: #1d4ed8;
            font-weight: 500;
        }
        .submit-confirmation button:hover { color: #1e40af; }
    "#;

    if *submitted {
        let on_reset = {
            let submitted = submitted.clone();
            Callback::from(move |_: MouseEvent| submitted.set(false))
        };
        return html! {
            <AnimatedSection kind={RevealKind::Scale}>
                <style>{form_style}</style>
                <div class="submit-confirmation">
                    <div class="check" aria-hidden="true">{"\u{2713}"}</div>
                    <h3>{"Thank you for your request!"}</h3>
                    <p>{"I'll review your information and get back to you within 24 hours with a personalized quote."}</p>
                    <button onclick={on_reset}>{"Submit another request"}</button>
                </div>
            </AnimatedSection>
        };
    }

    html! {
        <div class="quote-form">
            <style>{form_style}</style>
            <AnimatedSection kind={RevealKind::FadeUp}>
                <h3>{"Get Your Free Quote"}</h3>
                <p class="intro">
                    {"Fill out the form below and I'll provide you with a personalized insurance quote within 24 hours."}
                </p>
            </AnimatedSection>
            <form onsubmit={on_submit} novalidate=true>
                <div class="field-row">
                    <div class="field">
                        <label for="name">
                            {"Full Name "}<span class="required" aria-label="required">{"*"}</span>
                        </label>
                        <input
                            type="text"
                            id="name"
                            class={input_class(&errors.name)}
                            value={data.name.clone()}
                            oninput={on_name}
                            placeholder="Enter your full name"
                            required=true
                        />
                        { field_error(&errors.name) }
                    </div>
                    <div class="field">
                        <label for="email">
                            {"Email Address "}<span class="required" aria-label="required">{"*"}</span>
                        </label>
                        <input
                            type="email"
                            id="email"
                            class={input_class(&errors.email)}
                            value={data.email.clone()}
                            oninput={on_email}
                            placeholder="your@email.com"
                            required=true
                        />
                        { field_error(&errors.email) }
                    </div>
                </div>
                <div class="field-row">
                    <div class="field">
                        <label for="phone">
                            {"Phone Number "}<span class="required" aria-label="required">{"*"}</span>
                        </label>
                        <input
                            type="tel"
                            id="phone"
                            class={input_class(&errors.phone)}
                            value={data.phone.clone()}
                            oninput={on_phone}
                            placeholder="(650) 555-1234"
                            required=true
                        />
                        { field_error(&errors.phone) }
                    </div>
                    <div class="field">
                        <label for="insurance-type">
                            {"Insurance Type "}<span class="required" aria-label="required">{"*"}</span>
                        </label>
                        <select
                            id="insurance-type"
                            class={input_class(&errors.insurance_type)}
                            onchange={on_type}
                            required=true
                        >
                            <option value="" selected={data.insurance_type.is_empty()}>
                                {"Select insurance type"}
                            </option>
                            { for INSURANCE_TYPES.iter().map(|t| html! {
                                <option value={*t} selected={data.insurance_type == *t}>{ *t }</option>
                            }) }
                        </select>
                        { field_error(&errors.insurance_type) }
                    </div>
                </div>
                <div class="field">
                    <label for="message">{"Additional Information"}</label>
                    <textarea
                        id="message"
                        class="field-input"
                        rows="4"
                        value={data.message.clone()}
                        oninput={on_message}
                        placeholder="Tell me about your insurance needs, current coverage, or any questions you have..."
                    />
                </div>
                <button type="submit" class="submit-btn" disabled={*submitting}>
                    if *submitting {
                        <span class="submit-spinner" aria-hidden="true"></span>
                        {"Sending..."}
                    } else {
                        {"Get My Free Quote"}
                    }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{
        format_phone, is_valid_email, is_valid_phone, validate, FieldErrors, QuoteFormData,
    };

    fn filled() -> QuoteFormData {
        QuoteFormData {
            name: "Sarah Chen".to_string(),
            email: "sarah@example.com".to_string(),
            phone: "(650) 555-1234".to_string(),
            insurance_type: "Auto Insurance".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn empty_submit_yields_exactly_four_errors() {
        let errors = validate(&QuoteFormData::default());
        assert_eq!(errors.count(), 4);
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.phone.is_some());
        assert!(errors.insurance_type.is_some());
    }

    #[test]
    fn message_never_errors() {
        let mut data = QuoteFormData::default();
        data.message = "x".repeat(10_000);
        assert_eq!(validate(&data).count(), 4);

        let mut data = filled();
        data.message = String::new();
        assert!(validate(&data).is_empty());
    }

    #[test]
    fn minimal_valid_email_passes_with_the_rest_filled() {
        let mut data = filled();
        data.email = "a@b.c".to_string();
        assert!(validate(&data).is_empty());
    }

    #[test]
    fn whitespace_only_name_fails() {
        let mut data = filled();
        data.name = "   ".to_string();
        assert_eq!(validate(&data).count(), 1);
        assert!(validate(&data).name.is_some());
    }

    #[test]
    fn email_shape_rules() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.example.com"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("no at@domain.com"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("nodot@domain"));
        assert!(!is_valid_email("trailing@domain."));
    }

    #[test]
    fn phone_shape_rules() {
        assert!(is_valid_phone("6505551234"));
        assert!(is_valid_phone("(650) 555-1234"));
        assert!(is_valid_phone("650-555-1234"));
        assert!(is_valid_phone("650.555.1234"));
        assert!(is_valid_phone("(650)5551234"));
        assert!(!is_valid_phone("650555123"));
        assert!(!is_valid_phone("65055512345"));
        assert!(!is_valid_phone("(650) 555-12a4"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn phone_formats_into_the_expected_bucket_per_digit_count() {
        let digits = "6505551234";
        for n in 0..=10 {
            let formatted = format_phone(&digits[..n]);
            match n {
                0 => assert_eq!(formatted, ""),
                1..=3 => assert_eq!(formatted, format!("({}", &digits[..n])),
                4..=6 => assert_eq!(
                    formatted,
                    format!("({}) {}", &digits[..3], &digits[3..n])
                ),
                _ => assert_eq!(
                    formatted,
                    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..n])
                ),
            }
        }
    }

    #[test]
    fn phone_formatting_is_idempotent() {
        for raw in ["", "6", "650", "65055", "650555", "65055512", "6505551234"] {
            let once = format_phone(raw);
            assert_eq!(format_phone(&once), once);
        }
    }

    #[test]
    fn phone_formatting_strips_junk_and_truncates_to_ten_digits() {
        assert_eq!(format_phone("650-555-1234 ext 99"), "(650) 555-1234");
        assert_eq!(format_phone("abc650def555ghi1234"), "(650) 555-1234");
    }

    #[test]
    fn field_errors_counts_only_set_fields() {
        let errors = FieldErrors {
            email: Some("bad".to_string()),
            ..FieldErrors::default()
        };
        assert_eq!(errors.count(), 1);
        assert!(!errors.is_empty());
        assert!(FieldErrors::default().is_empty());
    }
}
