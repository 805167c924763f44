use super::*;
use gpui::SharedString;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Debug, Eq, PartialEq)]
struct TestError(&'static str);

impl ValidationError for TestError {
    fn message(&self) -> SharedString {
        self.0.into()
    }
}

#[derive(Clone, Debug, PartialEq, contact_form_derive::FormModel)]
struct SignupForm {
    #[form(key = "emailAddress")]
    email: SharedString,
    nickname: SharedString,
    bio: SharedString,
}

fn base_form() -> SignupForm {
    SignupForm {
        email: "user@example.com".into(),
        nickname: "calm".into(),
        bio: "".into(),
    }
}

fn on_change_options() -> FormOptions {
    FormOptions {
        validate_mode: ValidationMode::OnChange,
        ..FormOptions::default()
    }
}

fn register_email_rules(controller: &FormController<SignupForm, TestError>) {
    let fields = SignupForm::fields();
    controller
        .register_field_validator(fields.email(), rules::required(TestError("required")))
        .expect("register required rule");
    controller
        .register_field_validator(fields.email(), rules::email(TestError("invalid email")))
        .expect("register email rule");
}

#[derive(Clone)]
struct PerfForm {
    values: BTreeMap<&'static str, SharedString>,
}

impl FormModel for PerfForm {
    type Fields = ();

    const FIELD_KEYS: &'static [FieldKey] = &[];

    fn fields() -> Self::Fields {}
}

#[derive(Clone, Copy)]
struct MapLens {
    key: &'static str,
}

impl FieldLens<PerfForm> for MapLens {
    type Value = SharedString;

    fn key(self) -> FieldKey {
        FieldKey::new(self.key)
    }

    fn get<'a>(self, model: &'a PerfForm) -> &'a Self::Value {
        model
            .values
            .get(self.key)
            .expect("perf key must exist in model values")
    }

    fn set(self, model: &mut PerfForm, value: Self::Value) {
        model.values.insert(self.key, value);
    }
}

#[test]
fn field_lens_updates_model_and_dirty_state() {
    let controller =
        FormController::<SignupForm, TestError>::new(base_form(), FormOptions::default());
    let fields = SignupForm::fields();

    controller
        .set(fields.email(), "changed@example.com".into())
        .expect("set must succeed");
    let snapshot = controller.snapshot().expect("snapshot must succeed");
    assert!(snapshot.is_dirty);
    assert_eq!(snapshot.model.email, "changed@example.com");

    let email_meta = snapshot
        .field_meta
        .get(&fields.email().key())
        .expect("email meta should exist");
    assert!(email_meta.dirty);

    controller
        .set(fields.email(), "user@example.com".into())
        .expect("restore initial value");
    assert!(!controller.snapshot().expect("snapshot").is_dirty);
}

#[test]
fn validation_mode_controls_when_errors_appear() {
    let fields = SignupForm::fields();
    let on_change = FormController::<SignupForm, TestError>::new(base_form(), on_change_options());
    register_email_rules(&on_change);
    on_change
        .set(fields.email(), "".into())
        .expect("set should trigger validation");
    assert_eq!(
        on_change
            .field_meta(fields.email())
            .expect("field meta")
            .expect("meta exists")
            .errors,
        vec![TestError("required"), TestError("invalid email")]
    );

    let on_submit =
        FormController::<SignupForm, TestError>::new(base_form(), FormOptions::default());
    register_email_rules(&on_submit);
    on_submit
        .set(fields.email(), "".into())
        .expect("set should not trigger validation immediately");
    assert!(
        on_submit
            .field_meta(fields.email())
            .expect("field meta")
            .is_some_and(|meta| meta.errors.is_empty())
    );
    assert!(!on_submit.validate_form().expect("validate form"));
}

#[test]
fn on_blur_mode_validates_when_touched() {
    let fields = SignupForm::fields();
    let controller = FormController::<SignupForm, TestError>::new(
        base_form(),
        FormOptions {
            validate_mode: ValidationMode::OnBlur,
            ..FormOptions::default()
        },
    );
    register_email_rules(&controller);

    controller
        .set(fields.email(), "Doctor@BBC".into())
        .expect("set invalid email");
    assert!(controller.snapshot().expect("snapshot").is_valid);

    controller.touch(fields.email()).expect("touch email");
    assert_eq!(
        controller.first_error().expect("first error"),
        Some(FieldKey::new("emailAddress"))
    );
}

#[test]
fn submit_state_transitions_are_enforced() {
    let fields = SignupForm::fields();
    let controller =
        FormController::<SignupForm, TestError>::new(base_form(), FormOptions::default());
    register_email_rules(&controller);

    let submit_count = Arc::new(AtomicUsize::new(0));

    controller
        .set(fields.email(), "".into())
        .expect("set invalid email");
    {
        let submit_count = submit_count.clone();
        controller
            .submit(move |_model| {
                submit_count.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .expect("submit should return Ok when validation fails");
    }
    assert_eq!(submit_count.load(Ordering::SeqCst), 0);
    let snapshot = controller.snapshot().expect("snapshot");
    assert_eq!(snapshot.submit_state, SubmitState::Failed);
    assert_eq!(snapshot.submit_count, 1);
    assert_eq!(snapshot.submitted, None);

    controller
        .set(fields.email(), "valid@example.com".into())
        .expect("set valid email");
    {
        let submit_count = submit_count.clone();
        controller
            .submit(move |_model| {
                submit_count.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .expect("submit should succeed");
    }
    assert_eq!(submit_count.load(Ordering::SeqCst), 1);
    let snapshot = controller.snapshot().expect("snapshot");
    assert_eq!(snapshot.submit_state, SubmitState::Succeeded);
    assert_eq!(
        snapshot.submitted.map(|model| model.email),
        Some(SharedString::from("valid@example.com"))
    );
}

#[test]
fn rejected_submit_handler_leaves_no_snapshot() {
    let controller =
        FormController::<SignupForm, TestError>::new(base_form(), FormOptions::default());

    let result = controller.submit(|_model| Err(FormError::SubmitRejected("offline".into())));
    assert_eq!(result, Err(FormError::SubmitRejected("offline".into())));

    let snapshot = controller.snapshot().expect("snapshot");
    assert_eq!(snapshot.submit_state, SubmitState::Failed);
    assert!(snapshot.submitted.is_none());
}

#[test]
fn nested_submit_is_rejected_while_submitting() {
    let controller =
        FormController::<SignupForm, TestError>::new(base_form(), FormOptions::default());
    let inner = controller.clone();

    controller
        .submit(move |_model| {
            assert_eq!(inner.submit(|_| Ok(())), Err(FormError::AlreadySubmitting));
            Ok(())
        })
        .expect("outer submit succeeds");
    assert!(controller.submitted().expect("submitted").is_some());
}

#[test]
fn edit_after_submit_follows_submitted_policy() {
    let fields = SignupForm::fields();

    let clearing =
        FormController::<SignupForm, TestError>::new(base_form(), FormOptions::default());
    clearing.submit(|_| Ok(())).expect("submit");
    assert!(clearing.submitted().expect("submitted").is_some());
    clearing
        .set(fields.bio(), "hello".into())
        .expect("edit after submit");
    assert!(clearing.submitted().expect("submitted").is_none());

    let keeping = FormController::<SignupForm, TestError>::new(
        base_form(),
        FormOptions {
            submitted_policy: SubmittedPolicy::KeepUntilSubmit,
            ..FormOptions::default()
        },
    );
    register_email_rules(&keeping);
    keeping.submit(|_| Ok(())).expect("submit");
    keeping
        .set(fields.email(), "".into())
        .expect("edit after submit");
    assert_eq!(
        keeping
            .submitted()
            .expect("submitted")
            .map(|model| model.email),
        Some(SharedString::from("user@example.com"))
    );

    keeping.submit(|_| Ok(())).expect("failing submit");
    assert!(keeping.submitted().expect("submitted").is_none());
}

#[test]
fn reset_to_initial_restores_mounted_state() {
    let fields = SignupForm::fields();
    let controller = FormController::<SignupForm, TestError>::new(base_form(), on_change_options());
    register_email_rules(&controller);

    controller
        .set(fields.email(), "".into())
        .expect("set invalid value");
    controller.submit(|_| Ok(())).expect("failed submit");
    controller.reset_to_initial().expect("reset");

    let snapshot = controller.snapshot().expect("snapshot");
    assert_eq!(snapshot.model, base_form());
    assert_eq!(snapshot.submit_state, SubmitState::Idle);
    assert_eq!(snapshot.submit_count, 0);
    assert!(snapshot.is_valid);
    assert!(!snapshot.is_dirty);
    assert_eq!(controller.first_error().expect("first error"), None);
}

#[test]
fn single_field_update_keeps_other_field_meta_stable() {
    let fields = SignupForm::fields();
    let controller =
        FormController::<SignupForm, TestError>::new(base_form(), FormOptions::default());

    controller
        .set(fields.nickname(), "calm".into())
        .expect("seed nickname meta");
    controller
        .set(fields.email(), "only-email-changed@example.com".into())
        .expect("update email only");

    let snapshot = controller.snapshot().expect("snapshot");
    assert!(
        snapshot
            .field_meta
            .get(&fields.email().key())
            .is_some_and(|meta| meta.dirty)
    );
    assert!(
        snapshot
            .field_meta
            .get(&fields.nickname().key())
            .is_some_and(|meta| !meta.dirty)
    );
}

#[test]
fn error_visibility_requires_touch_or_submit() {
    let fields = SignupForm::fields();
    let controller = FormController::<SignupForm, TestError>::new(base_form(), on_change_options());
    controller
        .register_field_validator(fields.email(), rules::required(TestError("required")))
        .expect("register validator");
    controller
        .register_field_validator(
            fields.nickname(),
            rules::min_chars(5, TestError("too short")),
        )
        .expect("register validator");

    controller
        .set(fields.email(), "".into())
        .expect("set invalid");
    controller
        .set(fields.nickname(), "abc".into())
        .expect("set invalid");
    assert_eq!(
        controller
            .field_error_for_display(fields.email())
            .expect("display error"),
        None
    );

    controller.touch(fields.email()).expect("touch field");
    assert_eq!(
        controller
            .field_error_for_display(fields.email())
            .expect("display error"),
        Some(SharedString::from("required"))
    );
    assert_eq!(
        controller.visible_errors().expect("visible errors"),
        vec![(fields.email().key(), SharedString::from("required"))]
    );

    controller.submit(|_| Ok(())).expect("failed submit");
    assert_eq!(
        controller.visible_errors().expect("visible errors"),
        vec![
            (fields.email().key(), SharedString::from("required")),
            (fields.nickname().key(), SharedString::from("too short")),
        ]
    );
}

#[test]
fn presentation_reports_value_required_and_error() {
    let fields = SignupForm::fields();
    let controller = FormController::<SignupForm, TestError>::new(base_form(), on_change_options());
    register_email_rules(&controller);
    controller
        .register_required_field(fields.email())
        .expect("register required");

    controller
        .set(fields.email(), "Doctor@BBC".into())
        .expect("set invalid");
    controller.touch(fields.email()).expect("touch");

    let presentation = controller.present(fields.email()).expect("present");
    assert_eq!(
        presentation,
        FieldPresentation {
            key: FieldKey::new("emailAddress"),
            value: SharedString::from("Doctor@BBC"),
            required: true,
            error: Some(SharedString::from("invalid email")),
        }
    );

    controller
        .unregister_required_field(fields.email())
        .expect("unregister required");
    assert!(!controller.is_required(fields.email()).expect("is required"));
    assert!(!controller.present(fields.bio()).expect("present").required);
}

#[test]
fn two_hundred_fields_update_invokes_single_validator_path() {
    let keys = (0..200)
        .map(|index| Box::leak(format!("field-{index}").into_boxed_str()) as &'static str)
        .collect::<Vec<_>>();

    let model = PerfForm {
        values: keys
            .iter()
            .map(|key| (*key, SharedString::from("")))
            .collect(),
    };

    let invoke_count = Arc::new(AtomicUsize::new(0));
    let controller = FormController::<PerfForm, TestError>::new(model, on_change_options());

    for key in &keys {
        let counter = invoke_count.clone();
        controller
            .register_field_validator(
                MapLens { key: *key },
                move |_model: &PerfForm, _value: &SharedString| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                },
            )
            .expect("register validator");
    }

    let target = keys[137];
    controller
        .set(MapLens { key: target }, "changed".into())
        .expect("update single field");

    let snapshot = controller.snapshot().expect("snapshot");
    assert_eq!(invoke_count.load(Ordering::SeqCst), 1);
    assert_eq!(snapshot.field_meta.len(), 1);
    assert_eq!(
        snapshot
            .field_meta
            .get(&FieldKey::new(target))
            .expect("target meta")
            .errors
            .len(),
        0
    );
}

#[test]
fn derive_macro_generates_field_lenses() {
    let fields = SignupForm::fields();
    assert_eq!(fields.email().key().as_str(), "emailAddress");
    assert_eq!(fields.nickname().key().as_str(), "nickname");
    assert_eq!(
        SignupForm::FIELD_KEYS,
        &[
            FieldKey::new("emailAddress"),
            FieldKey::new("nickname"),
            FieldKey::new("bio"),
        ]
    );
}
