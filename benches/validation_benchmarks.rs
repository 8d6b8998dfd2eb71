use authform::fields::*;
use authform::*;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn registration_values() -> FieldValues {
    FieldValues::new()
        .with(USERNAME, "ana_01")
        .with(EMAIL, "ana@example.com")
        .with(PHONE, "612345678")
        .with(PASSWORD, "Abc123@")
        .with(CONFIRM_PASSWORD, "Abc123@")
        .with_flag(TERMS_ACCEPTED, true)
}

fn bench_field_validators(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_validators");

    group.bench_function("login_email", |b| {
        b.iter(|| IsLoginEmail::is_valid(black_box("  Ana@Example.com ")))
    });

    group.bench_function("registration_email", |b| {
        b.iter(|| IsEmail::is_valid(black_box("first.last+tag@mail.example.org")))
    });

    group.bench_function("phone_digits", |b| {
        let phone = Matches::digits(9).unwrap();
        b.iter(|| phone.is_valid(black_box("612345678")))
    });

    group.bench_function("password_strength", |b| {
        let strength = PasswordStrength::default();
        b.iter(|| strength.missing(black_box("abc123")))
    });

    group.finish();
}

fn bench_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("forms");
    let policy = FormPolicy::default();

    let registration = FormKind::Registration.validator(&policy).unwrap();
    let valid = registration_values();
    let empty = FieldValues::new();

    group.bench_function("registration_valid", |b| {
        b.iter(|| registration.validate_form(black_box(&valid)))
    });

    group.bench_function("registration_empty", |b| {
        b.iter(|| registration.validate_form(black_box(&empty)))
    });

    group.bench_function("registration_single_field", |b| {
        b.iter(|| registration.validate_field(black_box(CONFIRM_PASSWORD), black_box(&valid)))
    });

    let login = FormKind::Login.validator(&policy).unwrap();
    let credentials = FieldValues::new()
        .with(USERNAME, "ana@example.com")
        .with(PASSWORD, "secret");

    group.bench_function("login_valid", |b| {
        b.iter(|| login.validate_form(black_box(&credentials)))
    });

    group.bench_function("build_registration_rules", |b| {
        b.iter(|| registration_rules(black_box(&policy)).unwrap())
    });

    group.finish();
}

criterion_group!(validation_benches, bench_field_validators, bench_forms);

criterion_main!(validation_benches);
