use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kundali::form::validate;
use kundali::places::normalize_suggestions;
use kundali::{ChartStyle, FlowController, FlowEvent, FormDraft, Gender, Language};
use serde_json::{json, Value};

fn valid_draft() -> FormDraft {
  FormDraft {
    name: "Asha Rao".to_string(),
    email: "asha@example.com".to_string(),
    gender: Some(Gender::Female),
    birth_date: chrono::NaiveDate::from_ymd_opt(1993, 4, 12),
    birth_time: chrono::NaiveTime::from_hms_opt(6, 45, 0),
    birth_place: "Mysuru, Karnataka, India".to_string(),
    language: Language::English,
    chart_style: ChartStyle::NorthIndian,
  }
}

fn predictions_payload(entries: usize) -> Value {
  let list: Vec<Value> = (0..entries)
    .map(|i| json!({ "description": format!("Place number {i}, Some State, India") }))
    .collect();
  json!({ "predictions": list })
}

fn bench_validation(c: &mut Criterion) {
  let mut group = c.benchmark_group("FormValidation");

  let valid = valid_draft();
  group.bench_function("valid_draft", |b| b.iter(|| validate(&valid)));

  let mut invalid = valid_draft();
  invalid.email = "not-an-email".to_string();
  invalid.birth_place.clear();
  group.bench_function("invalid_draft", |b| b.iter(|| validate(&invalid)));

  group.finish();
}

fn bench_normalization(c: &mut Criterion) {
  let mut group = c.benchmark_group("SuggestionNormalization");

  for entries in [1usize, 5, 25].iter() {
    let payload = predictions_payload(*entries);
    group.throughput(Throughput::Elements(*entries as u64));
    group.bench_with_input(BenchmarkId::from_parameter(entries), &payload, |b, payload| {
      b.iter(|| normalize_suggestions(payload))
    });
  }

  group.finish();
}

fn bench_flow_dispatch(c: &mut Criterion) {
  c.bench_function("flow_full_cycle", |b| {
    b.iter(|| {
      let mut controller = FlowController::new();
      controller.dispatch(FlowEvent::Next);
      controller.dispatch(FlowEvent::PaymentFailed);
      controller.dispatch(FlowEvent::Retry);
      controller.dispatch(FlowEvent::PaymentSucceeded);
      controller.dispatch(FlowEvent::NewOrder);
      controller.stage()
    })
  });
}

criterion_group!(benches, bench_validation, bench_normalization, bench_flow_dispatch);
criterion_main!(benches);
