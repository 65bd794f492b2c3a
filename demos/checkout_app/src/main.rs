// demos/checkout_app/src/main.rs

// Terminal rendition of the checkout wizard: the same flow the storefront
// runs, driven from stdin, with a scripted widget standing in for the
// gateway embed.

mod console;
mod gateway;

use crate::gateway::{ScriptedOutcome, ScriptedWidget};
use kundali::{
  Autocomplete, CheckoutStore, FailureStage, FlowConfig, FlowController, FlowEvent, FormCapture,
  PaymentClient, PlacesClient, ReviewStage, Stage, SuccessStage,
};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting the checkout wizard...");

  let config = match FlowConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load configuration.");
      panic!("Configuration error: {e}");
    }
  };

  let store = CheckoutStore::in_memory();
  let payment_client = Arc::new(PaymentClient::from_config(&config));
  let places_client = Arc::new(PlacesClient::from_config(&config));
  let mut controller = FlowController::new();

  loop {
    match controller.stage() {
      Stage::Form => {
        if run_form_stage(&store, &config, Arc::clone(&places_client)).await {
          controller.dispatch(FlowEvent::Next);
        } else {
          break; // User quit from the form.
        }
      }
      Stage::Review => {
        let event = run_review_stage(&store, &config, Arc::clone(&payment_client)).await;
        controller.dispatch(event);
      }
      Stage::Success => {
        let success = SuccessStage::enter(store.clone(), &config);
        println!();
        println!("{}", success.receipt(chrono::Local::now().date_naive()));
        if console::ask_yes_no("Start a new order?") {
          success.start_new_order();
          controller.dispatch(FlowEvent::NewOrder);
        } else {
          break;
        }
      }
      Stage::Failure => {
        let failure = FailureStage::enter(store.clone());
        println!();
        println!("{}", failure.support_notice());
        if console::ask_yes_no("Retry the payment?") {
          controller.dispatch(FlowEvent::Retry);
        } else if console::ask_yes_no("Start a new order?") {
          failure.start_new_order();
          controller.dispatch(FlowEvent::NewOrder);
        } else {
          break;
        }
      }
    }
  }

  tracing::info!("Checkout wizard finished.");
}

/// Runs form capture until a submission passes validation. Returns false if
/// the user abandons the wizard.
async fn run_form_stage(store: &CheckoutStore, config: &FlowConfig, places: Arc<PlacesClient>) -> bool {
  println!();
  println!("=== Your Cosmic Blueprint ===");
  let mut capture = FormCapture::enter(store.clone(), config.submit_delay);

  loop {
    capture.set_name(console::ask("Full name"));
    capture.set_email(console::ask("Email address"));
    if let Some(gender) = console::ask_gender() {
      capture.set_gender(gender);
    }
    if let Some(date) = console::ask_date("Birth date") {
      capture.set_birth_date(date);
    }
    if let Some(time) = console::ask_time("Birth time") {
      capture.set_birth_time(time);
    }
    capture.set_birth_place(pick_birth_place(Arc::clone(&places), config).await);
    capture.set_language(console::ask_language());
    capture.set_chart_style(console::ask_chart_style());

    match capture.submit().await {
      Ok(_) => return true,
      Err(e) => {
        println!();
        println!("{e}");
        for (field, message) in capture.errors().iter() {
          println!("  {field}: {message}");
        }
        if !console::ask_yes_no("Correct the form and try again?") {
          return false;
        }
      }
    }
  }
}

/// Free-text birth place with live suggestions from the places endpoint.
async fn pick_birth_place(places: Arc<PlacesClient>, config: &FlowConfig) -> String {
  let mut feed = Autocomplete::new(places, config.places_debounce);
  let typed = console::ask("Birth place (we will look it up)");
  feed.input(&typed);

  // Let the quiet period elapse and the lookup land.
  tokio::time::sleep(config.places_debounce + std::time::Duration::from_millis(700)).await;

  let state = feed.state();
  let (suggestions, error) = {
    let guard = state.read();
    (guard.suggestions.clone(), guard.error.clone())
  };

  if let Some(message) = error {
    println!("  ({message})");
  }
  if suggestions.is_empty() {
    return typed;
  }

  println!("  Suggestions:");
  for (i, s) in suggestions.iter().enumerate() {
    println!("    {i}: {}", s.description);
  }
  let choice = console::ask("Pick a number (empty keeps what you typed)");
  match choice.parse::<usize>().ok().and_then(|i| feed.select(i)) {
    Some(description) => description,
    None => typed,
  }
}

/// One entry into the review stage. Returns the flow event to dispatch.
async fn run_review_stage(
  store: &CheckoutStore,
  config: &FlowConfig,
  client: Arc<PaymentClient>,
) -> FlowEvent {
  let widget = Arc::new(ScriptedWidget::new(ScriptedOutcome::from_env()));
  let mut review = ReviewStage::enter(store.clone(), client, widget, config);

  let Some(form) = review.form().cloned() else {
    println!();
    println!("No saved order data found. Returning to the form.");
    return FlowEvent::Back;
  };
  console::print_summary(&form, config.order_amount, &config.order_currency);

  if !console::ask_yes_no("I consent to the processing of my birth details") {
    println!("Payment stays disabled without consent.");
    return FlowEvent::Back;
  }
  review.set_consent(true);

  // Consent and the captured record survive failed attempts, so retries
  // stay inside this stage without re-asking anything.
  loop {
    if !console::ask_yes_no(&format!(
      "Pay {} {} now?",
      config.order_amount, config.order_currency
    )) {
      return FlowEvent::Back;
    }

    match review.begin_payment().await {
      Ok(resolution) => match resolution.event() {
        Some(event) => return event,
        None => {
          println!("Payment window closed without completing; nothing was charged.");
        }
      },
      Err(e) => {
        println!();
        println!("{e}");
      }
    }
  }
}
